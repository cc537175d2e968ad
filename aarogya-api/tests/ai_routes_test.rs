use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use aarogya_api::api::routes::create_mock_app;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn symptom_chat_requires_a_message() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request("/api/v1/chat/symptoms", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn symptom_chat_relays_sse_frames_in_order() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/chat/symptoms",
            json!({ "message": "I have a headache" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/event-stream"));

    let body = body_string(response).await;
    let symptom = body.find("Symptom(s)").expect("first token missing");
    let medication = body.find("Medication").expect("second token missing");
    assert!(symptom < medication);
    assert!(body.trim_end().ends_with("data: [DONE]"));
}

#[tokio::test]
async fn support_chat_returns_structured_reply() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/chat/support",
            json!({ "message": "I feel overwhelmed" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let reply: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(reply["assistant"]["name"], "Asha");
    assert!(reply["coping_tips"].is_array());
}

#[tokio::test]
async fn medicine_usage_requires_a_name() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request("/api/v1/medicine-usage", json!({ "message": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn diet_plan_returns_plan_and_wellness_tip() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/plans/diet",
            json!({
                "chronicCondition": "diabetes",
                "temperature": 31.0,
                "mealsPerDay": 3,
                "foodPreference": "vegetarian"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let plan: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(plan["plan"].is_object());
    assert!(plan["wellnessTip"].is_string());
}

#[tokio::test]
async fn meditation_plan_requires_inputs() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request("/api/v1/plans/meditation", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn yoga_plan_returns_an_array() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/plans/yoga",
            json!({
                "time": "morning",
                "temperature": 24.0,
                "duration": 20,
                "plan": "flexibility"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let asanas: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(asanas.is_array());
}

#[tokio::test]
async fn vision_route_rejects_missing_image() {
    let app = create_mock_app();

    let boundary = "X-BOUNDARY";
    let body = format!("--{boundary}--\r\n");

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/vision/calories")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vision_route_analyzes_an_uploaded_image() {
    let app = create_mock_app();

    let boundary = "X-BOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"image\"; filename=\"meal.jpg\"\r\n\
         Content-Type: image/jpeg\r\n\r\n\
         JPEGDATA\r\n\
         --{boundary}--\r\n"
    );

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/vision/calories")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let estimate: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(estimate["items"].is_array());
    assert!(estimate["advice"].is_string());
}

#[tokio::test]
async fn quote_route_returns_quote_and_author() {
    let app = create_mock_app();

    let request = Request::builder()
        .uri("/api/v1/quote")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let quote: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(quote["quote"].is_string());
    assert!(quote["author"].is_string());
}

#[tokio::test]
async fn sleep_tip_streams_plain_text_for_logged_user() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request("/api/v1/sleep-tip", json!({ "user_id": "user-1" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = body_string(response).await;
    assert!(body.contains("bedtime"));
}

#[tokio::test]
async fn sleep_tip_is_not_found_without_todays_log() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/sleep-tip",
            json!({ "user_id": "user-without-logs" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_route_reports_ok_with_components() {
    let app = create_mock_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["components"]["database"]["status"], "ok");
}

#[tokio::test]
async fn weather_route_requires_coordinates() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request("/api/v1/weather", json!({ "latitude": 17.4 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn weather_route_returns_current_conditions() {
    let app = create_mock_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/weather",
            json!({ "latitude": 17.4, "longitude": 78.5 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let weather: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(weather["temperature"].is_number());
    assert!(weather["is_day"].is_boolean());
}

#[tokio::test]
async fn hospitals_route_lists_nearby_hospitals() {
    let app = create_mock_app();

    let request = Request::builder()
        .uri("/api/v1/hospitals?lat=17.4&lng=78.5")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let hospitals: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(hospitals[0]["name"], "City Hospital");
}
