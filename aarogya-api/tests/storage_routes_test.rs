use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use aarogya_api::api::routes::create_mock_app;
use aarogya_domain::auth::{issue_token, AuthConfig};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bearer_token(user_id: &str) -> String {
    let config = AuthConfig::from_env();
    issue_token(&config.secret, user_id, 3600).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn water_log_create_requires_all_fields() {
    let app = create_mock_app();

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/v1/water-logs",
            json!({ "user_id": "user-1", "date": "2026-08-30" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn water_log_upserts_one_row_per_day() {
    let app = create_mock_app();

    for intake in [500, 1200] {
        let response = send(
            &app,
            json_request(
                "POST",
                "/api/v1/water-logs",
                json!({ "user_id": "user-1", "date": "2026-08-30", "intake": intake }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(
        &app,
        Request::builder()
            .uri("/api/v1/water-logs?user_id=user-1&date=2026-08-30")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let logs = body_json(response).await;
    assert_eq!(logs.as_array().unwrap().len(), 1);
    assert_eq!(logs[0]["intake"], 1200);
}

#[tokio::test]
async fn water_log_history_is_scoped_to_the_user() {
    let app = create_mock_app();

    for (user, date) in [("user-1", "2026-08-29"), ("user-1", "2026-08-30"), ("user-2", "2026-08-30")] {
        let response = send(
            &app,
            json_request(
                "POST",
                "/api/v1/water-logs",
                json!({ "user_id": user, "date": date, "intake": 750 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(
        &app,
        Request::builder()
            .uri("/api/v1/water-logs/history?user_id=user-1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let logs = body_json(response).await;
    assert_eq!(logs.as_array().unwrap().len(), 2);
    for log in logs.as_array().unwrap() {
        assert_eq!(log["user_id"], "user-1");
    }
}

#[tokio::test]
async fn sleep_log_roundtrip() {
    let app = create_mock_app();

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/v1/sleep-logs",
            json!({ "user_id": "user-9", "date": "2026-08-30", "hours": 7.5 }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        &app,
        Request::builder()
            .uri("/api/v1/sleep-logs?user_id=user-9&date=2026-08-30")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let logs = body_json(response).await;
    assert_eq!(logs[0]["hours"], 7.5);
}

#[tokio::test]
async fn contact_create_requires_all_fields() {
    let app = create_mock_app();

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/v1/emergency-contacts",
            json!({ "user_id": "user-1", "name": "Asha Devi" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_list_and_delete_are_scoped_to_the_owner() {
    let app = create_mock_app();

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/v1/emergency-contacts",
            json!({
                "user_id": "user-1",
                "name": "Asha Devi",
                "phone": "+91-9000000001",
                "relation": "Mother"
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let contact = body_json(response).await;
    let contact_id = contact["id"].as_str().unwrap().to_string();

    // Another user sees nothing and cannot delete it
    let response = send(
        &app,
        Request::builder()
            .uri("/api/v1/emergency-contacts?user_id=user-2")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());

    let response = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!(
                "/api/v1/emergency-contacts?id={contact_id}&user_id=user-2"
            ))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner can delete it
    let response = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!(
                "/api/v1/emergency-contacts?id={contact_id}&user_id=user-1"
            ))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

fn upload_request(token: &str) -> Request<Body> {
    let boundary = "X-BOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"title\"\r\n\r\n\
         Blood test\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"date\"\r\n\r\n\
         2026-08-01\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"report.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         PDFDATA\r\n\
         --{boundary}--\r\n"
    );

    Request::builder()
        .method("POST")
        .uri("/api/v1/prescriptions")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn prescription_routes_require_a_bearer_token() {
    let app = create_mock_app();

    let response = send(
        &app,
        Request::builder()
            .uri("/api/v1/prescriptions")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn prescription_upload_list_and_file_redemption() {
    let app = create_mock_app();
    let token = bearer_token("user-1");

    let response = send(&app, upload_request(&token)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        &app,
        Request::builder()
            .uri("/api/v1/prescriptions")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    let signed_url = listed[0]["signed_url"].as_str().unwrap().to_string();
    assert!(signed_url.starts_with("/api/v1/prescriptions/files/"));

    let response = send(
        &app,
        Request::builder()
            .uri(&signed_url)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"PDFDATA");
}

#[tokio::test]
async fn prescription_delete_is_scoped_to_the_owner() {
    let app = create_mock_app();
    let owner_token = bearer_token("user-1");
    let other_token = bearer_token("user-2");

    let response = send(&app, upload_request(&owner_token)).await;
    let stored = body_json(response).await;
    let id = stored["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/prescriptions?id={id}"))
            .header(header::AUTHORIZATION, format!("Bearer {other_token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/prescriptions?id={id}"))
            .header(header::AUTHORIZATION, format!("Bearer {owner_token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
