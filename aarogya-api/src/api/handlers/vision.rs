use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{info, instrument, warn};

use aarogya_domain::services::VisionServiceError;

use crate::api::handlers::map_ai_error;
use crate::api::routes::AppState;
use crate::entities::common::PublicErrorResponse;
use crate::entities::vision::{AssessmentResponse, CalorieResponse};

/// An image pulled out of a multipart form
struct UploadedImage {
    content_type: String,
    bytes: Vec<u8>,
}

/// Read the "image" field from a multipart upload
async fn read_image_field(mut multipart: Multipart) -> Result<UploadedImage, Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart body: {}", e);
                return Err(
                    PublicErrorResponse::bad_request("Malformed multipart body").into_response()
                );
            }
        };

        if field.name() == Some("image") {
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = match field.bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    warn!("Failed to read image field: {}", e);
                    return Err(
                        PublicErrorResponse::bad_request("Failed to read image").into_response()
                    );
                }
            };
            return Ok(UploadedImage {
                content_type,
                bytes,
            });
        }
    }

    Err(PublicErrorResponse::bad_request("No image uploaded").into_response())
}

fn vision_error_response(err: VisionServiceError) -> Response {
    match err {
        VisionServiceError::Validation(msg) => {
            PublicErrorResponse::bad_request(&msg).into_response()
        }
        VisionServiceError::Ai(e) => map_ai_error(&e).into_response(),
    }
}

/// Estimate calories from a meal photo
#[utoipa::path(
    post,
    path = "/api/v1/vision/calories",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Calorie estimate", body = CalorieResponse),
        (status = 400, description = "No image uploaded", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider or parse error", body = PublicErrorResponse),
    ),
    tag = "vision"
)]
#[instrument(skip(state, multipart))]
pub async fn analyze_calories(State(state): State<AppState>, multipart: Multipart) -> Response {
    info!("Calorie analysis requested");

    let image = match read_image_field(multipart).await {
        Ok(image) => image,
        Err(response) => return response,
    };

    match state
        .vision
        .analyze_calories(&image.content_type, &image.bytes)
        .await
    {
        Ok(estimate) => (StatusCode::OK, Json(CalorieResponse::from(estimate))).into_response(),
        Err(e) => vision_error_response(e),
    }
}

/// Assess a skin photo for visible conditions
#[utoipa::path(
    post,
    path = "/api/v1/vision/skin",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Skin assessment", body = AssessmentResponse),
        (status = 400, description = "No image uploaded", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider or parse error", body = PublicErrorResponse),
    ),
    tag = "vision"
)]
#[instrument(skip(state, multipart))]
pub async fn assess_skin(State(state): State<AppState>, multipart: Multipart) -> Response {
    info!("Skin assessment requested");

    let image = match read_image_field(multipart).await {
        Ok(image) => image,
        Err(response) => return response,
    };

    match state
        .vision
        .assess_skin(&image.content_type, &image.bytes)
        .await
    {
        Ok(assessment) => {
            (StatusCode::OK, Json(AssessmentResponse::from(assessment))).into_response()
        }
        Err(e) => vision_error_response(e),
    }
}

/// Screen an eye or nail photo for visible signs of anemia
#[utoipa::path(
    post,
    path = "/api/v1/vision/anemia",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Anemia screening", body = AssessmentResponse),
        (status = 400, description = "No image uploaded", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider or parse error", body = PublicErrorResponse),
    ),
    tag = "vision"
)]
#[instrument(skip(state, multipart))]
pub async fn screen_anemia(State(state): State<AppState>, multipart: Multipart) -> Response {
    info!("Anemia screening requested");

    let image = match read_image_field(multipart).await {
        Ok(image) => image,
        Err(response) => return response,
    };

    match state
        .vision
        .screen_anemia(&image.content_type, &image.bytes)
        .await
    {
        Ok(assessment) => {
            (StatusCode::OK, Json(AssessmentResponse::from(assessment))).into_response()
        }
        Err(e) => vision_error_response(e),
    }
}
