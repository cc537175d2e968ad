use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};

use aarogya_domain::services::MedicineServiceError;

use crate::api::handlers::map_ai_error;
use crate::api::routes::AppState;
use crate::entities::common::PublicErrorResponse;
use crate::entities::medicine::{MedicineInfoResponse, MedicineUsageRequest};

/// Structured usage information for a medicine
#[utoipa::path(
    post,
    path = "/api/v1/medicine-usage",
    request_body = MedicineUsageRequest,
    responses(
        (status = 200, description = "Medicine information", body = MedicineInfoResponse),
        (status = 400, description = "Medicine name is missing", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider or parse error", body = PublicErrorResponse),
    ),
    tag = "medicine"
)]
#[instrument(skip(state, request))]
pub async fn medicine_usage(
    State(state): State<AppState>,
    Json(request): Json<MedicineUsageRequest>,
) -> Response {
    info!("Medicine usage requested");

    let message = request.message.unwrap_or_default();
    match state.medicine.medicine_info(&message).await {
        Ok(info) => (StatusCode::OK, Json(MedicineInfoResponse::from(info))).into_response(),
        Err(MedicineServiceError::Validation(msg)) => {
            PublicErrorResponse::bad_request(&msg).into_response()
        }
        Err(MedicineServiceError::Ai(e)) => map_ai_error(&e).into_response(),
    }
}
