use axum::{
    body::Body,
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument};

use aarogya_domain::services::{QuoteServiceError, TrackerServiceError};

use crate::api::handlers::map_ai_error;
use crate::api::routes::AppState;
use crate::entities::common::PublicErrorResponse;
use crate::entities::wellness::{QuoteResponse, SleepTipRequest};

/// Daily wellness quote, cached process-wide for 12 hours
#[utoipa::path(
    get,
    path = "/api/v1/quote",
    responses(
        (status = 200, description = "Daily quote", body = QuoteResponse),
        (status = 500, description = "Upstream provider or parse error", body = PublicErrorResponse),
    ),
    tag = "wellness"
)]
#[instrument(skip(state))]
pub async fn daily_quote(State(state): State<AppState>) -> Response {
    info!("Daily quote requested");

    match state.quote.daily_quote().await {
        Ok(quote) => (StatusCode::OK, Json(QuoteResponse::from(quote))).into_response(),
        Err(QuoteServiceError::Ai(e)) => map_ai_error(&e).into_response(),
        Err(e) => {
            error!("Quote cache failure: {}", e);
            PublicErrorResponse::internal_error().into_response()
        }
    }
}

/// Personalized sleep tips streamed as plain text.
/// Reads today's sleep log for the user; 404 when there is none.
#[utoipa::path(
    post,
    path = "/api/v1/sleep-tip",
    request_body = SleepTipRequest,
    responses(
        (status = 200, description = "Plain-text tip stream"),
        (status = 400, description = "user_id is missing", body = PublicErrorResponse),
        (status = 404, description = "No sleep data for today", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider error", body = PublicErrorResponse),
    ),
    tag = "wellness"
)]
#[instrument(skip(state, request))]
pub async fn sleep_tip(
    State(state): State<AppState>,
    Json(request): Json<SleepTipRequest>,
) -> Response {
    info!("Sleep tip requested");

    let user_id = request.user_id.unwrap_or_default();
    match state.sleep.tip_stream(&user_id).await {
        Ok(upstream) => {
            let body = Body::from_stream(upstream);
            match Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(body)
            {
                Ok(response) => response,
                Err(e) => {
                    error!("Failed to build streaming response: {}", e);
                    PublicErrorResponse::internal_error().into_response()
                }
            }
        }
        Err(TrackerServiceError::Validation(msg)) => {
            PublicErrorResponse::bad_request(&msg).into_response()
        }
        Err(TrackerServiceError::NotFound(msg)) => {
            PublicErrorResponse::not_found(&msg).into_response()
        }
        Err(TrackerServiceError::Ai(e)) => map_ai_error(&e).into_response(),
        Err(e) => {
            error!("Sleep tip failure: {}", e);
            PublicErrorResponse::internal_error().into_response()
        }
    }
}
