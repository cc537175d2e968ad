use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument, warn};
use validator::Validate;

use aarogya_domain::services::TrackerServiceError;

use crate::api::routes::AppState;
use crate::entities::common::PublicErrorResponse;
use crate::entities::trackers::{
    CreateSleepLogRequest, CreateWaterLogRequest, SleepLogResponse, TrackerQueryParams,
    WaterLogResponse,
};

fn tracker_error_response(err: TrackerServiceError) -> Response {
    match err {
        TrackerServiceError::Validation(msg) => {
            PublicErrorResponse::bad_request(&msg).into_response()
        }
        TrackerServiceError::NotFound(msg) => PublicErrorResponse::not_found(&msg).into_response(),
        other => {
            error!("Tracker failure: {}", other);
            PublicErrorResponse::internal_error().into_response()
        }
    }
}

fn validation_details(errors: &validator::ValidationErrors) -> serde_json::Value {
    serde_json::to_value(errors).unwrap_or(serde_json::Value::Null)
}

/// Record water intake for a day; one row per user per day
#[utoipa::path(
    post,
    path = "/api/v1/water-logs",
    request_body = CreateWaterLogRequest,
    responses(
        (status = 201, description = "Water log stored", body = WaterLogResponse),
        (status = 400, description = "Required fields are missing", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    tag = "trackers"
)]
#[instrument(skip(state, request))]
pub async fn create_water_log(
    State(state): State<AppState>,
    Json(request): Json<CreateWaterLogRequest>,
) -> Response {
    if let Err(errors) = request.validate() {
        warn!("Invalid water log request");
        return PublicErrorResponse::validation_error(
            "user_id, date and intake are required",
            Some(validation_details(&errors)),
        )
        .into_response();
    }

    let user_id = request.user_id.unwrap_or_default();
    let date = request.date.unwrap_or_default();
    let intake = request.intake.unwrap_or_default();

    info!("Recording water intake for {}", date);

    match state.hydration.log_intake(&user_id, &date, intake).await {
        Ok(log) => (StatusCode::CREATED, Json(WaterLogResponse::from(log))).into_response(),
        Err(e) => tracker_error_response(e),
    }
}

/// Get a user's water logs, optionally for one day
#[utoipa::path(
    get,
    path = "/api/v1/water-logs",
    params(TrackerQueryParams),
    responses(
        (status = 200, description = "Water logs", body = [WaterLogResponse]),
        (status = 400, description = "user_id is missing", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    tag = "trackers"
)]
#[instrument(skip(state))]
pub async fn get_water_logs(
    State(state): State<AppState>,
    Query(params): Query<TrackerQueryParams>,
) -> Response {
    let user_id = params.user_id.unwrap_or_default();

    match state.hydration.logs(&user_id, params.date.as_deref()).await {
        Ok(logs) => {
            let logs: Vec<WaterLogResponse> = logs.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(logs)).into_response()
        }
        Err(e) => tracker_error_response(e),
    }
}

/// Get a user's full water intake history
#[utoipa::path(
    get,
    path = "/api/v1/water-logs/history",
    params(TrackerQueryParams),
    responses(
        (status = 200, description = "Water log history", body = [WaterLogResponse]),
        (status = 400, description = "user_id is missing", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    tag = "trackers"
)]
#[instrument(skip(state))]
pub async fn get_water_log_history(
    State(state): State<AppState>,
    Query(params): Query<TrackerQueryParams>,
) -> Response {
    let user_id = params.user_id.unwrap_or_default();

    match state.hydration.history(&user_id).await {
        Ok(logs) => {
            let logs: Vec<WaterLogResponse> = logs.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(logs)).into_response()
        }
        Err(e) => tracker_error_response(e),
    }
}

/// Record sleep for a day; one row per user per day
#[utoipa::path(
    post,
    path = "/api/v1/sleep-logs",
    request_body = CreateSleepLogRequest,
    responses(
        (status = 201, description = "Sleep log stored", body = SleepLogResponse),
        (status = 400, description = "Required fields are missing", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    tag = "trackers"
)]
#[instrument(skip(state, request))]
pub async fn create_sleep_log(
    State(state): State<AppState>,
    Json(request): Json<CreateSleepLogRequest>,
) -> Response {
    if let Err(errors) = request.validate() {
        warn!("Invalid sleep log request");
        return PublicErrorResponse::validation_error(
            "user_id, date and hours are required",
            Some(validation_details(&errors)),
        )
        .into_response();
    }

    let user_id = request.user_id.unwrap_or_default();
    let date = request.date.unwrap_or_default();
    let hours = request.hours.unwrap_or_default();

    info!("Recording sleep for {}", date);

    match state.sleep.log_sleep(&user_id, &date, hours).await {
        Ok(log) => (StatusCode::CREATED, Json(SleepLogResponse::from(log))).into_response(),
        Err(e) => tracker_error_response(e),
    }
}

/// Get a user's sleep logs, optionally for one day
#[utoipa::path(
    get,
    path = "/api/v1/sleep-logs",
    params(TrackerQueryParams),
    responses(
        (status = 200, description = "Sleep logs", body = [SleepLogResponse]),
        (status = 400, description = "user_id is missing", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    tag = "trackers"
)]
#[instrument(skip(state))]
pub async fn get_sleep_logs(
    State(state): State<AppState>,
    Query(params): Query<TrackerQueryParams>,
) -> Response {
    let user_id = params.user_id.unwrap_or_default();

    match state.sleep.logs(&user_id, params.date.as_deref()).await {
        Ok(logs) => {
            let logs: Vec<SleepLogResponse> = logs.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(logs)).into_response()
        }
        Err(e) => tracker_error_response(e),
    }
}
