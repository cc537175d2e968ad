use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument};

use aarogya_domain::services::NearbyServiceError;

use crate::api::routes::AppState;
use crate::entities::common::PublicErrorResponse;
use crate::entities::nearby::{
    HospitalResponse, HospitalsQueryParams, WeatherRequest, WeatherResponse,
};

fn nearby_error_response(err: NearbyServiceError) -> Response {
    match err {
        NearbyServiceError::Validation(msg) => {
            PublicErrorResponse::bad_request(&msg).into_response()
        }
        other => {
            error!("Nearby lookup failure: {}", other);
            PublicErrorResponse::internal_error().into_response()
        }
    }
}

/// Current weather at a coordinate
#[utoipa::path(
    post,
    path = "/api/v1/weather",
    request_body = WeatherRequest,
    responses(
        (status = 200, description = "Current weather", body = WeatherResponse),
        (status = 400, description = "Coordinates are missing", body = PublicErrorResponse),
        (status = 500, description = "Weather provider failure", body = PublicErrorResponse),
    ),
    tag = "nearby"
)]
#[instrument(skip(state, request))]
pub async fn current_weather(
    State(state): State<AppState>,
    Json(request): Json<WeatherRequest>,
) -> Response {
    let (latitude, longitude) = match (request.latitude, request.longitude) {
        (Some(latitude), Some(longitude)) => (latitude, longitude),
        _ => {
            return PublicErrorResponse::bad_request("latitude and longitude are required")
                .into_response()
        }
    };

    info!("Weather requested");

    match state.nearby.current_weather(latitude, longitude).await {
        Ok(report) => (StatusCode::OK, Json(WeatherResponse::from(report))).into_response(),
        Err(e) => nearby_error_response(e),
    }
}

/// Hospitals near a coordinate
#[utoipa::path(
    get,
    path = "/api/v1/hospitals",
    params(HospitalsQueryParams),
    responses(
        (status = 200, description = "Nearby hospitals", body = [HospitalResponse]),
        (status = 500, description = "Map provider failure", body = PublicErrorResponse),
    ),
    tag = "nearby"
)]
#[instrument(skip(state))]
pub async fn nearby_hospitals(
    State(state): State<AppState>,
    Query(params): Query<HospitalsQueryParams>,
) -> Response {
    let lat = params.lat.unwrap_or(0.0);
    let lng = params.lng.unwrap_or(0.0);

    info!("Hospital lookup requested");

    match state.nearby.nearby_hospitals(lat, lng).await {
        Ok(hospitals) => {
            let hospitals: Vec<HospitalResponse> = hospitals.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(hospitals)).into_response()
        }
        Err(e) => nearby_error_response(e),
    }
}
