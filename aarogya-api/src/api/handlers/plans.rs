use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};

use aarogya_domain::entities::{DietPlanInput, MeditationInput, YogaInput};
use aarogya_domain::services::PlannerServiceError;

use crate::api::handlers::map_ai_error;
use crate::api::routes::AppState;
use crate::entities::common::PublicErrorResponse;
use crate::entities::plans::{
    DietPlanRequest, DietPlanResponse, MeditationRequest, MeditationResponse,
    TravelChecklistRequest, YogaRequest,
};

fn planner_error_response(err: PlannerServiceError) -> Response {
    match err {
        PlannerServiceError::Validation(msg) => {
            PublicErrorResponse::bad_request(&msg).into_response()
        }
        PlannerServiceError::Ai(e) => map_ai_error(&e).into_response(),
    }
}

/// 7-day meal plan around a chronic condition
#[utoipa::path(
    post,
    path = "/api/v1/plans/diet",
    request_body = DietPlanRequest,
    responses(
        (status = 200, description = "Meal plan with wellness tip", body = DietPlanResponse),
        (status = 400, description = "Required fields are missing", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider or parse error", body = PublicErrorResponse),
    ),
    tag = "plans"
)]
#[instrument(skip(state, request))]
pub async fn diet_plan(
    State(state): State<AppState>,
    Json(request): Json<DietPlanRequest>,
) -> Response {
    info!("Diet plan requested");

    let input = DietPlanInput {
        chronic_condition: request.chronic_condition.unwrap_or_default(),
        temperature: request.temperature.unwrap_or_default(),
        meals_per_day: request.meals_per_day.unwrap_or_default(),
        food_preference: request.food_preference.unwrap_or_default(),
    };

    match state.planner.diet_plan(input).await {
        Ok(plan) => (StatusCode::OK, Json(DietPlanResponse::from(plan))).into_response(),
        Err(e) => planner_error_response(e),
    }
}

/// Deployment health checklist for a destination
#[utoipa::path(
    post,
    path = "/api/v1/plans/travel-checklist",
    request_body = TravelChecklistRequest,
    responses(
        (status = 200, description = "Structured checklist"),
        (status = 400, description = "Location is missing", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider or parse error", body = PublicErrorResponse),
    ),
    tag = "plans"
)]
#[instrument(skip(state, request))]
pub async fn travel_checklist(
    State(state): State<AppState>,
    Json(request): Json<TravelChecklistRequest>,
) -> Response {
    info!("Travel checklist requested");

    let location = request.location.unwrap_or_default();
    match state.planner.travel_checklist(&location).await {
        Ok(checklist) => (StatusCode::OK, Json(checklist)).into_response(),
        Err(e) => planner_error_response(e),
    }
}

/// Guided meditation session script
#[utoipa::path(
    post,
    path = "/api/v1/plans/meditation",
    request_body = MeditationRequest,
    responses(
        (status = 200, description = "Meditation session", body = MeditationResponse),
        (status = 400, description = "Required fields are missing", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider or parse error", body = PublicErrorResponse),
    ),
    tag = "plans"
)]
#[instrument(skip(state, request))]
pub async fn meditation_plan(
    State(state): State<AppState>,
    Json(request): Json<MeditationRequest>,
) -> Response {
    info!("Meditation plan requested");

    let input = MeditationInput {
        time: request.time.unwrap_or_default(),
        temperature: request.temperature.unwrap_or_default(),
        duration: request.duration.unwrap_or_default(),
        level: request.level.unwrap_or_default(),
    };

    match state.planner.meditation_plan(input).await {
        Ok(plan) => (StatusCode::OK, Json(MeditationResponse::from(plan))).into_response(),
        Err(e) => planner_error_response(e),
    }
}

/// Yoga sequence as a JSON array of asanas
#[utoipa::path(
    post,
    path = "/api/v1/plans/yoga",
    request_body = YogaRequest,
    responses(
        (status = 200, description = "Array of asanas"),
        (status = 400, description = "Required fields are missing", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider or parse error", body = PublicErrorResponse),
    ),
    tag = "plans"
)]
#[instrument(skip(state, request))]
pub async fn yoga_plan(
    State(state): State<AppState>,
    Json(request): Json<YogaRequest>,
) -> Response {
    info!("Yoga plan requested");

    let input = YogaInput {
        time: request.time.unwrap_or_default(),
        temperature: request.temperature.unwrap_or_default(),
        duration: request.duration.unwrap_or_default(),
        plan: request.plan.unwrap_or_default(),
    };

    match state.planner.yoga_plan(input).await {
        Ok(asanas) => (StatusCode::OK, Json(asanas)).into_response(),
        Err(e) => planner_error_response(e),
    }
}
