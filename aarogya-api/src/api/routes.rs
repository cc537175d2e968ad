use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use aarogya_domain::services::{
    create_default_chat_service, create_default_contact_service, create_default_hydration_service,
    create_default_medicine_service, create_default_nearby_service, create_default_planner_service,
    create_default_prescription_service, create_default_quote_service,
    create_default_sleep_service, create_default_vision_service, ChatServiceTrait,
    ContactServiceTrait, HydrationServiceTrait, MedicineServiceTrait, NearbyServiceTrait,
    PlannerServiceTrait, PrescriptionServiceTrait, QuoteServiceTrait, SleepServiceTrait,
    VisionServiceTrait,
};

use crate::api::handlers::{
    chat, contacts, health, medicine, nearby, plans, prescriptions, trackers, vision, wellness,
};
use crate::openapi::configure_swagger_routes;

/// Shared handler state holding every domain service behind its trait
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatServiceTrait + Send + Sync>,
    pub medicine: Arc<dyn MedicineServiceTrait + Send + Sync>,
    pub planner: Arc<dyn PlannerServiceTrait + Send + Sync>,
    pub vision: Arc<dyn VisionServiceTrait + Send + Sync>,
    pub quote: Arc<dyn QuoteServiceTrait + Send + Sync>,
    pub hydration: Arc<dyn HydrationServiceTrait + Send + Sync>,
    pub sleep: Arc<dyn SleepServiceTrait + Send + Sync>,
    pub contacts: Arc<dyn ContactServiceTrait + Send + Sync>,
    pub prescriptions: Arc<dyn PrescriptionServiceTrait + Send + Sync>,
    pub nearby: Arc<dyn NearbyServiceTrait + Send + Sync>,
}

impl AppState {
    /// Build the state from the default service factories
    pub fn from_defaults() -> Self {
        Self {
            chat: Arc::new(create_default_chat_service()),
            medicine: Arc::new(create_default_medicine_service()),
            planner: Arc::new(create_default_planner_service()),
            vision: Arc::new(create_default_vision_service()),
            quote: Arc::new(create_default_quote_service()),
            hydration: Arc::new(create_default_hydration_service()),
            sleep: Arc::new(create_default_sleep_service()),
            contacts: Arc::new(create_default_contact_service()),
            prescriptions: Arc::new(create_default_prescription_service()),
            nearby: Arc::new(create_default_nearby_service()),
        }
    }

    /// Build the state from mock services with canned data
    pub fn from_mocks() -> Self {
        use aarogya_domain::testing;

        Self {
            chat: Arc::new(testing::create_mock_chat_service()),
            medicine: Arc::new(testing::create_mock_medicine_service()),
            planner: Arc::new(testing::create_mock_planner_service()),
            vision: Arc::new(testing::create_mock_vision_service()),
            quote: Arc::new(testing::create_mock_quote_service()),
            hydration: Arc::new(testing::create_mock_hydration_service()),
            sleep: Arc::new(testing::create_mock_sleep_service()),
            contacts: Arc::new(testing::create_mock_contact_service()),
            prescriptions: Arc::new(testing::create_mock_prescription_service()),
            nearby: Arc::new(testing::create_mock_nearby_service()),
        }
    }
}

/// Create the application router over the given state and health service
pub fn create_app_with_state(
    state: AppState,
    health_service: Arc<dyn aarogya_domain::health::HealthServiceTrait + Send + Sync>,
) -> Router {
    debug!("Creating application router");

    let api_routes = Router::new()
        .route("/chat/symptoms", post(chat::symptom_chat))
        .route("/chat/lab-report", post(chat::lab_report_chat))
        .route("/chat/support", post(chat::support_chat))
        .route("/medicine-usage", post(medicine::medicine_usage))
        .route("/plans/diet", post(plans::diet_plan))
        .route("/plans/travel-checklist", post(plans::travel_checklist))
        .route("/plans/meditation", post(plans::meditation_plan))
        .route("/plans/yoga", post(plans::yoga_plan))
        .route("/vision/calories", post(vision::analyze_calories))
        .route("/vision/skin", post(vision::assess_skin))
        .route("/vision/anemia", post(vision::screen_anemia))
        .route("/quote", get(wellness::daily_quote))
        .route("/sleep-tip", post(wellness::sleep_tip))
        .route(
            "/water-logs",
            post(trackers::create_water_log).get(trackers::get_water_logs),
        )
        .route("/water-logs/history", get(trackers::get_water_log_history))
        .route(
            "/sleep-logs",
            post(trackers::create_sleep_log).get(trackers::get_sleep_logs),
        )
        .route(
            "/emergency-contacts",
            post(contacts::create_contact)
                .get(contacts::list_contacts)
                .delete(contacts::delete_contact),
        )
        .route(
            "/prescriptions",
            post(prescriptions::upload_prescription)
                .get(prescriptions::list_prescriptions)
                .delete(prescriptions::delete_prescription),
        )
        .route(
            "/prescriptions/files/:token",
            get(prescriptions::open_prescription_file),
        )
        .route("/weather", post(nearby::current_weather))
        .route("/hospitals", get(nearby::nearby_hospitals));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(state)
        .merge(configure_swagger_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    health::initialize_server_start_time();
    debug!("Swagger UI merged");

    app
}

/// Create the application router over the default services
pub fn create_app() -> Router {
    create_app_with_state(AppState::from_defaults(), health::create_health_service())
}

/// Create an application router over mock services, for tests
pub fn create_mock_app() -> Router {
    let health_service = Arc::new(aarogya_domain::testing::MockHealthService::new());
    create_app_with_state(AppState::from_mocks(), health_service)
}
