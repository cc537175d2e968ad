use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Chat endpoints
        crate::api::handlers::chat::symptom_chat,
        crate::api::handlers::chat::lab_report_chat,
        crate::api::handlers::chat::support_chat,

        // Medicine endpoint
        crate::api::handlers::medicine::medicine_usage,

        // Plan endpoints
        crate::api::handlers::plans::diet_plan,
        crate::api::handlers::plans::travel_checklist,
        crate::api::handlers::plans::meditation_plan,
        crate::api::handlers::plans::yoga_plan,

        // Vision endpoints
        crate::api::handlers::vision::analyze_calories,
        crate::api::handlers::vision::assess_skin,
        crate::api::handlers::vision::screen_anemia,

        // Wellness endpoints
        crate::api::handlers::wellness::daily_quote,
        crate::api::handlers::wellness::sleep_tip,

        // Tracker endpoints
        crate::api::handlers::trackers::create_water_log,
        crate::api::handlers::trackers::get_water_logs,
        crate::api::handlers::trackers::get_water_log_history,
        crate::api::handlers::trackers::create_sleep_log,
        crate::api::handlers::trackers::get_sleep_logs,

        // Emergency contact endpoints
        crate::api::handlers::contacts::create_contact,
        crate::api::handlers::contacts::list_contacts,
        crate::api::handlers::contacts::delete_contact,

        // Prescription endpoints
        crate::api::handlers::prescriptions::upload_prescription,
        crate::api::handlers::prescriptions::list_prescriptions,
        crate::api::handlers::prescriptions::delete_prescription,
        crate::api::handlers::prescriptions::open_prescription_file,

        // Nearby endpoints
        crate::api::handlers::nearby::current_weather,
        crate::api::handlers::nearby::nearby_hospitals,
    ),
    components(
        schemas(
            // Common entities
            crate::entities::common::PublicErrorResponse,

            // Chat entities
            crate::entities::chat::ChatRequest,
            crate::entities::chat::SupportAssistant,
            crate::entities::chat::SupportResponse,

            // Medicine entities
            crate::entities::medicine::MedicineUsageRequest,
            crate::entities::medicine::MedicineInfoResponse,

            // Plan entities
            crate::entities::plans::DietPlanRequest,
            crate::entities::plans::DietPlanResponse,
            crate::entities::plans::TravelChecklistRequest,
            crate::entities::plans::MeditationRequest,
            crate::entities::plans::MeditationResponse,
            crate::entities::plans::YogaRequest,

            // Vision entities
            crate::entities::vision::CalorieResponse,
            crate::entities::vision::AssessmentResponse,

            // Wellness entities
            crate::entities::wellness::QuoteResponse,
            crate::entities::wellness::SleepTipRequest,

            // Tracker entities
            crate::entities::trackers::CreateWaterLogRequest,
            crate::entities::trackers::WaterLogResponse,
            crate::entities::trackers::CreateSleepLogRequest,
            crate::entities::trackers::SleepLogResponse,

            // Contact entities
            crate::entities::contacts::CreateContactRequest,
            crate::entities::contacts::ContactResponse,

            // Prescription entities
            crate::entities::prescriptions::PrescriptionResponse,

            // Nearby entities
            crate::entities::nearby::WeatherRequest,
            crate::entities::nearby::WeatherResponse,
            crate::entities::nearby::HospitalResponse,

            // Health handler schemas
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "chat", description = "AI chat endpoints with SSE streaming"),
        (name = "medicine", description = "Medicine information endpoint"),
        (name = "plans", description = "AI-generated diet, travel, meditation and yoga plans"),
        (name = "vision", description = "Image analysis endpoints"),
        (name = "wellness", description = "Daily quote and sleep tips"),
        (name = "trackers", description = "Water and sleep tracking endpoints"),
        (name = "contacts", description = "Emergency contact endpoints"),
        (name = "prescriptions", description = "Prescription storage with signed file URLs"),
        (name = "nearby", description = "Weather and nearby hospital lookups"),
    ),
    info(
        title = "Aarogya AI API",
        version = "0.1.0",
        description = "Health & wellness API backed by Groq and Gemini models",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

/// Registers the bearer scheme the prescription routes reference
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_doc_generates_with_expected_paths() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "Aarogya AI API");
        assert_eq!(openapi.info.version, "0.1.0");

        let paths = &openapi.paths.paths;
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/api/v1/chat/symptoms"));
        assert!(paths.contains_key("/api/v1/medicine-usage"));
        assert!(paths.contains_key("/api/v1/plans/diet"));
        assert!(paths.contains_key("/api/v1/vision/calories"));
        assert!(paths.contains_key("/api/v1/quote"));
        assert!(paths.contains_key("/api/v1/water-logs"));
        assert!(paths.contains_key("/api/v1/emergency-contacts"));
        assert!(paths.contains_key("/api/v1/prescriptions"));
        assert!(paths.contains_key("/api/v1/prescriptions/files/{token}"));
        assert!(paths.contains_key("/api/v1/hospitals"));
    }

    #[test]
    fn tags_cover_every_route_group() {
        let openapi = ApiDoc::openapi();
        let tags = openapi.tags.expect("tags should be defined");

        for expected in [
            "health",
            "chat",
            "plans",
            "vision",
            "trackers",
            "contacts",
            "prescriptions",
            "nearby",
        ] {
            assert!(tags.iter().any(|tag| tag.name == expected));
        }
    }
}
