// Services module structure
pub mod chat;
pub mod contacts;
pub mod medicine;
pub mod nearby;
pub mod planner;
pub mod prescriptions;
pub mod quote;
pub mod trackers;
pub mod vision;

// Re-export commonly used types
pub use chat::{create_default_chat_service, ChatService, ChatServiceError, ChatServiceTrait};
pub use contacts::{
    create_default_contact_service, ContactService, ContactServiceError, ContactServiceTrait,
};
pub use medicine::{
    create_default_medicine_service, MedicineService, MedicineServiceError, MedicineServiceTrait,
};
pub use nearby::{
    create_default_nearby_service, NearbyService, NearbyServiceError, NearbyServiceTrait,
};
pub use planner::{
    create_default_planner_service, PlannerService, PlannerServiceError, PlannerServiceTrait,
};
pub use prescriptions::{
    create_default_prescription_service, PrescriptionService, PrescriptionServiceError,
    PrescriptionServiceTrait, StoredFile,
};
pub use quote::{create_default_quote_service, QuoteService, QuoteServiceError, QuoteServiceTrait};
pub use trackers::{
    create_default_hydration_service, create_default_sleep_service, HydrationService,
    HydrationServiceTrait, SleepService, SleepServiceTrait, TrackerServiceError,
};
pub use vision::{create_default_vision_service, VisionService, VisionServiceError, VisionServiceTrait};
