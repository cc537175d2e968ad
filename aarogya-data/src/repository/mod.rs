// Repository module structure
pub mod errors;
mod contacts;
mod hydration;
mod in_memory;
mod prescriptions;
mod sleep;
mod storage;

// Re-export commonly used types
pub use contacts::{EmergencyContactRepository, EmergencyContactRepositoryTrait};
pub use errors::RepositoryError;
pub use hydration::{WaterLogRepository, WaterLogRepositoryTrait};
pub use prescriptions::{PrescriptionRepository, PrescriptionRepositoryTrait};
pub use sleep::{SleepLogRepository, SleepLogRepositoryTrait};

// Re-export mock repositories for both testing and when the mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use contacts::tests as contact_mocks;
#[cfg(any(test, feature = "mock"))]
pub use hydration::tests as hydration_mocks;
#[cfg(any(test, feature = "mock"))]
pub use prescriptions::tests as prescription_mocks;
#[cfg(any(test, feature = "mock"))]
pub use sleep::tests as sleep_mocks;
