// Storage model module structure
pub mod contact;
pub mod hydration;
pub mod prescription;
pub mod sleep;

pub use contact::{CreateEmergencyContactRecord, EmergencyContactRecord};
pub use hydration::{CreateWaterLogRecord, WaterLogRecord};
pub use prescription::{CreatePrescriptionRecord, PrescriptionRecord};
pub use sleep::{CreateSleepLogRecord, SleepLogRecord};
