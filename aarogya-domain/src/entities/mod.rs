// Domain entities for the Aarogya AI application

pub mod chat;
pub mod contacts;
pub mod conversions;
pub mod medicine;
pub mod nearby;
pub mod plans;
pub mod prescriptions;
pub mod trackers;
pub mod vision;
pub mod wellness;

pub use chat::{SupportAssistant, SupportReply};
pub use contacts::EmergencyContact;
pub use medicine::MedicineInfo;
pub use nearby::{Hospital, WeatherReport};
pub use plans::{DietPlan, DietPlanInput, MeditationInput, MeditationPlan, YogaInput};
pub use prescriptions::Prescription;
pub use trackers::{SleepLog, WaterLog};
pub use vision::{CalorieEstimate, ImageAssessment};
pub use wellness::DailyQuote;
