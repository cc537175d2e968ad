// Public request/response entities for the HTTP layer

pub mod chat;
pub mod common;
pub mod contacts;
pub mod medicine;
pub mod nearby;
pub mod plans;
pub mod prescriptions;
pub mod trackers;
pub mod vision;
pub mod wellness;
