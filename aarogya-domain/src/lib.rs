// Aarogya Domain
// This crate contains the business logic for the Aarogya AI application

// AI provider clients, prompt templates and output normalization
pub mod ai;

// Services that implement business logic
pub mod services;

// Bearer-token authentication
pub mod auth;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Re-export the database module from aarogya-data for convenience
pub use aarogya_data::database;

// Testing utilities - only available with the mock feature or in tests
#[cfg(any(test, feature = "mock"))]
pub mod testing;
