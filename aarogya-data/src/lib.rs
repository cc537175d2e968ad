// Aarogya Data
// This crate handles data access for the Aarogya AI application

// Database connection management
pub mod database;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
