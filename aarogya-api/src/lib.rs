// aarogya-api lib.rs
//
// HTTP layer for the Aarogya AI API: request/response entities, handlers,
// router assembly and OpenAPI documentation.

// Public modules
pub mod api;
pub mod entities;
pub mod openapi;
