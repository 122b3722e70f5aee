//! Middleware del sistema
//!
//! Autenticación por bearer token y CORS.

pub mod auth;
pub mod cors;

pub use auth::{admin_only, require_vendor, AuthenticatedVendor};
pub use cors::cors_layer;
