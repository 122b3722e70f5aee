//! Automotriz JJ - backend de ventas de vehículos
//!
//! Autenticación de vendedores, catálogo de vehículos disponibles,
//! registro de ventas e historial por vendedor.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
