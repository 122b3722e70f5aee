//! Routers de Axum
//!
//! Capa HTTP delgada sobre los servicios.

pub mod admin_routes;
pub mod auth_routes;
pub mod sales_routes;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Crear el router principal de la aplicación
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/auth", auth_routes::create_auth_router(state.clone()))
        .nest("/ventas", sales_routes::create_sales_router(state.clone()))
        .nest("/admin", admin_routes::create_admin_router(state.clone()))
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("Bienvenido a la API de {}", state.config.app_name),
        "version": state.config.app_version,
        "status": "operational"
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": state.config.app_name,
        "version": state.config.app_version
    }))
}
