use axum::{
    extract::{Path, State},
    middleware::{from_fn, from_fn_with_state},
    routing::put,
    Json, Router,
};
use serde::Deserialize;

use crate::dto::auth_dto::MessageResponse;
use crate::middleware::auth::{admin_only, require_vendor};
use crate::state::AppState;
use crate::utils::errors::AppResult;

#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub active: bool,
}

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/vendedores/:username/activo", put(set_vendor_active))
        .route_layer(from_fn(admin_only))
        .route_layer(from_fn_with_state(state, require_vendor))
}

async fn set_vendor_active(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<SetActiveRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.auth.set_vendor_active(&username, request.active).await?;

    let status = if request.active { "activado" } else { "desactivado" };
    Ok(Json(MessageResponse {
        message: format!("Vendedor {} {}", username, status),
    }))
}
