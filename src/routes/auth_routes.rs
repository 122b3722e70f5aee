use axum::{
    extract::State,
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Form, Json, Router,
};

use crate::dto::auth_dto::{LoginForm, MeResponse, MessageResponse, TokenResponse};
use crate::middleware::auth::require_vendor;
use crate::models::vendor::VendorProfile;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_auth_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route("/logout", post(logout))
        .route_layer(from_fn_with_state(state, require_vendor));

    Router::new()
        .route("/login", post(login))
        .merge(protected)
}

async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let vendor = state.auth.authenticate(&form.username, &form.password).await?;
    let issued = state.auth.issue_token(&vendor)?;

    Ok(Json(TokenResponse::bearer(
        issued.token,
        state.auth.jwt().access_token_duration().num_seconds(),
    )))
}

async fn me(Extension(vendor): Extension<VendorProfile>) -> Json<MeResponse> {
    let message = format!("Usuario autenticado: {}", vendor.username);
    Json(MeResponse { vendor, message })
}

// El token no se invalida en el servidor: el cliente lo descarta.
async fn logout(Extension(vendor): Extension<VendorProfile>) -> Json<MessageResponse> {
    tracing::info!("👋 Logout de {}", vendor.username);
    Json(MessageResponse {
        message: format!("Usuario {} ha cerrado sesión exitosamente", vendor.username),
    })
}
