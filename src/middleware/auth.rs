//! Middleware de autenticación JWT
//!
//! Extrae el bearer token, lo resuelve con el servicio de autenticación
//! e inyecta el vendedor autenticado en las extensions de la request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Extension,
};

use crate::{
    models::vendor::{Vendor, VendorProfile, VendorRole},
    state::AppState,
    utils::errors::{AppError, UNAUTHORIZED},
};

/// Vendedor autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedVendor {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: VendorRole,
    pub branch: String,
}

impl From<&Vendor> for AuthenticatedVendor {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id,
            username: vendor.username.clone(),
            full_name: vendor.full_name.clone(),
            role: vendor.role,
            branch: vendor.branch.clone(),
        }
    }
}

/// Extraer el token del header `Authorization: Bearer <token>`
pub fn extract_bearer_token(value: &str) -> Option<&str> {
    value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Middleware de autenticación JWT
pub async fn require_vendor(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer_token)
        .ok_or_else(|| AppError::Unauthorized(UNAUTHORIZED.to_string()))?;

    let vendor = state.auth.resolve_token(token).await?;

    let extensions = request.extensions_mut();
    extensions.insert(AuthenticatedVendor::from(&vendor));
    extensions.insert(VendorProfile::from(vendor));

    Ok(next.run(request).await)
}

/// Middleware para verificar permisos de admin
pub async fn admin_only(
    Extension(vendor): Extension<AuthenticatedVendor>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if vendor.role != VendorRole::Admin {
        return Err(AppError::Forbidden(
            "Se requieren permisos de administrador".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
