use serde::{Deserialize, Serialize};

use crate::models::vendor::VendorProfile;

// Formulario de login (application/x-www-form-urlencoded)
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// Token de acceso
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Segundos hasta el vencimiento
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}

// Perfil del vendedor autenticado
#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub vendor: VendorProfile,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
