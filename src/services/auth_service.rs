use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::vendor::Vendor;
use crate::services::credential_store::CredentialStore;
use crate::services::jwt_service::{IssuedToken, JwtService};
use crate::services::password::PasswordHasher;
use crate::utils::errors::{not_found_error, AppError, AuthError, TokenError};

/// Servicio de autenticación
///
/// No guarda sesiones: el logout es del lado del cliente y el token sigue
/// siendo válido hasta su vencimiento natural.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, hasher: PasswordHasher, jwt_service: JwtService) -> Self {
        Self {
            store,
            hasher,
            jwt_service,
        }
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Verifica credenciales y devuelve el motivo interno del rechazo.
    ///
    /// El error externo es `AppError` solo para fallos de almacenamiento.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Result<Vendor, AuthError>, AppError> {
        let Some(vendor) = self.store.find_by_username(username).await? else {
            return Ok(Err(AuthError::UnknownUser));
        };

        if !self.hasher.verify(password, &vendor.password_hash)? {
            return Ok(Err(AuthError::BadPassword));
        }

        if !vendor.is_active {
            return Ok(Err(AuthError::Inactive));
        }

        Ok(Ok(vendor))
    }

    /// Autentica un vendedor. Cualquier rechazo sale como el mismo
    /// `Unauthorized`; el motivo solo queda en el log.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Vendor, AppError> {
        match self.verify_credentials(username, password).await? {
            Ok(vendor) => {
                tracing::info!("🔐 Login exitoso: {} ({})", vendor.username, vendor.branch);
                Ok(vendor)
            }
            Err(reason) => {
                tracing::warn!("Login rechazado para '{}': {}", username, reason);
                Err(reason.into())
            }
        }
    }

    /// Emite un token con el username como sujeto
    pub fn issue_token(&self, vendor: &Vendor) -> Result<IssuedToken, AppError> {
        self.jwt_service.generate_access_token(&vendor.username)
    }

    pub fn issue_token_at(&self, vendor: &Vendor, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        self.jwt_service.generate_access_token_at(&vendor.username, now)
    }

    /// Resuelve un token al vendedor actual.
    ///
    /// El vendedor se vuelve a leer del almacén en cada llamada, así que
    /// una desactivación invalida los tokens ya emitidos.
    pub async fn try_resolve_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Result<Vendor, TokenError>, AppError> {
        let claims = match self.jwt_service.validate_token_at(token, now) {
            Ok(claims) => claims,
            Err(e) => return Ok(Err(e)),
        };

        match self.store.find_by_username(&claims.sub).await? {
            Some(vendor) if vendor.is_active => Ok(Ok(vendor)),
            _ => Ok(Err(TokenError::UnknownSubject)),
        }
    }

    pub async fn resolve_token(&self, token: &str) -> Result<Vendor, AppError> {
        match self.try_resolve_token_at(token, Utc::now()).await? {
            Ok(vendor) => Ok(vendor),
            Err(reason) => {
                tracing::debug!("Token rechazado: {}", reason);
                Err(reason.into())
            }
        }
    }

    /// Activa o desactiva una cuenta
    pub async fn set_vendor_active(&self, username: &str, active: bool) -> Result<(), AppError> {
        if !self.store.set_active(username, active).await? {
            return Err(not_found_error("Vendor", username));
        }
        tracing::info!("Vendedor '{}' activo = {}", username, active);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::EnvironmentConfig;
    use crate::services::credential_store::InMemoryCredentialStore;
    use crate::services::jwt_service::JwtConfig;
    use chrono::Duration;

    fn auth_service() -> AuthService {
        let config = EnvironmentConfig::default();
        let hasher = PasswordHasher::new(4);
        let store = InMemoryCredentialStore::with_default_admin(&config, &hasher).unwrap();
        AuthService::new(Arc::new(store), hasher, JwtService::new(JwtConfig::from(&config)))
    }

    #[tokio::test]
    async fn test_admin_authentication() {
        let auth = auth_service();
        let vendor = auth.authenticate("admin", "admin123").await.unwrap();
        assert_eq!(vendor.username, "admin");
    }

    #[tokio::test]
    async fn test_rejection_reasons() {
        let auth = auth_service();

        let wrong = auth.verify_credentials("admin", "wrong_password").await.unwrap();
        assert_eq!(wrong.unwrap_err(), AuthError::BadPassword);

        let unknown = auth.verify_credentials("nobody", "admin123").await.unwrap();
        assert_eq!(unknown.unwrap_err(), AuthError::UnknownUser);

        auth.set_vendor_active("admin", false).await.unwrap();
        let inactive = auth.verify_credentials("admin", "admin123").await.unwrap();
        assert_eq!(inactive.unwrap_err(), AuthError::Inactive);
    }

    #[tokio::test]
    async fn test_rejections_look_the_same_outside() {
        let auth = auth_service();
        let wrong = auth.authenticate("admin", "nope").await.unwrap_err().to_string();
        let unknown = auth.authenticate("ghost", "nope").await.unwrap_err().to_string();
        assert_eq!(wrong, unknown);
    }

    #[tokio::test]
    async fn test_deactivation_invalidates_existing_token() {
        let auth = auth_service();
        let vendor = auth.authenticate("admin", "admin123").await.unwrap();
        let now = Utc::now();
        let issued = auth.issue_token_at(&vendor, now).unwrap();

        let resolved = auth.try_resolve_token_at(&issued.token, now).await.unwrap();
        assert_eq!(resolved.unwrap().username, "admin");

        auth.set_vendor_active("admin", false).await.unwrap();
        let resolved = auth.try_resolve_token_at(&issued.token, now).await.unwrap();
        assert_eq!(resolved.unwrap_err(), TokenError::UnknownSubject);
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let auth = auth_service();
        let vendor = auth.authenticate("admin", "admin123").await.unwrap();
        let now = Utc::now();
        let issued = auth.issue_token_at(&vendor, now).unwrap();

        let later = now + Duration::minutes(31);
        let resolved = auth.try_resolve_token_at(&issued.token, later).await.unwrap();
        assert_eq!(resolved.unwrap_err(), TokenError::Expired);
    }
}
