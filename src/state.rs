//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::environment::{CredentialBackend, EnvironmentConfig};
use crate::repositories::VendorRepository;
use crate::services::{
    AuthService, CredentialStore, InMemoryCredentialStore, JwtConfig, JwtService, PasswordHasher,
    SalesService,
};
use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub auth: Arc<AuthService>,
    pub sales: Arc<SalesService>,
}

impl AppState {
    /// Construir el estado eligiendo el almacén de credenciales configurado
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Result<Self, AppError> {
        let hasher = PasswordHasher::new(config.bcrypt_cost);

        let store: Arc<dyn CredentialStore> = match config.credential_backend {
            CredentialBackend::Database => Arc::new(VendorRepository::new(pool.clone())),
            CredentialBackend::Memory => {
                Arc::new(InMemoryCredentialStore::with_default_admin(&config, &hasher)?)
            }
        };

        Ok(Self::with_store(pool, config, store))
    }

    /// Construir el estado con un almacén de credenciales ya creado
    pub fn with_store(pool: SqlitePool, config: EnvironmentConfig, store: Arc<dyn CredentialStore>) -> Self {
        let hasher = PasswordHasher::new(config.bcrypt_cost);
        let jwt_service = JwtService::new(JwtConfig::from(&config));

        Self {
            auth: Arc::new(AuthService::new(store, hasher, jwt_service)),
            sales: Arc::new(SalesService::new(pool.clone())),
            pool,
            config,
        }
    }
}
