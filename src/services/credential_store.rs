//! Almacén de credenciales
//!
//! El servicio de autenticación solo conoce el trait [`CredentialStore`].
//! Hay dos implementaciones, elegidas al arrancar:
//! - [`VendorRepository`]: tabla `vendors` en la base de datos
//! - [`InMemoryCredentialStore`]: conjunto fijo sembrado en el arranque

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::models::vendor::{Vendor, VendorRole};
use crate::repositories::vendor_repository::VendorRepository;
use crate::services::password::PasswordHasher;
use crate::utils::errors::AppError;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Vendor>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Vendor>, AppError>;

    /// Única mutación permitida sobre un vendedor. `false` si no existe.
    async fn set_active(&self, username: &str, active: bool) -> Result<bool, AppError>;
}

#[async_trait]
impl CredentialStore for VendorRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Vendor>, AppError> {
        VendorRepository::find_by_username(self, username).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vendor>, AppError> {
        VendorRepository::find_by_id(self, id).await
    }

    async fn set_active(&self, username: &str, active: bool) -> Result<bool, AppError> {
        VendorRepository::set_active(self, username, active).await
    }
}

/// Vendedores en memoria, indexados por username
pub struct InMemoryCredentialStore {
    vendors: RwLock<HashMap<String, Vendor>>,
}

impl InMemoryCredentialStore {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        let vendors = vendors
            .into_iter()
            .map(|v| (v.username.clone(), v))
            .collect();

        Self {
            vendors: RwLock::new(vendors),
        }
    }

    /// Almacén con la cuenta por defecto configurada (rol admin)
    pub fn with_default_admin(config: &EnvironmentConfig, hasher: &PasswordHasher) -> Result<Self, AppError> {
        let admin = Vendor {
            id: 1,
            username: config.default_username.clone(),
            password_hash: hasher.hash(&config.default_password)?,
            full_name: "Administrador".to_string(),
            email: Some("admin@automotrizjj.com".to_string()),
            role: VendorRole::Admin,
            vendor_code: "ADM001".to_string(),
            branch: "LIMA".to_string(),
            is_active: true,
            created_at: Utc::now(),
        };

        Ok(Self::new(vec![admin]))
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Vendor>, AppError> {
        Ok(self.vendors.read().await.get(username).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vendor>, AppError> {
        Ok(self
            .vendors
            .read()
            .await
            .values()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn set_active(&self, username: &str, active: bool) -> Result<bool, AppError> {
        match self.vendors.write().await.get_mut(username) {
            Some(vendor) => {
                vendor.is_active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_admin_is_seeded() {
        let config = EnvironmentConfig::default();
        let hasher = PasswordHasher::new(4);
        let store = InMemoryCredentialStore::with_default_admin(&config, &hasher).unwrap();

        let admin = store.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.role, VendorRole::Admin);
        assert!(admin.is_active);
        assert!(hasher.verify("admin123", &admin.password_hash).unwrap());
        assert_ne!(admin.password_hash, "admin123");

        assert!(store.find_by_id(1).await.unwrap().is_some());
        assert!(store.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_active_toggles_flag() {
        let config = EnvironmentConfig::default();
        let store = InMemoryCredentialStore::with_default_admin(&config, &PasswordHasher::new(4)).unwrap();

        assert!(store.set_active("admin", false).await.unwrap());
        assert!(!store.find_by_username("admin").await.unwrap().unwrap().is_active);
        assert!(!store.set_active("ghost", false).await.unwrap());
    }
}
