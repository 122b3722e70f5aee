//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto; un valor numérico mal formado es un error
//! de configuración.

use std::env;
use std::str::FromStr;

use crate::utils::errors::AppError;

const DEV_JWT_SECRET: &str = "automotriz-jj-dev-secret-change-in-production";

/// Origen de las credenciales de vendedores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialBackend {
    /// Tabla `vendors` en la base de datos
    Database,
    /// Conjunto fijo en memoria sembrado al arrancar
    Memory,
}

impl FromStr for CredentialBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "database" | "db" => Ok(CredentialBackend::Database),
            "memory" => Ok(CredentialBackend::Memory),
            other => Err(AppError::Internal(format!(
                "CREDENTIAL_BACKEND inválido: '{}'",
                other
            ))),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub access_token_expire_minutes: i64,
    pub cors_origins: Vec<String>,
    pub credential_backend: CredentialBackend,
    pub default_username: String,
    pub default_password: String,
    pub bcrypt_cost: u32,
    pub seed_data: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            app_name: "Automotriz JJ API".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: "sqlite://automotriz_jj.db?mode=rwc".to_string(),
            database_max_connections: 5,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            access_token_expire_minutes: 30,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
            credential_backend: CredentialBackend::Database,
            default_username: "admin".to_string(),
            default_password: "admin123".to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            seed_data: true,
        }
    }
}

impl EnvironmentConfig {
    /// Construir la configuración a partir de las variables de entorno
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            app_name: env::var("APP_NAME").unwrap_or(defaults.app_name),
            app_version: env::var("APP_VERSION").unwrap_or(defaults.app_version),
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: parse_var(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            access_token_expire_minutes: parse_var(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                defaults.access_token_expire_minutes,
            )?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            credential_backend: match env::var("CREDENTIAL_BACKEND") {
                Ok(value) => value.parse()?,
                Err(_) => defaults.credential_backend,
            },
            default_username: env::var("DEFAULT_USERNAME").unwrap_or(defaults.default_username),
            default_password: env::var("DEFAULT_PASSWORD").unwrap_or(defaults.default_password),
            bcrypt_cost: parse_var("BCRYPT_COST", defaults.bcrypt_cost)?,
            seed_data: parse_var("SEED_DATA", defaults.seed_data)?,
        };

        if config.access_token_expire_minutes <= 0 {
            return Err(AppError::Internal(
                "ACCESS_TOKEN_EXPIRE_MINUTES debe ser mayor que cero".to_string(),
            ));
        }

        if config.is_production() && config.jwt_secret == DEV_JWT_SECRET {
            tracing::warn!("⚠️ JWT_SECRET no configurado: usando el secreto de desarrollo en producción");
        }

        Ok(config)
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Internal(format!("{} tiene un valor inválido: '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert_eq!(config.access_token_expire_minutes, 30);
        assert_eq!(config.server_url(), "0.0.0.0:8000");
        assert_eq!(config.credential_backend, CredentialBackend::Database);
    }

    #[test]
    fn test_credential_backend_parsing() {
        assert_eq!("memory".parse::<CredentialBackend>().unwrap(), CredentialBackend::Memory);
        assert_eq!(" Database ".parse::<CredentialBackend>().unwrap(), CredentialBackend::Database);
        assert!("redis".parse::<CredentialBackend>().is_err());
    }
}
