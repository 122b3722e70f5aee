//! Conexión a SQLite
//!
//! Crea el pool, aplica el schema y, si se pidió, siembra los datos
//! iniciales.

use sqlx::SqlitePool;

use crate::config::database::{mask_database_url, DatabaseConfig};
use crate::config::environment::EnvironmentConfig;
use crate::services::password::PasswordHasher;
use crate::utils::errors::AppError;

use super::{schema, seed};

pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Conectar y preparar la base de datos según la configuración
    pub async fn connect(config: &EnvironmentConfig, hasher: &PasswordHasher) -> Result<Self, AppError> {
        let db_config = DatabaseConfig::from(config);
        tracing::info!("🗄️ Conectando a {}", mask_database_url(&db_config.url));

        let pool = db_config.create_pool().await?;
        Self::prepare(pool, config.seed_data, hasher).await
    }

    /// Aplicar schema (y seed) sobre un pool ya creado
    pub async fn prepare(pool: SqlitePool, seed_data: bool, hasher: &PasswordHasher) -> Result<Self, AppError> {
        schema::init_schema(&pool).await?;
        if seed_data {
            seed::seed_initial_data(&pool, hasher).await?;
        }
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
