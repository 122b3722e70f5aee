use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::purchase_type::PurchaseType;
use crate::utils::errors::AppError;

pub struct PurchaseTypeRepository {
    pool: SqlitePool,
}

impl PurchaseTypeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<PurchaseType, AppError> {
        let mut conn = self.pool.acquire().await?;
        Self::insert(&mut *conn, name, description).await
    }

    pub async fn insert(
        conn: &mut SqliteConnection,
        name: &str,
        description: Option<&str>,
    ) -> Result<PurchaseType, AppError> {
        let purchase_type = sqlx::query_as::<_, PurchaseType>(
            r#"
            INSERT INTO purchase_types (name, description, created_at)
            VALUES (?, ?, ?)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;

        Ok(purchase_type)
    }

    pub async fn list_all(&self) -> Result<Vec<PurchaseType>, AppError> {
        let types = sqlx::query_as::<_, PurchaseType>(
            "SELECT id, name, description, created_at FROM purchase_types ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(types)
    }
}
