use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::vendor::{NewVendor, Vendor};
use crate::utils::errors::AppError;

const VENDOR_COLUMNS: &str = "id, username, password_hash, full_name, email, role, \
                              vendor_code, branch, is_active, created_at";

pub struct VendorRepository {
    pool: SqlitePool,
}

impl VendorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insertar un vendedor. Solo se usa al sembrar / aprovisionar.
    pub async fn create(&self, vendor: &NewVendor) -> Result<Vendor, AppError> {
        let id = {
            let mut conn = self.pool.acquire().await?;
            Self::insert(&mut *conn, vendor).await?
        };

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Vendor {} vanished after insert", id)))
    }

    /// Insertar sobre una conexión dada (p. ej. dentro de una transacción)
    pub async fn insert(conn: &mut SqliteConnection, vendor: &NewVendor) -> Result<i64, AppError> {
        let id = sqlx::query(
            r#"
            INSERT INTO vendors (
                username, password_hash, full_name, email, role,
                vendor_code, branch, is_active, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, 1, ?)
            "#,
        )
        .bind(&vendor.username)
        .bind(&vendor.password_hash)
        .bind(&vendor.full_name)
        .bind(&vendor.email)
        .bind(vendor.role)
        .bind(&vendor.vendor_code)
        .bind(&vendor.branch)
        .bind(Utc::now())
        .execute(conn)
        .await
        .map_err(|e| {
            tracing::error!("❌ Error creando vendedor '{}': {}", vendor.username, e);
            AppError::Database(e)
        })?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Vendor>, AppError> {
        let vendor = sqlx::query_as::<_, Vendor>(&format!(
            "SELECT {} FROM vendors WHERE username = ?",
            VENDOR_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vendor)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vendor>, AppError> {
        let vendor = sqlx::query_as::<_, Vendor>(&format!(
            "SELECT {} FROM vendors WHERE id = ?",
            VENDOR_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vendor)
    }

    /// Activar o desactivar una cuenta. Devuelve `false` si no existe.
    pub async fn set_active(&self, username: &str, active: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE vendors SET is_active = ? WHERE username = ?")
            .bind(active)
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vendors")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
