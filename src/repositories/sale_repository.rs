use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::sale::{NewSale, Sale, SaleSummary};
use crate::utils::errors::AppError;

/// Acceso al registro de ventas. Solo expone inserción y lectura.
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insertar una venta dentro de una transacción.
    ///
    /// Las referencias a vendedor, vehículo y tipo de compra las valida la
    /// clave foránea; una violación se reporta como `NotFound` y la
    /// transacción se descarta sin dejar filas.
    pub async fn insert(&self, sale: &NewSale) -> Result<i64, AppError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO sales (
                sold_at, vendor_id, vehicle_id, purchase_type_id, amount_text,
                buyer_name, buyer_id, buyer_contact, branch, vendor_name, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sale.sold_at.unwrap_or(now))
        .bind(sale.vendor_id)
        .bind(sale.vehicle_id)
        .bind(sale.purchase_type_id)
        .bind(&sale.amount_text)
        .bind(&sale.buyer_name)
        .bind(&sale.buyer_id)
        .bind(&sale.buyer_contact)
        .bind(&sale.branch)
        .bind(&sale.vendor_name)
        .bind(now)
        .execute(&mut *tx)
        .await;

        let id = match result {
            Ok(done) => done.last_insert_rowid(),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                tracing::warn!(
                    "Venta rechazada: referencia inexistente (vendedor {}, vehículo {}, tipo {})",
                    sale.vendor_id,
                    sale.vehicle_id,
                    sale.purchase_type_id
                );
                return Err(AppError::NotFound(
                    "El vendedor, el vehículo o el tipo de compra no existe".to_string(),
                ));
            }
            Err(e) => {
                tracing::error!(
                    "❌ Error al registrar venta (vendedor {}, vehículo {}): {}",
                    sale.vendor_id,
                    sale.vehicle_id,
                    e
                );
                return Err(AppError::Database(e));
            }
        };

        tx.commit().await?;
        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Sale>, AppError> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, sold_at, vendor_id, vehicle_id, purchase_type_id, amount_text,
                   buyer_name, buyer_id, buyer_contact, branch, vendor_name, created_at
            FROM sales
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Últimas ventas de un vendedor, más recientes primero
    pub async fn list_for_vendor(&self, vendor_id: i64, limit: u32) -> Result<Vec<SaleSummary>, AppError> {
        let sales = sqlx::query_as::<_, SaleSummary>(
            r#"
            SELECT
                s.id,
                s.sold_at,
                s.amount_text,
                s.buyer_name,
                s.buyer_id,
                s.buyer_contact,
                v.make || ' ' || v.model || ' ' || v.year AS vehicle,
                pt.name AS purchase_type,
                s.branch,
                s.vendor_name
            FROM sales s
            JOIN vehicles v ON s.vehicle_id = v.id
            JOIN purchase_types pt ON s.purchase_type_id = pt.id
            WHERE s.vendor_id = ?
            ORDER BY s.sold_at DESC, s.id DESC
            LIMIT ?
            "#,
        )
        .bind(vendor_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
