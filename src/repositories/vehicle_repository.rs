use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::utils::errors::AppError;

const VEHICLE_COLUMNS: &str = "id, make, model, year, reference_price, stock, is_active, created_at";

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, AppError> {
        let id = {
            let mut conn = self.pool.acquire().await?;
            Self::insert(&mut *conn, vehicle).await?
        };

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Vehicle {} vanished after insert", id)))
    }

    pub async fn insert(conn: &mut SqliteConnection, vehicle: &NewVehicle) -> Result<i64, AppError> {
        let id = sqlx::query(
            r#"
            INSERT INTO vehicles (make, model, year, reference_price, stock, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, 1, ?)
            "#,
        )
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.reference_price)
        .bind(vehicle.stock)
        .bind(Utc::now())
        .execute(conn)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {} FROM vehicles WHERE id = ?",
            VEHICLE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Autos activos con stock, opcionalmente filtrados por marca, modelo
    /// o año (subcadena, sin distinguir mayúsculas).
    pub async fn list_available(&self, search: Option<&str>) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = match search {
            Some(term) => {
                // LIKE de SQLite solo ignora mayúsculas en ASCII
                let pattern = format!("%{}%", escape_like(term));
                sqlx::query_as::<_, Vehicle>(&format!(
                    r#"
                    SELECT {}
                    FROM vehicles
                    WHERE is_active = 1 AND stock > 0
                    AND (
                        make LIKE ?1 ESCAPE '\' OR
                        model LIKE ?1 ESCAPE '\' OR
                        CAST(year AS TEXT) LIKE ?1 ESCAPE '\'
                    )
                    ORDER BY make, model, year, id
                    "#,
                    VEHICLE_COLUMNS
                ))
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Vehicle>(&format!(
                    r#"
                    SELECT {}
                    FROM vehicles
                    WHERE is_active = 1 AND stock > 0
                    ORDER BY make, model, year, id
                    "#,
                    VEHICLE_COLUMNS
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(vehicles)
    }

    /// Retirar o reactivar una publicación del catálogo
    pub async fn set_active(&self, id: i64, active: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE vehicles SET is_active = ? WHERE id = ?")
            .bind(active)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Escapar comodines de LIKE para que el término se busque literalmente
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("cr-v"), "cr-v");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
    }
}
