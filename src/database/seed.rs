//! Datos iniciales
//!
//! Vendedores, tipos de compra y catálogo de autos 2024. Idempotente: si
//! ya existe algún vendedor no se inserta nada. Todo el seed corre en una
//! sola transacción.

use sqlx::SqlitePool;

use crate::models::vehicle::NewVehicle;
use crate::models::vendor::{NewVendor, VendorRole};
use crate::repositories::{PurchaseTypeRepository, VehicleRepository, VendorRepository};
use crate::services::password::PasswordHasher;
use crate::utils::errors::AppError;

/// (username, password, nombre, email, rol, código, sucursal)
const VENDORS: &[(&str, &str, &str, &str, VendorRole, &str, &str)] = &[
    ("admin", "admin123", "Administrador", "admin@automotrizjj.com", VendorRole::Admin, "ADM001", "LIMA"),
    ("OMAR", "omar2024", "Omar Gonzales", "omar@automotrizjj.com", VendorRole::Seller, "VEN001", "PIURA"),
    ("CIRO", "ciro2024", "Ciro Ramírez", "ciro@automotrizjj.com", VendorRole::Seller, "VEN002", "LIMA"),
    ("JUAN", "juan2024", "Juan Pérez", "juan@automotrizjj.com", VendorRole::Seller, "VEN003", "AREQUIPA"),
    ("LUCIA", "lucia2024", "Lucía Torres", "lucia@automotrizjj.com", VendorRole::Seller, "VEN004", "LIMA"),
    ("VALERIA", "valeria2024", "Valeria Sánchez", "valeria@automotrizjj.com", VendorRole::Seller, "VEN005", "PIURA"),
    ("ANGELICA", "angelica2024", "Angélica Flores", "angelica@automotrizjj.com", VendorRole::Seller, "VEN006", "AREQUIPA"),
];

const PURCHASE_TYPES: &[(&str, &str)] = &[
    ("Cash", "Pago en efectivo completo"),
    ("Crédito", "Pago mediante financiamiento"),
];

const VEHICLES: &[(&str, &str, i32, f64)] = &[
    ("Toyota", "Corolla", 2024, 85000.00),
    ("Toyota", "Yaris", 2024, 65000.00),
    ("Toyota", "RAV4", 2024, 125000.00),
    ("Honda", "Civic", 2024, 90000.00),
    ("Honda", "CR-V", 2024, 130000.00),
    ("Honda", "Accord", 2024, 110000.00),
    ("Nissan", "Sentra", 2024, 75000.00),
    ("Nissan", "Kicks", 2024, 80000.00),
    ("Nissan", "X-Trail", 2024, 120000.00),
    ("Hyundai", "Elantra", 2024, 78000.00),
    ("Hyundai", "Tucson", 2024, 115000.00),
    ("Hyundai", "Accent", 2024, 62000.00),
    ("Mazda", "3", 2024, 88000.00),
    ("Mazda", "CX-5", 2024, 128000.00),
    ("Mazda", "2", 2024, 68000.00),
    ("Kia", "Forte", 2024, 76000.00),
    ("Kia", "Sportage", 2024, 122000.00),
    ("Kia", "Rio", 2024, 64000.00),
    ("Chevrolet", "Cruze", 2024, 82000.00),
    ("Chevrolet", "Tracker", 2024, 95000.00),
    ("Ford", "Focus", 2024, 79000.00),
    ("Ford", "Escape", 2024, 118000.00),
    ("BMW", "Serie 3", 2024, 180000.00),
    ("BMW", "X3", 2024, 220000.00),
];

/// Inserta los datos iniciales si la base está vacía.
///
/// Devuelve `false` cuando se omitió porque ya había datos.
pub async fn seed_initial_data(pool: &SqlitePool, hasher: &PasswordHasher) -> Result<bool, AppError> {
    let vendors = VendorRepository::new(pool.clone());
    if vendors.count().await? > 0 {
        tracing::info!("Los datos iniciales ya existen, omitiendo seed...");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    for (username, password, full_name, email, role, code, branch) in VENDORS {
        VendorRepository::insert(
            &mut *tx,
            &NewVendor {
                username: username.to_string(),
                password_hash: hasher.hash(password)?,
                full_name: full_name.to_string(),
                email: Some(email.to_string()),
                role: *role,
                vendor_code: code.to_string(),
                branch: branch.to_string(),
            },
        )
        .await?;
    }

    for (name, description) in PURCHASE_TYPES {
        PurchaseTypeRepository::insert(&mut *tx, name, Some(*description)).await?;
    }

    for (make, model, year, price) in VEHICLES {
        VehicleRepository::insert(&mut *tx, &NewVehicle::new(make, model, *year, *price)).await?;
    }

    tx.commit().await?;

    tracing::info!("✅ Datos iniciales insertados correctamente");
    tracing::info!("   - {} vendedores", VENDORS.len());
    tracing::info!("   - {} tipos de compra", PURCHASE_TYPES.len());
    tracing::info!("   - {} autos disponibles", VEHICLES.len());

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::database::DatabaseConfig;
    use crate::database::schema::init_schema;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        init_schema(&pool).await.unwrap();
        let hasher = PasswordHasher::new(4);

        assert!(seed_initial_data(&pool, &hasher).await.unwrap());
        assert!(!seed_initial_data(&pool, &hasher).await.unwrap());

        assert_eq!(VendorRepository::new(pool.clone()).count().await.unwrap(), 7);
        assert_eq!(VehicleRepository::new(pool.clone()).count().await.unwrap(), 24);

        let types = PurchaseTypeRepository::new(pool.clone()).list_all().await.unwrap();
        let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Cash", "Crédito"]);
    }

    #[tokio::test]
    async fn test_failed_seed_leaves_nothing_behind() {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        init_schema(&pool).await.unwrap();
        let hasher = PasswordHasher::new(4);

        // "Cash" ya existe: el seed choca con la restricción UNIQUE a mitad de camino
        PurchaseTypeRepository::new(pool.clone())
            .create("Cash", None)
            .await
            .unwrap();

        assert!(seed_initial_data(&pool, &hasher).await.is_err());
        assert_eq!(VendorRepository::new(pool.clone()).count().await.unwrap(), 0);
        assert_eq!(VehicleRepository::new(pool.clone()).count().await.unwrap(), 0);

        sqlx::query("DELETE FROM purchase_types WHERE name = 'Cash'")
            .execute(&pool)
            .await
            .unwrap();

        assert!(seed_initial_data(&pool, &hasher).await.unwrap());
        assert_eq!(VendorRepository::new(pool.clone()).count().await.unwrap(), 7);
        assert_eq!(VehicleRepository::new(pool.clone()).count().await.unwrap(), 24);
    }

    #[tokio::test]
    async fn test_seeded_passwords_are_hashed() {
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        init_schema(&pool).await.unwrap();
        let hasher = PasswordHasher::new(4);
        seed_initial_data(&pool, &hasher).await.unwrap();

        let omar = VendorRepository::new(pool)
            .find_by_username("OMAR")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(omar.password_hash, "omar2024");
        assert!(hasher.verify("omar2024", &omar.password_hash).unwrap());
        assert_eq!(omar.role, VendorRole::Seller);
        assert_eq!(omar.branch, "PIURA");
    }
}
