//! Schema SQLite
//!
//! Tablas:
//! - `vendors`: cuentas del personal de ventas
//! - `purchase_types`: tipos de compra (búsqueda normalizada)
//! - `vehicles`: catálogo de autos disponibles
//! - `sales`: registro de ventas, solo inserción

use sqlx::{Executor, SqlitePool};

/// DDL completo. Idempotente.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS vendors (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    username      TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    full_name     TEXT NOT NULL,
    email         TEXT,
    role          TEXT NOT NULL DEFAULT 'seller' CHECK (role IN ('admin', 'seller')),
    vendor_code   TEXT UNIQUE NOT NULL,
    branch        TEXT NOT NULL,
    is_active     INTEGER NOT NULL DEFAULT 1,
    created_at    TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_vendors_username ON vendors(username);
CREATE INDEX IF NOT EXISTS idx_vendors_code ON vendors(vendor_code);
CREATE INDEX IF NOT EXISTS idx_vendors_branch ON vendors(branch);

CREATE TABLE IF NOT EXISTS purchase_types (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT UNIQUE NOT NULL,
    description TEXT,
    created_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_purchase_types_name ON purchase_types(name);

CREATE TABLE IF NOT EXISTS vehicles (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    make            TEXT NOT NULL,
    model           TEXT NOT NULL,
    year            INTEGER NOT NULL,
    reference_price REAL,
    stock           INTEGER NOT NULL DEFAULT 1 CHECK (stock >= 0),
    is_active       INTEGER NOT NULL DEFAULT 1,
    created_at      TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_vehicles_make ON vehicles(make);
CREATE INDEX IF NOT EXISTS idx_vehicles_model ON vehicles(model);
CREATE INDEX IF NOT EXISTS idx_vehicles_year ON vehicles(year);
CREATE INDEX IF NOT EXISTS idx_vehicles_active ON vehicles(is_active);

CREATE TABLE IF NOT EXISTS sales (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    sold_at          TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    vendor_id        INTEGER NOT NULL REFERENCES vendors(id) ON DELETE CASCADE,
    vehicle_id       INTEGER NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
    purchase_type_id INTEGER NOT NULL REFERENCES purchase_types(id) ON DELETE CASCADE,
    amount_text      TEXT NOT NULL,
    buyer_name       TEXT NOT NULL,
    buyer_id         TEXT NOT NULL,
    buyer_contact    TEXT NOT NULL,
    branch           TEXT NOT NULL,
    vendor_name      TEXT NOT NULL,
    created_at       TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_sales_sold_at ON sales(sold_at);
CREATE INDEX IF NOT EXISTS idx_sales_vendor ON sales(vendor_id);
CREATE INDEX IF NOT EXISTS idx_sales_vehicle ON sales(vehicle_id);
CREATE INDEX IF NOT EXISTS idx_sales_purchase_type ON sales(purchase_type_id);
CREATE INDEX IF NOT EXISTS idx_sales_buyer_id ON sales(buyer_id);
CREATE INDEX IF NOT EXISTS idx_sales_branch ON sales(branch);
"#;

/// Crear tablas e índices si no existen
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    (&mut *tx).execute(SCHEMA).await?;
    tx.commit().await?;

    tracing::info!("✅ Base de datos inicializada correctamente");
    Ok(())
}
