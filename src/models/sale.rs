//! Modelo de Sale
//!
//! Registro de ventas de solo inserción. El nombre del vendedor y la
//! sucursal se copian en el momento de la venta y no siguen los cambios
//! posteriores del vendedor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Sale - mapea exactamente a la tabla sales
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Sale {
    pub id: i64,
    pub sold_at: DateTime<Utc>,
    pub vendor_id: i64,
    pub vehicle_id: i64,
    pub purchase_type_id: i64,
    pub amount_text: String,
    pub buyer_name: String,
    pub buyer_id: String,
    pub buyer_contact: String,
    pub branch: String,
    pub vendor_name: String,
    pub created_at: DateTime<Utc>,
}

/// Datos de una venta a registrar
#[derive(Debug, Clone)]
pub struct NewSale {
    pub vendor_id: i64,
    pub vehicle_id: i64,
    pub purchase_type_id: i64,
    pub amount_text: String,
    pub buyer_name: String,
    pub buyer_id: String,
    pub buyer_contact: String,
    pub branch: String,
    pub vendor_name: String,
    /// Si es `None` el servidor asigna la hora actual
    pub sold_at: Option<DateTime<Utc>>,
}

/// Fila del historial de ventas de un vendedor, con campos de despliegue
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct SaleSummary {
    pub id: i64,
    pub sold_at: DateTime<Utc>,
    pub amount_text: String,
    pub buyer_name: String,
    pub buyer_id: String,
    pub buyer_contact: String,
    /// "marca modelo año"
    pub vehicle: String,
    pub purchase_type: String,
    pub branch: String,
    pub vendor_name: String,
}
