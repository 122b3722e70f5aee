//! Modelo de Vendor
//!
//! Cuentas del personal de ventas. Mapea a la tabla `vendors`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rol del vendedor - se guarda como texto en minúsculas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VendorRole {
    Admin,
    Seller,
}

/// Vendor - mapea exactamente a la tabla vendors
///
/// `password_hash` nunca se serializa hacia afuera; usar [`VendorProfile`].
#[derive(Debug, Clone, FromRow)]
pub struct Vendor {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub email: Option<String>,
    pub role: VendorRole,
    pub vendor_code: String,
    pub branch: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar un vendedor (solo seed / aprovisionamiento)
#[derive(Debug, Clone)]
pub struct NewVendor {
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub email: Option<String>,
    pub role: VendorRole,
    pub vendor_code: String,
    pub branch: String,
}

/// Perfil público del vendedor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorProfile {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub role: VendorRole,
    pub vendor_code: String,
    pub branch: String,
    pub is_active: bool,
}

impl From<&Vendor> for VendorProfile {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id,
            username: vendor.username.clone(),
            full_name: vendor.full_name.clone(),
            email: vendor.email.clone(),
            role: vendor.role,
            vendor_code: vendor.vendor_code.clone(),
            branch: vendor.branch.clone(),
            is_active: vendor.is_active,
        }
    }
}

impl From<Vendor> for VendorProfile {
    fn from(vendor: Vendor) -> Self {
        VendorProfile::from(&vendor)
    }
}
