//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema SQLite.

pub mod purchase_type;
pub mod sale;
pub mod vehicle;
pub mod vendor;

pub use purchase_type::PurchaseType;
pub use sale::{NewSale, Sale, SaleSummary};
pub use vehicle::{NewVehicle, Vehicle};
pub use vendor::{NewVendor, Vendor, VendorProfile, VendorRole};
