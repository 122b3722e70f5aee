//! Repositorios
//!
//! Acceso SQL por tabla. Cada operación toma una conexión del pool y la
//! devuelve al terminar, con éxito o con error.

pub mod purchase_type_repository;
pub mod sale_repository;
pub mod vehicle_repository;
pub mod vendor_repository;

pub use purchase_type_repository::PurchaseTypeRepository;
pub use sale_repository::SaleRepository;
pub use vehicle_repository::VehicleRepository;
pub use vendor_repository::VendorRepository;
