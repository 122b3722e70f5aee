use sqlx::SqlitePool;

use crate::models::purchase_type::PurchaseType;
use crate::models::sale::{NewSale, SaleSummary};
use crate::models::vehicle::Vehicle;
use crate::repositories::{PurchaseTypeRepository, SaleRepository, VehicleRepository};
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::normalize_search;

/// Orquesta el catálogo y el registro de ventas.
///
/// Registrar una venta no descuenta stock del catálogo.
pub struct SalesService {
    vehicles: VehicleRepository,
    purchase_types: PurchaseTypeRepository,
    sales: SaleRepository,
}

impl SalesService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            purchase_types: PurchaseTypeRepository::new(pool.clone()),
            sales: SaleRepository::new(pool),
        }
    }

    pub async fn list_available_vehicles(&self, search: Option<&str>) -> Result<Vec<Vehicle>, AppError> {
        let search = normalize_search(search);
        self.vehicles.list_available(search.as_deref()).await
    }

    pub async fn list_purchase_types(&self) -> Result<Vec<PurchaseType>, AppError> {
        self.purchase_types.list_all().await
    }

    /// Registra una venta y devuelve su id
    pub async fn register_sale(&self, sale: NewSale) -> Result<i64, AppError> {
        let required = [
            ("amount_text", &sale.amount_text),
            ("buyer_name", &sale.buyer_name),
            ("buyer_id", &sale.buyer_id),
            ("buyer_contact", &sale.buyer_contact),
            ("branch", &sale.branch),
            ("vendor_name", &sale.vendor_name),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(bad_request_error(&format!("El campo '{}' es requerido", field)));
        }

        let id = self.sales.insert(&sale).await?;

        tracing::info!("✅ Venta registrada exitosamente - ID: {}", id);
        tracing::info!("   - Vendedor: {} ({})", sale.vendor_name, sale.branch);
        tracing::info!("   - Comprador: {} (DNI: {})", sale.buyer_name, sale.buyer_id);
        tracing::info!("   - Monto: {}", sale.amount_text);

        Ok(id)
    }

    /// Historial de un vendedor, más reciente primero, a lo sumo `limit` filas
    pub async fn list_sales_for_vendor(&self, vendor_id: i64, limit: u32) -> Result<Vec<SaleSummary>, AppError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.sales.list_for_vendor(vendor_id, limit).await
    }
}
