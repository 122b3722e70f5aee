use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::middleware::auth::AuthenticatedVendor;
use crate::models::sale::NewSale;

pub const DEFAULT_HISTORY_LIMIT: u32 = 50;
pub const MAX_HISTORY_LIMIT: u32 = 500;

// Request para registrar una venta.
// El vendedor, su nombre y su sucursal salen del token, no del body.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterSaleRequest {
    #[validate(range(min = 1))]
    pub vehicle_id: i64,

    #[validate(range(min = 1))]
    pub purchase_type_id: i64,

    #[validate(length(max = 50), custom = "crate::utils::validation::validate_not_empty")]
    pub amount_text: String,

    #[validate(length(max = 150), custom = "crate::utils::validation::validate_not_empty")]
    pub buyer_name: String,

    #[validate(length(max = 20), custom = "crate::utils::validation::validate_not_empty")]
    pub buyer_id: String,

    #[validate(length(max = 100), custom = "crate::utils::validation::validate_not_empty")]
    pub buyer_contact: String,

    pub sold_at: Option<DateTime<Utc>>,
}

impl RegisterSaleRequest {
    pub fn into_new_sale(self, vendor: &AuthenticatedVendor) -> NewSale {
        NewSale {
            vendor_id: vendor.id,
            vehicle_id: self.vehicle_id,
            purchase_type_id: self.purchase_type_id,
            amount_text: self.amount_text.trim().to_string(),
            buyer_name: self.buyer_name.trim().to_string(),
            buyer_id: self.buyer_id.trim().to_string(),
            buyer_contact: self.buyer_contact.trim().to_string(),
            branch: vendor.branch.clone(),
            vendor_name: vendor.full_name.clone(),
            sold_at: self.sold_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterSaleResponse {
    pub id: i64,
}

// Query del historial: ?limit=
#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

impl HistoryQuery {
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .min(MAX_HISTORY_LIMIT)
    }
}
