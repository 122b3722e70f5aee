use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::vehicle::Vehicle;

// Query del catálogo: ?search=
#[derive(Debug, Deserialize, Default)]
pub struct VehicleQuery {
    pub search: Option<String>,
}

// Response de vehículo disponible
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub description: String,
    pub reference_price: Option<Decimal>,
    pub stock: i32,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            description: vehicle.description(),
            reference_price: vehicle
                .reference_price
                .and_then(Decimal::from_f64_retain)
                .map(|p| p.round_dp(2)),
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            stock: vehicle.stock,
        }
    }
}
