//! Modelo de Vehicle
//!
//! Catálogo de autos a la venta. Mapea a la tabla `vehicles`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub reference_price: Option<f64>,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Descripción legible: "marca modelo año"
    pub fn description(&self) -> String {
        format!("{} {} {}", self.make, self.model, self.year)
    }
}

/// Datos para insertar un vehículo en el catálogo
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub reference_price: Option<f64>,
    pub stock: i32,
}

impl NewVehicle {
    pub fn new(make: &str, model: &str, year: i32, reference_price: f64) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            year,
            reference_price: Some(reference_price),
            stock: 1,
        }
    }

    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }
}
