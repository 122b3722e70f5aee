//! Utilidades del sistema
//!
//! Manejo de errores y validación compartidos por todas las capas.

pub mod errors;
pub mod validation;
