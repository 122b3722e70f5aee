//! Services module
//!
//! Lógica de negocio: credenciales, tokens, autenticación y ventas.

pub mod auth_service;
pub mod credential_store;
pub mod jwt_service;
pub mod password;
pub mod sales_service;

pub use auth_service::AuthService;
pub use credential_store::{CredentialStore, InMemoryCredentialStore};
pub use jwt_service::{IssuedToken, JwtConfig, JwtService};
pub use password::PasswordHasher;
pub use sales_service::SalesService;
