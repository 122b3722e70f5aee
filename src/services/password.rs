//! Hashing de contraseñas
//!
//! Los hashes nuevos son bcrypt. La verificación también acepta el digest
//! SHA-256 hexadecimal sin sal de las bases heredadas; ese esquema es
//! débil y solo se mantiene por compatibilidad con datos existentes.

use sha2::{Digest, Sha256};

use crate::utils::errors::AppError;

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashear una contraseña nueva con bcrypt
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::Hash(format!("Error hasheando password: {}", e)))
    }

    /// Verificar una contraseña contra el hash guardado
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, AppError> {
        if stored_hash.starts_with("$2") {
            return bcrypt::verify(password, stored_hash)
                .map_err(|e| AppError::Hash(format!("Error verificando password: {}", e)));
        }

        if is_legacy_digest(stored_hash) {
            let matches = constant_time_eq::constant_time_eq(
                legacy_digest(password).as_bytes(),
                stored_hash.to_ascii_lowercase().as_bytes(),
            );
            if matches {
                tracing::warn!("⚠️ Credencial con hash SHA-256 heredado; debería rehashearse con bcrypt");
            }
            return Ok(matches);
        }

        tracing::warn!("Formato de hash desconocido en el almacén de credenciales");
        Ok(false)
    }
}

/// Digest heredado: SHA-256 en hexadecimal, sin sal
pub fn legacy_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

fn is_legacy_digest(hash: &str) -> bool {
    hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_roundtrip() {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("omar2024").unwrap();

        assert!(hash.starts_with("$2"));
        assert!(hasher.verify("omar2024", &hash).unwrap());
        assert!(!hasher.verify("omar2025", &hash).unwrap());
    }

    #[test]
    fn test_legacy_digest_is_accepted() {
        let hasher = PasswordHasher::new(4);
        let stored = legacy_digest("admin123");

        assert_eq!(
            stored,
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
        );
        assert!(hasher.verify("admin123", &stored).unwrap());
        assert!(!hasher.verify("admin124", &stored).unwrap());
    }

    #[test]
    fn test_unknown_hash_format_never_matches() {
        let hasher = PasswordHasher::new(4);
        assert!(!hasher.verify("plain", "plain").unwrap());
    }
}
