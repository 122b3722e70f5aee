//! Utilidades de validación
//!
//! Validadores personalizados usados por los DTO con `validator`.

use validator::ValidationError;

/// Validar que un string no esté vacío (ni compuesto solo de espacios)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar un término de búsqueda opcional: vacío equivale a sin filtro
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Jane Doe").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_normalize_search() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("  ")), None);
        assert_eq!(normalize_search(Some(" toyota ")), Some("toyota".to_string()));
    }
}
