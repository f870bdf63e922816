//! Catalog error type.

use thiserror::Error;

/// Errors raised while loading or validating a disease catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {id}: field `{field}` must not be empty")]
    EmptyField { id: u32, field: &'static str },

    #[error("record {id}: crop name `All` is reserved for the crop selector")]
    ReservedCrop { id: u32 },

    #[error("duplicate record id {0}")]
    DuplicateId(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_field() {
        let e = CatalogError::EmptyField { id: 7, field: "crop" };
        let s = e.to_string();
        assert!(s.contains("record 7"));
        assert!(s.contains("crop"));
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: CatalogError = io.into();
        assert!(e.to_string().starts_with("IO error"));
    }
}
