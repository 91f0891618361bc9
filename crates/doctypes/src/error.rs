//! Catalog-level errors.

use erpnext_core::SchemaViolation;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The value does not match the DocType's shape.
    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    /// The input was not JSON at all.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No DocType with this name is registered.
    #[error("unknown doctype: {0}")]
    UnknownDocType(String),
}

impl CatalogError {
    /// Field-level violations, when this is a schema error.
    pub fn violation(&self) -> Option<&SchemaViolation> {
        match self {
            CatalogError::Schema(v) => Some(v),
            _ => None,
        }
    }
}
