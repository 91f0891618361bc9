//! Tracing and logging setup shared by the catalog binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{DEFAULT_FILTER, init, init_with_default};
