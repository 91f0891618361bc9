//! `erpnext-core`: shape-description building blocks.
//!
//! Field types, static schemas, the collecting validator and the
//! [`DocType`] contract that every concrete record shape implements. This
//! crate is pure: no IO, no shared state.

pub mod check;
pub mod date;
pub mod doctype;
pub mod error;
pub mod field;
pub mod finite;
pub mod link;
pub mod select;
pub mod validate;

pub use doctype::{DocType, Document};
pub use error::{SchemaResult, SchemaViolation, UnknownOption, Violation, ViolationKind};
pub use field::{FieldSpec, FieldType, Schema};
pub use link::{CompanyId, CustomerId, ItemCode, ProjectId};
pub use select::Select;
