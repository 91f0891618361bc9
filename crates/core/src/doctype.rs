//! DocType trait: a typed record bound to its static schema.

use serde::Serialize;
use serde::de::{Deserialize, DeserializeOwned};
use serde_json::Value;

use crate::error::{SchemaResult, SchemaViolation, Violation};
use crate::field::Schema;
use crate::finite;

/// A record shape exchanged with the system of record.
///
/// Implementors are plain data: the struct's serde form and [`Self::SCHEMA`]
/// must describe the same field set. All three operations are pure.
pub trait DocType: Serialize + DeserializeOwned {
    /// Static shape descriptor.
    const SCHEMA: &'static Schema;

    /// Check an untyped value, reporting every violation.
    fn validate(value: &Value) -> SchemaResult<()> {
        Self::SCHEMA.validate(value)
    }

    /// Structured form with exactly the declared fields; absent optional
    /// fields are omitted.
    ///
    /// Non-finite numbers are reported at their path rather than written as
    /// `null`, and the output is validated before it is returned.
    fn encode(&self) -> SchemaResult<Value> {
        SchemaViolation::new(Self::SCHEMA.doctype, finite::scan(self)).into_result()?;

        let value = serde_json::to_value(self).map_err(|e| {
            SchemaViolation::single(Self::SCHEMA.doctype, Violation::malformed("", e.to_string()))
        })?;
        Self::validate(&value)?;
        Ok(value)
    }

    /// Inverse of [`DocType::encode`].
    fn decode(value: &Value) -> SchemaResult<Self> {
        if let Err(err) = Self::validate(value) {
            tracing::warn!(
                doctype = Self::SCHEMA.doctype,
                violations = err.len(),
                "rejected record"
            );
            return Err(err);
        }

        Self::deserialize(value).map_err(|e| {
            SchemaViolation::single(Self::SCHEMA.doctype, Violation::malformed("", e.to_string()))
        })
    }
}

/// A DocType persisted by the system of record under a unique `name`.
pub trait Document: DocType {
    /// Unique identifier of the record.
    fn name(&self) -> &str;
}
