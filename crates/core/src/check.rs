//! Serde adapter for "Check" (boolean) fields.
//!
//! The system of record emits checks as `0`/`1` integers; JSON booleans are
//! accepted too. Encoding always produces a JSON boolean.
//!
//! ```ignore
//! #[serde(with = "erpnext_core::check")]
//! pub is_stock_item: bool,
//! ```

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serializer};

pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(*value)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Bool(bool),
        Int(u64),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Bool(flag) => Ok(flag),
        Repr::Int(0) => Ok(false),
        Repr::Int(1) => Ok(true),
        Repr::Int(other) => Err(de::Error::invalid_value(
            Unexpected::Unsigned(other),
            &"0 or 1",
        )),
    }
}
