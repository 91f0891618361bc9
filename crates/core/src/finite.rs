//! Locating non-finite floats in a typed record.
//!
//! `serde_json` writes NaN and the infinities as `null`, which reads back as
//! an absent field. [`scan`] walks a record through the serde data model and
//! reports every such number at its wire path (`items[1].rate`,
//! `comparisonPrevious`).

use std::fmt::Display;

use serde::Serialize;
use serde::ser::{self, Serializer};
use serde_json::Value;

use crate::error::Violation;

pub const EXPECTED: &str = "finite number";

/// Every non-finite float in `value`, in serialization order.
pub fn scan<T: Serialize + ?Sized>(value: &T) -> Vec<Violation> {
    let mut out = Vec::new();
    // A failing `Serialize` impl fails `serde_json::to_value` as well, which
    // reports it; only the findings gathered so far matter here.
    let _ = value.serialize(Walker {
        path: String::new(),
        out: &mut out,
    });
    out
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct ScanError(String);

impl ser::Error for ScanError {
    fn custom<T: Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}

struct Walker<'a> {
    path: String,
    out: &'a mut Vec<Violation>,
}

impl Walker<'_> {
    fn field(&mut self, key: &str) -> Walker<'_> {
        let path = if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        };
        Walker {
            path,
            out: &mut *self.out,
        }
    }

    fn index(&mut self, idx: usize) -> Walker<'_> {
        Walker {
            path: format!("{}[{idx}]", self.path),
            out: &mut *self.out,
        }
    }

    fn float(self, value: f64) -> Result<(), ScanError> {
        if !value.is_finite() {
            self.out
                .push(Violation::wrong_type(self.path, EXPECTED, value.to_string()));
        }
        Ok(())
    }
}

/// Sequences, tuples and structs: children are indexed or keyed.
struct Compound<'a> {
    walker: Walker<'a>,
    next: usize,
}

impl Compound<'_> {
    fn element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ScanError> {
        let idx = self.next;
        self.next += 1;
        value.serialize(self.walker.index(idx))
    }
}

struct MapWalker<'a> {
    walker: Walker<'a>,
    key: String,
}

/// Map keys as they would appear in JSON.
fn key_string<T: Serialize + ?Sized>(key: &T) -> String {
    match serde_json::to_value(key) {
        Ok(Value::String(s)) => s,
        Ok(other) => other.to_string(),
        Err(_) => String::new(),
    }
}

impl<'a> Serializer for Walker<'a> {
    type Ok = ();
    type Error = ScanError;
    type SerializeSeq = Compound<'a>;
    type SerializeTuple = Compound<'a>;
    type SerializeTupleStruct = Compound<'a>;
    type SerializeTupleVariant = Compound<'a>;
    type SerializeMap = MapWalker<'a>;
    type SerializeStruct = Compound<'a>;
    type SerializeStructVariant = Compound<'a>;

    fn serialize_bool(self, _: bool) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_i8(self, _: i8) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_i16(self, _: i16) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_i32(self, _: i32) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_i64(self, _: i64) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_u8(self, _: u8) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_u16(self, _: u16) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_u32(self, _: u32) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_u64(self, _: u64) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_f32(self, value: f32) -> Result<(), ScanError> {
        self.float(value.into())
    }

    fn serialize_f64(self, value: f64) -> Result<(), ScanError> {
        self.float(value)
    }

    fn serialize_char(self, _: char) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_bytes(self, _: &[u8]) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_none(self) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), ScanError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
    ) -> Result<(), ScanError> {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> Result<(), ScanError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Result<(), ScanError> {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Compound<'a>, ScanError> {
        Ok(Compound {
            walker: self,
            next: 0,
        })
    }

    fn serialize_tuple(self, _: usize) -> Result<Compound<'a>, ScanError> {
        self.serialize_seq(None)
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Compound<'a>, ScanError> {
        self.serialize_seq(None)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Compound<'a>, ScanError> {
        self.serialize_seq(None)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<MapWalker<'a>, ScanError> {
        Ok(MapWalker {
            walker: self,
            key: String::new(),
        })
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Compound<'a>, ScanError> {
        self.serialize_seq(None)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Compound<'a>, ScanError> {
        self.serialize_seq(None)
    }
}

impl ser::SerializeSeq for Compound<'_> {
    type Ok = ();
    type Error = ScanError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ScanError> {
        self.element(value)
    }

    fn end(self) -> Result<(), ScanError> {
        Ok(())
    }
}

impl ser::SerializeTuple for Compound<'_> {
    type Ok = ();
    type Error = ScanError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ScanError> {
        self.element(value)
    }

    fn end(self) -> Result<(), ScanError> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for Compound<'_> {
    type Ok = ();
    type Error = ScanError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ScanError> {
        self.element(value)
    }

    fn end(self) -> Result<(), ScanError> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for Compound<'_> {
    type Ok = ();
    type Error = ScanError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ScanError> {
        self.element(value)
    }

    fn end(self) -> Result<(), ScanError> {
        Ok(())
    }
}

impl ser::SerializeStruct for Compound<'_> {
    type Ok = ();
    type Error = ScanError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ScanError> {
        value.serialize(self.walker.field(key))
    }

    fn end(self) -> Result<(), ScanError> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for Compound<'_> {
    type Ok = ();
    type Error = ScanError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ScanError> {
        value.serialize(self.walker.field(key))
    }

    fn end(self) -> Result<(), ScanError> {
        Ok(())
    }
}

// `#[serde(flatten)]` turns the enclosing struct into a map.
impl ser::SerializeMap for MapWalker<'_> {
    type Ok = ();
    type Error = ScanError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), ScanError> {
        self.key = key_string(key);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ScanError> {
        let key = std::mem::take(&mut self.key);
        value.serialize(self.walker.field(&key))
    }

    fn end(self) -> Result<(), ScanError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Line {
        qty: f64,
    }

    #[derive(Serialize)]
    struct Totals {
        #[serde(rename = "grandTotal")]
        grand_total: f64,
    }

    #[derive(Serialize)]
    struct Doc {
        #[serde(flatten)]
        totals: Totals,
        #[serde(skip_serializing_if = "Option::is_none")]
        previous: Option<f64>,
        lines: Vec<Line>,
    }

    #[test]
    fn finite_record_is_clean() {
        let doc = Doc {
            totals: Totals { grand_total: 10.0 },
            previous: None,
            lines: vec![Line { qty: 1.0 }],
        };
        assert!(scan(&doc).is_empty());
    }

    #[test]
    fn reports_flattened_optional_and_row_paths() {
        let doc = Doc {
            totals: Totals {
                grand_total: f64::NAN,
            },
            previous: Some(f64::INFINITY),
            lines: vec![Line { qty: 1.0 }, Line { qty: f64::NEG_INFINITY }],
        };

        assert_eq!(
            scan(&doc),
            vec![
                Violation::wrong_type("grandTotal", EXPECTED, "NaN"),
                Violation::wrong_type("previous", EXPECTED, "inf"),
                Violation::wrong_type("lines[1].qty", EXPECTED, "-inf"),
            ]
        );
    }

    #[test]
    fn map_keys_become_path_segments() {
        let map = BTreeMap::from([("rate", f64::NAN)]);
        assert_eq!(scan(&map), vec![Violation::wrong_type("rate", EXPECTED, "NaN")]);
    }
}
