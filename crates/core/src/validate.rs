//! Collecting validator for untyped values.
//!
//! Walks a [`Schema`] against a `serde_json::Value` and records every problem
//! it finds instead of stopping at the first one. Unknown keys are ignored and
//! `null` is treated the same as an absent key.

use serde_json::{Map, Value};

use crate::date;
use crate::error::{SchemaResult, SchemaViolation, Violation};
use crate::field::{FieldSpec, FieldType, Schema};

/// Validate `value` against `schema`.
pub fn validate(schema: &Schema, value: &Value) -> SchemaResult<()> {
    let violations = collect(schema, value);
    tracing::debug!(
        doctype = schema.doctype,
        violations = violations.len(),
        "validated record"
    );
    SchemaViolation::new(schema.doctype, violations).into_result()
}

/// Every violation of `value` against `schema`, in wire order.
pub fn collect(schema: &Schema, value: &Value) -> Vec<Violation> {
    let mut out = Vec::new();
    check_record(schema, value, "", &mut out);
    out
}

fn check_record(schema: &Schema, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match value.as_object() {
        Some(object) => check_fields(schema.fields, object, path, out),
        None => out.push(Violation::wrong_type(path, "object", kind_of(value))),
    }
}

fn check_fields(
    fields: &[FieldSpec],
    object: &Map<String, Value>,
    prefix: &str,
    out: &mut Vec<Violation>,
) {
    for field in fields {
        if let FieldType::Embed(inner) = field.ty {
            check_fields(inner.fields, object, prefix, out);
            continue;
        }

        let path = join(prefix, field.key);
        match object.get(field.key) {
            None | Some(Value::Null) => {
                if field.required {
                    out.push(Violation::missing(path));
                }
            }
            Some(value) => check_value(field.ty, value, &path, out),
        }
    }
}

fn check_value(ty: FieldType, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match ty {
        FieldType::Data | FieldType::Link(_) => {
            if !value.is_string() {
                out.push(Violation::wrong_type(path, ty.expected(), kind_of(value)));
            }
        }
        FieldType::Float => {
            if !value.is_number() {
                out.push(Violation::wrong_type(path, ty.expected(), kind_of(value)));
            }
        }
        FieldType::Check => {
            let ok = match value {
                Value::Bool(_) => true,
                Value::Number(n) => matches!(n.as_u64(), Some(0 | 1)),
                _ => false,
            };
            if !ok {
                out.push(Violation::wrong_type(path, ty.expected(), describe(value)));
            }
        }
        FieldType::Date => match value.as_str() {
            Some(s) if date::parse(s).is_some() => {}
            Some(s) => out.push(Violation::wrong_type(path, ty.expected(), format!("{s:?}"))),
            None => out.push(Violation::wrong_type(path, ty.expected(), kind_of(value))),
        },
        FieldType::Select(options) => match value.as_str() {
            Some(s) if options.iter().any(|o| *o == s) => {}
            Some(s) => out.push(Violation::not_in_domain(path, s, options)),
            None => out.push(Violation::wrong_type(path, ty.expected(), kind_of(value))),
        },
        FieldType::Table(child) => match value.as_array() {
            Some(rows) => {
                for (idx, row) in rows.iter().enumerate() {
                    check_record(child, row, &format!("{path}[{idx}]"), out);
                }
            }
            None => out.push(Violation::wrong_type(path, ty.expected(), kind_of(value))),
        },
        FieldType::Embed(inner) => check_record(inner, value, path, out),
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Numbers are echoed so `is_stock_item: 2` reads as such.
fn describe(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        other => kind_of(other).to_string(),
    }
}
