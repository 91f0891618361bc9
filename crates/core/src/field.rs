//! Static shape descriptors: field types, field specs and schemas.

use serde_json::Value;

use crate::error::SchemaResult;

/// Value domain of a single field, named after the ERPNext fieldtypes.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    /// Free-form string.
    Data,
    /// String identifier of a record of the named DocType.
    Link(&'static str),
    /// Decimal number.
    Float,
    /// Boolean flag (`true`/`false`, or ERPNext's `0`/`1`).
    Check,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// One string out of a closed set.
    Select(&'static [&'static str]),
    /// Ordered sequence of child rows.
    Table(&'static Schema),
    /// Fields of another schema spliced into the same object.
    Embed(&'static Schema),
}

impl FieldType {
    /// Human-readable domain name used in violations.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldType::Data | FieldType::Link(_) | FieldType::Select(_) => "string",
            FieldType::Float => "number",
            FieldType::Check => "boolean",
            FieldType::Date => "date (YYYY-MM-DD)",
            FieldType::Table(_) => "array",
            FieldType::Embed(_) => "object",
        }
    }
}

/// One declared field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Exact wire key. Empty for [`FieldType::Embed`].
    pub key: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(key: &'static str, ty: FieldType) -> Self {
        Self {
            key,
            ty,
            required: true,
        }
    }

    pub const fn optional(key: &'static str, ty: FieldType) -> Self {
        Self {
            key,
            ty,
            required: false,
        }
    }

    /// Compose every field of `schema` into the enclosing record.
    pub const fn embed(schema: &'static Schema) -> Self {
        Self {
            key: "",
            ty: FieldType::Embed(schema),
            required: true,
        }
    }
}

/// Named record shape.
#[derive(Debug)]
pub struct Schema {
    /// DocType name as the system of record spells it (`"Sales Order"`).
    pub doctype: &'static str,
    /// Declared fields in wire order.
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(doctype: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { doctype, fields }
    }

    /// Declared fields with embedded schemas expanded in place.
    pub fn leaf_fields(&self) -> Vec<&'static FieldSpec> {
        let mut out = Vec::with_capacity(self.fields.len());
        collect_leaves(self.fields, &mut out);
        out
    }

    /// Look up a declared field by wire key, including embedded ones.
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.leaf_fields().into_iter().find(|f| f.key == key)
    }

    pub fn required_keys(&self) -> impl Iterator<Item = &'static str> {
        self.leaf_fields()
            .into_iter()
            .filter(|f| f.required)
            .map(|f| f.key)
    }

    pub fn optional_keys(&self) -> impl Iterator<Item = &'static str> {
        self.leaf_fields()
            .into_iter()
            .filter(|f| !f.required)
            .map(|f| f.key)
    }

    /// Check an untyped value against this shape, collecting every violation.
    pub fn validate(&self, value: &Value) -> SchemaResult<()> {
        crate::validate::validate(self, value)
    }
}

fn collect_leaves(fields: &'static [FieldSpec], out: &mut Vec<&'static FieldSpec>) {
    for field in fields {
        match field.ty {
            FieldType::Embed(inner) => collect_leaves(inner.fields, out),
            _ => out.push(field),
        }
    }
}
