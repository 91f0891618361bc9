//! Name-indexed registry of every DocType in the catalog.
//!
//! Lets callers that only know a DocType by name (a CLI argument, a webhook
//! header) validate or inspect untyped values without naming the Rust type.

use serde_json::Value;

use erpnext_core::{DocType, Schema};

use crate::accounts::{PaymentEntry, SalesInvoice};
use crate::advisory::{Advise, Advisory};
use crate::crm::{Lead, Opportunity};
use crate::error::{CatalogError, CatalogResult};
use crate::metrics::{CompanyMetrics, DashboardMetrics};
use crate::projects::{Project, Task};
use crate::selling::{Customer, SalesOrder, SalesOrderItem};
use crate::setup::Company;
use crate::stock::{Item, StockEntry};

/// One registered DocType.
#[derive(Clone, Copy)]
pub struct Entry {
    pub schema: &'static Schema,
    advise: fn(&Value) -> CatalogResult<Vec<Advisory>>,
}

impl Entry {
    const fn of<T: DocType + Advise>() -> Self {
        Self {
            schema: T::SCHEMA,
            advise: advise_value::<T>,
        }
    }

    pub fn doctype(&self) -> &'static str {
        self.schema.doctype
    }

    pub fn validate(&self, value: &Value) -> CatalogResult<()> {
        Ok(self.schema.validate(value)?)
    }

    /// Decode `value` as this DocType and run its business-rule checks.
    pub fn advisories(&self, value: &Value) -> CatalogResult<Vec<Advisory>> {
        (self.advise)(value)
    }
}

impl core::fmt::Debug for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Entry")
            .field("doctype", &self.schema.doctype)
            .finish_non_exhaustive()
    }
}

fn advise_value<T: DocType + Advise>(value: &Value) -> CatalogResult<Vec<Advisory>> {
    Ok(T::decode(value)?.advisories())
}

static ENTRIES: &[Entry] = &[
    Entry::of::<SalesOrder>(),
    Entry::of::<SalesOrderItem>(),
    Entry::of::<SalesInvoice>(),
    Entry::of::<Customer>(),
    Entry::of::<Lead>(),
    Entry::of::<Opportunity>(),
    Entry::of::<Project>(),
    Entry::of::<Task>(),
    Entry::of::<Item>(),
    Entry::of::<StockEntry>(),
    Entry::of::<PaymentEntry>(),
    Entry::of::<Company>(),
    Entry::of::<DashboardMetrics>(),
    Entry::of::<CompanyMetrics>(),
];

/// Every registered DocType, in catalog order.
pub fn entries() -> &'static [Entry] {
    ENTRIES
}

pub fn schemas() -> impl Iterator<Item = &'static Schema> {
    ENTRIES.iter().map(|e| e.schema)
}

/// Resolve a DocType by name.
///
/// Accepts the spelling of the system of record (`"Sales Order"`) and the
/// space-free form (`"SalesOrder"`).
pub fn lookup(doctype: &str) -> Option<&'static Entry> {
    ENTRIES.iter().find(|e| {
        let name = e.schema.doctype;
        name == doctype || name.chars().filter(|c| *c != ' ').eq(doctype.chars())
    })
}

fn entry(doctype: &str) -> CatalogResult<&'static Entry> {
    lookup(doctype).ok_or_else(|| {
        tracing::debug!(doctype, "unknown doctype");
        CatalogError::UnknownDocType(doctype.to_string())
    })
}

/// Validate an untyped value against the named DocType.
pub fn validate(doctype: &str, value: &Value) -> CatalogResult<()> {
    entry(doctype)?.validate(value)
}

/// Decode as the named DocType and run its business-rule checks.
pub fn advise(doctype: &str, value: &Value) -> CatalogResult<Vec<Advisory>> {
    entry(doctype)?.advisories(value)
}

/// Parse JSON text and decode it as `T`.
pub fn decode_str<T: DocType>(text: &str) -> CatalogResult<T> {
    let value: Value = serde_json::from_str(text)?;
    Ok(T::decode(&value)?)
}

/// Encode `doc` and render it as compact JSON text.
pub fn encode_string<T: DocType>(doc: &T) -> CatalogResult<String> {
    Ok(serde_json::to_string(&doc.encode()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctype_names_are_unique() {
        let mut names: Vec<_> = schemas().map(|s| s.doctype).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ENTRIES.len());
    }

    #[test]
    fn lookup_accepts_both_spellings() {
        assert_eq!(lookup("Sales Order").unwrap().doctype(), "Sales Order");
        assert_eq!(lookup("SalesOrder").unwrap().doctype(), "Sales Order");
        assert_eq!(lookup("CompanyMetrics").unwrap().doctype(), "Company Metrics");
        assert!(lookup("sales order").is_none());
        assert!(lookup("Purchase Order").is_none());
    }

    #[test]
    fn unknown_doctype_is_an_error() {
        let err = validate("Purchase Order", &Value::Null).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownDocType(name) if name == "Purchase Order"));
    }
}
