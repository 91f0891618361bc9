//! Business-rule advisories.
//!
//! The system of record expects relationships the shapes alone cannot express
//! (`amount = qty × rate`, percentages within 0..=100, ...). These checks report
//! such findings without ever rejecting a record: validation and decoding stay
//! purely structural.

use serde::Serialize;

/// Tolerance for monetary comparisons (half of the smallest currency unit).
pub const AMOUNT_TOLERANCE: f64 = 0.005;

/// A single business-rule observation about a decoded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    /// Wire path of the field the finding is about.
    pub field: String,
    pub message: String,
}

impl Advisory {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Same finding, re-rooted under `prefix` (e.g. a table row).
    pub fn within(self, prefix: &str) -> Self {
        Self {
            field: format!("{prefix}.{}", self.field),
            message: self.message,
        }
    }
}

impl core::fmt::Display for Advisory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Opt-in business-rule checks for a record type.
pub trait Advise {
    /// Findings for this record; empty when nothing stands out.
    fn advisories(&self) -> Vec<Advisory> {
        Vec::new()
    }
}

pub(crate) fn percentage(field: &str, value: f64, out: &mut Vec<Advisory>) {
    if !(0.0..=100.0).contains(&value) {
        out.push(Advisory::new(
            field,
            format!("expected a percentage between 0 and 100, got {value}"),
        ));
    }
}

pub(crate) fn non_negative(field: &str, value: f64, out: &mut Vec<Advisory>) {
    if value < 0.0 {
        out.push(Advisory::new(field, format!("expected a non-negative amount, got {value}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_bounds_are_inclusive() {
        let mut out = Vec::new();
        percentage("progress", 0.0, &mut out);
        percentage("progress", 100.0, &mut out);
        assert!(out.is_empty());

        percentage("progress", 100.5, &mut out);
        percentage("progress", -1.0, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn within_prefixes_field_path() {
        let a = Advisory::new("amount", "mismatch").within("items[0]");
        assert_eq!(a.field, "items[0].amount");
        assert_eq!(a.to_string(), "items[0].amount: mismatch");
    }
}
