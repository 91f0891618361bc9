//! Schema violation model.

use core::fmt;

use thiserror::Error;

/// Result type used across the catalog.
pub type SchemaResult<T> = Result<T, SchemaViolation>;

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required field is absent (or `null`).
    Missing,

    /// The field is present but holds the wrong primitive type.
    WrongType {
        expected: &'static str,
        found: String,
    },

    /// The field holds a string outside its enumerated domain.
    NotInDomain {
        value: String,
        allowed: &'static [&'static str],
    },

    /// The validator accepted the value but the typed decoder did not.
    Malformed(String),
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing => f.write_str("required field is missing"),
            ViolationKind::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ViolationKind::NotInDomain { value, allowed } => {
                write!(f, "{value:?} is not one of [{}]", allowed.join(", "))
            }
            ViolationKind::Malformed(reason) => write!(f, "malformed value: {reason}"),
        }
    }
}

/// A single field-level problem.
///
/// `path` is the wire key, dotted for nested records and indexed for table
/// rows (`items[2].qty`). The empty path denotes the record itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn missing(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Missing,
        }
    }

    pub fn wrong_type(
        path: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::WrongType {
                expected,
                found: found.into(),
            },
        }
    }

    pub fn not_in_domain(
        path: impl Into<String>,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::NotInDomain {
                value: value.into(),
                allowed,
            },
        }
    }

    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Malformed(reason.into()),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(record): {}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// Every violation found in one record of one DocType.
///
/// Validation never stops at the first problem, so `violations` is the
/// complete list for the record in wire order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{doctype} violates its schema: {}", summarize(.violations))]
pub struct SchemaViolation {
    pub doctype: &'static str,
    pub violations: Vec<Violation>,
}

impl SchemaViolation {
    pub fn new(doctype: &'static str, violations: Vec<Violation>) -> Self {
        Self {
            doctype,
            violations,
        }
    }

    pub fn single(doctype: &'static str, violation: Violation) -> Self {
        Self::new(doctype, vec![violation])
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> SchemaResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Violations reported at exactly `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.path == path)
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_options(allowed: &[&str]) -> String {
    allowed.join(", ")
}

/// Parse failure for a closed string enumeration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{value:?} is not one of [{}]", join_options(.allowed))]
pub struct UnknownOption {
    pub value: String,
    pub allowed: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_ok() {
        assert!(SchemaViolation::new("Customer", Vec::new()).into_result().is_ok());
    }

    #[test]
    fn display_lists_every_violation() {
        let err = SchemaViolation::new(
            "Customer",
            vec![
                Violation::missing("name"),
                Violation::not_in_domain("customer_type", "Corporation", &["Company", "Individual"]),
            ],
        );

        let text = err.to_string();
        assert!(text.starts_with("Customer violates its schema"));
        assert!(text.contains("name: required field is missing"));
        assert!(text.contains("customer_type: \"Corporation\" is not one of [Company, Individual]"));
    }

    #[test]
    fn root_violation_has_readable_path() {
        let v = Violation::wrong_type("", "object", "array");
        assert_eq!(v.to_string(), "(record): expected object, found array");
    }

    #[test]
    fn at_filters_by_path() {
        let err = SchemaViolation::new(
            "Task",
            vec![Violation::missing("subject"), Violation::missing("company")],
        );
        assert_eq!(err.at("company").count(), 1);
        assert_eq!(err.at("project").count(), 0);
    }
}
