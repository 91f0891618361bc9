//! Strongly-typed references to other records.
//!
//! The system of record identifies documents by their `name` string. Each
//! newtype here carries the DocType it points at, so a company identifier
//! cannot be passed where a customer is expected. The wire form is the bare
//! string.

/// Declare a link newtype pointing at `$target`.
#[macro_export]
macro_rules! link {
    ($(#[$meta:meta])* $t:ident => $target:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            /// DocType this identifier refers to.
            pub const TARGET: &'static str = $target;

            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::convert::From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl ::core::convert::AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

link!(
    /// Reference to a `Company` record.
    CompanyId => "Company"
);
link!(
    /// Reference to a `Customer` record.
    CustomerId => "Customer"
);
link!(
    /// Reference to an `Item` record (its `item_code`).
    ItemCode => "Item"
);
link!(
    /// Reference to a `Project` record.
    ProjectId => "Project"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_is_the_bare_string() {
        let id = CompanyId::new("Acme Ltd");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("Acme Ltd"));

        let back: CompanyId = serde_json::from_str("\"Acme Ltd\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn target_names_the_referenced_doctype() {
        assert_eq!(CompanyId::TARGET, "Company");
        assert_eq!(ItemCode::TARGET, "Item");
    }

    #[test]
    fn display_matches_inner_value() {
        let id: CustomerId = "CUST-0001".into();
        assert_eq!(id.to_string(), "CUST-0001");
        assert_eq!(id.as_str(), "CUST-0001");
    }
}
