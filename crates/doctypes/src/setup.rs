//! Setup: companies.

use serde::{Deserialize, Serialize};

use erpnext_core::{DocType, FieldSpec, FieldType, Schema};

use crate::advisory::{Advise, Advisory};

/// Longest abbreviation the system of record suffixes onto account and
/// warehouse names.
pub const MAX_ABBR_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub company_name: String,
    pub abbr: String,
    pub default_currency: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl DocType for Company {
    const SCHEMA: &'static Schema = &Schema::new(
        "Company",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("company_name", FieldType::Data),
            FieldSpec::required("abbr", FieldType::Data),
            FieldSpec::required("default_currency", FieldType::Data),
            FieldSpec::required("country", FieldType::Data),
            FieldSpec::optional("domain", FieldType::Data),
        ],
    );
}

impl Advise for Company {
    fn advisories(&self) -> Vec<Advisory> {
        let abbr = self.abbr.as_str();
        let well_formed = !abbr.is_empty()
            && abbr.chars().count() <= MAX_ABBR_LEN
            && abbr
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());

        if well_formed {
            Vec::new()
        } else {
            vec![Advisory::new(
                "abbr",
                format!("expected a short uppercase code, got {abbr:?}"),
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erpnext_core::Violation;
    use serde_json::{Value, json};

    fn company_value() -> Value {
        json!({
            "name": "Frappe Traders",
            "company_name": "Frappe Traders",
            "abbr": "FT",
            "default_currency": "USD",
            "country": "United States",
        })
    }

    #[test]
    fn decode_company() {
        let company = Company::decode(&company_value()).unwrap();
        assert!(company.advisories().is_empty());
        assert_eq!(company.encode().unwrap(), company_value());
    }

    #[test]
    fn lowercase_abbr_is_flagged() {
        let mut value = company_value();
        value["abbr"] = json!("frappe");

        let company = Company::decode(&value).unwrap();
        assert_eq!(company.advisories()[0].field, "abbr");
    }

    #[test]
    fn numeric_abbr_is_wrong_type() {
        let mut value = company_value();
        value["abbr"] = json!(42);
        value["domain"] = json!(["Manufacturing"]);

        let err = Company::validate(&value).unwrap_err();
        assert_eq!(
            err.violations,
            vec![
                Violation::wrong_type("abbr", "string", "number"),
                Violation::wrong_type("domain", "string", "array"),
            ]
        );
    }
}
