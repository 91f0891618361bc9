//! Stock: items and stock entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use erpnext_core::{CompanyId, DocType, FieldSpec, FieldType, ItemCode, Schema, Select, select};

use crate::advisory::{Advise, Advisory, non_negative};

select! {
    pub enum StockEntryType {
        MaterialIssue => "Material Issue",
        MaterialReceipt => "Material Receipt",
        MaterialTransfer => "Material Transfer",
        Manufacture => "Manufacture",
        Repack => "Repack",
    }
}

impl StockEntryType {
    /// Stock leaves a warehouse.
    pub fn needs_source(self) -> bool {
        matches!(
            self,
            StockEntryType::MaterialIssue
                | StockEntryType::MaterialTransfer
                | StockEntryType::Manufacture
        )
    }

    /// Stock arrives in a warehouse.
    pub fn needs_target(self) -> bool {
        matches!(
            self,
            StockEntryType::MaterialReceipt
                | StockEntryType::MaterialTransfer
                | StockEntryType::Manufacture
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub item_code: ItemCode,
    pub item_name: String,
    pub item_group: String,
    pub stock_uom: String,
    #[serde(with = "erpnext_core::check")]
    pub is_stock_item: bool,
    pub valuation_rate: f64,
    pub standard_rate: f64,
}

impl DocType for Item {
    const SCHEMA: &'static Schema = &Schema::new(
        "Item",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("item_code", FieldType::Data),
            FieldSpec::required("item_name", FieldType::Data),
            FieldSpec::required("item_group", FieldType::Data),
            FieldSpec::required("stock_uom", FieldType::Data),
            FieldSpec::required("is_stock_item", FieldType::Check),
            FieldSpec::required("valuation_rate", FieldType::Float),
            FieldSpec::required("standard_rate", FieldType::Float),
        ],
    );
}

impl Advise for Item {
    fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();
        non_negative("valuation_rate", self.valuation_rate, &mut out);
        non_negative("standard_rate", self.standard_rate, &mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub name: String,
    pub stock_entry_type: StockEntryType,
    #[serde(with = "erpnext_core::date")]
    pub posting_date: NaiveDate,
    pub company: CompanyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_warehouse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_warehouse: Option<String>,
    pub total_amount: f64,
}

impl DocType for StockEntry {
    const SCHEMA: &'static Schema = &Schema::new(
        "Stock Entry",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("stock_entry_type", FieldType::Select(StockEntryType::OPTIONS)),
            FieldSpec::required("posting_date", FieldType::Date),
            FieldSpec::required("company", FieldType::Link(CompanyId::TARGET)),
            FieldSpec::optional("from_warehouse", FieldType::Data),
            FieldSpec::optional("to_warehouse", FieldType::Data),
            FieldSpec::required("total_amount", FieldType::Float),
        ],
    );
}

impl Advise for StockEntry {
    fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();
        let kind = self.stock_entry_type;

        if kind.needs_source() && self.from_warehouse.is_none() {
            out.push(Advisory::new(
                "from_warehouse",
                format!("{kind} entries move stock out of a warehouse"),
            ));
        }
        if kind.needs_target() && self.to_warehouse.is_none() {
            out.push(Advisory::new(
                "to_warehouse",
                format!("{kind} entries move stock into a warehouse"),
            ));
        }
        if kind == StockEntryType::MaterialTransfer
            && self.from_warehouse.is_some()
            && self.from_warehouse == self.to_warehouse
        {
            out.push(Advisory::new(
                "to_warehouse",
                "transfer source and target warehouse are the same",
            ));
        }

        non_negative("total_amount", self.total_amount, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erpnext_core::Violation;
    use serde_json::{Value, json};

    fn item_value() -> Value {
        json!({
            "name": "WIDGET",
            "item_code": "WIDGET",
            "item_name": "Widget",
            "item_group": "Products",
            "stock_uom": "Nos",
            "is_stock_item": 1,
            "valuation_rate": 42.5,
            "standard_rate": 60,
        })
    }

    fn transfer_value() -> Value {
        json!({
            "name": "MAT-STE-2024-00002",
            "stock_entry_type": "Material Transfer",
            "posting_date": "2024-06-03",
            "company": "Frappe Traders",
            "from_warehouse": "Stores - FT",
            "to_warehouse": "Finished Goods - FT",
            "total_amount": 850,
        })
    }

    #[test]
    fn item_check_accepts_integer_flag_and_encodes_boolean() {
        let item = Item::decode(&item_value()).unwrap();
        assert!(item.is_stock_item);

        let encoded = item.encode().unwrap();
        assert_eq!(encoded["is_stock_item"], json!(true));
        assert_eq!(Item::decode(&encoded).unwrap(), item);
    }

    #[test]
    fn item_check_rejects_other_values() {
        let mut value = item_value();
        value["is_stock_item"] = json!("yes");

        let err = Item::validate(&value).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::wrong_type("is_stock_item", "boolean", "string")]
        );
    }

    #[test]
    fn transfer_with_both_warehouses_has_no_advisories() {
        let entry = StockEntry::decode(&transfer_value()).unwrap();
        assert_eq!(entry.stock_entry_type, StockEntryType::MaterialTransfer);
        assert!(entry.advisories().is_empty());
    }

    #[test]
    fn transfer_without_warehouses_still_validates_but_is_flagged() {
        let mut value = transfer_value();
        let object = value.as_object_mut().unwrap();
        object.remove("from_warehouse");
        object.remove("to_warehouse");

        assert!(StockEntry::validate(&value).is_ok());
        let entry = StockEntry::decode(&value).unwrap();
        let fields: Vec<_> = entry.advisories().into_iter().map(|a| a.field).collect();
        assert_eq!(fields, vec!["from_warehouse", "to_warehouse"]);
    }

    #[test]
    fn receipt_only_needs_target() {
        let mut value = transfer_value();
        value["stock_entry_type"] = json!("Material Receipt");
        value.as_object_mut().unwrap().remove("from_warehouse");

        let entry = StockEntry::decode(&value).unwrap();
        assert!(entry.advisories().is_empty());
    }

    #[test]
    fn posting_date_must_be_canonical() {
        for posting_date in [
            "2024-3-1",
            " 2024-03-01",
            "2024-03-01 ",
            "2024 - 03 - 01",
            "+2024-03-01",
            "-0001-01-01",
        ] {
            let mut value = transfer_value();
            value["posting_date"] = json!(posting_date);

            let err = StockEntry::decode(&value).unwrap_err();
            assert_eq!(
                err.violations,
                vec![Violation::wrong_type(
                    "posting_date",
                    "date (YYYY-MM-DD)",
                    format!("{posting_date:?}")
                )],
            );
        }
    }

    #[test]
    fn posting_date_survives_encode_unchanged() {
        let entry = StockEntry::decode(&transfer_value()).unwrap();
        assert_eq!(entry.encode().unwrap()["posting_date"], json!("2024-06-03"));
    }

    #[test]
    fn same_warehouse_transfer_is_flagged() {
        let mut value = transfer_value();
        value["to_warehouse"] = json!("Stores - FT");

        let entry = StockEntry::decode(&value).unwrap();
        assert_eq!(entry.advisories().len(), 1);
    }
}
