//! Selling: customers and sales orders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use erpnext_core::{
    CompanyId, CustomerId, DocType, FieldSpec, FieldType, ItemCode, Schema, Select, select,
};

use crate::advisory::{AMOUNT_TOLERANCE, Advise, Advisory};

select! {
    /// Sales order workflow status.
    pub enum SalesOrderStatus {
        Draft => "Draft",
        ToDeliverAndBill => "To Deliver and Bill",
        ToBill => "To Bill",
        ToDeliver => "To Deliver",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

impl SalesOrderStatus {
    /// Whether the order has left draft and is still live.
    pub fn is_submitted(self) -> bool {
        !matches!(self, SalesOrderStatus::Draft | SalesOrderStatus::Cancelled)
    }
}

select! {
    pub enum CustomerType {
        Company => "Company",
        Individual => "Individual",
    }
}

/// Child row of a sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderItem {
    pub item_code: ItemCode,
    pub item_name: String,
    pub qty: f64,
    pub rate: f64,
    pub amount: f64,
}

impl DocType for SalesOrderItem {
    const SCHEMA: &'static Schema = &Schema::new(
        "Sales Order Item",
        &[
            FieldSpec::required("item_code", FieldType::Link(ItemCode::TARGET)),
            FieldSpec::required("item_name", FieldType::Data),
            FieldSpec::required("qty", FieldType::Float),
            FieldSpec::required("rate", FieldType::Float),
            FieldSpec::required("amount", FieldType::Float),
        ],
    );
}

impl Advise for SalesOrderItem {
    fn advisories(&self) -> Vec<Advisory> {
        let expected = self.qty * self.rate;
        if (self.amount - expected).abs() > AMOUNT_TOLERANCE {
            vec![Advisory::new(
                "amount",
                format!(
                    "amount {} differs from qty × rate = {expected}",
                    self.amount
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub name: String,
    pub customer: CustomerId,
    pub customer_name: String,
    #[serde(with = "erpnext_core::date")]
    pub transaction_date: NaiveDate,
    #[serde(with = "erpnext_core::date")]
    pub delivery_date: NaiveDate,
    pub grand_total: f64,
    pub status: SalesOrderStatus,
    pub company: CompanyId,
    pub currency: String,
    pub items: Vec<SalesOrderItem>,
}

impl DocType for SalesOrder {
    const SCHEMA: &'static Schema = &Schema::new(
        "Sales Order",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("customer", FieldType::Link(CustomerId::TARGET)),
            FieldSpec::required("customer_name", FieldType::Data),
            FieldSpec::required("transaction_date", FieldType::Date),
            FieldSpec::required("delivery_date", FieldType::Date),
            FieldSpec::required("grand_total", FieldType::Float),
            FieldSpec::required("status", FieldType::Select(SalesOrderStatus::OPTIONS)),
            FieldSpec::required("company", FieldType::Link(CompanyId::TARGET)),
            FieldSpec::required("currency", FieldType::Data),
            FieldSpec::required("items", FieldType::Table(SalesOrderItem::SCHEMA)),
        ],
    );
}

impl Advise for SalesOrder {
    fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();

        if self.status.is_submitted() && self.items.is_empty() {
            out.push(Advisory::new(
                "items",
                format!("order is {} but has no items", self.status),
            ));
        }

        if self.delivery_date < self.transaction_date {
            out.push(Advisory::new(
                "delivery_date",
                format!(
                    "delivery date {} precedes transaction date {}",
                    self.delivery_date, self.transaction_date
                ),
            ));
        }

        for (idx, item) in self.items.iter().enumerate() {
            let prefix = format!("items[{idx}]");
            out.extend(item.advisories().into_iter().map(|a| a.within(&prefix)));
        }

        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub customer_name: String,
    pub customer_type: CustomerType,
    pub customer_group: String,
    pub territory: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyId>,
}

impl DocType for Customer {
    const SCHEMA: &'static Schema = &Schema::new(
        "Customer",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("customer_name", FieldType::Data),
            FieldSpec::required("customer_type", FieldType::Select(CustomerType::OPTIONS)),
            FieldSpec::required("customer_group", FieldType::Data),
            FieldSpec::required("territory", FieldType::Data),
            FieldSpec::optional("email_id", FieldType::Data),
            FieldSpec::optional("mobile_no", FieldType::Data),
            FieldSpec::optional("company", FieldType::Link(CompanyId::TARGET)),
        ],
    );
}

impl Advise for Customer {}
