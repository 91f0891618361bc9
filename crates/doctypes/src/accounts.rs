//! Accounts: sales invoices and payment entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use erpnext_core::{CompanyId, CustomerId, DocType, FieldSpec, FieldType, Schema, Select, select};

use crate::advisory::{AMOUNT_TOLERANCE, Advise, Advisory, non_negative};

select! {
    pub enum SalesInvoiceStatus {
        Draft => "Draft",
        Submitted => "Submitted",
        Paid => "Paid",
        Unpaid => "Unpaid",
        Overdue => "Overdue",
        Cancelled => "Cancelled",
        Return => "Return",
    }
}

select! {
    pub enum PaymentType {
        Receive => "Receive",
        Pay => "Pay",
        InternalTransfer => "Internal Transfer",
    }
}

select! {
    /// Kind of party on the other side of a payment.
    pub enum PartyType {
        Customer => "Customer",
        Supplier => "Supplier",
        Employee => "Employee",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesInvoice {
    pub name: String,
    pub customer: CustomerId,
    pub customer_name: String,
    #[serde(with = "erpnext_core::date")]
    pub posting_date: NaiveDate,
    #[serde(with = "erpnext_core::date")]
    pub due_date: NaiveDate,
    pub grand_total: f64,
    pub outstanding_amount: f64,
    pub status: SalesInvoiceStatus,
    pub company: CompanyId,
    pub currency: String,
}

impl DocType for SalesInvoice {
    const SCHEMA: &'static Schema = &Schema::new(
        "Sales Invoice",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("customer", FieldType::Link(CustomerId::TARGET)),
            FieldSpec::required("customer_name", FieldType::Data),
            FieldSpec::required("posting_date", FieldType::Date),
            FieldSpec::required("due_date", FieldType::Date),
            FieldSpec::required("grand_total", FieldType::Float),
            FieldSpec::required("outstanding_amount", FieldType::Float),
            FieldSpec::required("status", FieldType::Select(SalesInvoiceStatus::OPTIONS)),
            FieldSpec::required("company", FieldType::Link(CompanyId::TARGET)),
            FieldSpec::required("currency", FieldType::Data),
        ],
    );
}

impl Advise for SalesInvoice {
    fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();

        // Return invoices carry negative totals; compare magnitudes.
        if self.outstanding_amount.abs() > self.grand_total.abs() + AMOUNT_TOLERANCE {
            out.push(Advisory::new(
                "outstanding_amount",
                format!(
                    "outstanding amount {} exceeds grand total {}",
                    self.outstanding_amount, self.grand_total
                ),
            ));
        }

        if self.due_date < self.posting_date {
            out.push(Advisory::new(
                "due_date",
                format!(
                    "due date {} precedes posting date {}",
                    self.due_date, self.posting_date
                ),
            ));
        }

        if self.status == SalesInvoiceStatus::Paid && self.outstanding_amount.abs() > AMOUNT_TOLERANCE
        {
            out.push(Advisory::new(
                "status",
                format!(
                    "invoice is Paid but {} is still outstanding",
                    self.outstanding_amount
                ),
            ));
        }

        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub name: String,
    pub payment_type: PaymentType,
    #[serde(with = "erpnext_core::date")]
    pub posting_date: NaiveDate,
    pub party_type: PartyType,
    pub party: String,
    pub party_name: String,
    pub paid_amount: f64,
    pub received_amount: f64,
    pub company: CompanyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_of_payment: Option<String>,
}

impl DocType for PaymentEntry {
    const SCHEMA: &'static Schema = &Schema::new(
        "Payment Entry",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("payment_type", FieldType::Select(PaymentType::OPTIONS)),
            FieldSpec::required("posting_date", FieldType::Date),
            FieldSpec::required("party_type", FieldType::Select(PartyType::OPTIONS)),
            FieldSpec::required("party", FieldType::Data),
            FieldSpec::required("party_name", FieldType::Data),
            FieldSpec::required("paid_amount", FieldType::Float),
            FieldSpec::required("received_amount", FieldType::Float),
            FieldSpec::required("company", FieldType::Link(CompanyId::TARGET)),
            FieldSpec::optional("mode_of_payment", FieldType::Data),
        ],
    );
}

impl Advise for PaymentEntry {
    fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();
        non_negative("paid_amount", self.paid_amount, &mut out);
        non_negative("received_amount", self.received_amount, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erpnext_core::Violation;
    use serde_json::{Value, json};

    fn invoice_value() -> Value {
        json!({
            "name": "ACC-SINV-2024-00007",
            "customer": "Acme Corp",
            "customer_name": "Acme Corp",
            "posting_date": "2024-04-01",
            "due_date": "2024-05-01",
            "grand_total": 1180.0,
            "outstanding_amount": 180.0,
            "status": "Unpaid",
            "company": "Frappe Traders",
            "currency": "USD",
        })
    }

    fn payment_value() -> Value {
        json!({
            "name": "ACC-PAY-2024-00003",
            "payment_type": "Receive",
            "posting_date": "2024-04-10",
            "party_type": "Customer",
            "party": "Acme Corp",
            "party_name": "Acme Corp",
            "paid_amount": 1000,
            "received_amount": 1000,
            "company": "Frappe Traders",
        })
    }

    #[test]
    fn decode_invoice() {
        let invoice = SalesInvoice::decode(&invoice_value()).unwrap();
        assert_eq!(invoice.status, SalesInvoiceStatus::Unpaid);
        assert!(invoice.advisories().is_empty());
    }

    #[test]
    fn outstanding_above_total_is_flagged() {
        let mut value = invoice_value();
        value["outstanding_amount"] = json!(1200.0);

        let invoice = SalesInvoice::decode(&value).unwrap();
        let fields: Vec<_> = invoice.advisories().into_iter().map(|a| a.field).collect();
        assert_eq!(fields, vec!["outstanding_amount"]);
    }

    #[test]
    fn return_invoice_with_negative_totals_is_not_flagged() {
        let mut value = invoice_value();
        value["status"] = json!("Return");
        value["grand_total"] = json!(-100.0);
        value["outstanding_amount"] = json!(-100.0);

        let invoice = SalesInvoice::decode(&value).unwrap();
        assert!(invoice.advisories().is_empty());
    }

    #[test]
    fn paid_invoice_with_balance_is_flagged() {
        let mut value = invoice_value();
        value["status"] = json!("Paid");

        let invoice = SalesInvoice::decode(&value).unwrap();
        assert_eq!(invoice.advisories()[0].field, "status");
    }

    #[test]
    fn invoice_reports_all_problems_at_once() {
        let value = json!({
            "name": "ACC-SINV-2024-00008",
            "customer": "Acme Corp",
            "posting_date": "2024-04-01",
            "due_date": "next month",
            "grand_total": "1180",
            "outstanding_amount": 0,
            "status": "Settled",
            "company": "Frappe Traders",
            "currency": "USD",
        });

        let err = SalesInvoice::validate(&value).unwrap_err();
        assert_eq!(
            err.violations,
            vec![
                Violation::missing("customer_name"),
                Violation::wrong_type("due_date", "date (YYYY-MM-DD)", "\"next month\""),
                Violation::wrong_type("grand_total", "number", "string"),
                Violation::not_in_domain("status", "Settled", SalesInvoiceStatus::OPTIONS),
            ]
        );
    }

    #[test]
    fn payment_entry_round_trips_with_optional_mode() {
        let mut value = payment_value();
        value["mode_of_payment"] = json!("Wire Transfer");

        let payment = PaymentEntry::decode(&value).unwrap();
        assert_eq!(payment.payment_type, PaymentType::Receive);
        assert_eq!(payment.party_type, PartyType::Customer);
        assert_eq!(PaymentEntry::decode(&payment.encode().unwrap()).unwrap(), payment);
    }

    #[test]
    fn payment_entry_rejects_unknown_party_type() {
        let mut value = payment_value();
        value["party_type"] = json!("Shareholder");
        value["payment_type"] = json!("Internal Transfer");

        let err = PaymentEntry::validate(&value).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::not_in_domain("party_type", "Shareholder", PartyType::OPTIONS)]
        );
    }

    #[test]
    fn negative_payment_is_flagged() {
        let mut value = payment_value();
        value["paid_amount"] = json!(-5);

        let payment = PaymentEntry::decode(&value).unwrap();
        assert_eq!(payment.advisories()[0].field, "paid_amount");
    }
}
