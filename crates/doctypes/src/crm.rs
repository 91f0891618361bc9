//! CRM: leads and opportunities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use erpnext_core::{CompanyId, DocType, FieldSpec, FieldType, Schema, Select, select};

use crate::advisory::{Advise, Advisory, non_negative, percentage};

select! {
    pub enum LeadStatus {
        Open => "Open",
        Replied => "Replied",
        Opportunity => "Opportunity",
        Quotation => "Quotation",
        LostQuotation => "Lost Quotation",
        Interested => "Interested",
        Converted => "Converted",
        DoNotContact => "Do Not Contact",
    }
}

select! {
    /// Whether the opportunity's party is a lead or an existing customer.
    pub enum OpportunityFrom {
        Lead => "Lead",
        Customer => "Customer",
    }
}

select! {
    pub enum OpportunityStatus {
        Open => "Open",
        Quotation => "Quotation",
        Replied => "Replied",
        Closed => "Closed",
        Lost => "Lost",
        Converted => "Converted",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub lead_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_no: Option<String>,
    pub status: LeadStatus,
    pub source: String,
    pub company: CompanyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_owner: Option<String>,
}

impl DocType for Lead {
    const SCHEMA: &'static Schema = &Schema::new(
        "Lead",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("lead_name", FieldType::Data),
            FieldSpec::optional("email_id", FieldType::Data),
            FieldSpec::optional("mobile_no", FieldType::Data),
            FieldSpec::required("status", FieldType::Select(LeadStatus::OPTIONS)),
            FieldSpec::required("source", FieldType::Data),
            FieldSpec::required("company", FieldType::Link(CompanyId::TARGET)),
            FieldSpec::optional("lead_owner", FieldType::Data),
        ],
    );
}

impl Advise for Lead {}

/// `party_name` links to a Lead or a Customer depending on `opportunity_from`,
/// so it stays a plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub name: String,
    pub opportunity_from: OpportunityFrom,
    pub party_name: String,
    pub opportunity_type: String,
    pub status: OpportunityStatus,
    #[serde(with = "erpnext_core::date")]
    pub expected_closing: NaiveDate,
    pub opportunity_amount: f64,
    pub probability: f64,
    pub company: CompanyId,
}

impl DocType for Opportunity {
    const SCHEMA: &'static Schema = &Schema::new(
        "Opportunity",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("opportunity_from", FieldType::Select(OpportunityFrom::OPTIONS)),
            FieldSpec::required("party_name", FieldType::Data),
            FieldSpec::required("opportunity_type", FieldType::Data),
            FieldSpec::required("status", FieldType::Select(OpportunityStatus::OPTIONS)),
            FieldSpec::required("expected_closing", FieldType::Date),
            FieldSpec::required("opportunity_amount", FieldType::Float),
            FieldSpec::required("probability", FieldType::Float),
            FieldSpec::required("company", FieldType::Link(CompanyId::TARGET)),
        ],
    );
}

impl Advise for Opportunity {
    fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();
        percentage("probability", self.probability, &mut out);
        non_negative("opportunity_amount", self.opportunity_amount, &mut out);
        out
    }
}
