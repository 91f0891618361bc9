//! Dashboard aggregates.
//!
//! Derived figures computed by the system of record, not persisted
//! documents: they carry no `name` and use camelCase wire keys.

use serde::{Deserialize, Serialize};

use erpnext_core::{CompanyId, DocType, FieldSpec, FieldType, Schema, Select, select};

use crate::advisory::Advise;

select! {
    /// Reporting window for company-scoped metrics.
    pub enum MetricsPeriod {
        Today => "today",
        Week => "week",
        Month => "month",
        Quarter => "quarter",
        Year => "year",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_revenue: f64,
    pub outstanding_amount: f64,
    pub total_customers: f64,
    pub active_leads: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_opportunities: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_projects: Option<f64>,
}

impl DocType for DashboardMetrics {
    const SCHEMA: &'static Schema = &Schema::new(
        "Dashboard Metrics",
        &[
            FieldSpec::required("totalRevenue", FieldType::Float),
            FieldSpec::required("outstandingAmount", FieldType::Float),
            FieldSpec::required("totalCustomers", FieldType::Float),
            FieldSpec::required("activeLeads", FieldType::Float),
            FieldSpec::optional("openOpportunities", FieldType::Float),
            FieldSpec::optional("activeProjects", FieldType::Float),
        ],
    );
}

impl Advise for DashboardMetrics {}

/// [`DashboardMetrics`] scoped to one company and period.
///
/// The base metrics are embedded, not inherited: on the wire their keys sit
/// beside `company` and `period` in one flat object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMetrics {
    #[serde(flatten)]
    pub metrics: DashboardMetrics,
    pub company: CompanyId,
    pub period: MetricsPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_previous: Option<f64>,
}

impl DocType for CompanyMetrics {
    const SCHEMA: &'static Schema = &Schema::new(
        "Company Metrics",
        &[
            FieldSpec::embed(DashboardMetrics::SCHEMA),
            FieldSpec::required("company", FieldType::Link(CompanyId::TARGET)),
            FieldSpec::required("period", FieldType::Select(MetricsPeriod::OPTIONS)),
            FieldSpec::optional("comparisonPrevious", FieldType::Float),
        ],
    );
}

impl Advise for CompanyMetrics {}

impl core::ops::Deref for CompanyMetrics {
    type Target = DashboardMetrics;

    fn deref(&self) -> &Self::Target {
        &self.metrics
    }
}
