//! Projects: projects and tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use erpnext_core::{
    CompanyId, CustomerId, DocType, FieldSpec, FieldType, ProjectId, Schema, Select, select,
};

use crate::advisory::{Advise, Advisory, percentage};

select! {
    pub enum ProjectStatus {
        Open => "Open",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

select! {
    pub enum TaskStatus {
        Open => "Open",
        Working => "Working",
        PendingReview => "Pending Review",
        Overdue => "Overdue",
        Template => "Template",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

select! {
    pub enum TaskPriority {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Urgent => "Urgent",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub project_name: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(
        default,
        with = "erpnext_core::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_start_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "erpnext_core::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_end_date: Option<NaiveDate>,
    pub percent_complete: f64,
    pub company: CompanyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerId>,
}

impl DocType for Project {
    const SCHEMA: &'static Schema = &Schema::new(
        "Project",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("project_name", FieldType::Data),
            FieldSpec::required("status", FieldType::Select(ProjectStatus::OPTIONS)),
            FieldSpec::optional("project_type", FieldType::Data),
            FieldSpec::optional("expected_start_date", FieldType::Date),
            FieldSpec::optional("expected_end_date", FieldType::Date),
            FieldSpec::required("percent_complete", FieldType::Float),
            FieldSpec::required("company", FieldType::Link(CompanyId::TARGET)),
            FieldSpec::optional("customer", FieldType::Link(CustomerId::TARGET)),
        ],
    );
}

impl Advise for Project {
    fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();
        percentage("percent_complete", self.percent_complete, &mut out);
        date_order(
            "expected_end_date",
            self.expected_start_date,
            self.expected_end_date,
            &mut out,
        );
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub subject: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectId>,
    #[serde(
        default,
        with = "erpnext_core::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub exp_start_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "erpnext_core::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub exp_end_date: Option<NaiveDate>,
    pub progress: f64,
    pub company: CompanyId,
}

impl DocType for Task {
    const SCHEMA: &'static Schema = &Schema::new(
        "Task",
        &[
            FieldSpec::required("name", FieldType::Data),
            FieldSpec::required("subject", FieldType::Data),
            FieldSpec::required("status", FieldType::Select(TaskStatus::OPTIONS)),
            FieldSpec::required("priority", FieldType::Select(TaskPriority::OPTIONS)),
            FieldSpec::optional("project", FieldType::Link(ProjectId::TARGET)),
            FieldSpec::optional("exp_start_date", FieldType::Date),
            FieldSpec::optional("exp_end_date", FieldType::Date),
            FieldSpec::required("progress", FieldType::Float),
            FieldSpec::required("company", FieldType::Link(CompanyId::TARGET)),
        ],
    );
}

impl Advise for Task {
    fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();
        percentage("progress", self.progress, &mut out);
        date_order("exp_end_date", self.exp_start_date, self.exp_end_date, &mut out);
        if self.status == TaskStatus::Completed && self.progress < 100.0 {
            out.push(Advisory::new(
                "progress",
                format!("task is Completed at {}% progress", self.progress),
            ));
        }
        out
    }
}

fn date_order(
    field: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    out: &mut Vec<Advisory>,
) {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            out.push(Advisory::new(
                field,
                format!("end date {end} precedes start date {start}"),
            ));
        }
    }
}
