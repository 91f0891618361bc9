//! `erpnext-doctypes`: typed record shapes exchanged with ERPNext.
//!
//! One Rust type per DocType, grouped by ERPNext module. Each implements
//! [`DocType`] (validate / encode / decode against its static schema) and
//! [`Advise`] (business-rule findings that never reject a record). The
//! [`catalog`] module resolves DocTypes by name for untyped callers.
//!
//! Everything here is a snapshot of data owned by the system of record: no
//! IO, no defaults, no referential checks between records.

pub mod accounts;
pub mod advisory;
pub mod catalog;
pub mod crm;
pub mod error;
pub mod metrics;
pub mod projects;
pub mod selling;
pub mod setup;
pub mod stock;

pub use accounts::{PartyType, PaymentEntry, PaymentType, SalesInvoice, SalesInvoiceStatus};
pub use advisory::{Advise, Advisory};
pub use crm::{Lead, LeadStatus, Opportunity, OpportunityFrom, OpportunityStatus};
pub use error::{CatalogError, CatalogResult};
pub use metrics::{CompanyMetrics, DashboardMetrics, MetricsPeriod};
pub use projects::{Project, ProjectStatus, Task, TaskPriority, TaskStatus};
pub use selling::{Customer, CustomerType, SalesOrder, SalesOrderItem, SalesOrderStatus};
pub use setup::Company;
pub use stock::{Item, StockEntry, StockEntryType};

pub use erpnext_core::{
    CompanyId, CustomerId, DocType, Document, ItemCode, ProjectId, Schema, SchemaViolation,
    Select, Violation, ViolationKind,
};

macro_rules! impl_document {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Document for $t {
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )+
    };
}

impl_document!(
    SalesOrder,
    SalesInvoice,
    Customer,
    Lead,
    Opportunity,
    Project,
    Task,
    Item,
    StockEntry,
    PaymentEntry,
    Company,
);
