//! Report assembly: the filter/aggregate/rank primitives and the per-type
//! assemblers composed over them.
//!
//! [`generate_report`] is the single entry point the app calls: it pulls
//! a snapshot from the [`RecordSource`] collaborator and runs the pure
//! assembly pipeline over it. Two concurrent generations never share
//! state; each call works on its own snapshot.

pub mod aggregate;
pub mod employees;
pub mod filter;
pub mod financial;
pub mod materials;
pub mod projects;
pub mod ranking;

pub use aggregate::GroupBucket;
pub use employees::{EmployeeHours, EmployeesReport};
pub use filter::{FieldIndex, FieldValue, FilterSet};
pub use financial::{FinancialReport, MonthlyFlow};
pub use materials::{LowStockItem, MaterialsReport};
pub use projects::ProjectsReport;
pub use ranking::top_n;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DateRange;
use crate::errors::Result;
use crate::format::LocaleConfig;
use crate::source::RecordSource;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Financial,
    Projects,
    Employees,
    Materials,
}

/// Optional entity narrowing applied before aggregation. Only the
/// financial report consumes these today.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReportFilters {
    pub project_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
}

/// A rendered detail listing: header labels plus pre-formatted cells,
/// ready for on-screen tables and CSV export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Output of one generation run. Ephemeral: the caller discards it when a
/// newer report replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Financial(FinancialReport),
    Projects(ProjectsReport),
    Employees(EmployeesReport),
    Materials(MaterialsReport),
}

/// Fetches the records the requested report needs and assembles it.
///
/// Any fetch failure maps to [`crate::errors::ReportError::Fetch`] with
/// no partial report. `reference` is the caller's notion of today, used
/// for derived overdue flags so the computation stays reproducible.
pub fn generate_report(
    source: &dyn RecordSource,
    kind: ReportKind,
    period: DateRange,
    reference: NaiveDate,
    filters: &ReportFilters,
    locale: &LocaleConfig,
) -> Result<Report> {
    tracing::debug!(?kind, ?period, "generating report");
    let report = match kind {
        ReportKind::Financial => {
            let transactions = source.transactions(&period)?;
            let invoices = source.invoices(&period)?;
            Report::Financial(financial::assemble(
                &transactions,
                &invoices,
                period,
                filters,
                locale,
            ))
        }
        ReportKind::Projects => {
            let projects = source.projects()?;
            Report::Projects(projects::assemble(&projects, reference, locale))
        }
        ReportKind::Employees => {
            let employees = source.employees()?;
            let attendance = source.attendance(&period)?;
            Report::Employees(employees::assemble(&employees, &attendance, period, locale))
        }
        ReportKind::Materials => {
            let materials = source.materials()?;
            Report::Materials(materials::assemble(&materials, locale))
        }
    };
    tracing::info!(?kind, "report generated");
    Ok(report)
}
