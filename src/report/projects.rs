//! Projects report: portfolio counts, completion rate, and schedule
//! delay. Works over the full project list; the report period does not
//! narrow the portfolio.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Project, ProjectStatus};
use crate::format::{format_currency, format_date, format_missing, LocaleConfig};

use super::aggregate::{average, group_by, percentage, GroupBucket};
use super::DetailTable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsReport {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// Active projects whose planned end date lies before the reference
    /// date. Derived, never read from storage.
    pub overdue: usize,
    pub completion_rate: Decimal,
    /// Mean days finished past plan, over completed projects that carry
    /// both a planned and an actual end date; zero when none do.
    pub average_delay_days: Decimal,
    /// Per-status buckets: count of projects, budget sum as the value.
    pub by_status: Vec<GroupBucket>,
    pub rows: DetailTable,
}

pub fn assemble(projects: &[Project], reference: NaiveDate, locale: &LocaleConfig) -> ProjectsReport {
    let total = projects.len();
    let active = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .count();
    let completed = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Completed)
        .count();
    let overdue = projects.iter().filter(|p| p.is_overdue(reference)).count();

    let completion_rate = percentage(Decimal::from(completed), Decimal::from(total));

    let delays: Vec<i64> = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Completed)
        .filter_map(|p| p.schedule_delay_days())
        .collect();
    let delay_total: Decimal = delays.iter().map(|d| Decimal::from(*d)).sum();
    let average_delay_days = average(delay_total, delays.len());

    let refs: Vec<&Project> = projects.iter().collect();
    let by_status = group_by(
        &refs,
        |p| Some(p.status.as_str().to_string()),
        |p| p.budget.unwrap_or(Decimal::ZERO),
    )
    .into_values()
    .collect();

    ProjectsReport {
        total,
        active,
        completed,
        overdue,
        completion_rate,
        average_delay_days,
        by_status,
        rows: project_rows(projects, locale),
    }
}

fn project_rows(projects: &[Project], locale: &LocaleConfig) -> DetailTable {
    DetailTable {
        headers: vec![
            "Name".into(),
            "Status".into(),
            "Progress".into(),
            "Planned end".into(),
            "Actual end".into(),
            "Budget".into(),
        ],
        rows: projects
            .iter()
            .map(|p| {
                vec![
                    p.name.clone(),
                    p.status.as_str().into(),
                    format!("{} %", p.progress),
                    p.end_date.map(format_date).unwrap_or_else(format_missing),
                    p.actual_end_date
                        .map(format_date)
                        .unwrap_or_else(format_missing),
                    p.budget
                        .map(|b| format_currency(b, locale))
                        .unwrap_or_else(format_missing),
                ]
            })
            .collect(),
    }
}
