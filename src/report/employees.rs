//! Employees report: hours worked over the period, productivity against
//! the working-day capacity, and the busiest employees.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{AttendanceRecord, DateRange, Employee};
use crate::format::{format_number, LocaleConfig};

use super::aggregate::{average, percentage, sum, GroupBucket};
use super::filter::FilterSet;
use super::ranking::top_n;
use super::DetailTable;

const TOP_EMPLOYEES: usize = 5;
const HOURS_PER_WORKING_DAY: u32 = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeesReport {
    pub period: DateRange,
    pub total_hours: Decimal,
    /// Mean hours over the distinct employees appearing in the filtered
    /// attendance; zero when nobody logged time.
    pub average_hours_per_employee: Decimal,
    pub per_employee: Vec<EmployeeHours>,
    pub top_employees: Vec<GroupBucket>,
    pub rows: DetailTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeHours {
    pub employee_id: Uuid,
    pub name: String,
    pub total_hours: Decimal,
    /// Hours worked against the period's working-day capacity of eight
    /// hours per weekday, as a percentage; zero for an empty period.
    pub productivity: Decimal,
}

pub fn assemble(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    period: DateRange,
    locale: &LocaleConfig,
) -> EmployeesReport {
    let filter = FilterSet::new().with_date_range("date", period);
    let attendance = filter.apply(attendance);

    let total_hours = sum(&attendance, |a| a.hours_worked);
    let capacity = Decimal::from(period.working_days() * HOURS_PER_WORKING_DAY);

    let mut hours_by_employee: BTreeMap<Uuid, Decimal> = BTreeMap::new();
    for record in &attendance {
        *hours_by_employee
            .entry(record.employee_id)
            .or_insert(Decimal::ZERO) += record.hours_worked;
    }

    let average_hours_per_employee = average(total_hours, hours_by_employee.len());

    let mut per_employee: Vec<EmployeeHours> = hours_by_employee
        .iter()
        .map(|(id, hours)| EmployeeHours {
            employee_id: *id,
            name: employee_name(employees, *id),
            total_hours: *hours,
            productivity: percentage(*hours, capacity),
        })
        .collect();
    per_employee.sort_by(|a, b| {
        b.total_hours
            .cmp(&a.total_hours)
            .then_with(|| a.name.cmp(&b.name))
    });

    // Buckets are keyed by employee id so same-named employees stay
    // distinct entries; the bucket key carries the display name.
    let hour_buckets: BTreeMap<String, GroupBucket> = per_employee
        .iter()
        .map(|e| {
            (
                e.employee_id.to_string(),
                GroupBucket {
                    key: e.name.clone(),
                    count: 1,
                    total: e.total_hours,
                },
            )
        })
        .collect();
    let top_employees = top_n(&hour_buckets, TOP_EMPLOYEES);

    let rows = DetailTable {
        headers: vec![
            "Employee".into(),
            "Hours".into(),
            "Productivity".into(),
        ],
        rows: per_employee
            .iter()
            .map(|e| {
                vec![
                    e.name.clone(),
                    format_number(e.total_hours, locale),
                    format!("{} %", format_number(e.productivity, locale)),
                ]
            })
            .collect(),
    };

    EmployeesReport {
        period,
        total_hours,
        average_hours_per_employee,
        per_employee,
        top_employees,
        rows,
    }
}

fn employee_name(employees: &[Employee], id: Uuid) -> String {
    employees
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| id.to_string())
}
