//! Field-level predicate evaluation over record collections.
//!
//! Every active predicate must match (logical AND). Inactive predicates
//! (empty search term, empty equality value) always match. Fields are
//! addressed by name through [`FieldIndex`], so a predicate naming a
//! field a record does not have simply never matches it; nothing panics.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{
    AttendanceRecord, DateRange, Employee, Equipment, Invoice, Material, Project, Transaction,
    Vehicle,
};

/// A single named field of a record, as seen by the filter evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Keyword(&'static str),
    Id(Uuid),
    Date(NaiveDate),
    Number(Decimal),
}

/// Read-only field access by name. `None` means the record has no such
/// field or the value is absent on this record.
pub trait FieldIndex {
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    search: Option<SearchFilter>,
    equals: Vec<EqualsFilter>,
    date_range: Option<DateRangeFilter>,
}

#[derive(Debug, Clone)]
struct SearchFilter {
    term: String,
    fields: Vec<String>,
}

#[derive(Debug, Clone)]
struct EqualsFilter {
    field: String,
    value: String,
}

#[derive(Debug, Clone)]
struct DateRangeFilter {
    field: String,
    range: DateRange,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring search; a record matches when ANY of the
    /// named fields contains the term. An empty term is inactive.
    pub fn with_search(mut self, term: impl Into<String>, fields: &[&str]) -> Self {
        let term = term.into();
        if !term.trim().is_empty() {
            self.search = Some(SearchFilter {
                term: term.to_lowercase(),
                fields: fields.iter().map(|f| f.to_string()).collect(),
            });
        }
        self
    }

    /// Exact match on an enumerated or identifier field. An empty value is
    /// inactive.
    pub fn with_equals(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.equals.push(EqualsFilter {
                field: field.into(),
                value,
            });
        }
        self
    }

    /// Inclusive bound on a date field. Records missing the field fail the
    /// predicate without raising.
    pub fn with_date_range(mut self, field: impl Into<String>, range: DateRange) -> Self {
        self.date_range = Some(DateRangeFilter {
            field: field.into(),
            range,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.equals.is_empty() && self.date_range.is_none()
    }

    pub fn matches<T: FieldIndex>(&self, record: &T) -> bool {
        if let Some(search) = &self.search {
            if !search_matches(record, search) {
                return false;
            }
        }
        for eq in &self.equals {
            if !equals_matches(record, eq) {
                return false;
            }
        }
        if let Some(dr) = &self.date_range {
            match record.field(&dr.field) {
                Some(FieldValue::Date(date)) => {
                    if !dr.range.contains(date) {
                        return false;
                    }
                }
                _ => return false,
            }
        }
        true
    }

    pub fn apply<'a, T: FieldIndex>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

fn search_matches<T: FieldIndex>(record: &T, search: &SearchFilter) -> bool {
    search.fields.iter().any(|name| match record.field(name) {
        Some(FieldValue::Text(text)) => text.to_lowercase().contains(&search.term),
        Some(FieldValue::Keyword(word)) => word.contains(&search.term),
        _ => false,
    })
}

fn equals_matches<T: FieldIndex>(record: &T, eq: &EqualsFilter) -> bool {
    match record.field(&eq.field) {
        Some(FieldValue::Text(text)) => text == eq.value,
        Some(FieldValue::Keyword(word)) => word == eq.value,
        Some(FieldValue::Id(id)) => eq.value.parse::<Uuid>().map(|v| v == id).unwrap_or(false),
        _ => false,
    }
}

impl FieldIndex for Transaction {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "description" => Some(FieldValue::Text(&self.description)),
            "category" => Some(FieldValue::Text(&self.category)),
            "kind" => Some(FieldValue::Keyword(self.kind.as_str())),
            "date" => self.date.map(FieldValue::Date),
            "amount" => self.amount.map(FieldValue::Number),
            "project_id" => self.project_id.map(FieldValue::Id),
            "client_id" => self.client_id.map(FieldValue::Id),
            _ => None,
        }
    }
}

impl FieldIndex for Invoice {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "invoice_number" => Some(FieldValue::Text(&self.invoice_number)),
            "status" => Some(FieldValue::Keyword(self.status.as_str())),
            "issue_date" => Some(FieldValue::Date(self.issue_date)),
            "due_date" => Some(FieldValue::Date(self.due_date)),
            "amount" => Some(FieldValue::Number(self.amount)),
            "client_id" => Some(FieldValue::Id(self.client_id)),
            "project_id" => self.project_id.map(FieldValue::Id),
            _ => None,
        }
    }
}

impl FieldIndex for Project {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "status" => Some(FieldValue::Keyword(self.status.as_str())),
            "start_date" => self.start_date.map(FieldValue::Date),
            "end_date" => self.end_date.map(FieldValue::Date),
            "budget" => self.budget.map(FieldValue::Number),
            "client_id" => Some(FieldValue::Id(self.client_id)),
            "manager_id" => self.manager_id.map(FieldValue::Id),
            _ => None,
        }
    }
}

impl FieldIndex for Employee {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "role" => Some(FieldValue::Text(&self.role)),
            _ => None,
        }
    }
}

impl FieldIndex for AttendanceRecord {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "date" => Some(FieldValue::Date(self.date)),
            "employee_id" => Some(FieldValue::Id(self.employee_id)),
            "hours_worked" => Some(FieldValue::Number(self.hours_worked)),
            _ => None,
        }
    }
}

impl FieldIndex for Material {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "category" => Some(FieldValue::Text(&self.category)),
            "unit" => Some(FieldValue::Text(&self.unit)),
            "current_stock" => Some(FieldValue::Number(self.current_stock)),
            _ => None,
        }
    }
}

impl FieldIndex for Equipment {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "category" => Some(FieldValue::Text(&self.category)),
            _ => None,
        }
    }
}

impl FieldIndex for Vehicle {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "license_plate" => Some(FieldValue::Text(&self.license_plate)),
            _ => None,
        }
    }
}
