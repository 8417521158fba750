use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Construction project record. Overdue is a derived property, never
/// stored: an active project whose planned end date has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<Uuid>,
    pub status: ProjectStatus,
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

impl Project {
    pub fn new(name: impl Into<String>, client_id: Uuid, status: ProjectStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            client_id,
            manager_id: None,
            status,
            progress: 0,
            start_date: None,
            end_date: None,
            actual_end_date: None,
            budget: None,
        }
    }

    /// Progress is clamped into 0..=100.
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == ProjectStatus::Active
            && self.end_date.map(|end| end < today).unwrap_or(false)
    }

    /// Days the project finished past its planned end date, zero when it
    /// finished on time or early. `None` unless both dates are present.
    pub fn schedule_delay_days(&self) -> Option<i64> {
        let planned = self.end_date?;
        let actual = self.actual_end_date?;
        Some((actual - planned).num_days().max(0))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Active,
    Completed,
    Cancelled,
    OnHold,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
            ProjectStatus::OnHold => "on_hold",
        }
    }
}
