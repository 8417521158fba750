use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client invoice. `invoice_number` is a year-scoped sequence assigned by
/// the persistence collaborator; the engine treats it as an opaque label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub client_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub tax_amount: Decimal,
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn new(
        invoice_number: impl Into<String>,
        client_id: Uuid,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        amount: Decimal,
        tax_amount: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            invoice_number: invoice_number.into(),
            client_id,
            project_id: None,
            issue_date,
            due_date,
            amount,
            tax_amount,
            status: InvoiceStatus::Draft,
        }
    }

    /// Net amount plus tax. Derived so the invariant cannot drift out of
    /// sync with the stored parts.
    pub fn total_amount(&self) -> Decimal {
        self.amount + self.tax_amount
    }

    pub fn is_outstanding(&self) -> bool {
        matches!(self.status, InvoiceStatus::Pending | InvoiceStatus::Overdue)
    }

    /// A pending invoice past its due date counts as overdue regardless of
    /// whether the stored status has been refreshed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.status {
            InvoiceStatus::Overdue => true,
            InvoiceStatus::Pending => self.due_date < today,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn total_amount_is_sum_of_net_and_tax() {
        let invoice = Invoice::new(
            "2024-0042",
            Uuid::new_v4(),
            date(2024, 5, 1),
            date(2024, 5, 15),
            dec!(1000),
            dec!(210),
        );
        assert_eq!(invoice.total_amount(), dec!(1210));
    }

    #[test]
    fn pending_invoice_past_due_date_is_overdue() {
        let mut invoice = Invoice::new(
            "2024-0001",
            Uuid::new_v4(),
            date(2024, 5, 1),
            date(2024, 5, 15),
            dec!(500),
            dec!(105),
        );
        invoice.status = InvoiceStatus::Pending;
        assert!(invoice.is_overdue(date(2024, 5, 16)));
        assert!(!invoice.is_overdue(date(2024, 5, 15)));
    }

    #[test]
    fn paid_invoice_is_never_overdue() {
        let mut invoice = Invoice::new(
            "2024-0002",
            Uuid::new_v4(),
            date(2024, 5, 1),
            date(2024, 5, 15),
            dec!(500),
            dec!(105),
        );
        invoice.status = InvoiceStatus::Paid;
        assert!(!invoice.is_overdue(date(2024, 6, 1)));
    }
}
