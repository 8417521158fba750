//! Financial report: income/expense totals, invoice settlement state,
//! top expense categories, and monthly cash-flow breakdown.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::month_key;
use crate::domain::{DateRange, Invoice, InvoiceStatus, Transaction};
use crate::format::{format_currency, format_date, format_missing, LocaleConfig};

use super::aggregate::{group_by, percentage, sum_where, GroupBucket};
use super::filter::FilterSet;
use super::ranking::top_n;
use super::{DetailTable, ReportFilters};

const TOP_EXPENSE_CATEGORIES: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReport {
    pub period: DateRange,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub profit: Decimal,
    /// Profit as a percentage of income; zero when there is no income.
    pub margin: Decimal,
    pub invoiced_total: Decimal,
    pub paid_total: Decimal,
    pub outstanding_total: Decimal,
    pub top_expense_categories: Vec<GroupBucket>,
    pub monthly: Vec<MonthlyFlow>,
    pub transaction_rows: DetailTable,
    pub invoice_rows: DetailTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyFlow {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

pub fn assemble(
    transactions: &[Transaction],
    invoices: &[Invoice],
    period: DateRange,
    filters: &ReportFilters,
    locale: &LocaleConfig,
) -> FinancialReport {
    let transactions = transaction_filter(period, filters).apply(transactions);
    let invoices = invoice_filter(period, filters).apply(invoices);

    let total_income = sum_where(&transactions, |t| t.is_income(), |t| t.amount_or_zero());
    let total_expenses = sum_where(&transactions, |t| t.is_expense(), |t| t.amount_or_zero());
    let profit = total_income - total_expenses;
    let margin = percentage(profit, total_income);

    let invoiced_total = sum_where(
        &invoices,
        |i| i.status != InvoiceStatus::Cancelled,
        |i| i.total_amount(),
    );
    let paid_total = sum_where(
        &invoices,
        |i| i.status == InvoiceStatus::Paid,
        |i| i.total_amount(),
    );
    let outstanding_total = sum_where(&invoices, |i| i.is_outstanding(), |i| i.total_amount());

    let expense_refs: Vec<&Transaction> = transactions
        .iter()
        .copied()
        .filter(|t| t.is_expense())
        .collect();
    let by_category = group_by(
        &expense_refs,
        |t| Some(t.category.clone()),
        |t| t.amount_or_zero(),
    );
    let top_expense_categories = top_n(&by_category, TOP_EXPENSE_CATEGORIES);

    FinancialReport {
        period,
        total_income,
        total_expenses,
        profit,
        margin,
        invoiced_total,
        paid_total,
        outstanding_total,
        top_expense_categories,
        monthly: monthly_flows(&transactions),
        transaction_rows: transaction_rows(&transactions, locale),
        invoice_rows: invoice_rows(&invoices, locale),
    }
}

fn transaction_filter(period: DateRange, filters: &ReportFilters) -> FilterSet {
    let mut filter = FilterSet::new().with_date_range("date", period);
    if let Some(project_id) = filters.project_id {
        filter = filter.with_equals("project_id", project_id.to_string());
    }
    if let Some(client_id) = filters.client_id {
        filter = filter.with_equals("client_id", client_id.to_string());
    }
    filter
}

fn invoice_filter(period: DateRange, filters: &ReportFilters) -> FilterSet {
    let mut filter = FilterSet::new().with_date_range("issue_date", period);
    if let Some(project_id) = filters.project_id {
        filter = filter.with_equals("project_id", project_id.to_string());
    }
    if let Some(client_id) = filters.client_id {
        filter = filter.with_equals("client_id", client_id.to_string());
    }
    filter
}

fn monthly_flows(transactions: &[&Transaction]) -> Vec<MonthlyFlow> {
    let mut months: BTreeMap<String, MonthlyFlow> = BTreeMap::new();
    for txn in transactions {
        let Some(date) = txn.date else { continue };
        let key = month_key(date);
        let entry = months.entry(key.clone()).or_insert_with(|| MonthlyFlow {
            month: key,
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        });
        if txn.is_income() {
            entry.income += txn.amount_or_zero();
        } else {
            entry.expenses += txn.amount_or_zero();
        }
    }
    months.into_values().collect()
}

fn transaction_rows(transactions: &[&Transaction], locale: &LocaleConfig) -> DetailTable {
    DetailTable {
        headers: vec![
            "Date".into(),
            "Type".into(),
            "Category".into(),
            "Description".into(),
            "Amount".into(),
        ],
        rows: transactions
            .iter()
            .map(|t| {
                vec![
                    t.date.map(format_date).unwrap_or_else(format_missing),
                    t.kind.as_str().into(),
                    t.category.clone(),
                    t.description.clone(),
                    format_currency(t.amount_or_zero(), locale),
                ]
            })
            .collect(),
    }
}

fn invoice_rows(invoices: &[&Invoice], locale: &LocaleConfig) -> DetailTable {
    DetailTable {
        headers: vec![
            "Number".into(),
            "Issued".into(),
            "Due".into(),
            "Status".into(),
            "Amount".into(),
            "Tax".into(),
            "Total".into(),
        ],
        rows: invoices
            .iter()
            .map(|i| {
                vec![
                    i.invoice_number.clone(),
                    format_date(i.issue_date),
                    format_date(i.due_date),
                    i.status.as_str().into(),
                    format_currency(i.amount, locale),
                    format_currency(i.tax_amount, locale),
                    format_currency(i.total_amount(), locale),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march() -> DateRange {
        DateRange::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap()
    }

    fn txn(kind: TransactionKind, amount: Decimal, day: u32, category: &str) -> Transaction {
        Transaction::new(kind, amount, date(2024, 3, day), category)
    }

    #[test]
    fn totals_profit_and_margin_from_known_amounts() {
        let transactions = vec![
            txn(TransactionKind::Income, dec!(100), 1, "Fakturace"),
            txn(TransactionKind::Income, dec!(250.50), 10, "Fakturace"),
            txn(TransactionKind::Income, dec!(75), 20, "Pronájem"),
            txn(TransactionKind::Expense, dec!(40), 5, "Materiál"),
            txn(TransactionKind::Expense, dec!(60), 15, "Doprava"),
        ];
        let report = assemble(
            &transactions,
            &[],
            march(),
            &ReportFilters::default(),
            &LocaleConfig::default(),
        );
        assert_eq!(report.total_income, dec!(425.50));
        assert_eq!(report.total_expenses, dec!(100.00));
        assert_eq!(report.profit, dec!(325.50));
        assert_eq!(report.margin, dec!(76.50));
    }

    #[test]
    fn margin_is_zero_without_income() {
        let report = assemble(
            &[],
            &[],
            march(),
            &ReportFilters::default(),
            &LocaleConfig::default(),
        );
        assert_eq!(report.margin, Decimal::ZERO);
        assert_eq!(report.profit, Decimal::ZERO);
    }

    #[test]
    fn transactions_on_period_bounds_are_included() {
        let transactions = vec![
            txn(TransactionKind::Income, dec!(10), 1, "Fakturace"),
            txn(TransactionKind::Income, dec!(20), 31, "Fakturace"),
        ];
        let report = assemble(
            &transactions,
            &[],
            march(),
            &ReportFilters::default(),
            &LocaleConfig::default(),
        );
        assert_eq!(report.total_income, dec!(30));
        assert_eq!(report.transaction_rows.rows.len(), 2);
    }

    #[test]
    fn missing_amount_contributes_zero() {
        let mut broken = txn(TransactionKind::Expense, dec!(1), 5, "Materiál");
        broken.amount = None;
        let transactions = vec![
            broken,
            txn(TransactionKind::Expense, dec!(40), 6, "Materiál"),
        ];
        let report = assemble(
            &transactions,
            &[],
            march(),
            &ReportFilters::default(),
            &LocaleConfig::default(),
        );
        assert_eq!(report.total_expenses, dec!(40));
        // The malformed row still shows up in details, with a zero amount.
        assert_eq!(report.transaction_rows.rows.len(), 2);
    }

    #[test]
    fn top_expense_categories_are_ranked_deterministically() {
        let transactions = vec![
            txn(TransactionKind::Expense, dec!(300), 3, "B"),
            txn(TransactionKind::Expense, dec!(100), 4, "C"),
            txn(TransactionKind::Expense, dec!(300), 5, "A"),
        ];
        let report = assemble(
            &transactions,
            &[],
            march(),
            &ReportFilters::default(),
            &LocaleConfig::default(),
        );
        let keys: Vec<&str> = report
            .top_expense_categories
            .iter()
            .map(|b| b.key.as_str())
            .collect();
        assert_eq!(keys, ["A", "B", "C"]);
    }

    #[test]
    fn invoice_settlement_totals_split_paid_and_outstanding() {
        let client = Uuid::new_v4();
        let mut paid = Invoice::new(
            "2024-0001",
            client,
            date(2024, 3, 5),
            date(2024, 3, 19),
            dec!(1000),
            dec!(210),
        );
        paid.status = InvoiceStatus::Paid;
        let mut pending = Invoice::new(
            "2024-0002",
            client,
            date(2024, 3, 10),
            date(2024, 3, 24),
            dec!(500),
            dec!(105),
        );
        pending.status = InvoiceStatus::Pending;
        let mut cancelled = Invoice::new(
            "2024-0003",
            client,
            date(2024, 3, 12),
            date(2024, 3, 26),
            dec!(999),
            dec!(0),
        );
        cancelled.status = InvoiceStatus::Cancelled;

        let report = assemble(
            &[],
            &[paid, pending, cancelled],
            march(),
            &ReportFilters::default(),
            &LocaleConfig::default(),
        );
        assert_eq!(report.paid_total, dec!(1210));
        assert_eq!(report.outstanding_total, dec!(605));
        assert_eq!(report.invoiced_total, dec!(1815));
    }

    #[test]
    fn project_filter_narrows_both_record_kinds() {
        let project = Uuid::new_v4();
        let mut ours = txn(TransactionKind::Expense, dec!(40), 5, "Materiál");
        ours.project_id = Some(project);
        let theirs = txn(TransactionKind::Expense, dec!(60), 6, "Materiál");

        let filters = ReportFilters {
            project_id: Some(project),
            ..Default::default()
        };
        let report = assemble(
            &[ours, theirs],
            &[],
            march(),
            &filters,
            &LocaleConfig::default(),
        );
        assert_eq!(report.total_expenses, dec!(40));
    }

    #[test]
    fn monthly_breakdown_splits_income_and_expenses_by_month() {
        let period = DateRange::new(date(2024, 3, 1), date(2024, 4, 30)).unwrap();
        let transactions = vec![
            txn(TransactionKind::Income, dec!(100), 5, "Fakturace"),
            txn(TransactionKind::Expense, dec!(30), 6, "Materiál"),
            Transaction::new(
                TransactionKind::Income,
                dec!(200),
                date(2024, 4, 2),
                "Fakturace",
            ),
        ];
        let report = assemble(
            &transactions,
            &[],
            period,
            &ReportFilters::default(),
            &LocaleConfig::default(),
        );
        assert_eq!(report.monthly.len(), 2);
        assert_eq!(report.monthly[0].month, "2024-03");
        assert_eq!(report.monthly[0].income, dec!(100));
        assert_eq!(report.monthly[0].expenses, dec!(30));
        assert_eq!(report.monthly[1].month, "2024-04");
        assert_eq!(report.monthly[1].income, dec!(200));
    }
}
