//! Display formatting for amounts and dates. Kept out of the aggregation
//! path so computed values stay raw numerics until the boundary.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub currency_symbol: String,
    pub symbol_position: SymbolPosition,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "Kč".into(),
            symbol_position: SymbolPosition::Suffix,
            decimal_separator: ',',
            grouping_separator: ' ',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Renders a bare number with two decimal places, thousands grouping, and
/// the locale's separators.
pub fn format_number(amount: Decimal, locale: &LocaleConfig) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(locale.grouping_separator);
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}{}{fraction}", locale.decimal_separator)
}

/// Renders an amount the way [`format_number`] does, with the locale's
/// currency symbol attached.
pub fn format_currency(amount: Decimal, locale: &LocaleConfig) -> String {
    let number = format_number(amount, locale);
    match locale.symbol_position {
        SymbolPosition::Prefix => format!("{}{}", locale.currency_symbol, number),
        SymbolPosition::Suffix => format!("{} {}", number, locale.currency_symbol),
    }
}

/// `DD.MM.YYYY`, the date style the app's screens use.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}.{:02}.{:04}", date.day(), date.month(), date.year())
}

/// Placeholder for detail cells whose source value is absent.
pub fn format_missing() -> String {
    "—".into()
}
