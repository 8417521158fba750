use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::ReportError;

/// Inclusive date interval used for report periods. Both bounds are part
/// of the range, so a record dated exactly on either bound is selected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if end < start {
            return Err(ReportError::InvalidInput(
                "range end must not precede start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of Monday-to-Friday days within the range.
    pub fn working_days(&self) -> u32 {
        let mut days = 0;
        let mut cursor = self.start;
        while cursor <= self.end {
            if !matches!(cursor.weekday(), Weekday::Sat | Weekday::Sun) {
                days += 1;
            }
            cursor = cursor + Duration::days(1);
        }
        days
    }
}

/// `YYYY-MM` bucket key for monthly breakdowns.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_is_inclusive_on_both_bounds() {
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap();
        assert!(range.contains(date(2024, 3, 1)));
        assert!(range.contains(date(2024, 3, 31)));
        assert!(!range.contains(date(2024, 2, 29)));
        assert!(!range.contains(date(2024, 4, 1)));
    }

    #[test]
    fn single_day_range_is_valid() {
        let range = DateRange::new(date(2024, 3, 15), date(2024, 3, 15)).unwrap();
        assert!(range.contains(date(2024, 3, 15)));
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        let err = DateRange::new(date(2024, 3, 31), date(2024, 3, 1))
            .expect_err("reversed bounds should fail");
        assert!(format!("{err}").contains("precede"));
    }

    #[test]
    fn working_days_skip_weekends() {
        // 2024-03-04 is a Monday; one full week has five working days.
        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 10)).unwrap();
        assert_eq!(range.working_days(), 5);
    }

    #[test]
    fn month_key_pads_single_digit_months() {
        assert_eq!(month_key(date(2024, 3, 7)), "2024-03");
        assert_eq!(month_key(date(2024, 11, 30)), "2024-11");
    }
}
