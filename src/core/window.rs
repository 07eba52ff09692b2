use crate::domain::model::TimeWindow;
use crate::utils::error::{ExportError, Result};
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

pub const DEFAULT_MONTHS: u32 = 24;

/// Midnight UTC on the first day of `now`'s month.
pub fn first_of_month(now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ExportError::ProcessingError {
            message: format!("cannot compute first day of month for {}", now),
        })
}

/// `months` whole calendar months ending at the current one, most recent first.
pub fn month_windows(now: DateTime<Utc>, months: u32) -> Result<Vec<TimeWindow>> {
    let first = first_of_month(now)?;

    (0..months)
        .map(|i| {
            let from = first.checked_sub_months(Months::new(i));
            let to = from.and_then(|from| from.checked_add_months(Months::new(1)));
            match (from, to) {
                (Some(from), Some(to)) => Ok(TimeWindow { from, to }),
                _ => Err(ExportError::ProcessingError {
                    message: format!("month offset {} from {} is out of range", i, first),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_first_of_month_drops_day_and_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 17, 45, 12).unwrap();
        assert_eq!(first_of_month(now).unwrap(), utc(2024, 3, 1));
    }

    #[test]
    fn test_default_window_bounds() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        let windows = month_windows(now, DEFAULT_MONTHS).unwrap();

        assert_eq!(windows.len(), 24);
        assert_eq!(windows[0].from, utc(2024, 3, 1));
        assert_eq!(windows[0].to, utc(2024, 4, 1));
        assert_eq!(windows[23].from, utc(2022, 4, 1));
        assert_eq!(windows[23].to, utc(2022, 5, 1));
    }

    #[test]
    fn test_windows_are_contiguous_and_descending() {
        let now = Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap();
        let windows = month_windows(now, DEFAULT_MONTHS).unwrap();

        for pair in windows.windows(2) {
            assert_eq!(pair[1].to, pair[0].from);
            assert!(pair[1].from < pair[0].from);
        }
        for window in &windows {
            assert!(window.from < window.to);
            assert_eq!(window.from.day(), 1);
        }
    }

    #[test]
    fn test_windows_cross_year_boundary() {
        let windows = month_windows(utc(2024, 1, 10), 2).unwrap();

        assert_eq!(windows[0].from, utc(2024, 1, 1));
        assert_eq!(windows[1].from, utc(2023, 12, 1));
        assert_eq!(windows[1].to, utc(2024, 1, 1));
    }

    #[test]
    fn test_zero_months_yields_nothing() {
        assert!(month_windows(utc(2024, 3, 15), 0).unwrap().is_empty());
    }
}
