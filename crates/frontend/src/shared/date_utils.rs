//! Period ("YYYY-MM") and date helpers.
//!
//! Reports are keyed by month. The "YYYY-MM" form sorts
//! lexicographically in chronological order, which the aggregation
//! layer relies on.

use chrono::{Datelike, NaiveDate};

/// Period key for a date, e.g. 2024-03-15 -> "2024-03".
pub fn period_of(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Parse "YYYY-MM" into (year, month). Returns `None` for malformed
/// input.
pub fn parse_period(period: &str) -> Option<(i32, u32)> {
    let (year, month) = period.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}

/// The calendar month immediately before the given period.
/// "2024-03" -> "2024-02", "2024-01" -> "2023-12".
pub fn preceding_period(period: &str) -> Option<String> {
    let (year, month) = parse_period(period)?;
    let (year, month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    Some(format!("{:04}-{:02}", year, month))
}

/// Short label for a period, e.g. "2024-03" -> "Mar 2024".
pub fn period_label(period: &str) -> String {
    let Some((year, month)) = parse_period(period) else {
        return period.to_string();
    };
    let name = match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => unreachable!(),
    };
    format!("{} {}", name, year)
}

/// Format an ISO date string to DD/MM/YYYY.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024".
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_of() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(period_of(date), "2024-03");
    }

    #[test]
    fn test_preceding_period() {
        assert_eq!(preceding_period("2024-03").as_deref(), Some("2024-02"));
        assert_eq!(preceding_period("2024-01").as_deref(), Some("2023-12"));
        assert_eq!(preceding_period("garbage"), None);
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label("2024-03"), "Mar 2024");
        assert_eq!(period_label("invalid"), "invalid");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "15/03/2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_periods_sort_chronologically() {
        let mut periods = vec!["2024-02", "2023-12", "2024-01"];
        periods.sort();
        assert_eq!(periods, vec!["2023-12", "2024-01", "2024-02"]);
    }
}
