//! Date conversion between the record store's `DD-MMM-YYYY` format and ISO

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Month abbreviations used by the record store, in calendar order.
const SPANISH_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("malformed date: {0:?}")]
    Malformed(String),
    #[error("unknown month abbreviation: {0:?}")]
    UnknownMonth(String),
    #[error("not a valid calendar date: {0:?}")]
    OutOfRange(String),
}

/// Convert `"05-mar-1990"` to `"1990-03-05"`.
///
/// Month abbreviations are matched case-insensitively, as the original
/// store occasionally capitalizes them.
pub fn spanish_to_iso(value: &str) -> Result<String, DateError> {
    let mut parts = value.splitn(3, '-');
    let (day, month, year) = match (parts.next(), parts.next(), parts.next()) {
        (Some(d), Some(m), Some(y)) if !d.is_empty() && !y.is_empty() => (d, m, y),
        _ => return Err(DateError::Malformed(value.to_string())),
    };

    let month_lower = month.to_lowercase();
    let month_num = SPANISH_MONTHS
        .iter()
        .position(|&abbr| abbr == month_lower)
        .map(|idx| idx as u32 + 1)
        .ok_or_else(|| DateError::UnknownMonth(month.to_string()))?;

    let day_num: u32 = day
        .parse()
        .map_err(|_| DateError::Malformed(value.to_string()))?;
    let year_num: i32 = year
        .parse()
        .map_err(|_| DateError::Malformed(value.to_string()))?;

    let date = NaiveDate::from_ymd_opt(year_num, month_num, day_num)
        .ok_or_else(|| DateError::OutOfRange(value.to_string()))?;

    Ok(date.format("%Y-%m-%d").to_string())
}

/// Convert `"1990-03-05"` back to `"05-mar-1990"`.
pub fn iso_to_spanish(value: &str) -> Result<String, DateError> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| DateError::Malformed(value.to_string()))?;

    let month = SPANISH_MONTHS[date.month0() as usize];
    Ok(format!("{:02}-{}-{:04}", date.day(), month, date.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod spanish_to_iso {
        use super::*;

        #[test]
        fn test_converts_example_date() {
            assert_eq!(spanish_to_iso("05-mar-1990").unwrap(), "1990-03-05");
        }

        #[test]
        fn test_zero_pads_day() {
            assert_eq!(spanish_to_iso("5-ene-2001").unwrap(), "2001-01-05");
        }

        #[test]
        fn test_accepts_uppercase_month() {
            assert_eq!(spanish_to_iso("31-DIC-1999").unwrap(), "1999-12-31");
        }

        #[test]
        fn test_rejects_unknown_month() {
            assert_eq!(
                spanish_to_iso("05-xyz-1990"),
                Err(DateError::UnknownMonth("xyz".to_string()))
            );
        }

        #[test]
        fn test_rejects_impossible_date() {
            assert_eq!(
                spanish_to_iso("31-feb-1990"),
                Err(DateError::OutOfRange("31-feb-1990".to_string()))
            );
        }

        #[test]
        fn test_rejects_missing_parts() {
            assert!(spanish_to_iso("mar-1990").is_err());
            assert!(spanish_to_iso("").is_err());
        }
    }

    mod iso_to_spanish {
        use super::*;

        #[test]
        fn test_converts_example_date() {
            assert_eq!(iso_to_spanish("1990-03-05").unwrap(), "05-mar-1990");
        }

        #[test]
        fn test_rejects_garbage() {
            assert!(iso_to_spanish("not-a-date").is_err());
            assert!(iso_to_spanish("1990-13-05").is_err());
        }
    }

    mod round_trip {
        use super::*;

        #[test]
        fn test_round_trips_every_month() {
            for month in 1..=12u32 {
                let iso = format!("2024-{month:02}-17");
                let spanish = iso_to_spanish(&iso).unwrap();
                assert_eq!(spanish_to_iso(&spanish).unwrap(), iso);
            }
        }

        #[test]
        fn test_round_trips_from_spanish() {
            for day in ["01", "09", "28"] {
                let spanish = format!("{day}-ago-2023");
                let iso = spanish_to_iso(&spanish).unwrap();
                assert_eq!(iso_to_spanish(&iso).unwrap(), spanish);
            }
        }

        #[test]
        fn test_leap_day() {
            assert_eq!(spanish_to_iso("29-feb-2024").unwrap(), "2024-02-29");
            assert_eq!(iso_to_spanish("2024-02-29").unwrap(), "29-feb-2024");
        }
    }
}
