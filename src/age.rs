//! Age correction factor (AK) for the MFM method.
//!
//! The factor is read from a fixed table indexed by vehicle age in whole
//! months, 0 through 120. Older vehicles use the 120-month entry.

use crate::error::CalcError;
use chrono::{Datelike, NaiveDate};

/// Oldest age with its own table entry.
pub const MAX_AGE_MONTHS: u32 = 120;

/// AK by age in months; index = months.
///
/// These are not the published MFM figures: the entries are
/// `0.25·(1 − m/120)^1.5` rounded to four places, a smooth stand-in running
/// from 0.25 when new to 0 at ten years. Replace them with the empirical
/// table before relying on MFM results.
pub const AGE_CORRECTION: [f64; 121] = [
    0.2500, 0.2469, 0.2438, 0.2407, 0.2376, 0.2345, 0.2315, 0.2284, 0.2254, 0.2224,
    0.2194, 0.2164, 0.2135, 0.2105, 0.2076, 0.2046, 0.2017, 0.1988, 0.1959, 0.1930,
    0.1902, 0.1873, 0.1845, 0.1817, 0.1789, 0.1761, 0.1733, 0.1706, 0.1678, 0.1651,
    0.1624, 0.1597, 0.1570, 0.1543, 0.1517, 0.1490, 0.1464, 0.1438, 0.1412, 0.1386,
    0.1361, 0.1335, 0.1310, 0.1285, 0.1260, 0.1235, 0.1211, 0.1186, 0.1162, 0.1138,
    0.1114, 0.1090, 0.1066, 0.1043, 0.1020, 0.0997, 0.0974, 0.0951, 0.0928, 0.0906,
    0.0884, 0.0862, 0.0840, 0.0818, 0.0797, 0.0776, 0.0755, 0.0734, 0.0713, 0.0693,
    0.0672, 0.0652, 0.0632, 0.0613, 0.0593, 0.0574, 0.0555, 0.0536, 0.0518, 0.0499,
    0.0481, 0.0463, 0.0445, 0.0428, 0.0411, 0.0394, 0.0377, 0.0361, 0.0344, 0.0328,
    0.0313, 0.0297, 0.0282, 0.0267, 0.0252, 0.0238, 0.0224, 0.0210, 0.0196, 0.0183,
    0.0170, 0.0158, 0.0145, 0.0133, 0.0122, 0.0110, 0.0100, 0.0089, 0.0079, 0.0069,
    0.0060, 0.0051, 0.0043, 0.0035, 0.0028, 0.0021, 0.0015, 0.0010, 0.0005, 0.0002,
    0.0000,
];

/// Whole months from `from` to `to`; negative when `to` is earlier.
///
/// A month only counts once its day of month has been reached.
pub fn whole_months(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if months > 0 && to.day() < from.day() {
        months -= 1;
    } else if months < 0 && to.day() > from.day() {
        months += 1;
    }
    months
}

/// Age in months clamped to `0..=120`.
pub fn age_in_months(first_registration: NaiveDate, reference: NaiveDate) -> u32 {
    whole_months(first_registration, reference).clamp(0, MAX_AGE_MONTHS as i32) as u32
}

/// Look up AK, clamping ages beyond the table.
///
/// # Examples
///
/// ```rust
/// use crashcalc::age::age_correction;
///
/// assert_eq!(age_correction(0), 0.25);
/// assert_eq!(age_correction(120), 0.0);
/// assert_eq!(age_correction(130), age_correction(120));
/// ```
pub fn age_correction(months: u32) -> f64 {
    AGE_CORRECTION[months.min(MAX_AGE_MONTHS) as usize]
}

/// Parse an ISO (`2024-03-31`) or German (`31.03.2024`) date.
pub fn parse_date(text: &str) -> Result<NaiveDate, CalcError> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d.%m.%Y"))
        .map_err(|_| CalcError::InvalidDate(text.to_string()))
}

/// AK for a vehicle first registered on `first_registration`, valued on
/// `reference`.
pub fn age_correction_for_dates(first_registration: &str, reference: &str) -> Result<f64, CalcError> {
    let from = parse_date(first_registration)?;
    let to = parse_date(reference)?;
    Ok(age_correction(age_in_months(from, to)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_table_is_monotone() {
        assert!(AGE_CORRECTION.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(AGE_CORRECTION[0], 0.25);
        assert_eq!(AGE_CORRECTION[120], 0.0);
    }

    #[test]
    fn test_table_follows_generating_curve() {
        for (months, ak) in AGE_CORRECTION.iter().enumerate() {
            let expected = 0.25 * (1.0 - months as f64 / 120.0).powf(1.5);
            assert!((ak - expected).abs() < 1e-4, "month {}", months);
        }
    }

    #[test]
    fn test_whole_months() {
        assert_eq!(whole_months(date(2020, 1, 15), date(2020, 2, 14)), 0);
        assert_eq!(whole_months(date(2020, 1, 15), date(2020, 2, 15)), 1);
        assert_eq!(whole_months(date(2020, 1, 31), date(2021, 1, 31)), 12);
        assert_eq!(whole_months(date(2021, 3, 1), date(2020, 3, 1)), -12);
    }

    #[test]
    fn test_age_in_months_clamps() {
        assert_eq!(age_in_months(date(2022, 5, 1), date(2021, 5, 1)), 0);
        assert_eq!(age_in_months(date(2000, 1, 1), date(2024, 1, 1)), 120);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-03-31").unwrap(), date(2024, 3, 31));
        assert_eq!(parse_date("31.03.2024").unwrap(), date(2024, 3, 31));
        assert!(matches!(parse_date("31/03/2024"), Err(CalcError::InvalidDate(_))));
    }

    #[test]
    fn test_age_correction_for_dates() {
        let ak = age_correction_for_dates("2023-01-10", "2024-01-10").unwrap();
        assert_eq!(ak, AGE_CORRECTION[12]);
        assert_eq!(age_correction_for_dates("2024-06-01", "2024-01-01").unwrap(), 0.25);
    }
}
