//! Jalali (Solar Hijri) calendar normalization
//!
//! The stock ledger records movement dates as `year/month/day` in the Jalali
//! calendar. Everything downstream works on Gregorian [`NaiveDate`] values, so
//! dates are converted once at load time through the pure functions here.
//!
//! Leap years follow the 33-year arithmetic cycle: a year is leap when
//! `year % 33` falls in [`LEAP_RESIDUES`].

use chrono::{Duration, NaiveDate};

use crate::error::CalendarError;
use crate::types::NormalizedDate;

/// Residues of `year % 33` that mark a leap year
pub const LEAP_RESIDUES: [i64; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Tokens a tabular export writes for an empty cell
const MISSING_MARKERS: [&str; 7] = ["", "nan", "na", "n/a", "null", "none", "nat"];

/// 1 Farvardin 1403 fell on 20 March 2024
const ANCHOR_JALALI: (i64, u32, u32) = (1403, 1, 1);
const ANCHOR_GREGORIAN: (i32, u32, u32) = (2024, 3, 20);

/// Latest Jalali year whose dates still fit in [`NaiveDate`]
pub const MAX_JALALI_YEAR: i64 = 261_500;

/// Check whether a raw cell value stands for "no value"
pub fn is_missing_marker(value: &str) -> bool {
    let trimmed = value.trim().to_lowercase();
    MISSING_MARKERS.contains(&trimmed.as_str())
}

/// Check if a Jalali year is a leap year
pub fn is_jalali_leap_year(year: i64) -> bool {
    LEAP_RESIDUES.contains(&year.rem_euclid(33))
}

/// Number of days in a Jalali month, or `None` for a month outside 1-12
pub fn jalali_month_length(year: i64, month: u32) -> Option<u32> {
    match month {
        1..=6 => Some(31),
        7..=11 => Some(30),
        12 if is_jalali_leap_year(year) => Some(30),
        12 => Some(29),
        _ => None,
    }
}

/// Days elapsed from 1 Farvardin of year 1 to the given Jalali date
fn jalali_ordinal(year: i64, month: u32, day: u32) -> i64 {
    let elapsed_years = year - 1;
    let full_cycles = elapsed_years.div_euclid(33);
    let remainder = elapsed_years.rem_euclid(33);
    let leap_days = full_cycles * 8
        + LEAP_RESIDUES.iter().filter(|&&r| r <= remainder).count() as i64;

    let month_days = if month <= 7 {
        (month as i64 - 1) * 31
    } else {
        186 + (month as i64 - 7) * 30
    };

    elapsed_years * 365 + leap_days + month_days + (day as i64 - 1)
}

/// Convert a Jalali calendar date into its Gregorian equivalent
pub fn jalali_to_gregorian(year: i64, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    let label = format!("{}/{}/{}", year, month, day);
    let out_of_range = |reason: &'static str| CalendarError::OutOfRange {
        value: label.clone(),
        reason,
    };

    if year < 1 {
        return Err(out_of_range("year must be positive"));
    }
    if year > MAX_JALALI_YEAR {
        return Err(out_of_range("year is beyond the supported range"));
    }
    let month_length = jalali_month_length(year, month).ok_or_else(|| out_of_range("month must be 1-12"))?;
    if day < 1 || day > month_length {
        return Err(out_of_range("day exceeds month length"));
    }

    let (ay, am, ad) = ANCHOR_JALALI;
    let offset = jalali_ordinal(year, month, day) - jalali_ordinal(ay, am, ad);
    let (gy, gm, gd) = ANCHOR_GREGORIAN;

    NaiveDate::from_ymd_opt(gy, gm, gd)
        .zip(Duration::try_days(offset))
        .and_then(|(anchor, offset)| anchor.checked_add_signed(offset))
        .ok_or_else(|| out_of_range("year is beyond the supported range"))
}

/// Normalize a raw ledger date cell
///
/// Missing cells become [`NormalizedDate::Unknown`]. A present cell must be
/// three numeric `year/month/day` parts naming a real Jalali date.
pub fn normalize_date(raw: Option<&str>) -> Result<NormalizedDate, CalendarError> {
    let value = match raw {
        Some(v) if !is_missing_marker(v) => v.trim(),
        _ => return Ok(NormalizedDate::Unknown),
    };

    let parts: Vec<&str> = value.split('/').map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(CalendarError::Malformed(value.to_string()));
    };

    let malformed = || CalendarError::Malformed(value.to_string());
    let year: i64 = year.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;

    jalali_to_gregorian(year, month, day).map(NormalizedDate::Known)
}
