//! UTC calendar arithmetic on microsecond timestamps
//!
//! Every helper here is total: instants that would fall outside chrono's
//! representable range saturate at `MIN_UTC`/`MAX_UTC` instead of panicking.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

pub const MICROS_PER_HOUR: f64 = 3_600_000_000.0;
pub const MICROS_PER_DAY: f64 = 24.0 * MICROS_PER_HOUR;

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

fn saturate(negative: bool) -> DateTime<Utc> {
    log::warn!(
        "Calendar: instant out of representable range, saturating to {}",
        if negative { "MIN_UTC" } else { "MAX_UTC" }
    );
    if negative {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    }
}

fn truncate_seconds(date: DateTime<Utc>, unit: i64) -> DateTime<Utc> {
    let secs = date.timestamp().div_euclid(unit) * unit;
    DateTime::from_timestamp(secs, 0).unwrap_or(date)
}

pub fn start_of_hour(date: DateTime<Utc>) -> DateTime<Utc> {
    truncate_seconds(date, SECONDS_PER_HOUR)
}

pub fn start_of_day(date: DateTime<Utc>) -> DateTime<Utc> {
    truncate_seconds(date, SECONDS_PER_DAY)
}

/// Months since year 0, January = 0
pub fn month_ordinal(date: DateTime<Utc>) -> i64 {
    date.year() as i64 * 12 + date.month0() as i64
}

/// First instant of the month with the given ordinal
pub fn month_start(ordinal: i64) -> DateTime<Utc> {
    let year = ordinal.div_euclid(12);
    let month = ordinal.rem_euclid(12) as u32 + 1;

    i32::try_from(year)
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_else(|| saturate(ordinal < 0))
}

pub fn start_of_month(date: DateTime<Utc>) -> DateTime<Utc> {
    month_start(month_ordinal(date))
}

pub fn days_in_month(date: DateTime<Utc>) -> i64 {
    let ordinal = month_ordinal(date);
    (month_start(ordinal + 1) - month_start(ordinal)).num_days()
}

/// Signed microseconds from `from` to `to`
pub fn micros_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to.timestamp_micros() - from.timestamp_micros()) as f64
}

/// Shift by a fractional number of microseconds, rounded to the nearest one
pub fn offset_micros(date: DateTime<Utc>, micros: f64) -> DateTime<Utc> {
    if micros.is_nan() {
        return date;
    }
    let target = date.timestamp_micros() as f64 + micros;
    if !target.is_finite() {
        return saturate(target < 0.0);
    }
    DateTime::from_timestamp_micros(target.round() as i64).unwrap_or_else(|| saturate(target < 0.0))
}

/// Calendar month addition; the day of month is clamped to the target
/// month's length (31 Jan + 1 month = 29 Feb in a leap year)
pub fn add_months(date: DateTime<Utc>, months: i64) -> DateTime<Utc> {
    let Ok(magnitude) = u32::try_from(months.unsigned_abs()) else {
        return saturate(months < 0);
    };
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(magnitude))
    } else {
        date.checked_sub_months(Months::new(magnitude))
    };
    shifted.unwrap_or_else(|| saturate(months < 0))
}

/// Add a fractional number of months.
///
/// The whole part moves by calendar months. The fraction is measured in
/// units of the month the date lands in; whatever does not fit before the
/// end of that month rolls over into the next month, measured in that
/// month's own length.
pub fn add_fractional_months(date: DateTime<Utc>, months: f64) -> DateTime<Utc> {
    if !months.is_finite() {
        return if months.is_nan() {
            date
        } else {
            saturate(months < 0.0)
        };
    }

    let whole = months.floor();
    let mut fraction = months - whole;

    let mut result = add_months(date, whole as i64);
    let mut ordinal = month_ordinal(result);
    let mut month_micros = micros_between(month_start(ordinal), month_start(ordinal + 1));

    let remaining = micros_between(result, month_start(ordinal + 1));
    let capacity = remaining / month_micros;

    if fraction > capacity {
        fraction -= capacity;
        ordinal += 1;
        result = month_start(ordinal);
        month_micros = micros_between(result, month_start(ordinal + 1));
    }

    let shifted = offset_micros(result, fraction * month_micros);

    // Rounding to whole microseconds must not spill into the following month
    let month_end = month_start(ordinal + 1);
    if shifted >= month_end && result < month_end {
        return offset_micros(month_end, -1.0);
    }
    shifted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_truncation() {
        let date = utc(2024, 10, 14, 15, 42);
        assert_eq!(start_of_hour(date), utc(2024, 10, 14, 15, 0));
        assert_eq!(start_of_day(date), utc(2024, 10, 14, 0, 0));
        assert_eq!(start_of_month(date), utc(2024, 10, 1, 0, 0));
    }

    #[test]
    fn test_truncation_before_epoch() {
        let date = utc(1952, 11, 25, 7, 30);
        assert_eq!(start_of_hour(date), utc(1952, 11, 25, 7, 0));
        assert_eq!(start_of_day(date), utc(1952, 11, 25, 0, 0));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(utc(2024, 2, 10, 0, 0)), 29);
        assert_eq!(days_in_month(utc(2023, 2, 10, 0, 0)), 28);
        assert_eq!(days_in_month(utc(2024, 10, 1, 0, 0)), 31);
        assert_eq!(days_in_month(utc(2024, 11, 30, 0, 0)), 30);
    }

    #[test]
    fn test_month_start_negative_ordinals() {
        let ordinal = month_ordinal(utc(2024, 1, 15, 0, 0));
        assert_eq!(month_start(ordinal - 1), utc(2023, 12, 1, 0, 0));
        assert_eq!(month_start(ordinal + 12), utc(2025, 1, 1, 0, 0));
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(utc(2024, 1, 31, 0, 0), 1), utc(2024, 2, 29, 0, 0));
        assert_eq!(add_months(utc(2024, 3, 31, 0, 0), -1), utc(2024, 2, 29, 0, 0));
    }

    #[test]
    fn test_fractional_month_from_month_start() {
        // Half of a 30 day month is 15 days
        let result = add_fractional_months(utc(2024, 11, 1, 0, 0), 0.5);
        assert_eq!(result, utc(2024, 11, 16, 0, 0));
    }

    #[test]
    fn test_fractional_month_rolls_over() {
        // 30 Jan: only 2/31 of January is left, the rest is measured in February
        let start = utc(2024, 1, 30, 0, 0);
        let result = add_fractional_months(start, 0.5);
        assert_eq!(result.month(), 2);
        let expected_days = (0.5 - 2.0 / 31.0) * 29.0;
        let actual_days = micros_between(utc(2024, 2, 1, 0, 0), result) / MICROS_PER_DAY;
        assert!((actual_days - expected_days).abs() < 1e-6);
    }

    #[test]
    fn test_offset_micros_saturates() {
        let date = utc(2024, 1, 1, 0, 0);
        assert_eq!(offset_micros(date, f64::INFINITY), DateTime::<Utc>::MAX_UTC);
        assert_eq!(offset_micros(date, f64::NEG_INFINITY), DateTime::<Utc>::MIN_UTC);
        assert_eq!(offset_micros(date, f64::NAN), date);
    }
}
