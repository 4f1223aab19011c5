// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil (Gregorian) calendar arithmetic.
//!
//! [`CivilDateTime`] is the validated civil timestamp fed into the time
//! engine, and this module holds the pure calendrical conversions:
//! Gregorian → Julian Date (Vallado's formula), day-of-year helpers, and the
//! inverse day-fraction decomposition.  Nothing here knows about leap
//! seconds or Earth orientation — every day is exactly 86 400 s.
//!
//! # Leap-second representation
//!
//! The seconds field accepts the transient range `[0, 61)` so that a
//! broadcast leap-second timestamp (`23:59:60.x`) is representable.  The
//! cumulative TAI−UTC offset itself lives in
//! [`LeapSecondTable`](crate::LeapSecondTable); callers doing raw offset
//! arithmetic on the seconds field (which can push it past 61) must use
//! [`CivilDateTime::new_unchecked`].

use chrono::{DateTime, Datelike, Timelike, Utc as ChronoUtc};

use super::error::{TimeError, TimeResult};
use super::instant::{Time, TimeScale};
use super::scales::Utc;

/// JD of 0h on the day before 1 January of "year 0" in Vallado's
/// Gregorian→JD formula.
const GREGORIAN_JD_BIAS: f64 = 1_721_013.5;

/// Returns `true` for Gregorian leap years (divisible by 4, except
/// century years not divisible by 400).
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month, accounting for leap years.
///
/// # Panics
/// Panics if `month` is outside 1–12; validated callers never hit this.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    const DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// A validated civil (proleptic Gregorian, UTC) date and time.
///
/// Immutable value type.  Construction via [`new`](Self::new) enforces the
/// field ranges up front so every conversion downstream is total; the
/// Gregorian→JD arithmetic itself is exact for years ≥ 1583 (behaviour for
/// earlier dates is unspecified).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl CivilDateTime {
    /// Creates a civil timestamp, validating every field before any
    /// arithmetic runs.
    ///
    /// Ranges: month 1–12, day 1–days-in-month, hour 0–23, minute 0–59,
    /// second `[0, 61)` (the transient 60.x accommodates broadcast
    /// leap-second timestamps).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> TimeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::invalid_field("month", month as f64));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::invalid_field("day", day as f64));
        }
        if hour > 23 {
            return Err(TimeError::invalid_field("hour", hour as f64));
        }
        if minute > 59 {
            return Err(TimeError::invalid_field("minute", minute as f64));
        }
        if !second.is_finite() || !(0.0..61.0).contains(&second) {
            return Err(TimeError::invalid_field("second", second));
        }
        Ok(Self::new_unchecked(year, month, day, hour, minute, second))
    }

    /// Creates a civil timestamp without range validation.
    ///
    /// Intended for leap-second offset arithmetic: the Gregorian→JD formula
    /// is linear in the seconds field, so adding a whole-second offset to
    /// `second` shifts the resulting JD by exactly `offset / 86 400` even
    /// when the field leaves its civil range.
    pub const fn new_unchecked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    pub const fn second(&self) -> f64 {
        self.second
    }

    // ── calendrical arithmetic ────────────────────────────────────────

    /// Fraction of a day covered by the time-of-day fields:
    /// `((second/60 + minute)/60 + hour)/24`.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        ((self.second / 60.0 + self.minute as f64) / 60.0 + self.hour as f64) / 24.0
    }

    /// Julian Date (UTC axis) for this civil timestamp.
    ///
    /// Vallado's civil-calendar formula for the proleptic Gregorian
    /// calendar; pure arithmetic, no leap-second awareness.
    pub fn to_julian_date(&self) -> Time<Utc> {
        let y = self.year as i64;
        let m = self.month as i64;
        let d = self.day as i64;

        let whole = 367 * y - 7 * (y + (m + 9) / 12) / 4 + 275 * m / 9 + d;
        Time::<Utc>::new(whole as f64 + GREGORIAN_JD_BIAS + self.day_fraction())
    }

    /// Fractional day of the year, counting time of day.
    ///
    /// Jan 1 at noon is day 1.5, even though a full day has not elapsed.
    pub fn day_of_year(&self) -> f64 {
        let elapsed_months: u32 = (1..self.month).map(|m| days_in_month(self.year, m)).sum();
        elapsed_months as f64 + self.day as f64 + self.day_fraction()
    }

    /// Reconstructs a civil timestamp from a year and a fractional day of
    /// the year (the inverse of [`day_of_year`](Self::day_of_year)).
    pub fn from_year_day(year: i32, fractional_days: f64) -> TimeResult<Self> {
        if !fractional_days.is_finite() || fractional_days < 1.0 {
            return Err(TimeError::invalid_field("day_of_year", fractional_days));
        }

        let mut month = 1u32;
        let mut elapsed = 0u32;
        while month < 12
            && (elapsed + days_in_month(year, month)) as f64 + 1.0 <= fractional_days
        {
            elapsed += days_in_month(year, month);
            month += 1;
        }

        let remaining = fractional_days - elapsed as f64;
        let day = remaining.floor() as u32;
        let fraction = remaining - day as f64;

        let total_seconds = fraction * 86_400.0;
        let hour = (total_seconds / 3_600.0).floor() as u32;
        let minute = ((total_seconds - hour as f64 * 3_600.0) / 60.0).floor() as u32;
        let second = total_seconds - hour as f64 * 3_600.0 - minute as f64 * 60.0;

        Self::new(year, month, day, hour, minute, second)
    }

    // ── chrono bridge ─────────────────────────────────────────────────

    /// Builds a civil timestamp from a `chrono::DateTime<Utc>`.
    ///
    /// chrono encodes a broadcast leap second as nanoseconds ≥ 10⁹ on
    /// second 59, which maps into this type's transient `[60, 61)` range.
    pub fn from_datetime(datetime: &DateTime<ChronoUtc>) -> Self {
        Self::new_unchecked(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            datetime.second() as f64 + datetime.nanosecond() as f64 / 1e9,
        )
    }

    /// Converts to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the timestamp is not representable by chrono
    /// (e.g. a seconds field ≥ 60 produced by offset arithmetic).
    pub fn to_datetime(&self) -> Option<DateTime<ChronoUtc>> {
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round() as u32;
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_nano_opt(self.hour, self.minute, whole as u32, nanos)
            .map(|naive| naive.and_utc())
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

// ── inverse day-fraction decomposition ────────────────────────────────────

impl<S: TimeScale> Time<S> {
    /// Decomposes the fractional part of this Julian Date into
    /// `(hour, minute, second)` of the civil day.
    ///
    /// The 0.5 offset convention is honoured: an integer JD is noon.
    pub fn time_of_day(&self) -> (u32, u32, f64) {
        let shifted = self.value() + 0.5;
        let fraction = shifted - shifted.floor();
        let total_seconds = fraction * 86_400.0;
        let hour = (total_seconds / 3_600.0).floor() as u32;
        let minute = ((total_seconds - hour as f64 * 3_600.0) / 60.0).floor() as u32;
        let second = total_seconds - hour as f64 * 3_600.0 - minute as f64 * 60.0;
        (hour, minute, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Centuries, Days};

    #[test]
    fn j2000_noon_is_exact() {
        let civil = CivilDateTime::new(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(civil.to_julian_date().value(), 2_451_545.0);
    }

    #[test]
    fn mjd_offset_is_exact() {
        let civil = CivilDateTime::new(2022, 3, 24, 12, 0, 0.0).unwrap();
        let jd = civil.to_julian_date();
        assert_eq!(jd.mjd(), jd.quantity() - Days::new(2_400_000.5));
    }

    #[test]
    fn julian_centuries_2022_04_24() {
        let civil = CivilDateTime::new(2022, 4, 24, 0, 0, 0.0).unwrap();
        let t = civil.to_julian_date().julian_centuries();
        assert!((t - Centuries::new(0.223_093_771_389_45)).abs() < Centuries::new(1e-6));
    }

    #[test]
    fn time_of_day_roundtrip() {
        // Recovery from an absolute JD carries the ulp of a ~2.4e6 day
        // value, about 4e-5 s.
        let civil = CivilDateTime::new(2022, 3, 24, 7, 43, 12.25).unwrap();
        let (h, m, s) = civil.to_julian_date().time_of_day();
        assert_eq!(h, 7);
        assert_eq!(m, 43);
        assert!((s - 12.25).abs() < 1e-3);
    }

    #[test]
    fn midnight_decomposes_to_zero() {
        let civil = CivilDateTime::new(2022, 3, 24, 0, 0, 0.0).unwrap();
        let (h, m, s) = civil.to_julian_date().time_of_day();
        assert_eq!((h, m), (0, 0));
        assert!(s.abs() < 1e-9);
    }

    #[test]
    fn field_validation() {
        assert!(matches!(
            CivilDateTime::new(2022, 13, 1, 0, 0, 0.0),
            Err(TimeError::InvalidCivilTime { field: "month", .. })
        ));
        assert!(matches!(
            CivilDateTime::new(2022, 2, 29, 0, 0, 0.0),
            Err(TimeError::InvalidCivilTime { field: "day", .. })
        ));
        assert!(matches!(
            CivilDateTime::new(2022, 3, 24, 24, 0, 0.0),
            Err(TimeError::InvalidCivilTime { field: "hour", .. })
        ));
        assert!(matches!(
            CivilDateTime::new(2022, 3, 24, 0, 60, 0.0),
            Err(TimeError::InvalidCivilTime { field: "minute", .. })
        ));
        assert!(matches!(
            CivilDateTime::new(2022, 3, 24, 0, 0, 61.0),
            Err(TimeError::InvalidCivilTime { field: "second", .. })
        ));
        assert!(matches!(
            CivilDateTime::new(2022, 3, 24, 0, 0, f64::NAN),
            Err(TimeError::InvalidCivilTime { field: "second", .. })
        ));
    }

    #[test]
    fn leap_second_timestamp_is_constructible() {
        // 60.5 is a valid transient value during a broadcast leap second.
        let civil = CivilDateTime::new(2016, 12, 31, 23, 59, 60.5).unwrap();
        assert_eq!(civil.second(), 60.5);
    }

    #[test]
    fn leap_year_rule_handles_centuries() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2022));
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn day_of_year_counts_time_of_day() {
        // Jan 1 at noon is day 1.5 even though a full day has not elapsed.
        let jan1_noon = CivilDateTime::new(2022, 1, 1, 12, 0, 0.0).unwrap();
        assert!((jan1_noon.day_of_year() - 1.5).abs() < 1e-12);

        let mar1 = CivilDateTime::new(2020, 3, 1, 0, 0, 0.0).unwrap();
        assert!((mar1.day_of_year() - 61.0).abs() < 1e-12); // leap year: 31 + 29 + 1
    }

    #[test]
    fn from_year_day_inverts_day_of_year() {
        let civil = CivilDateTime::new(2022, 4, 24, 6, 30, 15.5).unwrap();
        let back = CivilDateTime::from_year_day(2022, civil.day_of_year()).unwrap();
        assert_eq!(back.month(), 4);
        assert_eq!(back.day(), 24);
        assert_eq!(back.hour(), 6);
        assert_eq!(back.minute(), 30);
        assert!((back.second() - 15.5).abs() < 1e-6);
    }

    #[test]
    fn from_year_day_rejects_out_of_range() {
        assert!(CivilDateTime::from_year_day(2022, 0.5).is_err());
        assert!(CivilDateTime::from_year_day(2022, f64::NAN).is_err());
    }

    #[test]
    fn chrono_bridge_roundtrip() {
        let datetime = DateTime::from_timestamp(1_648_123_200, 250_000_000).unwrap();
        let civil = CivilDateTime::from_datetime(&datetime);
        let back = civil.to_datetime().expect("to_datetime");
        assert_eq!(back, datetime);
    }

    #[test]
    fn chrono_bridge_agrees_with_gregorian_formula() {
        // 2000-01-01T12:00:00Z
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let civil = CivilDateTime::from_datetime(&datetime);
        assert_eq!(civil.to_julian_date().value(), 2_451_545.0);
    }

    #[test]
    fn unchecked_seconds_shift_jd_linearly() {
        let base = CivilDateTime::new(2022, 3, 24, 12, 1, 0.0).unwrap();
        let shifted = CivilDateTime::new_unchecked(2022, 3, 24, 12, 1, 37.0);
        let delta = shifted.to_julian_date() - base.to_julian_date();
        // Both absolute JDs round at the ~4.7e-10 day ulp before subtracting.
        assert!((delta - Days::new(37.0 / 86_400.0)).abs() < Days::new(1e-8));
    }
}
