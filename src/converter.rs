// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC → UT1 / TAI / TT conversion engine.
//!
//! [`TimeScaleConverter`] composes the pure Gregorian→JD arithmetic with the
//! two loaded correction tables and walks the time-scale chain:
//!
//! ```text
//! civil UTC ──Gregorian→JD──▶ JD(UTC) ──+ dUT1/86400──▶ JD(UT1) ──▶ T(UT1)
//!                                │
//!                                └──────+ ΔAT/86400──▶ JD(TAI) ──+ 32.184 s──▶ TT
//! ```
//!
//! dUT1 comes from the interpolated [`EopTable`](crate::EopTable), ΔAT from
//! the [`LeapSecondTable`](crate::LeapSecondTable) floor lookup, and TT − TAI
//! is the defining constant 32.184 s.  Every method is a pure read over the
//! immutable tables; a converter is freely shared across threads, and fresher
//! tables mean building a new converter and swapping the reference.

use qtty::{Centuries, Day, Seconds};

use super::calendar::CivilDateTime;
use super::eop::{EopParameter, EopTable};
use super::error::TimeResult;
use super::instant::Time;
use super::leap::LeapSecondTable;
use super::scales::{Tai, Ut1, Utc};

/// `TT = TAI + 32.184 s` — the defining offset, not a table lookup.
pub const TT_MINUS_TAI: Seconds = Seconds::new(32.184);

/// Converts civil UTC timestamps into UT1, TAI, and TT representations.
///
/// Owns one immutable EOP table and one immutable leap-second table; all
/// conversions are `&self` reads, safe for unsynchronised concurrent use.
#[derive(Debug, Clone)]
pub struct TimeScaleConverter {
    eop: EopTable,
    leap: LeapSecondTable,
}

impl TimeScaleConverter {
    /// Creates a converter over already-loaded tables.
    pub fn new(eop: EopTable, leap: LeapSecondTable) -> Self {
        Self { eop, leap }
    }

    /// The Earth-orientation table in use.
    pub fn eop(&self) -> &EopTable {
        &self.eop
    }

    /// The leap-second table in use.
    pub fn leap_seconds(&self) -> &LeapSecondTable {
        &self.leap
    }

    // ── UTC ───────────────────────────────────────────────────────────

    /// Julian Date on the UTC axis for a civil timestamp.
    ///
    /// Pure calendrical arithmetic; never consults the tables.
    pub fn utc_to_jd(&self, civil: &CivilDateTime) -> Time<Utc> {
        civil.to_julian_date()
    }

    // ── UT1 ───────────────────────────────────────────────────────────

    /// Julian Date on the UT1 axis: `JD(UTC) + dUT1 / 86 400`.
    pub fn utc_to_ut1(&self, civil: &CivilDateTime) -> TimeResult<Time<Ut1>> {
        let jd_utc = civil.to_julian_date();
        let dut1 = self.dut1_at(jd_utc)?;
        Ok(Time::<Ut1>::from_days(jd_utc.quantity()) + dut1.to::<Day>())
    }

    /// Julian centuries from J2000 on the UT1 axis — the time argument
    /// consumed by Earth-rotation-dependent ephemeris formulas.
    pub fn utc_to_t_ut1(&self, civil: &CivilDateTime) -> TimeResult<Centuries> {
        Ok(self.utc_to_ut1(civil)?.julian_centuries())
    }

    /// UT1 Julian seconds from J2000 for a civil timestamp.
    ///
    /// Computed in the seconds domain (`julian_seconds(JD_utc) + dUT1`):
    /// adding a sub-second correction to an absolute JD first would round
    /// it away into the ~20 µs ulp of the day count.
    pub fn utc_to_ut1_seconds(&self, civil: &CivilDateTime) -> TimeResult<Seconds> {
        let jd_utc = civil.to_julian_date();
        let dut1 = self.dut1_at(jd_utc)?;
        Ok(jd_utc.julian_seconds() + dut1)
    }

    // ── TAI ───────────────────────────────────────────────────────────

    /// Julian Date on the TAI axis: `JD(UTC) + ΔAT / 86 400`.
    pub fn utc_to_tai(&self, civil: &CivilDateTime) -> TimeResult<Time<Tai>> {
        let jd_utc = civil.to_julian_date();
        let dat = self.leap.lookup(jd_utc.mjd().value())?;
        Ok(Time::<Tai>::from_days(jd_utc.quantity()) + Seconds::new(dat as f64).to::<Day>())
    }

    /// TAI Julian seconds from J2000: `julian_seconds(JD_utc) + ΔAT`.
    ///
    /// Seconds-domain counterpart of [`utc_to_tai`](Self::utc_to_tai), kept
    /// exact where the JD axis would round the whole-second offset.
    pub fn utc_to_tai_seconds(&self, civil: &CivilDateTime) -> TimeResult<Seconds> {
        let jd_utc = civil.to_julian_date();
        let dat = self.leap.lookup(jd_utc.mjd().value())?;
        Ok(jd_utc.julian_seconds() + Seconds::new(dat as f64))
    }

    // ── TT ────────────────────────────────────────────────────────────

    /// TAI seconds → TT seconds: adds the fixed 32.184 s offset.
    ///
    /// TT runs at a constant rate ahead of TAI by definition, so this holds
    /// whatever epoch the seconds are counted from.
    #[inline]
    pub fn tai_to_tt(tai_seconds: Seconds) -> Seconds {
        tai_seconds + TT_MINUS_TAI
    }

    /// TT Julian seconds from J2000 for a civil UTC timestamp — the
    /// canonical dynamical-time value consumed by ephemeris formulas.
    ///
    /// Composes UTC→TAI Julian seconds from J2000 with the fixed TAI→TT
    /// offset.
    pub fn utc_to_tt_seconds(&self, civil: &CivilDateTime) -> TimeResult<Seconds> {
        Ok(Self::tai_to_tt(self.utc_to_tai_seconds(civil)?))
    }

    // ── diagnostics ───────────────────────────────────────────────────

    /// Raw interpolated dUT1 = UT1 − UTC at a civil timestamp.
    pub fn dut1(&self, civil: &CivilDateTime) -> TimeResult<Seconds> {
        self.dut1_at(civil.to_julian_date())
    }

    /// Cumulative ΔAT = TAI − UTC at a civil timestamp.
    pub fn delta_at(&self, civil: &CivilDateTime) -> TimeResult<Seconds> {
        let jd_utc = civil.to_julian_date();
        let dat = self.leap.lookup(jd_utc.mjd().value())?;
        Ok(Seconds::new(dat as f64))
    }

    fn dut1_at(&self, jd_utc: Time<Utc>) -> TimeResult<Seconds> {
        let dut1 = self.eop.query(jd_utc.mjd().value(), EopParameter::Dut1)?;
        Ok(Seconds::new(dut1))
    }
}
