// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type tags a [`Time`](crate::Time) value with the axis its
//! Julian Date lives on:
//!
//! | Marker | Scale | Relation |
//! |--------|-------|----------|
//! | [`Utc`] | Coordinated Universal Time | civil reference, leap-second corrected |
//! | [`Ut1`] | Universal Time (Earth rotation) | `UT1 = UTC + dUT1` (EOP table) |
//! | [`Tai`] | International Atomic Time | `TAI = UTC + ΔAT` (leap-second table) |
//! | [`Tt`]  | Terrestrial Time | `TT = TAI + 32.184 s` (fixed) |
//!
//! The offsets in the right-hand column are applied by
//! [`TimeScaleConverter`](crate::TimeScaleConverter); dUT1 and ΔAT are
//! table-driven measurements and cannot be folded into the marker types.

use super::instant::TimeScale;

/// Coordinated Universal Time — the civil input scale.
///
/// `Time<Utc>` is what the Gregorian→JD formula produces; it treats every
/// day as exactly 86 400 s and carries no leap-second awareness of its own.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Utc;

impl TimeScale for Utc {
    const LABEL: &'static str = "JD(UTC)";
}

/// Universal Time UT1 — tied to the actual rotation angle of the Earth.
///
/// Differs from UTC by the measured, smoothly varying dUT1 (|dUT1| < 0.9 s),
/// published daily in the Earth-orientation tables.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut1;

impl TimeScale for Ut1 {
    const LABEL: &'static str = "JD(UT1)";
}

/// International Atomic Time — uniform atomic scale.
///
/// Ahead of UTC by the cumulative integer leap-second count ΔAT.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tai;

impl TimeScale for Tai {
    const LABEL: &'static str = "JD(TAI)";
}

/// Terrestrial Time — the dynamical argument of ephemeris formulas.
///
/// Runs at a constant 32.184 s ahead of TAI by definition.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt;

impl TimeScale for Tt {
    const LABEL: &'static str = "JD(TT)";
}
