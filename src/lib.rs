// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time Engine for Attitude & Astrodynamics Computations
//!
//! This crate converts civil (Gregorian) UTC timestamps into Julian Date
//! representations and propagates them through the chain of astronomical
//! time scales — UTC → UT1 → TAI → TT — using tabulated Earth Orientation
//! Parameters and the leap-second history.
//!
//! # Core types
//!
//! - [`CivilDateTime`] — validated Gregorian date/time (UTC).
//! - [`Time<S>`] — Julian Date tagged with a [`TimeScale`] axis marker.
//! - [`EopTable`] — daily Earth-orientation records, interpolated lookup.
//! - [`LeapSecondTable`] — cumulative TAI−UTC steps, floor lookup.
//! - [`TimeScaleConverter`] — composes the above into scale conversions.
//! - [`TimeError`] — typed failures; nothing is clamped or defaulted.
//!
//! # Time scales
//!
//! The following markers implement [`TimeScale`]:
//!
//! | Marker | Scale | Offset from UTC |
//! |--------|-------|-----------------|
//! | [`Utc`] | Coordinated Universal Time | — |
//! | [`Ut1`] | Universal Time (Earth rotation) | dUT1 (EOP table) |
//! | [`Tai`] | International Atomic Time | ΔAT (leap-second table) |
//! | [`Tt`]  | Terrestrial Time | ΔAT + 32.184 s |
//!
//! # Quick example
//!
//! ```
//! use acstime::{CivilDateTime, EopRecord, EopTable, LeapSecondTable, TimeScaleConverter};
//!
//! let eop = EopTable::from_records(vec![
//!     EopRecord { mjd: 59662, polar_x_arcsec: 0.05, polar_y_arcsec: 0.35,
//!                 dut1_s: -0.1005632, lod_s: 0.0002,
//!                 nutation_dx_arcsec: 0.0001, nutation_dy_arcsec: -0.0002 },
//!     EopRecord { mjd: 59663, polar_x_arcsec: 0.05, polar_y_arcsec: 0.35,
//!                 dut1_s: -0.1001852, lod_s: 0.0002,
//!                 nutation_dx_arcsec: 0.0001, nutation_dy_arcsec: -0.0002 },
//! ]).unwrap();
//!
//! let converter = TimeScaleConverter::new(eop, LeapSecondTable::builtin());
//! let civil = CivilDateTime::new(2022, 3, 24, 12, 0, 0.0).unwrap();
//!
//! let t_ut1 = converter.utc_to_t_ut1(&civil).unwrap();   // ephemeris argument
//! let tt_s = converter.utc_to_tt_seconds(&civil).unwrap(); // dynamical time
//! # let _ = (t_ut1, tt_s);
//! ```
//!
//! # Error policy
//!
//! Malformed tables fail at load, out-of-span queries fail at lookup, and
//! invalid civil fields fail before any arithmetic.  A silent default in a
//! time conversion corrupts every downstream attitude computation without
//! symptom, so no error is recovered with a fallback value.

mod calendar;
mod converter;
mod eop;
mod error;
pub(crate) mod instant;
mod leap;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{days_in_month, is_leap_year, CivilDateTime};
pub use converter::{TimeScaleConverter, TT_MINUS_TAI};
pub use eop::{EopParameter, EopRecord, EopTable};
pub use error::{TimeError, TimeResult};
pub use instant::{Time, TimeScale, MJD_EPOCH};
pub use leap::{LeapSecondEntry, LeapSecondTable};
pub use scales::{Tai, Tt, Ut1, Utc};

// ── Scale-tagged type aliases ─────────────────────────────────────────────

/// Julian Date on the UTC axis — what the Gregorian formula produces.
///
/// This is a type alias for [`Time<Utc>`].
pub type UtcTime = Time<Utc>;

/// Julian Date on the UT1 (Earth rotation) axis.
///
/// This is a type alias for [`Time<Ut1>`].
pub type Ut1Time = Time<Ut1>;

/// Julian Date on the TAI (atomic) axis.
///
/// This is a type alias for [`Time<Tai>`].
pub type TaiTime = Time<Tai>;

/// Julian Date on the TT (dynamical) axis.
///
/// This is a type alias for [`Time<Tt>`].
pub type TtTime = Time<Tt>;
