// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time-scale parameterised Julian Date.
//!
//! [`Time<S>`] is the core instant type of the crate.  It stores a Julian
//! Date in [`Days`] whose *axis* is determined by the compile-time marker
//! `S: TimeScale` — the same numeric value means a different physical instant
//! on the UTC, UT1, TAI, and TT axes.  Arithmetic, MJD/century/second epoch
//! helpers, display, and serialisation are implemented once, generically.
//!
//! Moving an instant *between* axes requires tabulated physical data
//! (Earth-orientation dUT1, leap seconds), so cross-scale conversion lives
//! in [`TimeScaleConverter`](crate::TimeScaleConverter) rather than on the
//! marker trait: the offsets are measurements, not constants.

use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The constant offset between JD and MJD: `MJD = JD − 2 400 000.5`.
pub const MJD_EPOCH: Days = Days::new(2_400_000.5);

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time-scale axes.
///
/// A marker only carries a human-readable **label**; the physical
/// relationships between axes (dUT1, ΔAT, the fixed TT−TAI offset) are
/// applied by [`TimeScaleConverter`](crate::TimeScaleConverter) because
/// they depend on loaded Earth-orientation and leap-second tables.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S> — the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A Julian Date on time-scale axis `S`.
///
/// The struct is `Copy` and zero-cost: `PhantomData` is zero-sized, so
/// `Time<S>` is layout-identical to `Days` (a single `f64`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// J2000.0 reference epoch (JD 2 451 545.0, 2000-01-01 12:00 on this axis).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw Julian Date scalar.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// Build an instant from a Modified Julian Date on this axis.
    #[inline]
    pub fn from_mjd(mjd: Days) -> Self {
        Self::from_days(mjd + MJD_EPOCH)
    }

    /// Build an instant from Julian seconds since J2000 on this axis.
    #[inline]
    pub fn from_julian_seconds(seconds: Seconds) -> Self {
        Self::J2000 + seconds.to::<Day>()
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying Julian Date in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying Julian Date as scalar.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    // ── epoch representations ─────────────────────────────────────────

    /// Modified Julian Date: `JD − 2 400 000.5`.
    ///
    /// Aligned with midnight and small in dynamic range, which is why the
    /// Earth-orientation and leap-second tables key on it.
    #[inline]
    pub fn mjd(&self) -> Days {
        self.quantity - MJD_EPOCH
    }

    /// Julian centuries since J2000.0 on this axis: `(JD − 2 451 545)/36 525`.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Julian seconds since J2000.0 on this axis: `(JD − 2 451 545)·86 400`.
    #[inline]
    pub fn julian_seconds(&self) -> Seconds {
        (*self - Self::J2000).to::<Second>()
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
