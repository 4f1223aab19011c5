// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Leap-second (TAI − UTC) table.
//!
//! UTC is kept within 0.9 s of UT1 by inserting whole leap seconds; the
//! cumulative count ΔAT = TAI − UTC is a step function of time.
//! [`LeapSecondTable`] stores the steps sorted by the MJD they take effect
//! and answers floor lookups: the offset of the latest entry at or before
//! the queried epoch.  There is no interpolation — the offset is
//! piecewise-constant with a discontinuity at each effective MJD.
//!
//! Leap-second history is undefined before the first recorded introduction,
//! so a query below the first entry fails rather than guessing.

use log::debug;

use super::error::{TimeError, TimeResult};

/// One step of the TAI − UTC step function.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeapSecondEntry {
    /// MJD from which the offset applies, until superseded by the next entry.
    pub effective_mjd: f64,
    /// Cumulative TAI − UTC offset \[whole seconds\].
    pub tai_utc_s: i32,
}

/// Published IERS TAI − UTC steps, 1972-01-01 (10 s) through
/// 2017-01-01 (37 s, current as of this table).
#[rustfmt::skip]
const IERS_HISTORY: [LeapSecondEntry; 28] = [
    LeapSecondEntry { effective_mjd: 41_317.0, tai_utc_s: 10 },
    LeapSecondEntry { effective_mjd: 41_499.0, tai_utc_s: 11 },
    LeapSecondEntry { effective_mjd: 41_683.0, tai_utc_s: 12 },
    LeapSecondEntry { effective_mjd: 42_048.0, tai_utc_s: 13 },
    LeapSecondEntry { effective_mjd: 42_413.0, tai_utc_s: 14 },
    LeapSecondEntry { effective_mjd: 42_778.0, tai_utc_s: 15 },
    LeapSecondEntry { effective_mjd: 43_144.0, tai_utc_s: 16 },
    LeapSecondEntry { effective_mjd: 43_509.0, tai_utc_s: 17 },
    LeapSecondEntry { effective_mjd: 43_874.0, tai_utc_s: 18 },
    LeapSecondEntry { effective_mjd: 44_239.0, tai_utc_s: 19 },
    LeapSecondEntry { effective_mjd: 44_786.0, tai_utc_s: 20 },
    LeapSecondEntry { effective_mjd: 45_151.0, tai_utc_s: 21 },
    LeapSecondEntry { effective_mjd: 45_516.0, tai_utc_s: 22 },
    LeapSecondEntry { effective_mjd: 46_247.0, tai_utc_s: 23 },
    LeapSecondEntry { effective_mjd: 47_161.0, tai_utc_s: 24 },
    LeapSecondEntry { effective_mjd: 47_892.0, tai_utc_s: 25 },
    LeapSecondEntry { effective_mjd: 48_257.0, tai_utc_s: 26 },
    LeapSecondEntry { effective_mjd: 48_804.0, tai_utc_s: 27 },
    LeapSecondEntry { effective_mjd: 49_169.0, tai_utc_s: 28 },
    LeapSecondEntry { effective_mjd: 49_534.0, tai_utc_s: 29 },
    LeapSecondEntry { effective_mjd: 50_083.0, tai_utc_s: 30 },
    LeapSecondEntry { effective_mjd: 50_630.0, tai_utc_s: 31 },
    LeapSecondEntry { effective_mjd: 51_179.0, tai_utc_s: 32 },
    LeapSecondEntry { effective_mjd: 53_736.0, tai_utc_s: 33 },
    LeapSecondEntry { effective_mjd: 54_832.0, tai_utc_s: 34 },
    LeapSecondEntry { effective_mjd: 56_109.0, tai_utc_s: 35 },
    LeapSecondEntry { effective_mjd: 57_204.0, tai_utc_s: 36 },
    LeapSecondEntry { effective_mjd: 57_754.0, tai_utc_s: 37 },
];

/// Immutable table of cumulative TAI − UTC offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct LeapSecondTable {
    entries: Vec<LeapSecondEntry>,
}

impl LeapSecondTable {
    /// Builds a table from an already-parsed entry sequence.
    ///
    /// Fails with [`TimeError::MalformedTable`] if the sequence is empty or
    /// the effective MJDs are not strictly ascending.
    pub fn from_entries(entries: Vec<LeapSecondEntry>) -> TimeResult<Self> {
        if entries.is_empty() {
            return Err(TimeError::malformed("leap-second table has no entries"));
        }
        for pair in entries.windows(2) {
            if pair[1].effective_mjd <= pair[0].effective_mjd {
                return Err(TimeError::malformed(format!(
                    "leap-second effective MJD {} follows {}; keys must be strictly ascending",
                    pair[1].effective_mjd, pair[0].effective_mjd
                )));
            }
        }

        debug!(
            "leap-second table loaded: {} entries, effective MJD {}..={}",
            entries.len(),
            entries[0].effective_mjd,
            entries[entries.len() - 1].effective_mjd
        );
        Ok(Self { entries })
    }

    /// The published IERS leap-second history bundled with the crate
    /// (1972-01-01 through the 2017-01-01 step to 37 s).
    ///
    /// Authoritative feeds supersede this via [`from_entries`](Self::from_entries)
    /// when a new leap second is announced.
    pub fn builtin() -> Self {
        Self {
            entries: IERS_HISTORY.to_vec(),
        }
    }

    /// Floor lookup: cumulative TAI − UTC offset of the entry with the
    /// greatest `effective_mjd ≤ mjd`.
    ///
    /// Fails with [`TimeError::OutOfRange`] if `mjd` precedes the first
    /// entry — the step function is undefined before its first step.
    pub fn lookup(&self, mjd: f64) -> TimeResult<i32> {
        let index = self
            .entries
            .partition_point(|entry| entry.effective_mjd <= mjd);
        if index == 0 {
            return Err(TimeError::OutOfRange {
                mjd,
                lower: self.entries[0].effective_mjd,
                upper: f64::INFINITY,
            });
        }
        Ok(self.entries[index - 1].tai_utc_s)
    }

    /// Number of steps in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First MJD at which the table is defined.
    pub fn first_mjd(&self) -> f64 {
        self.entries[0].effective_mjd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_lookup_returns_latest_entry_at_or_before() {
        let table = LeapSecondTable::builtin();

        // Exactly on a step: the new offset applies from that day.
        assert_eq!(table.lookup(57_754.0).unwrap(), 37);
        // Just before the step: still the previous offset.
        assert_eq!(table.lookup(57_753.999).unwrap(), 36);
        // Far past the last step the offset stays constant.
        assert_eq!(table.lookup(60_000.5).unwrap(), 37);
        // First step.
        assert_eq!(table.lookup(41_317.0).unwrap(), 10);
    }

    #[test]
    fn lookup_before_first_entry_fails() {
        let table = LeapSecondTable::builtin();
        assert!(matches!(
            table.lookup(41_316.0),
            Err(TimeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn builtin_history_is_consistent() {
        let table = LeapSecondTable::builtin();
        assert_eq!(table.len(), 28);
        assert_eq!(table.first_mjd(), 41_317.0);
        // Every step adds exactly one second.
        for pair in table.entries.windows(2) {
            assert_eq!(pair[1].tai_utc_s - pair[0].tai_utc_s, 1);
        }
    }

    #[test]
    fn construction_rejects_unordered_and_empty_input() {
        assert!(matches!(
            LeapSecondTable::from_entries(vec![]),
            Err(TimeError::MalformedTable { .. })
        ));

        let unordered = vec![
            LeapSecondEntry {
                effective_mjd: 57_754.0,
                tai_utc_s: 37,
            },
            LeapSecondEntry {
                effective_mjd: 57_204.0,
                tai_utc_s: 36,
            },
        ];
        assert!(matches!(
            LeapSecondTable::from_entries(unordered),
            Err(TimeError::MalformedTable { .. })
        ));
    }

    #[test]
    fn single_entry_table_covers_everything_after_its_step() {
        let table = LeapSecondTable::from_entries(vec![LeapSecondEntry {
            effective_mjd: 57_754.0,
            tai_utc_s: 37,
        }])
        .unwrap();
        assert_eq!(table.lookup(59_662.5).unwrap(), 37);
        assert!(table.lookup(57_000.0).is_err());
    }

    #[test]
    fn table_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<LeapSecondTable>();
        assert_sync::<LeapSecondTable>();
    }
}
