// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Earth Orientation Parameter (EOP) table.
//!
//! The IERS publishes daily measured corrections to the Earth's rotation:
//! pole position, UT1−UTC, length-of-day, and celestial-pole offsets.
//! [`EopTable`] holds one record per calendar day, keyed by integer MJD, and
//! answers interpolated queries at fractional MJDs.  The parameters vary
//! smoothly day-to-day, so linear interpolation between adjacent daily
//! samples is standard practice.
//!
//! The table is immutable after construction and safe for unsynchronised
//! concurrent reads; refreshing means building a new table and swapping the
//! reference.

use log::debug;

use super::error::{TimeError, TimeResult};

/// One daily EOP record.
///
/// Field names carry the source units: arcseconds for angles, seconds for
/// the time corrections.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EopRecord {
    /// Integer MJD of the 0h UTC epoch this record describes.
    pub mjd: u32,
    /// Pole x coordinate \[arcsec\].
    pub polar_x_arcsec: f64,
    /// Pole y coordinate \[arcsec\].
    pub polar_y_arcsec: f64,
    /// UT1 − UTC \[s\].
    pub dut1_s: f64,
    /// Excess length of day \[s\].
    pub lod_s: f64,
    /// Celestial pole offset dX \[arcsec\].
    pub nutation_dx_arcsec: f64,
    /// Celestial pole offset dY \[arcsec\].
    pub nutation_dy_arcsec: f64,
}

/// The closed set of queryable EOP columns.
///
/// Resolved at compile time; there is no string-keyed column access.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EopParameter {
    /// Pole x coordinate \[arcsec\].
    PolarX,
    /// Pole y coordinate \[arcsec\].
    PolarY,
    /// UT1 − UTC \[s\].
    Dut1,
    /// Excess length of day \[s\].
    Lod,
    /// Celestial pole offset dX \[arcsec\].
    NutationDx,
    /// Celestial pole offset dY \[arcsec\].
    NutationDy,
}

impl EopParameter {
    #[inline]
    fn extract(&self, record: &EopRecord) -> f64 {
        match self {
            Self::PolarX => record.polar_x_arcsec,
            Self::PolarY => record.polar_y_arcsec,
            Self::Dut1 => record.dut1_s,
            Self::Lod => record.lod_s,
            Self::NutationDx => record.nutation_dx_arcsec,
            Self::NutationDy => record.nutation_dy_arcsec,
        }
    }
}

/// Number of whitespace-delimited columns in a source EOP row.
///
/// Layout: `year month date mjd x y dUT1 LOD dX dY` followed by the six
/// uncertainty columns (`x_err … dY_err`).
const EOP_ROW_COLUMNS: usize = 16;

/// Immutable, sorted table of daily EOP records.
#[derive(Debug, Clone, PartialEq)]
pub struct EopTable {
    records: Vec<EopRecord>,
}

impl EopTable {
    /// Builds a table from an already-parsed record sequence.
    ///
    /// Fails with [`TimeError::MalformedTable`] if the sequence is empty or
    /// the MJD keys are not strictly ascending.  No partial table escapes.
    pub fn from_records(records: Vec<EopRecord>) -> TimeResult<Self> {
        if records.is_empty() {
            return Err(TimeError::malformed("EOP table has no records"));
        }
        for pair in records.windows(2) {
            if pair[1].mjd <= pair[0].mjd {
                return Err(TimeError::malformed(format!(
                    "EOP mjd {} follows {}; keys must be strictly ascending",
                    pair[1].mjd, pair[0].mjd
                )));
            }
        }

        debug!(
            "EOP table loaded: {} records, MJD {}..={}",
            records.len(),
            records[0].mjd,
            records[records.len() - 1].mjd
        );
        Ok(Self { records })
    }

    /// Parses whitespace-delimited EOP rows (the IERS `finals` layout the
    /// ingestion side produces) and builds a table.
    ///
    /// Each non-empty row must carry [`EOP_ROW_COLUMNS`] numeric fields; the
    /// six trailing uncertainty columns are validated but not retained.
    pub fn parse(source: &str) -> TimeResult<Self> {
        let mut records = Vec::new();
        for (index, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != EOP_ROW_COLUMNS {
                return Err(TimeError::malformed(format!(
                    "EOP row {} has {} fields, expected {}",
                    index + 1,
                    fields.len(),
                    EOP_ROW_COLUMNS
                )));
            }

            let number = |column: usize| -> TimeResult<f64> {
                fields[column].parse::<f64>().map_err(|_| {
                    TimeError::malformed(format!(
                        "EOP row {} column {}: unparseable value {:?}",
                        index + 1,
                        column + 1,
                        fields[column]
                    ))
                })
            };

            let mjd = number(3)?;
            if mjd < 0.0 || mjd.fract() != 0.0 {
                return Err(TimeError::malformed(format!(
                    "EOP row {}: mjd {} is not a non-negative integer day",
                    index + 1,
                    mjd
                )));
            }

            records.push(EopRecord {
                mjd: mjd as u32,
                polar_x_arcsec: number(4)?,
                polar_y_arcsec: number(5)?,
                dut1_s: number(6)?,
                lod_s: number(7)?,
                nutation_dx_arcsec: number(8)?,
                nutation_dy_arcsec: number(9)?,
            });

            // Uncertainty columns are structural only.
            for column in 10..EOP_ROW_COLUMNS {
                number(column)?;
            }
        }

        Self::from_records(records)
    }

    /// Looks up the named parameter at a (possibly fractional) MJD.
    ///
    /// With `lo = floor(mjd)` and `hi = ceil(mjd)`: if both days are in the
    /// table the value is interpolated linearly between them; an exact
    /// integer MJD returns the stored record value directly.  A query where
    /// either bracketing day is missing fails with
    /// [`TimeError::OutOfRange`] — never clamped, never extrapolated.
    pub fn query(&self, mjd: f64, parameter: EopParameter) -> TimeResult<f64> {
        let lo = mjd.floor();
        let hi = mjd.ceil();

        let below = self
            .record_at(lo)
            .ok_or_else(|| self.out_of_range(mjd))
            .map(|r| parameter.extract(r))?;
        if lo == hi {
            return Ok(below);
        }

        let above = self
            .record_at(hi)
            .ok_or_else(|| self.out_of_range(mjd))
            .map(|r| parameter.extract(r))?;

        Ok(below + (above - below) * (mjd - lo))
    }

    /// Number of daily records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First covered MJD.
    pub fn first_mjd(&self) -> u32 {
        self.records[0].mjd
    }

    /// Last covered MJD.
    pub fn last_mjd(&self) -> u32 {
        self.records[self.records.len() - 1].mjd
    }

    fn record_at(&self, mjd_day: f64) -> Option<&EopRecord> {
        if mjd_day < 0.0 {
            return None;
        }
        let key = mjd_day as u32;
        self.records
            .binary_search_by(|record| record.mjd.cmp(&key))
            .ok()
            .map(|index| &self.records[index])
    }

    fn out_of_range(&self, mjd: f64) -> TimeError {
        TimeError::OutOfRange {
            mjd,
            lower: self.first_mjd() as f64,
            upper: self.last_mjd() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mjd: u32, dut1_s: f64) -> EopRecord {
        EopRecord {
            mjd,
            polar_x_arcsec: 0.01,
            polar_y_arcsec: 0.35,
            dut1_s,
            lod_s: 0.0007,
            nutation_dx_arcsec: 0.0001,
            nutation_dy_arcsec: -0.0002,
        }
    }

    fn march_2022_table() -> EopTable {
        EopTable::from_records(vec![
            record(59_661, -0.100_941_2),
            record(59_662, -0.100_563_2),
            record(59_663, -0.100_185_2),
        ])
        .unwrap()
    }

    #[test]
    fn exact_integer_mjd_returns_stored_value() {
        let table = march_2022_table();
        let value = table.query(59_662.0, EopParameter::Dut1).unwrap();
        assert_eq!(value, -0.100_563_2);
    }

    #[test]
    fn half_integer_mjd_returns_mean_of_neighbours() {
        let table = march_2022_table();
        let value = table.query(59_662.5, EopParameter::Dut1).unwrap();
        assert!((value - (-0.100_563_2 + -0.100_185_2) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn interpolation_is_linear_in_the_fraction() {
        let table = EopTable::from_records(vec![record(59_000, 0.0), record(59_001, 1.0)]).unwrap();
        for fraction in [0.1, 0.25, 0.75, 0.9] {
            let value = table.query(59_000.0 + fraction, EopParameter::Dut1).unwrap();
            assert!((value - fraction).abs() < 1e-15);
        }
    }

    #[test]
    fn every_parameter_is_reachable() {
        let table = march_2022_table();
        for parameter in [
            EopParameter::PolarX,
            EopParameter::PolarY,
            EopParameter::Dut1,
            EopParameter::Lod,
            EopParameter::NutationDx,
            EopParameter::NutationDy,
        ] {
            table.query(59_662.0, parameter).unwrap();
        }
        assert_eq!(
            table.query(59_662.0, EopParameter::PolarY).unwrap(),
            0.35
        );
    }

    #[test]
    fn query_outside_span_fails() {
        let table = march_2022_table();
        assert!(matches!(
            table.query(59_660.5, EopParameter::Dut1),
            Err(TimeError::OutOfRange { .. })
        ));
        // The upper bracket day is missing even though floor(mjd) exists.
        assert!(matches!(
            table.query(59_663.5, EopParameter::Dut1),
            Err(TimeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn construction_rejects_unordered_and_empty_input() {
        assert!(matches!(
            EopTable::from_records(vec![]),
            Err(TimeError::MalformedTable { .. })
        ));
        assert!(matches!(
            EopTable::from_records(vec![record(59_663, 0.0), record(59_662, 0.0)]),
            Err(TimeError::MalformedTable { .. })
        ));
        assert!(matches!(
            EopTable::from_records(vec![record(59_662, 0.0), record(59_662, 0.0)]),
            Err(TimeError::MalformedTable { .. })
        ));
    }

    #[test]
    fn parse_accepts_well_formed_rows() {
        let source = "\
2022 3 23 59661 0.0527 0.3503 -0.1009412 0.0002 0.0001 -0.0002 0.0001 0.0001 0.0000071 0.0000258 0.000121 0.000095
2022 3 24 59662 0.0523 0.3509 -0.1005632 0.0003 0.0001 -0.0002 0.0001 0.0001 0.0000071 0.0000258 0.000121 0.000095
2022 3 25 59663 0.0519 0.3515 -0.1001852 0.0004 0.0001 -0.0002 0.0001 0.0001 0.0000071 0.0000258 0.000121 0.000095
";
        let table = EopTable::parse(source).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.first_mjd(), 59_661);
        assert_eq!(table.last_mjd(), 59_663);

        let dut1 = table.query(59_662.5, EopParameter::Dut1).unwrap();
        assert!((dut1 - -0.100_374_2).abs() < 1e-12);
    }

    #[test]
    fn parse_rejects_short_rows_and_bad_numbers() {
        let short = "2022 3 24 59662 0.0523 0.3509 -0.1005632";
        assert!(matches!(
            EopTable::parse(short),
            Err(TimeError::MalformedTable { .. })
        ));

        let garbled = "\
2022 3 24 59662 0.0523 0.3509 oops 0.0003 0.0001 -0.0002 0.0001 0.0001 0.0000071 0.0000258 0.000121 0.000095
";
        assert!(matches!(
            EopTable::parse(garbled),
            Err(TimeError::MalformedTable { .. })
        ));

        let fractional_mjd = "\
2022 3 24 59662.5 0.0523 0.3509 -0.1005632 0.0003 0.0001 -0.0002 0.0001 0.0001 0.0000071 0.0000258 0.000121 0.000095
";
        assert!(matches!(
            EopTable::parse(fractional_mjd),
            Err(TimeError::MalformedTable { .. })
        ));
    }

    #[test]
    fn table_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<EopTable>();
        assert_sync::<EopTable>();
    }
}
