// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy for table loading and time-scale conversion.
//!
//! Every fallible operation in the crate surfaces one of three conditions:
//! a table that cannot be constructed, a query outside the span a table
//! covers, or a civil timestamp with an out-of-range field.  Failures are
//! always explicit — no clamping, no extrapolation, no silent defaults.

use thiserror::Error;

/// Errors produced by table construction and conversion queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// A table could not be built from its input (empty, unsorted, or
    /// garbled rows).
    #[error("malformed table: {reason}")]
    MalformedTable { reason: String },

    /// The queried epoch falls outside the span the table covers.
    #[error("MJD {mjd} outside covered span [{lower}, {upper}]")]
    OutOfRange { mjd: f64, lower: f64, upper: f64 },

    /// A civil date-time field is outside its valid range.
    #[error("invalid civil time: {field} = {value}")]
    InvalidCivilTime { field: &'static str, value: f64 },
}

impl TimeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        TimeError::MalformedTable {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_field(field: &'static str, value: f64) -> Self {
        TimeError::InvalidCivilTime { field, value }
    }
}

/// Convenience alias used throughout the crate.
pub type TimeResult<T> = Result<T, TimeError>;
