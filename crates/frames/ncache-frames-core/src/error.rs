//! Error types for frame range operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::range::FrameRange;

/// Which of the two inputs of a binary operation an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Contract violations reported by the frame math.
///
/// These are caller bugs rather than runtime conditions: nothing is coerced,
/// and no partial output is produced.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FrameError {
    /// `start` is after `end`
    #[error("inverted frame range: start {start} is after end {end}")]
    InvertedRange { start: i32, end: i32 },

    /// Per-frame data does not cover its range exactly
    #[error("{side} data has {actual} samples but range {range} spans {expected} frames")]
    LengthMismatch {
        side: Side,
        range: FrameRange,
        expected: usize,
        actual: usize,
    },

    /// A wedge needs at least one sample
    #[error("wedge sample count must be positive, got {count}")]
    InvalidSampleCount { count: usize },

    /// Wedge bounds must be finite numbers
    #[error("wedge bound must be finite, got {value}")]
    NonFiniteBound { value: f64 },

    /// A normalized endpoint left the 32-bit frame domain
    #[error("normalized frame {value} does not fit in a 32-bit frame number")]
    FrameOverflow { value: i64 },
}
