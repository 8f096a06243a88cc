//! Core configuration for ncache-frames-core.

use serde::{Deserialize, Serialize};

use crate::error::FrameError;
use crate::range::FrameRange;

/// What to do with a `(start, end)` pair where `start > end`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvertedRangePolicy {
    /// Fail with [`FrameError::InvertedRange`].
    #[default]
    Reject,
    /// Reorder the endpoints.
    Swap,
}

/// Options the host passes in once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inverted_ranges: InvertedRangePolicy,
}

impl Config {
    /// Build a [`FrameRange`] from raw host values under this configuration.
    pub fn range(&self, start: i32, end: i32) -> Result<FrameRange, FrameError> {
        FrameRange::with_policy(start, end, self.inverted_ranges)
    }
}
