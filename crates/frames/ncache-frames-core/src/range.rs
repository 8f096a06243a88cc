//! Inclusive integer frame range.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::config::InvertedRangePolicy;
use crate::error::FrameError;

/// Inclusive frame interval `[start, end]` with `start <= end`.
///
/// Serialized as a two-element array `[start, end]`, the form cache metadata
/// stores per node. Deserializing an inverted pair fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[i32; 2]", into = "[i32; 2]")]
pub struct FrameRange {
    start: i32,
    end: i32,
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self, FrameError> {
        if start > end {
            return Err(FrameError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range under an explicit policy for inverted input.
    pub fn with_policy(
        start: i32,
        end: i32,
        policy: InvertedRangePolicy,
    ) -> Result<Self, FrameError> {
        match policy {
            InvertedRangePolicy::Reject => Self::new(start, end),
            InvertedRangePolicy::Swap if start > end => {
                log::warn!("swapping inverted frame range [{start}, {end}]");
                Ok(Self {
                    start: end,
                    end: start,
                })
            }
            InvertedRangePolicy::Swap => Ok(Self { start, end }),
        }
    }

    /// Single-frame range.
    pub fn single(frame: i32) -> Self {
        Self {
            start: frame,
            end: frame,
        }
    }

    #[inline]
    pub fn start(&self) -> i32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> i32 {
        self.end
    }

    /// `end - start`; zero for a single frame.
    #[inline]
    pub fn duration(&self) -> i64 {
        i64::from(self.end) - i64::from(self.start)
    }

    /// Number of frames covered (both endpoints included).
    ///
    /// Saturates at `usize::MAX` where `usize` is 32 bits and the range holds
    /// all 2^32 frames.
    #[inline]
    pub fn len(&self) -> usize {
        usize::try_from(self.duration() + 1).unwrap_or(usize::MAX)
    }

    /// Always false: a valid range holds at least one frame.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, frame: i32) -> bool {
        self.start <= frame && frame <= self.end
    }

    /// Ranges overlap when they share at least one frame (containment included).
    #[inline]
    pub fn overlaps(&self, other: &FrameRange) -> bool {
        self.start.max(other.start) <= self.end.min(other.end)
    }

    /// Iterate every frame in order.
    pub fn frames(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl TryFrom<[i32; 2]> for FrameRange {
    type Error = FrameError;

    fn try_from([start, end]: [i32; 2]) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl TryFrom<(i32, i32)> for FrameRange {
    type Error = FrameError;

    fn try_from((start, end): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<FrameRange> for [i32; 2] {
    fn from(range: FrameRange) -> Self {
        [range.start, range.end]
    }
}

impl From<FrameRange> for RangeInclusive<i32> {
    fn from(range: FrameRange) -> Self {
        range.frames()
    }
}
