//! Union of cached frame ranges.
//!
//! Only frames that belong to some input range are produced; the gap between
//! two disjoint ranges is never filled in.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::range::FrameRange;

/// Strictly increasing set of frame numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameSet(Vec<i32>);

impl FrameSet {
    pub fn contains(&self, frame: i32) -> bool {
        self.0.binary_search(&frame).is_ok()
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.0
    }
}

impl Deref for FrameSet {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.0
    }
}

impl IntoIterator for FrameSet {
    type Item = i32;
    type IntoIter = std::vec::IntoIter<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FrameSet {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Every frame in `a` or `b`, sorted, without duplicates. Commutative.
pub fn union_frames(a: FrameRange, b: FrameRange) -> FrameSet {
    union_all([a, b])
}

/// Every frame in any of `ranges`, sorted, without duplicates.
pub fn union_all<I>(ranges: I) -> FrameSet
where
    I: IntoIterator<Item = FrameRange>,
{
    let mut sorted: Vec<FrameRange> = ranges.into_iter().collect();
    sorted.sort_unstable();

    // Merge overlapping or touching spans, kept as (start, end) in i64 so that
    // `end + 1` cannot overflow at i32::MAX.
    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(sorted.len());
    for r in &sorted {
        let (start, end) = (i64::from(r.start()), i64::from(r.end()));
        match merged.last_mut() {
            Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let total: i64 = merged.iter().map(|(s, e)| e - s + 1).sum();
    // Only a capacity hint; a total past `usize` cannot be allocated anyway.
    let mut frames = Vec::with_capacity(usize::try_from(total).unwrap_or(0));
    for (start, end) in merged {
        // Both endpoints came from i32 values.
        frames.extend(start as i32..=end as i32);
    }
    log::trace!(
        "union of {} ranges covers {} frames",
        sorted.len(),
        frames.len()
    );
    FrameSet(frames)
}
