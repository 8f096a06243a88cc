//! Place two frame ranges on one shared timeline that starts at frame 0.
//!
//! The range with the smaller start is the *base*; on equal starts the first
//! argument is the base.
//! - Overlapping ranges (containment included) keep their exact relative offset.
//! - Disjoint ranges lose the size of their gap: the later range is placed one
//!   frame after the end of the base.

use serde::{Deserialize, Serialize};

use crate::error::FrameError;
use crate::range::FrameRange;

/// Whether two ranges share at least one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeRelation {
    Overlapping,
    Disjoint,
}

/// Normalized counterparts of two input ranges, in argument order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedRanges {
    pub first: FrameRange,
    pub second: FrameRange,
    pub relation: RangeRelation,
}

impl NormalizedRanges {
    pub fn into_pair(self) -> (FrameRange, FrameRange) {
        (self.first, self.second)
    }

    /// Index one past the last normalized frame of either range.
    pub fn span(&self) -> usize {
        self.first.end().max(self.second.end()) as usize + 1
    }
}

fn shifted(start: i64, duration: i64) -> Result<FrameRange, FrameError> {
    let end = start + duration;
    let to_frame =
        |value: i64| i32::try_from(value).map_err(|_| FrameError::FrameOverflow { value });
    FrameRange::new(to_frame(start)?, to_frame(end)?)
}

/// Normalize `a` and `b` onto a shared zero-based timeline.
pub fn normalize_ranges(a: FrameRange, b: FrameRange) -> Result<NormalizedRanges, FrameError> {
    let first_is_base = a.start() <= b.start();
    let (base, other) = if first_is_base { (a, b) } else { (b, a) };

    let relation = if a.overlaps(&b) {
        RangeRelation::Overlapping
    } else {
        RangeRelation::Disjoint
    };

    let base_norm = shifted(0, base.duration())?;
    let other_start = match relation {
        RangeRelation::Overlapping => i64::from(other.start()) - i64::from(base.start()),
        RangeRelation::Disjoint => base.duration() + 1,
    };
    let other_norm = shifted(other_start, other.duration())?;

    log::trace!("normalize {a} {b}: {relation:?}, first is base: {first_is_base}");

    let (first, second) = if first_is_base {
        (base_norm, other_norm)
    } else {
        (other_norm, base_norm)
    };
    Ok(NormalizedRanges {
        first,
        second,
        relation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: i32, end: i32) -> FrameRange {
        FrameRange::new(start, end).unwrap()
    }

    fn norm(a: (i32, i32), b: (i32, i32)) -> ((i32, i32), (i32, i32)) {
        let n = normalize_ranges(r(a.0, a.1), r(b.0, b.1)).unwrap();
        (
            (n.first.start(), n.first.end()),
            (n.second.start(), n.second.end()),
        )
    }

    #[test]
    fn identical_ranges() {
        assert_eq!(norm((50, 100), (50, 100)), ((0, 50), (0, 50)));
    }

    #[test]
    fn partial_overlap_keeps_offset() {
        assert_eq!(norm((50, 100), (70, 120)), ((0, 50), (20, 70)));
    }

    #[test]
    fn containment_both_orders() {
        assert_eq!(norm((0, 100), (20, 40)), ((0, 100), (20, 40)));
        assert_eq!(norm((50, 150), (70, 90)), ((0, 100), (20, 40)));
        assert_eq!(norm((20, 40), (0, 100)), ((20, 40), (0, 100)));
        assert_eq!(norm((70, 90), (50, 150)), ((20, 40), (0, 100)));
    }

    #[test]
    fn gap_collapses_to_one_frame() {
        assert_eq!(norm((50, 90), (100, 110)), ((0, 40), (41, 51)));
        assert_eq!(norm((100, 110), (50, 90)), ((41, 51), (0, 40)));
        assert_eq!(norm((20, 40), (50, 65)), ((0, 20), (21, 36)));
    }

    #[test]
    fn adjacent_ranges_are_disjoint() {
        let n = normalize_ranges(r(0, 9), r(10, 19)).unwrap();
        assert_eq!(n.relation, RangeRelation::Disjoint);
        assert_eq!(n.second, r(10, 19));
    }

    #[test]
    fn equal_start_uses_first_as_base() {
        let n = normalize_ranges(r(10, 20), r(10, 15)).unwrap();
        assert_eq!(n.into_pair(), (r(0, 10), r(0, 5)));
        assert_eq!(n.span(), 11);
    }

    #[test]
    fn overflow_is_reported() {
        let err = normalize_ranges(r(i32::MIN, 0), r(5, i32::MAX)).unwrap_err();
        assert!(matches!(err, FrameError::FrameOverflow { .. }));
    }
}
