//! Align two per-frame arrays on the timeline produced by [`normalize_ranges`].
//!
//! Both outputs have length `max(first.end, second.end) + 1`. Each normalized
//! range is inclusive, so `range.len()` source samples land at
//! `range.start()..=range.end()`; every other slot is `None`.

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, Side};
use crate::normalize::{normalize_ranges, NormalizedRanges};
use crate::range::FrameRange;

/// Which side holds data at one position of an [`Overlay`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    Both,
    FirstOnly,
    SecondOnly,
    Neither,
}

/// Two equal-length arrays on a shared timeline, `None` where a side has no data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Overlay<A, B> {
    pub first: Vec<Option<A>>,
    pub second: Vec<Option<B>>,
    pub ranges: NormalizedRanges,
}

impl<A, B> Overlay<A, B> {
    /// Shared length of both arrays.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    pub fn coverage(&self) -> Vec<Coverage> {
        self.first
            .iter()
            .zip(&self.second)
            .map(|(a, b)| match (a.is_some(), b.is_some()) {
                (true, true) => Coverage::Both,
                (true, false) => Coverage::FirstOnly,
                (false, true) => Coverage::SecondOnly,
                (false, false) => Coverage::Neither,
            })
            .collect()
    }

    pub fn into_pair(self) -> (Vec<Option<A>>, Vec<Option<B>>) {
        (self.first, self.second)
    }
}

fn check_len(side: Side, range: FrameRange, actual: usize) -> Result<(), FrameError> {
    let expected = range.len();
    if actual != expected {
        return Err(FrameError::LengthMismatch {
            side,
            range,
            expected,
            actual,
        });
    }
    Ok(())
}

fn place<T: Clone>(data: &[T], at: FrameRange, len: usize) -> Vec<Option<T>> {
    let mut out: Vec<Option<T>> = vec![None; len];
    let start = at.start() as usize;
    for (slot, value) in out[start..start + data.len()].iter_mut().zip(data) {
        *slot = Some(value.clone());
    }
    out
}

/// Overlay `data_a` (one sample per frame of `range_a`) and `data_b` (one per
/// frame of `range_b`) on their normalized timeline.
pub fn overlay_arrays<A: Clone, B: Clone>(
    data_a: &[A],
    data_b: &[B],
    range_a: FrameRange,
    range_b: FrameRange,
) -> Result<Overlay<A, B>, FrameError> {
    check_len(Side::First, range_a, data_a.len())?;
    check_len(Side::Second, range_b, data_b.len())?;

    let ranges = normalize_ranges(range_a, range_b)?;
    let len = ranges.span();
    log::debug!(
        "overlay {range_a} and {range_b} on {len} frames ({:?})",
        ranges.relation
    );

    Ok(Overlay {
        first: place(data_a, ranges.first, len),
        second: place(data_b, ranges.second, len),
        ranges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: i32, end: i32) -> FrameRange {
        FrameRange::new(start, end).unwrap()
    }

    #[test]
    fn disjoint_flags_fill_every_slot_once() {
        let a = vec![true; 21];
        let b = vec![true; 16];
        let overlay = overlay_arrays(&a, &b, r(20, 40), r(50, 65)).unwrap();

        assert_eq!(overlay.len(), 37);
        assert_eq!(overlay.second.len(), 37);
        assert!(overlay.first[..21].iter().all(|v| *v == Some(true)));
        assert!(overlay.first[21..].iter().all(Option::is_none));
        assert!(overlay.second[..21].iter().all(Option::is_none));
        assert!(overlay.second[21..].iter().all(|v| *v == Some(true)));
        assert!(!overlay.coverage().contains(&Coverage::Both));
    }

    #[test]
    fn overlapping_keeps_order_and_offset() {
        let a: Vec<i32> = (50..=100).collect();
        let b: Vec<i32> = (70..=120).collect();
        let overlay = overlay_arrays(&a, &b, r(50, 100), r(70, 120)).unwrap();

        assert_eq!(overlay.len(), 71);
        assert_eq!(overlay.first[0], Some(50));
        assert_eq!(overlay.first[50], Some(100));
        assert_eq!(overlay.first[51], None);
        assert_eq!(overlay.second[19], None);
        assert_eq!(overlay.second[20], Some(70));
        assert_eq!(overlay.second[70], Some(120));

        let coverage = overlay.coverage();
        assert_eq!(coverage[0], Coverage::FirstOnly);
        assert_eq!(coverage[20], Coverage::Both);
        assert_eq!(coverage[70], Coverage::SecondOnly);
    }

    #[test]
    fn containment_pads_both_sides() {
        let a = vec![1.0_f32; 11];
        let b = vec!["x"; 3];
        let (first, second) = overlay_arrays(&a, &b, r(0, 10), r(4, 6))
            .unwrap()
            .into_pair();
        assert_eq!(first.len(), 11);
        assert_eq!(
            second,
            vec![None, None, None, None, Some("x"), Some("x"), Some("x"), None, None, None, None]
        );
    }

    #[test]
    fn rejects_wrong_lengths() {
        let err = overlay_arrays(&[1, 2], &[1, 2, 3], r(0, 1), r(0, 3)).unwrap_err();
        assert_eq!(
            err,
            FrameError::LengthMismatch {
                side: Side::Second,
                range: r(0, 3),
                expected: 4,
                actual: 3,
            }
        );
    }
}
