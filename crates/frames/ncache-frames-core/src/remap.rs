//! Percentage mapping of frames against the scene playback range, used to
//! draw a cache version's span as a bar over the scene timeline.

use serde::{Deserialize, Serialize};

use crate::range::FrameRange;

/// Position of `value` inside `[range_in, range_out]` as a percentage,
/// clamped to `0..=100`. A zero-width range maps everything inside it to 0.
pub fn percent(value: f64, range_in: f64, range_out: f64) -> f64 {
    if value < range_in {
        return 0.0;
    }
    if value > range_out {
        return 100.0;
    }
    let width = range_out - range_in;
    if width == 0.0 {
        return 0.0;
    }
    (value - range_in) / width * 100.0
}

/// Inverse of [`percent`] (not clamped).
pub fn from_percent(value: f64, range_in: f64, range_out: f64) -> f64 {
    value / 100.0 * (range_out - range_in) + range_in
}

/// A cached range expressed in percent of the scene range.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CachedSpan {
    pub start_percent: f64,
    pub end_percent: f64,
}

impl CachedSpan {
    /// Nothing to draw: the span collapsed after clamping.
    pub fn is_empty(&self) -> bool {
        self.start_percent == self.end_percent
    }

    /// Map the span onto a pixel (or any linear) interval.
    pub fn project(&self, left: f64, right: f64) -> (f64, f64) {
        (
            from_percent(self.start_percent, left, right),
            from_percent(self.end_percent, left, right),
        )
    }
}

pub fn cached_span(cached: FrameRange, scene: FrameRange) -> CachedSpan {
    let (scene_in, scene_out) = (f64::from(scene.start()), f64::from(scene.end()));
    CachedSpan {
        start_percent: percent(f64::from(cached.start()), scene_in, scene_out),
        end_percent: percent(f64::from(cached.end()), scene_in, scene_out),
    }
}
