//! ncache-frames-core: frame range math for simulation cache versions.
//!
//! Pure, stateless helpers used by the cache manager UI and the batch
//! ("wedging") driver:
//! - [`union_frames`] / [`union_all`]: every frame cached by one or more ranges.
//! - [`normalize_ranges`]: place two ranges on one timeline starting at 0.
//! - [`overlay_arrays`]: align two per-frame arrays on that timeline, padding with `None`.
//! - [`wedge_values`]: evenly spaced parameter values for a sweep.
//! - [`remap`]: percentage mapping of frames against the scene playback range.
//!
//! All ranges are inclusive on both ends.

pub mod config;
pub mod error;
pub mod normalize;
pub mod overlay;
pub mod range;
pub mod remap;
pub mod union;
pub mod wedge;

// Re-exports for consumers (adapters)
pub use config::{Config, InvertedRangePolicy};
pub use error::{FrameError, Side};
pub use normalize::{normalize_ranges, NormalizedRanges, RangeRelation};
pub use overlay::{overlay_arrays, Coverage, Overlay};
pub use range::FrameRange;
pub use remap::{cached_span, from_percent, percent, CachedSpan};
pub use union::{union_all, union_frames, FrameSet};
pub use wedge::{wedge_values, WedgeConfig};
