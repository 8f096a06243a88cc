//! Parameter sweep ("wedge") sampling for batch simulations.
//!
//! One value per job, evenly spaced from `start` to `end` inclusive:
//! - `count == 1` -> `[start]`
//! - `count >= 2` -> `start + i * (end - start) / (count - 1)`, with the first
//!   and last values pinned to `start` and `end`
//!
//! `start > end` produces a decreasing sweep.

use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// Sweep settings as the batch driver stores them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WedgeConfig {
    pub start: f64,
    pub end: f64,
    /// Number of jobs (values) to generate.
    pub count: usize,
}

impl Default for WedgeConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
            count: 2,
        }
    }
}

impl WedgeConfig {
    pub fn values(&self) -> Result<Vec<f64>, FrameError> {
        wedge_values(self.start, self.end, self.count)
    }
}

/// `count` evenly spaced values from `start` to `end`, both included.
pub fn wedge_values(start: f64, end: f64, count: usize) -> Result<Vec<f64>, FrameError> {
    for value in [start, end] {
        if !value.is_finite() {
            return Err(FrameError::NonFiniteBound { value });
        }
    }
    if count == 0 {
        return Err(FrameError::InvalidSampleCount { count });
    }
    if count == 1 {
        return Ok(vec![start]);
    }

    let steps = (count - 1) as f64;
    let delta = end - start;
    let mut values: Vec<f64> = if delta.is_finite() {
        (0..count)
            .map(|i| start + (i as f64) * delta / steps)
            .collect()
    } else {
        // `end - start` overflowed; weight each bound instead of subtracting.
        (0..count)
            .map(|i| {
                let t = i as f64 / steps;
                start * (1.0 - t) + end * t
            })
            .collect()
    };
    values[0] = start;
    values[count - 1] = end;
    log::debug!("wedge {start} -> {end}: {count} values");
    Ok(values)
}
