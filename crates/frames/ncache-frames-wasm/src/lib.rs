use js_sys::{Float64Array, Int32Array};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use ncache_frames_core::{Config, FrameRange, Overlay};

#[wasm_bindgen]
pub struct NCacheFrames {
    config: Config,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Serialize with `null` for missing values so overlay padding survives as `null`.
fn to_js<T: Serialize>(value: &T, what: &str) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("{what} serialize error: {e}")))
}

#[derive(Serialize)]
struct OverlayJs<'a> {
    first: &'a [Option<serde_json::Value>],
    second: &'a [Option<serde_json::Value>],
}

/// Per-frame samples for an overlay. `null` is reserved for padding in the
/// output, so a `null` sample is rejected.
fn samples(value: JsValue, what: &str) -> Result<Vec<serde_json::Value>, JsError> {
    let samples: Vec<serde_json::Value> = swb::from_value(value)
        .map_err(|e| JsError::new(&format!("overlay_arrays {what} parse error: {e}")))?;
    if let Some(i) = samples.iter().position(serde_json::Value::is_null) {
        return Err(JsError::new(&format!(
            "overlay_arrays {what}[{i}] is null; null marks frames without data"
        )));
    }
    Ok(samples)
}

impl NCacheFrames {
    /// Parse a `[start, end]` pair under the configured inverted-range policy.
    fn range(&self, value: JsValue, what: &str) -> Result<FrameRange, JsError> {
        if jsvalue_is_undefined_or_null(&value) {
            return Err(JsError::new(&format!("{what}: range is null/undefined")));
        }
        let [start, end]: [i32; 2] = swb::from_value(value)
            .map_err(|e| JsError::new(&format!("{what} parse error: {e}")))?;
        Ok(self.config.range(start, end)?)
    }
}

#[wasm_bindgen]
impl NCacheFrames {
    /// Create a frame math handle. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new NCacheFrames({ inverted_ranges: "swap" })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<NCacheFrames, JsError> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        Ok(NCacheFrames { config })
    }

    /// Every frame cached by either range, sorted.
    #[wasm_bindgen(js_name = union_frames)]
    pub fn union_frames(&self, a: JsValue, b: JsValue) -> Result<Int32Array, JsError> {
        let frames = ncache_frames_core::union_frames(self.range(a, "a")?, self.range(b, "b")?);
        Ok(Int32Array::from(&frames[..]))
    }

    /// Every frame cached by any range of an array of `[start, end]` pairs.
    #[wasm_bindgen(js_name = union_all)]
    pub fn union_all(&self, ranges: JsValue) -> Result<Int32Array, JsError> {
        let pairs: Vec<[i32; 2]> = swb::from_value(ranges)
            .map_err(|e| JsError::new(&format!("union_all parse error: {e}")))?;
        let ranges = pairs
            .into_iter()
            .map(|[start, end]| self.config.range(start, end))
            .collect::<Result<Vec<_>, _>>()?;
        let frames = ncache_frames_core::union_all(ranges);
        Ok(Int32Array::from(&frames[..]))
    }

    /// Returns `{ first: [s, e], second: [s, e], relation: "overlapping" | "disjoint" }`.
    #[wasm_bindgen(js_name = normalize_ranges)]
    pub fn normalize_ranges(&self, a: JsValue, b: JsValue) -> Result<JsValue, JsError> {
        let normalized =
            ncache_frames_core::normalize_ranges(self.range(a, "a")?, self.range(b, "b")?)?;
        to_js(&normalized, "normalize_ranges")
    }

    /// Align two per-frame arrays on a shared timeline.
    /// Returns `{ first, second }`, equal-length arrays padded with `null`.
    /// Samples must not be `null`.
    #[wasm_bindgen(js_name = overlay_arrays)]
    pub fn overlay_arrays(
        &self,
        data_a: JsValue,
        data_b: JsValue,
        a: JsValue,
        b: JsValue,
    ) -> Result<JsValue, JsError> {
        let data_a = samples(data_a, "data_a")?;
        let data_b = samples(data_b, "data_b")?;
        let overlay: Overlay<_, _> = ncache_frames_core::overlay_arrays(
            &data_a,
            &data_b,
            self.range(a, "a")?,
            self.range(b, "b")?,
        )?;
        to_js(
            &OverlayJs {
                first: &overlay.first,
                second: &overlay.second,
            },
            "overlay_arrays",
        )
    }

    /// Returns `{ start_percent, end_percent }` of `cached` within `scene`.
    #[wasm_bindgen(js_name = cached_span)]
    pub fn cached_span(&self, cached: JsValue, scene: JsValue) -> Result<JsValue, JsError> {
        let span = ncache_frames_core::cached_span(
            self.range(cached, "cached")?,
            self.range(scene, "scene")?,
        );
        to_js(&span, "cached_span")
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive.
/// `count` is taken as a JS number so negative or fractional counts are
/// rejected instead of being wrapped into a `u32`.
#[wasm_bindgen]
pub fn wedge_values(start: f64, end: f64, count: f64) -> Result<Float64Array, JsError> {
    let whole = count.is_finite() && count.fract() == 0.0;
    if !whole || !(1.0..=u32::MAX as f64).contains(&count) {
        return Err(JsError::new(&format!(
            "wedge sample count must be a positive integer, got {count}"
        )));
    }
    let values = ncache_frames_core::wedge_values(start, end, count as usize)?;
    Ok(Float64Array::from(&values[..]))
}

#[wasm_bindgen]
pub fn percent(value: f64, range_in: f64, range_out: f64) -> f64 {
    ncache_frames_core::percent(value, range_in, range_out)
}

#[wasm_bindgen]
pub fn from_percent(value: f64, range_in: f64, range_out: f64) -> f64 {
    ncache_frames_core::from_percent(value, range_in, range_out)
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
