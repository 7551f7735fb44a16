//! WASM bindings for tapedeck-lyrics

use crate::{format_clock, is_synced, parse_lrc, LrcLine, LyricsView};
use wasm_bindgen::prelude::*;

/// Parse LRC text into `{time, text}` objects
#[wasm_bindgen(js_name = parseLrc)]
pub fn parse_lrc_js(text: Option<String>) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    serde_wasm_bindgen::to_value(&parse_lrc(text.as_deref())).map_err(JsValue::from)
}

/// True when any of the given lines carries a timestamp
#[wasm_bindgen(js_name = isSynced)]
pub fn is_synced_js(lines: JsValue) -> Result<bool, JsValue> {
    let lines: Vec<LrcLine> = serde_wasm_bindgen::from_value(lines)?;
    Ok(is_synced(&lines))
}

/// Format seconds as `m:ss`
#[wasm_bindgen(js_name = formatClock)]
pub fn format_clock_js(seconds: f64) -> String {
    format_clock(seconds)
}

/// Lyric timeline for one track
#[wasm_bindgen]
pub struct WasmLyricsView {
    inner: LyricsView,
}

#[wasm_bindgen]
impl WasmLyricsView {
    #[wasm_bindgen(constructor)]
    pub fn new(raw: Option<String>) -> Self {
        console_error_panic_hook::set_once();

        Self {
            inner: LyricsView::from_raw(raw.as_deref()),
        }
    }

    #[wasm_bindgen(getter, js_name = isSynced)]
    pub fn is_synced(&self) -> bool {
        self.inner.is_synced
    }

    /// All lines as `{time, text}` objects
    pub fn lines(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.lines).map_err(JsValue::from)
    }

    /// Index of the highlighted line, or -1
    #[wasm_bindgen(js_name = activeIndex)]
    pub fn active_index(&self, position_secs: f64) -> i32 {
        self.inner
            .active_index(position_secs)
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1)
    }
}
