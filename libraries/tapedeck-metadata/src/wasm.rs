//! WASM bindings for tapedeck-metadata
//!
//! Lets the browser deck hand a file's `ArrayBuffer` straight to the tag
//! readers. Results cross the boundary as plain objects whose missing fields
//! are absent rather than `null`.

use crate::{extract_tags, parse_flac_tags, parse_id3_tags};
use tapedeck_core::{RawAudioFile, TagBundle};
use wasm_bindgen::prelude::*;

fn to_js(tags: &TagBundle) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    serde_wasm_bindgen::to_value(tags).map_err(JsValue::from)
}

/// Read tags from a selected file, choosing the reader by extension
#[wasm_bindgen(js_name = extractTags)]
pub fn extract_tags_js(name: &str, bytes: &[u8]) -> Result<JsValue, JsValue> {
    to_js(&extract_tags(&RawAudioFile::new(name, bytes)))
}

/// Read `{lyrics?, artist?, album?}` from a FLAC buffer
#[wasm_bindgen(js_name = parseFlacTags)]
pub fn parse_flac_tags_js(bytes: &[u8]) -> Result<JsValue, JsValue> {
    to_js(&parse_flac_tags(bytes))
}

/// Read `{lyrics?}` from the ID3v2 tag of an MP3 buffer
#[wasm_bindgen(js_name = parseId3Tags)]
pub fn parse_id3_tags_js(bytes: &[u8]) -> Result<JsValue, JsValue> {
    to_js(&parse_id3_tags(bytes))
}
