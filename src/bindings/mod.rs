//! Bindings to the page's third-party widget libraries
//!
//! The slider and the date-picker are external capabilities loaded by the
//! host page; the app drives them through these narrow interfaces (mount,
//! configure, navigate, close, destroy) and never depends on their
//! internals.

pub mod flatpickr;
pub mod swiper;

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Serialize an options struct to a plain JS object (not an ES `Map`), the
/// shape both widget libraries expect.
pub fn to_js_object<T: Serialize>(options: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    options
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
