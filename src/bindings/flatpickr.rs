//! Date-picker capability
//!
//! Extern interface to the page's flatpickr bundle. The app mounts a picker
//! on an element with typed options and a change callback; rendering and
//! date arithmetic stay inside the library.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::to_js_object;

#[wasm_bindgen]
extern "C" {
    /// A mounted picker instance.
    pub type Flatpickr;

    #[wasm_bindgen(js_name = flatpickr)]
    fn flatpickr_raw(element: &web_sys::Element, options: &JsValue) -> Flatpickr;

    /// Close the picker popup.
    #[wasm_bindgen(method)]
    pub fn close(this: &Flatpickr);

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Flatpickr);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleOptions {
    /// 1 = Monday.
    pub first_day_of_week: u32,
}

/// The subset of picker configuration the archive calendar drives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatpickrOptions {
    pub locale: LocaleOptions,
    pub mode: &'static str,
    /// The only selectable dates, `YYYY-MM-DD`.
    pub enable: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
}

impl FlatpickrOptions {
    /// Multiple-date archive picker over the given dates, with the range
    /// bounds derived from them.
    pub fn archive(dates: &[&str]) -> Self {
        let mut sorted: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
        sorted.sort();
        Self {
            locale: LocaleOptions { first_day_of_week: 1 },
            mode: "multiple",
            min_date: sorted.first().cloned(),
            max_date: sorted.last().cloned(),
            enable: dates.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Mount a picker on `element`. `on_change` fires with the formatted date
/// string whenever the selection changes; the callback stays alive as long
/// as the page.
pub fn mount(
    element: &web_sys::Element,
    options: &FlatpickrOptions,
    on_change: impl Fn(String) + 'static,
) -> Result<Flatpickr, JsValue> {
    let options_js = to_js_object(options)?;

    // flatpickr calls onChange(selectedDates, dateStr, instance)
    let callback = Closure::wrap(Box::new(move |_dates: JsValue, date_str: JsValue, _inst: JsValue| {
        on_change(date_str.as_string().unwrap_or_default());
    }) as Box<dyn Fn(JsValue, JsValue, JsValue)>);
    js_sys::Reflect::set(&options_js, &JsValue::from_str("onChange"), callback.as_ref())?;
    callback.forget();

    Ok(flatpickr_raw(element, &options_js))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_options_derive_range_bounds() {
        let options = FlatpickrOptions::archive(&["2025-06-12", "2025-02-08", "2025-04-14"]);

        assert_eq!(options.mode, "multiple");
        assert_eq!(options.min_date.as_deref(), Some("2025-02-08"));
        assert_eq!(options.max_date.as_deref(), Some("2025-06-12"));
        // `enable` keeps the caller's order
        assert_eq!(options.enable[0], "2025-06-12");
    }

    #[test]
    fn test_archive_options_empty_dates() {
        let options = FlatpickrOptions::archive(&[]);
        assert!(options.min_date.is_none());
        assert!(options.max_date.is_none());
        assert!(options.enable.is_empty());
    }

    #[test]
    fn test_options_serialize_to_widget_shape() {
        let options = FlatpickrOptions::archive(&["2025-06-12"]);
        let value = serde_json::to_value(&options).unwrap();

        assert_eq!(value["locale"]["firstDayOfWeek"], 1);
        assert_eq!(value["mode"], "multiple");
        assert_eq!(value["minDate"], "2025-06-12");
        assert_eq!(value["maxDate"], "2025-06-12");
    }
}
