//! Slider capability
//!
//! Extern interface to the page's Swiper bundle plus typed option structs
//! for the three slider configurations the site uses. Only construction,
//! update and destruction are exposed; animation and layout stay inside the
//! library.

use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A mounted slider instance.
    pub type Swiper;

    #[wasm_bindgen(constructor)]
    pub fn new(container: &web_sys::Element, options: &JsValue) -> Swiper;

    /// Recalculate layout after the slide set changes.
    #[wasm_bindgen(method)]
    pub fn update(this: &Swiper);

    #[wasm_bindgen(method, js_name = slideNext)]
    pub fn slide_next(this: &Swiper);

    #[wasm_bindgen(method, js_name = slidePrev)]
    pub fn slide_prev(this: &Swiper);

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Swiper, delete_instance: bool, clean_styles: bool);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub rows: u32,
    pub fill: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
    pub slides_per_view: f64,
    pub space_between: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationOptions {
    pub next_el: &'static str,
    pub prev_el: &'static str,
}

/// The subset of slider configuration the site drives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperOptions {
    #[serde(rename = "loop")]
    pub loop_slides: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationOptions>,
    /// Viewport-width keyed configuration tiers.
    pub breakpoints: BTreeMap<u32, BreakpointOptions>,
}

impl SwiperOptions {
    fn grid_tier(rows: u32, slides_per_view: f64, space_between: f64) -> BreakpointOptions {
        BreakpointOptions {
            grid: Some(GridOptions { rows, fill: "row" }),
            slides_per_view,
            space_between,
        }
    }

    fn tier(slides_per_view: f64, space_between: f64) -> BreakpointOptions {
        BreakpointOptions { grid: None, slides_per_view, space_between }
    }

    /// The landing-page catalog strip: a row grid that reflows from a
    /// single scrolling row on phones to a 2x5 wall on wide screens.
    pub fn catalog_strip() -> Self {
        Self {
            loop_slides: false,
            navigation: None,
            breakpoints: BTreeMap::from([
                (320, Self::grid_tier(1, 1.4, 20.0)),
                (480, Self::grid_tier(1, 2.6, 20.0)),
                (768, Self::grid_tier(4, 3.0, 40.0)),
                (1024, Self::grid_tier(3, 4.0, 40.0)),
                (1200, Self::grid_tier(2, 5.0, 40.0)),
            ]),
        }
    }

    /// The news slider, with prev/next controls.
    pub fn news() -> Self {
        Self {
            loop_slides: false,
            navigation: Some(NavigationOptions {
                next_el: ".news__slider--next",
                prev_el: ".news__slider--prev",
            }),
            breakpoints: BTreeMap::from([
                (320, Self::tier(1.3, 20.0)),
                (640, Self::tier(2.2, 30.0)),
                (1024, Self::tier(3.0, 50.0)),
                (1200, Self::tier(3.0, 110.0)),
            ]),
        }
    }

    /// The reviews slider.
    pub fn reviews() -> Self {
        Self {
            loop_slides: false,
            navigation: None,
            breakpoints: BTreeMap::from([
                (320, Self::tier(1.0, 20.0)),
                (640, Self::tier(2.0, 20.0)),
                (768, Self::tier(1.0, 20.0)),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_serialize_to_widget_shape() {
        let value = serde_json::to_value(SwiperOptions::news()).unwrap();

        assert_eq!(value["loop"], false);
        assert_eq!(value["navigation"]["nextEl"], ".news__slider--next");
        assert_eq!(value["breakpoints"]["320"]["slidesPerView"], 1.3);
        assert_eq!(value["breakpoints"]["1200"]["spaceBetween"], 110.0);
        // No grid on a plain tier
        assert!(value["breakpoints"]["320"].get("grid").is_none());
    }

    #[test]
    fn test_catalog_strip_grid_tiers() {
        let value = serde_json::to_value(SwiperOptions::catalog_strip()).unwrap();

        assert_eq!(value["breakpoints"]["768"]["grid"]["rows"], 4);
        assert_eq!(value["breakpoints"]["768"]["grid"]["fill"], "row");
        assert_eq!(value["breakpoints"]["1200"]["grid"]["rows"], 2);
        assert!(value.get("navigation").is_none());
    }
}
