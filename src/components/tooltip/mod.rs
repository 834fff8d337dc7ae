//! Tooltip Controller
//!
//! Pointer-driven excerpt preview for catalog cards. Entering a trigger
//! starts a debounce timer; moving more than a couple of pixels before it
//! fires restarts it; leaving cancels it and hides the popup immediately.
//! On fire, the hovered record id is resolved against the loaded catalog
//! data, the content is filled in and the popup is positioned next to the
//! cursor (see [`placement`]).
//!
//! The whole controller is inert on devices without a precise hover
//! pointer.

pub mod placement;

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::services::catalog::{use_catalog_store, CatalogStore};

/// Debounce before the popup shows.
const SHOW_DELAY_MS: u32 = 300;
/// Pointer travel that restarts a pending timer.
const MOVE_THRESHOLD_PX: f64 = 2.0;

const SIDE_CLASSES: [&str; 4] = ["top", "right", "bottom", "left"];

#[derive(Clone, Copy)]
pub struct TooltipState {
    element: NodeRef<html::Div>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    last_point: StoredValue<(f64, f64)>,
    store: CatalogStore,
    enabled: bool,
}

impl TooltipState {
    fn new(store: CatalogStore) -> Self {
        Self {
            element: NodeRef::new(),
            timer: StoredValue::new_local(None),
            last_point: StoredValue::new((0.0, 0.0)),
            store,
            enabled: has_hover_pointer(),
        }
    }

    /// Pointer entered a trigger: remember the cursor and arm the timer.
    pub fn on_enter(&self, record_id: u32, x: f64, y: f64) {
        if !self.enabled {
            return;
        }
        self.last_point.set_value((x, y));
        self.schedule(record_id, x, y);
    }

    /// Pointer moved over the trigger: restart a pending timer once the
    /// cursor has travelled past the threshold.
    pub fn on_move(&self, record_id: u32, x: f64, y: f64) {
        if !self.enabled {
            return;
        }
        let (last_x, last_y) = self.last_point.get_value();
        let distance = ((x - last_x).powi(2) + (y - last_y).powi(2)).sqrt();
        if distance > MOVE_THRESHOLD_PX {
            self.last_point.set_value((x, y));
            if self.timer.with_value(Option::is_some) {
                self.schedule(record_id, x, y);
            }
        }
    }

    /// Pointer left the trigger: cancel any pending timer, hide immediately.
    pub fn on_leave(&self) {
        self.timer.set_value(None);
        self.hide();
    }

    fn schedule(&self, record_id: u32, x: f64, y: f64) {
        let state = *self;
        let timer = Timeout::new(SHOW_DELAY_MS, move || {
            state.timer.set_value(None);
            state.show(record_id, x, y);
        });
        // Replacing the slot drops (and thereby cancels) the previous timer.
        self.timer.set_value(Some(timer));
    }

    fn show(&self, record_id: u32, x: f64, y: f64) {
        let Some(element) = self.element.get_untracked() else {
            return;
        };

        let excerpt = self
            .store
            .record(record_id)
            .and_then(|record| record.excerpt)
            .unwrap_or_default();
        if let Ok(Some(content)) = element.query_selector(".tooltip__content") {
            content.set_text_content(Some(&excerpt));
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let viewport_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        // Activate invisibly to measure, then position and reveal.
        let style = element.style();
        let _ = style.set_property("visibility", "hidden");
        let _ = element.class_list().add_1("is-active");
        let rect = element.get_bounding_client_rect();

        let placed = placement::compute(x, y, rect.width(), rect.height(), viewport_w, viewport_h);

        for class in SIDE_CLASSES {
            let _ = element.class_list().remove_1(class);
        }
        let _ = element.class_list().add_1(placed.vertical.as_class());
        let _ = element.class_list().add_1(placed.horizontal.as_class());
        let _ = style.set_property("left", &format!("{}px", placed.left));
        let _ = style.set_property("top", &format!("{}px", placed.top));
        let _ = style.remove_property("visibility");
    }

    fn hide(&self) {
        let Some(element) = self.element.get_untracked() else {
            return;
        };
        let _ = element.class_list().remove_1("is-active");
        for class in SIDE_CLASSES {
            let _ = element.class_list().remove_1(class);
        }
        let style = element.style();
        let _ = style.remove_property("left");
        let _ = style.remove_property("top");
    }
}

fn has_hover_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(hover: hover) and (pointer: fine)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn provide_tooltip_state() {
    let store = use_catalog_store();
    provide_context(TooltipState::new(store));
}

pub fn use_tooltip_state() -> TooltipState {
    expect_context::<TooltipState>()
}

/// The single popup element the controller drives.
#[component]
pub fn BookTooltip() -> impl IntoView {
    let state = use_tooltip_state();

    view! {
        <div class="tooltip" node_ref=state.element>
            <div class="tooltip__content"></div>
        </div>
    }
}
