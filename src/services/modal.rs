//! Modal Controller
//!
//! One service owns the open/closed lifecycle of every dialog surface. At
//! most one surface is open at a time: opening a new one replaces the
//! current request, and the displaced surface resets its own content when it
//! sees itself deactivate. The document element carries the `is-lock` class
//! exactly while any surface is open.
//!
//! Every open bumps an epoch. Hydration tasks capture the epoch at spawn and
//! drop their result if it has moved on, so a late-settling fetch can never
//! clobber the state of a more recent open.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Review content carried along with a review open request: the same text
/// already present in the page next to the triggering control.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewContent {
    pub reviewer: String,
    pub text: String,
}

/// The four dialog surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalSurface {
    Catalog,
    Book,
    News,
    Review,
}

impl ModalSurface {
    /// The surface's element id in the page.
    pub fn element_id(&self) -> &'static str {
        match self {
            ModalSurface::Catalog => "catalog-modal",
            ModalSurface::Book => "book-modal",
            ModalSurface::News => "news-modal",
            ModalSurface::Review => "review-modal",
        }
    }
}

/// An open request: the surface plus whatever context its hydration needs.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalRequest {
    Catalog,
    Book { id: u32 },
    News { id: u32 },
    Review(ReviewContent),
}

impl ModalRequest {
    pub fn surface(&self) -> ModalSurface {
        match self {
            ModalRequest::Catalog => ModalSurface::Catalog,
            ModalRequest::Book { .. } => ModalSurface::Book,
            ModalRequest::News { .. } => ModalSurface::News,
            ModalRequest::Review(_) => ModalSurface::Review,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ModalState {
    pub active: RwSignal<Option<ModalRequest>>,
    pub epoch: RwSignal<u64>,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            epoch: RwSignal::new(0),
        }
    }

    /// Open a surface, closing any other currently-open one.
    pub fn open(&self, request: ModalRequest) {
        self.epoch.update(|e| *e += 1);
        self.active.set(Some(request));
    }

    /// Close whichever surface is open.
    pub fn close(&self) {
        self.epoch.update(|e| *e += 1);
        self.active.set(None);
    }

    /// Reactive: whether this surface is the open one.
    pub fn is_open(&self, surface: ModalSurface) -> bool {
        self.active.with(|active| active.as_ref().map(ModalRequest::surface) == Some(surface))
    }

    /// Reactive: whether any surface is open.
    pub fn any_open(&self) -> bool {
        self.active.with(Option::is_some)
    }

    /// Epoch snapshot for hydration tasks; compare with `is_current` after
    /// the fetch settles.
    pub fn current_epoch(&self) -> u64 {
        self.epoch.get_untracked()
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get_untracked() == epoch
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_modal_state() {
    provide_context(ModalState::new());
}

pub fn use_modal_state() -> ModalState {
    expect_context::<ModalState>()
}

/// Toggle the document-level `is-lock` class (page scroll lock).
pub fn set_document_lock(locked: bool) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let class_list = root.class_list();
            let _ = if locked {
                class_list.add_1("is-lock")
            } else {
                class_list.remove_1("is-lock")
            };
        }
    }
}

/// Keep the document-level lock class in sync with the open state: set on
/// any open, cleared only when no surface remains open.
pub fn install_document_lock(state: ModalState) {
    Effect::new(move |_| {
        set_document_lock(state.any_open());
    });
}

/// Escape dismisses whichever surface is currently open.
pub fn install_escape_handler(state: ModalState) {
    Effect::new(move |_| {
        let handle_keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" && state.active.get_untracked().is_some() {
                state.close();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(
                "keydown",
                handle_keydown.as_ref().unchecked_ref(),
            );
        }

        // Keep the closure alive for the lifetime of the page
        handle_keydown.forget();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_maps_to_its_surface() {
        assert_eq!(ModalRequest::Catalog.surface(), ModalSurface::Catalog);
        assert_eq!(ModalRequest::Book { id: 1 }.surface(), ModalSurface::Book);
        assert_eq!(ModalRequest::News { id: 2 }.surface(), ModalSurface::News);
        let review = ModalRequest::Review(ReviewContent {
            reviewer: "R".into(),
            text: "T".into(),
        });
        assert_eq!(review.surface(), ModalSurface::Review);
    }

    #[test]
    fn test_surface_element_ids() {
        assert_eq!(ModalSurface::Catalog.element_id(), "catalog-modal");
        assert_eq!(ModalSurface::Review.element_id(), "review-modal");
    }
}
