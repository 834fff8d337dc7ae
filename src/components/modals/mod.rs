//! Dialog surfaces
//!
//! One shell provides the shared chrome (backdrop, close control, content
//! region); each surface owns its hydration. A surface resets its content
//! when it stops being the open one, so reuse always means a fresh fetch.

mod book_modal;
mod catalog_modal;
mod news_modal;
mod review_modal;

pub use book_modal::BookModal;
pub use catalog_modal::CatalogModal;
pub use news_modal::NewsModal;
pub use review_modal::ReviewModal;

use leptos::ev;
use leptos::prelude::*;

use crate::services::modal::{use_modal_state, ModalSurface};

/// Shared dialog chrome. Clicking the backdrop or the close control
/// dismisses; clicks inside the dialog don't bubble out to the backdrop.
#[component]
pub fn ModalShell(
    surface: ModalSurface,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let modal = use_modal_state();

    let is_active = Memo::new(move |_| modal.is_open(surface));
    let on_backdrop = move |_| modal.close();
    let on_close = move |e: ev::MouseEvent| {
        e.prevent_default();
        modal.close();
    };

    view! {
        <div
            id=surface.element_id()
            class=format!("modal {class}")
            class:is-active=move || is_active.get()
            on:click=on_backdrop
        >
            <div class="modal__dialog" on:click=move |e| e.stop_propagation()>
                <button type="button" class="close-modal-btn" aria-label="Close" on:click=on_close>
                    "×"
                </button>
                <div class="modal__content">{children()}</div>
            </div>
        </div>
    }
}
