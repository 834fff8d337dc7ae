//! Site header
//!
//! Scroll-driven `fixed` class, the hamburger menu (which locks page scroll
//! while open, like the dialogs), and the expanding search box with its
//! outside-click and Escape dismissal.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::modal::{set_document_lock, use_modal_state, ModalRequest};

/// Scroll depth past which the header pins.
const FIXED_THRESHOLD: f64 = 10.0;

fn initial_fixed() -> bool {
    // The page may load already scrolled (anchor links, reload).
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(|body| body.get_bounding_client_rect().top() != 0.0)
        .unwrap_or(false)
}

#[component]
pub fn Header() -> impl IntoView {
    let modal = use_modal_state();

    let is_fixed = RwSignal::new(initial_fixed());
    let menu_open = RwSignal::new(false);
    let search_active = RwSignal::new(false);
    let search_open = RwSignal::new(false);

    let search_form = NodeRef::<html::Form>::new();
    let search_input = NodeRef::<html::Input>::new();

    let reset_search = move || {
        search_active.set(false);
        search_open.set(false);
        if let Some(form) = search_form.get_untracked() {
            form.reset();
        }
    };

    // Pin the header once the page scrolls past the threshold.
    Effect::new(move |_| {
        let handle_scroll = Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window() {
                let offset = window.scroll_y().unwrap_or(0.0);
                is_fixed.set(offset > FIXED_THRESHOLD);
            }
        }) as Box<dyn FnMut()>);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("scroll", handle_scroll.as_ref().unchecked_ref());
        }
        handle_scroll.forget();
    });

    // Close the search box from anywhere outside it; Escape collapses it.
    Effect::new(move |_| {
        let handle_click = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let inside = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(|el| {
                    el.closest(".search-button").ok().flatten().is_some()
                        || el.closest(".search-form").ok().flatten().is_some()
                })
                .unwrap_or(false);
            if !inside && search_active.get_untracked() {
                reset_search();
            }
        }) as Box<dyn FnMut(_)>);

        let handle_keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" {
                search_open.set(false);
                search_active.set(false);
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("click", handle_click.as_ref().unchecked_ref());
            let _ = document.add_event_listener_with_callback(
                "keydown",
                handle_keydown.as_ref().unchecked_ref(),
            );
        }
        handle_click.forget();
        handle_keydown.forget();
    });

    let open_menu = move |_| {
        menu_open.set(true);
        set_document_lock(true);
    };

    let close_menu = move |_| {
        if menu_open.get_untracked() {
            menu_open.set(false);
            set_document_lock(false);
        }
    };

    let toggle_search = move |_| {
        let active = !search_active.get_untracked();
        search_active.set(active);
        if active {
            search_open.set(true);
            if let Some(input) = search_input.get_untracked() {
                let _ = input.focus();
            }
        } else {
            search_open.set(false);
            if let Some(form) = search_form.get_untracked() {
                form.reset();
            }
        }
    };

    let open_catalog = move |e: ev::MouseEvent| {
        e.prevent_default();
        modal.open(ModalRequest::Catalog);
    };

    view! {
        <header class="header" class:fixed=move || is_fixed.get()>
            <div class="header__inner">
                <a class="header__logo" href="/">"Bookhouse"</a>

                <div class="header__nav--wrapper" class:isActive=move || menu_open.get()>
                    <nav class="header__nav">
                        <ul>
                            <li>
                                <a
                                    href="#catalog-modal"
                                    class="popup-link"
                                    data-type="catalog"
                                    on:click=open_catalog
                                >
                                    "Catalog"
                                </a>
                            </li>
                            <li><a href="#about">"About"</a></li>
                            <li><a href="#news">"News"</a></li>
                            <li><a href="#reviews">"Reviews"</a></li>
                            <li><a href="#faq">"FAQ"</a></li>
                        </ul>
                    </nav>
                    <button type="button" class="close-menu-btn" aria-label="Close menu" on:click=close_menu>
                        "×"
                    </button>
                </div>

                <button type="button" class="menu-btn" aria-label="Open menu" on:click=open_menu>
                    <span></span>
                </button>

                <button type="button" class="search-button" aria-label="Search" on:click=toggle_search>
                    "⌕"
                </button>
                <form
                    class="search-form"
                    node_ref=search_form
                    class:isActive=move || search_active.get()
                    class:open=move || search_open.get()
                    on:submit=move |e| e.prevent_default()
                >
                    <input
                        node_ref=search_input
                        type="search"
                        name="q"
                        placeholder="Search the catalog"
                    />
                </form>
            </div>
        </header>
    }
}
