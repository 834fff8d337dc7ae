//! Modal Controller Tests
//!
//! Exercises the one-open-at-a-time invariant, the document scroll lock,
//! Escape dismissal and the epoch race guard against a real document.

use bookhouse_frontend::services::modal::{
    install_document_lock, install_escape_handler, ModalRequest, ModalState, ModalSurface,
    ReviewContent,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document_is_locked() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains("is-lock"))
        .unwrap_or(false)
}

fn review() -> ModalRequest {
    ModalRequest::Review(ReviewContent {
        reviewer: "R".to_string(),
        text: "T".to_string(),
    })
}

// ============================================================================
// Open/close state machine
// ============================================================================

#[wasm_bindgen_test]
fn test_single_surface_open_at_a_time() {
    let state = ModalState::new();
    assert!(!state.any_open());

    state.open(ModalRequest::Catalog);
    assert!(state.is_open(ModalSurface::Catalog));

    // Opening another surface replaces the first.
    state.open(ModalRequest::Book { id: 3 });
    assert!(state.is_open(ModalSurface::Book));
    assert!(!state.is_open(ModalSurface::Catalog));

    state.close();
    assert!(!state.any_open());
}

#[wasm_bindgen_test]
fn test_request_context_travels_with_open() {
    let state = ModalState::new();
    state.open(ModalRequest::News { id: 7 });

    let id = state.active.with_untracked(|active| match active {
        Some(ModalRequest::News { id }) => Some(*id),
        _ => None,
    });
    assert_eq!(id, Some(7));

    state.open(review());
    assert!(state.is_open(ModalSurface::Review));
}

// ============================================================================
// Epoch race guard
// ============================================================================

#[wasm_bindgen_test]
fn test_epoch_moves_on_every_transition() {
    let state = ModalState::new();

    let first = state.current_epoch();
    state.open(ModalRequest::Catalog);
    let second = state.current_epoch();
    assert_ne!(first, second);
    assert!(state.is_current(second));
    // A fetch spawned before the open would see its snapshot go stale.
    assert!(!state.is_current(first));

    state.close();
    assert!(!state.is_current(second));
}

#[wasm_bindgen_test]
fn test_reopening_same_surface_stales_prior_fetch() {
    let state = ModalState::new();

    state.open(ModalRequest::Book { id: 1 });
    let stale = state.current_epoch();

    state.open(ModalRequest::Book { id: 2 });
    assert!(!state.is_current(stale));
    assert!(state.is_open(ModalSurface::Book));
}

// ============================================================================
// Document lock
// ============================================================================

#[wasm_bindgen_test]
async fn test_document_lock_follows_open_state() {
    let state = ModalState::new();
    leptos::mount::mount_to_body(move || {
        install_document_lock(state);
        view! { <div id="lock-probe"></div> }
    });

    TimeoutFuture::new(10).await;
    assert!(!document_is_locked());

    state.open(ModalRequest::Catalog);
    TimeoutFuture::new(10).await;
    assert!(document_is_locked());

    // Switching surfaces keeps the lock held.
    state.open(ModalRequest::Book { id: 1 });
    TimeoutFuture::new(10).await;
    assert!(document_is_locked());

    state.close();
    TimeoutFuture::new(10).await;
    assert!(!document_is_locked());
}

// ============================================================================
// Escape dismissal
// ============================================================================

#[wasm_bindgen_test]
async fn test_escape_closes_the_open_surface() {
    let state = ModalState::new();
    leptos::mount::mount_to_body(move || {
        install_escape_handler(state);
        view! { <div id="escape-probe"></div> }
    });
    TimeoutFuture::new(10).await;

    state.open(ModalRequest::Catalog);
    assert!(state.any_open());

    let window = web_sys::window().unwrap();
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    let event =
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    window.dispatch_event(&event).unwrap();

    TimeoutFuture::new(10).await;
    assert!(!state.any_open());
}
