//! Book detail dialog
//!
//! Hydrates from a fresh catalog fetch each time it opens; a missing id is
//! an error state, not an empty dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ModalShell;
use crate::api::fetch_book;
use crate::catalog::{split_paragraphs, BookRecord};
use crate::config;
use crate::services::catalog::LoadState;
use crate::services::modal::{use_modal_state, ModalRequest, ModalSurface};

#[component]
pub fn BookModal() -> impl IntoView {
    let modal = use_modal_state();
    let state: RwSignal<LoadState<BookRecord>> = RwSignal::new(LoadState::Idle);

    let requested_id = Memo::new(move |_| {
        modal.active.with(|active| match active {
            Some(ModalRequest::Book { id }) => Some(*id),
            _ => None,
        })
    });

    Effect::new(move |_| match requested_id.get() {
        Some(id) => {
            let epoch = modal.current_epoch();
            state.set(LoadState::Loading);
            spawn_local(async move {
                let result = fetch_book(id).await;
                if !modal.is_current(epoch) {
                    return;
                }
                match result {
                    Ok(record) => state.set(LoadState::Ready(record)),
                    Err(e) => {
                        log::warn!("book lookup failed: {e}");
                        state.set(LoadState::Failed(e));
                    }
                }
            });
        }
        None => state.set(LoadState::Idle),
    });

    view! {
        <ModalShell surface=ModalSurface::Book class="book-modal">
            {move || match state.get() {
                LoadState::Idle => view! {}.into_any(),
                LoadState::Loading => view! { <div class="preloader"></div> }.into_any(),
                LoadState::Failed(e) => {
                    view! { <div class="modal__error">{e.to_string()}</div> }.into_any()
                }
                LoadState::Ready(book) => {
                    view! {
                        <article class="book">
                            <div class="book__image">
                                <img src=config::asset_url(&book.image) alt=book.title.clone() />
                            </div>
                            <div class="book__body">
                                <h3 class="book__title">{book.title.clone()}</h3>
                                <div class="book__author">
                                    {format!("by {}", book.author_line())}
                                </div>
                                <div class="book__description">
                                    {split_paragraphs(&book.description)
                                        .into_iter()
                                        .map(|paragraph| view! { <p>{paragraph}</p> })
                                        .collect_view()}
                                </div>
                            </div>
                        </article>
                    }
                        .into_any()
                }
            }}
        </ModalShell>
    }
}
