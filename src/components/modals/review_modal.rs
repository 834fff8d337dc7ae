//! Review dialog
//!
//! No network: shows the review content the triggering slide passed along
//! with the open request. Closing clears it.

use leptos::prelude::*;

use super::ModalShell;
use crate::services::modal::{use_modal_state, ModalRequest, ModalSurface};

#[component]
pub fn ReviewModal() -> impl IntoView {
    let modal = use_modal_state();

    let content = Memo::new(move |_| {
        modal.active.with(|active| match active {
            Some(ModalRequest::Review(content)) => Some(content.clone()),
            _ => None,
        })
    });

    view! {
        <ModalShell surface=ModalSurface::Review class="review-modal">
            {move || {
                content.get().map(|review| {
                    view! {
                        <div class="reviews__slide--wrapper">
                            <blockquote class="reviews__slide--text">{review.text.clone()}</blockquote>
                            <cite class="reviews__slide--reviewer">{review.reviewer.clone()}</cite>
                        </div>
                    }
                })
            }}
        </ModalShell>
    }
}
