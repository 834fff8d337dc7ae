//! Book card
//!
//! The shared card body used by the landing-page strip and the catalog
//! dialog. The card link opens the book dialog; its image area feeds the
//! hover tooltip.

use leptos::ev;
use leptos::prelude::*;

use crate::catalog::BookRecord;
use crate::components::tooltip::use_tooltip_state;
use crate::config;
use crate::services::modal::{use_modal_state, ModalRequest};

#[component]
pub fn BookCard(record: BookRecord) -> impl IntoView {
    let modal = use_modal_state();
    let tooltip = use_tooltip_state();
    let id = record.id;

    let open_book = move |e: ev::MouseEvent| {
        e.prevent_default();
        modal.open(ModalRequest::Book { id });
    };

    let tooltip_enter = move |e: ev::MouseEvent| {
        tooltip.on_enter(id, e.client_x() as f64, e.client_y() as f64);
    };
    let tooltip_move = move |e: ev::MouseEvent| {
        tooltip.on_move(id, e.client_x() as f64, e.client_y() as f64);
    };
    let tooltip_leave = move |_| tooltip.on_leave();

    view! {
        <article>
            <a
                href="#book-modal"
                class="catalog__card--link popup-link"
                data-type="book"
                data-id=id.to_string()
                on:click=open_book
                on:mouseenter=tooltip_enter
                on:mousemove=tooltip_move
                on:mouseleave=tooltip_leave
            >
                <div class="catalog__card--lang">{record.lang.clone()}</div>
                <div class="catalog__card--image">
                    <img
                        src=config::asset_url(&record.image)
                        width="197"
                        height="297"
                        loading="lazy"
                        alt=record.title.clone()
                    />
                </div>
                <div class="catalog__card--excerpt">{record.series.clone()}</div>
                <div class="catalog__card--content">
                    <h3 class="catalog__card--title">{record.title.clone()}</h3>
                    <div class="catalog__card--author">{format!("by {}", record.author_line())}</div>
                </div>
            </a>
        </article>
    }
}
