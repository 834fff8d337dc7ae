//! Reviews section
//!
//! A slider of reader reviews. "Read in full" opens the review dialog with
//! the same content the slide already shows; no network is involved.

use leptos::ev;
use leptos::prelude::*;

use crate::bindings::swiper::SwiperOptions;
use crate::components::carousel::Carousel;
use crate::content;
use crate::services::modal::{use_modal_state, ModalRequest, ReviewContent};

#[component]
pub fn ReviewsSection() -> impl IntoView {
    let modal = use_modal_state();

    view! {
        <section class="reviews" id="reviews">
            <h2 class="reviews__title">"Readers say"</h2>
            <Carousel options=SwiperOptions::reviews() class="reviews__slider">
                {content::reviews()
                    .iter()
                    .map(|entry| {
                        let content = ReviewContent {
                            reviewer: entry.reviewer.to_string(),
                            text: entry.text.to_string(),
                        };
                        let open_review = move |e: ev::MouseEvent| {
                            e.prevent_default();
                            modal.open(ModalRequest::Review(content.clone()));
                        };
                        view! {
                            <div class="swiper-slide">
                                <div class="reviews__slide">
                                    <div class="reviews__slide--wrapper">
                                        <blockquote class="reviews__slide--text">{entry.text}</blockquote>
                                        <cite class="reviews__slide--reviewer">{entry.reviewer}</cite>
                                    </div>
                                    <a
                                        href="#review-modal"
                                        class="reviews__slide--more popup-link"
                                        data-type="review"
                                        on:click=open_review
                                    >
                                        "Read in full"
                                    </a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </Carousel>
        </section>
    }
}
