//! News section
//!
//! A slider of news cards plus the archive calendar. Each card opens the
//! news dialog, which combines the card's in-page date and image with the
//! record fetched from the posts API.

use leptos::ev;
use leptos::prelude::*;

use crate::bindings::swiper::SwiperOptions;
use crate::components::calendar::ArchiveCalendar;
use crate::components::carousel::Carousel;
use crate::config;
use crate::content;
use crate::services::modal::{use_modal_state, ModalRequest};
use crate::utils::format_news_date;

#[component]
pub fn NewsSection() -> impl IntoView {
    let modal = use_modal_state();
    let loading = RwSignal::new(false);

    view! {
        <section class="news" id="news">
            <div class="news__head">
                <h2 class="news__title">"News"</h2>
                <div class="news__archive">
                    <ArchiveCalendar loading=loading />
                </div>
                <div class="news__slider--controls">
                    <button type="button" class="news__slider--prev" aria-label="Previous">"‹"</button>
                    <button type="button" class="news__slider--next" aria-label="Next">"›"</button>
                </div>
            </div>

            <div class="preloader" class:hidden=move || !loading.get()></div>

            <Carousel options=SwiperOptions::news() class="news__slider">
                {content::news_items()
                    .iter()
                    .map(|item| {
                        let id = item.id;
                        let open_news = move |e: ev::MouseEvent| {
                            e.prevent_default();
                            modal.open(ModalRequest::News { id });
                        };
                        view! {
                            <div class="swiper-slide">
                                <article class="news__card">
                                    <a
                                        href="#news-modal"
                                        class="news__card--link popup-link"
                                        data-type="news"
                                        data-id=id.to_string()
                                        on:click=open_news
                                    >
                                        <div class="news__card--image">
                                            <img src=config::asset_url(item.image) loading="lazy" alt="" />
                                        </div>
                                        <time class="news__card--date" datetime=item.date>
                                            {format_news_date(item.date)}
                                        </time>
                                    </a>
                                </article>
                            </div>
                        }
                    })
                    .collect_view()}
            </Carousel>
        </section>
    }
}
