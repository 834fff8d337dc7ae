//! Landing-page catalog strip
//!
//! A slider of book cards driven by the page-level catalog load. The full
//! browsing experience lives in the catalog dialog; this strip is the
//! teaser.

use leptos::prelude::*;

use crate::bindings::swiper::SwiperOptions;
use crate::components::book_card::BookCard;
use crate::components::carousel::Carousel;
use crate::services::catalog::use_catalog_store;

#[component]
pub fn CatalogStrip() -> impl IntoView {
    let store = use_catalog_store();

    view! {
        <section class="catalog" id="catalog">
            <h2 class="catalog__title">"New & notable"</h2>
            {move || {
                store.records.get().map(|records| {
                    view! {
                        <Carousel options=SwiperOptions::catalog_strip() class="catalog__slider">
                            {records
                                .into_iter()
                                .map(|record| {
                                    view! {
                                        <div class="swiper-slide">
                                            <div class="catalog__card">
                                                <BookCard record=record />
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </Carousel>
                    }
                })
            }}
        </section>
    }
}
