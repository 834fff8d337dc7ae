use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::fetch_catalog;
use crate::components::about::AboutBooks;
use crate::components::catalog_strip::CatalogStrip;
use crate::components::faq::Faq;
use crate::components::header::Header;
use crate::components::modals::{BookModal, CatalogModal, NewsModal, ReviewModal};
use crate::components::news::NewsSection;
use crate::components::reviews::ReviewsSection;
use crate::components::tooltip::{provide_tooltip_state, BookTooltip};
use crate::services::catalog::{provide_catalog_store, use_catalog_store};
use crate::services::modal::{
    install_document_lock, install_escape_handler, provide_modal_state, use_modal_state,
};

#[component]
pub fn App() -> impl IntoView {
    // Global services
    provide_modal_state();
    provide_catalog_store();
    provide_tooltip_state();

    let modal = use_modal_state();
    install_document_lock(modal);
    install_escape_handler(modal);

    // One page-level catalog load backs the strip and the tooltip. The
    // catalog dialog fetches its own copy per session.
    let store = use_catalog_store();
    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_catalog().await {
                Ok(records) => store.records.set(Some(records)),
                Err(e) => log::warn!("page catalog load failed: {e}"),
            }
        });
    });

    view! {
        <Header />

        <main>
            <AboutBooks />
            <CatalogStrip />
            <NewsSection />
            <ReviewsSection />
            <Faq />
        </main>

        <CatalogModal />
        <BookModal />
        <NewsModal />
        <ReviewModal />

        <BookTooltip />
    }
}
