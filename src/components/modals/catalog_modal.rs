//! Catalog dialog
//!
//! The full browsing surface: fetches the catalog when opened, derives the
//! facet index, renders the card list and the filter dropdowns, and wires
//! the filter engine. A fetch failure renders the error region instead of a
//! partially built list; closing discards the whole session, so the next
//! open fetches afresh.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ModalShell;
use crate::api::fetch_catalog;
use crate::catalog::{FacetDimension, FacetIndex, FilterSelection};
use crate::components::book_card::BookCard;
use crate::services::catalog::{CatalogSession, LoadState};
use crate::services::modal::{use_modal_state, ModalSurface};

#[component]
pub fn CatalogModal() -> impl IntoView {
    let modal = use_modal_state();
    let session: RwSignal<LoadState<CatalogSession>> = RwSignal::new(LoadState::Idle);

    let shown = Memo::new(move |_| modal.is_open(ModalSurface::Catalog));

    Effect::new(move |_| {
        if shown.get() {
            let epoch = modal.current_epoch();
            session.set(LoadState::Loading);
            spawn_local(async move {
                let result = fetch_catalog().await;
                if !modal.is_current(epoch) {
                    // A newer open (or a close) superseded this fetch.
                    return;
                }
                match result {
                    Ok(records) => session.set(LoadState::Ready(CatalogSession::new(records))),
                    Err(e) => {
                        log::warn!("catalog fetch failed: {e}");
                        session.set(LoadState::Failed(e));
                    }
                }
            });
        } else {
            session.set(LoadState::Idle);
        }
    });

    view! {
        <ModalShell surface=ModalSurface::Catalog class="catalog-modal">
            {move || match session.get() {
                LoadState::Idle => view! {}.into_any(),
                LoadState::Loading => view! { <div class="preloader"></div> }.into_any(),
                LoadState::Failed(e) => {
                    view! { <div class="modal__error">{e.to_string()}</div> }.into_any()
                }
                LoadState::Ready(session) => view! { <CatalogBody session=session /> }.into_any(),
            }}
        </ModalShell>
    }
}

#[component]
fn CatalogBody(session: CatalogSession) -> impl IntoView {
    let selection = session.selection;

    let visible_count = Memo::new({
        let session = session.clone();
        move |_| session.visible_count()
    });

    let cards = session.records.iter().cloned().zip(session.cards.iter().cloned());

    view! {
        <div class="catalog">
            <CatalogFilters facets=session.facets.clone() selection=selection />

            <div class="catalog__no-results" class:hidden=move || visible_count.get() > 0>
                "No books found matching your filters"
            </div>

            <ul class="catalog__list">
                {cards
                    .map(|(record, card)| {
                        let lang = card.lang.clone();
                        let series = card.series.clone();
                        let author_key = card.author_key.clone();
                        let hidden = move || !selection.with(|s| s.matches(&card));
                        view! {
                            <li
                                class="catalog__card"
                                class:hidden=hidden
                                data-lang=lang
                                data-series=series
                                data-author-ids=author_key
                            >
                                <BookCard record=record />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn CatalogFilters(facets: FacetIndex, selection: RwSignal<FilterSelection>) -> impl IntoView {
    let lang_entries: Vec<(String, String, usize)> = facets
        .lang_counts
        .iter()
        .map(|(value, count)| (value.clone(), value.clone(), *count))
        .collect();
    let series_entries: Vec<(String, String, usize)> = facets
        .series_counts
        .iter()
        .map(|(value, count)| (value.clone(), value.clone(), *count))
        .collect();
    let author_entries: Vec<(String, String, usize)> = facets
        .author_combinations
        .iter()
        .map(|(key, facet)| (key.clone(), facet.display_names.clone(), facet.count))
        .collect();

    view! {
        <div class="catalog-filter">
            <button
                type="button"
                class="catalog-filter__label catalog-filter__all"
                data-filter-type="all"
                class:is-active=move || selection.with(|s| s.is_empty())
                on:click=move |_| selection.update(FilterSelection::clear)
            >
                "All"
            </button>
            <FilterGroup dimension=FacetDimension::Lang entries=lang_entries selection=selection />
            <FilterGroup dimension=FacetDimension::Series entries=series_entries selection=selection />
            <FilterGroup dimension=FacetDimension::Author entries=author_entries selection=selection />
        </div>
    }
}

/// One facet dropdown: a checkbox per value with its count, and an
/// `is-active` marker while the dimension constrains visibility.
#[component]
fn FilterGroup(
    dimension: FacetDimension,
    entries: Vec<(String, String, usize)>,
    selection: RwSignal<FilterSelection>,
) -> impl IntoView {
    view! {
        <div
            class="catalog-filter__label"
            data-filter-type=dimension.as_str()
            class:is-active=move || selection.with(|s| s.has_selection(dimension))
        >
            <span class="catalog-filter__label--title">{dimension.label()}</span>
            <div class="catalog-filter__dropdown">
                {entries
                    .into_iter()
                    .map(|(value, label, count)| {
                        let checked = {
                            let value = value.clone();
                            move || selection.with(|s| s.contains(dimension, &value))
                        };
                        let on_change = {
                            let value = value.clone();
                            move |e| {
                                let is_now_selected = event_target_checked(&e);
                                selection.update(|s| s.toggle(dimension, &value, is_now_selected));
                            }
                        };
                        view! {
                            <label class="catalog-filter__item">
                                <span class="catalog-filter__item--row">
                                    <input
                                        type="checkbox"
                                        class="visually-hidden catalog-checkbox"
                                        value=value.clone()
                                        prop:checked=checked
                                        on:change=on_change
                                    />
                                    <span class="fake-checkbox"></span>
                                    <span class="catalog-filter__item--label">{label}</span>
                                </span>
                                <span class="catalog-filter__item--count">{count}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
