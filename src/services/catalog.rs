//! Catalog state
//!
//! Two lifetimes of catalog data live here:
//!
//! - [`CatalogStore`] - one page-level load backing the catalog strip on the
//!   landing page and the hover tooltip.
//! - [`CatalogSession`] - the state of one catalog-dialog session: records,
//!   derived facets and the active filter selection. Created when the
//!   dialog opens, discarded when it closes; the next open fetches afresh.

use leptos::prelude::*;

use crate::api::ApiError;
use crate::catalog::{BookRecord, CardFacets, FacetIndex, FilterSelection};

/// Lifecycle of one fetched-and-derived piece of surface content.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Everything one catalog-dialog session owns.
#[derive(Clone)]
pub struct CatalogSession {
    pub records: Vec<BookRecord>,
    /// Per-record facet values, same order as `records`.
    pub cards: Vec<CardFacets>,
    pub facets: FacetIndex,
    pub selection: RwSignal<FilterSelection>,
}

impl CatalogSession {
    pub fn new(records: Vec<BookRecord>) -> Self {
        let cards = records.iter().map(CardFacets::of).collect();
        let facets = FacetIndex::build(&records);
        Self {
            records,
            cards,
            facets,
            selection: RwSignal::new(FilterSelection::new()),
        }
    }

    /// Number of cards the current selection leaves visible.
    pub fn visible_count(&self) -> usize {
        self.selection
            .with(|selection| self.cards.iter().filter(|card| selection.matches(card)).count())
    }
}

/// Page-level catalog data, loaded once at startup.
#[derive(Clone, Copy)]
pub struct CatalogStore {
    pub records: RwSignal<Option<Vec<BookRecord>>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self { records: RwSignal::new(None) }
    }

    /// Resolve a record id against the loaded data.
    pub fn record(&self, id: u32) -> Option<BookRecord> {
        self.records
            .with_untracked(|records| {
                records.as_ref().and_then(|list| list.iter().find(|r| r.id == id).cloned())
            })
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_catalog_store() {
    provide_context(CatalogStore::new());
}

pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Author, FacetDimension};

    fn record(id: u32, lang: &str, series: &str, author_ids: &[u32]) -> BookRecord {
        BookRecord {
            id,
            title: format!("Book {id}"),
            lang: lang.into(),
            series: series.into(),
            author: author_ids
                .iter()
                .map(|id| Author { id: *id, name: format!("Author {id}") })
                .collect(),
            image: String::new(),
            excerpt: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_session_derives_cards_and_facets() {
        let session = CatalogSession::new(vec![
            record(1, "EN", "A", &[10]),
            record(2, "EN", "B", &[10, 11]),
        ]);

        assert_eq!(session.cards.len(), 2);
        assert_eq!(session.cards[1].author_key, "10,11");
        assert_eq!(session.facets.lang_counts.get("EN"), Some(&2));
        assert_eq!(session.visible_count(), 2);
    }

    #[test]
    fn test_visible_count_tracks_selection() {
        let session = CatalogSession::new(vec![
            record(1, "EN", "A", &[10]),
            record(2, "EN", "B", &[10, 11]),
            record(3, "FR", "A", &[12]),
        ]);

        session
            .selection
            .update(|s| s.toggle(FacetDimension::Lang, "EN", true));
        assert_eq!(session.visible_count(), 2);

        session
            .selection
            .update(|s| s.toggle(FacetDimension::Series, "C", true));
        assert_eq!(session.visible_count(), 0);

        session.selection.update(|s| s.clear());
        assert_eq!(session.visible_count(), 3);
    }
}
