//! Catalog Data Model
//!
//! The book catalog is an externally supplied JSON document: an ordered
//! sequence of records, parsed once per catalog session and never mutated.
//! Facet derivation and filtering live in the submodules:
//! - `facets` - per-dimension value/count mappings derived from the records
//! - `filter` - the active selection and the card matching rule

use serde::Deserialize;

pub mod facets;
pub mod filter;

pub use facets::{author_key, AuthorFacet, FacetIndex};
pub use filter::{CardFacets, FacetDimension, FilterSelection};

/// One co-author entry, in the order the record lists it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Author {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

/// A single book record from the catalog document.
///
/// Every field except `id` defaults when absent, so one malformed record
/// cannot break facet derivation for the rest of the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookRecord {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub author: Vec<Author>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl BookRecord {
    /// "by A & B" line shown on cards and in the book dialog.
    pub fn author_line(&self) -> String {
        self.author
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

/// Split newline-separated text into paragraph blocks, dropping blanks.
///
/// Used for book descriptions and news post bodies.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
