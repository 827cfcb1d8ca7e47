//! Genre bucket grouping.
//!
//! Partitions the catalog into named buckets using a loose, case-insensitive
//! substring match against the item kind and genre tags (no tokenization;
//! this is deliberately looser than the query engine). Each bucket's order
//! is a one-time uniform random permutation fixed at grouping time, so
//! carousels do not reshuffle on re-render.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::CatalogItem;

/// Genre vocabulary shipped with the default catalog. Order defines the
/// display order of carousels. Overridable via the `genres` config key.
pub const DEFAULT_GENRES: &[&str] = &[
    "Manhwa",
    "Manga",
    "Anime",
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Romance",
    "Fantasy",
    "Supernatural",
    "Isekai",
    "Science Fiction",
    "Thriller",
    "Mystery",
    "Psychological",
    "School Life",
    "Vampire",
    "Society",
    "Horror",
    "Heroes",
    "Revenge",
    "Dark Fantasy",
    "Shonen",
];

/// The default vocabulary as owned strings.
pub fn default_genre_names() -> Vec<String> {
    DEFAULT_GENRES.iter().map(|g| g.to_string()).collect()
}

// ===== GenreBucket =====

/// A named, pre-shuffled subset of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreBucket {
    name: String,
    items: Vec<CatalogItem>,
}

impl GenreBucket {
    /// The genre name this bucket was grouped under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bucket items in their fixed shuffled order. Never empty: empty
    /// buckets are omitted from grouping output.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Consume the bucket, yielding its items.
    pub fn into_items(self) -> Vec<CatalogItem> {
        self.items
    }
}

/// Whether an item belongs to a genre: the lowercased genre name must be
/// a substring of the item's kind label or of one of its genre tags.
pub fn genre_matches(item: &CatalogItem, genre: &str) -> bool {
    let needle = genre.to_lowercase();
    item.kind.label().to_lowercase().contains(&needle)
        || item
            .genres
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Group the catalog into buckets, one per vocabulary entry with at least
/// one match, in vocabulary order. An item may land in several buckets.
///
/// Bucket order is a uniform Fisher–Yates permutation drawn from `rng`.
/// The caller groups once per session and retains the result; regrouping
/// would draw a fresh permutation.
pub fn group_by_genre<R: Rng + ?Sized>(
    catalog: &[CatalogItem],
    genre_names: &[String],
    rng: &mut R,
) -> Vec<GenreBucket> {
    let mut buckets = Vec::new();
    for name in genre_names {
        let mut items: Vec<CatalogItem> = catalog
            .iter()
            .filter(|item| genre_matches(item, name))
            .cloned()
            .collect();
        if items.is_empty() {
            continue;
        }
        items.shuffle(rng);
        buckets.push(GenreBucket {
            name: name.clone(),
            items,
        });
    }
    buckets
}

#[cfg(test)]
#[path = "genre_tests.rs"]
mod tests;
