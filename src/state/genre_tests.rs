//! Tests for genre grouping.
//!
//! Shuffle order is not contractual; assertions use set equality and
//! lengths, never positions.

use super::*;
use crate::model::{ItemId, ItemKind};
use crate::test_harness::item;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        item(1, "A").kind(ItemKind::Manga).genres(&["Action", "Dark Fantasy"]).build(),
        item(2, "B").kind(ItemKind::Manhwa).genres(&["Action"]).build(),
        item(3, "C").kind(ItemKind::Anime).genres(&["Romance"]).build(),
        item(4, "D").kind(ItemKind::Manga).genres(&["Fantasy"]).build(),
    ]
}

// ===== Membership =====

#[test]
fn matches_on_kind_label() {
    let catalog = sample_catalog();
    assert!(genre_matches(&catalog[0], "Manga"));
    assert!(!genre_matches(&catalog[0], "Manhwa"));
}

#[test]
fn matches_on_genre_tag_case_insensitively() {
    let catalog = sample_catalog();
    assert!(genre_matches(&catalog[1], "action"));
    assert!(genre_matches(&catalog[2], "ROMANCE"));
}

#[test]
fn substring_match_is_looser_than_query_engine() {
    // "Fantasy" is a substring of the "Dark Fantasy" tag, so item 1 is
    // counted under plain Fantasy too.
    let catalog = sample_catalog();
    assert!(genre_matches(&catalog[0], "Fantasy"));
}

// ===== Grouping =====

#[test]
fn buckets_follow_vocabulary_order_and_omit_empty() {
    let catalog = sample_catalog();
    let vocabulary = names(&["Horror", "Action", "Romance"]);

    let buckets = group_by_genre(&catalog, &vocabulary, &mut rng());

    let bucket_names: Vec<&str> = buckets.iter().map(GenreBucket::name).collect();
    assert_eq!(bucket_names, vec!["Action", "Romance"]);
}

#[test]
fn bucket_contents_are_exactly_the_matching_items() {
    let catalog = sample_catalog();
    let vocabulary = names(&["Action"]);

    let buckets = group_by_genre(&catalog, &vocabulary, &mut rng());

    assert_eq!(buckets.len(), 1);
    let mut ids: Vec<ItemId> = buckets[0].items().iter().map(|i| i.id).collect();
    ids.sort();
    assert_eq!(ids, vec![ItemId::new(1), ItemId::new(2)]);
}

#[test]
fn item_may_appear_in_multiple_buckets() {
    let catalog = sample_catalog();
    let vocabulary = names(&["Action", "Fantasy", "Manga"]);

    let buckets = group_by_genre(&catalog, &vocabulary, &mut rng());

    let containing: Vec<&str> = buckets
        .iter()
        .filter(|b| b.items().iter().any(|i| i.id == ItemId::new(1)))
        .map(GenreBucket::name)
        .collect();
    assert_eq!(containing, vec!["Action", "Fantasy", "Manga"]);
}

#[test]
fn empty_catalog_yields_no_buckets() {
    let buckets = group_by_genre(&[], &names(&["Action"]), &mut rng());
    assert!(buckets.is_empty());
}

#[test]
fn empty_vocabulary_yields_no_buckets() {
    let catalog = sample_catalog();
    let buckets = group_by_genre(&catalog, &[], &mut rng());
    assert!(buckets.is_empty());
}

#[test]
fn shuffle_preserves_length_and_set() {
    let catalog: Vec<CatalogItem> = (0..50)
        .map(|i| item(i, &format!("Item {i}")).genres(&["Action"]).build())
        .collect();

    let buckets = group_by_genre(&catalog, &names(&["Action"]), &mut rng());

    assert_eq!(buckets[0].items().len(), 50);
    let mut ids: Vec<u64> = buckets[0].items().iter().map(|i| i.id.value()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..50).collect::<Vec<u64>>());
}
