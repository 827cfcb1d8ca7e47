//! Catalog item domain types.
//!
//! `CatalogItem` is pure data supplied by an external dataset at startup.
//! The browsing core never mutates items; it only reads and reorders
//! clones of them.

use chrono::{DateTime, Utc};

// ===== ItemId =====

/// Unique catalog item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw id value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== ItemKind =====

/// Catalog entry medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Manga,
    Manhwa,
    Anime,
}

impl ItemKind {
    /// Display label, also the value matched by genre grouping.
    pub fn label(self) -> &'static str {
        match self {
            Self::Manga => "Manga",
            Self::Manhwa => "Manhwa",
            Self::Anime => "Anime",
        }
    }

    /// Parse a kind label case-insensitively.
    ///
    /// Returns `None` for unrecognized labels; callers decide how to
    /// degrade (the data loader warns and defaults).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "manga" => Some(Self::Manga),
            "manhwa" => Some(Self::Manhwa),
            "anime" => Some(Self::Anime),
            _ => None,
        }
    }

    /// Filter cycle order for the search overlay: None → Manga → Manhwa → Anime → None.
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Manga),
            Some(Self::Manga) => Some(Self::Manhwa),
            Some(Self::Manhwa) => Some(Self::Anime),
            Some(Self::Anime) => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ===== ItemStatus =====

/// Publication status of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemStatus {
    Ongoing,
    Completed,
    Paused,
}

impl ItemStatus {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Paused => "Paused",
        }
    }

    /// Parse a status label case-insensitively.
    ///
    /// Accepts French labels alongside the English ones, since existing
    /// catalog files use them.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "ongoing" | "en cours" => Some(Self::Ongoing),
            "completed" | "terminé" | "termine" => Some(Self::Completed),
            "paused" | "pause" => Some(Self::Paused),
            _ => None,
        }
    }

    /// Filter cycle order for the search overlay.
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Ongoing),
            Some(Self::Ongoing) => Some(Self::Completed),
            Some(Self::Completed) => Some(Self::Paused),
            Some(Self::Paused) => None,
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ===== CatalogItem =====

/// One entry of the static catalog dataset.
///
/// `date` is `None` when the dataset omitted the field or supplied an
/// unparseable value; ordering code treats `None` as the Unix epoch so
/// such items sort oldest.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image_url: String,
    pub target_link: String,
    pub date: Option<DateTime<Utc>>,
    pub status: ItemStatus,
    pub kind: ItemKind,
    pub genres: Vec<String>,
}

impl CatalogItem {
    /// Date used for ordering: the item's date, or the epoch when absent.
    pub fn sort_date(&self) -> DateTime<Utc> {
        self.date.unwrap_or(DateTime::UNIX_EPOCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_is_case_insensitive() {
        assert_eq!(ItemKind::parse("MANHWA"), Some(ItemKind::Manhwa));
        assert_eq!(ItemKind::parse("  anime "), Some(ItemKind::Anime));
    }

    #[test]
    fn kind_parse_rejects_unknown() {
        assert_eq!(ItemKind::parse("webtoon"), None);
    }

    #[test]
    fn status_parse_accepts_legacy_french_labels() {
        assert_eq!(ItemStatus::parse("En cours"), Some(ItemStatus::Ongoing));
        assert_eq!(ItemStatus::parse("Terminé"), Some(ItemStatus::Completed));
        assert_eq!(ItemStatus::parse("Pause"), Some(ItemStatus::Paused));
    }

    #[test]
    fn kind_cycle_covers_all_variants_and_wraps() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..3 {
            current = ItemKind::cycle(current);
            seen.push(current.expect("cycle yields a kind"));
        }
        assert_eq!(seen, vec![ItemKind::Manga, ItemKind::Manhwa, ItemKind::Anime]);
        assert_eq!(ItemKind::cycle(current), None);
    }

    #[test]
    fn sort_date_defaults_to_epoch() {
        let item = CatalogItem {
            id: ItemId::new(1),
            title: "T".to_string(),
            author: "A".to_string(),
            description: String::new(),
            long_description: None,
            image_url: String::new(),
            target_link: String::new(),
            date: None,
            status: ItemStatus::Ongoing,
            kind: ItemKind::Manga,
            genres: vec![],
        };
        assert_eq!(item.sort_date(), DateTime::UNIX_EPOCH);
    }
}
