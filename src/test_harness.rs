//! Shared test fixtures: a small builder for catalog items.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{CatalogItem, ItemId, ItemKind, ItemStatus};

/// Start building a catalog item with sensible defaults.
pub fn item(id: u64, title: &str) -> ItemBuilder {
    ItemBuilder {
        inner: CatalogItem {
            id: ItemId::new(id),
            title: title.to_string(),
            author: String::new(),
            description: String::new(),
            long_description: None,
            image_url: String::new(),
            target_link: String::new(),
            date: None,
            status: ItemStatus::Ongoing,
            kind: ItemKind::Manga,
            genres: Vec::new(),
        },
    }
}

/// Fluent builder over [`CatalogItem`] for tests.
pub struct ItemBuilder {
    inner: CatalogItem,
}

impl ItemBuilder {
    pub fn author(mut self, author: &str) -> Self {
        self.inner.author = author.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.inner.description = description.to_string();
        self
    }

    /// Set the date from a `YYYY-MM-DD` literal.
    pub fn date(mut self, ymd: &str) -> Self {
        let day = NaiveDate::parse_from_str(ymd, "%Y-%m-%d").expect("valid test date");
        let at_midnight = day.and_hms_opt(0, 0, 0).expect("valid midnight");
        self.inner.date = Some(DateTime::<Utc>::from_naive_utc_and_offset(at_midnight, Utc));
        self
    }

    pub fn kind(mut self, kind: ItemKind) -> Self {
        self.inner.kind = kind;
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.inner.status = status;
        self
    }

    pub fn genres(mut self, genres: &[&str]) -> Self {
        self.inner.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn build(self) -> CatalogItem {
        self.inner
    }
}
