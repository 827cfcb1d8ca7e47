//! Catalog dataset loading.
//!
//! The dataset is a JSON array of item records, read once at startup and
//! never written. File-level defects (missing file, bad JSON, duplicate
//! ids) abort the load; record-level defects (bad date, unknown kind or
//! status) degrade to defaults with a warning so one sloppy entry does
//! not take the whole catalog down.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crate::model::{CatalogItem, DataError, ItemId, ItemKind, ItemStatus};

/// Raw record as it appears in the JSON file. Most fields are optional
/// and default to empty.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemRecord {
    id: u64,
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    long_description: Option<String>,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    target_link: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    genres: Vec<String>,
}

/// Load the catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&contents)?;
    info!(count = catalog.len(), path = %path.display(), "catalog loaded");
    Ok(catalog)
}

/// Parse a catalog from JSON text.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogItem>, DataError> {
    let records: Vec<ItemRecord> =
        serde_json::from_str(json).map_err(|e| DataError::InvalidJson {
            message: e.to_string(),
        })?;

    let mut seen = HashSet::new();
    let mut catalog = Vec::with_capacity(records.len());
    for record in records {
        let id = ItemId::new(record.id);
        if !seen.insert(id) {
            return Err(DataError::DuplicateId { id });
        }
        catalog.push(convert(record));
    }
    Ok(catalog)
}

fn convert(record: ItemRecord) -> CatalogItem {
    let id = ItemId::new(record.id);

    let date = record.date.as_deref().and_then(|raw| {
        let parsed = parse_date_lenient(raw);
        if parsed.is_none() {
            warn!(%id, raw, "unparseable date; item will sort oldest");
        }
        parsed
    });

    let status = match record.status.as_deref() {
        Some(raw) => ItemStatus::parse(raw).unwrap_or_else(|| {
            warn!(%id, raw, "unknown status; defaulting to Ongoing");
            ItemStatus::Ongoing
        }),
        None => ItemStatus::Ongoing,
    };

    let kind = match record.kind.as_deref() {
        Some(raw) => ItemKind::parse(raw).unwrap_or_else(|| {
            warn!(%id, raw, "unknown kind; defaulting to Manga");
            ItemKind::Manga
        }),
        None => ItemKind::Manga,
    };

    CatalogItem {
        id,
        title: record.title,
        author: record.author,
        description: record.description,
        long_description: record.long_description,
        image_url: record.image_url,
        target_link: record.target_link,
        date,
        status,
        kind,
        genres: record.genres,
    }
}

/// Parse a date leniently: RFC 3339 first, then bare `YYYY-MM-DD`.
fn parse_date_lenient(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_record() {
        let catalog = parse_catalog(r#"[{"id": 1, "title": "Solo Tale"}]"#).expect("valid");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].title, "Solo Tale");
        assert_eq!(catalog[0].status, ItemStatus::Ongoing);
        assert_eq!(catalog[0].kind, ItemKind::Manga);
        assert!(catalog[0].date.is_none());
    }

    #[test]
    fn parses_full_record() {
        let json = r#"[{
            "id": 2,
            "title": "Tower Climber",
            "author": "Park Min-ho",
            "description": "An endless tower",
            "long_description": "A very long tower indeed",
            "image_url": "tower.jpg",
            "target_link": "/tower",
            "date": "2024-05-05",
            "status": "Completed",
            "type": "Manhwa",
            "genres": ["Action", "Fantasy"]
        }]"#;
        let catalog = parse_catalog(json).expect("valid");
        let item = &catalog[0];
        assert_eq!(item.kind, ItemKind::Manhwa);
        assert_eq!(item.status, ItemStatus::Completed);
        assert_eq!(item.genres, vec!["Action", "Fantasy"]);
        assert!(item.date.is_some());
    }

    #[test]
    fn rfc3339_dates_are_accepted() {
        let json = r#"[{"id": 1, "title": "T", "date": "2024-05-05T12:30:00Z"}]"#;
        let catalog = parse_catalog(json).expect("valid");
        assert!(catalog[0].date.is_some());
    }

    #[test]
    fn bad_date_degrades_to_none() {
        let json = r#"[{"id": 1, "title": "T", "date": "not-a-date"}]"#;
        let catalog = parse_catalog(json).expect("valid");
        assert!(catalog[0].date.is_none());
    }

    #[test]
    fn unknown_status_and_kind_default() {
        let json = r#"[{"id": 1, "title": "T", "status": "???", "type": "webtoon"}]"#;
        let catalog = parse_catalog(json).expect("valid");
        assert_eq!(catalog[0].status, ItemStatus::Ongoing);
        assert_eq!(catalog[0].kind, ItemKind::Manga);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[{"id": 1, "title": "A"}, {"id": 1, "title": "B"}]"#;
        let err = parse_catalog(json).expect_err("duplicate id");
        assert!(matches!(err, DataError::DuplicateId { .. }));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = parse_catalog("not json").expect_err("invalid json");
        assert!(matches!(err, DataError::InvalidJson { .. }));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).expect_err("missing");
        assert!(matches!(err, DataError::FileNotFound { .. }));
    }
}
