use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// ContentType – the "Type" column
// ---------------------------------------------------------------------------

/// Kind of title. Source text is `"Movie"` or `"TV Show"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum ContentType {
    Movie,
    #[value(name = "tv-show")]
    #[serde(rename = "TV Show")]
    TvShow,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Movie, ContentType::TvShow];

    /// Exact match against the source column text.
    pub fn from_source(s: &str) -> Option<Self> {
        match s {
            "Movie" => Some(ContentType::Movie),
            "TV Show" => Some(ContentType::TvShow),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TitleRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single movie or show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleRecord {
    pub title: String,
    /// `None` when the source text is neither "Movie" nor "TV Show".
    pub content_type: Option<ContentType>,
    /// Raw genre text, may hold several comma-separated tags.
    pub genre: Option<String>,
    pub premiere: Option<i32>,
    /// Watch time in millions.
    pub watchtime: Option<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records in source order.
    pub records: Vec<TitleRecord>,
    /// Distinct genre values in first-appearance order (missing excluded).
    pub genres: Vec<String>,
}

impl Dataset {
    /// Build the genre index from the loaded records.
    pub fn from_records(records: Vec<TitleRecord>) -> Self {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut genres = Vec::new();
        for genre in records.iter().filter_map(|r| r.genre.as_deref()) {
            if seen.insert(genre) {
                genres.push(genre.to_string());
            }
        }
        Dataset { records, genres }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(
        title: &str,
        content_type: ContentType,
        genre: Option<&str>,
        premiere: Option<i32>,
        watchtime: Option<f64>,
    ) -> TitleRecord {
        TitleRecord {
            title: title.to_string(),
            content_type: Some(content_type),
            genre: genre.map(str::to_string),
            premiere,
            watchtime,
        }
    }

    #[test]
    fn content_type_matches_source_text_exactly() {
        assert_eq!(ContentType::from_source("Movie"), Some(ContentType::Movie));
        assert_eq!(ContentType::from_source("TV Show"), Some(ContentType::TvShow));
        assert_eq!(ContentType::from_source("movie"), None);
        assert_eq!(ContentType::from_source("Documentary"), None);
    }

    #[test]
    fn genres_are_distinct_in_first_appearance_order() {
        let ds = Dataset::from_records(vec![
            record("A", ContentType::Movie, Some("Drama"), Some(2015), Some(1.0)),
            record("B", ContentType::Movie, Some("Action"), Some(2016), Some(2.0)),
            record("C", ContentType::Movie, None, Some(2017), Some(3.0)),
            record("D", ContentType::Movie, Some("Drama"), Some(2018), Some(4.0)),
        ]);
        assert_eq!(ds.genres, vec!["Drama".to_string(), "Action".to_string()]);
        assert_eq!(ds.len(), 4);
        assert!(!ds.is_empty());
    }
}
