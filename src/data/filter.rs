use std::cmp::Ordering;

use serde::Serialize;

use super::model::{ContentType, Dataset, TitleRecord};

/// Years offered by the start/end selectors.
pub const FIRST_SELECTABLE_YEAR: i32 = 2000;
pub const LAST_SELECTABLE_YEAR: i32 = 2023;
pub const DEFAULT_START_YEAR: i32 = 2010;
pub const DEFAULT_END_YEAR: i32 = 2020;

// ---------------------------------------------------------------------------
// Selection value objects
// ---------------------------------------------------------------------------

/// Sort direction over watch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum ViewOrder {
    /// Descending.
    #[default]
    MostViewed,
    /// Ascending.
    LeastViewed,
}

impl ViewOrder {
    pub const ALL: [ViewOrder; 2] = [ViewOrder::MostViewed, ViewOrder::LeastViewed];

    pub fn label(&self) -> &'static str {
        match self {
            ViewOrder::MostViewed => "Most Viewed",
            ViewOrder::LeastViewed => "Least Viewed",
        }
    }
}

/// Which of the fixed analysis blocks to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum AnalysisMode {
    #[default]
    Insights,
    Recommendation,
    Complaints,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::Insights,
        AnalysisMode::Recommendation,
        AnalysisMode::Complaints,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Insights => "Netflix Insights",
            AnalysisMode::Recommendation => "Movie Purchase Recommendation",
            AnalysisMode::Complaints => "Customer Complaints & Suggestions",
        }
    }
}

/// Everything the user picked, as one immutable value.
///
/// The pipeline never mutates it; the UI edits a copy and swaps it in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSelection {
    pub content_type: ContentType,
    /// Case-sensitive substring searched for in the genre column.
    pub genre: String,
    /// Inclusive.
    pub start_year: i32,
    /// Inclusive.
    pub end_year: i32,
    pub order: ViewOrder,
    pub analysis: AnalysisMode,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            content_type: ContentType::Movie,
            genre: String::new(),
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            order: ViewOrder::default(),
            analysis: AnalysisMode::default(),
        }
    }
}

/// Fill in the genre from the dataset when none was chosen yet: the first
/// distinct genre, like a freshly populated drop-down.
pub fn init_selection(dataset: &Dataset, base: FilterSelection) -> FilterSelection {
    if !base.genre.is_empty() {
        return base;
    }
    FilterSelection {
        genre: dataset.genres.first().cloned().unwrap_or_default(),
        ..base
    }
}

// ---------------------------------------------------------------------------
// Filter predicate
// ---------------------------------------------------------------------------

/// All three predicates, conjunctively. Missing genre or year never matches.
pub fn matches(record: &TitleRecord, selection: &FilterSelection) -> bool {
    let type_ok = record.content_type == Some(selection.content_type);
    let genre_ok = record
        .genre
        .as_deref()
        .is_some_and(|g| g.contains(selection.genre.as_str()));
    let year_ok = record
        .premiere
        .is_some_and(|y| (selection.start_year..=selection.end_year).contains(&y));
    type_ok && genre_ok && year_ok
}

/// Return indices of records that pass the selection, in source order.
pub fn filtered_indices(dataset: &Dataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| matches(rec, selection))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Sort stage
// ---------------------------------------------------------------------------

/// Stable sort of `indices` by watch time. Missing watch time goes last in
/// both directions.
pub fn sort_by_watchtime(dataset: &Dataset, indices: &mut [usize], order: ViewOrder) {
    indices.sort_by(|&a, &b| {
        let wa = dataset.records[a].watchtime;
        let wb = dataset.records[b].watchtime;
        match (wa, wb) {
            (Some(x), Some(y)) => match order {
                ViewOrder::MostViewed => y.total_cmp(&x),
                ViewOrder::LeastViewed => x.total_cmp(&y),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("A", ContentType::Movie, Some("Drama"), Some(2015), Some(50.0)),
            record("B", ContentType::Movie, Some("Drama,Comedy"), Some(2018), Some(90.0)),
            record("C", ContentType::TvShow, Some("Drama"), Some(2016), Some(300.0)),
            record("D", ContentType::Movie, None, Some(2017), Some(10.0)),
            record("E", ContentType::Movie, Some("Drama"), None, Some(20.0)),
            record("F", ContentType::Movie, Some("Drama"), Some(2009), Some(70.0)),
            record("G", ContentType::Movie, Some("drama"), Some(2015), Some(70.0)),
            record("H", ContentType::Movie, Some("Drama"), Some(2020), Some(50.0)),
            record("I", ContentType::Movie, Some("Drama"), Some(2010), None),
        ])
    }

    fn selection() -> FilterSelection {
        FilterSelection {
            genre: "Drama".to_string(),
            ..FilterSelection::default()
        }
    }

    fn titles(ds: &Dataset, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| ds.records[i].title.clone()).collect()
    }

    #[test]
    fn filter_applies_all_predicates() {
        let ds = dataset();
        let sel = selection();
        let idx = filtered_indices(&ds, &sel);
        assert_eq!(titles(&ds, &idx), vec!["A", "B", "H", "I"]);
        for &i in &idx {
            assert!(matches(&ds.records[i], &sel));
        }
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let ds = dataset();
        let sel = FilterSelection {
            start_year: 2010,
            end_year: 2010,
            ..selection()
        };
        assert_eq!(titles(&ds, &filtered_indices(&ds, &sel)), vec!["I"]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let ds = dataset();
        let sel = FilterSelection {
            start_year: 2020,
            end_year: 2010,
            ..selection()
        };
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn empty_genre_matches_any_present_genre() {
        let ds = dataset();
        let sel = FilterSelection {
            genre: String::new(),
            ..selection()
        };
        // D has no genre, G only differs by case.
        assert_eq!(
            titles(&ds, &filtered_indices(&ds, &sel)),
            vec!["A", "B", "G", "H", "I"]
        );
    }

    #[test]
    fn most_viewed_is_stable_and_non_increasing() {
        let ds = dataset();
        let mut idx = filtered_indices(&ds, &selection());
        sort_by_watchtime(&ds, &mut idx, ViewOrder::MostViewed);
        // A and H tie at 50 and keep source order; I has no watch time.
        assert_eq!(titles(&ds, &idx), vec!["B", "A", "H", "I"]);
    }

    #[test]
    fn least_viewed_is_stable_and_non_decreasing() {
        let ds = dataset();
        let mut idx = filtered_indices(&ds, &selection());
        sort_by_watchtime(&ds, &mut idx, ViewOrder::LeastViewed);
        assert_eq!(titles(&ds, &idx), vec!["A", "H", "B", "I"]);
        let present: Vec<f64> = idx.iter().filter_map(|&i| ds.records[i].watchtime).collect();
        assert!(present.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn init_selection_defaults_to_first_genre() {
        let ds = dataset();
        let sel = init_selection(&ds, FilterSelection::default());
        assert_eq!(sel.genre, "Drama");

        let kept = init_selection(&ds, selection_with_genre("Comedy"));
        assert_eq!(kept.genre, "Comedy");
    }

    fn selection_with_genre(genre: &str) -> FilterSelection {
        FilterSelection {
            genre: genre.to_string(),
            ..FilterSelection::default()
        }
    }
}
