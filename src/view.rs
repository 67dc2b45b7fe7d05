use serde::Serialize;

use crate::data::filter::{AnalysisMode, FilterSelection, filtered_indices, sort_by_watchtime};
use crate::data::metrics::{Metrics, NOT_AVAILABLE};
use crate::data::model::Dataset;

pub const TOP_CHART_LEN: usize = 5;
pub const MAX_CARDS: usize = 10;

pub const NO_CHART_DATA: &str = "No data available for the selected filters.";
pub const NO_RECORDS: &str = "No matching records found.";
pub const NO_RECOMMENDATION: &str = "No suitable recommendation found based on the current filters.";

const INSIGHTS_HEADING: &str = "5 Key Insights Netflix Can Use:";
const INSIGHTS: [&str; 5] = [
    "Find the most popular genre in different regions.",
    "Analyze trends in movie watchtime over the years.",
    "Identify underperforming movies and genres.",
    "Recommend suitable movie categories for different seasons.",
    "Analyze audience preference for new vs. old movies.",
];

const COMPLAINTS_HEADING: &str = "Customer Complaints & Suggestions:";
const COMPLAINTS: [&str; 5] = [
    "More diversity in content with different genres.",
    "Adding more classic movies based on audience interest.",
    "Increasing availability of highly watched but discontinued shows.",
    "Better regional content selection based on viewing trends.",
    "More frequent updates on trending movie lists.",
];

/// `125.0` → `"125.0M"`, `12.25` → `"12.25M"`, missing → `"N/A"`.
pub fn watchtime_label(watchtime: Option<f64>) -> String {
    match watchtime {
        Some(w) if w.is_finite() && w.fract() == 0.0 => format!("{w:.1}M"),
        Some(w) => format!("{w}M"),
        None => NOT_AVAILABLE.to_string(),
    }
}

// ---------------------------------------------------------------------------
// View pieces
// ---------------------------------------------------------------------------

/// One bar of the top-N chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub title: String,
    pub genre: Option<String>,
    pub watchtime: Option<f64>,
}

impl ChartBar {
    /// Bar height; a missing watch time draws as an empty bar.
    pub fn height(&self) -> f64 {
        self.watchtime.unwrap_or(0.0)
    }
}

/// One entry of the scrollable result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub watchtime: Option<f64>,
}

impl Card {
    pub fn heading(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({year})", self.title),
            None => self.title.clone(),
        }
    }

    pub fn details(&self) -> String {
        format!(
            "Genre: {} | Watchtime: {}",
            self.genre.as_deref().unwrap_or(NOT_AVAILABLE),
            watchtime_label(self.watchtime)
        )
    }
}

/// The single text block chosen by [`AnalysisMode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Analysis {
    Insights,
    Recommendation { title: String },
    NoRecommendation,
    Complaints,
}

impl Analysis {
    fn select(mode: AnalysisMode, top_title: Option<&str>) -> Self {
        match (mode, top_title) {
            (AnalysisMode::Insights, _) => Analysis::Insights,
            (AnalysisMode::Recommendation, Some(title)) => Analysis::Recommendation {
                title: title.to_string(),
            },
            (AnalysisMode::Recommendation, None) => Analysis::NoRecommendation,
            (AnalysisMode::Complaints, _) => Analysis::Complaints,
        }
    }

    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Analysis::Insights => Some(INSIGHTS_HEADING),
            Analysis::Complaints => Some(COMPLAINTS_HEADING),
            Analysis::Recommendation { .. } | Analysis::NoRecommendation => None,
        }
    }

    /// Bullet list for the static blocks, empty otherwise.
    pub fn bullets(&self) -> &'static [&'static str] {
        match self {
            Analysis::Insights => &INSIGHTS,
            Analysis::Complaints => &COMPLAINTS,
            Analysis::Recommendation { .. } | Analysis::NoRecommendation => &[],
        }
    }

    /// Single-line message for the recommendation variants.
    pub fn message(&self) -> Option<String> {
        match self {
            Analysis::Recommendation { title } => Some(format!(
                "Recommendation: Purchase movies similar to '{title}' as it has high watchtime in its category."
            )),
            Analysis::NoRecommendation => Some(NO_RECOMMENDATION.to_string()),
            Analysis::Insights | Analysis::Complaints => None,
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardView – everything a renderer needs, computed in one pass
// ---------------------------------------------------------------------------

/// Derived, read-only view of the dataset under one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: FilterSelection,
    /// Dataset indices of matching records, in display order.
    #[serde(skip)]
    pub indices: Vec<usize>,
    pub metrics: Metrics,
    pub chart: Vec<ChartBar>,
    pub cards: Vec<Card>,
    pub analysis: Analysis,
}

impl DashboardView {
    /// Filter → sort → aggregate → shape. Pure; the dataset is not touched.
    pub fn build(dataset: &Dataset, selection: &FilterSelection) -> Self {
        let mut indices = filtered_indices(dataset, selection);
        sort_by_watchtime(dataset, &mut indices, selection.order);

        let metrics = Metrics::compute(dataset, &indices);
        let records = || indices.iter().map(move |&i| &dataset.records[i]);

        let chart = records()
            .take(TOP_CHART_LEN)
            .map(|r| ChartBar {
                title: r.title.clone(),
                genre: r.genre.clone(),
                watchtime: r.watchtime,
            })
            .collect();

        let cards = records()
            .take(MAX_CARDS)
            .map(|r| Card {
                title: r.title.clone(),
                year: r.premiere,
                genre: r.genre.clone(),
                watchtime: r.watchtime,
            })
            .collect();

        let top_title = records().next().map(|r| r.title.as_str());
        let analysis = Analysis::select(selection.analysis, top_title);

        DashboardView {
            selection: selection.clone(),
            indices,
            metrics,
            chart,
            cards,
            analysis,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::ViewOrder;
    use crate::data::model::ContentType;
    use crate::data::model::tests::record;

    fn scenario() -> Dataset {
        Dataset::from_records(vec![
            record("A", ContentType::Movie, Some("Drama"), Some(2015), Some(50.0)),
            record("B", ContentType::Movie, Some("Drama,Comedy"), Some(2018), Some(90.0)),
        ])
    }

    fn selection(analysis: AnalysisMode) -> FilterSelection {
        FilterSelection {
            content_type: ContentType::Movie,
            genre: "Drama".to_string(),
            start_year: 2010,
            end_year: 2020,
            order: ViewOrder::MostViewed,
            analysis,
        }
    }

    #[test]
    fn example_scenario_recommends_top_title() {
        let view = DashboardView::build(&scenario(), &selection(AnalysisMode::Recommendation));

        let order: Vec<&str> = view.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
        assert_eq!(view.metrics.count, 2);
        assert_eq!(view.metrics.mean_watchtime, Some(70.0));
        assert_eq!(view.metrics.latest_year, Some(2018));
        assert_eq!(
            view.analysis,
            Analysis::Recommendation {
                title: "B".to_string()
            }
        );
        assert!(view.analysis.message().unwrap().contains("'B'"));
    }

    #[test]
    fn chart_and_cards_are_truncated() {
        let records = (0..12)
            .map(|i| {
                record(
                    &format!("T{i}"),
                    ContentType::Movie,
                    Some("Drama"),
                    Some(2015),
                    Some(i as f64),
                )
            })
            .collect();
        let view = DashboardView::build(
            &Dataset::from_records(records),
            &selection(AnalysisMode::Insights),
        );
        assert_eq!(view.metrics.count, 12);
        assert_eq!(view.chart.len(), TOP_CHART_LEN);
        assert_eq!(view.cards.len(), MAX_CARDS);
        assert_eq!(view.chart[0].title, "T11");
        assert_eq!(view.cards[9].title, "T2");
    }

    #[test]
    fn empty_selection_has_no_recommendation() {
        let sel = FilterSelection {
            genre: "Horror".to_string(),
            ..selection(AnalysisMode::Recommendation)
        };
        let view = DashboardView::build(&scenario(), &sel);
        assert!(view.is_empty());
        assert!(view.chart.is_empty());
        assert!(view.cards.is_empty());
        assert_eq!(view.metrics.mean_label(), NOT_AVAILABLE);
        assert_eq!(view.analysis, Analysis::NoRecommendation);
        assert_eq!(view.analysis.message().as_deref(), Some(NO_RECOMMENDATION));
    }

    #[test]
    fn static_blocks_ignore_the_data() {
        let view = DashboardView::build(&scenario(), &selection(AnalysisMode::Complaints));
        assert_eq!(view.analysis, Analysis::Complaints);
        assert_eq!(view.analysis.bullets().len(), 5);
        assert!(view.analysis.message().is_none());
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let ds = scenario();
        let sel = selection(AnalysisMode::Recommendation);
        let first = DashboardView::build(&ds, &sel);
        let second = DashboardView::build(&ds, &sel);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn watchtime_labels() {
        assert_eq!(watchtime_label(Some(125.0)), "125.0M");
        assert_eq!(watchtime_label(Some(12.25)), "12.25M");
        assert_eq!(watchtime_label(None), NOT_AVAILABLE);
    }

    #[test]
    fn card_text() {
        let card = Card {
            title: "B".to_string(),
            year: Some(2018),
            genre: Some("Drama,Comedy".to_string()),
            watchtime: Some(90.0),
        };
        assert_eq!(card.heading(), "B (2018)");
        assert_eq!(card.details(), "Genre: Drama,Comedy | Watchtime: 90.0M");
    }
}
