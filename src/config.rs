use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::filter::{
    AnalysisMode, DEFAULT_END_YEAR, DEFAULT_START_YEAR, FilterSelection, ViewOrder,
};
use crate::data::model::ContentType;

/// Output of `--headless`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Movie / TV show watchtime dashboard.
#[derive(Debug, Parser)]
#[command(name = "watchtime-dashboard", version)]
#[command(about = "Filter, sort and summarise a titles dataset")]
pub struct Args {
    /// Dataset to open at startup (.csv, .json or .parquet)
    #[arg(env = "WATCHTIME_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Title type to show
    #[arg(long = "type", value_enum, default_value_t = ContentType::Movie)]
    pub content_type: ContentType,

    /// Substring the genre must contain (defaults to the first genre in the data)
    #[arg(long)]
    pub genre: Option<String>,

    /// First premiere year, inclusive
    #[arg(long, default_value_t = DEFAULT_START_YEAR)]
    pub start_year: i32,

    /// Last premiere year, inclusive
    #[arg(long, default_value_t = DEFAULT_END_YEAR)]
    pub end_year: i32,

    /// Viewing preference
    #[arg(long, value_enum, default_value_t = ViewOrder::MostViewed)]
    pub order: ViewOrder,

    /// Analysis block to show
    #[arg(long, value_enum, default_value_t = AnalysisMode::Insights)]
    pub analysis: AnalysisMode,

    /// Print the report to stdout instead of opening a window
    #[arg(long, requires = "dataset")]
    pub headless: bool,

    /// Report format for --headless
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    /// The initial selection described by the flags.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            content_type: self.content_type,
            genre: self.genre.clone().unwrap_or_default(),
            start_year: self.start_year,
            end_year: self.end_year,
            order: self.order,
            analysis: self.analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_defaults() {
        let args = Args::try_parse_from(["watchtime-dashboard"]).unwrap();
        assert_eq!(args.selection(), FilterSelection::default());
        assert!(!args.headless);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn flags_build_the_selection() {
        let args = Args::try_parse_from([
            "watchtime-dashboard",
            "movies.csv",
            "--type",
            "tv-show",
            "--genre",
            "Drama",
            "--start-year",
            "2001",
            "--end-year",
            "2005",
            "--order",
            "least-viewed",
            "--analysis",
            "recommendation",
            "--headless",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.dataset, Some(PathBuf::from("movies.csv")));
        assert_eq!(
            args.selection(),
            FilterSelection {
                content_type: ContentType::TvShow,
                genre: "Drama".to_string(),
                start_year: 2001,
                end_year: 2005,
                order: ViewOrder::LeastViewed,
                analysis: AnalysisMode::Recommendation,
            }
        );
        assert!(args.headless);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn headless_needs_a_dataset() {
        assert!(Args::try_parse_from(["watchtime-dashboard", "--headless"]).is_err());
    }
}
