use std::fmt::Write;

use crate::view::{
    DashboardView, MAX_CARDS, NO_CHART_DATA, NO_RECORDS, TOP_CHART_LEN, watchtime_label,
};

const BAR_WIDTH: usize = 40;

/// Plain-text rendering of a [`DashboardView`] for `--headless`.
pub fn render_text(view: &DashboardView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, view);
    out
}

fn write_report(out: &mut String, view: &DashboardView) -> std::fmt::Result {
    let sel = &view.selection;
    writeln!(
        out,
        "Filters: {} | genre contains '{}' | {}-{} | {}",
        sel.content_type,
        sel.genre,
        sel.start_year,
        sel.end_year,
        sel.order.label()
    )?;
    writeln!(out)?;

    writeln!(out, "== Key Insights at a Glance ==")?;
    writeln!(out, "Total Movies/Shows:    {}", view.metrics.count)?;
    writeln!(out, "Avg. Watchtime (M):    {}", view.metrics.mean_label())?;
    writeln!(out, "Latest Year Available: {}", view.metrics.latest_year_label())?;
    writeln!(out)?;

    writeln!(out, "== Top {TOP_CHART_LEN} Titles Based on Watchtime ==")?;
    if view.is_empty() {
        writeln!(out, "{NO_CHART_DATA}")?;
    } else {
        let max = view
            .chart
            .iter()
            .map(|b| b.height())
            .fold(0.0_f64, f64::max);
        let label_width = view
            .chart
            .iter()
            .map(|b| b.title.chars().count())
            .max()
            .unwrap_or(0);
        for bar in &view.chart {
            let len = if max > 0.0 {
                ((bar.height() / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            writeln!(
                out,
                "{:<label_width$} | {:<BAR_WIDTH$} {}",
                bar.title,
                "#".repeat(len),
                watchtime_label(bar.watchtime)
            )?;
        }
    }
    writeln!(out)?;

    writeln!(out, "== Filtered Results (Top {MAX_CARDS}) ==")?;
    if view.cards.is_empty() {
        writeln!(out, "{NO_RECORDS}")?;
    }
    for card in &view.cards {
        writeln!(out, "* {}", card.heading())?;
        writeln!(out, "  {}", card.details())?;
    }
    writeln!(out)?;

    writeln!(out, "== Analysis & Insights: {} ==", sel.analysis.label())?;
    if let Some(heading) = view.analysis.heading() {
        writeln!(out, "{heading}")?;
    }
    for bullet in view.analysis.bullets() {
        writeln!(out, "- {bullet}")?;
    }
    if let Some(message) = view.analysis.message() {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{AnalysisMode, FilterSelection};
    use crate::data::model::tests::record;
    use crate::data::model::{ContentType, Dataset};
    use crate::view::NO_RECOMMENDATION;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("A", ContentType::Movie, Some("Drama"), Some(2015), Some(50.0)),
            record("B", ContentType::Movie, Some("Drama,Comedy"), Some(2018), Some(90.0)),
        ])
    }

    #[test]
    fn report_lists_metrics_chart_and_cards() {
        let sel = FilterSelection {
            genre: "Drama".to_string(),
            analysis: AnalysisMode::Recommendation,
            ..FilterSelection::default()
        };
        let text = render_text(&DashboardView::build(&dataset(), &sel));

        assert!(text.contains("Total Movies/Shows:    2"));
        assert!(text.contains("Avg. Watchtime (M):    70.00M"));
        assert!(text.contains("Latest Year Available: 2018"));
        assert!(text.contains(&format!("B | {} 90.0M", "#".repeat(BAR_WIDTH))));
        let b = text.find("* B (2018)").unwrap();
        let a = text.find("* A (2015)").unwrap();
        assert!(b < a);
        assert!(text.contains("similar to 'B'"));
    }

    #[test]
    fn empty_report_shows_notices() {
        let sel = FilterSelection {
            genre: "Horror".to_string(),
            analysis: AnalysisMode::Recommendation,
            ..FilterSelection::default()
        };
        let text = render_text(&DashboardView::build(&dataset(), &sel));

        assert!(text.contains("Total Movies/Shows:    0"));
        assert!(text.contains(&format!("== Top {TOP_CHART_LEN} Titles Based on Watchtime ==")));
        assert!(text.contains(&format!("== Filtered Results (Top {MAX_CARDS}) ==")));
        assert!(text.contains("Avg. Watchtime (M):    N/A"));
        assert!(text.contains("Latest Year Available: N/A"));
        assert!(text.contains(NO_CHART_DATA));
        assert!(text.contains(NO_RECORDS));
        assert!(text.contains(NO_RECOMMENDATION));
    }
}
