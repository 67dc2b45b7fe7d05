use std::ops::RangeInclusive;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot, uniform_grid_spacer};

use crate::color::ColorMap;
use crate::view::{DashboardView, NO_CHART_DATA, TOP_CHART_LEN, watchtime_label};

/// Axis labels longer than this are shortened; hovering a bar shows the full title.
const MAX_LABEL_CHARS: usize = 14;

// ---------------------------------------------------------------------------
// Top-N bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the watchtime bar chart for the first records in sort order.
pub fn top_titles_chart(ui: &mut Ui, view: &DashboardView, color_map: Option<&ColorMap>) {
    ui.heading(format!("Top {TOP_CHART_LEN} Titles Based on Watchtime"));

    if view.chart.is_empty() {
        ui.label(RichText::new(format!("⚠ {NO_CHART_DATA}")).color(Color32::YELLOW));
        return;
    }

    let bars: Vec<Bar> = view
        .chart
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let color = color_map
                .map(|cm| cm.color_for(bar.genre.as_deref()))
                .unwrap_or(Color32::LIGHT_BLUE);
            Bar::new(i as f64, bar.height())
                .name(format!("{} ({})", bar.title, watchtime_label(bar.watchtime)))
                .fill(color)
                .width(0.6)
        })
        .collect();

    let labels: Vec<String> = view.chart.iter().map(|b| axis_label(&b.title)).collect();
    let last = (labels.len() as f64) - 0.5;

    Plot::new("top_titles_chart")
        .height(280.0)
        .x_axis_label("Title")
        .y_axis_label("Watchtime in Million")
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            label_at(&labels, mark.value)
        })
        .include_x(-0.5)
        .include_x(last)
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Bars sit on integer x positions; other grid marks get no label.
fn label_at(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

fn axis_label(title: &str) -> String {
    if title.chars().count() <= MAX_LABEL_CHARS {
        return title.to_string();
    }
    let mut short: String = title.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}
