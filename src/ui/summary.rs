use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Size, StripBuilder};

use crate::color::ColorMap;
use crate::data::filter::AnalysisMode;
use crate::data::metrics::Metrics;
use crate::view::{Analysis, DashboardView, MAX_CARDS, NO_RECORDS};

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

/// Three metrics side by side.
pub fn metrics_strip(ui: &mut Ui, metrics: &Metrics) {
    ui.heading("Key Insights at a Glance");

    let cells = [
        ("Total Movies/Shows", metrics.count.to_string()),
        ("Avg. Watchtime (M)", metrics.mean_label()),
        ("Latest Year Available", metrics.latest_year_label()),
    ];

    // A horizontal strip takes all available height, so bound it first.
    ui.allocate_ui(egui::vec2(ui.available_width(), 64.0), |ui: &mut Ui| {
        StripBuilder::new(ui)
            .sizes(Size::remainder(), cells.len())
            .horizontal(|mut strip| {
                for (label, value) in &cells {
                    strip.cell(|ui: &mut Ui| {
                        ui.label(*label);
                        ui.label(RichText::new(value).size(26.0).strong());
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Result cards
// ---------------------------------------------------------------------------

pub fn result_cards(ui: &mut Ui, view: &DashboardView, color_map: Option<&ColorMap>) {
    ui.heading(format!("Filtered Results (Top {MAX_CARDS})"));

    if view.cards.is_empty() {
        ui.label(RichText::new(format!("⚠ {NO_RECORDS}")).color(Color32::YELLOW));
        return;
    }

    ScrollArea::vertical()
        .id_salt("result_cards")
        .max_height(360.0)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for card in &view.cards {
                let accent = color_map
                    .map(|cm| cm.color_for(card.genre.as_deref()))
                    .unwrap_or(Color32::LIGHT_BLUE);
                egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(card.heading()).size(16.0).strong().color(accent));
                    ui.label(card.details());
                });
                ui.add_space(6.0);
            }
        });
}

// ---------------------------------------------------------------------------
// Analysis block
// ---------------------------------------------------------------------------

pub fn analysis_block(ui: &mut Ui, analysis: &Analysis, mode: AnalysisMode) {
    ui.heading("Analysis & Insights");
    ui.label(RichText::new(mode.label()).italics());

    if let Some(heading) = analysis.heading() {
        ui.strong(heading);
    }
    for bullet in analysis.bullets() {
        ui.label(format!("• {bullet}"));
    }

    let Some(message) = analysis.message() else {
        return;
    };
    let color = match analysis {
        Analysis::Recommendation { .. } => Color32::LIGHT_GREEN,
        _ => Color32::YELLOW,
    };
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.label(RichText::new(message).color(color));
    });
}
