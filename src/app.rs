use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, summary};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, chart, cards, analysis ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &self.state);
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.view else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a titles dataset to begin  (File → Open…)");
        });
        return;
    };
    let color_map = state.color_map.as_ref();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(egui::RichText::new("Netflix Movie Recommendation System").size(24.0));
            ui.add_space(8.0);

            summary::metrics_strip(ui, &view.metrics);
            ui.separator();

            plot::top_titles_chart(ui, view, color_map);
            ui.separator();

            summary::result_cards(ui, view, color_map);
            ui.separator();

            summary::analysis_block(ui, &view.analysis, view.selection.analysis);

            ui.separator();
            ui.small("📽 Watchtime Dashboard");
        });
}
