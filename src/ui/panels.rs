use eframe::egui::{self, Color32, ComboBox, RichText, ScrollArea, Ui};

use crate::data::filter::{AnalysisMode, FIRST_SELECTABLE_YEAR, LAST_SELECTABLE_YEAR, ViewOrder};
use crate::data::model::ContentType;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
///
/// Widgets edit a copy of the selection; the copy is handed back to the
/// state once, after all widgets ran.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let genres = &dataset.genres;
    let mut next = state.selection.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Select Type");
            for kind in ContentType::ALL {
                ui.radio_value(&mut next.content_type, kind, kind.label());
            }
            ui.separator();

            ui.strong("Select Genre");
            ComboBox::from_id_salt("genre")
                .selected_text(next.genre.clone())
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for genre in genres {
                        ui.selectable_value(&mut next.genre, genre.clone(), genre.as_str());
                    }
                });
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Contains:");
                ui.text_edit_singleline(&mut next.genre);
            });
            ui.separator();

            year_selector(ui, "start_year", "Select Start Year", &mut next.start_year);
            year_selector(ui, "end_year", "Select End Year", &mut next.end_year);
            ui.separator();

            ui.strong("Select Viewing Preference");
            for order in ViewOrder::ALL {
                ui.radio_value(&mut next.order, order, order.label());
            }
            ui.separator();

            ui.strong("Select Analysis Type");
            ComboBox::from_id_salt("analysis")
                .selected_text(next.analysis.label())
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for mode in AnalysisMode::ALL {
                        ui.selectable_value(&mut next.analysis, mode, mode.label());
                    }
                });
        });

    state.apply_selection(next);
}

fn year_selector(ui: &mut Ui, id: &str, label: &str, year: &mut i32) {
    ui.strong(label);
    ComboBox::from_id_salt(id)
        .selected_text(year.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for candidate in FIRST_SELECTABLE_YEAR..=LAST_SELECTABLE_YEAR {
                ui.selectable_value(&mut *year, candidate, candidate.to_string());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(view)) = (&state.dataset, &state.view) {
            ui.label(format!(
                "{} titles loaded, {} matching",
                ds.len(),
                view.metrics.count
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open titles dataset")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load_path(&path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
