use std::path::Path;

use anyhow::Result;

use crate::color::ColorMap;
use crate::data::filter::{FilterSelection, init_selection};
use crate::data::loader::load_file;
use crate::data::model::Dataset;
use crate::view::DashboardView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Current user selection; replaced wholesale on every change.
    pub selection: FilterSelection,

    /// Result of the last pipeline run over `dataset` with `selection`.
    pub view: Option<DashboardView>,

    /// Genre colours for bars and cards.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(selection: FilterSelection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Load `path` and make it the current dataset. On error the previous
    /// dataset stays in place.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let dataset = load_file(path)?;
        log::info!(
            "Loaded {} titles with {} distinct genres from {}",
            dataset.len(),
            dataset.genres.len(),
            path.display()
        );
        if dataset.is_empty() {
            log::warn!("{} contains no titles", path.display());
        }
        self.set_dataset(dataset);
        Ok(())
    }

    /// Ingest a newly loaded dataset, initialise the genre and colours.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection = init_selection(&dataset, self.selection.clone());
        self.color_map = Some(ColorMap::new(&dataset.genres));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute();
    }

    /// Swap in a new selection; re-runs the pipeline only if it changed.
    pub fn apply_selection(&mut self, selection: FilterSelection) {
        if selection != self.selection {
            self.selection = selection;
            self.recompute();
        }
    }

    /// Re-run filter → sort → aggregate over the whole dataset.
    pub fn recompute(&mut self) {
        self.view = self
            .dataset
            .as_ref()
            .map(|ds| DashboardView::build(ds, &self.selection));
        if let Some(view) = &self.view {
            log::debug!(
                "Recomputed view for {:?}: {} record(s)",
                self.selection,
                view.metrics.count
            );
        }
    }
}
