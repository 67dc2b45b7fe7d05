mod app;
mod color;
mod config;
mod data;
mod logging;
mod report;
mod state;
mod ui;
mod view;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;

use app::DashboardApp;
use config::{Args, OutputFormat};
use state::AppState;

fn main() -> Result<()> {
    logging::setup_logging();

    let args = Args::parse();
    let mut state = AppState::new(args.selection());

    // A dataset named at startup must load; the process aborts otherwise.
    if let Some(path) = &args.dataset {
        state.load_path(path)?;
    }

    if args.headless {
        print_report(&state, args.format)
    } else {
        run_window(state)
    }
}

fn print_report(state: &AppState, format: OutputFormat) -> Result<()> {
    let view = state.view.as_ref().context("no dataset loaded")?;
    match format {
        OutputFormat::Text => print!("{}", report::render_text(view)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(view).context("serialising report")?
        ),
    }
    Ok(())
}

fn run_window(state: AppState) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Watchtime Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
    .map_err(|e| anyhow!("running window: {e}"))
}
