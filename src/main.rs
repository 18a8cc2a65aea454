mod app;
mod data;
mod metric;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use eframe::egui;

use app::MetricPlotApp;
use metric::MetricKind;

/// Plot one metric from a YOLOv8 training results CSV.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the results CSV file
    #[arg(long, value_hint = ValueHint::FilePath)]
    path: PathBuf,

    /// Metric to plot: precision, recall or map (case-insensitive)
    #[arg(long)]
    metric: String,

    /// Plot only the last N epochs; zero or negative means all
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    epochs: i64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let metric: MetricKind = cli.metric.parse()?;

    println!("Loading {} data from {}...", metric.title(), cli.path.display());
    let table = data::loader::load_csv(&cli.path)?;
    log::info!(
        "Loaded {} rows with {} metric columns",
        table.len(),
        table.columns.len()
    );

    let epochs_quantity = if cli.epochs > 0 {
        cli.epochs as usize
    } else {
        table.len()
    };
    println!("Setting to plot the last {epochs_quantity} epochs...");

    let series = table
        .series(metric.column(), cli.epochs)
        .with_context(|| format!("selecting metric column in {}", cli.path.display()))?;
    let summary = series
        .summary()
        .context("CSV contained no data rows, nothing to plot")?;

    println!(
        "Plotting the max value and final value of the {} metric...",
        metric.title()
    );

    let window_title = format!("{} Metric Over Epochs", metric.title());
    let source = cli.path.display().to_string();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    println!("Displaying the plot!\nWaiting for the user to close the plot . . . ");
    eframe::run_native(
        &window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(MetricPlotApp::new(metric, source, series, summary)))),
    )
    .map_err(|e| anyhow::anyhow!("running the plot window: {e}"))?;

    println!("Program ended !");
    Ok(())
}
