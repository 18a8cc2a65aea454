use eframe::egui;

use crate::data::model::{MetricSeries, SeriesSummary};
use crate::metric::MetricKind;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// The plot window. Everything is computed before the window opens, so the
/// state is immutable: one series, one summary, redrawn every frame.
pub struct MetricPlotApp {
    metric: MetricKind,
    source: String,
    series: MetricSeries,
    summary: SeriesSummary,
}

impl MetricPlotApp {
    pub fn new(
        metric: MetricKind,
        source: String,
        series: MetricSeries,
        summary: SeriesSummary,
    ) -> Self {
        Self {
            metric,
            source,
            series,
            summary,
        }
    }
}

impl eframe::App for MetricPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: summary strip ----
        egui::TopBottomPanel::top("summary_bar").show(ctx, |ui| {
            ui.horizontal(|ui: &mut egui::Ui| {
                ui.label(format!(
                    "{} — last {} epochs of {}",
                    self.metric.title(),
                    self.series.len(),
                    self.source
                ));
                ui.separator();
                ui.label(format!(
                    "Max: {:.2} @ epoch {}",
                    self.summary.max_value, self.summary.max_epoch
                ));
                ui.separator();
                ui.label(format!(
                    "Final: {:.2} @ epoch {}",
                    self.summary.final_value, self.summary.final_epoch
                ));
            });
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::metric_plot(ui, self.metric.title(), &self.series, &self.summary);
        });
    }
}
