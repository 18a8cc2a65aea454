use eframe::egui::{Align2, Color32, RichText, Ui, Vec2};
use egui_plot::{
    uniform_grid_spacer, Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, PlotUi, Points,
    Text,
};

use crate::data::model::{MetricSeries, SeriesSummary};

// ---------------------------------------------------------------------------
// Metric plot (central panel)
// ---------------------------------------------------------------------------

/// Spacing of labeled x-axis ticks, in epochs.
const EPOCH_TICK_STEP: f64 = 20.0;
/// Padding above and below the data range on the y axis.
const Y_PADDING: f64 = 0.05;
/// Vertical offset of the "Final" label above its marker.
const FINAL_LABEL_OFFSET: f64 = 0.01;

const SERIES_COLOR: Color32 = Color32::BLUE;
const SERIES_WIDTH: f32 = 2.0;
const MARKER_COLOR: Color32 = Color32::RED;
const MARKER_RADIUS: f32 = 4.0;
const LABEL_SIZE: f32 = 12.0;

/// Y-axis bounds: the data range padded by [`Y_PADDING`] on both sides.
pub fn y_bounds(summary: &SeriesSummary) -> (f64, f64) {
    (summary.min_value - Y_PADDING, summary.max_value + Y_PADDING)
}

/// Render the metric line chart with its max/final annotations.
pub fn metric_plot(ui: &mut Ui, title: &str, series: &MetricSeries, summary: &SeriesSummary) {
    let (y_min, y_max) = y_bounds(summary);

    Plot::new("metric_plot")
        .legend(Legend::default())
        .x_axis_label("Epochs")
        .y_axis_label(title)
        .x_grid_spacer(uniform_grid_spacer(|_| {
            [
                EPOCH_TICK_STEP * 10.0,
                EPOCH_TICK_STEP * 5.0,
                EPOCH_TICK_STEP,
            ]
        }))
        .include_y(y_min)
        .include_y(y_max)
        .set_margin_fraction(Vec2::ZERO)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = series
                .points
                .iter()
                .map(|&(epoch, value)| [epoch as f64, value])
                .collect();

            let line = Line::new(points)
                .name(title)
                .color(SERIES_COLOR)
                .width(SERIES_WIDTH);
            plot_ui.line(line);

            highlight(
                plot_ui,
                summary.max_epoch,
                summary.max_value,
                format!("Max: {:.2}", summary.max_value),
                0.0,
            );
            highlight(
                plot_ui,
                summary.final_epoch,
                summary.final_value,
                format!("Final: {:.2}", summary.final_value),
                FINAL_LABEL_OFFSET,
            );
        });
}

/// Red circular marker plus a text label anchored to its left.
fn highlight(plot_ui: &mut PlotUi, epoch: i64, value: f64, label: String, label_offset: f64) {
    let x = epoch as f64;

    plot_ui.points(
        Points::new(vec![[x, value]])
            .shape(MarkerShape::Circle)
            .radius(MARKER_RADIUS)
            .color(MARKER_COLOR),
    );

    plot_ui.text(
        Text::new(
            PlotPoint::new(x, value + label_offset),
            RichText::new(label).size(LABEL_SIZE),
        )
        .anchor(Align2::RIGHT_BOTTOM)
        .color(MARKER_COLOR),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_bounds_pad_the_data_range() {
        let summary = SeriesSummary {
            max_epoch: 50,
            max_value: 0.59,
            final_epoch: 50,
            final_value: 0.59,
            min_value: 0.50,
        };
        let (lo, hi) = y_bounds(&summary);
        assert!((lo - 0.45).abs() < 1e-9);
        assert!((hi - 0.64).abs() < 1e-9);
    }
}
