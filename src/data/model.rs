use std::collections::BTreeMap;

use thiserror::Error;

// ---------------------------------------------------------------------------
// MetricsTable – the full loaded results file
// ---------------------------------------------------------------------------

/// The parsed training log: one row per epoch, numeric columns keyed by
/// normalized header name. Built once by the loader, immutable afterwards.
#[derive(Debug, Clone)]
pub struct MetricsTable {
    /// The `epoch` column, in file order.
    pub epochs: Vec<i64>,
    /// Every other column, same length as `epochs`.
    pub columns: BTreeMap<String, Vec<f64>>,
}

#[derive(Debug, Error)]
#[error("CSV has no column named '{0}'")]
pub struct MissingColumn(pub String);

impl MetricsTable {
    /// Number of rows (epochs) in the table.
    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// Extract the last `epochs` rows of `column` as an ordered series.
    /// `epochs <= 0` means all rows; a count beyond the row total yields
    /// every available row.
    pub fn series(&self, column: &str, epochs: i64) -> Result<MetricSeries, MissingColumn> {
        let values = self
            .columns
            .get(column)
            .ok_or_else(|| MissingColumn(column.to_string()))?;

        let count = if epochs > 0 { epochs as usize } else { self.len() };
        let start = self.len().saturating_sub(count);

        let points = self.epochs[start..]
            .iter()
            .copied()
            .zip(values[start..].iter().copied())
            .collect();

        Ok(MetricSeries { points })
    }
}

// ---------------------------------------------------------------------------
// MetricSeries – the slice actually plotted
// ---------------------------------------------------------------------------

/// Ordered (epoch, value) pairs, oldest to newest.
#[derive(Debug, Clone)]
pub struct MetricSeries {
    pub points: Vec<(i64, f64)>,
}

/// Statistics annotated on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub max_epoch: i64,
    pub max_value: f64,
    pub final_epoch: i64,
    pub final_value: f64,
    /// Smallest value in the series, used for the y-axis lower bound.
    pub min_value: f64,
}

impl MetricSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Compute the summary statistics, or `None` for an empty series.
    /// Ties on the maximum resolve to the earliest epoch (strict `>` scan).
    pub fn summary(&self) -> Option<SeriesSummary> {
        let &(first_epoch, first_value) = self.points.first()?;
        let &(final_epoch, final_value) = self.points.last()?;

        let mut max_epoch = first_epoch;
        let mut max_value = first_value;
        let mut min_value = first_value;

        for &(epoch, value) in &self.points[1..] {
            if value > max_value {
                max_value = value;
                max_epoch = epoch;
            }
            if value < min_value {
                min_value = value;
            }
        }

        Some(SeriesSummary {
            max_epoch,
            max_value,
            final_epoch,
            final_value,
            min_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP_COL: &str = "metrics/mAP50(B)";

    /// Table with epochs 1..=n and mAP values 0.10, 0.11, ...
    fn linear_table(n: usize) -> MetricsTable {
        let epochs: Vec<i64> = (1..=n as i64).collect();
        let values: Vec<f64> = (0..n).map(|i| 0.10 + i as f64 * 0.01).collect();
        let mut columns = BTreeMap::new();
        columns.insert(MAP_COL.to_string(), values);
        MetricsTable { epochs, columns }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn slices_the_last_k_rows_in_order() {
        let table = linear_table(50);
        let series = table.series(MAP_COL, 10).unwrap();

        assert_eq!(series.len(), 10);
        assert_eq!(series.points.first().unwrap().0, 41);
        assert!(approx(series.points.first().unwrap().1, 0.50));
        assert_eq!(series.points.last().unwrap().0, 50);
        assert!(approx(series.points.last().unwrap().1, 0.59));
    }

    #[test]
    fn nonpositive_count_yields_all_rows() {
        let table = linear_table(50);
        assert_eq!(table.series(MAP_COL, 0).unwrap().len(), 50);
        assert_eq!(table.series(MAP_COL, -1).unwrap().len(), 50);
    }

    #[test]
    fn oversized_count_saturates_to_row_total() {
        let table = linear_table(50);
        let series = table.series(MAP_COL, 500).unwrap();
        assert_eq!(series.len(), 50);
        assert_eq!(series.points.first().unwrap().0, 1);
    }

    #[test]
    fn missing_column_is_an_error() {
        let table = linear_table(5);
        let err = table.series("metrics/recall(B)", -1).unwrap_err();
        assert!(err.to_string().contains("metrics/recall(B)"));
    }

    #[test]
    fn summary_reports_max_final_and_min() {
        let series = MetricSeries {
            points: vec![(1, 0.1), (2, 0.5), (3, 0.3), (4, 0.5), (5, 0.2)],
        };
        let summary = series.summary().unwrap();

        // First occurrence wins the tie at 0.5.
        assert_eq!(summary.max_epoch, 2);
        assert!(approx(summary.max_value, 0.5));
        assert_eq!(summary.final_epoch, 5);
        assert!(approx(summary.final_value, 0.2));
        assert!(approx(summary.min_value, 0.1));
    }

    #[test]
    fn summary_of_empty_series_is_none() {
        let series = MetricSeries { points: vec![] };
        assert!(series.summary().is_none());
    }

    #[test]
    fn fifty_epoch_scenario() {
        let table = linear_table(50);
        let series = table.series(MAP_COL, 10).unwrap();
        let summary = series.summary().unwrap();

        assert!(approx(summary.max_value, 0.59));
        assert_eq!(summary.max_epoch, 50);
        assert!(approx(summary.final_value, 0.59));
        assert_eq!(summary.final_epoch, 50);
        assert!(approx(summary.min_value, 0.50));
    }
}
