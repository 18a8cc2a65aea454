/// Data layer: the metrics table and its CSV loader.
///
/// Architecture:
/// ```text
///  results.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, normalize headers → MetricsTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MetricsTable  │  epoch column + numeric columns
///   └──────────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MetricSeries  │  last-N slice of one column → SeriesSummary
///   └──────────────┘
/// ```

pub mod loader;
pub mod model;
