use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// MetricKind – which training metric to plot
// ---------------------------------------------------------------------------

/// The metrics this tool knows how to plot, each tied to one column of a
/// YOLOv8 `results.csv` and a human-readable title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Precision,
    Recall,
    Map,
}

impl MetricKind {
    /// Normalized column name in the results file.
    pub fn column(&self) -> &'static str {
        match self {
            MetricKind::Precision => "metrics/precision(B)",
            MetricKind::Recall => "metrics/recall(B)",
            MetricKind::Map => "metrics/mAP50(B)",
        }
    }

    /// Display title used for the y-axis label and the window caption.
    pub fn title(&self) -> &'static str {
        match self {
            MetricKind::Precision => "Precision",
            MetricKind::Recall => "Recall",
            MetricKind::Map => "mAP50",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[derive(Debug, Error)]
#[error("unknown metric '{0}', expected one of: precision, recall, map")]
pub struct UnknownMetric(pub String);

impl FromStr for MetricKind {
    type Err = UnknownMetric;

    /// Keys resolve case-insensitively (`PRECISION` == `precision`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "precision" => Ok(MetricKind::Precision),
            "recall" => Ok(MetricKind::Recall),
            "map" => Ok(MetricKind::Map),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_resolve_case_insensitively() {
        assert_eq!("precision".parse::<MetricKind>().unwrap(), MetricKind::Precision);
        assert_eq!("PRECISION".parse::<MetricKind>().unwrap(), MetricKind::Precision);
        assert_eq!("Recall".parse::<MetricKind>().unwrap(), MetricKind::Recall);
        assert_eq!("mAp".parse::<MetricKind>().unwrap(), MetricKind::Map);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "f1".parse::<MetricKind>().unwrap_err();
        assert!(err.to_string().contains("f1"));
    }

    #[test]
    fn column_and_title_mappings() {
        assert_eq!(MetricKind::Precision.column(), "metrics/precision(B)");
        assert_eq!(MetricKind::Recall.column(), "metrics/recall(B)");
        assert_eq!(MetricKind::Map.column(), "metrics/mAP50(B)");
        assert_eq!(MetricKind::Map.title(), "mAP50");
    }
}
