//! Temperature summary aggregation.

use serde::{Deserialize, Serialize};

/// Minimum, maximum, and arithmetic mean of a set of temperature
/// observations. Serialized with the dataset's conventional field names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TobsSummary {
    #[serde(rename = "TMIN")]
    pub tmin: f64,
    #[serde(rename = "TMAX")]
    pub tmax: f64,
    #[serde(rename = "TAVG")]
    pub tavg: f64,
}

/// Error type for summary computation.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// Min/max/mean over zero observations is undefined.
    #[error("cannot summarize an empty set of temperature observations")]
    EmptyInput,
}

/// Compute min, max, and arithmetic mean over `values` in a single pass.
///
/// Native f64 arithmetic throughout; no rounding is applied. Returns
/// [`SummaryError::EmptyInput`] for an empty slice — callers that want a
/// structured not-found response must check for emptiness first.
pub fn summarize(values: &[f64]) -> Result<TobsSummary, SummaryError> {
    let (first, rest) = values.split_first().ok_or(SummaryError::EmptyInput)?;

    let mut tmin = *first;
    let mut tmax = *first;
    let mut sum = *first;
    for &v in rest {
        tmin = tmin.min(v);
        tmax = tmax.max(v);
        sum += v;
    }

    Ok(TobsSummary {
        tmin,
        tmax,
        tavg: sum / values.len() as f64,
    })
}
