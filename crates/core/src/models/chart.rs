use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single data point for chart rendering.
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// The trading day this point belongs to
    pub date: NaiveDate,

    /// Daily PnL, or the running total for cumulative series
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}
