use serde::{Deserialize, Serialize};

use super::calendar::YearMonth;
use super::chart::SeriesPoint;

/// Monthly summary of the journal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Sum of all recorded PnL in the month (missing values count as 0)
    pub total: f64,

    /// Days with a strictly positive PnL
    pub win_days: usize,

    /// Days with a strictly negative PnL
    pub loss_days: usize,

    /// Mean winning day, rounded to a whole unit. 0 when there are no wins.
    pub avg_win: f64,

    /// Mean losing day (≤ 0), rounded to a whole unit. 0 when there are no losses.
    pub avg_loss: f64,

    /// Number of journal entries in the month, notes-only days included
    pub active_days: usize,
}

/// Everything a month view needs, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthReport {
    #[serde(with = "year_month_text")]
    pub month: YearMonth,
    pub stats: MonthlyStats,
    /// One slot per calendar week; `None` when the week has no recorded PnL
    pub weekly_totals: Vec<Option<f64>>,
    pub daily: Vec<SeriesPoint>,
    pub cumulative: Vec<SeriesPoint>,
}

mod year_month_text {
    use super::YearMonth;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(month: &YearMonth, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(month)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<YearMonth, D::Error> {
        let text = String::deserialize(d)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
