use crate::models::analytics::{MonthReport, MonthlyStats};
use crate::models::calendar::{MonthMatrix, YearMonth};
use crate::models::chart::SeriesPoint;
use crate::models::entry::{DateKey, Entry, EntryMap};

/// Folds the journal into per-month figures: totals, win/loss split,
/// weekly sums and chart series.
///
/// Every method is a pure function of its inputs.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Entries dated inside `month`, oldest first.
    #[must_use]
    pub fn monthly_entries<'a>(
        &self,
        entries: &'a EntryMap,
        month: YearMonth,
    ) -> Vec<(DateKey, &'a Entry)> {
        entries
            .range(month.first_day()..)
            .take_while(|(date, _)| month.contains(**date))
            .map(|(date, entry)| (*date, entry))
            .collect()
    }

    /// Monthly summary.
    ///
    /// Zero PnL counts as neither win nor loss; notes-only days still count
    /// toward `active_days`.
    #[must_use]
    pub fn stats(&self, entries: &EntryMap, month: YearMonth) -> MonthlyStats {
        let monthly = self.monthly_entries(entries, month);

        let mut total = 0.0;
        let mut win_sum = 0.0;
        let mut loss_sum = 0.0;
        let mut win_days = 0;
        let mut loss_days = 0;

        for (_, entry) in &monthly {
            let pnl = entry.pnl_or_zero();
            total += pnl;
            if pnl > 0.0 {
                win_sum += pnl;
                win_days += 1;
            } else if pnl < 0.0 {
                loss_sum += pnl;
                loss_days += 1;
            }
        }

        MonthlyStats {
            total,
            win_days,
            loss_days,
            avg_win: rounded_mean(win_sum, win_days),
            avg_loss: rounded_mean(loss_sum, loss_days),
            active_days: monthly.len(),
        }
    }

    /// Net PnL per calendar week, aligned with `matrix.weeks`.
    ///
    /// A week where no day has a numeric PnL is `None`, keeping "no data"
    /// distinct from a flat week.
    #[must_use]
    pub fn weekly_totals(&self, entries: &EntryMap, matrix: &MonthMatrix) -> Vec<Option<f64>> {
        matrix
            .weeks
            .iter()
            .map(|week| {
                week.iter()
                    .flatten()
                    .filter_map(|date| entries.get(date).and_then(|e| e.pnl))
                    .fold(None, |acc, pnl| Some(acc.unwrap_or(0.0) + pnl))
            })
            .collect()
    }

    /// One point per monthly entry; missing PnL plots as 0.
    #[must_use]
    pub fn daily_series(&self, entries: &EntryMap, month: YearMonth) -> Vec<SeriesPoint> {
        self.monthly_entries(entries, month)
            .into_iter()
            .map(|(date, entry)| SeriesPoint::new(date, entry.pnl_or_zero()))
            .collect()
    }

    /// Running total of [`daily_series`](Self::daily_series).
    #[must_use]
    pub fn cumulative_series(&self, entries: &EntryMap, month: YearMonth) -> Vec<SeriesPoint> {
        running_total(&self.daily_series(entries, month))
    }

    /// All month-view figures at once.
    #[must_use]
    pub fn month_report(&self, entries: &EntryMap, matrix: &MonthMatrix) -> MonthReport {
        let month = matrix.month;
        let daily = self.daily_series(entries, month);
        let cumulative = running_total(&daily);

        MonthReport {
            month,
            stats: self.stats(entries, month),
            weekly_totals: self.weekly_totals(entries, matrix),
            daily,
            cumulative,
        }
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Running sum of `daily`, point for point.
fn running_total(daily: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let mut running = 0.0;
    daily
        .iter()
        .map(|point| {
            running += point.value;
            SeriesPoint::new(point.date, running)
        })
        .collect()
}

/// `sum / count` rounded half-up to a whole unit; 0 when `count` is 0.
fn rounded_mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let mean = sum / count as f64;
    let rounded = (mean + 0.5).floor();
    // Normalise -0.0 so it prints and compares as plain zero.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
