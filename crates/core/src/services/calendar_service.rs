use chrono::Datelike;

use crate::errors::CoreError;
use crate::models::calendar::{MonthMatrix, Week, WeekStart, YearMonth};

/// Lays a month out as a padded grid of seven-day weeks.
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Build the grid for `(year, month0)`, `month0` being zero-based.
    pub fn build(
        &self,
        year: i32,
        month0: u32,
        week_start: WeekStart,
    ) -> Result<MonthMatrix, CoreError> {
        let month = YearMonth::new(year, month0)?;
        Ok(self.build_for(month, week_start))
    }

    /// Build the grid for an already-validated month.
    ///
    /// Leading slots before the 1st and trailing slots after the last day are
    /// `None`; every week has exactly seven slots.
    #[must_use]
    pub fn build_for(&self, month: YearMonth, week_start: WeekStart) -> MonthMatrix {
        let first = month.first_day();
        let lead = week_start.slot_of(first.weekday());

        let mut weeks: Vec<Week> = Vec::with_capacity(6);
        let mut week: Week = [None; 7];
        let mut slot = lead;

        for date in first.iter_days().take(month.days_in_month() as usize) {
            week[slot] = Some(date);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }

        MonthMatrix {
            month,
            week_start,
            weeks,
        }
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
