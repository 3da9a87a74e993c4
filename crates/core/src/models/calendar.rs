use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Which weekday occupies slot 0 of every calendar week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// The weekday shown in slot 0.
    #[must_use]
    pub fn first_weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Slot index (0..7) of `weekday` under this convention.
    #[must_use]
    pub fn slot_of(self, weekday: Weekday) -> usize {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday() as usize,
            WeekStart::Monday => weekday.num_days_from_monday() as usize,
        }
    }
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekStart::Sunday => write!(f, "sunday"),
            WeekStart::Monday => write!(f, "monday"),
        }
    }
}

/// A calendar month. `month0` is zero-based (January = 0).
///
/// Text form is `YYYY-MM` with a one-based month, the same prefix every
/// date key in that month starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month0: u32,
}

impl YearMonth {
    /// Build a month, rejecting `month0 > 11` and years chrono can't represent.
    pub fn new(year: i32, month0: u32) -> Result<Self, CoreError> {
        if month0 > 11 {
            return Err(CoreError::InvalidMonth(format!(
                "month index {month0} out of range (expected 0..=11)"
            )));
        }
        if NaiveDate::from_ymd_opt(year, month0 + 1, 1).is_none() {
            return Err(CoreError::InvalidMonth(format!("year {year} out of range")));
        }
        Ok(Self { year, month0 })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index.
    #[must_use]
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-based month number.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        // Validated in `new` / derived from a real date in `from_date`.
        NaiveDate::from_ymd_opt(self.year, self.month(), 1).unwrap_or(NaiveDate::MIN)
    }

    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        let (year, month) = if self.month0 == 11 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month() + 1)
        };
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(next_first) => (next_first - self.first_day()).num_days() as u32,
            // December of the last representable year.
            None => 31,
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// The following month, rolling over into the next year after December.
    /// Saturates at the last month chrono can represent.
    #[must_use]
    pub fn next(&self) -> Self {
        let next = if self.month0 == 11 {
            Self::new(self.year + 1, 0)
        } else {
            Self::new(self.year, self.month0 + 1)
        };
        next.unwrap_or(*self)
    }

    /// The preceding month, rolling back into the previous year before January.
    /// Saturates at the first month chrono can represent.
    #[must_use]
    pub fn prev(&self) -> Self {
        let prev = if self.month0 == 0 {
            Self::new(self.year - 1, 11)
        } else {
            Self::new(self.year, self.month0 - 1)
        };
        prev.unwrap_or(*self)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month())
    }
}

impl std::str::FromStr for YearMonth {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidMonth(format!("'{s}': expected YYYY-MM"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Self::new(year, month - 1)
    }
}

/// One row of the calendar: exactly seven slots, `None` for padding.
pub type Week = [Option<NaiveDate>; 7];

/// Padded week-by-week layout of a single month. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthMatrix {
    pub month: YearMonth,
    pub week_start: WeekStart,
    pub weeks: Vec<Week>,
}

impl MonthMatrix {
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    #[must_use]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// All concrete dates in grid order.
    #[must_use]
    pub fn days(&self) -> Vec<NaiveDate> {
        self.weeks.iter().flatten().flatten().copied().collect()
    }

    /// Index of the week holding `date`, if the date is in this month.
    #[must_use]
    pub fn week_of(&self, date: NaiveDate) -> Option<usize> {
        self.weeks
            .iter()
            .position(|week| week.iter().any(|slot| *slot == Some(date)))
    }
}
