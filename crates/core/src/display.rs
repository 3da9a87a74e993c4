//! Presentation helpers shared by front-ends: money formatting and weekday
//! headers. No currency conversion happens here.

use crate::models::calendar::WeekStart;

/// Placeholder shown for a week or day without recorded PnL.
pub const NO_VALUE: &str = "—";

/// Format a PnL value with sign, currency symbol, thousands separators and
/// two decimals: `+$1,234.50`, `-$40.00`, `$0.00`.
#[must_use]
pub fn format_pnl(value: f64, symbol: &str) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if cents == 0 {
        ""
    } else if value > 0.0 {
        "+"
    } else {
        "-"
    };
    format!(
        "{sign}{symbol}{}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Like [`format_pnl`], rendering `None` as [`NO_VALUE`].
#[must_use]
pub fn format_optional_pnl(value: Option<f64>, symbol: &str) -> String {
    match value {
        Some(v) => format_pnl(v, symbol),
        None => NO_VALUE.to_string(),
    }
}

/// Short weekday names in slot order for the given week start.
#[must_use]
pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
