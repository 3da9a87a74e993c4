//! Text rendering of the month view: calendar grid, statistics, series.

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use chrono::Datelike;
use pnl_journal_core::display::{format_optional_pnl, format_pnl, weekday_labels, NO_VALUE};
use pnl_journal_core::models::analytics::{MonthReport, MonthlyStats};
use pnl_journal_core::models::calendar::MonthMatrix;
use pnl_journal_core::models::chart::SeriesPoint;
use pnl_journal_core::models::entry::{format_date_key, DateKey, Entry, EntryMap};

fn pnl_color(value: f64) -> Color {
    if value > 0.0 {
        Color::Green
    } else if value < 0.0 {
        Color::Red
    } else {
        Color::Reset
    }
}

/// Month grid: one row per week, a day cell shows the day number and its
/// PnL (or `*` for notes-only days), last column is the week total.
pub fn calendar_table(
    matrix: &MonthMatrix,
    entries: &EntryMap,
    weekly_totals: &[Option<f64>],
    symbol: &str,
) -> Table {
    let mut header: Vec<Cell> = weekday_labels(matrix.week_start)
        .iter()
        .map(|label| Cell::new(label).add_attribute(Attribute::Bold))
        .collect();
    header.push(Cell::new("Week").add_attribute(Attribute::Bold));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for (week, total) in matrix.weeks().iter().zip(weekly_totals) {
        let mut row: Vec<Cell> = week
            .iter()
            .map(|slot| match slot {
                None => Cell::new(""),
                Some(date) => day_cell(*date, entries.get(date), symbol),
            })
            .collect();
        let total_cell = match total {
            Some(v) => Cell::new(format_pnl(*v, symbol)).fg(pnl_color(*v)),
            None => Cell::new(NO_VALUE),
        };
        row.push(total_cell.add_attribute(Attribute::Bold));
        table.add_row(row);
    }

    table
}

fn day_cell(date: DateKey, entry: Option<&Entry>, symbol: &str) -> Cell {
    let day = date.day();
    match entry {
        None => Cell::new(day),
        Some(Entry { pnl: Some(v), .. }) => {
            Cell::new(format!("{day}\n{}", format_pnl(*v, symbol))).fg(pnl_color(*v))
        }
        Some(_) => Cell::new(format!("{day}\n*")),
    }
}

/// Statistics block as `label: value` lines.
pub fn stats_text(stats: &MonthlyStats, symbol: &str) -> String {
    [
        format!("Total:       {}", format_pnl(stats.total, symbol)),
        format!("Win days:    {}", stats.win_days),
        format!("Loss days:   {}", stats.loss_days),
        format!("Avg win:     {}", format_pnl(stats.avg_win, symbol)),
        format!("Avg loss:    {}", format_pnl(stats.avg_loss, symbol)),
        format!("Active days: {}", stats.active_days),
    ]
    .join("\n")
}

/// Daily and cumulative series side by side.
pub fn series_table(daily: &[SeriesPoint], cumulative: &[SeriesPoint], symbol: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Date").add_attribute(Attribute::Bold),
            Cell::new("Daily").add_attribute(Attribute::Bold),
            Cell::new("Cumulative").add_attribute(Attribute::Bold),
        ]);

    for (day, running) in daily.iter().zip(cumulative) {
        table.add_row(vec![
            Cell::new(format_date_key(day.date)),
            Cell::new(format_pnl(day.value, symbol)).fg(pnl_color(day.value)),
            Cell::new(format_pnl(running.value, symbol)).fg(pnl_color(running.value)),
        ]);
    }
    table
}

/// Entries with their notes, for the `list` command.
pub fn entries_table(entries: &[(DateKey, &Entry)], symbol: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Date").add_attribute(Attribute::Bold),
            Cell::new("PnL").add_attribute(Attribute::Bold),
            Cell::new("Notes").add_attribute(Attribute::Bold),
            Cell::new("Updated").add_attribute(Attribute::Bold),
        ]);

    for (date, entry) in entries {
        table.add_row(vec![
            Cell::new(format_date_key(*date)),
            Cell::new(format_optional_pnl(entry.pnl, symbol)),
            Cell::new(&entry.notes),
            Cell::new(entry.updated_at.format("%Y-%m-%d %H:%M").to_string()),
        ]);
    }
    table
}

/// Full month view.
pub fn month_view(
    matrix: &MonthMatrix,
    entries: &EntryMap,
    report: &MonthReport,
    symbol: &str,
) -> String {
    let mut out = format!("PnL Journal — {}\n\n", report.month);
    out.push_str(&calendar_table(matrix, entries, &report.weekly_totals, symbol).to_string());
    out.push_str("\n\n");
    out.push_str(&stats_text(&report.stats, symbol));
    out.push('\n');
    if report.daily.is_empty() {
        out.push_str("\nNo entries this month.\n");
    } else {
        out.push('\n');
        out.push_str(&series_table(&report.daily, &report.cumulative, symbol).to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use pnl_journal_core::models::calendar::WeekStart;
    use pnl_journal_core::services::aggregation_service::AggregationService;
    use pnl_journal_core::services::calendar_service::CalendarService;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> EntryMap {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let mut map = EntryMap::new();
        map.insert(d(2024, 3, 1), Entry::new(Some(100.0), "breakout", now));
        map.insert(d(2024, 3, 2), Entry::new(Some(-40.0), "", now));
        map.insert(d(2024, 3, 20), Entry::new(None, "sat out", now));
        map
    }

    #[test]
    fn stats_text_lists_every_figure() {
        let stats = MonthlyStats {
            total: 60.0,
            win_days: 1,
            loss_days: 1,
            avg_win: 100.0,
            avg_loss: -40.0,
            active_days: 3,
        };
        let text = stats_text(&stats, "$");
        assert!(text.contains("Total:       +$60.00"));
        assert!(text.contains("Avg loss:    -$40.00"));
        assert!(text.contains("Active days: 3"));
    }

    #[test]
    fn calendar_has_one_row_per_week() {
        let matrix = CalendarService::new().build(2024, 2, WeekStart::Sunday).unwrap();
        let entries = sample();
        let totals = AggregationService::new().weekly_totals(&entries, &matrix);
        let table = calendar_table(&matrix, &entries, &totals, "$");
        assert_eq!(table.row_iter().count(), matrix.week_count());
    }

    #[test]
    fn month_view_mentions_month_and_series() {
        let matrix = CalendarService::new().build(2024, 2, WeekStart::Monday).unwrap();
        let entries = sample();
        let report = AggregationService::new().month_report(&entries, &matrix);
        let view = month_view(&matrix, &entries, &report, "$");
        assert!(view.contains("2024-03"));
        assert!(view.contains("2024-03-20"));
        assert!(view.contains("+$60.00"));
    }

    #[test]
    fn empty_month_says_so() {
        let matrix = CalendarService::new().build(2024, 5, WeekStart::Sunday).unwrap();
        let entries = sample();
        let report = AggregationService::new().month_report(&entries, &matrix);
        let view = month_view(&matrix, &entries, &report, "$");
        assert!(view.contains("No entries this month."));
    }
}
