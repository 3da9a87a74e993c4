//! pnl-journal — record daily profit and loss on a calendar and review
//! monthly statistics from the terminal.

mod config;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use pnl_journal_core::models::calendar::YearMonth;
use pnl_journal_core::models::entry::format_date_key;
use pnl_journal_core::storage::kv::FileStore;
use pnl_journal_core::PnlJournal;
use tracing::{info, Level};

use logging::{init_logging, LogFormat};

/// Manual PnL journal
#[derive(Debug, Parser)]
#[command(name = "pnl-journal", version, about)]
struct Cli {
    /// Directory holding the persisted journal
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Optional TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Startup query string, e.g. "reset=1" to wipe persisted data
    #[arg(long, global = true, default_value = "")]
    query: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the calendar, statistics and series for a month
    Show(MonthArgs),
    /// List a month's entries with their notes
    List(MonthArgs),
    /// Record PnL and/or notes for a day (both empty deletes the day)
    Set(SetArgs),
    /// Delete a day's entry
    Rm(RmArgs),
    /// Delete every entry
    Reset(ConfirmArgs),
}

#[derive(Debug, Args)]
struct MonthArgs {
    /// Month to display (YYYY-MM); defaults to the current month
    #[arg(long, short)]
    month: Option<YearMonth>,
}

#[derive(Debug, Args)]
struct SetArgs {
    /// Day to record (YYYY-MM-DD)
    date: NaiveDate,

    /// Profit (positive) or loss (negative) for the day
    #[arg(long, allow_hyphen_values = true)]
    pnl: Option<f64>,

    /// Free-text notes
    #[arg(long, default_value = "")]
    notes: String,
}

#[derive(Debug, Args)]
struct RmArgs {
    /// Day to delete (YYYY-MM-DD)
    date: NaiveDate,

    #[command(flatten)]
    confirm: ConfirmArgs,
}

#[derive(Debug, Args)]
struct ConfirmArgs {
    /// Confirm the destructive operation
    #[arg(long)]
    yes: bool,
}

impl ConfirmArgs {
    fn require(&self, what: &str) -> Result<()> {
        if !self.yes {
            bail!("refusing to {what} without --yes");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let settings = config::load_settings(cli.config.as_deref())?;
    let store = FileStore::open(&cli.data_dir)
        .with_context(|| format!("Failed to open data dir {}", cli.data_dir.display()))?;
    let today = Local::now().date_naive();

    let mut journal = PnlJournal::open_with_query(Box::new(store), settings, today, &cli.query)
        .context("Failed to open journal")?;
    info!(entries = journal.len(), "journal opened");

    run(&mut journal, cli.command)
}

fn run(journal: &mut PnlJournal, command: Command) -> Result<()> {
    let symbol = journal.settings().currency_symbol.clone();

    match command {
        Command::Show(args) => {
            if let Some(month) = args.month {
                journal.set_viewed_month(month);
            }
            let matrix = journal.month_matrix();
            let report = journal.report();
            print!(
                "{}",
                render::month_view(&matrix, journal.entries(), &report, &symbol)
            );
        }
        Command::List(args) => {
            if let Some(month) = args.month {
                journal.set_viewed_month(month);
            }
            let entries = journal.monthly_entries();
            if entries.is_empty() {
                println!("No entries in {}.", journal.viewed_month());
            } else {
                println!("{}", render::entries_table(&entries, &symbol));
            }
        }
        Command::Set(args) => {
            journal.upsert(args.date, args.pnl, args.notes);
            let key = format_date_key(args.date);
            match journal.entry(args.date) {
                Some(_) => println!("Saved {key}."),
                None => println!("Nothing to keep for {key}; entry removed."),
            }
        }
        Command::Rm(args) => {
            args.confirm.require("delete an entry")?;
            journal.remove(args.date);
            println!("Deleted {}.", format_date_key(args.date));
        }
        Command::Reset(confirm) => {
            confirm.require("reset the journal")?;
            journal.reset();
            println!("Journal cleared.");
        }
    }
    Ok(())
}
