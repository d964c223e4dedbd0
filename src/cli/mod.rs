pub mod day;
pub mod init;
pub mod month;
pub mod record;
pub mod status;

use clap::{Parser, Subcommand};

use crate::error::{Result, TillyError};

/// Accepts ISO `YYYY-MM-DD` or the display form `DD/MM/YYYY`; returns the
/// storage form.
pub(crate) fn parse_date_arg(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%d/%m/%Y") {
        return Ok(d.format("%Y-%m-%d").to_string());
    }
    Err(TillyError::Other(format!(
        "invalid date '{raw}' (expected YYYY-MM-DD or DD/MM/YYYY)"
    )))
}

pub(crate) fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[derive(Parser)]
#[command(name = "tilly", about = "Daily cash-register reconciliation for small shops.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up tilly: choose a data directory and create the ledger sheet.
    Init {
        /// Path for tilly data (default: ~/Documents/tilly)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Show one day's closings: per-method totals, entries, and net.
    Day {
        /// Date: YYYY-MM-DD or DD/MM/YYYY (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Record (or overwrite) an employee's closing for a day.
    Record {
        /// Date: YYYY-MM-DD or DD/MM/YYYY
        date: String,
        /// Employee name
        employee: String,
        /// Cash collected
        #[arg(long, default_value_t = 0.0)]
        cash: f64,
        /// Debit-card total
        #[arg(long, default_value_t = 0.0)]
        debit: f64,
        /// Credit-card total
        #[arg(long, default_value_t = 0.0)]
        credit: f64,
        /// Pix instant-transfer total
        #[arg(long, default_value_t = 0.0)]
        pix: f64,
        /// Drawer shortage
        #[arg(long, default_value_t = 0.0)]
        breakage: f64,
        /// Cash withdrawn from the drawer
        #[arg(long, default_value_t = 0.0)]
        withdrawal: f64,
        /// Justification / note
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Remove an employee's closing from a day.
    Remove {
        /// Date: YYYY-MM-DD or DD/MM/YYYY
        date: String,
        /// Employee name
        employee: String,
    },
    /// Delete every closing for a day.
    Clear {
        /// Date: YYYY-MM-DD or DD/MM/YYYY
        date: String,
    },
    /// Monthly rollup: totals, breakage by employee, day stats.
    Month {
        /// Month key MM/YYYY (default: latest month with entries)
        month: Option<String>,
    },
    /// Show data directory, ledger location, and summary counts.
    Status,
}
