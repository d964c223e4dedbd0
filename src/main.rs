mod aggregate;
mod cli;
mod error;
mod fmt;
mod models;
mod settings;
mod sheet;
mod store;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Day { date } => cli::day::run(date),
        Commands::Record {
            date,
            employee,
            cash,
            debit,
            credit,
            pix,
            breakage,
            withdrawal,
            note,
        } => cli::record::run(
            &date, &employee, cash, debit, credit, pix, breakage, withdrawal, &note,
        ),
        Commands::Remove { date, employee } => cli::record::remove(&date, &employee),
        Commands::Clear { date } => cli::record::clear(&date),
        Commands::Month { month } => cli::month::run(month),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
