use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings};
use crate::sheet::{CsvSheet, Sheet};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = dir;
    }

    let dir = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&dir)?;

    let ledger = dir.join("ledger.csv");
    if !ledger.exists() {
        // An empty table with the canonical header row.
        CsvSheet::new(&ledger).write(&[])?;
        println!("Created ledger: {}", ledger.display());
    } else {
        println!("Ledger already exists: {}", ledger.display());
    }

    save_settings(&settings)?;
    println!("Data dir: {}", dir.display());
    println!("Ready. Try `tilly day` or `tilly record`.");
    Ok(())
}
