use crate::aggregate;
use crate::error::Result;
use crate::settings::{ledger_path, load_settings};
use crate::sheet::CsvSheet;
use crate::store::LedgerStore;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let ledger = ledger_path();

    println!("Data dir:   {}", settings.data_dir);
    println!("Ledger:     {}", ledger.display());
    println!("Day slots:  {}", settings.min_day_rows);

    if ledger.exists() {
        let store = LedgerStore::new(CsvSheet::new(&ledger));
        let all = store.load();
        let months = aggregate::group_by_month(&all);
        let days: std::collections::BTreeSet<&str> =
            all.iter().map(|e| e.date.as_str()).collect();

        println!();
        println!("Rows:       {}", all.len());
        println!("Days:       {}", days.len());
        println!("Months:     {}", months.len());
    } else {
        println!();
        println!("Ledger not found. Run `tilly init` to set up.");
    }

    Ok(())
}
