use crate::cli::parse_date_arg;
use crate::error::Result;
use crate::fmt::{display_date, money};
use crate::models::Entry;
use crate::settings::ledger_path;
use crate::sheet::CsvSheet;
use crate::store::{self, LedgerStore};

#[allow(clippy::too_many_arguments)]
pub fn run(
    date: &str,
    employee: &str,
    cash: f64,
    debit: f64,
    credit: f64,
    pix: f64,
    breakage: f64,
    withdrawal: f64,
    note: &str,
) -> Result<()> {
    let date = parse_date_arg(date)?;
    let store = LedgerStore::new(CsvSheet::new(ledger_path()));

    let all = store.load();
    let mut day = store::entries_for_date(&all, &date);

    let entry = Entry {
        date: date.clone(),
        employee: employee.trim().to_string(),
        cash,
        debit,
        credit,
        pix,
        breakage,
        withdrawal,
        note: note.to_string(),
    };

    // One row per employee per day: overwrite in place, otherwise append.
    match day.iter_mut().find(|e| e.employee.trim() == entry.employee) {
        Some(existing) => *existing = entry.clone(),
        None => day.push(entry.clone()),
    }

    let merged = store::replace_day(&all, &date, &day);
    store.persist(&merged)?;

    println!(
        "Recorded {} on {}: esperado {}, líquido {}",
        entry.employee,
        display_date(&date),
        money(entry.expected()),
        money(entry.net())
    );
    Ok(())
}

pub fn remove(date: &str, employee: &str) -> Result<()> {
    let date = parse_date_arg(date)?;
    let store = LedgerStore::new(CsvSheet::new(ledger_path()));

    let all = store.load();
    let day = store::entries_for_date(&all, &date);
    let employee = employee.trim();

    let kept: Vec<Entry> = day
        .iter()
        .filter(|e| e.employee.trim() != employee)
        .cloned()
        .collect();
    let dropped = day.len() - kept.len();
    if dropped == 0 {
        println!("No closing for {} on {}.", employee, display_date(&date));
        return Ok(());
    }

    let merged = store::replace_day(&all, &date, &kept);
    store.persist(&merged)?;

    println!("Removed {} row(s) for {} on {}.", dropped, employee, display_date(&date));
    Ok(())
}

/// Last write wins: clearing an already-empty day is a no-op, not an error.
pub fn clear(date: &str) -> Result<()> {
    let date = parse_date_arg(date)?;
    let store = LedgerStore::new(CsvSheet::new(ledger_path()));

    let all = store.load();
    let dropped = store::entries_for_date(&all, &date).len();

    let merged = store::replace_day(&all, &date, &[]);
    store.persist(&merged)?;

    println!("Cleared {} ({} row(s) removed).", display_date(&date), dropped);
    Ok(())
}
