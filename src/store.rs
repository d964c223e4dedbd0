use crate::error::{Result, TillyError};
use crate::models::Entry;
use crate::sheet::Sheet;

pub const DEFAULT_MIN_DAY_ROWS: usize = 8;

/// Owns the authoritative row set and the read/replace/persist protocol
/// against the external sheet.
pub struct LedgerStore<S: Sheet> {
    sheet: S,
}

impl<S: Sheet> LedgerStore<S> {
    pub fn new(sheet: S) -> Self {
        Self { sheet }
    }

    /// Full table from the external sheet. Any read failure (missing file,
    /// absent schema) degrades to an empty ledger; "no data yet" is not an
    /// error for the rest of the system.
    pub fn load(&self) -> Vec<Entry> {
        self.sheet.read().unwrap_or_default()
    }

    /// Trims employee names, drops rows whose trimmed employee is empty, and
    /// writes the remainder as the new authoritative table. On failure the
    /// caller's in-memory rows are untouched and the save can be retried.
    pub fn persist(&self, rows: &[Entry]) -> Result<()> {
        let keep: Vec<Entry> = rows
            .iter()
            .filter(|e| !e.is_placeholder())
            .map(|e| Entry {
                employee: e.employee.trim().to_string(),
                ..e.clone()
            })
            .collect();
        self.sheet
            .write(&keep)
            .map_err(|e| TillyError::Save(e.to_string()))
    }
}

/// Exact date-string match.
pub fn entries_for_date(all: &[Entry], date: &str) -> Vec<Entry> {
    all.iter().filter(|e| e.date == date).cloned().collect()
}

/// Appends placeholder rows until `minimum` slots exist. Never truncates.
pub fn pad_to_minimum(rows: &[Entry], date: &str, minimum: usize) -> Vec<Entry> {
    let mut out = rows.to_vec();
    while out.len() < minimum {
        out.push(Entry::placeholder(date));
    }
    out
}

/// Whole-day replacement: every row dated `date` is dropped and `new_rows`
/// takes its place. Rows for other days keep their order; cross-day order
/// is not meaningful.
pub fn replace_day(all: &[Entry], date: &str, new_rows: &[Entry]) -> Vec<Entry> {
    let mut out: Vec<Entry> = all.iter().filter(|e| e.date != date).cloned().collect();
    out.extend(new_rows.iter().cloned());
    out
}
