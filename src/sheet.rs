use std::path::{Path, PathBuf};

use crate::error::{Result, TillyError};
use crate::models::{parse_amount, Entry};

/// Canonical column set of the external ledger sheet. Order matters for
/// display only; reads go through the header row, not positions.
pub const COLUMNS: [&str; 9] = [
    "Data",
    "Funcionária",
    "Dinheiro",
    "Débito",
    "Crédito",
    "Pix",
    "Quebra",
    "Retirada",
    "Justificativa",
];

/// Narrow contract against the external ledger table. The rest of the system
/// only ever sees `Entry` values; protocol, auth, and caching live behind
/// implementations of this trait.
pub trait Sheet {
    fn read(&self) -> Result<Vec<Entry>>;
    /// Replaces the whole table with `rows`.
    fn write(&self, rows: &[Entry]) -> Result<()>;
}

/// Flat CSV file backend.
pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn text(record: &csv::StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim().to_string()
}

fn amount(record: &csv::StringRecord, idx: Option<usize>) -> f64 {
    parse_amount(idx.and_then(|i| record.get(i)).unwrap_or(""))
}

impl Sheet for CsvSheet {
    fn read(&self) -> Result<Vec<Entry>> {
        let file = std::fs::File::open(&self.path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(std::io::BufReader::new(file));

        let headers = rdr.headers()?.clone();
        let col = |name: &str| headers.iter().position(|h| h.trim() == name);

        // A sheet without a date column is not a ledger at all.
        let date_col = col("Data")
            .ok_or_else(|| TillyError::Other("ledger sheet has no Data column".to_string()))?;
        let employee_col = col("Funcionária");
        let cash_col = col("Dinheiro");
        let debit_col = col("Débito");
        let credit_col = col("Crédito");
        // Older sheets spell the instant-transfer column PIX.
        let pix_col = col("Pix").or_else(|| col("PIX"));
        let breakage_col = col("Quebra");
        let withdrawal_col = col("Retirada");
        let note_col = col("Justificativa");

        // Derived columns (Esperado, Total Dia) are recomputed on read and
        // ignored here even if a hand-edited sheet carries them.
        let mut rows = Vec::new();
        for result in rdr.records() {
            let Ok(record) = result else { continue };
            rows.push(Entry {
                date: record.get(date_col).unwrap_or("").trim().to_string(),
                employee: text(&record, employee_col),
                cash: amount(&record, cash_col),
                debit: amount(&record, debit_col),
                credit: amount(&record, credit_col),
                pix: amount(&record, pix_col),
                breakage: amount(&record, breakage_col),
                withdrawal: amount(&record, withdrawal_col),
                note: text(&record, note_col),
            });
        }
        Ok(rows)
    }

    fn write(&self, rows: &[Entry]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(COLUMNS)?;
        for e in rows {
            wtr.write_record([
                e.date.clone(),
                e.employee.clone(),
                format!("{:.2}", e.cash),
                format!("{:.2}", e.debit),
                format!("{:.2}", e.credit),
                format!("{:.2}", e.pix),
                format!("{:.2}", e.breakage),
                format!("{:.2}", e.withdrawal),
                e.note.clone(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_with(content: &str) -> (tempfile::TempDir, CsvSheet) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        std::fs::write(&path, content).unwrap();
        (dir, CsvSheet::new(path))
    }

    #[test]
    fn test_read_canonical_columns() {
        let (_dir, sheet) = sheet_with(
            "Data,Funcionária,Dinheiro,Débito,Crédito,Pix,Quebra,Retirada,Justificativa\n\
             2026-01-05,Ana,100.00,50.00,0.00,0.00,5.00,10.00,turno da manhã\n",
        );
        let rows = sheet.read().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee, "Ana");
        assert_eq!(rows[0].cash, 100.0);
        assert_eq!(rows[0].expected(), 150.0);
        assert_eq!(rows[0].note, "turno da manhã");
    }

    #[test]
    fn test_read_accepts_uppercase_pix_header() {
        let (_dir, sheet) = sheet_with(
            "Data,Funcionária,Dinheiro,Débito,Crédito,PIX,Quebra,Retirada,Justificativa\n\
             2026-01-05,Ana,0.00,0.00,0.00,75.50,0.00,0.00,\n",
        );
        let rows = sheet.read().unwrap();
        assert_eq!(rows[0].pix, 75.50);
    }

    #[test]
    fn test_read_coerces_bad_amounts_to_zero() {
        let (_dir, sheet) = sheet_with(
            "Data,Funcionária,Dinheiro,Débito,Crédito,Pix,Quebra,Retirada,Justificativa\n\
             2026-01-05,Ana,oops,,3.00,,,,\n",
        );
        let rows = sheet.read().unwrap();
        assert_eq!(rows[0].cash, 0.0);
        assert_eq!(rows[0].debit, 0.0);
        assert_eq!(rows[0].credit, 3.0);
    }

    #[test]
    fn test_read_without_date_column_fails() {
        let (_dir, sheet) = sheet_with("Funcionária,Dinheiro\nAna,10.00\n");
        assert!(sheet.read().is_err());
    }

    #[test]
    fn test_read_ignores_derived_columns() {
        let (_dir, sheet) = sheet_with(
            "Data,Funcionária,Dinheiro,Débito,Crédito,Pix,Quebra,Retirada,Justificativa,Esperado\n\
             2026-01-05,Ana,10.00,0.00,0.00,0.00,0.00,0.00,,999.00\n",
        );
        let rows = sheet.read().unwrap();
        assert_eq!(rows[0].expected(), 10.0);
    }

    #[test]
    fn test_write_emits_canonical_header() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = CsvSheet::new(dir.path().join("ledger.csv"));
        sheet.write(&[]).unwrap();
        let content = std::fs::read_to_string(sheet.path()).unwrap();
        assert!(content.starts_with("Data,Funcionária,Dinheiro"));
        assert!(content.contains(",Pix,"));
        assert!(!content.contains("Esperado"));
    }

    #[test]
    fn test_write_then_read_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = CsvSheet::new(dir.path().join("ledger.csv"));
        let rows = vec![Entry {
            date: "2026-01-05".to_string(),
            employee: "Ana".to_string(),
            cash: 100.0,
            debit: 50.0,
            credit: 0.0,
            pix: 0.0,
            breakage: 5.0,
            withdrawal: 10.0,
            note: "manhã".to_string(),
        }];
        sheet.write(&rows).unwrap();
        assert_eq!(sheet.read().unwrap(), rows);
    }
}
