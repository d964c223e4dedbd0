use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::aggregate::{self, MonthlyStats};
use crate::error::{Result, TillyError};
use crate::fmt::{display_date, money};
use crate::models::Entry;
use crate::settings::ledger_path;
use crate::sheet::CsvSheet;
use crate::store::LedgerStore;

pub fn run(month: Option<String>) -> Result<()> {
    let store = LedgerStore::new(CsvSheet::new(ledger_path()));
    let all = store.load();
    let months = aggregate::group_by_month(&all);

    if months.is_empty() {
        println!("No entries yet.");
        return Ok(());
    }

    let key = match month {
        Some(m) => {
            let m = m.trim().to_string();
            if !months.contains_key(&m) {
                let known: Vec<&str> = months.keys().map(String::as_str).collect();
                return Err(TillyError::Other(format!(
                    "no entries for {m} (months with entries: {})",
                    known.join(", ")
                )));
            }
            m
        }
        None => latest_month(months.keys()),
    };

    println!("{}", format_month(&key, &months[&key]));
    Ok(())
}

/// Month keys sort as MM/YYYY strings, so "latest" needs a chronological
/// comparison, not a lexical one.
fn latest_month<'a>(keys: impl Iterator<Item = &'a String>) -> String {
    keys.max_by_key(|k| {
        let (m, y) = k.split_once('/').unwrap_or(("00", "0000"));
        (y.to_string(), m.to_string())
    })
    .cloned()
    .unwrap_or_default()
}

pub fn format_month(key: &str, rows: &[Entry]) -> String {
    let totals = aggregate::sum_by_method(rows);

    let mut out = format!("Resumo Mensal - {key}\n");
    out.push_str(&format!(
        "Dinheiro {}   Débito {}   Crédito {}   Pix {}\n\n",
        money(totals.cash),
        money(totals.debit),
        money(totals.credit),
        money(totals.pix)
    ));

    let mut table = Table::new();
    table.set_header(vec![
        "Data",
        "Funcionária",
        "Dinheiro",
        "Débito",
        "Crédito",
        "Pix",
        "Quebra",
        "Retirada",
        "Total Dia",
    ]);
    for e in rows {
        table.add_row(vec![
            Cell::new(display_date(&e.date)),
            Cell::new(&e.employee),
            Cell::new(money(e.cash)),
            Cell::new(money(e.debit)),
            Cell::new(money(e.credit)),
            Cell::new(money(e.pix)),
            Cell::new(money(e.breakage)),
            Cell::new(money(e.withdrawal)),
            Cell::new(money(e.expected())),
        ]);
    }
    out.push_str(&table.to_string());

    out.push_str("\n\nQuebras por Funcionária\n");
    let breakage = aggregate::breakage_by_employee(rows);
    if breakage.is_empty() {
        out.push_str("  (nenhuma quebra registrada)\n");
    } else {
        for (employee, total) in &breakage {
            out.push_str(&format!("  {}  {}\n", employee, money(*total).red()));
        }
    }

    let MonthlyStats {
        distinct_days,
        avg_net_per_day,
    } = aggregate::monthly_stats(rows);
    out.push_str(&format!(
        "\nDias com registro: {distinct_days}   Média líquida por dia: {}\n",
        money(avg_net_per_day).green()
    ));
    out
}
