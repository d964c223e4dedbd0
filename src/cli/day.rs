use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::aggregate;
use crate::cli::{parse_date_arg, today_iso};
use crate::error::Result;
use crate::fmt::{display_date, money};
use crate::models::Entry;
use crate::settings::{ledger_path, load_settings};
use crate::sheet::CsvSheet;
use crate::store::{self, LedgerStore};

pub fn run(date: Option<String>) -> Result<()> {
    let date = match date {
        Some(d) => parse_date_arg(&d)?,
        None => today_iso(),
    };
    let settings = load_settings();
    let store = LedgerStore::new(CsvSheet::new(ledger_path()));

    let all = store.load();
    let day = store::entries_for_date(&all, &date);
    let day = store::pad_to_minimum(&day, &date, settings.min_day_rows);

    println!("{}", format_day(&date, &day, settings.show_expected));
    Ok(())
}

pub fn format_day(date: &str, day: &[Entry], show_expected: bool) -> String {
    let totals = aggregate::sum_by_method(day);

    let mut out = format!("Fechamento - {}\n", display_date(date));
    out.push_str(&format!(
        "Dinheiro {}   Débito {}   Crédito {}   Pix {}\n\n",
        money(totals.cash),
        money(totals.debit),
        money(totals.credit),
        money(totals.pix)
    ));

    let mut table = Table::new();
    let mut header = vec![
        "Funcionária",
        "Dinheiro",
        "Débito",
        "Crédito",
        "Pix",
        "Quebra",
        "Retirada",
    ];
    if show_expected {
        header.push("Esperado");
    }
    header.push("Justificativa");
    table.set_header(header);

    for e in day {
        let name = if e.is_placeholder() {
            "—".to_string()
        } else {
            e.employee.clone()
        };
        let mut row = vec![
            Cell::new(name),
            Cell::new(money(e.cash)),
            Cell::new(money(e.debit)),
            Cell::new(money(e.credit)),
            Cell::new(money(e.pix)),
            Cell::new(money(e.breakage)),
            Cell::new(money(e.withdrawal)),
        ];
        if show_expected {
            row.push(Cell::new(money(e.expected())));
        }
        row.push(Cell::new(&e.note));
        table.add_row(row);
    }
    out.push_str(&table.to_string());

    let expected: f64 = day.iter().map(Entry::expected).sum();
    let net = aggregate::daily_net(day);
    out.push_str(&format!(
        "\n\nEsperado {}   Quebra {}   Retirada {}   Líquido {}\n",
        money(expected),
        money(totals.breakage).red().to_string(),
        money(totals.withdrawal).yellow().to_string(),
        money(net).green().to_string()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day_includes_totals_and_placeholders() {
        let day = store::pad_to_minimum(
            &[Entry {
                date: "2026-01-05".to_string(),
                employee: "Ana".to_string(),
                cash: 100.0,
                debit: 50.0,
                breakage: 5.0,
                withdrawal: 10.0,
                ..Default::default()
            }],
            "2026-01-05",
            8,
        );
        let out = format_day("2026-01-05", &day, true);
        assert!(out.contains("05/01/2026"));
        assert!(out.contains("Ana"));
        assert!(out.contains("R$ 150.00")); // Esperado
        assert!(out.contains("R$ 135.00")); // Líquido
    }

    #[test]
    fn test_format_day_hides_expected_column_when_configured() {
        let out = format_day("2026-01-05", &[], false);
        assert!(!out.contains("| Esperado"));
    }
}
