/// Format a float as a currency amount with thousands separators: R$ 1,234.56
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-R$ {with_commas}.{dec_part}")
    } else {
        format!("R$ {with_commas}.{dec_part}")
    }
}

/// Stored dates are ISO; people read DD/MM/YYYY. Falls back to the raw
/// string when the date does not parse.
pub fn display_date(iso: &str) -> String {
    chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56), "R$ 1,234.56");
        assert_eq!(money(-500.00), "-R$ 500.00");
        assert_eq!(money(0.0), "R$ 0.00");
        assert_eq!(money(1000000.99), "R$ 1,000,000.99");
        assert_eq!(money(42.10), "R$ 42.10");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2026-01-05"), "05/01/2026");
        assert_eq!(display_date("garbage"), "garbage");
    }
}
