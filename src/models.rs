/// One register-closing row: what a single employee turned in for one day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    /// ISO calendar date, `YYYY-MM-DD`. No time component.
    pub date: String,
    /// Free text. Empty/whitespace-only marks an unassigned placeholder row.
    pub employee: String,
    pub cash: f64,
    pub debit: f64,
    pub credit: f64,
    /// Pix instant transfer.
    pub pix: f64,
    /// Drawer shortage attributed to the employee.
    pub breakage: f64,
    pub withdrawal: f64,
    pub note: String,
}

impl Entry {
    /// Empty slot used to pad a day's editing view up to the minimum row count.
    /// Placeholders are never persisted.
    pub fn placeholder(date: &str) -> Self {
        Entry {
            date: date.to_string(),
            ..Default::default()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.employee.trim().is_empty()
    }

    /// What should have been collected: the sum of all payment methods.
    pub fn expected(&self) -> f64 {
        self.cash + self.debit + self.credit + self.pix
    }

    /// Expected minus breakage minus withdrawal.
    pub fn net(&self) -> f64 {
        self.expected() - self.breakage - self.withdrawal
    }
}

/// Lenient numeric coercion for amounts coming off the sheet. Unparseable or
/// missing values are 0.0, never an error.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.replace(',', "").replace('"', "").replace("R$", "").replace('$', "");
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return -inner.trim().parse::<f64>().unwrap_or(0.0);
    }
    s.parse().unwrap_or(0.0)
}
