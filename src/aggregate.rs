use std::collections::{BTreeMap, BTreeSet};

use crate::models::Entry;

// ---------------------------------------------------------------------------
// Per-method totals
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MethodTotals {
    pub cash: f64,
    pub debit: f64,
    pub credit: f64,
    pub pix: f64,
    pub breakage: f64,
    pub withdrawal: f64,
}

pub fn sum_by_method(rows: &[Entry]) -> MethodTotals {
    let mut t = MethodTotals::default();
    for e in rows {
        t.cash += e.cash;
        t.debit += e.debit;
        t.credit += e.credit;
        t.pix += e.pix;
        t.breakage += e.breakage;
        t.withdrawal += e.withdrawal;
    }
    t
}

/// Summed per row so the total stays numerically equal to the sum of the
/// per-row nets displayed next to each entry.
pub fn daily_net(rows: &[Entry]) -> f64 {
    rows.iter().map(Entry::net).sum()
}

// ---------------------------------------------------------------------------
// Monthly grouping
// ---------------------------------------------------------------------------

/// `MM/YYYY` key for a stored ISO date. None when the date does not parse.
pub fn month_key(date: &str) -> Option<String> {
    chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%m/%Y").to_string())
}

/// Rows bucketed by month key. Rows with unparseable dates are incomplete
/// data and appear in no month.
pub fn group_by_month(rows: &[Entry]) -> BTreeMap<String, Vec<Entry>> {
    let mut months: BTreeMap<String, Vec<Entry>> = BTreeMap::new();
    for e in rows {
        if let Some(key) = month_key(&e.date) {
            months.entry(key).or_default().push(e.clone());
        }
    }
    months
}

/// Total breakage per employee, sorted by employee name. Employees whose
/// total is exactly zero are never reported.
pub fn breakage_by_employee(rows: &[Entry]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for e in rows {
        *totals.entry(e.employee.clone()).or_default() += e.breakage;
    }
    totals.into_iter().filter(|(_, total)| *total != 0.0).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub distinct_days: usize,
    pub avg_net_per_day: f64,
}

pub fn monthly_stats(rows: &[Entry]) -> MonthlyStats {
    let days: BTreeSet<&str> = rows.iter().map(|e| e.date.as_str()).collect();
    let distinct_days = days.len();
    let avg_net_per_day = if distinct_days > 0 {
        daily_net(rows) / distinct_days as f64
    } else {
        0.0
    };
    MonthlyStats {
        distinct_days,
        avg_net_per_day,
    }
}
