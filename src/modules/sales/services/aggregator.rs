use std::collections::BTreeMap;

use chrono::Datelike;

use crate::core::PeriodWindow;
use crate::modules::sales::models::{SalesRecord, PRODUCT_COUNT};

/// Per-product sums (sale amounts or quantities) over one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductTotals {
    pub per_product: [f64; PRODUCT_COUNT],
}

impl ProductTotals {
    /// Sum of the four per-product totals.
    pub fn grand_total(&self) -> f64 {
        self.per_product.iter().sum()
    }
}

/// One month's worth of sales inside a larger window.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRow {
    pub year: i32,
    pub month: u32,
    pub per_product: [f64; PRODUCT_COUNT],
    pub total: f64,
}

impl MonthRow {
    /// "January 2024" style label used by the monthly comparison payloads.
    pub fn long_label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Rows of `records` falling inside `window`.
pub fn rows_in_window<'a>(
    records: &'a [SalesRecord],
    window: &PeriodWindow,
) -> Vec<&'a SalesRecord> {
    records.iter().filter(|r| window.contains(r.date)).collect()
}

/// Sum the four sale-amount columns independently.
pub fn sale_totals(rows: &[&SalesRecord]) -> ProductTotals {
    let mut per_product = [0.0; PRODUCT_COUNT];
    for row in rows {
        for (total, value) in per_product.iter_mut().zip(row.sales.iter()) {
            *total += value;
        }
    }
    ProductTotals { per_product }
}

/// Sum the four quantity columns independently.
pub fn quantity_totals(rows: &[&SalesRecord]) -> ProductTotals {
    let mut per_product = [0.0; PRODUCT_COUNT];
    for row in rows {
        for (total, value) in per_product.iter_mut().zip(row.quantities.iter()) {
            *total += value;
        }
    }
    ProductTotals { per_product }
}

/// Group window rows by calendar month, chronologically ordered.
pub fn monthly_breakdown(rows: &[&SalesRecord]) -> Vec<MonthRow> {
    let mut by_month: BTreeMap<(i32, u32), [f64; PRODUCT_COUNT]> = BTreeMap::new();
    for row in rows {
        let bucket = by_month
            .entry((row.date.year(), row.date.month()))
            .or_insert([0.0; PRODUCT_COUNT]);
        for (total, value) in bucket.iter_mut().zip(row.sales.iter()) {
            *total += value;
        }
    }

    by_month
        .into_iter()
        .map(|((year, month), per_product)| MonthRow {
            year,
            month,
            per_product,
            total: per_product.iter().sum(),
        })
        .collect()
}
