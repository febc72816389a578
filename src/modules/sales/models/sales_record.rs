use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of products tracked per transaction row.
pub const PRODUCT_COUNT: usize = 4;

/// Column labels for per-product sale amounts, as exposed in API payloads.
pub const SALE_COLUMNS: [&str; PRODUCT_COUNT] = ["S-P1", "S-P2", "S-P3", "S-P4"];

/// Column labels for per-product quantities.
pub const QUANTITY_COLUMNS: [&str; PRODUCT_COUNT] = ["Q-P1", "Q-P2", "Q-P3", "Q-P4"];

/// Textual format transaction dates are stored in.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// One sales transaction row.
///
/// Rows whose stored date text does not parse are excluded from all
/// aggregation; numeric fields carry whatever the store holds (missing cells
/// read as zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Transaction date (no time component)
    pub date: NaiveDate,
    /// Sale amount per product, S-P1..S-P4
    pub sales: [f64; PRODUCT_COUNT],
    /// Quantity sold per product, Q-P1..Q-P4
    pub quantities: [f64; PRODUCT_COUNT],
}

impl SalesRecord {
    pub fn new(
        date: NaiveDate,
        sales: [f64; PRODUCT_COUNT],
        quantities: [f64; PRODUCT_COUNT],
    ) -> Self {
        Self {
            date,
            sales,
            quantities,
        }
    }

    /// Combined sale amount across all four products for this row.
    pub fn sale_total(&self) -> f64 {
        self.sales.iter().sum()
    }

    /// Parse stored date text; `None` for rows that do not parse.
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
    }
}
