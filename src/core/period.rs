use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{AppError, Result};

static MONTH_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("valid regex"));
static QUARTER_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-Q[1-4]$").expect("valid regex"));
static HALF_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-H[12]$").expect("valid regex"));
static YEAR_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));

/// Calendar granularities a report can be requested at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Month,
    Quarter,
    HalfYear,
    Year,
}

impl Granularity {
    /// Format pattern a period key must match before it reaches the resolver.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            Granularity::Month => &MONTH_KEY,
            Granularity::Quarter => &QUARTER_KEY,
            Granularity::HalfYear => &HALF_KEY,
            Granularity::Year => &YEAR_KEY,
        }
    }

    /// Human noun used in error messages ("month", "quarter", ...).
    pub fn noun(&self) -> &'static str {
        match self {
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::HalfYear => "half-year",
            Granularity::Year => "year",
        }
    }
}

/// A validated period key: one calendar month, quarter, half-year or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Month { year: i32, month: u32 },
    Quarter { year: i32, quarter: u32 },
    HalfYear { year: i32, half: u32 },
    Year { year: i32 },
}

impl Period {
    /// Parse a period key against its granularity's format pattern.
    ///
    /// Keys that fail the pattern (or name a month outside 01-12) never reach
    /// the window resolver.
    pub fn parse(granularity: Granularity, key: &str) -> Result<Self> {
        if !granularity.pattern().is_match(key) {
            return Err(AppError::invalid_period(format!(
                "'{}' does not name a {}",
                key,
                granularity.noun()
            )));
        }

        let year: i32 = key[..4]
            .parse()
            .map_err(|_| AppError::invalid_period(format!("'{}' has an invalid year", key)))?;

        let period = match granularity {
            Granularity::Month => {
                let month: u32 = key[5..7].parse().map_err(|_| {
                    AppError::invalid_period(format!("'{}' has an invalid month", key))
                })?;
                if !(1..=12).contains(&month) {
                    return Err(AppError::invalid_period(format!(
                        "'{}' names month {}, expected 01-12",
                        key, month
                    )));
                }
                Period::Month { year, month }
            }
            Granularity::Quarter => {
                // The pattern pins the suffix to Q1-Q4.
                let quarter: u32 = key[6..7].parse().map_err(|_| {
                    AppError::invalid_period(format!("'{}' has an invalid quarter", key))
                })?;
                Period::Quarter { year, quarter }
            }
            Granularity::HalfYear => {
                let half: u32 = key[6..7].parse().map_err(|_| {
                    AppError::invalid_period(format!("'{}' has an invalid half", key))
                })?;
                Period::HalfYear { year, half }
            }
            Granularity::Year => Period::Year { year },
        };

        Ok(period)
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            Period::Month { .. } => Granularity::Month,
            Period::Quarter { .. } => Granularity::Quarter,
            Period::HalfYear { .. } => Granularity::HalfYear,
            Period::Year { .. } => Granularity::Year,
        }
    }

    /// Inclusive first and last calendar day covered by this period.
    pub fn window(&self) -> PeriodWindow {
        let (start, end) = match *self {
            Period::Month { year, month } => (ymd(year, month, 1), last_day_of_month(year, month)),
            Period::Quarter { year, quarter } => {
                let first_month = (quarter - 1) * 3 + 1;
                (
                    ymd(year, first_month, 1),
                    last_day_of_month(year, first_month + 2),
                )
            }
            Period::HalfYear { year, half } => {
                if half == 1 {
                    (ymd(year, 1, 1), ymd(year, 6, 30))
                } else {
                    (ymd(year, 7, 1), ymd(year, 12, 31))
                }
            }
            Period::Year { year } => (ymd(year, 1, 1), ymd(year, 12, 31)),
        };
        PeriodWindow { start, end }
    }

    /// The immediately preceding period at the same granularity.
    ///
    /// Rolls across year boundaries: January to December of the prior year,
    /// Q1 to Q4, H1 to H2.
    pub fn previous(&self) -> Period {
        match *self {
            Period::Month { year, month } => {
                if month == 1 {
                    Period::Month {
                        year: year - 1,
                        month: 12,
                    }
                } else {
                    Period::Month {
                        year,
                        month: month - 1,
                    }
                }
            }
            Period::Quarter { year, quarter } => {
                if quarter == 1 {
                    Period::Quarter {
                        year: year - 1,
                        quarter: 4,
                    }
                } else {
                    Period::Quarter {
                        year,
                        quarter: quarter - 1,
                    }
                }
            }
            Period::HalfYear { year, half } => {
                if half == 1 {
                    Period::HalfYear {
                        year: year - 1,
                        half: 2,
                    }
                } else {
                    Period::HalfYear { year, half: 1 }
                }
            }
            Period::Year { year } => Period::Year { year: year - 1 },
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Period::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Period::Quarter { year, quarter } => write!(f, "{:04}-Q{}", year, quarter),
            Period::HalfYear { year, half } => write!(f, "{:04}-H{}", year, half),
            Period::Year { year } => write!(f, "{:04}", year),
        }
    }
}

/// Resolved inclusive date range for a period key. Computed fresh per
/// request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// Month is validated to 1-12 before these run, so the constructions are
// infallible.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    ymd(next_year, next_month, 1)
        .pred_opt()
        .expect("valid calendar date")
}
