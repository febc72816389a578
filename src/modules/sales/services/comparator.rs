use std::fmt;

use crate::core::Period;

/// Percentage change between two period totals.
///
/// A zero previous total with nonzero current sales is reported as
/// `Unbounded` rather than clamped or treated as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentChange {
    Ratio(f64),
    Unbounded,
}

impl PercentChange {
    /// `(current - previous) / previous * 100`, with the divide-by-zero
    /// policy: 0 when both totals are zero, `Unbounded` otherwise.
    pub fn compute(current: f64, previous: f64) -> Self {
        if previous == 0.0 {
            if current == 0.0 {
                PercentChange::Ratio(0.0)
            } else {
                PercentChange::Unbounded
            }
        } else {
            PercentChange::Ratio((current - previous) / previous * 100.0)
        }
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentChange::Ratio(value) => write!(f, "{:.2}", value),
            PercentChange::Unbounded => write!(f, "inf"),
        }
    }
}

/// Direction label attached to a comparison.
///
/// Equal totals read "Decrease".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    pub fn of(current: f64, previous: f64) -> Self {
        if current > previous {
            Direction::Increase
        } else {
            Direction::Decrease
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Increase => "Increase",
            Direction::Decrease => "Decrease",
        }
    }
}

/// Totals for a period and the one immediately before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub period: Period,
    pub previous_period: Period,
    pub current_total: f64,
    pub previous_total: f64,
    pub change: PercentChange,
    pub direction: Direction,
}

impl Comparison {
    pub fn new(period: Period, current_total: f64, previous_total: f64) -> Self {
        Self {
            period,
            previous_period: period.previous(),
            current_total,
            previous_total,
            change: PercentChange::compute(current_total, previous_total),
            direction: Direction::of(current_total, previous_total),
        }
    }

    /// Four-line text block served by the comparison endpoints. Totals are
    /// rounded to two decimals here, at presentation time only.
    pub fn summary_text(&self) -> String {
        format!(
            "Sales for {}: ${:.2}\nSales for {}: ${:.2}\nChange: {}\nPercentage Change: {}%",
            self.period,
            self.current_total,
            self.previous_period,
            self.previous_total,
            self.direction.as_str(),
            self.change
        )
    }
}
