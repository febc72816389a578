// Tests for the percentage-change comparator and its edge-case policy:
// divide-by-zero yields the unbounded sentinel, ties read "Decrease".

use proptest::prelude::*;

use salescope::core::Period;
use salescope::sales::services::{Comparison, Direction, PercentChange};

fn month(year: i32, month: u32) -> Period {
    Period::Month { year, month }
}

#[test]
fn both_totals_zero_is_zero_change_and_decrease() {
    let comparison = Comparison::new(month(2024, 3), 0.0, 0.0);
    assert_eq!(comparison.change, PercentChange::Ratio(0.0));
    assert_eq!(comparison.direction, Direction::Decrease);
}

#[test]
fn fifty_percent_increase() {
    let comparison = Comparison::new(month(2024, 3), 150.0, 100.0);
    assert_eq!(comparison.change, PercentChange::Ratio(50.0));
    assert_eq!(comparison.direction, Direction::Increase);
    assert!(comparison
        .summary_text()
        .contains("Percentage Change: 50.00%"));
}

#[test]
fn zero_previous_with_sales_is_the_unbounded_sentinel() {
    let comparison = Comparison::new(month(2024, 3), 50.0, 0.0);
    assert_eq!(comparison.change, PercentChange::Unbounded);
    assert_eq!(comparison.direction, Direction::Increase);
}

#[test]
fn equal_nonzero_totals_read_decrease() {
    let comparison = Comparison::new(month(2024, 3), 100.0, 100.0);
    assert_eq!(comparison.change, PercentChange::Ratio(0.0));
    assert_eq!(comparison.direction, Direction::Decrease);
}

#[test]
fn drop_in_sales_is_a_negative_ratio() {
    let comparison = Comparison::new(month(2024, 3), 50.0, 100.0);
    assert_eq!(comparison.change, PercentChange::Ratio(-50.0));
    assert_eq!(comparison.direction, Direction::Decrease);
    assert!(comparison
        .summary_text()
        .contains("Percentage Change: -50.00%"));
}

#[test]
fn comparison_text_names_both_periods() {
    let comparison = Comparison::new(month(2024, 1), 10.0, 20.0);
    let text = comparison.summary_text();
    assert!(text.contains("Sales for 2024-01: $10.00"));
    assert!(text.contains("Sales for 2023-12: $20.00"));
}

proptest! {
    #[test]
    fn nonzero_previous_always_yields_a_ratio(
        current in 0.0f64..1e9,
        previous in 1e-3f64..1e9,
    ) {
        let change = PercentChange::compute(current, previous);
        let expected = (current - previous) / previous * 100.0;
        prop_assert_eq!(change, PercentChange::Ratio(expected));
    }

    #[test]
    fn direction_agrees_with_total_ordering(
        current in 0.0f64..1e9,
        previous in 0.0f64..1e9,
    ) {
        let direction = Direction::of(current, previous);
        if current > previous {
            prop_assert_eq!(direction, Direction::Increase);
        } else {
            prop_assert_eq!(direction, Direction::Decrease);
        }
    }
}
