// Property-based tests for period key parsing, window resolution, and
// previous-period derivation.
//
// Uses proptest to validate the calendar arithmetic across many inputs.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use salescope::core::{Granularity, Period};

proptest! {
    #[test]
    fn month_window_is_ordered_and_within_month(
        year in 1900i32..2100,
        month in 1u32..=12,
    ) {
        let window = Period::Month { year, month }.window();

        prop_assert!(window.start <= window.end);
        prop_assert_eq!(window.start.day(), 1);
        prop_assert_eq!((window.start.year(), window.start.month()), (year, month));
        prop_assert_eq!((window.end.year(), window.end.month()), (year, month));
        // The day after the window's end is in the next month.
        let after = window.end.succ_opt().unwrap();
        prop_assert_ne!(after.month(), month);
    }

    #[test]
    fn quarter_window_spans_three_months(
        year in 1900i32..2100,
        quarter in 1u32..=4,
    ) {
        let window = Period::Quarter { year, quarter }.window();

        prop_assert!(window.start <= window.end);
        prop_assert_eq!(window.start.month(), (quarter - 1) * 3 + 1);
        prop_assert_eq!(window.end.month(), quarter * 3);
        prop_assert_eq!(window.start.year(), year);
        prop_assert_eq!(window.end.year(), year);
    }

    #[test]
    fn half_year_window_boundaries(
        year in 1900i32..2100,
        half in 1u32..=2,
    ) {
        let window = Period::HalfYear { year, half }.window();

        if half == 1 {
            prop_assert_eq!(window.start, NaiveDate::from_ymd_opt(year, 1, 1).unwrap());
            prop_assert_eq!(window.end, NaiveDate::from_ymd_opt(year, 6, 30).unwrap());
        } else {
            prop_assert_eq!(window.start, NaiveDate::from_ymd_opt(year, 7, 1).unwrap());
            prop_assert_eq!(window.end, NaiveDate::from_ymd_opt(year, 12, 31).unwrap());
        }
    }

    #[test]
    fn stepping_previous_twelve_months_lands_one_year_back(
        year in 1900i32..2100,
        month in 1u32..=12,
    ) {
        let mut period = Period::Month { year, month };
        for _ in 0..12 {
            period = period.previous();
        }
        prop_assert_eq!(period, Period::Month { year: year - 1, month });
    }

    #[test]
    fn stepping_previous_four_quarters_lands_one_year_back(
        year in 1900i32..2100,
        quarter in 1u32..=4,
    ) {
        let mut period = Period::Quarter { year, quarter };
        for _ in 0..4 {
            period = period.previous();
        }
        prop_assert_eq!(period, Period::Quarter { year: year - 1, quarter });
    }

    #[test]
    fn stepping_previous_two_halves_lands_one_year_back(
        year in 1900i32..2100,
        half in 1u32..=2,
    ) {
        let mut period = Period::HalfYear { year, half };
        period = period.previous().previous();
        prop_assert_eq!(period, Period::HalfYear { year: year - 1, half });
    }

    #[test]
    fn stepping_previous_n_years(
        year in 1900i32..2100,
        steps in 1usize..50,
    ) {
        let mut period = Period::Year { year };
        for _ in 0..steps {
            period = period.previous();
        }
        prop_assert_eq!(period, Period::Year { year: year - steps as i32 });
    }

    #[test]
    fn previous_window_ends_right_before_current_starts(
        year in 1901i32..2100,
        month in 1u32..=12,
    ) {
        let period = Period::Month { year, month };
        let previous = period.previous();

        let gap = period.window().start - previous.window().end;
        prop_assert_eq!(gap, chrono::Duration::days(1));
    }

    #[test]
    fn display_round_trips_through_parse(
        year in 1000i32..10000,
        month in 1u32..=12,
    ) {
        let period = Period::Month { year, month };
        let parsed = Period::parse(Granularity::Month, &period.to_string()).unwrap();
        prop_assert_eq!(parsed, period);
    }
}

#[test]
fn leap_february_resolves_to_twenty_nine_days() {
    let window = Period::parse(Granularity::Month, "2024-02").unwrap().window();
    assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
}

#[test]
fn non_leap_february_resolves_to_twenty_eight_days() {
    let window = Period::parse(Granularity::Month, "2023-02").unwrap().window();
    assert_eq!(window.end, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
}

#[test]
fn january_rolls_to_december_of_prior_year() {
    let period = Period::parse(Granularity::Month, "2024-01").unwrap();
    assert_eq!(period.previous().to_string(), "2023-12");
}

#[test]
fn q1_rolls_to_q4_of_prior_year() {
    let period = Period::parse(Granularity::Quarter, "2024-Q1").unwrap();
    assert_eq!(period.previous().to_string(), "2023-Q4");
}

#[test]
fn h1_rolls_to_h2_of_prior_year() {
    let period = Period::parse(Granularity::HalfYear, "2024-H1").unwrap();
    assert_eq!(period.previous().to_string(), "2023-H2");
}

#[test]
fn keys_matching_another_granularity_are_rejected() {
    assert!(Period::parse(Granularity::Month, "2024-Q1").is_err());
    assert!(Period::parse(Granularity::Quarter, "2024-03").is_err());
    assert!(Period::parse(Granularity::HalfYear, "2024").is_err());
    assert!(Period::parse(Granularity::Year, "2024-H1").is_err());
}
