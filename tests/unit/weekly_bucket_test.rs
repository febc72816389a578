// Tests for the 7-day sub-bucketing of a month window: synthetic leading
// bucket, truncation at the last data day, and conservation of the month
// total.

use chrono::NaiveDate;
use proptest::prelude::*;

use salescope::core::{Granularity, Period};
use salescope::sales::models::SalesRecord;
use salescope::sales::services::{rows_in_window, sale_totals, weekly_buckets};

fn feb_record(day: u32, amount: f64) -> SalesRecord {
    SalesRecord::new(
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
        [amount, 0.0, 0.0, 0.0],
        [0.0; 4],
    )
}

fn feb_2024() -> Period {
    Period::parse(Granularity::Month, "2024-02").unwrap()
}

#[test]
fn buckets_start_from_first_day_with_data() {
    let records = vec![feb_record(10, 5.0), feb_record(12, 7.0)];
    let rows: Vec<&SalesRecord> = records.iter().collect();

    let buckets = weekly_buckets(&rows, &feb_2024());
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].label, "Start of 2024-02");
    assert_eq!(buckets[0].total, 0.0);
    assert_eq!(buckets[1].label, "2024-02-10 to 2024-02-16");
    assert_eq!(buckets[1].total, 12.0);
}

#[test]
fn full_leap_month_produces_five_weekly_buckets() {
    let records: Vec<SalesRecord> = (1..=29).map(|day| feb_record(day, 1.0)).collect();
    let rows: Vec<&SalesRecord> = records.iter().collect();

    let buckets = weekly_buckets(&rows, &feb_2024());
    // Synthetic bucket plus 29 days in 7-day slices: 7+7+7+7+1.
    assert_eq!(buckets.len(), 6);
    assert_eq!(buckets[1].label, "2024-02-01 to 2024-02-07");
    assert_eq!(buckets[5].label, "2024-02-29 to 2024-02-29");
    assert_eq!(buckets[5].total, 1.0);
}

#[test]
fn final_bucket_truncates_at_last_data_day() {
    let records = vec![feb_record(1, 1.0), feb_record(8, 2.0), feb_record(10, 3.0)];
    let rows: Vec<&SalesRecord> = records.iter().collect();

    let buckets = weekly_buckets(&rows, &feb_2024());
    assert_eq!(buckets.last().unwrap().label, "2024-02-08 to 2024-02-10");
    assert_eq!(buckets.last().unwrap().total, 5.0);
}

proptest! {
    #[test]
    fn bucket_totals_sum_to_the_month_total(
        days in proptest::collection::btree_set(1u32..=29, 1..20),
        amount in 0.01f64..1e4,
    ) {
        let records: Vec<SalesRecord> =
            days.iter().map(|d| feb_record(*d, amount)).collect();
        let period = feb_2024();
        let rows = rows_in_window(&records, &period.window());

        let buckets = weekly_buckets(&rows, &period);
        let bucket_sum: f64 = buckets.iter().map(|b| b.total).sum();
        let month_total = sale_totals(&rows).grand_total();

        prop_assert!((bucket_sum - month_total).abs() < 1e-9 * month_total.max(1.0));
    }

    #[test]
    fn every_bucket_spans_at_most_seven_days(
        days in proptest::collection::btree_set(1u32..=29, 1..20),
    ) {
        let records: Vec<SalesRecord> =
            days.iter().map(|d| feb_record(*d, 1.0)).collect();
        let period = feb_2024();
        let rows = rows_in_window(&records, &period.window());

        // Skip the synthetic leading bucket; its label is not a date range.
        for bucket in weekly_buckets(&rows, &period).iter().skip(1) {
            let (start, end) = bucket.label.split_once(" to ").unwrap();
            let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
            let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap();
            let span = (end - start).num_days() + 1;
            prop_assert!((1..=7).contains(&span));
        }
    }
}
