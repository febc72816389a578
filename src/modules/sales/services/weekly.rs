use chrono::Duration;

use crate::core::Period;
use crate::modules::sales::models::SalesRecord;

/// One 7-day slice of a month, labeled for chart output.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    pub label: String,
    pub total: f64,
}

/// Partition a month's rows into successive 7-day buckets.
///
/// The first bucket starts at the earliest date that has data; a synthetic
/// zero bucket labeled "Start of {period}" leads the sequence, and the final
/// bucket truncates at the last data day. Returns only the synthetic bucket
/// when `rows` is empty (callers reject empty windows before this point).
pub fn weekly_buckets(rows: &[&SalesRecord], period: &Period) -> Vec<WeekBucket> {
    let mut buckets = vec![WeekBucket {
        label: format!("Start of {}", period),
        total: 0.0,
    }];

    let Some(first) = rows.iter().map(|r| r.date).min() else {
        return buckets;
    };
    let Some(last) = rows.iter().map(|r| r.date).max() else {
        return buckets;
    };

    let mut start = first;
    while start <= last {
        let mut end = start + Duration::days(6);
        if end > last {
            end = last;
        }

        let total = rows
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .map(|r| r.sale_total())
            .sum();

        buckets.push(WeekBucket {
            label: format!("{} to {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d")),
            total,
        });

        start = end + Duration::days(1);
    }

    buckets
}
