pub mod aggregator;
pub mod comparator;
pub mod report_service;
pub mod weekly;

pub use aggregator::{
    monthly_breakdown, month_name, quantity_totals, rows_in_window, sale_totals, MonthRow,
    ProductTotals,
};
pub use comparator::{Comparison, Direction, PercentChange};
pub use report_service::SalesReportService;
pub use weekly::{weekly_buckets, WeekBucket};
