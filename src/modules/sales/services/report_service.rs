use std::sync::Arc;

use tracing::info;

use crate::core::{AppError, Period, Result};
use crate::modules::sales::models::SalesRecord;
use crate::modules::sales::repositories::SalesRepository;

use super::aggregator::{
    monthly_breakdown, quantity_totals, rows_in_window, sale_totals, MonthRow, ProductTotals,
};
use super::comparator::Comparison;
use super::weekly::{weekly_buckets, WeekBucket};

/// Report pipeline shared by every granularity: fetch the full table, filter
/// by the period's window, aggregate, and signal not-found on empty windows.
pub struct SalesReportService {
    repository: Arc<dyn SalesRepository>,
}

impl SalesReportService {
    pub fn new(repository: Arc<dyn SalesRepository>) -> Self {
        Self { repository }
    }

    /// Grand total: sum of the four sale-amount columns over the window.
    pub async fn total_sales(&self, period: Period) -> Result<f64> {
        let records = self.repository.fetch_all().await?;
        let rows = self.selected_rows(&records, &period)?;
        Ok(sale_totals(&rows).grand_total())
    }

    /// Per-product sale totals (bar-chart series).
    pub async fn sales_by_product(&self, period: Period) -> Result<ProductTotals> {
        let records = self.repository.fetch_all().await?;
        let rows = self.selected_rows(&records, &period)?;
        Ok(sale_totals(&rows))
    }

    /// Per-product quantity totals (pie-chart series).
    pub async fn quantities_by_product(&self, period: Period) -> Result<ProductTotals> {
        let records = self.repository.fetch_all().await?;
        let rows = self.selected_rows(&records, &period)?;
        Ok(quantity_totals(&rows))
    }

    /// Successive 7-day buckets within a month window.
    pub async fn weekly_sales(&self, period: Period) -> Result<Vec<WeekBucket>> {
        let records = self.repository.fetch_all().await?;
        let rows = self.selected_rows(&records, &period)?;
        Ok(weekly_buckets(&rows, &period))
    }

    /// Window rows grouped by calendar month, chronologically.
    pub async fn monthly_sales(&self, period: Period) -> Result<Vec<MonthRow>> {
        let records = self.repository.fetch_all().await?;
        let rows = self.selected_rows(&records, &period)?;
        Ok(monthly_breakdown(&rows))
    }

    /// Totals for the period and the one before it, with percentage change.
    ///
    /// An empty previous window is a distinct not-found condition, not a zero
    /// total.
    pub async fn comparison(&self, period: Period) -> Result<Comparison> {
        let records = self.repository.fetch_all().await?;
        let rows = self.selected_rows(&records, &period)?;
        let current_total = sale_totals(&rows).grand_total();

        let previous = period.previous();
        let previous_rows = rows_in_window(&records, &previous.window());
        if previous_rows.is_empty() {
            return Err(AppError::no_data(format!(
                "the previous {}",
                previous.granularity().noun()
            )));
        }
        let previous_total = sale_totals(&previous_rows).grand_total();

        info!(
            "Comparing {} (total {:.2}) against {} (total {:.2})",
            period, current_total, previous, previous_total
        );

        Ok(Comparison::new(period, current_total, previous_total))
    }

    fn selected_rows<'a>(
        &self,
        records: &'a [SalesRecord],
        period: &Period,
    ) -> Result<Vec<&'a SalesRecord>> {
        let rows = rows_in_window(records, &period.window());
        if rows.is_empty() {
            return Err(AppError::no_data(format!(
                "the selected {}",
                period.granularity().noun()
            )));
        }
        info!("{} rows selected for {}", rows.len(), period);
        Ok(rows)
    }
}
