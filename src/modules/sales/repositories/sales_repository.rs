use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use tracing::warn;

use crate::core::Result;
use crate::modules::sales::models::{SalesRecord, PRODUCT_COUNT, QUANTITY_COLUMNS, SALE_COLUMNS};

/// Name of the pre-existing external table holding the sales rows.
pub const SALES_TABLE: &str = "Sales_data";

/// Read-only access to the sales transaction table.
///
/// Every report request reloads the full table through this trait; there is
/// no cache and no retry. Swapping in [`InMemorySalesRepository`] gives tests
/// a fixture without a running database.
#[async_trait]
pub trait SalesRepository: Send + Sync {
    /// Fetch every row whose date text parses; unparseable rows are dropped.
    async fn fetch_all(&self) -> Result<Vec<SalesRecord>>;
}

/// Sales table access over a MySQL pool.
pub struct MySqlSalesRepository {
    pool: MySqlPool,
}

impl MySqlSalesRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalesRepository for MySqlSalesRepository {
    async fn fetch_all(&self) -> Result<Vec<SalesRecord>> {
        let query = format!(
            "SELECT `Date`, `S-P1`, `S-P2`, `S-P3`, `S-P4`, \
             `Q-P1`, `Q-P2`, `Q-P3`, `Q-P4` FROM `{}`",
            SALES_TABLE
        );
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let raw_date: String = row.try_get("Date")?;
            let Some(date) = SalesRecord::parse_date(&raw_date) else {
                warn!("Dropping sales row with unparseable date '{}'", raw_date);
                continue;
            };

            let mut sales = [0.0; PRODUCT_COUNT];
            for (value, column) in sales.iter_mut().zip(SALE_COLUMNS.iter()) {
                *value = row.try_get::<Option<f64>, _>(*column)?.unwrap_or(0.0);
            }

            let mut quantities = [0.0; PRODUCT_COUNT];
            for (value, column) in quantities.iter_mut().zip(QUANTITY_COLUMNS.iter()) {
                *value = row.try_get::<Option<f64>, _>(*column)?.unwrap_or(0.0);
            }

            records.push(SalesRecord::new(date, sales, quantities));
        }

        Ok(records)
    }
}

/// In-memory sales table used as a test fixture and for local demos.
#[derive(Debug, Default, Clone)]
pub struct InMemorySalesRepository {
    records: Vec<SalesRecord>,
}

impl InMemorySalesRepository {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl SalesRepository for InMemorySalesRepository {
    async fn fetch_all(&self) -> Result<Vec<SalesRecord>> {
        Ok(self.records.clone())
    }
}
