mod sales_record;

pub use sales_record::{SalesRecord, DATE_FORMAT, PRODUCT_COUNT, QUANTITY_COLUMNS, SALE_COLUMNS};
