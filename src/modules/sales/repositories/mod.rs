mod sales_repository;

pub use sales_repository::{
    InMemorySalesRepository, MySqlSalesRepository, SalesRepository, SALES_TABLE,
};
