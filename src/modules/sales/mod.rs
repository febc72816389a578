pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::SalesRecord;
pub use repositories::SalesRepository;
pub use services::SalesReportService;
