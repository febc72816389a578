use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::core::{Granularity, Period, Result};
use crate::modules::charts::services::{ChartBackend, ChartSpec};
use crate::modules::sales::models::{QUANTITY_COLUMNS, SALE_COLUMNS};
use crate::modules::sales::repositories::SalesRepository;
use crate::modules::sales::services::SalesReportService;

use super::{column_labels, png_base64};

/// Query parameters for the monthly report endpoints
#[derive(Debug, Deserialize)]
pub struct MonthlyQuery {
    /// Month key, format: YYYY-MM
    pub selected_month: String,
}

impl MonthlyQuery {
    fn period(&self) -> Result<Period> {
        Period::parse(Granularity::Month, &self.selected_month)
    }
}

/// GET /sales/total/
pub async fn total_sales(
    repository: web::Data<dyn SalesRepository>,
    query: web::Query<MonthlyQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    let total = service.total_sales(period).await?;

    Ok(HttpResponse::Ok().json(json!({ "total_sales": total })))
}

/// GET /sales/by-products/
pub async fn sales_by_products(
    repository: web::Data<dyn SalesRepository>,
    charts: web::Data<dyn ChartBackend>,
    query: web::Query<MonthlyQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    let totals = service.sales_by_product(period).await?;

    let spec = ChartSpec::bar(
        format!("Sales Distribution by Products in {}", period),
        column_labels(&SALE_COLUMNS),
        totals.per_product.to_vec(),
    );
    let png = charts.render(&spec).await?;

    Ok(HttpResponse::Ok().json(json!({ "sales_by_products_chart": png_base64(&png) })))
}

/// GET /sales/quantity-pie/
pub async fn quantity_pie_chart(
    repository: web::Data<dyn SalesRepository>,
    charts: web::Data<dyn ChartBackend>,
    query: web::Query<MonthlyQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    let totals = service.quantities_by_product(period).await?;

    let spec = ChartSpec::pie(
        format!("Quantity Sales Distribution for {}", period),
        column_labels(&QUANTITY_COLUMNS),
        totals.per_product.to_vec(),
    );
    let png = charts.render(&spec).await?;

    Ok(HttpResponse::Ok().json(json!({ "quantity_sales_pie_chart": png_base64(&png) })))
}

/// GET /sales/weekly/
pub async fn weekly_sales(
    repository: web::Data<dyn SalesRepository>,
    charts: web::Data<dyn ChartBackend>,
    query: web::Query<MonthlyQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    let buckets = service.weekly_sales(period).await?;

    let labels: Vec<String> = buckets.iter().map(|b| b.label.clone()).collect();
    let totals: Vec<f64> = buckets.iter().map(|b| b.total).collect();
    let spec = ChartSpec::line(format!("Weekly Sales in {}", period), labels, totals);
    let png = charts.render(&spec).await?;

    Ok(HttpResponse::Ok().json(json!({ "weekly_sales_chart": png_base64(&png) })))
}

/// GET /sales/comparison/
pub async fn sales_comparison(
    repository: web::Data<dyn SalesRepository>,
    query: web::Query<MonthlyQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    let comparison = service.comparison(period).await?;

    Ok(HttpResponse::Ok().json(json!({ "sales_comparison_text": comparison.summary_text() })))
}

/// Configure monthly report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales")
            .route("/total/", web::get().to(total_sales))
            .route("/by-products/", web::get().to(sales_by_products))
            .route("/quantity-pie/", web::get().to(quantity_pie_chart))
            .route("/weekly/", web::get().to(weekly_sales))
            .route("/comparison/", web::get().to(sales_comparison)),
    );
}
