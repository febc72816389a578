use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::core::{Granularity, Period, Result};
use crate::modules::charts::services::{ChartBackend, ChartSpec};
use crate::modules::sales::models::{QUANTITY_COLUMNS, SALE_COLUMNS};
use crate::modules::sales::repositories::SalesRepository;
use crate::modules::sales::services::SalesReportService;

use super::{column_labels, monthly_comparison_response, png_base64};

/// Query parameters for the annual report endpoints
#[derive(Debug, Deserialize)]
pub struct AnnualQuery {
    /// Year key, format: YYYY
    pub selected_year: String,
}

impl AnnualQuery {
    fn period(&self) -> Result<Period> {
        Period::parse(Granularity::Year, &self.selected_year)
    }
}

/// GET /sales/annual/total/
pub async fn total_sales(
    repository: web::Data<dyn SalesRepository>,
    query: web::Query<AnnualQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    let total = service.total_sales(period).await?;

    Ok(HttpResponse::Ok().json(json!({ "total_sales": total })))
}

/// GET /sales/annual/by-products/
pub async fn sales_by_products(
    repository: web::Data<dyn SalesRepository>,
    charts: web::Data<dyn ChartBackend>,
    query: web::Query<AnnualQuery>,
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

/// GET /sales/annual/quantity-pie/
pub async fn quantity_pie_chart(
    repository: web::Data<dyn SalesRepository>,
    charts: web::Data<dyn ChartBackend>,
    query: web::Query<AnnualQuery>,
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

/// GET /sales/annual/comparison/
///
/// Returns the text block plus year/total pairs for the frontend's own bar
/// chart.
pub async fn sales_comparison(
    repository: web::Data<dyn SalesRepository>,
    query: web::Query<AnnualQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    let comparison = service.comparison(period).await?;

    Ok(HttpResponse::Ok().json(json!({
        "sales_comparison_text": comparison.summary_text(),
        "comparison_chart_data": {
            "years": [
                comparison.period.to_string(),
                comparison.previous_period.to_string(),
            ],
            "total_sales": [comparison.current_total, comparison.previous_total],
        },
    })))
}

/// GET /sales/annual/monthly-comparison/
pub async fn monthly_comparison(
    repository: web::Data<dyn SalesRepository>,
    charts: web::Data<dyn ChartBackend>,
    query: web::Query<AnnualQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    monthly_comparison_response(&service, charts.get_ref(), period).await
}

/// Configure annual report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales/annual")
            .route("/total/", web::get().to(total_sales))
            .route("/by-products/", web::get().to(sales_by_products))
            .route("/quantity-pie/", web::get().to(quantity_pie_chart))
            .route("/comparison/", web::get().to(sales_comparison))
            .route("/monthly-comparison/", web::get().to(monthly_comparison)),
    );
}
