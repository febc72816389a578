use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::core::{Granularity, Period, Result};
use crate::modules::charts::services::{ChartBackend, ChartSpec};
use crate::modules::sales::models::{QUANTITY_COLUMNS, SALE_COLUMNS};
use crate::modules::sales::repositories::SalesRepository;
use crate::modules::sales::services::SalesReportService;

use super::{column_labels, png_base64};

/// Query parameters for the quarterly report endpoints
#[derive(Debug, Deserialize)]
pub struct QuarterlyQuery {
    /// Quarter key, format: YYYY-Qn
    pub selected_quarter: String,
}

impl QuarterlyQuery {
    fn period(&self) -> Result<Period> {
        Period::parse(Granularity::Quarter, &self.selected_quarter)
    }
}

/// GET /sales/quarterly/total/
pub async fn total_sales(
    repository: web::Data<dyn SalesRepository>,
    query: web::Query<QuarterlyQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    let total = service.total_sales(period).await?;

    Ok(HttpResponse::Ok().json(json!({ "total_sales": total })))
}

/// GET /sales/quarterly/by-products/
pub async fn sales_by_products(
    repository: web::Data<dyn SalesRepository>,
    charts: web::Data<dyn ChartBackend>,
    query: web::Query<QuarterlyQuery>,
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

/// GET /sales/quarterly/quantity-pie/
pub async fn quantity_pie_chart(
    repository: web::Data<dyn SalesRepository>,
    charts: web::Data<dyn ChartBackend>,
    query: web::Query<QuarterlyQuery>,
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

/// GET /sales/quarterly/comparison/
///
/// Returns the text block plus structured totals for the frontend's own
/// comparison chart.
pub async fn sales_comparison(
    repository: web::Data<dyn SalesRepository>,
    query: web::Query<QuarterlyQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    let comparison = service.comparison(period).await?;

    Ok(HttpResponse::Ok().json(json!({
        "sales_comparison_text": comparison.summary_text(),
        "quarterly_comparison_chart_data": {
            "selected_quarter": comparison.current_total,
            "previous_quarter": comparison.previous_total,
            "previous_quarter_label": comparison.previous_period.to_string(),
        },
    })))
}

/// GET /sales/quarterly/monthly-comparison/
pub async fn monthly_comparison(
    repository: web::Data<dyn SalesRepository>,
    query: web::Query<QuarterlyQuery>,
) -> Result<HttpResponse> {
    let period = query.period()?;
    let service = SalesReportService::new(repository.into_inner());
    let months = service.monthly_sales(period).await?;

    let month_numbers: Vec<u32> = months.iter().map(|m| m.month).collect();
    let totals: Vec<f64> = months.iter().map(|m| m.total).collect();

    let mut table = serde_json::Map::new();
    table.insert("Month".to_string(), json!(month_numbers));
    let mut data = serde_json::Map::new();
    data.insert("months".to_string(), json!(month_numbers));
    for (index, column) in SALE_COLUMNS.iter().enumerate() {
        let series: Vec<f64> = months.iter().map(|m| m.per_product[index]).collect();
        table.insert((*column).to_string(), json!(series));
        data.insert((*column).to_string(), json!(series));
    }
    table.insert("Total".to_string(), json!(totals));
    data.insert("Total".to_string(), json!(totals));

    Ok(HttpResponse::Ok().json(json!({
        "monthly_sales_chart": table,
        "monthly_sales_data": data,
    })))
}

/// Configure quarterly report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales/quarterly")
            .route("/total/", web::get().to(total_sales))
            .route("/by-products/", web::get().to(sales_by_products))
            .route("/quantity-pie/", web::get().to(quantity_pie_chart))
            .route("/comparison/", web::get().to(sales_comparison))
            .route("/monthly-comparison/", web::get().to(monthly_comparison)),
    );
}
