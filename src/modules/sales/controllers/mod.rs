mod annual_controller;
mod halfyearly_controller;
mod monthly_controller;
mod quarterly_controller;

use actix_web::{web, HttpResponse};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;

use crate::core::{Period, Result};
use crate::modules::charts::services::{ChartBackend, ChartSpec};
use crate::modules::sales::models::SALE_COLUMNS;
use crate::modules::sales::services::SalesReportService;

/// Wire every sales route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    quarterly_controller::configure(cfg);
    halfyearly_controller::configure(cfg);
    annual_controller::configure(cfg);
    // "/sales" prefix-matches the longer scopes above, so it registers last
    monthly_controller::configure(cfg);
}

pub(crate) fn png_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub(crate) fn column_labels(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| (*c).to_string()).collect()
}

/// Month-by-month breakdown with a rendered line chart, shared by the
/// half-yearly and annual monthly-comparison endpoints.
pub(crate) async fn monthly_comparison_response(
    service: &SalesReportService,
    charts: &dyn ChartBackend,
    period: Period,
) -> Result<HttpResponse> {
    let months = service.monthly_sales(period).await?;
    let labels: Vec<String> = months.iter().map(|m| m.long_label()).collect();
    let totals: Vec<f64> = months.iter().map(|m| m.total).collect();

    let mut sales = serde_json::Map::new();
    for (index, column) in SALE_COLUMNS.iter().enumerate() {
        let series: Vec<f64> = months.iter().map(|m| m.per_product[index]).collect();
        sales.insert((*column).to_string(), json!(series));
    }
    sales.insert("Total".to_string(), json!(totals));

    let chart_data = json!({
        "months": labels,
        "sales": sales,
    });

    let spec = ChartSpec::line(
        format!("Monthly Sales Comparison in {}", period),
        labels,
        totals,
    );
    let png = charts.render(&spec).await?;

    Ok(HttpResponse::Ok().json(json!({
        "chart_data": chart_data,
        "sales_chart_base64": png_base64(&png),
    })))
}
