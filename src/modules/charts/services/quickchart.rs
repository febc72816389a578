use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::core::{AppError, Result};

use super::chart_backend::{ChartBackend, ChartSpec};

/// Renders charts by posting a Chart.js configuration to a
/// QuickChart-compatible HTTP endpoint.
pub struct QuickChartBackend {
    client: Client,
    base_url: String,
}

impl QuickChartBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn chart_config(spec: &ChartSpec) -> serde_json::Value {
        json!({
            "type": spec.kind.as_str(),
            "data": {
                "labels": spec.labels,
                "datasets": [{
                    "label": spec.title,
                    "data": spec.values,
                }],
            },
            "options": {
                "title": {
                    "display": true,
                    "text": spec.title,
                },
            },
        })
    }
}

#[async_trait]
impl ChartBackend for QuickChartBackend {
    async fn render(&self, spec: &ChartSpec) -> Result<Vec<u8>> {
        // QuickChart render API: https://quickchart.io/documentation/
        let url = format!("{}/chart", self.base_url);
        let body = json!({
            "chart": Self::chart_config(spec),
            "format": "png",
            "width": 800,
            "height": 480,
        });

        debug!("Rendering {} chart '{}'", spec.kind.as_str(), spec.title);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::chart_backend(format!("chart request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::chart_backend(format!(
                "chart backend returned {}: {}",
                status, error_body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::chart_backend(format!("failed to read chart payload: {}", e)))?;

        Ok(bytes.to_vec())
    }

    fn name(&self) -> &str {
        "quickchart"
    }
}
