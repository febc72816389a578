use serde::Deserialize;
use std::env;

/// Chart rendering backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Base URL of a QuickChart-compatible rendering endpoint
    pub base_url: String,
}

impl ChartConfig {
    pub fn from_env() -> Self {
        ChartConfig {
            base_url: env::var("CHART_BASE_URL")
                .unwrap_or_else(|_| "https://quickchart.io".to_string()),
        }
    }
}
