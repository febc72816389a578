use async_trait::async_trait;

use crate::core::Result;

/// Kind of figure the rendering backend should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
        }
    }
}

/// Everything the rendering backend needs for one figure: category labels,
/// one numeric series, and a title. Layout is the backend's business.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSpec {
    pub fn bar(title: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: title.into(),
            labels,
            values,
        }
    }

    pub fn pie(title: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            kind: ChartKind::Pie,
            title: title.into(),
            labels,
            values,
        }
    }

    pub fn line(title: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            kind: ChartKind::Line,
            title: title.into(),
            labels,
            values,
        }
    }
}

/// Chart rendering boundary. Implementations return opaque encoded PNG
/// bytes; callers base64-encode at the HTTP layer.
#[async_trait]
pub trait ChartBackend: Send + Sync {
    async fn render(&self, spec: &ChartSpec) -> Result<Vec<u8>>;

    /// Backend name for logs
    fn name(&self) -> &str;
}
