mod chart_backend;
mod quickchart;

pub use chart_backend::{ChartBackend, ChartKind, ChartSpec};
pub use quickchart::QuickChartBackend;
