pub mod services;

pub use services::{ChartBackend, ChartKind, ChartSpec, QuickChartBackend};
