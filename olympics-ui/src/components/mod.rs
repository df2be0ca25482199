//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod metric_card;
pub mod nav;
pub mod pie_chart;

pub use loading::{ErrorPanel, Loading};
pub use metric_card::MetricCard;
pub use nav::Nav;
pub use pie_chart::PieChart;
