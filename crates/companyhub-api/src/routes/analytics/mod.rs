//! Analytics routes - KPI figures and chart feeds

pub mod api;
pub mod page;

pub use api::{
    api_analytics_departments, api_analytics_expenses, api_analytics_kpis, api_analytics_monthly,
};
pub use page::page_analytics;
