//! Analytics API endpoints - JSON API

use crate::AppState;

pub async fn api_analytics_kpis(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.hub.analytics_kpis()).unwrap_or_default()
}

pub async fn api_analytics_monthly(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.hub.monthly()).unwrap_or_default()
}

pub async fn api_analytics_expenses(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.hub.expense_shares()).unwrap_or_default()
}

pub async fn api_analytics_departments(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.hub.departments()).unwrap_or_default()
}
