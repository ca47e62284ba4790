//! Settings API endpoints - JSON API

use crate::AppState;

pub async fn api_settings(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.config).unwrap_or_default()
}
