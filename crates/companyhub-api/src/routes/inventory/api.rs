//! Inventory API endpoints - JSON API and HTMX partial responses

use crate::{ApiError, AppState};
use axum::extract::Query;
use companyhub_core::{CoreError, StockLevel};
use std::collections::HashMap;

pub async fn api_inventory(
    state: axum::extract::State<AppState>,
    query: Query<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let items = match query.0.get("level") {
        Some(raw) => {
            let level: StockLevel = raw.parse().map_err(|e: CoreError| ApiError::BadRequest {
                message: e.to_string(),
            })?;
            state.hub.items_by_level(level)
        }
        None => state.hub.inventory().to_vec(),
    };
    Ok(serde_json::to_string(&items).unwrap_or_default())
}

pub async fn api_inventory_summary(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.hub.inventory_summary()).unwrap_or_default()
}

pub async fn htmx_inventory_list(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    axum::response::Html(super::page::render_item_rows(&state.hub))
}
