//! Task API endpoints - JSON API and HTMX partial responses

use crate::{ApiError, AppState};
use axum::extract::Query;
use companyhub_core::{CoreError, TaskStatus};
use std::collections::HashMap;

pub async fn api_tasks(
    state: axum::extract::State<AppState>,
    query: Query<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let tasks = match query.0.get("status") {
        Some(raw) => {
            let status: TaskStatus = raw.parse().map_err(|e: CoreError| ApiError::BadRequest {
                message: e.to_string(),
            })?;
            state.hub.tasks_by_status(status)
        }
        None => state.hub.tasks().to_vec(),
    };
    Ok(serde_json::to_string(&tasks).unwrap_or_default())
}

pub async fn api_task_stats(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.hub.task_stats()).unwrap_or_default()
}

pub async fn htmx_tasks_list(state: axum::extract::State<AppState>) -> axum::response::Html<String> {
    axum::response::Html(super::page::render_task_rows(&state.hub))
}
