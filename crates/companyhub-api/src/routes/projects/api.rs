//! Project API endpoints - JSON API and HTMX partial responses

use crate::{ApiError, AppState};
use axum::extract::Query;
use companyhub_core::{CoreError, ProjectStatus};
use std::collections::HashMap;

pub async fn api_projects(
    state: axum::extract::State<AppState>,
    query: Query<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let projects = match query.0.get("status") {
        Some(raw) => {
            let status: ProjectStatus =
                raw.parse().map_err(|e: CoreError| ApiError::BadRequest {
                    message: e.to_string(),
                })?;
            state.hub.projects_by_status(status)
        }
        None => state.hub.projects().to_vec(),
    };
    Ok(serde_json::to_string(&projects).unwrap_or_default())
}

pub async fn api_project_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<u32>,
) -> Result<String, ApiError> {
    let project = state.hub.project(path.0).ok_or_else(|| ApiError::NotFound {
        resource: format!("project {}", path.0),
    })?;
    Ok(serde_json::to_string(&project).unwrap_or_default())
}

pub async fn api_project_stats(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.hub.project_stats()).unwrap_or_default()
}

pub async fn htmx_projects_list(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    axum::response::Html(super::page::render_project_cards(&state.hub))
}
