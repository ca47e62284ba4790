//! Finance API endpoints - JSON API and HTMX partial responses

use crate::{ApiError, AppState};
use axum::extract::Query;
use companyhub_core::{CoreError, TransactionKind};
use std::collections::HashMap;

pub async fn api_transactions(
    state: axum::extract::State<AppState>,
    query: Query<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let transactions = match query.0.get("kind") {
        Some(raw) => {
            let kind: TransactionKind = raw.parse().map_err(|e: CoreError| ApiError::BadRequest {
                message: e.to_string(),
            })?;
            state.hub.transactions_by_kind(kind)
        }
        None => state.hub.transactions().to_vec(),
    };
    Ok(serde_json::to_string(&transactions).unwrap_or_default())
}

pub async fn api_transaction_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<u32>,
) -> Result<String, ApiError> {
    let transaction = state.hub.transaction(path.0).ok_or_else(|| ApiError::NotFound {
        resource: format!("transaction {}", path.0),
    })?;
    Ok(serde_json::to_string(&transaction).unwrap_or_default())
}

pub async fn api_finance_summary(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.hub.finance_report()).unwrap_or_default()
}

pub async fn htmx_finance_list(state: axum::extract::State<AppState>) -> axum::response::Html<String> {
    axum::response::Html(super::page::render_transaction_rows(&state.hub))
}
