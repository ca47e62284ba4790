//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::tasks: Task list and stats
//! - routes::finance: Ledger summary and transaction list
//! - routes::inventory: Stock list and level summary
//! - routes::projects: Project cards and stats
//! - routes::analytics: KPI tiles and chart feeds
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use companyhub_config::Config;
use companyhub_core::Hub;
use companyhub_utils::escape_html;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub hub: Arc<Hub>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::analytics::{
        api_analytics_departments, api_analytics_expenses, api_analytics_kpis,
        api_analytics_monthly, page_analytics,
    };
    use routes::finance::{
        api_finance_summary, api_transaction_detail, api_transactions, htmx_finance_list,
        page_finance,
    };
    use routes::inventory::{
        api_inventory, api_inventory_summary, htmx_inventory_list, page_inventory,
    };
    use routes::projects::{
        api_project_detail, api_project_stats, api_projects, htmx_projects_list, page_projects,
    };
    use routes::settings::{api_settings, page_settings};
    use routes::tasks::{api_task_stats, api_tasks, htmx_tasks_list, page_tasks};

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/summary", get(api_summary))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/:id", get(api_transaction_detail))
        .route("/api/finance/summary", get(api_finance_summary))
        .route("/api/inventory", get(api_inventory))
        .route("/api/inventory/summary", get(api_inventory_summary))
        .route("/api/tasks", get(api_tasks))
        .route("/api/tasks/stats", get(api_task_stats))
        .route("/api/projects", get(api_projects))
        .route("/api/projects/stats", get(api_project_stats))
        .route("/api/projects/:id", get(api_project_detail))
        .route("/api/analytics/kpis", get(api_analytics_kpis))
        .route("/api/analytics/monthly", get(api_analytics_monthly))
        .route("/api/analytics/expenses", get(api_analytics_expenses))
        .route("/api/analytics/departments", get(api_analytics_departments))
        .route("/api/settings", get(api_settings))
        // Page routes
        .route("/", get(index_page))
        .route("/dashboard", get(page_dashboard))
        .route("/tasks", get(page_tasks))
        .route("/finance", get(page_finance))
        .route("/inventory", get(page_inventory))
        .route("/projects", get(page_projects))
        .route("/analytics", get(page_analytics))
        .route("/settings", get(page_settings))
        // HTMX partial routes (for list content)
        .route("/tasks/list", get(htmx_tasks_list))
        .route("/finance/list", get(htmx_finance_list))
        .route("/inventory/list", get(htmx_inventory_list))
        .route("/projects/list", get(htmx_projects_list))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Get hub summary (JSON API)
async fn api_summary(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.hub.summary()).unwrap_or_default()
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - CompanyHub</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str, config: &Config) -> String {
    let links = [
        ("/", "Dashboard", "dashboard"),
        ("/tasks", "Tasks & Roles", "tasks"),
        ("/finance", "Financial Notebook", "finance"),
        ("/inventory", "Inventory", "inventory"),
        ("/projects", "Projects", "projects"),
        ("/analytics", "Analytics", "analytics"),
        ("/settings", "Settings", "settings"),
    ];

    let mut nav = format!(
        "<div class='bg-white border-r h-screen flex flex-col'><div class='p-4 border-b'><h1 class='text-xl font-bold text-blue-600'>{}</h1><p class='text-sm text-gray-500'>{}</p></div><ul class='flex-1 py-2 space-y-1 px-2'>",
        escape_html(&config.company.name),
        escape_html(&config.company.tagline)
    );

    for (path, label, id) in &links {
        let is_active = if *path == "/" {
            current_path == "/"
        } else {
            current_path.starts_with(path)
        };
        let active_class = if is_active {
            "bg-blue-50 text-blue-700"
        } else {
            "text-gray-600 hover:bg-gray-50"
        };
        let icon = match *id {
            "dashboard" => "📊",
            "tasks" => "📋",
            "finance" => "💰",
            "inventory" => "📦",
            "projects" => "📁",
            "analytics" => "📈",
            "settings" => "⚙️",
            _ => "📄",
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'>{}<span>{}</span></a></li>"#,
            path,
            active_class,
            icon,
            escape_html(label)
        ));
    }
    nav.push_str("</ul></div>");
    nav
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(
    headers: &axum::http::HeaderMap,
    title: &str,
    current_path: &str,
    config: &Config,
    inner_content: &str,
) -> String {
    if is_htmx_request(headers) {
        // HTMX partial - just the content area (no sidebar for partial updates)
        format!(
            r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
            inner_content
        )
    } else {
        // Full page - wrap with base HTML and sidebar
        base_html(
            title,
            &format!(
                r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
                nav_sidebar(current_path, config),
                inner_content
            ),
        )
    }
}

/// Index page - dashboard with headline metrics
async fn index_page(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let hub = &state.hub;
    let overview = hub.overview();
    let net_flow = hub.format_money(overview.net_flow);

    // recent-activity card entries, pulled from the collections
    let mut activity = String::new();
    if let Some(project) = hub
        .projects_by_status(companyhub_core::ProjectStatus::Completed)
        .into_iter()
        .next()
    {
        activity.push_str(&format!(
            r#"<div class='flex items-start gap-3 p-3 bg-green-50 rounded-lg'><span>✅</span><div><p class='text-sm font-medium text-gray-900'>{} completed</p><p class='text-xs text-gray-500'>{}</p></div></div>"#,
            escape_html(&project.name),
            project.last_update
        ));
    }
    if let Some(tx) = hub
        .transactions_by_kind(companyhub_core::TransactionKind::Expense)
        .into_iter()
        .next()
    {
        activity.push_str(&format!(
            r#"<div class='flex items-start gap-3 p-3 bg-blue-50 rounded-lg'><span>📈</span><div><p class='text-sm font-medium text-gray-900'>New expense added: {}</p><p class='text-xs text-gray-500'>{}</p></div></div>"#,
            hub.format_money(tx.amount),
            tx.date
        ));
    }
    if let Some(item) = hub
        .items_by_level(companyhub_core::StockLevel::LowStock)
        .into_iter()
        .next()
    {
        activity.push_str(&format!(
            r#"<div class='flex items-start gap-3 p-3 bg-orange-50 rounded-lg'><span>⚠️</span><div><p class='text-sm font-medium text-gray-900'>Low stock alert: {}</p><p class='text-xs text-gray-500'>{}</p></div></div>"#,
            escape_html(&item.name),
            item.last_updated
        ));
    }

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Dashboard</h2><p class='text-gray-600 mt-1'>Welcome to your company management hub</p></div>
        <div class='grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-6'>
            <div class='bg-white p-4 rounded-lg border border-gray-200'><p class='text-sm text-gray-600'>Active Projects</p><p class='text-2xl font-bold text-gray-900'>{}</p></div>
            <div class='bg-white p-4 rounded-lg border border-gray-200'><p class='text-sm text-gray-600'>Team Members</p><p class='text-2xl font-bold text-gray-900'>{}</p></div>
            <div class='bg-white p-4 rounded-lg border border-gray-200'><p class='text-sm text-gray-600'>Net Flow</p><p class='text-2xl font-bold text-blue-700'>{}</p></div>
            <div class='bg-white p-4 rounded-lg border border-gray-200'><p class='text-sm text-gray-600'>Inventory Items</p><p class='text-2xl font-bold text-gray-900'>{}</p><p class='text-xs text-gray-500 mt-1'>{} low stock</p></div>
        </div>
        <div class='grid grid-cols-1 lg:grid-cols-2 gap-6'>
            <div class='bg-white rounded-xl shadow-sm p-6'>
                <h3 class='text-lg font-semibold mb-4'>Recent Activity</h3>
                <div class='space-y-4'>{}</div>
            </div>
            <div class='bg-white rounded-xl shadow-sm p-6'>
                <h3 class='text-lg font-semibold mb-4'>Quick Actions</h3>
                <div class='grid grid-cols-2 gap-3'>
                    <a href='/projects' class='p-4 bg-blue-50 hover:bg-blue-100 rounded-lg transition-colors'><p class='text-sm font-medium text-gray-900'>New Project</p><p class='text-xs text-gray-500'>Create project</p></a>
                    <a href='/tasks' class='p-4 bg-green-50 hover:bg-green-100 rounded-lg transition-colors'><p class='text-sm font-medium text-gray-900'>Assign Task</p><p class='text-xs text-gray-500'>Delegate work</p></a>
                    <a href='/finance' class='p-4 bg-purple-50 hover:bg-purple-100 rounded-lg transition-colors'><p class='text-sm font-medium text-gray-900'>Add Expense</p><p class='text-xs text-gray-500'>Track spending</p></a>
                    <a href='/inventory' class='p-4 bg-orange-50 hover:bg-orange-100 rounded-lg transition-colors'><p class='text-sm font-medium text-gray-900'>Update Stock</p><p class='text-xs text-gray-500'>Manage inventory</p></a>
                </div>
            </div>
        </div>"#,
        overview.active_projects,
        overview.team_members,
        net_flow,
        overview.inventory_items,
        overview.low_stock_items,
        activity
    );

    axum::response::Html(page_response(
        &headers,
        "Dashboard",
        "/",
        &state.config,
        &inner_content,
    ))
}

/// Dashboard page (alias for index)
async fn page_dashboard(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    index_page(state, headers).await
}

/// Start the HTTP server
///
/// Creates the router, binds to the configured address, and serves requests
/// until shutdown.
pub async fn start_server(config: Config, hub: Arc<Hub>) {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { hub, config };

    let router = create_router(state);

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("failed to bind {}: {}", addr, e);
            return;
        }
    };
    log::info!("starting CompanyHub server on http://{}", addr);
    log::info!("available routes:");
    log::info!("  - / (Dashboard)");
    log::info!("  - /tasks (Tasks & Roles)");
    log::info!("  - /finance (Financial Notebook)");
    log::info!("  - /inventory (Inventory)");
    log::info!("  - /projects (Projects)");
    log::info!("  - /analytics (Analytics)");
    log::info!("  - /settings (Configuration)");
    log::info!("  - /api/* (JSON API endpoints)");

    match axum::serve(listener, router).await {
        Ok(_) => log::info!("server stopped gracefully"),
        Err(e) => log::error!("server error: {}", e),
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_sidebar_highlights_current_path() {
        let config = Config::default();
        let nav = nav_sidebar("/finance", &config);
        assert!(nav.contains("href='/finance' class='flex items-center gap-2 px-3 py-2 rounded-lg bg-blue-50 text-blue-700'"));
        // the dashboard entry only matches "/" exactly
        assert!(nav.contains("href='/' class='flex items-center gap-2 px-3 py-2 rounded-lg text-gray-600 hover:bg-gray-50'"));
    }

    #[test]
    fn test_nav_sidebar_root_is_exact_match() {
        let config = Config::default();
        let nav = nav_sidebar("/", &config);
        assert!(nav.contains("href='/' class='flex items-center gap-2 px-3 py-2 rounded-lg bg-blue-50 text-blue-700'"));
    }

    #[test]
    fn test_nav_sidebar_escapes_labels() {
        let config = Config::default();
        let nav = nav_sidebar("/", &config);
        assert!(nav.contains("Tasks &amp; Roles"));
    }

    #[test]
    fn test_base_html_includes_title() {
        let html = base_html("Inventory", "<p>body</p>");
        assert!(html.contains("<title>Inventory - CompanyHub</title>"));
        assert!(html.contains("<p>body</p>"));
    }
}
