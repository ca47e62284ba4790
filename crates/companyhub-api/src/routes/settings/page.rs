//! Settings page rendering - Full page endpoints

use crate::AppState;
use companyhub_utils::escape_html;

pub async fn page_settings(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let config = &state.config;

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Settings</h2></div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Server</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>Host</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Port</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Company</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>Name</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Tagline</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Currency</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>Currency</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Symbol</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Decimal Places</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Grouping</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Symbol Position</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Charts</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>Default Chart Type</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Legend</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Logging</h3>
            <div><p class='text-sm text-gray-500'>Level</p><p class='font-medium'>{}</p></div>
        </div>"#,
        escape_html(&config.server.host),
        config.server.port,
        escape_html(&config.company.name),
        escape_html(&config.company.tagline),
        escape_html(&config.currency.currency),
        escape_html(&config.currency.symbol),
        config.currency.decimal_places,
        config.currency.grouping,
        config.currency.symbol_position,
        config.charts.default_chart_type,
        if config.charts.show_legend { "Shown" } else { "Hidden" },
        escape_html(&config.logging.level),
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Settings",
        "/settings",
        &state.config,
        &inner_content,
    ))
}
