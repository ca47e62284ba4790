//! Inventory page rendering - Full page endpoints

use crate::AppState;
use companyhub_core::{Hub, StockLevel};
use companyhub_utils::escape_html;

/// Badge classes per stock level
pub fn level_badge_class(level: StockLevel) -> &'static str {
    match level {
        StockLevel::InStock => "bg-green-100 text-green-800",
        StockLevel::LowStock => "bg-yellow-100 text-yellow-800",
        StockLevel::OutOfStock => "bg-red-100 text-red-800",
    }
}

/// Inventory page - level summary tiles plus the item list
pub async fn page_inventory(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let summary = state.hub.inventory_summary();

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Inventory Management</h2><p class='text-gray-600 mt-1'>Track and manage your company's stock and materials</p></div>
        <div class='grid grid-cols-1 md:grid-cols-4 gap-6 mb-6'>
            <div class='bg-white p-4 rounded-lg border border-gray-200'><p class='text-sm font-medium text-gray-600'>Total Items</p><p class='text-2xl font-bold text-gray-900'>{}</p><p class='text-xs text-gray-500 mt-1'>In inventory</p></div>
            <div class='bg-green-50 p-4 rounded-lg border border-green-200'><p class='text-sm font-medium text-green-800'>In Stock</p><p class='text-2xl font-bold text-green-700'>{}</p><p class='text-xs text-green-600 mt-1'>Items available</p></div>
            <div class='bg-yellow-50 p-4 rounded-lg border border-yellow-200'><p class='text-sm font-medium text-yellow-800'>Low Stock</p><p class='text-2xl font-bold text-yellow-700'>{}</p><p class='text-xs text-yellow-600 mt-1'>Need reorder</p></div>
            <div class='bg-red-50 p-4 rounded-lg border border-red-200'><p class='text-sm font-medium text-red-800'>Out of Stock</p><p class='text-2xl font-bold text-red-700'>{}</p><p class='text-xs text-red-600 mt-1'>Urgent reorder</p></div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Inventory Items</h3>
            <div id='inventory-content' hx-get='/inventory/list' hx-trigger='load'>
                <p class='text-gray-500 text-center'>Loading...</p>
            </div>
        </div>"#,
        summary.total_items, summary.in_stock, summary.low_stock, summary.out_of_stock,
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Inventory",
        "/inventory",
        &state.config,
        &inner_content,
    ))
}

/// Render the item rows for the HTMX list partial
pub fn render_item_rows(hub: &Hub) -> String {
    let mut html = String::from("<div class='space-y-3'>");
    for item in hub.inventory() {
        let level = item.stock_level();
        html.push_str(&format!(
            r#"<div class='flex items-center justify-between p-4 border border-gray-200 rounded-lg hover:bg-gray-50'>
                <div class='flex items-center gap-4'>
                    <div class='p-2 bg-blue-100 text-blue-600 rounded-full'>📦</div>
                    <div>
                        <h3 class='font-medium text-gray-900'>{}</h3>
                        <div class='flex items-center gap-3 mt-1'>
                            <span class='text-sm text-gray-500'>{}</span>
                            <span class='text-xs border rounded px-2 py-0.5'>{} {}</span>
                            <span class='text-xs rounded px-2 py-0.5 {}'>{}</span>
                        </div>
                    </div>
                </div>
                <div class='text-right'>
                    <div class='text-lg font-semibold text-gray-900'>{} / {}</div>
                    <p class='text-xs text-gray-500'>Current / Min Stock</p>
                </div>
            </div>"#,
            escape_html(&item.name),
            escape_html(&item.category),
            item.quantity,
            escape_html(&item.unit),
            level_badge_class(level),
            level.label(),
            item.quantity,
            item.min_stock,
        ));
    }
    html.push_str("</div>");
    html
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_badge_classes() {
        assert_eq!(level_badge_class(StockLevel::InStock), "bg-green-100 text-green-800");
        assert_eq!(level_badge_class(StockLevel::LowStock), "bg-yellow-100 text-yellow-800");
        assert_eq!(level_badge_class(StockLevel::OutOfStock), "bg-red-100 text-red-800");
    }
}
