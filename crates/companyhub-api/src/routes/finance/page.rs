//! Finance page rendering - Full page endpoints

use crate::AppState;
use companyhub_core::{Hub, TransactionKind};
use companyhub_utils::escape_html;

/// Financial notebook page - summary cards plus the transaction list
pub async fn page_finance(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let hub = &state.hub;
    let report = hub.finance_report();

    let positive = !report.net_flow.is_sign_negative();
    let (net_card, net_title, net_value, net_note, net_label) = if positive {
        (
            "bg-blue-50 border-blue-200",
            "text-blue-800",
            "text-blue-700",
            "text-blue-600",
            "Profit this month",
        )
    } else {
        (
            "bg-orange-50 border-orange-200",
            "text-orange-800",
            "text-orange-700",
            "text-orange-600",
            "Loss this month",
        )
    };

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Financial Notebook</h2><p class='text-gray-600 mt-1'>Track your company's money flow and expenses</p></div>
        <div class='grid grid-cols-1 md:grid-cols-3 gap-6 mb-6'>
            <div class='bg-green-50 p-4 rounded-lg border border-green-200'><p class='text-sm font-medium text-green-800'>Total Income</p><p class='text-2xl font-bold text-green-700'>{}</p><p class='text-xs text-green-600 mt-1'>This month</p></div>
            <div class='bg-red-50 p-4 rounded-lg border border-red-200'><p class='text-sm font-medium text-red-800'>Total Expenses</p><p class='text-2xl font-bold text-red-700'>{}</p><p class='text-xs text-red-600 mt-1'>This month</p></div>
            <div class='{} p-4 rounded-lg border'><p class='text-sm font-medium {}'>Net Flow</p><p class='text-2xl font-bold {}'>{}</p><p class='text-xs mt-1 {}'>{}</p></div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Recent Transactions</h3>
            <div id='finance-content' hx-get='/finance/list' hx-trigger='load'>
                <p class='text-gray-500 text-center'>Loading...</p>
            </div>
        </div>"#,
        hub.format_money(report.total_income),
        hub.format_money(report.total_expenses),
        net_card,
        net_title,
        net_value,
        hub.format_money(report.net_flow),
        net_note,
        net_label,
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Financial Notebook",
        "/finance",
        &state.config,
        &inner_content,
    ))
}

/// Render the transaction rows for the HTMX list partial
pub fn render_transaction_rows(hub: &Hub) -> String {
    let mut html = String::from("<div class='space-y-3'>");
    for tx in hub.transactions() {
        let (icon_class, icon, amount_class, sign) = match tx.kind {
            TransactionKind::Income => ("bg-green-100 text-green-600", "▲", "text-green-600", "+"),
            TransactionKind::Expense => ("bg-red-100 text-red-600", "▼", "text-red-600", "-"),
        };
        html.push_str(&format!(
            r#"<div class='flex items-center justify-between p-4 border border-gray-200 rounded-lg hover:bg-gray-50'>
                <div class='flex items-center gap-4'>
                    <div class='p-2 rounded-full {}'>{}</div>
                    <div>
                        <h3 class='font-medium text-gray-900'>{}</h3>
                        <div class='flex items-center gap-2 mt-1'>
                            <span class='text-sm text-gray-500'>{}</span>
                            <span class='text-xs border rounded px-2 py-0.5'>{}</span>
                        </div>
                    </div>
                </div>
                <div class='text-lg font-semibold {}'>{}{}</div>
            </div>"#,
            icon_class,
            icon,
            escape_html(&tx.description),
            tx.date,
            escape_html(&tx.category),
            amount_class,
            sign,
            hub.format_money(tx.amount)
        ));
    }
    html.push_str("</div>");
    html
}
