//! Analytics page rendering - Full page endpoints
//!
//! The page embeds the serialized chart feeds and hands them to the chart
//! library loaded from a CDN; all figures come from the core, the page only
//! renders.

use crate::AppState;

/// Analytics page - KPI tiles plus four charts
pub async fn page_analytics(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let hub = &state.hub;
    let kpis = hub.analytics_kpis();

    let monthly = serde_json::to_string(&hub.monthly_chart()).unwrap_or_default();
    let expenses = serde_json::to_string(&hub.expense_chart()).unwrap_or_default();
    let growth = serde_json::to_string(&hub.project_growth_chart()).unwrap_or_default();
    let departments = serde_json::to_string(&hub.department_chart()).unwrap_or_default();

    let mut inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Analytics Dashboard</h2><p class='text-gray-600 mt-1'>Visual insights into your company's performance</p></div>
        <div class='grid grid-cols-1 md:grid-cols-4 gap-6 mb-6'>
            <div class='bg-blue-50 p-4 rounded-lg border border-blue-200'><p class='text-sm font-medium text-blue-800'>Growth Rate</p><p class='text-2xl font-bold text-blue-700'>{:+.1}%</p><p class='text-xs text-blue-600 mt-1'>vs last month</p></div>
            <div class='bg-green-50 p-4 rounded-lg border border-green-200'><p class='text-sm font-medium text-green-800'>Profit Margin</p><p class='text-2xl font-bold text-green-700'>{:.1}%</p><p class='text-xs text-green-600 mt-1'>Over the period</p></div>
            <div class='bg-purple-50 p-4 rounded-lg border border-purple-200'><p class='text-sm font-medium text-purple-800'>Team Efficiency</p><p class='text-2xl font-bold text-purple-700'>{:.1}%</p><p class='text-xs text-purple-600 mt-1'>Task completion</p></div>
            <div class='bg-orange-50 p-4 rounded-lg border border-orange-200'><p class='text-sm font-medium text-orange-800'>Resource Utilization</p><p class='text-2xl font-bold text-orange-700'>{:.1}%</p><p class='text-xs text-orange-600 mt-1'>Items fully stocked</p></div>
        </div>
        <div class='grid grid-cols-1 lg:grid-cols-2 gap-6'>
            <div class='bg-white rounded-xl shadow-sm p-6'><h3 class='text-lg font-semibold mb-4'>Revenue vs Expenses</h3><canvas id='chart-monthly' height='300'></canvas></div>
            <div class='bg-white rounded-xl shadow-sm p-6'><h3 class='text-lg font-semibold mb-4'>Expense Distribution</h3><canvas id='chart-expenses' height='300'></canvas></div>
            <div class='bg-white rounded-xl shadow-sm p-6'><h3 class='text-lg font-semibold mb-4'>Project Growth Trend</h3><canvas id='chart-growth' height='300'></canvas></div>
            <div class='bg-white rounded-xl shadow-sm p-6'><h3 class='text-lg font-semibold mb-4'>Department Task Completion</h3><canvas id='chart-departments' height='300'></canvas></div>
        </div>
        <script src='https://cdn.jsdelivr.net/npm/chart.js@4.4.1'></script>"#,
        kpis.growth_rate, kpis.profit_margin, kpis.team_efficiency, kpis.resource_utilization,
    );

    inner_content.push_str(&format!(
        "<script>const chartSpecs = {{ monthly: {}, expenses: {}, growth: {}, departments: {} }}; const showLegend = {};</script>",
        monthly, expenses, growth, departments, state.config.charts.show_legend,
    ));

    // chart library glue: maps the core's dataset shape onto the library's
    inner_content.push_str(
        r#"<script>
        function renderChart(id, spec) {
            const stacked = spec.chart_type === 'stackedbar';
            new Chart(document.getElementById(id), {
                type: stacked ? 'bar' : spec.chart_type,
                data: {
                    labels: spec.labels,
                    datasets: spec.datasets.map(d => ({
                        label: d.label,
                        data: d.data,
                        backgroundColor: d.background_color,
                        borderColor: d.border_color,
                    })),
                },
                options: {
                    responsive: true,
                    plugins: { legend: { display: showLegend } },
                    scales: stacked
                        ? { x: { stacked: true }, y: { stacked: true, max: 100 } }
                        : undefined,
                },
            });
        }
        renderChart('chart-monthly', chartSpecs.monthly);
        renderChart('chart-expenses', chartSpecs.expenses);
        renderChart('chart-growth', chartSpecs.growth);
        renderChart('chart-departments', chartSpecs.departments);
        </script>"#,
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Analytics",
        "/analytics",
        &state.config,
        &inner_content,
    ))
}
