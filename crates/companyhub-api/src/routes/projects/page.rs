//! Project page rendering - Full page endpoints

use crate::AppState;
use companyhub_core::{Hub, ProjectStatus};
use companyhub_utils::escape_html;

/// Badge classes per status
pub fn status_badge_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Planning => "bg-blue-100 text-blue-800",
        ProjectStatus::InProgress => "bg-green-100 text-green-800",
        ProjectStatus::Completed => "bg-gray-100 text-gray-800",
        ProjectStatus::OnHold => "bg-yellow-100 text-yellow-800",
    }
}

/// Progress bar fill color by completion band
pub fn progress_bar_class(progress: u8) -> &'static str {
    if progress >= 80 {
        "bg-green-500"
    } else if progress >= 50 {
        "bg-blue-500"
    } else if progress >= 25 {
        "bg-yellow-500"
    } else {
        "bg-red-500"
    }
}

/// Projects page - stats tiles plus one card per project
pub async fn page_projects(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let stats = state.hub.project_stats();

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Project Management</h2><p class='text-gray-600 mt-1'>Track project progress and daily updates</p></div>
        <div class='grid grid-cols-1 md:grid-cols-4 gap-6 mb-6'>
            <div class='bg-white p-4 rounded-lg border border-gray-200'><p class='text-2xl font-bold text-gray-900'>{}</p><p class='text-sm text-gray-600'>Total Projects</p></div>
            <div class='bg-green-50 p-4 rounded-lg border border-green-200'><p class='text-2xl font-bold text-green-600'>{}</p><p class='text-sm text-gray-600'>Active Projects</p></div>
            <div class='bg-blue-50 p-4 rounded-lg border border-blue-200'><p class='text-2xl font-bold text-blue-600'>{}</p><p class='text-sm text-gray-600'>Completed</p></div>
            <div class='bg-purple-50 p-4 rounded-lg border border-purple-200'><p class='text-2xl font-bold text-purple-600'>{}%</p><p class='text-sm text-gray-600'>Avg Progress</p></div>
        </div>
        <div id='projects-content' hx-get='/projects/list' hx-trigger='load'>
            <p class='text-gray-500 text-center'>Loading...</p>
        </div>"#,
        stats.total, stats.active, stats.completed, stats.average_progress,
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Projects",
        "/projects",
        &state.config,
        &inner_content,
    ))
}

/// Render one card per project for the HTMX list partial
pub fn render_project_cards(hub: &Hub) -> String {
    let mut html = String::from("<div class='space-y-4'>");
    for project in hub.projects() {
        html.push_str(&format!(
            r#"<div class='bg-white rounded-xl shadow-sm border border-gray-200 p-6'>
                <div class='flex items-center justify-between mb-4'>
                    <div>
                        <h3 class='text-lg font-semibold text-gray-900'>{}</h3>
                        <p class='text-gray-600 text-sm mt-1'>{}</p>
                    </div>
                    <span class='text-xs rounded px-2 py-0.5 {}'>{}</span>
                </div>
                <div class='mb-4'>
                    <div class='flex items-center justify-between mb-2'>
                        <span class='text-sm font-medium text-gray-700'>Progress</span>
                        <span class='text-sm text-gray-500'>{}%</span>
                    </div>
                    <div class='w-full bg-gray-200 rounded-full h-2'>
                        <div class='h-2 rounded-full {}' style='width: {}%'></div>
                    </div>
                </div>
                <div class='grid grid-cols-1 md:grid-cols-3 gap-4 text-sm text-gray-600 mb-4'>
                    <span>📅 {} - {}</span>
                    <span>👥 {} team members</span>
                    <span>🕑 Updated: {}</span>
                </div>
                <div class='bg-gray-50 rounded-lg p-3'>
                    <p class='text-sm font-medium text-gray-900'>Daily Update</p>
                    <p class='text-sm text-gray-600 mt-1'>{}</p>
                </div>
            </div>"#,
            escape_html(&project.name),
            escape_html(&project.description),
            status_badge_class(project.status),
            project.status.label(),
            project.progress,
            progress_bar_class(project.progress),
            project.progress,
            project.start_date,
            project.end_date,
            project.team_size,
            project.last_update,
            escape_html(&project.daily_update),
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
    fn test_status_badge_classes() {
        assert_eq!(status_badge_class(ProjectStatus::Planning), "bg-blue-100 text-blue-800");
        assert_eq!(status_badge_class(ProjectStatus::InProgress), "bg-green-100 text-green-800");
        assert_eq!(status_badge_class(ProjectStatus::Completed), "bg-gray-100 text-gray-800");
        assert_eq!(status_badge_class(ProjectStatus::OnHold), "bg-yellow-100 text-yellow-800");
    }

    #[test]
    fn test_progress_bar_bands() {
        assert_eq!(progress_bar_class(100), "bg-green-500");
        assert_eq!(progress_bar_class(80), "bg-green-500");
        assert_eq!(progress_bar_class(79), "bg-blue-500");
        assert_eq!(progress_bar_class(50), "bg-blue-500");
        assert_eq!(progress_bar_class(49), "bg-yellow-500");
        assert_eq!(progress_bar_class(25), "bg-yellow-500");
        assert_eq!(progress_bar_class(24), "bg-red-500");
        assert_eq!(progress_bar_class(0), "bg-red-500");
    }
}
