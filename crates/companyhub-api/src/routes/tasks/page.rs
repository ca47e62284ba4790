//! Task page rendering - Full page endpoints

use crate::AppState;
use companyhub_core::{Hub, TaskPriority, TaskStatus};
use companyhub_utils::escape_html;

/// Badge classes per priority
pub fn priority_badge_class(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::High => "bg-red-100 text-red-800",
        TaskPriority::Medium => "bg-yellow-100 text-yellow-800",
        TaskPriority::Low => "bg-green-100 text-green-800",
    }
}

/// Badge classes per status
pub fn status_badge_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "bg-green-100 text-green-800",
        TaskStatus::InProgress => "bg-blue-100 text-blue-800",
        TaskStatus::Pending => "bg-gray-100 text-gray-800",
    }
}

/// Tasks page - status tiles plus the task list
pub async fn page_tasks(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let stats = state.hub.task_stats();

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Tasks &amp; Roles</h2><p class='text-gray-600 mt-1'>Manage team assignments and track progress</p></div>
        <div class='grid grid-cols-1 md:grid-cols-4 gap-4 mb-6'>
            <div class='bg-white p-4 rounded-lg border border-gray-200'><p class='text-2xl font-bold text-gray-900'>{}</p><p class='text-sm text-gray-600'>Total Tasks</p></div>
            <div class='bg-blue-50 p-4 rounded-lg border border-blue-200'><p class='text-2xl font-bold text-blue-600'>{}</p><p class='text-sm text-gray-600'>In Progress</p></div>
            <div class='bg-green-50 p-4 rounded-lg border border-green-200'><p class='text-2xl font-bold text-green-600'>{}</p><p class='text-sm text-gray-600'>Completed</p></div>
            <div class='bg-orange-50 p-4 rounded-lg border border-orange-200'><p class='text-2xl font-bold text-orange-600'>{}</p><p class='text-sm text-gray-600'>Overdue</p></div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Active Tasks</h3>
            <div id='tasks-content' hx-get='/tasks/list' hx-trigger='load'>
                <p class='text-gray-500 text-center'>Loading...</p>
            </div>
        </div>"#,
        stats.total, stats.in_progress, stats.completed, stats.overdue,
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Tasks & Roles",
        "/tasks",
        &state.config,
        &inner_content,
    ))
}

/// Render the task rows for the HTMX list partial
pub fn render_task_rows(hub: &Hub) -> String {
    let mut html = String::from("<div class='space-y-4'>");
    for task in hub.tasks() {
        let pending_marker = if task.status == TaskStatus::Pending {
            "<span class='text-orange-500'>●</span>"
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<div class='p-4 border border-gray-200 rounded-lg hover:bg-gray-50'>
                <div class='flex items-start justify-between'>
                    <div class='flex-1'>
                        <div class='flex items-center gap-3 mb-2'>
                            <h3 class='font-semibold text-gray-900'>{}</h3>
                            <span class='text-xs rounded px-2 py-0.5 {}'>{}</span>
                            <span class='text-xs rounded px-2 py-0.5 {}'>{}</span>
                        </div>
                        <p class='text-gray-600 text-sm mb-3'>{}</p>
                        <div class='flex items-center gap-4 text-sm text-gray-500'>
                            <span>{} <span class='text-gray-400'>·</span> <span class='text-blue-600'>{}</span></span>
                            <span>Due: {}</span>
                        </div>
                    </div>
                    {}
                </div>
            </div>"#,
            escape_html(&task.title),
            priority_badge_class(task.priority),
            task.priority.label(),
            status_badge_class(task.status),
            task.status.label(),
            escape_html(&task.description),
            escape_html(&task.assignee),
            escape_html(&task.role),
            task.due_date,
            pending_marker,
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
    fn test_priority_badge_classes() {
        assert_eq!(priority_badge_class(TaskPriority::High), "bg-red-100 text-red-800");
        assert_eq!(priority_badge_class(TaskPriority::Medium), "bg-yellow-100 text-yellow-800");
        assert_eq!(priority_badge_class(TaskPriority::Low), "bg-green-100 text-green-800");
    }

    #[test]
    fn test_status_badge_classes() {
        assert_eq!(status_badge_class(TaskStatus::Completed), "bg-green-100 text-green-800");
        assert_eq!(status_badge_class(TaskStatus::InProgress), "bg-blue-100 text-blue-800");
        assert_eq!(status_badge_class(TaskStatus::Pending), "bg-gray-100 text-gray-800");
    }
}
