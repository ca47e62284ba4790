//! Project routes - Project cards and progress stats

pub mod api;
pub mod page;

pub use api::{api_project_detail, api_project_stats, api_projects, htmx_projects_list};
pub use page::page_projects;
