//! Core domain model and aggregate computation
//!
//! Holds the per-view record types (transactions, inventory, projects,
//! tasks, analytics series) and the [`Hub`] facade that derives every
//! summary figure the pages display. All computation is a pure scan over an
//! immutable dataset; recomputing any aggregate yields identical results.

pub mod currency;
pub mod error;
pub mod fixtures;
pub mod metrics;
pub mod reports;

use chrono::NaiveDate;
use companyhub_config::{ChartType, Config};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use currency::format_currency;
pub use error::{CoreError, CoreResult};
pub use reports::{
    AnalyticsKpis, ChartColor, ChartData, ChartDataset, FinanceReport, HubSummary,
    InventorySummary, Overview, ProjectStats, TaskStats,
};

/// Shared categorical color palette for chart datasets
pub const CHART_PALETTE: [&str; 6] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#6B7280",
];

fn normalize_token(s: &str) -> String {
    s.to_lowercase().replace([' ', '_'], "-")
}

// ==================== Transactions ====================

/// Direction of a ledger entry; amounts are always non-negative and the
/// sign is carried here
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Human-readable label for badges
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(CoreError::UnknownValue {
                field: "transaction kind",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    /// Transaction date (YYYY-MM-DD)
    pub date: String,
    pub description: String,
    /// Amount, always >= 0; the sign is carried by `kind`
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
}

impl Transaction {
    /// Get the transaction date as NaiveDate
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Amount with the direction applied: positive for income, negative for
    /// expense
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

// ==================== Inventory ====================

/// Stock level, derived from quantity vs minimum stock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::InStock => "In Stock",
            StockLevel::LowStock => "Low Stock",
            StockLevel::OutOfStock => "Out of Stock",
        }
    }
}

impl std::str::FromStr for StockLevel {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "in-stock" => Ok(StockLevel::InStock),
            "low-stock" => Ok(StockLevel::LowStock),
            "out-of-stock" => Ok(StockLevel::OutOfStock),
            _ => Err(CoreError::UnknownValue {
                field: "stock level",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockLevel::InStock => write!(f, "in-stock"),
            StockLevel::LowStock => write!(f, "low-stock"),
            StockLevel::OutOfStock => write!(f, "out-of-stock"),
        }
    }
}

/// A stocked item
///
/// The stock level is not stored: it is always derived from `quantity` and
/// `min_stock`, so the two can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub min_stock: u32,
    pub unit: String,
    /// Last update date (YYYY-MM-DD)
    pub last_updated: String,
}

impl InventoryItem {
    /// Derive the stock level: empty is out of stock regardless of the
    /// minimum, below minimum is low, everything else is in stock
    pub fn stock_level(&self) -> StockLevel {
        if self.quantity == 0 {
            StockLevel::OutOfStock
        } else if self.quantity < self.min_stock {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }
}

// ==================== Projects ====================

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "planning" => Ok(ProjectStatus::Planning),
            "in-progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            "on-hold" => Ok(ProjectStatus::OnHold),
            _ => Err(CoreError::UnknownValue {
                field: "project status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Planning => write!(f, "planning"),
            ProjectStatus::InProgress => write!(f, "in-progress"),
            ProjectStatus::Completed => write!(f, "completed"),
            ProjectStatus::OnHold => write!(f, "on-hold"),
        }
    }
}

/// A tracked project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Completion percentage, 0-100
    pub progress: u8,
    pub start_date: String,
    pub end_date: String,
    pub team_size: u32,
    pub last_update: String,
    /// Free-text daily status note
    pub daily_update: String,
}

// ==================== Tasks ====================

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            _ => Err(CoreError::UnknownValue {
                field: "task priority",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
        }
    }
}

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(CoreError::UnknownValue {
                field: "task status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in-progress"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A team assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub role: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Due date (YYYY-MM-DD)
    pub due_date: String,
}

impl Task {
    /// Get the due date as NaiveDate
    pub fn due_date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()
    }

    /// A task is overdue when its due date is in the past and it is not
    /// completed. Unparseable dates never count as overdue.
    pub fn is_overdue_as_of(&self, date: NaiveDate) -> bool {
        if self.status == TaskStatus::Completed {
            return false;
        }
        match self.due_date_naive() {
            Some(due) => due < date,
            None => false,
        }
    }
}

// ==================== Analytics Series ====================

/// One month of the revenue/expense/project series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyMetric {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
    pub projects: u32,
}

/// Share of overall spending attributed to one category, in percent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub category: String,
    pub percent: f64,
}

/// Task completion split for one department, in percent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentProgress {
    pub department: String,
    pub completed: f64,
    pub pending: f64,
}

// ==================== Company Data ====================

/// The full read-only dataset backing all views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyData {
    pub transactions: Vec<Transaction>,
    pub inventory: Vec<InventoryItem>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub monthly: Vec<MonthlyMetric>,
    pub expense_shares: Vec<ExpenseShare>,
    pub departments: Vec<DepartmentProgress>,
}

impl CompanyData {
    /// Check the shape invariants the record types cannot express
    pub fn validate(&self) -> CoreResult<()> {
        for tx in &self.transactions {
            if tx.amount.is_sign_negative() {
                return Err(CoreError::ValidationError {
                    message: format!("transaction {} has a negative amount", tx.id),
                });
            }
        }
        for project in &self.projects {
            if project.progress > 100 {
                return Err(CoreError::ValidationError {
                    message: format!(
                        "project {} has progress {} out of range 0-100",
                        project.id, project.progress
                    ),
                });
            }
        }
        Ok(())
    }
}

// ==================== Hub ====================

/// The aggregate-computation facade over the company dataset
///
/// The dataset is injected at construction and never mutated; every report
/// method is a pure scan.
pub struct Hub {
    config: Config,
    data: CompanyData,
}

impl Hub {
    /// Create a hub over a validated dataset
    pub fn new(config: Config, data: CompanyData) -> CoreResult<Self> {
        data.validate()?;
        log::info!(
            "hub initialized: {} transactions, {} inventory items, {} projects, {} tasks",
            data.transactions.len(),
            data.inventory.len(),
            data.projects.len(),
            data.tasks.len()
        );
        Ok(Self { config, data })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Accessors ====================

    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.data.inventory
    }

    pub fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    pub fn monthly(&self) -> &[MonthlyMetric] {
        &self.data.monthly
    }

    pub fn expense_shares(&self) -> &[ExpenseShare] {
        &self.data.expense_shares
    }

    pub fn departments(&self) -> &[DepartmentProgress] {
        &self.data.departments
    }

    /// Get transaction by ID
    pub fn transaction(&self, id: u32) -> Option<Transaction> {
        self.data.transactions.iter().find(|t| t.id == id).cloned()
    }

    /// Get project by ID
    pub fn project(&self, id: u32) -> Option<Project> {
        self.data.projects.iter().find(|p| p.id == id).cloned()
    }

    /// Get transactions by kind
    pub fn transactions_by_kind(&self, kind: TransactionKind) -> Vec<Transaction> {
        self.data
            .transactions
            .iter()
            .filter(|t| t.kind == kind)
            .cloned()
            .collect()
    }

    /// Get tasks by status
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.data
            .tasks
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    /// Get projects by status
    pub fn projects_by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.data
            .projects
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    /// Get inventory items by derived stock level
    pub fn items_by_level(&self, level: StockLevel) -> Vec<InventoryItem> {
        self.data
            .inventory
            .iter()
            .filter(|i| i.stock_level() == level)
            .cloned()
            .collect()
    }

    // ==================== Reports ====================

    /// Income, expenses and net flow over the transaction set
    pub fn finance_report(&self) -> FinanceReport {
        let txs = &self.data.transactions;
        let total_income = metrics::sum_by(txs, |t| t.kind == TransactionKind::Income, |t| t.amount);
        let total_expenses =
            metrics::sum_by(txs, |t| t.kind == TransactionKind::Expense, |t| t.amount);
        FinanceReport {
            total_income,
            total_expenses,
            net_flow: total_income - total_expenses,
            transaction_count: txs.len(),
        }
    }

    /// Item counts per derived stock level
    pub fn inventory_summary(&self) -> InventorySummary {
        let items = &self.data.inventory;
        InventorySummary {
            total_items: items.len(),
            in_stock: metrics::count_by(items, |i| i.stock_level() == StockLevel::InStock),
            low_stock: metrics::count_by(items, |i| i.stock_level() == StockLevel::LowStock),
            out_of_stock: metrics::count_by(items, |i| i.stock_level() == StockLevel::OutOfStock),
        }
    }

    /// Project counts per status and the rounded average progress
    pub fn project_stats(&self) -> ProjectStats {
        let projects = &self.data.projects;
        ProjectStats {
            total: projects.len(),
            planning: metrics::count_by(projects, |p| p.status == ProjectStatus::Planning),
            active: metrics::count_by(projects, |p| p.status == ProjectStatus::InProgress),
            completed: metrics::count_by(projects, |p| p.status == ProjectStatus::Completed),
            on_hold: metrics::count_by(projects, |p| p.status == ProjectStatus::OnHold),
            average_progress: metrics::mean_round(projects, |p| p.progress as f64),
        }
    }

    /// Task counts per status and the overdue count as of today
    pub fn task_stats(&self) -> TaskStats {
        self.task_stats_as_of(chrono::Utc::now().date_naive())
    }

    /// Task counts per status and the overdue count as of a given date
    pub fn task_stats_as_of(&self, date: NaiveDate) -> TaskStats {
        let tasks = &self.data.tasks;
        TaskStats {
            total: tasks.len(),
            pending: metrics::count_by(tasks, |t| t.status == TaskStatus::Pending),
            in_progress: metrics::count_by(tasks, |t| t.status == TaskStatus::InProgress),
            completed: metrics::count_by(tasks, |t| t.status == TaskStatus::Completed),
            overdue: metrics::count_by(tasks, |t| t.is_overdue_as_of(date)),
        }
    }

    /// Dashboard headline metrics
    pub fn overview(&self) -> Overview {
        let inventory = self.inventory_summary();
        Overview {
            active_projects: metrics::count_by(&self.data.projects, |p| {
                p.status == ProjectStatus::InProgress
            }),
            team_members: self.data.projects.iter().map(|p| p.team_size).sum(),
            net_flow: self.finance_report().net_flow,
            inventory_items: inventory.total_items,
            low_stock_items: inventory.low_stock,
        }
    }

    /// Collection sizes
    pub fn summary(&self) -> HubSummary {
        HubSummary {
            total_transactions: self.data.transactions.len(),
            total_inventory_items: self.data.inventory.len(),
            total_projects: self.data.projects.len(),
            total_tasks: self.data.tasks.len(),
        }
    }

    /// Analytics headline figures
    pub fn analytics_kpis(&self) -> AnalyticsKpis {
        let monthly = &self.data.monthly;

        let growth_rate = match monthly.len() {
            0 | 1 => 0.0,
            n => {
                let prev = monthly[n - 2].revenue;
                let last = monthly[n - 1].revenue;
                if prev > 0.0 {
                    (last - prev) / prev * 100.0
                } else {
                    0.0
                }
            }
        };

        let total_revenue: f64 = monthly.iter().map(|m| m.revenue).sum();
        let total_expenses: f64 = monthly.iter().map(|m| m.expenses).sum();
        let profit_margin = if total_revenue > 0.0 {
            (total_revenue - total_expenses) / total_revenue * 100.0
        } else {
            0.0
        };

        let team_efficiency = metrics::mean(&self.data.departments, |d| d.completed);

        let inventory = &self.data.inventory;
        let resource_utilization = if inventory.is_empty() {
            0.0
        } else {
            metrics::count_by(inventory, |i| i.stock_level() == StockLevel::InStock) as f64
                / inventory.len() as f64
                * 100.0
        };

        AnalyticsKpis {
            growth_rate,
            profit_margin,
            team_efficiency,
            resource_utilization,
        }
    }

    // ==================== Chart Feeds ====================

    /// Revenue vs expenses per month, as a bar chart
    pub fn monthly_chart(&self) -> ChartData {
        let monthly = &self.data.monthly;
        ChartData {
            chart_type: ChartType::Bar,
            title: "Revenue vs Expenses".to_string(),
            labels: monthly.iter().map(|m| m.month.clone()).collect(),
            datasets: vec![
                ChartDataset {
                    label: "Revenue".to_string(),
                    data: monthly.iter().map(|m| m.revenue).collect(),
                    background_color: Some(ChartColor::Single(CHART_PALETTE[0].to_string())),
                    border_color: None,
                },
                ChartDataset {
                    label: "Expenses".to_string(),
                    data: monthly.iter().map(|m| m.expenses).collect(),
                    background_color: Some(ChartColor::Single(CHART_PALETTE[3].to_string())),
                    border_color: None,
                },
            ],
        }
    }

    /// Active project count per month, as a line chart
    pub fn project_growth_chart(&self) -> ChartData {
        let monthly = &self.data.monthly;
        ChartData {
            chart_type: ChartType::Line,
            title: "Project Growth Trend".to_string(),
            labels: monthly.iter().map(|m| m.month.clone()).collect(),
            datasets: vec![ChartDataset {
                label: "Projects".to_string(),
                data: monthly.iter().map(|m| m.projects as f64).collect(),
                background_color: None,
                border_color: Some(CHART_PALETTE[1].to_string()),
            }],
        }
    }

    /// Spending share per category, as a pie chart with one color per slice
    pub fn expense_chart(&self) -> ChartData {
        let shares = &self.data.expense_shares;
        let colors: Vec<String> = shares
            .iter()
            .enumerate()
            .map(|(i, _)| CHART_PALETTE[i % CHART_PALETTE.len()].to_string())
            .collect();
        ChartData {
            chart_type: ChartType::Pie,
            title: "Expense Distribution".to_string(),
            labels: shares.iter().map(|s| s.category.clone()).collect(),
            datasets: vec![ChartDataset {
                label: "Share".to_string(),
                data: shares.iter().map(|s| s.percent).collect(),
                background_color: Some(ChartColor::PerPoint(colors)),
                border_color: None,
            }],
        }
    }

    /// Completed vs pending task share per department, as a stacked bar chart
    pub fn department_chart(&self) -> ChartData {
        let departments = &self.data.departments;
        ChartData {
            chart_type: ChartType::StackedBar,
            title: "Department Task Completion".to_string(),
            labels: departments.iter().map(|d| d.department.clone()).collect(),
            datasets: vec![
                ChartDataset {
                    label: "Completed".to_string(),
                    data: departments.iter().map(|d| d.completed).collect(),
                    background_color: Some(ChartColor::Single(CHART_PALETTE[1].to_string())),
                    border_color: None,
                },
                ChartDataset {
                    label: "Pending".to_string(),
                    data: departments.iter().map(|d| d.pending).collect(),
                    background_color: Some(ChartColor::Single(CHART_PALETTE[2].to_string())),
                    border_color: None,
                },
            ],
        }
    }

    // ==================== Formatting ====================

    /// Format a money amount through the configured currency policy
    pub fn format_money(&self, amount: Decimal) -> String {
        currency::format_currency(amount, &self.config.currency)
    }

    /// Format a money amount given as f64 (analytics series values)
    pub fn format_money_f64(&self, amount: f64) -> String {
        let decimal = Decimal::from_f64_retain(amount).unwrap_or(Decimal::ZERO);
        currency::format_currency(decimal, &self.config.currency)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use companyhub_config::Config;

    fn hub() -> Hub {
        Hub::new(Config::default(), fixtures::sample_company()).unwrap()
    }

    #[test]
    fn test_finance_totals() {
        let report = hub().finance_report();
        assert_eq!(report.total_income, Decimal::from(150_000));
        assert_eq!(report.total_expenses, Decimal::from(45_500));
        assert_eq!(report.net_flow, Decimal::from(104_500));
        assert_eq!(report.transaction_count, 4);
    }

    #[test]
    fn test_aggregates_are_idempotent() {
        let hub = hub();
        assert_eq!(hub.finance_report(), hub.finance_report());
        assert_eq!(hub.inventory_summary(), hub.inventory_summary());
        assert_eq!(hub.project_stats(), hub.project_stats());
        assert_eq!(hub.overview(), hub.overview());
    }

    #[test]
    fn test_average_progress() {
        // {75, 15, 100, 30} -> 55
        assert_eq!(hub().project_stats().average_progress, 55);
    }

    #[test]
    fn test_project_counts() {
        let stats = hub().project_stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.planning, 1);
        assert_eq!(stats.on_hold, 1);
    }

    #[test]
    fn test_stock_level_zero_quantity_wins() {
        let mut item = fixtures::sample_inventory().remove(3);
        assert_eq!(item.quantity, 0);
        assert_eq!(item.stock_level(), StockLevel::OutOfStock);
        // even a zero minimum does not rescue an empty item
        item.min_stock = 0;
        assert_eq!(item.stock_level(), StockLevel::OutOfStock);
    }

    #[test]
    fn test_stock_level_thresholds() {
        let mut item = fixtures::sample_inventory().remove(1);
        assert_eq!((item.quantity, item.min_stock), (15, 20));
        assert_eq!(item.stock_level(), StockLevel::LowStock);

        item.quantity = 20; // at the minimum counts as in stock
        assert_eq!(item.stock_level(), StockLevel::InStock);

        item.quantity = 19;
        assert_eq!(item.stock_level(), StockLevel::LowStock);
    }

    #[test]
    fn test_inventory_summary_counts() {
        let summary = hub().inventory_summary();
        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.in_stock, 2);
        assert_eq!(summary.low_stock, 1);
        assert_eq!(summary.out_of_stock, 1);
    }

    #[test]
    fn test_task_stats_counts() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        let stats = hub().task_stats_as_of(date);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
        // nothing unfinished is past due on the 12th
        assert_eq!(stats.overdue, 0);
    }

    #[test]
    fn test_task_overdue_excludes_completed() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let stats = hub().task_stats_as_of(date);
        // both unfinished tasks are past due, the completed one never counts
        assert_eq!(stats.overdue, 2);
    }

    #[test]
    fn test_overview_derivation() {
        let overview = hub().overview();
        assert_eq!(overview.active_projects, 1);
        assert_eq!(overview.team_members, 20); // 5 + 8 + 3 + 4
        assert_eq!(overview.net_flow, Decimal::from(104_500));
        assert_eq!(overview.inventory_items, 4);
        assert_eq!(overview.low_stock_items, 1);
    }

    #[test]
    fn test_summary_counts() {
        let summary = hub().summary();
        assert_eq!(summary.total_transactions, 4);
        assert_eq!(summary.total_inventory_items, 4);
        assert_eq!(summary.total_projects, 4);
        assert_eq!(summary.total_tasks, 3);
    }

    #[test]
    fn test_analytics_kpis() {
        let kpis = hub().analytics_kpis();
        // May 160k -> Jun 220k
        assert!((kpis.growth_rate - 37.5).abs() < 1e-9);
        // (1,030,000 - 595,000) / 1,030,000
        assert!((kpis.profit_margin - 42.233).abs() < 0.01);
        assert!((kpis.team_efficiency - 87.6).abs() < 1e-9);
        // 2 of 4 items at or above minimum
        assert!((kpis.resource_utilization - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_chart_shapes() {
        let hub = hub();
        let monthly = hub.monthly_chart();
        assert_eq!(monthly.labels.len(), 6);
        assert_eq!(monthly.datasets.len(), 2);
        assert_eq!(monthly.datasets[0].data.len(), 6);

        let expense = hub.expense_chart();
        assert_eq!(expense.labels.len(), 4);
        match &expense.datasets[0].background_color {
            Some(ChartColor::PerPoint(colors)) => assert_eq!(colors.len(), 4),
            other => panic!("expected per-point colors, got {:?}", other),
        }

        let departments = hub.department_chart();
        assert_eq!(departments.labels.len(), 5);
        assert_eq!(departments.datasets.len(), 2);
    }

    #[test]
    fn test_lookup_by_id() {
        let hub = hub();
        assert!(hub.transaction(3).is_some());
        assert!(hub.transaction(99).is_none());
        assert_eq!(hub.project(1).unwrap().name, "Project Alpha");
        assert!(hub.project(99).is_none());
    }

    #[test]
    fn test_filter_accessors() {
        let hub = hub();
        assert_eq!(hub.transactions_by_kind(TransactionKind::Income).len(), 1);
        assert_eq!(hub.transactions_by_kind(TransactionKind::Expense).len(), 3);
        assert_eq!(hub.tasks_by_status(TaskStatus::Pending).len(), 1);
        assert_eq!(hub.projects_by_status(ProjectStatus::OnHold).len(), 1);
        assert_eq!(hub.items_by_level(StockLevel::LowStock).len(), 1);
    }

    #[test]
    fn test_signed_amount() {
        let txs = fixtures::sample_transactions();
        assert_eq!(txs[0].signed_amount(), Decimal::from(150_000));
        assert_eq!(txs[1].signed_amount(), Decimal::from(-8_500));
    }

    #[test]
    fn test_validation_rejects_out_of_range_progress() {
        let mut data = fixtures::sample_company();
        data.projects[0].progress = 101;
        assert!(Hub::new(Config::default(), data).is_err());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("In Progress".parse::<ProjectStatus>().unwrap(), ProjectStatus::InProgress);
        assert_eq!("in-progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("Out of Stock".parse::<StockLevel>().unwrap(), StockLevel::OutOfStock);
        assert_eq!("high".parse::<TaskPriority>().unwrap(), TaskPriority::High);
        assert!("archived".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_enum_labels() {
        assert_eq!(ProjectStatus::OnHold.label(), "On Hold");
        assert_eq!(StockLevel::LowStock.label(), "Low Stock");
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_format_money_routes_through_policy() {
        let hub = hub();
        assert_eq!(hub.format_money(Decimal::from(104_500)), "₹1,04,500");
        assert_eq!(hub.format_money_f64(220_000.0), "₹2,20,000");
    }

    #[test]
    fn test_date_helpers() {
        let tx = &fixtures::sample_transactions()[0];
        assert_eq!(
            tx.date_naive(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );

        let task = Task {
            due_date: "not-a-date".to_string(),
            ..fixtures::sample_tasks()[0].clone()
        };
        assert!(task.due_date_naive().is_none());
        assert!(!task.is_overdue_as_of(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()));
    }
}
