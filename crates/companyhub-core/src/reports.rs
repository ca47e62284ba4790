//! Report structures for page and API responses

use companyhub_config::ChartType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income, expenses and net flow over the transaction set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceReport {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_flow: Decimal,
    pub transaction_count: usize,
}

/// Item counts per derived stock level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_items: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

/// Project counts per status plus the rounded average progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total: usize,
    pub planning: usize,
    pub active: usize,
    pub completed: usize,
    pub on_hold: usize,
    pub average_progress: u32,
}

/// Task counts per status plus the overdue count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

/// Dashboard headline metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub active_projects: usize,
    pub team_members: u32,
    pub net_flow: Decimal,
    pub inventory_items: usize,
    pub low_stock_items: usize,
}

/// Collection sizes, exposed at /api/summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubSummary {
    pub total_transactions: usize,
    pub total_inventory_items: usize,
    pub total_projects: usize,
    pub total_tasks: usize,
}

/// Analytics headline figures, all in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsKpis {
    /// Revenue change of the latest month vs the one before
    pub growth_rate: f64,
    /// Net over revenue across the whole monthly series
    pub profit_margin: f64,
    /// Mean department task completion
    pub team_efficiency: f64,
    /// Share of inventory items at or above minimum stock
    pub resource_utilization: f64,
}

// ==================== Chart Structures ====================

/// A dataset color: one color for the whole series, or one per data point
/// (pie slices)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartColor {
    Single(String),
    PerPoint(Vec<String>),
}

/// Chart dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ChartColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// Chart data for the visualization collaborator
///
/// The core only supplies correctly shaped data; rendering belongs to the
/// charting library on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub chart_type: ChartType,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_color_serialization() {
        let single = ChartColor::Single("#3B82F6".to_string());
        assert_eq!(serde_json::to_string(&single).unwrap(), r##""#3B82F6""##);

        let per_point = ChartColor::PerPoint(vec!["#111".to_string(), "#222".to_string()]);
        assert_eq!(
            serde_json::to_string(&per_point).unwrap(),
            r##"["#111","#222"]"##
        );
    }

    #[test]
    fn test_chart_data_serialization_shape() {
        let chart = ChartData {
            chart_type: ChartType::StackedBar,
            title: "Departments".to_string(),
            labels: vec!["Design".to_string()],
            datasets: vec![ChartDataset {
                label: "Completed".to_string(),
                data: vec![92.0],
                background_color: None,
                border_color: None,
            }],
        };
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&chart).unwrap()).unwrap();
        assert_eq!(json["chart_type"], "stackedbar");
        assert_eq!(json["labels"][0], "Design");
        // colors left unset are omitted entirely
        assert!(json["datasets"][0].get("background_color").is_none());
    }

    #[test]
    fn test_finance_report_serializes_amounts_as_strings() {
        let report = FinanceReport {
            total_income: Decimal::from(150_000),
            total_expenses: Decimal::from(45_500),
            net_flow: Decimal::from(104_500),
            transaction_count: 4,
        };
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(json["total_income"], "150000");
        assert_eq!(json["net_flow"], "104500");
        assert_eq!(json["transaction_count"], 4);
    }
}
