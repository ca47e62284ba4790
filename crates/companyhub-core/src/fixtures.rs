//! Bundled sample dataset
//!
//! The reference data every view renders. It is handed to `Hub::new`
//! explicitly so tests can substitute their own collections.

use rust_decimal::Decimal;

use crate::{
    CompanyData, DepartmentProgress, ExpenseShare, InventoryItem, MonthlyMetric, Project,
    ProjectStatus, Task, TaskPriority, TaskStatus, Transaction, TransactionKind,
};

/// The sample company dataset served by the bundled binary
pub fn sample_company() -> CompanyData {
    CompanyData {
        transactions: sample_transactions(),
        inventory: sample_inventory(),
        projects: sample_projects(),
        tasks: sample_tasks(),
        monthly: sample_monthly(),
        expense_shares: sample_expense_shares(),
        departments: sample_departments(),
    }
}

pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            date: "2024-01-15".to_string(),
            description: "Client payment - Project Alpha".to_string(),
            amount: Decimal::from(150_000),
            kind: TransactionKind::Income,
            category: "Revenue".to_string(),
        },
        Transaction {
            id: 2,
            date: "2024-01-14".to_string(),
            description: "Office supplies purchase".to_string(),
            amount: Decimal::from(8_500),
            kind: TransactionKind::Expense,
            category: "Operations".to_string(),
        },
        Transaction {
            id: 3,
            date: "2024-01-12".to_string(),
            description: "Software license renewal".to_string(),
            amount: Decimal::from(25_000),
            kind: TransactionKind::Expense,
            category: "Technology".to_string(),
        },
        Transaction {
            id: 4,
            date: "2024-01-10".to_string(),
            description: "Freelancer payment".to_string(),
            amount: Decimal::from(12_000),
            kind: TransactionKind::Expense,
            category: "Human Resources".to_string(),
        },
    ]
}

pub fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: 1,
            name: "Office Paper A4".to_string(),
            category: "Office Supplies".to_string(),
            quantity: 250,
            min_stock: 50,
            unit: "Reams".to_string(),
            last_updated: "2024-01-15".to_string(),
        },
        InventoryItem {
            id: 2,
            name: "Printer Ink Cartridges".to_string(),
            category: "Office Supplies".to_string(),
            quantity: 15,
            min_stock: 20,
            unit: "Pieces".to_string(),
            last_updated: "2024-01-14".to_string(),
        },
        InventoryItem {
            id: 3,
            name: "Laptops Dell XPS".to_string(),
            category: "Technology".to_string(),
            quantity: 8,
            min_stock: 5,
            unit: "Units".to_string(),
            last_updated: "2024-01-12".to_string(),
        },
        InventoryItem {
            id: 4,
            name: "Coffee Beans".to_string(),
            category: "Pantry".to_string(),
            quantity: 0,
            min_stock: 10,
            unit: "Kg".to_string(),
            last_updated: "2024-01-10".to_string(),
        },
    ]
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Project Alpha".to_string(),
            description: "Website redesign and optimization".to_string(),
            status: ProjectStatus::InProgress,
            progress: 75,
            start_date: "2024-01-01".to_string(),
            end_date: "2024-02-15".to_string(),
            team_size: 5,
            last_update: "2024-01-15".to_string(),
            daily_update: "Frontend development 90% complete. Working on responsive design."
                .to_string(),
        },
        Project {
            id: 2,
            name: "Project Beta".to_string(),
            description: "Mobile app development".to_string(),
            status: ProjectStatus::Planning,
            progress: 15,
            start_date: "2024-01-20".to_string(),
            end_date: "2024-04-30".to_string(),
            team_size: 8,
            last_update: "2024-01-14".to_string(),
            daily_update: "Requirements gathering phase. UI/UX mockups in review.".to_string(),
        },
        Project {
            id: 3,
            name: "Project Gamma".to_string(),
            description: "Database migration and optimization".to_string(),
            status: ProjectStatus::Completed,
            progress: 100,
            start_date: "2023-12-01".to_string(),
            end_date: "2024-01-10".to_string(),
            team_size: 3,
            last_update: "2024-01-10".to_string(),
            daily_update: "Project successfully completed. All data migrated and tested."
                .to_string(),
        },
        Project {
            id: 4,
            name: "Project Delta".to_string(),
            description: "Security audit and compliance".to_string(),
            status: ProjectStatus::OnHold,
            progress: 30,
            start_date: "2024-01-05".to_string(),
            end_date: "2024-03-15".to_string(),
            team_size: 4,
            last_update: "2024-01-12".to_string(),
            daily_update: "Waiting for external security consultant availability.".to_string(),
        },
    ]
}

pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Complete quarterly report".to_string(),
            description: "Compile and analyze Q4 financial data".to_string(),
            assignee: "John Smith".to_string(),
            role: "Financial Analyst".to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::InProgress,
            due_date: "2024-01-15".to_string(),
        },
        Task {
            id: 2,
            title: "Update inventory system".to_string(),
            description: "Implement new tracking features".to_string(),
            assignee: "Sarah Johnson".to_string(),
            role: "IT Manager".to_string(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Pending,
            due_date: "2024-01-20".to_string(),
        },
        Task {
            id: 3,
            title: "Client presentation prep".to_string(),
            description: "Prepare slides for Project Alpha demo".to_string(),
            assignee: "Mike Wilson".to_string(),
            role: "Project Manager".to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::Completed,
            due_date: "2024-01-10".to_string(),
        },
    ]
}

pub fn sample_monthly() -> Vec<MonthlyMetric> {
    vec![
        MonthlyMetric { month: "Jan".to_string(), revenue: 120_000.0, expenses: 80_000.0, projects: 8 },
        MonthlyMetric { month: "Feb".to_string(), revenue: 150_000.0, expenses: 90_000.0, projects: 12 },
        MonthlyMetric { month: "Mar".to_string(), revenue: 180_000.0, expenses: 100_000.0, projects: 15 },
        MonthlyMetric { month: "Apr".to_string(), revenue: 200_000.0, expenses: 110_000.0, projects: 18 },
        MonthlyMetric { month: "May".to_string(), revenue: 160_000.0, expenses: 95_000.0, projects: 14 },
        MonthlyMetric { month: "Jun".to_string(), revenue: 220_000.0, expenses: 120_000.0, projects: 20 },
    ]
}

pub fn sample_expense_shares() -> Vec<ExpenseShare> {
    vec![
        ExpenseShare { category: "Human Resources".to_string(), percent: 45.0 },
        ExpenseShare { category: "Technology".to_string(), percent: 25.0 },
        ExpenseShare { category: "Operations".to_string(), percent: 20.0 },
        ExpenseShare { category: "Marketing".to_string(), percent: 10.0 },
    ]
}

pub fn sample_departments() -> Vec<DepartmentProgress> {
    vec![
        DepartmentProgress { department: "Development".to_string(), completed: 85.0, pending: 15.0 },
        DepartmentProgress { department: "Design".to_string(), completed: 92.0, pending: 8.0 },
        DepartmentProgress { department: "Marketing".to_string(), completed: 78.0, pending: 22.0 },
        DepartmentProgress { department: "Sales".to_string(), completed: 88.0, pending: 12.0 },
        DepartmentProgress { department: "HR".to_string(), completed: 95.0, pending: 5.0 },
    ]
}
