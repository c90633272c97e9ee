//! Maintenance task table row and its category sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A maintenance or administrative task scheduled against a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceTask {
    /// Identifier, dense 1..=n within the generated table
    pub id: i64,
    /// User account the task is assigned to
    pub user_id: i64,
    /// Property the task belongs to (not referentially checked)
    pub property_id: i64,
    /// Short title, e.g. "Task 4"
    pub title: String,
    /// Free-form description
    pub description: String,
    /// When the task is due; generated dates are future-biased
    pub due_date: DateTime<Utc>,
    /// Workflow status
    pub status: TaskStatus,
    /// Task category
    pub category: TaskCategory,
    /// Scheduling priority
    pub priority: TaskPriority,
}

/// Task workflow status set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub const ALL: &'static [TaskStatus] = &[
        TaskStatus::Open,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "OPEN",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Task category set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskCategory {
    Maintenance,
    Repair,
    Cleaning,
    Inspection,
    Administrative,
}

impl TaskCategory {
    pub const ALL: &'static [TaskCategory] = &[
        TaskCategory::Maintenance,
        TaskCategory::Repair,
        TaskCategory::Cleaning,
        TaskCategory::Inspection,
        TaskCategory::Administrative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Maintenance => "MAINTENANCE",
            TaskCategory::Repair => "REPAIR",
            TaskCategory::Cleaning => "CLEANING",
            TaskCategory::Inspection => "INSPECTION",
            TaskCategory::Administrative => "ADMINISTRATIVE",
        }
    }
}

/// Task priority set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: &'static [TaskPriority] =
        &[TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
        }
    }
}
