//! Maintenance: task breakdowns and the per-property task join.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::mock::Portfolio;
use crate::models::{MaintenanceTask, TaskCategory, TaskPriority, TaskStatus};

use super::aggregate::count_by;

/// Derived rows for the Maintenance view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceReport {
    /// Task counts grouped by workflow status
    pub tasks_by_status: Vec<TaskStatusCount>,
    /// Task counts grouped by category
    pub tasks_by_category: Vec<TaskCategoryCount>,
    /// Task counts grouped by priority
    pub tasks_by_priority: Vec<TaskPriorityCount>,
    /// Task counts per property, inner-joined to the property name; tasks
    /// whose property_id matches no property are dropped
    pub tasks_by_property: Vec<PropertyTaskCount>,
    /// Full task list
    pub tasks: Vec<MaintenanceTask>,
}

/// Count of tasks in one workflow status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskStatusCount {
    pub status: TaskStatus,
    pub count: u64,
}

/// Count of tasks in one category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskCategoryCount {
    pub category: TaskCategory,
    pub count: u64,
}

/// Count of tasks at one priority.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskPriorityCount {
    pub priority: TaskPriority,
    pub count: u64,
}

/// Count of tasks against one known property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyTaskCount {
    pub property_id: i64,
    pub property_name: String,
    pub count: u64,
}

/// Compute the Maintenance view.
pub fn maintenance(portfolio: &Portfolio) -> MaintenanceReport {
    let tasks_by_status = count_by(&portfolio.tasks, |t| t.status)
        .into_iter()
        .map(|(status, count)| TaskStatusCount { status, count })
        .collect();
    let tasks_by_category = count_by(&portfolio.tasks, |t| t.category)
        .into_iter()
        .map(|(category, count)| TaskCategoryCount { category, count })
        .collect();
    let tasks_by_priority = count_by(&portfolio.tasks, |t| t.priority)
        .into_iter()
        .map(|(priority, count)| TaskPriorityCount { priority, count })
        .collect();

    let names: BTreeMap<i64, &str> = portfolio
        .properties
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();

    let tasks_by_property = count_by(&portfolio.tasks, |t| t.property_id)
        .into_iter()
        .filter_map(|(property_id, count)| {
            names.get(&property_id).map(|name| PropertyTaskCount {
                property_id,
                property_name: name.to_string(),
                count,
            })
        })
        .collect();

    MaintenanceReport {
        tasks_by_status,
        tasks_by_category,
        tasks_by_priority,
        tasks_by_property,
        tasks: portfolio.tasks.clone(),
    }
}
