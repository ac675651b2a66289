//! Built-in maintenance tasks for known stale indexes

use anyhow::Result;
use tracing::info;
use wearvirtually_storage::IndexCatalog;

use crate::maintenance::{drop_indexes, MaintenanceOptions, MaintenanceReport};

/// A fixed set of stale index names on one collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceTask {
    pub name: &'static str,
    pub description: &'static str,
    pub collection: &'static str,
    pub indexes: &'static [&'static str],
}

/// Unique index on the removed `order_id` field
pub const ORDER_INDEX_TASK: MaintenanceTask = MaintenanceTask {
    name: "order-index",
    description: "Drop the stale order_id_1 index from orders",
    collection: "orders",
    indexes: &["order_id_1"],
};

/// Indexes left over from the old category schema
pub const CATEGORY_INDEXES_TASK: MaintenanceTask = MaintenanceTask {
    name: "category-indexes",
    description: "Drop the stale category_id_1 and seo.slug_1 indexes from categories",
    collection: "categories",
    indexes: &["category_id_1", "seo.slug_1"],
};

pub const BUILTIN_TASKS: &[MaintenanceTask] = &[ORDER_INDEX_TASK, CATEGORY_INDEXES_TASK];

pub fn find_task(name: &str) -> Option<&'static MaintenanceTask> {
    BUILTIN_TASKS.iter().find(|task| task.name == name)
}

/// Run one task against the catalog
pub async fn run_task(
    catalog: &dyn IndexCatalog,
    task: &MaintenanceTask,
    options: MaintenanceOptions,
) -> Result<MaintenanceReport> {
    info!(
        task = task.name,
        collection = task.collection,
        strategy = ?options.strategy,
        dry_run = options.dry_run,
        "Running index maintenance"
    );

    drop_indexes(catalog, task.collection, task.indexes, options).await
}

/// Run tasks in order, stopping at the first failure
pub async fn run_tasks(
    catalog: &dyn IndexCatalog,
    tasks: &[MaintenanceTask],
    options: MaintenanceOptions,
) -> Result<Vec<MaintenanceReport>> {
    let mut reports = Vec::with_capacity(tasks.len());
    for task in tasks {
        reports.push(run_task(catalog, task, options).await?);
    }
    Ok(reports)
}
