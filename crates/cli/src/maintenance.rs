//! Idempotent index removal
//!
//! Two strategies share one entry point, [`drop_indexes`]:
//!
//! - [`DropStrategy::CheckFirst`] lists the collection's indexes once and only
//!   drops candidates that are present. Any drop failure is fatal.
//! - [`DropStrategy::Blind`] issues a drop for every candidate and treats
//!   [`IndexErrorKind::NotFound`] as already done.
//!
//! Both stop at the first fatal error; remaining candidates are left alone.

use anyhow::{bail, Context, Result};
use std::fmt;
use tracing::{debug, info};
use wearvirtually_storage::{IndexCatalog, IndexErrorKind, StorageError};

/// Index that backs `_id` and can never be dropped
const PRIMARY_KEY_INDEX: &str = "_id_";

/// How candidates are checked before dropping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DropStrategy {
    /// List indexes once, drop only those present
    #[default]
    CheckFirst,
    /// Drop every candidate, tolerating "index not found"
    Blind,
}

/// Options for a maintenance run
#[derive(Debug, Clone, Copy, Default)]
pub struct MaintenanceOptions {
    pub strategy: DropStrategy,
    /// Report what would be dropped without dropping; always lists first
    pub dry_run: bool,
}

/// What happened to one candidate index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped,
    Skipped,
    WouldDrop,
}

impl fmt::Display for DropOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Dropped => "dropped",
            Self::Skipped => "absent, skipped",
            Self::WouldDrop => "present, would drop",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutcome {
    pub index: String,
    pub outcome: DropOutcome,
}

/// Per-collection result of a maintenance run, in candidate order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceReport {
    pub collection: String,
    pub outcomes: Vec<IndexOutcome>,
}

impl MaintenanceReport {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            outcomes: Vec::new(),
        }
    }

    fn record(&mut self, index: &str, outcome: DropOutcome) {
        self.outcomes.push(IndexOutcome {
            index: index.to_string(),
            outcome,
        });
    }

    fn names_with(&self, outcome: DropOutcome) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == outcome)
            .map(|o| o.index.as_str())
            .collect()
    }

    pub fn dropped(&self) -> Vec<&str> {
        self.names_with(DropOutcome::Dropped)
    }

    pub fn skipped(&self) -> Vec<&str> {
        self.names_with(DropOutcome::Skipped)
    }

    pub fn would_drop(&self) -> Vec<&str> {
        self.names_with(DropOutcome::WouldDrop)
    }
}

/// Reject names that can never be dropped
pub fn validate_index_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Index name must not be empty");
    }
    if name == PRIMARY_KEY_INDEX {
        bail!("Refusing to drop the primary key index '{PRIMARY_KEY_INDEX}'");
    }
    Ok(())
}

/// Validate candidates and remove repeats, keeping first-seen order
fn prepare_candidates<S: AsRef<str>>(candidates: &[S]) -> Result<Vec<&str>> {
    let mut unique: Vec<&str> = Vec::with_capacity(candidates.len());
    for name in candidates {
        let name: &str = name.as_ref();
        validate_index_name(name)?;
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    Ok(unique)
}

/// Drop one index, treating "not found" as success
pub async fn drop_index_blind(
    catalog: &dyn IndexCatalog,
    collection: &str,
    index: &str,
) -> std::result::Result<DropOutcome, StorageError> {
    debug!(collection, index, "Dropping index");

    match catalog.drop_index(collection, index).await {
        Ok(()) => {
            info!("Dropped index '{index}' on '{collection}'");
            Ok(DropOutcome::Dropped)
        }
        Err(e) if e.kind() == IndexErrorKind::NotFound => {
            info!("Index '{index}' does not exist on '{collection}', nothing to drop");
            Ok(DropOutcome::Skipped)
        }
        Err(e) => Err(e),
    }
}

/// List indexes once, then drop only the candidates that exist
///
/// Exactly one drop is issued per present candidate and none for absent ones.
pub async fn drop_present_indexes(
    catalog: &dyn IndexCatalog,
    collection: &str,
    candidates: &[&str],
    dry_run: bool,
) -> std::result::Result<MaintenanceReport, StorageError> {
    let existing = catalog.list_index_names(collection).await?;
    debug!(collection, ?existing, "Current indexes");

    let mut report = MaintenanceReport::new(collection);
    for &name in candidates {
        if !existing.iter().any(|n| n == name) {
            info!("Index '{name}' not found on '{collection}', skipping");
            report.record(name, DropOutcome::Skipped);
            continue;
        }

        if dry_run {
            info!("Index '{name}' exists on '{collection}', would drop (dry run)");
            report.record(name, DropOutcome::WouldDrop);
            continue;
        }

        catalog.drop_index(collection, name).await?;
        info!("Dropped index '{name}' on '{collection}'");
        report.record(name, DropOutcome::Dropped);
    }

    Ok(report)
}

/// Drop stale indexes from one collection
pub async fn drop_indexes<S: AsRef<str>>(
    catalog: &dyn IndexCatalog,
    collection: &str,
    candidates: &[S],
    options: MaintenanceOptions,
) -> Result<MaintenanceReport> {
    if collection.trim().is_empty() {
        bail!("Collection name must not be empty");
    }
    let candidates = prepare_candidates(candidates)?;

    if options.dry_run || options.strategy == DropStrategy::CheckFirst {
        return drop_present_indexes(catalog, collection, &candidates, options.dry_run)
            .await
            .with_context(|| format!("Index maintenance on '{collection}' failed"));
    }

    let mut report = MaintenanceReport::new(collection);
    for name in candidates {
        let outcome = drop_index_blind(catalog, collection, name)
            .await
            .with_context(|| format!("Index maintenance on '{collection}' failed"))?;
        report.record(name, outcome);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index_name() {
        assert!(validate_index_name("order_id_1").is_ok());
        assert!(validate_index_name("seo.slug_1").is_ok());
        assert!(validate_index_name("").is_err());
        assert!(validate_index_name("   ").is_err());
        assert!(validate_index_name("_id_").is_err());
    }

    #[test]
    fn test_prepare_candidates_dedupes_in_order() {
        let names = prepare_candidates(&["b", "a", "b", "c", "a"]).unwrap();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_prepare_candidates_rejects_any_invalid_name() {
        assert!(prepare_candidates(&["category_id_1", ""]).is_err());
    }

    #[test]
    fn test_report_partitions() {
        let mut report = MaintenanceReport::new("categories");
        report.record("category_id_1", DropOutcome::Dropped);
        report.record("seo.slug_1", DropOutcome::Skipped);
        report.record("name_1", DropOutcome::WouldDrop);

        assert_eq!(report.dropped(), vec!["category_id_1"]);
        assert_eq!(report.skipped(), vec!["seo.slug_1"]);
        assert_eq!(report.would_drop(), vec!["name_1"]);
    }

    #[test]
    fn test_default_strategy_is_check_first() {
        assert_eq!(DropStrategy::default(), DropStrategy::CheckFirst);
        assert!(!MaintenanceOptions::default().dry_run);
    }
}
