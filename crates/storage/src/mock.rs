//! In-memory index catalog for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{IndexErrorKind, Operation, Result, StorageError};
use crate::IndexCatalog;

const MOCK_DATABASE: &str = "mock";

#[derive(Debug, Default)]
struct MockData {
    indexes: HashMap<String, Vec<String>>, // collection -> index names in creation order
    drop_calls: Vec<(String, String)>,     // (collection, index) for every drop request
    list_calls: usize,
    drop_failures: HashMap<(String, String), IndexErrorKind>,
    list_failure: Option<IndexErrorKind>,
    health_failure: Option<IndexErrorKind>,
}

/// Mock index catalog for testing
///
/// Clones share state, so a test can hand one clone to the code under test
/// and inspect the recorded calls through another.
#[derive(Clone, Default)]
pub struct MockIndexCatalog {
    data: Arc<Mutex<MockData>>,
}

impl MockIndexCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add indexes to a collection, creating the collection if needed
    pub fn with_indexes(self, collection: &str, names: &[&str]) -> Self {
        self.data()
            .indexes
            .entry(collection.to_string())
            .or_default()
            .extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Make every drop of `index` on `collection` fail with `kind`
    pub fn fail_drop(self, collection: &str, index: &str, kind: IndexErrorKind) -> Self {
        self.data()
            .drop_failures
            .insert((collection.to_string(), index.to_string()), kind);
        self
    }

    /// Make every index listing fail with `kind`
    pub fn fail_list(self, kind: IndexErrorKind) -> Self {
        self.data().list_failure = Some(kind);
        self
    }

    /// Make the health check fail with `kind`
    pub fn fail_health_check(self, kind: IndexErrorKind) -> Self {
        self.data().health_failure = Some(kind);
        self
    }

    /// Current index names of a collection
    pub fn index_names(&self, collection: &str) -> Vec<String> {
        self.data()
            .indexes
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Every drop request received, in order, including failed ones
    pub fn drop_calls(&self) -> Vec<(String, String)> {
        self.data().drop_calls.clone()
    }

    /// Number of index listings received
    pub fn list_calls(&self) -> usize {
        self.data().list_calls
    }

    fn data(&self) -> MutexGuard<'_, MockData> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl IndexCatalog for MockIndexCatalog {
    fn database_name(&self) -> &str {
        MOCK_DATABASE
    }

    async fn health_check(&self) -> Result<()> {
        match self.data().health_failure {
            Some(kind) => Err(StorageError::operation(
                Operation::Ping,
                MOCK_DATABASE,
                None,
                kind,
                "simulated ping failure",
            )),
            None => Ok(()),
        }
    }

    async fn list_index_names(&self, collection: &str) -> Result<Vec<String>> {
        let mut data = self.data();
        data.list_calls += 1;

        if let Some(kind) = data.list_failure {
            return Err(StorageError::operation(
                Operation::ListIndexes,
                collection,
                None,
                kind,
                "simulated listIndexes failure",
            ));
        }

        Ok(data.indexes.get(collection).cloned().unwrap_or_default())
    }

    async fn drop_index(&self, collection: &str, index: &str) -> Result<()> {
        let mut data = self.data();
        data.drop_calls
            .push((collection.to_string(), index.to_string()));

        let key = (collection.to_string(), index.to_string());
        if let Some(kind) = data.drop_failures.get(&key).copied() {
            return Err(StorageError::operation(
                Operation::DropIndex,
                collection,
                Some(index),
                kind,
                "simulated dropIndex failure",
            ));
        }

        let names = data.indexes.get_mut(collection);
        match names.and_then(|names| {
            let position = names.iter().position(|n| n == index)?;
            Some(names.remove(position))
        }) {
            Some(_) => Ok(()),
            None => Err(StorageError::operation(
                Operation::DropIndex,
                collection,
                Some(index),
                IndexErrorKind::NotFound,
                format!("index not found with name [{index}]"),
            )),
        }
    }
}
