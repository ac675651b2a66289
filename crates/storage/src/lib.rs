//! Index catalog access for the maintenance tools
//!
//! The [`IndexCatalog`] trait is the seam between maintenance routines and
//! the document store. Backends classify their failures into
//! [`IndexErrorKind`] so callers never match on driver error codes.

#![deny(warnings)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod error;
mod factory;
mod mock;

// Keep mongo module private
mod mongo;

pub use error::{IndexErrorKind, Operation, StorageError};
pub use factory::create_index_catalog;
pub use mock::MockIndexCatalog;

use async_trait::async_trait;

/// Read and delete access to the secondary indexes of one database
#[async_trait]
pub trait IndexCatalog: Send + Sync {
    /// Name of the database this catalog operates on
    fn database_name(&self) -> &str;

    /// Round trip to the server to confirm the connection works
    async fn health_check(&self) -> error::Result<()>;

    /// Names of all indexes on `collection`, in catalog order
    ///
    /// A collection that does not exist has no indexes.
    async fn list_index_names(&self, collection: &str) -> error::Result<Vec<String>>;

    /// Drop the index called `index` from `collection`
    ///
    /// A missing index fails with [`IndexErrorKind::NotFound`].
    async fn drop_index(&self, collection: &str, index: &str) -> error::Result<()>;
}
