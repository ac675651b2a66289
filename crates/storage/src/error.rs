use std::fmt;

use thiserror::Error;

/// Result type for index catalog operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Store-independent classification of a failed catalog operation
///
/// Backends map their own error codes onto these kinds so callers never
/// interpret driver-specific numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexErrorKind {
    /// The index (or its collection) does not exist
    NotFound,
    /// The credentials lack the required privilege
    PermissionDenied,
    /// The server could not be reached or dropped the connection
    ConnectionFailure,
    /// Anything the backend could not classify
    Unknown,
}

impl fmt::Display for IndexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not found",
            Self::PermissionDenied => "permission denied",
            Self::ConnectionFailure => "connection failure",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Catalog operation that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Ping,
    ListIndexes,
    DropIndex,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ping => "ping",
            Self::ListIndexes => "listIndexes",
            Self::DropIndex => "dropIndex",
        };
        f.write_str(name)
    }
}

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{operation} on '{collection}'{} failed ({kind}): {message}", index_suffix(.index))]
    Operation {
        operation: Operation,
        collection: String,
        index: Option<String>,
        kind: IndexErrorKind,
        message: String,
    },
}

fn index_suffix(index: &Option<String>) -> String {
    match index {
        Some(name) => format!(" for index '{name}'"),
        None => String::new(),
    }
}

impl StorageError {
    /// Creates an operation error
    pub fn operation(
        operation: Operation,
        collection: impl Into<String>,
        index: Option<&str>,
        kind: IndexErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self::Operation {
            operation,
            collection: collection.into(),
            index: index.map(str::to_string),
            kind,
            message: message.into(),
        }
    }

    /// Abstract kind of this error
    pub fn kind(&self) -> IndexErrorKind {
        match self {
            Self::ConnectionFailed(_) => IndexErrorKind::ConnectionFailure,
            Self::InvalidConfig(_) => IndexErrorKind::Unknown,
            Self::Operation { kind, .. } => *kind,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == IndexErrorKind::NotFound
    }
}
