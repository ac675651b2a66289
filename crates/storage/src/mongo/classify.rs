//! Mapping of MongoDB driver errors onto [`IndexErrorKind`]

use mongodb::error::{Error as MongoError, ErrorKind};

use crate::error::IndexErrorKind;

// Server error codes, see src/mongo/base/error_codes.yml in the server tree
pub(crate) const HOST_UNREACHABLE: i32 = 6;
pub(crate) const HOST_NOT_FOUND: i32 = 7;
pub(crate) const UNAUTHORIZED: i32 = 13;
pub(crate) const AUTHENTICATION_FAILED: i32 = 18;
pub(crate) const NAMESPACE_NOT_FOUND: i32 = 26;
pub(crate) const INDEX_NOT_FOUND: i32 = 27;
pub(crate) const NETWORK_TIMEOUT: i32 = 89;
pub(crate) const SHUTDOWN_IN_PROGRESS: i32 = 91;
pub(crate) const PRIMARY_STEPPED_DOWN: i32 = 189;

/// Classify a server command error code
pub(crate) fn kind_for_code(code: i32) -> IndexErrorKind {
    match code {
        INDEX_NOT_FOUND | NAMESPACE_NOT_FOUND => IndexErrorKind::NotFound,
        UNAUTHORIZED | AUTHENTICATION_FAILED => IndexErrorKind::PermissionDenied,
        HOST_UNREACHABLE | HOST_NOT_FOUND | NETWORK_TIMEOUT | SHUTDOWN_IN_PROGRESS
        | PRIMARY_STEPPED_DOWN => IndexErrorKind::ConnectionFailure,
        _ => IndexErrorKind::Unknown,
    }
}

/// Classify a driver error
pub(crate) fn classify(err: &MongoError) -> IndexErrorKind {
    match err.kind.as_ref() {
        ErrorKind::Command(command) => kind_for_code(command.code),
        ErrorKind::Authentication { .. } => IndexErrorKind::PermissionDenied,
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => IndexErrorKind::ConnectionFailure,
        _ => IndexErrorKind::Unknown,
    }
}
