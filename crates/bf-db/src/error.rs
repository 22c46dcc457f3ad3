//! Database error types for bf-db.

use bf_core::enums::EntityKind;
use thiserror::Error;

/// A write would leave a reference pointing at nothing.
///
/// Raised before the write is attempted; nothing is persisted. Callers should
/// surface this to the operator rather than retry, since the input itself must
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The reference is not a positive identifier.
    #[error("{owner}.{field} must be a positive identifier, got {id}")]
    InvalidId {
        owner: EntityKind,
        field: &'static str,
        id: i64,
    },

    /// No row of the target type has this identifier.
    #[error("{owner}.{field} references {target} {id}, which does not exist")]
    Dangling {
        owner: EntityKind,
        field: &'static str,
        target: EntityKind,
        id: i64,
    },
}

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Referential integrity check failed.
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// An update targeted an identity with no stored row.
    #[error("{entity} {id} does not exist")]
    NotFound { entity: EntityKind, id: i64 },

    /// The backing file failed, either at open time or on a later read or write.
    ///
    /// `path` is known when opening fails; I/O failures on an open handle
    /// come from libSQL without it.
    #[error("Store unavailable{}: {reason}", at_path(.path.as_deref()))]
    StoreUnavailable {
        path: Option<String>,
        reason: String,
    },

    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema initialization failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A seed document could not be applied.
    #[error("Seed failed: {0}")]
    Seed(String),

    /// Underlying libSQL error that is not a file-level failure.
    #[error("libSQL error: {0}")]
    LibSql(libsql::Error),
}

fn at_path(path: Option<&str>) -> String {
    path.map(|p| format!(" at '{p}'")).unwrap_or_default()
}

/// Primary `SQLite` result codes that mean the backing file itself failed.
const FILE_FAILURES: [i32; 7] = [
    libsql::ffi::SQLITE_PERM,
    libsql::ffi::SQLITE_READONLY,
    libsql::ffi::SQLITE_IOERR,
    libsql::ffi::SQLITE_CORRUPT,
    libsql::ffi::SQLITE_FULL,
    libsql::ffi::SQLITE_CANTOPEN,
    libsql::ffi::SQLITE_NOTADB,
];

impl From<libsql::Error> for DatabaseError {
    fn from(err: libsql::Error) -> Self {
        match err {
            // Extended codes carry the primary code in the low byte.
            libsql::Error::SqliteFailure(code, reason) if FILE_FAILURES.contains(&(code & 0xff)) => {
                Self::StoreUnavailable { path: None, reason }
            }
            other => Self::LibSql(other),
        }
    }
}

impl DatabaseError {
    /// The reference failure, if this error is one.
    #[must_use]
    pub const fn as_reference(&self) -> Option<&ReferenceError> {
        match self {
            Self::Reference(err) => Some(err),
            _ => None,
        }
    }
}
