//! Unified connector error type.
//! Every public operation returns `ConnResult` so callers can match on the
//! failure kind instead of relying on unwinding.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnError {
    // ---------------------------
    // Caller input
    // ---------------------------
    #[error("Invalid argument: {message}")]
    InvalidArgument { code: u16, message: String },

    // ---------------------------
    // Connector state
    // ---------------------------
    #[error("Database file is not set")]
    NotConnected,

    #[error("Connection to database is not open")]
    ConnectionClosed,

    #[error("SQL query text is not set")]
    EmptyQuery,

    #[error("Statement is still executing and cannot be reassigned")]
    StatementBusy,

    // ---------------------------
    // Engine
    // ---------------------------
    #[error("Error while executing sql query `{query}`: {source}")]
    QueryExecutionFailed {
        query: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Engine(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

// Stable diagnostic codes, one per connector failure cause.
pub const CODE_EMPTY_PATH: u16 = 1101;
pub const CODE_EMPTY_QUERY: u16 = 1103;
pub const CODE_STATEMENT_BUSY: u16 = 1104;
pub const CODE_NO_FILE: u16 = 1105;
pub const CODE_NO_CONNECTION: u16 = 1106;
pub const CODE_EXECUTION_FAILED: u16 = 1107;
pub const CODE_BAD_COLUMN: u16 = 1108;

/// Coarse failure classification, one entry per documented failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotConnected,
    EmptyQuery,
    StatementBusy,
    QueryExecutionFailed,
    EngineFailure,
}

impl ConnError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConnError::InvalidArgument { .. } | ConnError::Config(_) => ErrorKind::InvalidArgument,
            ConnError::NotConnected | ConnError::ConnectionClosed => ErrorKind::NotConnected,
            ConnError::EmptyQuery => ErrorKind::EmptyQuery,
            ConnError::StatementBusy => ErrorKind::StatementBusy,
            ConnError::QueryExecutionFailed { .. } => ErrorKind::QueryExecutionFailed,
            ConnError::Engine(_) | ConnError::Io(_) => ErrorKind::EngineFailure,
        }
    }

    /// Connector-level diagnostic code. Errors passed through from the
    /// engine, the filesystem or the config loader have none.
    pub fn code(&self) -> Option<u16> {
        match self {
            ConnError::InvalidArgument { code, .. } => Some(*code),
            ConnError::NotConnected => Some(CODE_NO_FILE),
            ConnError::ConnectionClosed => Some(CODE_NO_CONNECTION),
            ConnError::EmptyQuery => Some(CODE_EMPTY_QUERY),
            ConnError::StatementBusy => Some(CODE_STATEMENT_BUSY),
            ConnError::QueryExecutionFailed { .. } => Some(CODE_EXECUTION_FAILED),
            ConnError::Engine(_) | ConnError::Io(_) | ConnError::Config(_) => None,
        }
    }

    pub(crate) fn invalid(code: u16, message: impl Into<String>) -> Self {
        ConnError::InvalidArgument {
            code,
            message: message.into(),
        }
    }
}

pub type ConnResult<T> = Result<T, ConnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_and_engine_errors_are_engine_failures() {
        let io_err = ConnError::from(io::Error::other("disk gone"));
        assert_eq!(io_err.kind(), ErrorKind::EngineFailure);

        let db_err = ConnError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(db_err.kind(), ErrorKind::EngineFailure);
        assert_eq!(db_err.code(), None);
    }

    #[test]
    fn connector_errors_carry_stable_codes() {
        assert_eq!(ConnError::NotConnected.code(), Some(1105));
        assert_eq!(ConnError::ConnectionClosed.code(), Some(1106));
        assert_eq!(ConnError::ConnectionClosed.kind(), ErrorKind::NotConnected);
        assert_eq!(ConnError::EmptyQuery.code(), Some(1103));
        assert_eq!(ConnError::StatementBusy.code(), Some(1104));
        assert_eq!(ConnError::invalid(CODE_BAD_COLUMN, "x").code(), Some(1108));
        assert_eq!(ConnError::Config("bad".into()).code(), None);
    }

    #[test]
    fn execution_failure_keeps_its_source() {
        use std::error::Error as _;

        let err = ConnError::QueryExecutionFailed {
            query: "SELEC 1".into(),
            source: rusqlite::Error::InvalidQuery,
        };
        assert_eq!(err.kind(), ErrorKind::QueryExecutionFailed);
        assert!(err.source().is_some());
        assert_eq!(err.code(), Some(1107));
        assert!(err.to_string().contains("SELEC 1"));
    }
}
