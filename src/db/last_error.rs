use chrono::{DateTime, Local};
use rusqlite::ErrorCode;

/// Diagnostic snapshot of the most recent failed execution.
#[derive(Debug, Clone, PartialEq)]
pub struct LastError {
    pub message: String,
    pub code: Option<ErrorCode>,
    pub extended_code: Option<i32>,
    pub query: String,
    pub occurred_at: DateTime<Local>,
}

impl LastError {
    pub fn capture(err: &rusqlite::Error, query: &str) -> Self {
        let sqlite = err.sqlite_error();
        Self {
            message: err.to_string(),
            code: sqlite.map(|e| e.code),
            extended_code: sqlite.map(|e| e.extended_code),
            query: query.to_string(),
            occurred_at: Local::now(),
        }
    }
}
