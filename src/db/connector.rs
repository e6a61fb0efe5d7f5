//! The connector: one database file, at most one open connection and one
//! pending query at a time.
//!
//! Lifecycle:
//! - `open_connection` / `create_file(.., true, ..)` → connected
//! - `set_query` stores the text, any `get_*` shaper executes it
//! - `close_connection` drops the connection but keeps the file reference
//! - `reset` returns everything to the just-constructed state
//!
//! Not meant for concurrent use: every method takes `&mut self`, so callers
//! that share a connector wrap it in their own lock.

use crate::config::ConnectorConfig;
use crate::db::handle::DbHandle;
use crate::db::last_error::LastError;
use crate::db::shape;
use crate::errors::{CODE_BAD_COLUMN, CODE_EMPTY_QUERY, ConnError, ConnResult};
use crate::models::mode::ConnectionMode;
use crate::models::row::{ResultSet, Row};
use crate::models::target::{DbFile, DbTarget};
use crate::models::value::Value;
use crate::utils::path::touch_if_missing;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Coarse view of where a connector is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorState {
    Uninitialized,
    /// A file is remembered but its connection was closed.
    FileSet,
    Connected,
}

#[derive(Default)]
pub struct Connector {
    config: ConnectorConfig,
    file: Option<DbFile>,
    handle: Option<DbHandle>,
    query: String,
    last_error: Option<LastError>,
}

impl Connector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConnectorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    // ---------------------------
    // Connection lifecycle
    // ---------------------------

    /// Open `target` in `mode` ("create", "read" or "update", any case).
    /// Unknown modes open read-only. Whatever was open before is released
    /// first, including the pending query.
    pub fn open_connection(
        &mut self,
        target: impl Into<DbTarget>,
        mode: &str,
    ) -> ConnResult<()> {
        let file = target.into().resolve()?;
        let mode = ConnectionMode::resolve(mode);
        self.open_resolved(file, mode)
    }

    /// Same as `open_connection`, with the mode taken from the config.
    pub fn open_with_default_mode(&mut self, target: impl Into<DbTarget>) -> ConnResult<()> {
        let file = target.into().resolve()?;
        let mode = self.config.mode();
        self.open_resolved(file, mode)
    }

    fn open_resolved(&mut self, file: DbFile, mode: ConnectionMode) -> ConnResult<()> {
        self.reset();

        let handle = DbHandle::open(&file, mode, &self.config)?;
        debug!(path = %file.path().display(), mode = mode.as_str(), "database connection opened");

        self.file = Some(file);
        self.handle = Some(handle);
        Ok(())
    }

    /// Make sure the database file exists (an empty file is a valid empty
    /// database), then optionally connect to it.
    pub fn create_file(
        &mut self,
        target: impl Into<DbTarget>,
        connect_after: bool,
        mode: &str,
    ) -> ConnResult<()> {
        let file = target.into().resolve()?;

        if touch_if_missing(file.path())? {
            debug!(path = %file.path().display(), "database file created");
        }

        if connect_after {
            self.open_resolved(file, ConnectionMode::resolve(mode))?;
        }
        Ok(())
    }

    /// Close the open connection, if any. The file reference survives until
    /// `reset`. Calling this with nothing open is fine.
    pub fn close_connection(&mut self) -> ConnResult<()> {
        if let Some(handle) = self.handle.take() {
            handle.close()?;
            debug!("database connection closed");
        }
        Ok(())
    }

    /// Full teardown back to the just-constructed state. Never fails; an
    /// engine error while closing is only logged.
    pub fn reset(&mut self) {
        self.file = None;
        self.query.clear();
        self.last_error = None;
        if let Err(e) = self.close_connection() {
            warn!(error = %e, "error while closing connection during reset");
        }
    }

    // ---------------------------
    // Query
    // ---------------------------

    pub fn set_query(&mut self, text: &str) -> ConnResult<()> {
        if text.is_empty() {
            return Err(ConnError::invalid(CODE_EMPTY_QUERY, "sql query has zero length"));
        }
        if self.handle.as_ref().is_some_and(DbHandle::is_busy) {
            return Err(ConnError::StatementBusy);
        }
        self.query = text.to_string();
        Ok(())
    }

    /// Run the pending query and hand back every row it produced.
    ///
    /// On engine failure the error is also kept for `get_last_error` and the
    /// query text stays in place.
    pub fn execute(&mut self) -> ConnResult<ResultSet> {
        if self.file.is_none() {
            return Err(ConnError::NotConnected);
        }
        let Some(handle) = self.handle.as_ref() else {
            return Err(ConnError::ConnectionClosed);
        };
        if self.query.is_empty() {
            return Err(ConnError::EmptyQuery);
        }

        match handle.run(&self.query) {
            Ok(rows) => {
                debug!(query = %self.query, rows = rows.len(), "query executed");
                Ok(rows)
            }
            Err(source) => {
                warn!(query = %self.query, error = %source, "query execution failed");
                self.last_error = Some(LastError::capture(&source, &self.query));
                Err(ConnError::QueryExecutionFailed {
                    query: self.query.clone(),
                    source,
                })
            }
        }
    }

    // ---------------------------
    // Result shapes
    // ---------------------------

    /// First column of the first row, `None` when nothing matched.
    pub fn get_scalar(&mut self) -> ConnResult<Option<Value>> {
        Ok(shape::scalar(self.execute()?))
    }

    pub fn get_row(&mut self) -> ConnResult<Option<Row>> {
        Ok(self.execute()?.into_iter().next())
    }

    pub fn get_all_rows(&mut self) -> ConnResult<Option<Vec<Row>>> {
        let rows = self.execute()?;
        Ok((!rows.is_empty()).then_some(rows))
    }

    /// Map each row's `key_column` value (as text) to the row's other column.
    pub fn get_key_value_pairs(
        &mut self,
        key_column: &str,
    ) -> ConnResult<Option<IndexMap<String, Value>>> {
        if key_column.is_empty() {
            return Err(ConnError::invalid(CODE_BAD_COLUMN, "column name has zero length"));
        }
        shape::key_value_pairs(self.execute()?, key_column)
    }

    // ---------------------------
    // Accessors
    // ---------------------------

    pub fn get_file(&self) -> ConnResult<&DbFile> {
        self.file.as_ref().ok_or(ConnError::NotConnected)
    }

    pub fn get_file_path(&self) -> ConnResult<String> {
        self.get_file().map(DbFile::to_path_string)
    }

    pub fn get_query_text(&self) -> ConnResult<&str> {
        if self.query.is_empty() {
            return Err(ConnError::EmptyQuery);
        }
        Ok(&self.query)
    }

    pub fn get_last_error(&self) -> Option<&LastError> {
        self.last_error.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    pub fn mode(&self) -> Option<ConnectionMode> {
        self.handle.as_ref().map(DbHandle::mode)
    }

    pub fn state(&self) -> ConnectorState {
        match (&self.file, &self.handle) {
            (_, Some(_)) => ConnectorState::Connected,
            (Some(_), None) => ConnectorState::FileSet,
            (None, None) => ConnectorState::Uninitialized,
        }
    }
}
