//! Owned SQLite connection plus the mode it was opened with.

use crate::config::ConnectorConfig;
use crate::db::shape::map_row;
use crate::errors::{ConnError, ConnResult};
use crate::models::mode::ConnectionMode;
use crate::models::row::ResultSet;
use crate::models::target::DbFile;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

pub struct DbHandle {
    conn: Connection,
    mode: ConnectionMode,
}

fn open_flags(mode: ConnectionMode) -> OpenFlags {
    let base = OpenFlags::SQLITE_OPEN_NO_MUTEX;
    match mode {
        ConnectionMode::Create => {
            base | OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
        }
        ConnectionMode::Read => base | OpenFlags::SQLITE_OPEN_READ_ONLY,
        ConnectionMode::Update => base | OpenFlags::SQLITE_OPEN_READ_WRITE,
    }
}

/// The filename handed to the engine must name the same file on disk even
/// when it looks like a `file:` URI.
fn engine_path(path: &Path) -> PathBuf {
    if path.is_relative() && path.to_string_lossy().starts_with("file:") {
        return Path::new(".").join(path);
    }
    path.to_path_buf()
}

impl DbHandle {
    pub fn open(file: &DbFile, mode: ConnectionMode, cfg: &ConnectorConfig) -> ConnResult<Self> {
        let conn = Connection::open_with_flags(engine_path(file.path()), open_flags(mode))?;
        conn.busy_timeout(cfg.busy_timeout())?;
        if cfg.foreign_keys {
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        }
        Ok(Self { conn, mode })
    }

    pub fn mode(&self) -> ConnectionMode {
        self.mode
    }

    /// True while a prepared statement on this connection has not been reset.
    pub fn is_busy(&self) -> bool {
        self.conn.is_busy()
    }

    /// Prepare and step `sql` to completion, collecting every row.
    pub fn run(&self, sql: &str) -> rusqlite::Result<ResultSet> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(map_row(row, &columns)?);
        }
        Ok(out)
    }

    /// Close at the engine level. The connection is gone either way.
    pub fn close(self) -> ConnResult<()> {
        self.conn.close().map_err(|(_, e)| ConnError::Engine(e))
    }
}
