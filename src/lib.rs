//! rsqlconnector library root.
//! A thin connector over an embedded SQLite database: open or create a file,
//! set a query, execute it and read the result back as a scalar, a row, all
//! rows or key/value pairs.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod utils;

pub use config::ConnectorConfig;
pub use db::connector::{Connector, ConnectorState};
pub use db::last_error::LastError;
pub use errors::{ConnError, ConnResult, ErrorKind};
pub use models::mode::ConnectionMode;
pub use models::row::{ResultSet, Row};
pub use models::target::{DbFile, DbTarget};
pub use models::value::Value;
