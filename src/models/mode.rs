use serde::{Deserialize, Serialize};
use tracing::warn;

/// Access mode a database file is opened with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionMode {
    Create,
    Read,
    Update,
}

impl ConnectionMode {
    /// Strict, case-insensitive parse.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "create" => Some(Self::Create),
            "read" => Some(Self::Read),
            "update" => Some(Self::Update),
            _ => None,
        }
    }

    /// Lenient parse used when opening a connection: anything unrecognised
    /// falls back to `Read` without failing.
    pub fn resolve(s: &str) -> Self {
        Self::from_db_str(s).unwrap_or_else(|| {
            warn!(mode = s, "unrecognised connection mode, falling back to read");
            Self::Read
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionMode::Create => "create",
            ConnectionMode::Read => "read",
            ConnectionMode::Update => "update",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, ConnectionMode::Read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ConnectionMode::from_db_str("CREATE"), Some(ConnectionMode::Create));
        assert_eq!(ConnectionMode::from_db_str("Update"), Some(ConnectionMode::Update));
        assert_eq!(ConnectionMode::from_db_str("read"), Some(ConnectionMode::Read));
    }

    #[test]
    fn unknown_mode_resolves_to_read() {
        assert_eq!(ConnectionMode::from_db_str("delete"), None);
        assert_eq!(ConnectionMode::resolve("delete"), ConnectionMode::Read);
        assert_eq!(ConnectionMode::resolve(""), ConnectionMode::Read);
        assert!(ConnectionMode::resolve("delete").is_read_only());
        assert!(!ConnectionMode::Update.is_read_only());
    }
}
