//! Runtime configuration read from the process environment.
//!
//! | Variable          | Default                 |
//! |-------------------|-------------------------|
//! | `LISTS_DB_PATH`   | `lists.sqlite3`         |
//! | `LISTS_LOG_LEVEL` | `default_log_level()`   |
//! | `LISTS_LOG_DIR`   | unset: no file logging  |

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "LISTS_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "LISTS_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "LISTS_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "lists.sqlite3";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file backing the entity store.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            db_path: read(DB_PATH_VAR).map_or(defaults.db_path, PathBuf::from),
            log_level: read(LOG_LEVEL_VAR).unwrap_or(defaults.log_level),
            log_dir: read(LOG_DIR_VAR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DB_PATH_VAR, LOG_DIR_VAR, LOG_LEVEL_VAR};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.db_path, PathBuf::from("lists.sqlite3"));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn environment_overrides_defaults_and_ignores_blank_values() {
        let vars = HashMap::from([
            (DB_PATH_VAR, "/var/lib/lists/db.sqlite3"),
            (LOG_LEVEL_VAR, " warn "),
            (LOG_DIR_VAR, "   "),
        ]);
        let config = AppConfig::from_lookup(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.db_path, PathBuf::from("/var/lib/lists/db.sqlite3"));
        assert_eq!(config.log_level, "warn");
        assert!(config.log_dir.is_none());
    }
}
