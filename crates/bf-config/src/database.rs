//! Local store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name used when no explicit path is configured.
pub const DEFAULT_DB_FILE: &str = "bugflow.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL store file. Empty means the platform default.
    #[serde(default)]
    pub path: String,
}

impl DatabaseConfig {
    /// The store path to open.
    ///
    /// An explicit `path` wins. Otherwise `<data_local_dir>/bugflow/bugflow.db`,
    /// or `./bugflow.db` on platforms without a data directory.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        if !self.path.is_empty() {
            return PathBuf::from(&self.path);
        }
        dirs::data_local_dir().map_or_else(
            || PathBuf::from(DEFAULT_DB_FILE),
            |dir| dir.join("bugflow").join(DEFAULT_DB_FILE),
        )
    }
}
