//! Demo-data seeding configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Seed the store on startup when it holds no projects.
    #[serde(default)]
    pub on_startup: bool,

    /// Seed document (JSON). Empty means the built-in demo data.
    #[serde(default)]
    pub file: String,
}

impl SeedConfig {
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.file.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.file))
        }
    }
}
