//! Board configuration loaded with figment.
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. An optional configuration file (YAML, JSON or TOML by extension)
//! 3. Environment variables prefixed with `TASKBOARD_`

use crate::error::Result;
use crate::types::{Column, Priority};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// A column created when a fresh board is seeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSeed {
    pub id: String,
    pub title: String,
}

/// Settings that shape a newly created board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Columns a new board starts with, left to right
    pub default_columns: Vec<ColumnSeed>,
    /// Prefix for generated column titles ("Column" gives "Column 4")
    pub column_title_prefix: String,
    /// Priority given to tasks created without one
    pub default_priority: Priority,
    /// Most activity entries a processor keeps; older ones are dropped
    pub activity_limit: usize,
}

/// Default cap on recorded activity entries
pub const DEFAULT_ACTIVITY_LIMIT: usize = 1000;

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_columns: Column::default_columns()
                .into_iter()
                .map(|c| ColumnSeed {
                    id: c.id.to_string(),
                    title: c.title,
                })
                .collect(),
            column_title_prefix: "Column".to_string(),
            default_priority: Priority::Medium,
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

impl BoardConfig {
    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            debug!(path = %path.display(), "loading board configuration file");
            figment = match path.extension().and_then(|e| e.to_str()) {
                Some("json") => figment.merge(Json::file(path)),
                Some("toml") => figment.merge(Toml::file(path)),
                _ => figment.merge(Yaml::file(path)),
            };
        }

        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        debug!(
            columns = config.default_columns.len(),
            priority = %config.default_priority,
            "board configuration loaded"
        );
        Ok(config)
    }
}
