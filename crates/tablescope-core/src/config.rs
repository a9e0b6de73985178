//! Catalog configuration.
//!
//! A configuration names the catalog instance and selects the source it
//! reads from. It is stored as JSON:
//!
//! ```json
//! {
//!   "connectorId": "example",
//!   "source": { "kind": "json", "path": "catalog.json" }
//! }
//! ```

use crate::source::DEFAULT_SCHEMA;
use crate::types::Dialect;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Connector id used when a configuration does not name one.
pub const DEFAULT_CONNECTOR_ID: &str = "tablescope";

/// Errors raised while loading or validating a [`CatalogConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No metadata source configured")]
    MissingSource,

    #[error("Only one metadata source may be configured, found {0}")]
    ConflictingSources(String),

    #[error("{flags} only apply to DDL sources, not to a {kind} source")]
    DdlOnlyOptions { flags: String, kind: &'static str },

    #[error("Connector id must not be empty")]
    EmptyConnectorId,
}

/// Configuration of one catalog instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Identifier stamped on every handle this catalog issues.
    #[serde(default = "default_connector_id")]
    pub connector_id: String,

    /// Where table definitions come from.
    pub source: SourceConfig,
}

/// Selects and configures the metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SourceConfig {
    /// A JSON catalog document.
    Json { path: PathBuf },

    /// A script of `CREATE TABLE` statements.
    Ddl {
        path: PathBuf,
        #[serde(default)]
        dialect: Dialect,
        /// Schema for unqualified table names (default: "default").
        #[serde(rename = "defaultSchema", default = "default_schema")]
        default_schema: String,
    },

    /// A live database, introspected through its system catalog.
    Database { url: String },
}

fn default_connector_id() -> String {
    DEFAULT_CONNECTOR_ID.to_string()
}

fn default_schema() -> String {
    DEFAULT_SCHEMA.to_string()
}

impl CatalogConfig {
    pub fn new(source: SourceConfig) -> Self {
        Self {
            connector_id: default_connector_id(),
            source,
        }
    }

    /// Reads and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connector_id.trim().is_empty() {
            return Err(ConfigError::EmptyConnectorId);
        }
        Ok(())
    }
}

impl SourceConfig {
    /// Short name of the source kind, as written in the `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json { .. } => "json",
            Self::Ddl { .. } => "ddl",
            Self::Database { .. } => "database",
        }
    }
}
