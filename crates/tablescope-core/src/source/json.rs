//! Metadata source backed by a JSON catalog document.
//!
//! The document maps each schema name to the tables it contains:
//!
//! ```json
//! {
//!   "example": [
//!     {
//!       "name": "numbers",
//!       "columns": [
//!         { "name": "text", "type": "VARCHAR" },
//!         { "name": "value", "type": "BIGINT" }
//!       ],
//!       "sources": ["http://example.com/numbers-1.csv"]
//!     }
//!   ]
//! }
//! ```
//!
//! The document is read once and served from memory until [`JsonCatalogSource::reload`]
//! is called.

use super::{SourceColumn, SourceTable, TableCatalogSource};
use crate::error::SourceError;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
#[cfg(feature = "tracing")]
use tracing::debug;

/// Top-level JSON catalog document: schema name to table definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CatalogDocument {
    pub schemas: BTreeMap<String, Vec<TableDefinition>>,
}

/// A table entry in a JSON catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
    /// URIs of the files holding the table's rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

/// A column entry in a JSON catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

type Snapshot = BTreeMap<String, IndexMap<String, SourceTable>>;

/// A source serving a [`CatalogDocument`].
#[derive(Debug)]
pub struct JsonCatalogSource {
    path: Option<PathBuf>,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl JsonCatalogSource {
    /// Loads the catalog document at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let snapshot = load_snapshot(&path)?;
        Ok(Self {
            path: Some(path),
            snapshot: RwLock::new(Arc::new(snapshot)),
        })
    }

    /// Parses a catalog document held in memory. Such a source cannot be
    /// reloaded.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self, SourceError> {
        Ok(Self {
            path: None,
            snapshot: RwLock::new(Arc::new(build_snapshot(document)?)),
        })
    }

    /// The file this source was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Re-reads the backing file and swaps in the new definitions.
    ///
    /// On error the previous definitions stay in place.
    pub fn reload(&self) -> Result<(), SourceError> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| SourceError::invalid("catalog was not loaded from a file"))?;
        let snapshot = load_snapshot(path)?;

        #[cfg(feature = "tracing")]
        debug!(path = %path.display(), schemas = snapshot.len(), "reloaded JSON catalog");

        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(snapshot);
        Ok(())
    }

    fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(|e| e.into_inner()))
    }
}

fn load_snapshot(path: &Path) -> Result<Snapshot, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: CatalogDocument = serde_json::from_str(&content)?;
    build_snapshot(document)
}

fn build_snapshot(document: CatalogDocument) -> Result<Snapshot, SourceError> {
    let mut snapshot = Snapshot::new();

    for (schema, definitions) in document.schemas {
        if schema.is_empty() {
            return Err(SourceError::invalid("schema name must not be empty"));
        }

        let mut tables = IndexMap::with_capacity(definitions.len());
        for definition in definitions {
            let table = validate_table(&schema, definition)?;
            if tables.contains_key(&table.name) {
                return Err(SourceError::invalid(format!(
                    "table {schema}.{} is defined more than once",
                    table.name
                )));
            }
            tables.insert(table.name.clone(), table);
        }
        snapshot.insert(schema, tables);
    }

    Ok(snapshot)
}

fn validate_table(schema: &str, definition: TableDefinition) -> Result<SourceTable, SourceError> {
    if definition.name.is_empty() {
        return Err(SourceError::invalid(format!(
            "schema {schema} contains a table without a name"
        )));
    }

    let mut seen = HashSet::new();
    for column in &definition.columns {
        if column.name.is_empty() {
            return Err(SourceError::invalid(format!(
                "table {schema}.{} contains a column without a name",
                definition.name
            )));
        }
        if column.data_type.is_empty() {
            return Err(SourceError::invalid(format!(
                "column {} of table {schema}.{} has no type",
                column.name, definition.name
            )));
        }
        if !seen.insert(column.name.as_str()) {
            return Err(SourceError::invalid(format!(
                "table {schema}.{} declares column {} more than once",
                definition.name, column.name
            )));
        }
    }

    let columns = definition
        .columns
        .into_iter()
        .map(|c| SourceColumn::new(c.name, c.data_type))
        .collect();

    Ok(SourceTable::new(definition.name, columns).with_locations(definition.sources))
}

impl TableCatalogSource for JsonCatalogSource {
    fn schema_names(&self) -> Result<BTreeSet<String>, SourceError> {
        Ok(self.current().keys().cloned().collect())
    }

    fn table_names(&self, schema: &str) -> Result<Vec<String>, SourceError> {
        Ok(self
            .current()
            .get(schema)
            .map(|tables| tables.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn table(&self, schema: &str, table: &str) -> Result<Option<SourceTable>, SourceError> {
        Ok(self
            .current()
            .get(schema)
            .and_then(|tables| tables.get(table))
            .cloned())
    }
}
