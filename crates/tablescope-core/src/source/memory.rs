//! In-memory metadata source.

use super::{SourceTable, TableCatalogSource};
use crate::error::SourceError;
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

type Schemas = BTreeMap<String, IndexMap<String, SourceTable>>;

/// A source populated programmatically.
///
/// Tables can be added and removed while catalogs are reading from it, which
/// makes it the natural way to reproduce a table disappearing between a
/// listing and a lookup.
#[derive(Debug, Default)]
pub struct InMemorySource {
    schemas: RwLock<Schemas>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty schema.
    pub fn with_schema(self, schema: impl Into<String>) -> Self {
        self.write().entry(schema.into()).or_default();
        self
    }

    /// Adds a table, creating its schema if needed.
    pub fn with_table(self, schema: impl Into<String>, table: SourceTable) -> Self {
        self.insert_table(schema, table);
        self
    }

    /// Adds or replaces a table. A replaced table keeps its listing position.
    pub fn insert_table(&self, schema: impl Into<String>, table: SourceTable) {
        self.write()
            .entry(schema.into())
            .or_default()
            .insert(table.name.clone(), table);
    }

    /// Removes a table, leaving its schema in place.
    pub fn remove_table(&self, schema: &str, table: &str) -> Option<SourceTable> {
        self.write()
            .get_mut(schema)
            .and_then(|tables| tables.shift_remove(table))
    }

    /// Removes a schema together with its tables.
    pub fn remove_schema(&self, schema: &str) -> bool {
        self.write().remove(schema).is_some()
    }

    fn read(&self) -> RwLockReadGuard<'_, Schemas> {
        self.schemas.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Schemas> {
        self.schemas.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl TableCatalogSource for InMemorySource {
    fn schema_names(&self) -> Result<BTreeSet<String>, SourceError> {
        Ok(self.read().keys().cloned().collect())
    }

    fn table_names(&self, schema: &str) -> Result<Vec<String>, SourceError> {
        Ok(self
            .read()
            .get(schema)
            .map(|tables| tables.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn table(&self, schema: &str, table: &str) -> Result<Option<SourceTable>, SourceError> {
        Ok(self
            .read()
            .get(schema)
            .and_then(|tables| tables.get(table))
            .cloned())
    }
}
