//! Metadata sources backing a [`crate::MetadataCatalog`].
//!
//! A source is the system of record for schema, table and column
//! definitions. The catalog never caches what a source returns, so every
//! catalog call observes the source's state at that moment.

mod ddl;
mod json;
mod memory;

pub use ddl::{DdlCatalogSource, DEFAULT_SCHEMA};
pub use json::{CatalogDocument, ColumnDefinition, JsonCatalogSource, TableDefinition};
pub use memory::InMemorySource;

use crate::error::SourceError;
use crate::types::ColumnMetadata;
use std::collections::BTreeSet;
use std::sync::Arc;

/// The collaborator a catalog reads from.
///
/// Implementations must be safe to call from several threads at once. They
/// are free to answer each call from a different snapshot of their backing
/// store.
pub trait TableCatalogSource: Send + Sync {
    /// All schema names currently known to the source.
    fn schema_names(&self) -> Result<BTreeSet<String>, SourceError>;

    /// Table names within `schema`, in source order. Unknown schemas yield
    /// an empty list.
    fn table_names(&self, schema: &str) -> Result<Vec<String>, SourceError>;

    /// The table descriptor for `schema.table`, if the source has one.
    fn table(&self, schema: &str, table: &str) -> Result<Option<SourceTable>, SourceError>;
}

impl<S: TableCatalogSource + ?Sized> TableCatalogSource for Arc<S> {
    fn schema_names(&self) -> Result<BTreeSet<String>, SourceError> {
        (**self).schema_names()
    }

    fn table_names(&self, schema: &str) -> Result<Vec<String>, SourceError> {
        (**self).table_names(schema)
    }

    fn table(&self, schema: &str, table: &str) -> Result<Option<SourceTable>, SourceError> {
        (**self).table(schema, table)
    }
}

impl<S: TableCatalogSource + ?Sized> TableCatalogSource for Box<S> {
    fn schema_names(&self) -> Result<BTreeSet<String>, SourceError> {
        (**self).schema_names()
    }

    fn table_names(&self, schema: &str) -> Result<Vec<String>, SourceError> {
        (**self).table_names(schema)
    }

    fn table(&self, schema: &str, table: &str) -> Result<Option<SourceTable>, SourceError> {
        (**self).table(schema, table)
    }
}

/// A column as a source describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceColumn {
    pub name: String,
    pub data_type: String,
}

impl SourceColumn {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// A table descriptor as a source describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    pub name: String,
    pub columns: Vec<SourceColumn>,
    /// Locations holding the table's data, when the source records them.
    pub locations: Vec<String>,
}

impl SourceTable {
    pub fn new(name: impl Into<String>, columns: Vec<SourceColumn>) -> Self {
        Self {
            name: name.into(),
            columns,
            locations: Vec::new(),
        }
    }

    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    /// Column metadata in source order, numbered from zero.
    pub fn columns_metadata(&self) -> Vec<ColumnMetadata> {
        self.columns
            .iter()
            .enumerate()
            .map(|(position, column)| {
                ColumnMetadata::new(&column.name, &column.data_type, position)
            })
            .collect()
    }
}
