//! Read-only metadata catalog for query engine connectors.
//!
//! [`MetadataCatalog`] answers which schemas, tables and columns exist,
//! reading every answer from a [`TableCatalogSource`]. Sources are provided
//! for JSON catalog documents, DDL scripts and programmatic use.

pub mod catalog;
pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use catalog::MetadataCatalog;
pub use config::{CatalogConfig, ConfigError, SourceConfig, DEFAULT_CONNECTOR_ID};
pub use error::{CatalogError, SourceError};
pub use source::{
    CatalogDocument, ColumnDefinition, DdlCatalogSource, InMemorySource, JsonCatalogSource,
    SourceColumn, SourceTable, TableCatalogSource, TableDefinition, DEFAULT_SCHEMA,
};
pub use types::{
    ColumnHandle, ColumnMetadata, ConnectorId, Dialect, HandleKind, SchemaTableName,
    SchemaTablePrefix, TableHandle, TableMetadata,
};
