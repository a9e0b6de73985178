//! Error types for catalog lookups and metadata sources.
//!
//! # Error Handling Strategy
//!
//! Absence is reported two ways, depending on what the caller could expect:
//!
//! - Lookups that may legitimately miss (resolving a table handle, finding a
//!   column by name) return `Ok(None)`.
//! - Operations that take a handle assume the table still exists. If it has
//!   vanished since the handle was issued they fail with
//!   [`CatalogError::TableNotFound`].
//!
//! A source reporting the same column name twice for one table fails with
//! [`CatalogError::DuplicateColumn`] rather than having one column dropped.
//!
//! A handle issued by a different catalog instance is a programming error in
//! the host and fails with [`CatalogError::InvalidHandle`], never with a
//! not-found result. Failures of the underlying source are wrapped in
//! [`CatalogError::Source`] and propagated without retry.

use crate::types::{ConnectorId, HandleKind, SchemaTableName};
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::MetadataCatalog`] operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{kind} handle belongs to connector '{found}', not '{expected}'")]
    InvalidHandle {
        kind: HandleKind,
        expected: ConnectorId,
        found: ConnectorId,
    },

    #[error("Table {0} not found")]
    TableNotFound(SchemaTableName),

    #[error("Table {table} declares column {column} more than once")]
    DuplicateColumn {
        table: SchemaTableName,
        column: String,
    },

    #[error("Metadata source error: {0}")]
    Source(#[from] SourceError),
}

impl CatalogError {
    /// True for errors caused by the host misusing the catalog.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::InvalidHandle { .. })
    }
}

/// Errors raised by a [`crate::TableCatalogSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog DDL: {0}")]
    Ddl(#[from] sqlparser::parser::ParserError),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SourceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidCatalog(message.into())
    }

    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }
}
