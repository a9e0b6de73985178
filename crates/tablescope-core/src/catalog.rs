//! Read-only metadata catalog over a [`TableCatalogSource`].
//!
//! The catalog answers which schemas, tables and columns exist and hands out
//! handles scoped to its connector id. It keeps no state beyond that id and
//! the source, and re-queries the source on every call, so two calls may see
//! different versions of the source. In particular a table can disappear
//! between being listed and being looked up. Bulk listings skip such tables;
//! handle-based lookups report them as [`CatalogError::TableNotFound`].
//!
//! There are no operations that create, alter or drop anything.

use crate::error::CatalogError;
use crate::source::{SourceTable, TableCatalogSource};
use crate::types::{
    ColumnHandle, ColumnMetadata, ConnectorId, HandleKind, SchemaTableName, SchemaTablePrefix,
    TableHandle, TableMetadata,
};
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashSet};
#[cfg(feature = "tracing")]
use tracing::debug;

/// A read-only catalog bound to one connector id and one source.
#[derive(Debug, Clone)]
pub struct MetadataCatalog<S> {
    connector_id: ConnectorId,
    source: S,
}

impl<S: TableCatalogSource> MetadataCatalog<S> {
    pub fn new(connector_id: impl Into<ConnectorId>, source: S) -> Self {
        Self {
            connector_id: connector_id.into(),
            source,
        }
    }

    pub fn connector_id(&self) -> &ConnectorId {
        &self.connector_id
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn list_schema_names(&self) -> Result<BTreeSet<String>, CatalogError> {
        Ok(self.source.schema_names()?)
    }

    pub fn schema_exists(&self, schema: &str) -> Result<bool, CatalogError> {
        Ok(self.list_schema_names()?.contains(schema))
    }

    /// Resolves a table name to a handle.
    ///
    /// Returns `Ok(None)` when the schema is not listed by the source (the
    /// table itself is then never looked up) or when the source has no such
    /// table.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self), fields(table = %name)))]
    pub fn get_table_handle(
        &self,
        name: &SchemaTableName,
    ) -> Result<Option<TableHandle>, CatalogError> {
        if !self.schema_exists(name.schema())? {
            #[cfg(feature = "tracing")]
            debug!("schema not listed by source");
            return Ok(None);
        }

        if self.source.table(name.schema(), name.table())?.is_none() {
            #[cfg(feature = "tracing")]
            debug!("table not found in source");
            return Ok(None);
        }

        Ok(Some(TableHandle::new(self.connector_id.clone(), name.clone())))
    }

    /// Looks the handle's table up again and returns its current metadata.
    pub fn get_table_metadata(&self, handle: &TableHandle) -> Result<TableMetadata, CatalogError> {
        self.check_table_handle(handle)?;
        let name = handle.schema_table_name();
        self.resolve_table_metadata(&name)?
            .ok_or(CatalogError::TableNotFound(name))
    }

    /// Lists tables in `schema`, or in every schema when `schema` is `None`.
    ///
    /// A named schema is queried directly without checking that it exists;
    /// an unknown schema simply has no tables.
    pub fn list_tables(&self, schema: Option<&str>) -> Result<Vec<SchemaTableName>, CatalogError> {
        let schemas = match schema {
            Some(schema) => BTreeSet::from([schema.to_string()]),
            None => self.source.schema_names()?,
        };

        let mut tables = Vec::new();
        for schema in schemas {
            for table in self.source.table_names(&schema)? {
                tables.push(SchemaTableName::new(schema.as_str(), table));
            }
        }
        Ok(tables)
    }

    /// Lists the table names a prefix covers.
    ///
    /// A full prefix yields its single name without consulting the source.
    pub fn list_tables_with_prefix(
        &self,
        prefix: &SchemaTablePrefix,
    ) -> Result<Vec<SchemaTableName>, CatalogError> {
        match (prefix.schema_name(), prefix.table_name()) {
            (Some(schema), Some(table)) => Ok(vec![SchemaTableName::new(schema, table)]),
            (schema, _) => self.list_tables(schema),
        }
    }

    /// Column handles keyed by column name, in source column order.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self), fields(table = %handle)))]
    pub fn get_column_handles(
        &self,
        handle: &TableHandle,
    ) -> Result<IndexMap<String, ColumnHandle>, CatalogError> {
        self.check_table_handle(handle)?;

        let name = handle.schema_table_name();
        let Some(table) = self.source.table(name.schema(), name.table())? else {
            return Err(CatalogError::TableNotFound(name));
        };

        Ok(checked_columns(&name, &table)?
            .into_iter()
            .map(|column| {
                (
                    column.name.clone(),
                    ColumnHandle::new(self.connector_id.clone(), column),
                )
            })
            .collect())
    }

    pub fn get_column_handle(
        &self,
        handle: &TableHandle,
        column_name: &str,
    ) -> Result<Option<ColumnHandle>, CatalogError> {
        Ok(self.get_column_handles(handle)?.shift_remove(column_name))
    }

    /// Returns the metadata captured in `column` when it was issued. The
    /// source is not consulted.
    pub fn get_column_metadata(
        &self,
        table: &TableHandle,
        column: &ColumnHandle,
    ) -> Result<ColumnMetadata, CatalogError> {
        self.check_table_handle(table)?;
        self.check_connector(HandleKind::Column, column.connector_id())?;
        Ok(column.column_metadata().clone())
    }

    /// Columns of every table the prefix covers.
    ///
    /// Tables that vanish between listing and lookup are left out.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn list_table_columns(
        &self,
        prefix: &SchemaTablePrefix,
    ) -> Result<IndexMap<SchemaTableName, Vec<ColumnMetadata>>, CatalogError> {
        let mut columns = IndexMap::new();
        for name in self.list_tables_with_prefix(prefix)? {
            match self.resolve_table_metadata(&name)? {
                Some(metadata) => {
                    columns.insert(name, metadata.columns);
                }
                None => {
                    #[cfg(feature = "tracing")]
                    debug!(table = %name, "table disappeared during listing");
                }
            }
        }
        Ok(columns)
    }

    /// This catalog never exposes a sample weight column.
    pub fn get_sample_weight_column_handle(
        &self,
        handle: &TableHandle,
    ) -> Result<Option<ColumnHandle>, CatalogError> {
        self.check_table_handle(handle)?;
        Ok(None)
    }

    fn resolve_table_metadata(
        &self,
        name: &SchemaTableName,
    ) -> Result<Option<TableMetadata>, CatalogError> {
        if !self.schema_exists(name.schema())? {
            return Ok(None);
        }

        match self.source.table(name.schema(), name.table())? {
            Some(table) => Ok(Some(TableMetadata::new(
                name.clone(),
                checked_columns(name, &table)?,
            ))),
            None => Ok(None),
        }
    }

    fn check_table_handle(&self, handle: &TableHandle) -> Result<(), CatalogError> {
        self.check_connector(HandleKind::Table, handle.connector_id())
    }

    fn check_connector(&self, kind: HandleKind, found: &ConnectorId) -> Result<(), CatalogError> {
        if *found == self.connector_id {
            Ok(())
        } else {
            Err(CatalogError::InvalidHandle {
                kind,
                expected: self.connector_id.clone(),
                found: found.clone(),
            })
        }
    }
}

/// Column metadata of `table`, rejecting a source that reports the same
/// column name twice.
fn checked_columns(
    name: &SchemaTableName,
    table: &SourceTable,
) -> Result<Vec<ColumnMetadata>, CatalogError> {
    let columns = table.columns_metadata();
    let mut seen = HashSet::with_capacity(columns.len());
    for column in &columns {
        if !seen.insert(column.name.as_str()) {
            return Err(CatalogError::DuplicateColumn {
                table: name.clone(),
                column: column.name.clone(),
            });
        }
    }
    Ok(columns)
}
