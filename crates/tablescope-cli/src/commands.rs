//! Execution of the catalog subcommands.

use crate::cli::Command;
use anyhow::{bail, Result};
use serde::Serialize;
use tablescope_core::{
    CatalogError, ColumnHandle, ColumnMetadata, MetadataCatalog, SchemaTableName,
    SchemaTablePrefix, TableCatalogSource, TableHandle,
};

/// The result of a catalog subcommand, ready to be formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Schemas(Vec<String>),
    Tables(Vec<SchemaTableName>),
    Columns(Vec<TableColumns>),
    Describe(TableDescription),
}

/// Columns of one table, as listed by `columns`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumns {
    pub table: SchemaTableName,
    pub columns: Vec<ColumnMetadata>,
}

/// A resolved table with its column handles, as shown by `describe`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDescription {
    pub handle: TableHandle,
    pub columns: Vec<ColumnHandle>,
}

/// Whether the command found what it was asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Found(Report),
    NotFound(String),
}

/// Run a catalog subcommand.
///
/// `json-schema` does not use a catalog and is rejected here.
pub fn execute<S: TableCatalogSource>(
    catalog: &MetadataCatalog<S>,
    command: &Command,
) -> Result<Outcome> {
    let report = match command {
        Command::Schemas => Report::Schemas(catalog.list_schema_names()?.into_iter().collect()),
        Command::Tables { schema } => Report::Tables(catalog.list_tables(schema.as_deref())?),
        Command::Columns { schema, table } => {
            let prefix = match (schema, table) {
                (Some(schema), Some(table)) => SchemaTablePrefix::table(schema, table),
                (Some(schema), None) => SchemaTablePrefix::schema(schema),
                (None, _) => SchemaTablePrefix::all(),
            };
            let columns = catalog
                .list_table_columns(&prefix)?
                .into_iter()
                .map(|(table, columns)| TableColumns { table, columns })
                .collect();
            Report::Columns(columns)
        }
        Command::Describe { table } => return describe(catalog, table),
        Command::JsonSchema { .. } => bail!("json-schema does not read a catalog"),
    };
    Ok(Outcome::Found(report))
}

fn describe<S: TableCatalogSource>(catalog: &MetadataCatalog<S>, table: &str) -> Result<Outcome> {
    let Some(name) = SchemaTableName::parse(table) else {
        bail!("Expected a table name of the form SCHEMA.TABLE, got '{table}'");
    };

    let Some(handle) = catalog.get_table_handle(&name)? else {
        return Ok(Outcome::NotFound(format!("Table {name} not found")));
    };

    match catalog.get_column_handles(&handle) {
        Ok(columns) => Ok(Outcome::Found(Report::Describe(TableDescription {
            handle,
            columns: columns.into_values().collect(),
        }))),
        // Dropped after the handle was resolved.
        Err(CatalogError::TableNotFound(name)) => {
            Ok(Outcome::NotFound(format!("Table {name} not found")))
        }
        Err(err) => Err(err.into()),
    }
}
