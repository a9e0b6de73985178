//! Metadata source built from `CREATE TABLE` statements.

use super::{SourceColumn, SourceTable, TableCatalogSource};
use crate::error::SourceError;
use crate::types::Dialect;
use indexmap::IndexMap;
use sqlparser::ast::{ObjectName, ObjectNamePart, SchemaName, Statement};
use sqlparser::parser::Parser;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;
#[cfg(feature = "tracing")]
use tracing::debug;

/// Schema assigned to unqualified table names when none is configured.
pub const DEFAULT_SCHEMA: &str = "default";

/// A source whose tables come from a DDL script.
///
/// `CREATE TABLE` statements with column definitions become tables and
/// `CREATE SCHEMA` statements register (possibly empty) schemas. A table may
/// declare no columns. Everything else, including `CREATE TABLE ... AS SELECT`
/// and `CREATE TABLE ... LIKE`, is ignored. A table declaring the same column
/// twice is an error. For names with
/// two or more parts the second-to-last part is the schema; unqualified
/// names are placed in the default schema. A table defined twice keeps the
/// later definition.
#[derive(Debug, Clone, Default)]
pub struct DdlCatalogSource {
    schemas: BTreeMap<String, IndexMap<String, SourceTable>>,
}

impl DdlCatalogSource {
    /// Reads and parses the DDL script at `path`.
    pub fn from_path(
        path: impl AsRef<Path>,
        dialect: Dialect,
        default_schema: &str,
    ) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let sql = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_sql(&sql, dialect, default_schema)
    }

    pub fn from_sql(sql: &str, dialect: Dialect, default_schema: &str) -> Result<Self, SourceError> {
        let sqlparser_dialect = dialect.to_sqlparser_dialect();
        let statements = Parser::parse_sql(sqlparser_dialect.as_ref(), sql)?;

        let mut source = Self::default();
        for statement in statements {
            match statement {
                Statement::CreateTable(create) => {
                    // Column lists copied from elsewhere are not known here.
                    if create.query.is_some() || create.like.is_some() || create.clone.is_some() {
                        continue;
                    }
                    let Some((schema, table)) = split_table_name(&create.name, default_schema)
                    else {
                        continue;
                    };

                    let mut seen = HashSet::with_capacity(create.columns.len());
                    let mut columns = Vec::with_capacity(create.columns.len());
                    for column in &create.columns {
                        if !seen.insert(column.name.value.as_str()) {
                            return Err(SourceError::invalid(format!(
                                "table {schema}.{table} declares column {} more than once",
                                column.name.value
                            )));
                        }
                        columns.push(SourceColumn::new(
                            column.name.value.clone(),
                            column.data_type.to_string(),
                        ));
                    }

                    source
                        .schemas
                        .entry(schema)
                        .or_default()
                        .insert(table.clone(), SourceTable::new(table, columns));
                }
                Statement::CreateSchema { schema_name, .. } => {
                    let name = match &schema_name {
                        SchemaName::Simple(name) | SchemaName::NamedAuthorization(name, _) => {
                            name_parts(name).pop()
                        }
                        SchemaName::UnnamedAuthorization(ident) => Some(ident.value.clone()),
                    };
                    if let Some(name) = name {
                        source.schemas.entry(name).or_default();
                    }
                }
                _ => {}
            }
        }

        #[cfg(feature = "tracing")]
        debug!(
            schemas = source.schemas.len(),
            tables = source.schemas.values().map(IndexMap::len).sum::<usize>(),
            "loaded DDL catalog"
        );

        Ok(source)
    }
}

fn name_parts(name: &ObjectName) -> Vec<String> {
    name.0
        .iter()
        .filter_map(ObjectNamePart::as_ident)
        .map(|ident| ident.value.clone())
        .collect()
}

fn split_table_name(name: &ObjectName, default_schema: &str) -> Option<(String, String)> {
    let mut parts = name_parts(name);
    let table = parts.pop()?;
    let schema = parts.pop().unwrap_or_else(|| default_schema.to_string());
    Some((schema, table))
}

impl TableCatalogSource for DdlCatalogSource {
    fn schema_names(&self) -> Result<BTreeSet<String>, SourceError> {
        Ok(self.schemas.keys().cloned().collect())
    }

    fn table_names(&self, schema: &str) -> Result<Vec<String>, SourceError> {
        Ok(self
            .schemas
            .get(schema)
            .map(|tables| tables.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn table(&self, schema: &str, table: &str) -> Result<Option<SourceTable>, SourceError> {
        Ok(self
            .schemas
            .get(schema)
            .and_then(|tables| tables.get(table))
            .cloned())
    }
}
