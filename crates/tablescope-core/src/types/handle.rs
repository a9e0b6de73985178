use super::{ColumnMetadata, ConnectorId, SchemaTableName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of handle failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    Table,
    Column,
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Reference to a table, scoped to the catalog instance that issued it.
///
/// A handle only records identity. Catalog operations taking a handle look
/// the table up again, so a handle may outlive the table it names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableHandle {
    connector_id: ConnectorId,
    schema_name: String,
    table_name: String,
}

impl TableHandle {
    pub fn new(connector_id: ConnectorId, table: SchemaTableName) -> Self {
        Self {
            connector_id,
            schema_name: table.schema().to_string(),
            table_name: table.table().to_string(),
        }
    }

    pub fn connector_id(&self) -> &ConnectorId {
        &self.connector_id
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn schema_table_name(&self) -> SchemaTableName {
        SchemaTableName::new(&self.schema_name, &self.table_name)
    }
}

impl fmt::Display for TableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}.{}",
            self.connector_id, self.schema_name, self.table_name
        )
    }
}

/// Reference to a column, carrying a snapshot of its metadata taken when
/// the handle was issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHandle {
    connector_id: ConnectorId,
    column: ColumnMetadata,
}

impl ColumnHandle {
    pub fn new(connector_id: ConnectorId, column: ColumnMetadata) -> Self {
        Self {
            connector_id,
            column,
        }
    }

    pub fn connector_id(&self) -> &ConnectorId {
        &self.connector_id
    }

    pub fn column_metadata(&self) -> &ColumnMetadata {
        &self.column
    }

    pub fn column_name(&self) -> &str {
        &self.column.name
    }

    pub fn ordinal_position(&self) -> usize {
        self.column.ordinal_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_handle_round_trips_identity() {
        let handle = TableHandle::new(
            ConnectorId::new("example"),
            SchemaTableName::new("default", "orders"),
        );
        assert_eq!(handle.schema_name(), "default");
        assert_eq!(handle.table_name(), "orders");
        assert_eq!(
            handle.schema_table_name(),
            SchemaTableName::new("default", "orders")
        );
        assert_eq!(handle.to_string(), "example:default.orders");
    }

    #[test]
    fn test_handle_serialization() {
        let handle = TableHandle::new(
            ConnectorId::new("example"),
            SchemaTableName::new("default", "orders"),
        );
        let json = serde_json::to_value(&handle).unwrap();
        assert_eq!(json["connectorId"], "example");
        assert_eq!(json["schemaName"], "default");
        assert_eq!(json["tableName"], "orders");

        let back: TableHandle = serde_json::from_value(json).unwrap();
        assert_eq!(back, handle);
    }
}
