use super::SchemaTableName;
use serde::{Deserialize, Serialize};

/// A column definition as reported by the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    pub name: String,
    /// Declared type, spelled the way the source spells it.
    pub data_type: String,
    /// Zero-based position of the column within its table.
    pub ordinal_position: usize,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, ordinal_position: usize) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            ordinal_position,
        }
    }
}

/// A table identity with its columns in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMetadata {
    pub table: SchemaTableName,
    pub columns: Vec<ColumnMetadata>,
}

impl TableMetadata {
    pub fn new(table: SchemaTableName, columns: Vec<ColumnMetadata>) -> Self {
        Self { table, columns }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}
