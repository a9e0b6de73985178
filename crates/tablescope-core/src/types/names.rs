use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog instance.
///
/// Every handle carries the id of the catalog that issued it, and a catalog
/// only accepts handles carrying its own id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectorId(String);

impl ConnectorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConnectorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ConnectorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A table identity: schema name plus table name.
///
/// Names are compared exactly as the source spells them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaTableName {
    schema: String,
    table: String,
}

impl SchemaTableName {
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Parses `schema.table`. Returns `None` unless there is exactly one dot
    /// with non-empty text on both sides.
    pub fn parse(qualified: &str) -> Option<Self> {
        let (schema, table) = qualified.split_once('.')?;
        if schema.is_empty() || table.is_empty() || table.contains('.') {
            return None;
        }
        Some(Self::new(schema, table))
    }
}

impl fmt::Display for SchemaTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.table)
    }
}

/// A partial table identity used to scope listings.
///
/// The empty prefix matches every table, a schema prefix matches every table
/// in that schema, and a full prefix names a single table. A table name
/// without a schema cannot be expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPrefix")]
pub struct SchemaTablePrefix {
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPrefix {
    #[serde(default)]
    schema: Option<String>,
    #[serde(default)]
    table: Option<String>,
}

impl TryFrom<RawPrefix> for SchemaTablePrefix {
    type Error = String;

    fn try_from(raw: RawPrefix) -> Result<Self, Self::Error> {
        match (raw.schema, raw.table) {
            (None, Some(table)) => Err(format!(
                "prefix names table '{table}' without a schema"
            )),
            (schema, table) => Ok(Self { schema, table }),
        }
    }
}

impl SchemaTablePrefix {
    /// Prefix matching every table in every schema.
    pub fn all() -> Self {
        Self::default()
    }

    /// Prefix matching every table in `schema`.
    pub fn schema(schema: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            table: None,
        }
    }

    /// Prefix matching exactly `schema.table`.
    pub fn table(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            table: Some(table.into()),
        }
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn matches(&self, name: &SchemaTableName) -> bool {
        self.schema.as_deref().map_or(true, |s| s == name.schema())
            && self.table.as_deref().map_or(true, |t| t == name.table())
    }
}

impl From<SchemaTableName> for SchemaTablePrefix {
    fn from(name: SchemaTableName) -> Self {
        Self {
            schema: Some(name.schema),
            table: Some(name.table),
        }
    }
}
