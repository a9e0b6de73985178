use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use tablescope_core::{
    InMemorySource, SourceColumn, SourceError, SourceTable, TableCatalogSource,
};

/// Wraps an [`InMemorySource`] and counts calls per method.
#[derive(Debug, Default)]
pub struct CountingSource {
    pub inner: InMemorySource,
    pub schema_calls: AtomicUsize,
    pub table_name_calls: AtomicUsize,
    pub table_calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(inner: InMemorySource) -> Self {
        Self {
            inner,
            ..Default::default()
        }
    }

    pub fn table_name_calls(&self) -> usize {
        self.table_name_calls.load(Ordering::SeqCst)
    }

    pub fn table_calls(&self) -> usize {
        self.table_calls.load(Ordering::SeqCst)
    }
}

impl TableCatalogSource for CountingSource {
    fn schema_names(&self) -> Result<BTreeSet<String>, SourceError> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.schema_names()
    }

    fn table_names(&self, schema: &str) -> Result<Vec<String>, SourceError> {
        self.table_name_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.table_names(schema)
    }

    fn table(&self, schema: &str, table: &str) -> Result<Option<SourceTable>, SourceError> {
        self.table_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.table(schema, table)
    }
}

/// Lists a table that [`TableCatalogSource::table`] no longer returns,
/// as if it were dropped between the two calls.
#[derive(Debug)]
pub struct VanishingSource {
    pub inner: InMemorySource,
    pub ghost_schema: String,
    pub ghost_table: String,
}

impl TableCatalogSource for VanishingSource {
    fn schema_names(&self) -> Result<BTreeSet<String>, SourceError> {
        let mut names = self.inner.schema_names()?;
        names.insert(self.ghost_schema.clone());
        Ok(names)
    }

    fn table_names(&self, schema: &str) -> Result<Vec<String>, SourceError> {
        let mut names = self.inner.table_names(schema)?;
        if schema == self.ghost_schema {
            names.push(self.ghost_table.clone());
        }
        Ok(names)
    }

    fn table(&self, schema: &str, table: &str) -> Result<Option<SourceTable>, SourceError> {
        self.inner.table(schema, table)
    }
}

/// A source whose every call fails.
#[derive(Debug)]
pub struct UnreachableSource;

impl TableCatalogSource for UnreachableSource {
    fn schema_names(&self) -> Result<BTreeSet<String>, SourceError> {
        Err(SourceError::backend("connection refused"))
    }

    fn table_names(&self, _schema: &str) -> Result<Vec<String>, SourceError> {
        Err(SourceError::backend("connection refused"))
    }

    fn table(&self, _schema: &str, _table: &str) -> Result<Option<SourceTable>, SourceError> {
        Err(SourceError::backend("connection refused"))
    }
}

/// `default.orders(id int, total double)` plus `default.customers` and
/// `archive.orders_2019`.
pub fn sample_source() -> InMemorySource {
    InMemorySource::new()
        .with_table(
            "default",
            SourceTable::new(
                "orders",
                vec![
                    SourceColumn::new("id", "int"),
                    SourceColumn::new("total", "double"),
                ],
            ),
        )
        .with_table(
            "default",
            SourceTable::new(
                "customers",
                vec![
                    SourceColumn::new("id", "int"),
                    SourceColumn::new("name", "varchar"),
                    SourceColumn::new("email", "varchar"),
                ],
            ),
        )
        .with_table(
            "archive",
            SourceTable::new("orders_2019", vec![SourceColumn::new("id", "int")]),
        )
}
