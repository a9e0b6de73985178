//! Opening the metadata source a configuration selects.

use anyhow::{Context, Result};
use tablescope_core::{
    CatalogConfig, DdlCatalogSource, JsonCatalogSource, MetadataCatalog, SourceConfig,
    TableCatalogSource,
};
use tracing::info;

/// A catalog over whichever source the configuration selected.
pub type DynCatalog = MetadataCatalog<Box<dyn TableCatalogSource>>;

/// Open the configured source and wrap it in a catalog.
pub fn open_catalog(config: &CatalogConfig) -> Result<DynCatalog> {
    let source = open_source(&config.source)?;
    info!(
        connector_id = %config.connector_id,
        source = config.source.kind(),
        "opened metadata source"
    );
    Ok(MetadataCatalog::new(config.connector_id.as_str(), source))
}

/// Open the source described by `config`.
pub fn open_source(config: &SourceConfig) -> Result<Box<dyn TableCatalogSource>> {
    match config {
        SourceConfig::Json { path } => {
            let source = JsonCatalogSource::from_path(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
            Ok(Box::new(source))
        }
        SourceConfig::Ddl {
            path,
            dialect,
            default_schema,
        } => {
            let source = DdlCatalogSource::from_path(path, *dialect, default_schema)
                .with_context(|| format!("Failed to load DDL catalog: {}", path.display()))?;
            Ok(Box::new(source))
        }
        #[cfg(feature = "database-source")]
        SourceConfig::Database { url } => {
            let source = crate::database::SqlxSource::connect(url)?;
            Ok(Box::new(source))
        }
        #[cfg(not(feature = "database-source"))]
        SourceConfig::Database { .. } => anyhow::bail!(
            "Database sources are not supported by this build (enable the `database-source` feature)"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tablescope_core::Dialect;

    #[test]
    fn test_open_json_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"default": [{"name": "orders", "columns": [{"name": "id", "type": "int"}]}]}"#,
        )
        .unwrap();

        let mut config = CatalogConfig::new(SourceConfig::Json { path });
        config.connector_id = "example".to_string();

        let catalog = open_catalog(&config).unwrap();
        assert_eq!(catalog.connector_id().as_str(), "example");
        assert_eq!(catalog.list_tables(None).unwrap().len(), 1);
    }

    #[test]
    fn test_open_ddl_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.sql");
        std::fs::write(&path, "CREATE TABLE public.users (id INT, name TEXT);").unwrap();

        let source = open_source(&SourceConfig::Ddl {
            path,
            dialect: Dialect::Postgres,
            default_schema: "default".to_string(),
        })
        .unwrap();
        assert_eq!(source.table_names("public").unwrap(), vec!["users"]);
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let err = open_source(&SourceConfig::Json {
            path: PathBuf::from("/no/such/catalog.json"),
        })
        .err()
        .expect("missing file");
        assert!(format!("{err:#}").contains("/no/such/catalog.json"));
    }
}
