//! Catalog configuration from a config file and command-line flags.

use crate::cli::Args;
use anyhow::{Context, Result};
use tablescope_core::{CatalogConfig, ConfigError, SourceConfig, DEFAULT_SCHEMA};

/// Builds the catalog configuration for this invocation.
///
/// Flags override values from `--config`. At most one of `--catalog`,
/// `--ddl` and `--database-url` may be given, and if none is given the
/// config file must name a source.
pub fn resolve_config(args: &Args) -> Result<CatalogConfig> {
    let file_config = args
        .config
        .as_ref()
        .map(|path| {
            CatalogConfig::from_path(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))
        })
        .transpose()?;

    let mut config = match (source_from_flags(args)?, file_config) {
        (Some(source), Some(mut config)) => {
            config.source = source;
            config
        }
        (Some(source), None) => CatalogConfig::new(source),
        (None, Some(config)) => config,
        (None, None) => return Err(ConfigError::MissingSource.into()),
    };

    match &mut config.source {
        SourceConfig::Ddl {
            dialect,
            default_schema,
            ..
        } => {
            if let Some(flag) = args.dialect {
                *dialect = flag.into();
            }
            if let Some(flag) = &args.default_schema {
                *default_schema = flag.clone();
            }
        }
        other => {
            let mut flags = Vec::new();
            if args.dialect.is_some() {
                flags.push("--dialect");
            }
            if args.default_schema.is_some() {
                flags.push("--default-schema");
            }
            if !flags.is_empty() {
                return Err(ConfigError::DdlOnlyOptions {
                    flags: flags.join(", "),
                    kind: other.kind(),
                }
                .into());
            }
        }
    }

    if let Some(connector_id) = &args.connector_id {
        config.connector_id = connector_id.clone();
    }

    config.validate()?;
    Ok(config)
}

fn source_from_flags(args: &Args) -> Result<Option<SourceConfig>, ConfigError> {
    let mut sources = Vec::new();

    if let Some(path) = &args.catalog {
        sources.push(("--catalog", SourceConfig::Json { path: path.clone() }));
    }
    if let Some(path) = &args.ddl {
        sources.push((
            "--ddl",
            SourceConfig::Ddl {
                path: path.clone(),
                dialect: args.dialect.map(Into::into).unwrap_or_default(),
                default_schema: args
                    .default_schema
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SCHEMA.to_string()),
            },
        ));
    }
    #[cfg(feature = "database-source")]
    if let Some(url) = &args.database_url {
        sources.push(("--database-url", SourceConfig::Database { url: url.clone() }));
    }

    if sources.len() > 1 {
        let flags: Vec<&str> = sources.iter().map(|(flag, _)| *flag).collect();
        return Err(ConfigError::ConflictingSources(flags.join(", ")));
    }

    Ok(sources.pop().map(|(_, source)| source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tablescope_core::{Dialect, DEFAULT_CONNECTOR_ID};

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("tablescope").chain(args.iter().copied()))
    }

    #[test]
    fn test_catalog_flag() {
        let config = resolve_config(&parse(&["--catalog", "c.json", "schemas"])).unwrap();
        assert_eq!(config.connector_id, DEFAULT_CONNECTOR_ID);
        assert_eq!(
            config.source,
            SourceConfig::Json {
                path: PathBuf::from("c.json")
            }
        );
    }

    #[test]
    fn test_ddl_flags() {
        let config = resolve_config(&parse(&[
            "--ddl",
            "s.sql",
            "-d",
            "snowflake",
            "--default-schema",
            "public",
            "schemas",
        ]))
        .unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Ddl {
                path: PathBuf::from("s.sql"),
                dialect: Dialect::Snowflake,
                default_schema: "public".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_source() {
        let err = resolve_config(&parse(&["schemas"])).unwrap_err();
        assert!(err.to_string().contains("No metadata source"));
    }

    #[test]
    fn test_conflicting_sources() {
        let err =
            resolve_config(&parse(&["--catalog", "c.json", "--ddl", "s.sql", "schemas"]))
                .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("--catalog"), "got: {message}");
        assert!(message.contains("--ddl"), "got: {message}");
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tablescope.json");
        std::fs::write(
            &path,
            r#"{"connectorId": "from-file", "source": {"kind": "ddl", "path": "a.sql"}}"#,
        )
        .unwrap();
        let path = path.to_str().unwrap();

        let config = resolve_config(&parse(&["-C", path, "-d", "mysql", "schemas"])).unwrap();
        assert_eq!(config.connector_id, "from-file");
        match &config.source {
            SourceConfig::Ddl { path, dialect, .. } => {
                assert_eq!(path, &PathBuf::from("a.sql"));
                assert_eq!(*dialect, Dialect::Mysql);
            }
            other => panic!("unexpected source: {other:?}"),
        }

        let config = resolve_config(&parse(&[
            "-C",
            path,
            "--catalog",
            "b.json",
            "--connector-id",
            "override",
            "schemas",
        ]))
        .unwrap();
        assert_eq!(config.connector_id, "override");
        assert_eq!(config.source.kind(), "json");
    }

    #[test]
    fn test_ddl_flags_rejected_for_other_sources() {
        let err = resolve_config(&parse(&[
            "--catalog",
            "c.json",
            "-d",
            "mysql",
            "--default-schema",
            "public",
            "schemas",
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "--dialect, --default-schema only apply to DDL sources, not to a json source"
        );
    }

    #[test]
    fn test_ddl_flags_rejected_for_config_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tablescope.json");
        std::fs::write(&path, r#"{"source": {"kind": "json", "path": "c.json"}}"#).unwrap();

        let err = resolve_config(&parse(&[
            "-C",
            path.to_str().unwrap(),
            "--default-schema",
            "public",
            "schemas",
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("--default-schema"), "got: {err}");
    }

    #[test]
    fn test_empty_connector_id_rejected() {
        let err = resolve_config(&parse(&[
            "--catalog",
            "c.json",
            "--connector-id",
            "",
            "schemas",
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("Connector id"));
    }
}
