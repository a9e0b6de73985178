//! Human-readable table output formatting.

use crate::commands::{Report, TableColumns, TableDescription};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fmt::Write;
use tablescope_core::{ColumnMetadata, SchemaTableName};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Format a report as human-readable text with optional colors.
pub fn format_table(report: &Report, use_colors: bool) -> String {
    let colored = use_colors && std::io::stdout().is_terminal();
    let mut out = String::new();

    match report {
        Report::Schemas(schemas) => write_schemas(&mut out, schemas, colored),
        Report::Tables(tables) => write_tables(&mut out, tables, colored),
        Report::Columns(tables) => write_columns(&mut out, tables, colored),
        Report::Describe(description) => write_description(&mut out, description, colored),
    }

    out
}

fn write_heading(out: &mut String, heading: &str, colored: bool) {
    if colored {
        writeln!(out, "{}", heading.bold()).unwrap();
    } else {
        writeln!(out, "{heading}").unwrap();
    }
}

fn write_empty(out: &mut String, message: &str, colored: bool) {
    if colored {
        writeln!(out, "{}", message.dimmed()).unwrap();
    } else {
        writeln!(out, "{message}").unwrap();
    }
}

fn write_schemas(out: &mut String, schemas: &[String], colored: bool) {
    if schemas.is_empty() {
        write_empty(out, "No schemas found.", colored);
        return;
    }

    write_heading(out, &format!("Schemas ({})", schemas.len()), colored);
    let mut builder = Builder::default();
    builder.push_record(["schema"]);
    for schema in schemas {
        builder.push_record([schema.as_str()]);
    }
    writeln!(out, "{}", builder.build().with(Style::psql())).unwrap();
}

fn write_tables(out: &mut String, tables: &[SchemaTableName], colored: bool) {
    if tables.is_empty() {
        write_empty(out, "No tables found.", colored);
        return;
    }

    write_heading(out, &format!("Tables ({})", tables.len()), colored);
    let mut builder = Builder::default();
    builder.push_record(["schema", "table"]);
    for table in tables {
        builder.push_record([table.schema(), table.table()]);
    }
    writeln!(out, "{}", builder.build().with(Style::psql())).unwrap();
}

fn write_columns(out: &mut String, tables: &[TableColumns], colored: bool) {
    if tables.is_empty() {
        write_empty(out, "No tables found.", colored);
        return;
    }

    for (index, entry) in tables.iter().enumerate() {
        if index > 0 {
            writeln!(out).unwrap();
        }
        let heading = entry.table.to_string();
        if colored {
            writeln!(out, "{}", heading.cyan()).unwrap();
        } else {
            writeln!(out, "{heading}").unwrap();
        }
        write_column_rows(out, &entry.columns, colored);
    }
}

fn write_description(out: &mut String, description: &TableDescription, colored: bool) {
    let handle = &description.handle;
    write_heading(
        out,
        &format!("Table {}.{}", handle.schema_name(), handle.table_name()),
        colored,
    );
    writeln!(out, "Connector: {}", handle.connector_id()).unwrap();
    writeln!(out).unwrap();

    let columns: Vec<ColumnMetadata> = description
        .columns
        .iter()
        .map(|column| column.column_metadata().clone())
        .collect();
    write_column_rows(out, &columns, colored);
}

fn write_column_rows(out: &mut String, columns: &[ColumnMetadata], colored: bool) {
    if columns.is_empty() {
        write_empty(out, "No columns found.", colored);
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["#", "column", "type"]);
    for column in columns {
        builder.push_record([
            column.ordinal_position.to_string(),
            column.name.clone(),
            column.data_type.clone(),
        ]);
    }
    writeln!(out, "{}", builder.build().with(Style::psql())).unwrap();
}
