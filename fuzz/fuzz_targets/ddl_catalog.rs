#![no_main]

use libfuzzer_sys::fuzz_target;
use tablescope_core::{DdlCatalogSource, Dialect, MetadataCatalog, SchemaTablePrefix, DEFAULT_SCHEMA};

fuzz_target!(|data: &[u8]| {
    if let Ok(sql) = std::str::from_utf8(data) {
        if let Ok(source) = DdlCatalogSource::from_sql(sql, Dialect::Generic, DEFAULT_SCHEMA) {
            let catalog = MetadataCatalog::new("fuzz", source);
            let _ = catalog.list_table_columns(&SchemaTablePrefix::all());
        }
    }
});
