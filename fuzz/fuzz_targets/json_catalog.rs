#![no_main]

use libfuzzer_sys::fuzz_target;
use tablescope_core::{JsonCatalogSource, MetadataCatalog, SchemaTablePrefix};

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        if let Ok(source) = JsonCatalogSource::from_json(json) {
            let catalog = MetadataCatalog::new("fuzz", source);
            let _ = catalog.list_table_columns(&SchemaTablePrefix::all());
        }
    }
});
