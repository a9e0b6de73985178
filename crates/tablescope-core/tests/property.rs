use proptest::collection::{btree_map, btree_set, vec};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use tablescope_core::{
    InMemorySource, MetadataCatalog, SchemaTableName, SchemaTablePrefix, SourceColumn,
    SourceTable,
};

type Layout = BTreeMap<String, BTreeSet<String>>;

fn layout() -> impl Strategy<Value = Layout> {
    btree_map("[a-z]{1,6}", btree_set("[a-z]{1,6}", 0..5), 0..5)
}

fn build(layout: &Layout, columns: &[String]) -> InMemorySource {
    let mut source = InMemorySource::new();
    for (schema, tables) in layout {
        source = source.with_schema(schema.clone());
        for table in tables {
            let cols = columns
                .iter()
                .map(|name| SourceColumn::new(name.clone(), "varchar"))
                .collect();
            source = source.with_table(schema.clone(), SourceTable::new(table.clone(), cols));
        }
    }
    source
}

proptest! {
    #[test]
    fn unfiltered_listing_is_union_of_schema_listings(layout in layout()) {
        let catalog = MetadataCatalog::new("prop", build(&layout, &[]));

        let all: Vec<SchemaTableName> = catalog.list_tables(None).unwrap();
        let mut union = Vec::new();
        for schema in catalog.list_schema_names().unwrap() {
            union.extend(catalog.list_tables(Some(&schema)).unwrap());
        }

        prop_assert_eq!(&all, &union);
        let distinct: BTreeSet<_> = all.iter().collect();
        prop_assert_eq!(distinct.len(), all.len());
        let expected: usize = layout.values().map(BTreeSet::len).sum();
        prop_assert_eq!(all.len(), expected);
    }

    #[test]
    fn unknown_schema_never_resolves(layout in layout(), schema in "[A-Z]{1,6}", table in "[a-z]{1,6}") {
        // Generated schemas are lowercase, so an uppercase name is never listed.
        let catalog = MetadataCatalog::new("prop", build(&layout, &[]));
        let name = SchemaTableName::new(schema, table);
        prop_assert!(catalog.get_table_handle(&name).unwrap().is_none());
    }

    #[test]
    fn every_listed_table_resolves_with_its_columns(
        layout in layout(),
        columns in btree_set("[a-z]{1,6}", 1..6),
    ) {
        let columns: Vec<String> = columns.into_iter().collect();
        let catalog = MetadataCatalog::new("prop", build(&layout, &columns));

        for name in catalog.list_tables(None).unwrap() {
            let handle = catalog.get_table_handle(&name).unwrap();
            prop_assert!(handle.is_some());
            let metadata = catalog.get_table_metadata(&handle.unwrap()).unwrap();
            prop_assert_eq!(&metadata.table, &name);
            let names: Vec<&str> = metadata.column_names().collect();
            prop_assert_eq!(names, columns.iter().map(String::as_str).collect::<Vec<_>>());
        }

        let listed = catalog.list_table_columns(&SchemaTablePrefix::all()).unwrap();
        prop_assert_eq!(listed.len(), catalog.list_tables(None).unwrap().len());
    }

    #[test]
    fn column_lookup_agrees_with_bulk_lookup(
        columns in btree_set("[a-z]{1,6}", 1..6),
        probes in vec("[a-z]{1,6}", 1..8),
    ) {
        let columns: Vec<String> = columns.into_iter().collect();
        let layout = Layout::from([("s".to_string(), BTreeSet::from(["t".to_string()]))]);
        let catalog = MetadataCatalog::new("prop", build(&layout, &columns));
        let handle = catalog
            .get_table_handle(&SchemaTableName::new("s", "t"))
            .unwrap()
            .unwrap();

        let bulk = catalog.get_column_handles(&handle).unwrap();
        for probe in probes.iter().chain(columns.iter()) {
            let single = catalog.get_column_handle(&handle, probe).unwrap();
            prop_assert_eq!(single.as_ref(), bulk.get(probe.as_str()));
        }
    }
}
