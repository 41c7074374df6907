//! Model loader tests

use model_audit_sdk::audit_path;
use model_audit_sdk::config::AuditConfig;
use model_audit_sdk::model::{LoadError, ModelLoader};
use model_audit_sdk::models::Relationship;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::FileOptions;

const SCHEMA: &str = r#"{
    "name": "SemanticModel",
    "model": {
        "tables": [
            {
                "name": "Sales",
                "columns": [
                    {"name": "Amount", "description": "Net amount"},
                    {"name": "CustomerKey"}
                ],
                "measures": [
                    {"name": "Total", "expression": ["SUM(", "Sales[Amount])"], "description": "Sum"}
                ]
            },
            {
                "name": "Customer",
                "columns": [{"name": "CustomerKey"}]
            }
        ],
        "relationships": [
            {"fromTable": "Sales", "fromColumn": "CustomerKey", "toTable": "Customer", "toColumn": "CustomerKey"},
            {"fromTable": "Sales", "fromColumn": "Missing", "toTable": "Customer", "toColumn": "CustomerKey"}
        ]
    }
}"#;

fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

fn archive_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, FileOptions::default()).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

mod archive_tests {
    use super::*;

    #[test]
    fn test_load_template_archive() {
        let schema = utf16le_with_bom(SCHEMA);
        let bytes = archive_with(&[
            ("Version", b"1.28".as_slice()),
            ("DataModelSchema", schema.as_slice()),
        ]);

        let result = ModelLoader::default()
            .load_archive(Cursor::new(bytes))
            .unwrap();

        let model = &result.model;
        assert_eq!(model.tables.len(), 2);
        assert_eq!(model.tables[0].name, "Sales");
        assert_eq!(model.tables[0].columns.len(), 2);
        assert_eq!(
            model.tables[0].measures[0].expression,
            "SUM(\nSales[Amount])"
        );
        assert_eq!(model.relationships.len(), 2);
    }

    #[test]
    fn test_dangling_relationships_are_reported_and_kept() {
        let bytes = archive_with(&[("DataModelSchema", SCHEMA.as_bytes())]);
        let result = ModelLoader::default()
            .load_archive(Cursor::new(bytes))
            .unwrap();

        assert_eq!(
            result.dangling_relationships,
            vec![Relationship::new("Sales", "Missing", "Customer", "CustomerKey")]
        );
        assert_eq!(result.model.relationships.len(), 2);
    }

    #[test]
    fn test_missing_entry() {
        let bytes = archive_with(&[("Version", b"1.28".as_slice())]);
        let err = ModelLoader::default()
            .load_archive(Cursor::new(bytes))
            .unwrap_err();
        assert!(matches!(err, LoadError::EntryNotFound { entry } if entry == "DataModelSchema"));
    }

    #[test]
    fn test_custom_entry_name() {
        let bytes = archive_with(&[("Model.json", SCHEMA.as_bytes())]);
        let config = AuditConfig::builder().schema_entry("Model.json").build();
        let result = ModelLoader::new(config)
            .load_archive(Cursor::new(bytes))
            .unwrap();
        assert_eq!(result.model.tables.len(), 2);
    }

    #[test]
    fn test_not_an_archive() {
        let err = ModelLoader::default()
            .load_archive(Cursor::new(b"definitely not a zip".to_vec()))
            .unwrap_err();
        assert!(matches!(err, LoadError::NotAnArchive(_)));
    }

    #[test]
    fn test_entry_too_large() {
        let bytes = archive_with(&[("DataModelSchema", SCHEMA.as_bytes())]);
        let config = AuditConfig::builder().max_document_bytes(16).build();
        let err = ModelLoader::new(config)
            .load_archive(Cursor::new(bytes))
            .unwrap_err();
        assert!(matches!(err, LoadError::EntryTooLarge { limit: 16, .. }));
    }

    #[test]
    fn test_invalid_json_entry() {
        let bytes = archive_with(&[("DataModelSchema", b"{\"model\": ".as_slice())]);
        let err = ModelLoader::default()
            .load_archive(Cursor::new(bytes))
            .unwrap_err();
        assert!(matches!(err, LoadError::JsonParse(_)));
    }
}

mod path_tests {
    use super::*;

    #[test]
    fn test_load_path_sniffs_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pbit");
        let schema = utf16le_with_bom(SCHEMA);
        std::fs::write(&path, archive_with(&[("DataModelSchema", schema.as_slice())])).unwrap();

        let result = ModelLoader::default().load_path(&path).unwrap();
        assert_eq!(result.model.tables.len(), 2);
    }

    #[test]
    fn test_load_path_plain_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DataModelSchema");
        std::fs::write(&path, SCHEMA).unwrap();

        let result = ModelLoader::default().load_path(&path).unwrap();
        assert_eq!(result.model.tables[1].name, "Customer");
    }

    #[test]
    fn test_load_path_empty_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "{}").unwrap();

        let result = ModelLoader::default().load_path(&path).unwrap();
        assert!(result.model.tables.is_empty());
        assert!(result.model.relationships.is_empty());
        assert!(result.dangling_relationships.is_empty());
    }

    #[test]
    fn test_load_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelLoader::default()
            .load_path(&dir.path().join("nope.pbit"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_path_document_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.json");
        std::fs::write(&path, SCHEMA).unwrap();

        let config = AuditConfig::builder().max_document_bytes(8).build();
        let err = ModelLoader::new(config).load_path(&path).unwrap_err();
        match err {
            LoadError::EntryTooLarge { entry, size, .. } => {
                assert_eq!(size, 9);
                assert_eq!(entry, path.display().to_string());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_audit_path_loads_and_audits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pbit");
        std::fs::write(&path, archive_with(&[("DataModelSchema", SCHEMA.as_bytes())])).unwrap();

        let (loaded, report) = audit_path(&path, &AuditConfig::default()).unwrap();
        assert_eq!(loaded.dangling_relationships.len(), 1);
        assert_eq!(report.ranking.len(), 2);
        assert!(report.orphan_tables.is_empty());
    }
}

mod absent_name_tests {
    use super::*;

    const NAMELESS: &str = r#"{
        "model": {
            "tables": [
                {"name": "Sales", "columns": [{"name": "Amount"}]},
                {"columns": [{"description": "no name"}]}
            ],
            "relationships": [{"fromTable": "Sales", "fromColumn": "Amount"}]
        }
    }"#;

    #[test]
    fn test_missing_endpoint_never_matches_nameless_items() {
        let bytes = archive_with(&[("DataModelSchema", NAMELESS.as_bytes())]);
        let loaded = ModelLoader::default()
            .load_archive(Cursor::new(bytes))
            .unwrap();

        let rel = &loaded.model.relationships[0];
        assert_eq!(rel.to_key(), None);
        assert_eq!(loaded.dangling_relationships.len(), 1);

        let report = model_audit_sdk::audit_model(&loaded.model);
        let orphans: Vec<&str> = report.orphan_tables.iter().map(|o| o.table.as_str()).collect();
        assert_eq!(orphans, vec![""]);
        let unused: Vec<(&str, &str)> = report
            .unused_columns
            .iter()
            .map(|u| (u.table.as_str(), u.column.as_str()))
            .collect();
        assert_eq!(unused, vec![("", "")]);
    }
}
