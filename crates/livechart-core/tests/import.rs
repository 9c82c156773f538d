// File: crates/livechart-core/tests/import.rs
// Purpose: CSV import, column classification and the table summary.

use std::path::PathBuf;

use livechart_core::import::read_csv;
use livechart_core::{import_table, Column, ImportError};

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("import");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn imports_columns_in_header_order() {
    let path = write_fixture("two.csv", "a,b\n1,4\n2,5\n3,6\n");
    let table = import_table(&path).expect("import");
    assert_eq!(table.column_names(), vec!["a", "b"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column("a").unwrap().to_f64(), Some(vec![1.0, 2.0, 3.0]));
}

#[test]
fn extension_is_case_insensitive() {
    let path = write_fixture("UPPER.CSV", "x\n1\n");
    assert!(import_table(&path).is_ok());
}

#[test]
fn rejects_other_extensions() {
    let path = write_fixture("data.txt", "a\n1\n");
    let err = import_table(&path).unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedExtension { ref extension } if extension == "txt"));

    let err = import_table("no_extension").unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedExtension { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let err = import_table("definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, ImportError::Io { .. }));
}

#[test]
fn ragged_rows_are_malformed() {
    let err = read_csv("a,b\n1,2\n3\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ImportError::Csv(_)));
}

#[test]
fn duplicate_headers_are_malformed() {
    let err = read_csv("a,a\n1,2\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ImportError::Malformed(_)));
}

#[test]
fn classifies_numeric_and_categorical() {
    let table = read_csv("n,label,sparse\n1,red,\n2,blue,7\n3,red,\n".as_bytes()).unwrap();
    assert_eq!(table.numeric_columns(), vec!["n", "sparse"]);
    assert_eq!(table.categorical_columns(), vec!["label"]);
    assert_eq!(table.column("sparse"), Some(&Column::Numeric(vec![None, Some(7.0), None])));
    assert_eq!(
        table.value_counts("label"),
        Some(vec![("red".to_string(), 2), ("blue".to_string(), 1)])
    );
}

#[test]
fn describe_matches_pandas_conventions() {
    let table = read_csv("v\n1\n2\n3\n4\n".as_bytes()).unwrap();
    let d = table.describe("v").expect("numeric");
    assert_eq!(d.count, 4);
    assert_eq!(d.mean, 2.5);
    assert!((d.std - 1.2909944487358056).abs() < 1e-12);
    assert_eq!(d.q25, 1.75);
    assert_eq!(d.median, 2.5);
    assert_eq!(d.q75, 3.25);

    let summary = table.summary();
    assert!(summary.starts_with("4 rows x 1 columns"));
    assert!(summary.contains("[numeric] v: count=4"));
}
