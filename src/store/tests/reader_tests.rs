//! Tests for the tabular file reader

use tempfile::TempDir;

use super::write_dataset_file;
use crate::store::reader::{list_data_files, read_records};

#[tokio::test]
async fn test_reads_rows_in_file_order() {
    let dir = TempDir::new().unwrap();
    write_dataset_file(
        dir.path(),
        "countries.csv",
        "ISO,Name\nUS,United States\nGB,United Kingdom\n",
    );

    let records = read_records(&dir.path().join("countries.csv")).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].value("ISO"), Some("US"));
    assert_eq!(records[0].value("Name"), Some("United States"));
    assert_eq!(records[1].value("ISO"), Some("GB"));
}

#[tokio::test]
async fn test_missing_file_is_empty_not_an_error() {
    let dir = TempDir::new().unwrap();
    let records = read_records(&dir.path().join("absent.csv")).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_strips_leading_byte_order_mark() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bom.csv");
    std::fs::write(&path, b"\xef\xbb\xbfISO,Name\nUS,United States\n").unwrap();

    let records = read_records(&path).await;

    assert_eq!(records.len(), 1);
    // Without BOM stripping the first column would be "\u{feff}ISO"
    assert_eq!(records[0].value("ISO"), Some("US"));
}

#[tokio::test]
async fn test_undecodable_file_is_logged_and_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, b"ISO,Name\n\xff\xfe\x00broken\n").unwrap();

    let records = read_records(&path).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_ragged_rows_are_tolerated() {
    let dir = TempDir::new().unwrap();
    write_dataset_file(
        dir.path(),
        "ragged.csv",
        "ISO,Name\nUS,United States,surplus\nGB\n",
    );

    let records = read_records(&dir.path().join("ragged.csv")).await;

    assert_eq!(records.len(), 2);
    // Surplus values beyond the header are dropped
    assert_eq!(records[0].len(), 2);
    // A short row simply lacks its trailing columns
    assert_eq!(records[1].value("ISO"), Some("GB"));
    assert_eq!(records[1].value("Name"), None);
}

#[tokio::test]
async fn test_list_data_files_filters_by_extension() {
    let dir = TempDir::new().unwrap();
    write_dataset_file(dir.path(), "a.csv", "X\n1\n");
    write_dataset_file(dir.path(), "b.csv", "X\n2\n");
    write_dataset_file(dir.path(), "notes.txt", "ignored");

    let files = list_data_files(dir.path()).await;

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap() == "csv"));
}

#[tokio::test]
async fn test_list_data_files_missing_directory_is_empty() {
    let dir = TempDir::new().unwrap();
    let files = list_data_files(&dir.path().join("nope")).await;
    assert!(files.is_empty());
}
