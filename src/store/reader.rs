//! Tabular file reader for dataset CSV files.
//!
//! Loading failures are never fatal: a dataset is spread over many files,
//! and one corrupt file must not fail a whole query. A missing file is an
//! empty result; an unreadable or unparseable file is logged and becomes an
//! empty result.

use std::path::Path;

use tokio::fs;
use tracing::{debug, warn};

use super::record::Record;
use crate::constants::{DATA_FILE_EXTENSION, UTF8_BOM};

/// Read one CSV file into records, the first row naming the columns.
///
/// Rows keep their file order. Rows wider than the header lose the surplus
/// values; narrower rows simply lack the trailing columns. A leading UTF-8
/// byte-order mark is stripped before parsing.
pub async fn read_records(path: &Path) -> Vec<Record> {
    let raw = match fs::read(path).await {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!("Dataset file not present: {}", path.display());
            return Vec::new();
        }
        Err(error) => {
            warn!("Failed to read {}: {}", path.display(), error);
            return Vec::new();
        }
    };

    let body = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw);
    match parse_records(body) {
        Ok(records) => records,
        Err(error) => {
            warn!("Failed to parse {}: {}", path.display(), error);
            Vec::new()
        }
    }
}

/// List the dataset files directly under `dir`, in directory-enumeration
/// order. A missing or unreadable directory contributes no files.
pub(crate) async fn list_data_files(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();

    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(error) => {
            if error.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to list {}: {}", dir.display(), error);
            }
            return files;
        }
    };

    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let path = entry.path();
                if is_data_file(&path) {
                    files.push(path);
                }
            }
            Ok(None) => break,
            Err(error) => {
                warn!("Failed to list {}: {}", dir.display(), error);
                break;
            }
        }
    }

    files
}

/// Check if a path is a dataset CSV file
fn is_data_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == DATA_FILE_EXTENSION)
}

/// Parse CSV bytes into records. Any error drops the whole file.
fn parse_records(body: &[u8]) -> csv::Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(body);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        records.push(
            headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        );
    }

    Ok(records)
}
