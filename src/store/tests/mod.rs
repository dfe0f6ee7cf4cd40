//! Tests for the data access layer.

mod cache_tests;
mod reader_tests;

use std::fs;
use std::path::Path;

/// Write one dataset file under `root`, creating parent directories.
pub fn write_dataset_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}
