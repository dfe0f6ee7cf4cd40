//! In-memory cache for the singleton datasets.
//!
//! Airlines, countries, model types, code blocks, and registration prefixes
//! are small and stable enough to load whole. Each slot populates on first
//! access and is never invalidated; the dataset set is treated as static for
//! the process's lifetime.

use std::path::Path;

use tokio::sync::OnceCell;
use tracing::info;

use super::reader::{list_data_files, read_records};
use super::record::Record;
use crate::constants::{
    AIRLINES_FILE, CODE_BLOCKS_FILE, COUNTRIES_FILE, MODEL_TYPES_DIR, REGISTRATION_PREFIXES_FILE,
};

/// Populate-once slots for the five singleton datasets.
///
/// Slots resolve concurrent first accesses to a single load; later calls
/// return the stored records without touching the filesystem.
#[derive(Debug, Default)]
pub struct ReferenceDataCache {
    airlines: OnceCell<Vec<Record>>,
    countries: OnceCell<Vec<Record>>,
    model_types: OnceCell<Vec<Record>>,
    code_blocks: OnceCell<Vec<Record>>,
    registration_prefixes: OnceCell<Vec<Record>>,
}

impl ReferenceDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn airlines(&self, data_root: &Path) -> &[Record] {
        self.airlines
            .get_or_init(|| load_file(data_root, AIRLINES_FILE, "airlines"))
            .await
    }

    pub async fn countries(&self, data_root: &Path) -> &[Record] {
        self.countries
            .get_or_init(|| load_file(data_root, COUNTRIES_FILE, "countries"))
            .await
    }

    /// Model types are the union of every data file directly under the
    /// model-type directory, concatenated in file-enumeration order.
    pub async fn model_types(&self, data_root: &Path) -> &[Record] {
        self.model_types
            .get_or_init(|| async {
                let dir = data_root.join(MODEL_TYPES_DIR);
                let mut records = Vec::new();
                for file in list_data_files(&dir).await {
                    records.extend(read_records(&file).await);
                }
                info!("Loaded {} model type records", records.len());
                records
            })
            .await
    }

    pub async fn code_blocks(&self, data_root: &Path) -> &[Record] {
        self.code_blocks
            .get_or_init(|| load_file(data_root, CODE_BLOCKS_FILE, "code block"))
            .await
    }

    pub async fn registration_prefixes(&self, data_root: &Path) -> &[Record] {
        self.registration_prefixes
            .get_or_init(|| load_file(data_root, REGISTRATION_PREFIXES_FILE, "registration prefix"))
            .await
    }
}

async fn load_file(data_root: &Path, relative: &str, dataset: &str) -> Vec<Record> {
    let records = read_records(&data_root.join(relative)).await;
    info!("Loaded {} {} records", records.len(), dataset);
    records
}
