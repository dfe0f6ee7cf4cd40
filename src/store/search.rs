//! On-demand search over the tree-structured datasets.
//!
//! Aircraft, airport, and route data are too large to hold resident, so each
//! query walks the dataset's partition directories and loads candidate files
//! one at a time. Traversal stops at every nesting level (partitions, files,
//! rows) the instant the result limit is reached; without that short-circuit
//! the partition caps would not bound scan cost.
//!
//! Result order is the enumeration order of the underlying directory
//! listings, which is implementation-defined. A missing dataset root, an
//! unreadable partition, or a bad file each contribute zero records rather
//! than failing the search.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use super::reader::{list_data_files, read_records};
use super::record::Record;
use crate::constants::{
    AIRCRAFT_PARTITION_SCAN_CAP, AIRCRAFT_ROOT, AIRPORTS_ROOT, ROUTES_PARTITION_SCAN_CAP,
    ROUTES_ROOT,
};

/// Per-record predicate built from a query's optional filter fields.
pub trait RecordFilter {
    /// Whether the record satisfies every present filter field.
    fn matches(&self, record: &Record) -> bool;
}

/// Filter fields for aircraft searches. Absent or empty fields impose no
/// constraint.
#[derive(Debug, Clone, Default)]
pub struct AircraftFilter {
    pub icao: Option<String>,
    pub registration: Option<String>,
    pub operator: Option<String>,
}

impl RecordFilter for AircraftFilter {
    fn matches(&self, record: &Record) -> bool {
        constraint(&self.icao, record, "ICAO")
            && constraint(&self.registration, record, "Registration")
            && constraint(&self.operator, record, "Operator")
    }
}

/// Filter fields for airport searches.
///
/// `code` is the any-code filter: it matches when the pattern is a substring
/// of the Code, ICAO, or IATA column. The dedicated `icao` and `iata` fields
/// each constrain only their own column.
#[derive(Debug, Clone, Default)]
pub struct AirportFilter {
    pub code: Option<String>,
    pub icao: Option<String>,
    pub iata: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
}

impl RecordFilter for AirportFilter {
    fn matches(&self, record: &Record) -> bool {
        let any_code = match pattern(&self.code) {
            Some(code) => {
                record.column_contains("Code", code)
                    || record.column_contains("ICAO", code)
                    || record.column_contains("IATA", code)
            }
            None => true,
        };

        any_code
            && constraint(&self.icao, record, "ICAO")
            && constraint(&self.iata, record, "IATA")
            && constraint(&self.name, record, "Name")
            && constraint(&self.country, record, "CountryISO2")
    }
}

/// Filter fields for route searches.
///
/// `code` and `airline_code` are independent constraints against different
/// columns, ANDed together like every other pair of fields.
#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    pub callsign: Option<String>,
    pub code: Option<String>,
    pub airline_code: Option<String>,
}

impl RecordFilter for RouteFilter {
    fn matches(&self, record: &Record) -> bool {
        constraint(&self.callsign, record, "Callsign")
            && constraint(&self.code, record, "Code")
            && constraint(&self.airline_code, record, "AirlineCode")
    }
}

/// A filter field with no value, or an empty one, is not a constraint.
fn pattern(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn constraint(field: &Option<String>, record: &Record, column: &str) -> bool {
    match pattern(field) {
        Some(value) => record.column_contains(column, value),
        None => true,
    }
}

/// Result accumulator with the limit baked in.
///
/// Every traversal loop checks `is_full` before descending or appending, so
/// the stop condition is written once rather than per nesting level.
struct SearchAccumulator {
    records: Vec<Record>,
    limit: usize,
}

impl SearchAccumulator {
    fn new(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.records.len() >= self.limit
    }

    fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Search the two-tier aircraft tree.
///
/// Only the first [`AIRCRAFT_PARTITION_SCAN_CAP`] top-level partitions are
/// scanned; every second-level partition under them is.
pub async fn search_aircraft(
    data_root: &Path,
    filter: &AircraftFilter,
    limit: usize,
) -> Vec<Record> {
    let root = data_root.join(AIRCRAFT_ROOT);
    let partitions = list_subdirectories(&root, Some(AIRCRAFT_PARTITION_SCAN_CAP)).await;

    let mut accumulator = SearchAccumulator::new(limit);
    'partitions: for partition in partitions {
        if accumulator.is_full() {
            break;
        }
        for shard in list_subdirectories(&partition, None).await {
            if accumulator.is_full() {
                break 'partitions;
            }
            scan_directory(&shard, filter, &mut accumulator).await;
        }
    }

    let records = accumulator.into_records();
    debug!("Aircraft search matched {} records", records.len());
    records
}

/// Search the airport tree. Partition enumeration is uncapped.
pub async fn search_airports(
    data_root: &Path,
    filter: &AirportFilter,
    limit: usize,
) -> Vec<Record> {
    let root = data_root.join(AIRPORTS_ROOT);
    let records = search_partitions(&root, None, filter, limit).await;
    debug!("Airport search matched {} records", records.len());
    records
}

/// Search the route tree, scanning at most
/// [`ROUTES_PARTITION_SCAN_CAP`] partitions.
pub async fn search_routes(data_root: &Path, filter: &RouteFilter, limit: usize) -> Vec<Record> {
    let root = data_root.join(ROUTES_ROOT);
    let records = search_partitions(&root, Some(ROUTES_PARTITION_SCAN_CAP), filter, limit).await;
    debug!("Route search matched {} records", records.len());
    records
}

/// One-tier traversal shared by the airport and route searches.
async fn search_partitions<F: RecordFilter>(
    root: &Path,
    partition_cap: Option<usize>,
    filter: &F,
    limit: usize,
) -> Vec<Record> {
    let mut accumulator = SearchAccumulator::new(limit);
    for partition in list_subdirectories(root, partition_cap).await {
        if accumulator.is_full() {
            break;
        }
        scan_directory(&partition, filter, &mut accumulator).await;
    }
    accumulator.into_records()
}

/// Load each data file in `dir` and accumulate matching records, stopping as
/// soon as the accumulator fills.
async fn scan_directory<F: RecordFilter>(
    dir: &Path,
    filter: &F,
    accumulator: &mut SearchAccumulator,
) {
    for file in list_data_files(dir).await {
        if accumulator.is_full() {
            return;
        }
        for record in read_records(&file).await {
            if accumulator.is_full() {
                return;
            }
            if filter.matches(&record) {
                accumulator.push(record);
            }
        }
    }
}

/// List the subdirectories of `dir` in enumeration order, stopping at `cap`
/// entries when one is given. A missing or unreadable directory yields
/// nothing.
async fn list_subdirectories(dir: &Path, cap: Option<usize>) -> Vec<PathBuf> {
    let mut subdirectories = Vec::new();

    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(error) => {
            if error.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to list {}: {}", dir.display(), error);
            }
            return subdirectories;
        }
    };

    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let is_directory = entry
                    .file_type()
                    .await
                    .map(|file_type| file_type.is_dir())
                    .unwrap_or(false);
                if is_directory {
                    subdirectories.push(entry.path());
                    if cap.is_some_and(|cap| subdirectories.len() >= cap) {
                        break;
                    }
                }
            }
            Ok(None) => break,
            Err(error) => {
                warn!("Failed to list {}: {}", dir.display(), error);
                break;
            }
        }
    }

    subdirectories
}
