//! Application constants for the standing data service
//!
//! Dataset storage layout, traversal caps, and result limit defaults
//! used throughout the service.

// =============================================================================
// Dataset Storage Layout
// =============================================================================

/// Singleton dataset files, relative to the data root
pub const AIRLINES_FILE: &str = "airlines/schema-01/airlines.csv";
pub const COUNTRIES_FILE: &str = "countries/schema-01/countries.csv";
pub const CODE_BLOCKS_FILE: &str = "code-blocks/schema-01/code-blocks.csv";
pub const REGISTRATION_PREFIXES_FILE: &str = "registration-prefixes/schema-01/reg-prefixes.csv";

/// Model types are split across several files directly under this directory;
/// the loaded dataset is the concatenation of all of them.
pub const MODEL_TYPES_DIR: &str = "model-type/schema-01";

/// Roots of the tree-searched datasets, relative to the data root.
///
/// Aircraft data uses a two-tier partition layout
/// (`aircraft/schema-01/<partition>/<partition>/*.csv`); airports and routes
/// keep their files one level down (`airports/schema-01/<partition>/*.csv`).
pub const AIRCRAFT_ROOT: &str = "aircraft/schema-01";
pub const AIRPORTS_ROOT: &str = "airports/schema-01";
pub const ROUTES_ROOT: &str = "routes/schema-01";

/// File extension of every dataset file
pub const DATA_FILE_EXTENSION: &str = "csv";

/// UTF-8 byte-order mark, stripped from the front of dataset files if present
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

// =============================================================================
// Traversal Caps
// =============================================================================

/// Maximum number of top-level aircraft partitions scanned per search.
///
/// The aircraft tree has far more partitions than any single query needs;
/// bounding the scan keeps worst-case cost predictable at the expense of
/// completeness beyond the cap. Airports carry no such cap.
pub const AIRCRAFT_PARTITION_SCAN_CAP: usize = 50;

/// Maximum number of top-level route partitions scanned per search.
pub const ROUTES_PARTITION_SCAN_CAP: usize = 10;

// =============================================================================
// Result Limits
// =============================================================================

/// Result limit applied when a query does not specify one
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

/// Hard ceiling on the result limit, enforced at the HTTP boundary
pub const MAX_SEARCH_LIMIT: usize = 1000;
