//! Data access layer for the standing data service.
//!
//! [`StandingDataStore`] is the single entry point the HTTP layer calls: one
//! operation per dataset, each either serving a cached singleton dataset or
//! running a filtered tree search. Construct one store per data root; tests
//! point isolated instances at fixture directories.

pub mod cache;
pub mod reader;
pub mod record;
pub mod search;

#[cfg(test)]
mod tests;

pub use record::Record;
pub use search::{AircraftFilter, AirportFilter, RouteFilter};

use std::path::{Path, PathBuf};

use self::cache::ReferenceDataCache;
use crate::error::{Result, StandingDataError};

/// Query facade over the standing data directory tree.
///
/// "No rows found" is always a successful empty result. The only surfaced
/// failure is a data root that is not usable at all, which callers must
/// treat as non-retryable without operator intervention.
#[derive(Debug)]
pub struct StandingDataStore {
    data_root: PathBuf,
    cache: ReferenceDataCache,
}

impl StandingDataStore {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            cache: ReferenceDataCache::new(),
        }
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    fn ensure_data_root(&self) -> Result<()> {
        if self.data_root.is_dir() {
            Ok(())
        } else {
            Err(StandingDataError::DataRootUnavailable {
                path: self.data_root.clone(),
            })
        }
    }

    pub async fn airlines(&self) -> Result<&[Record]> {
        self.ensure_data_root()?;
        Ok(self.cache.airlines(&self.data_root).await)
    }

    pub async fn countries(&self) -> Result<&[Record]> {
        self.ensure_data_root()?;
        Ok(self.cache.countries(&self.data_root).await)
    }

    pub async fn model_types(&self) -> Result<&[Record]> {
        self.ensure_data_root()?;
        Ok(self.cache.model_types(&self.data_root).await)
    }

    pub async fn code_blocks(&self) -> Result<&[Record]> {
        self.ensure_data_root()?;
        Ok(self.cache.code_blocks(&self.data_root).await)
    }

    pub async fn registration_prefixes(&self) -> Result<&[Record]> {
        self.ensure_data_root()?;
        Ok(self.cache.registration_prefixes(&self.data_root).await)
    }

    /// Search aircraft records, returning up to `limit` matches.
    ///
    /// `limit` is passed through unclamped; keeping it positive and within
    /// the service ceiling is the caller's contract.
    pub async fn search_aircraft(
        &self,
        filter: &AircraftFilter,
        limit: usize,
    ) -> Result<Vec<Record>> {
        self.ensure_data_root()?;
        Ok(search::search_aircraft(&self.data_root, filter, limit).await)
    }

    /// Search airport records, returning up to `limit` matches.
    pub async fn search_airports(
        &self,
        filter: &AirportFilter,
        limit: usize,
    ) -> Result<Vec<Record>> {
        self.ensure_data_root()?;
        Ok(search::search_airports(&self.data_root, filter, limit).await)
    }

    /// Search route records, returning up to `limit` matches.
    pub async fn search_routes(&self, filter: &RouteFilter, limit: usize) -> Result<Vec<Record>> {
        self.ensure_data_root()?;
        Ok(search::search_routes(&self.data_root, filter, limit).await)
    }
}
