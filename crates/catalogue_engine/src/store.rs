use std::sync::{Arc, PoisonError, RwLock};

use catalogue_core::Catalogue;
use catalogue_logging::{catalogue_info, catalogue_warn};

use crate::{load_catalogue, CatalogueSource, LoadError};

/// Holds the current catalogue; readers take cheap `Arc` snapshots and a
/// reload swaps the whole value at once.
#[derive(Debug, Default)]
pub struct CatalogueStore {
    current: RwLock<Arc<Catalogue>>,
}

impl CatalogueStore {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalogue)),
        }
    }

    /// Initial load; never fails (see [`crate::load_records`]).
    pub fn load(source: &dyn CatalogueSource) -> Self {
        Self::new(load_catalogue(source))
    }

    /// The catalogue as of now. Later swaps do not affect the returned value.
    pub fn snapshot(&self) -> Arc<Catalogue> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Installs `catalogue` and returns the one it replaced.
    pub fn replace(&self, catalogue: Catalogue) -> Arc<Catalogue> {
        let next = Arc::new(catalogue);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Re-reads `source` and swaps in the result.
    ///
    /// Unlike the initial load, a failing source keeps the current catalogue.
    pub fn reload(&self, source: &dyn CatalogueSource) -> Result<Arc<Catalogue>, LoadError> {
        let records = source.read_records().map_err(|err| {
            catalogue_warn!("Reload from {} failed, keeping current catalogue: {err}", source.describe());
            err
        })?;
        let catalogue = Arc::new(Catalogue::new(records));
        {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *guard = Arc::clone(&catalogue);
        }
        catalogue_info!(
            "Reloaded catalogue from {}: {} records, {} categories",
            source.describe(),
            catalogue.records().len(),
            catalogue.entries().len()
        );
        Ok(catalogue)
    }
}
