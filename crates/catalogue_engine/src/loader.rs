use catalogue_core::{Catalogue, ProductRecord};
use catalogue_logging::{catalogue_error, catalogue_info, catalogue_warn};

use crate::{CatalogueSource, LoadError};

/// Reads every record from `source`, recovering from any failure with an
/// empty list so the site can still render its home page.
pub fn load_records(source: &dyn CatalogueSource) -> Vec<ProductRecord> {
    let origin = source.describe();
    catalogue_info!("Loading catalogue from {origin}");
    match source.read_records() {
        Ok(records) => {
            catalogue_info!("Loaded {} catalogue records from {origin}", records.len());
            records
        }
        Err(err @ LoadError::Open { .. }) => {
            catalogue_warn!("{err}; continuing with an empty catalogue");
            Vec::new()
        }
        Err(err) => {
            catalogue_error!("Failed to load catalogue from {origin}: {err}; continuing with an empty catalogue");
            Vec::new()
        }
    }
}

/// [`load_records`] followed by index construction.
pub fn load_catalogue(source: &dyn CatalogueSource) -> Catalogue {
    Catalogue::new(load_records(source))
}
