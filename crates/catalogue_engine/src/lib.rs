//! Catalogue engine: loading the tabular source and holding the shared catalogue.
mod loader;
mod source;
mod store;

pub use loader::{load_catalogue, load_records};
pub use source::{read_csv, CatalogueSource, CsvFileSource, LoadError, REQUIRED_COLUMNS};
pub use store::CatalogueStore;
