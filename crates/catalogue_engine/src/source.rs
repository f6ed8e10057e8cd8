use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use catalogue_core::{ProductRecord, YearToken, UNKNOWN_CATEGORY};
use catalogue_logging::catalogue_warn;
use serde::Deserialize;
use thiserror::Error;

/// Columns every catalogue source must provide. `Description` is optional.
pub const REQUIRED_COLUMNS: [&str; 6] = ["Category", "Sector", "Year", "Title", "URL", "Image_URL"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open catalogue source {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("malformed catalogue source: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalogue source has no {0:?} column")]
    MissingColumn(&'static str),
}

/// Anything that can produce the raw product rows.
pub trait CatalogueSource: Send + Sync {
    /// Human-readable origin for log messages.
    fn describe(&self) -> String;

    fn read_records(&self) -> Result<Vec<ProductRecord>, LoadError>;
}

/// A CSV export of the product spreadsheet on disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogueSource for CsvFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_records(&self) -> Result<Vec<ProductRecord>, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Open {
            path: self.path.clone(),
            source,
        })?;
        read_csv(file)
    }
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Category")]
    category: Option<String>,
    #[serde(rename = "Sector", default)]
    sector: Option<String>,
    #[serde(rename = "Year", default)]
    year: Option<String>,
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "URL", default)]
    url: Option<String>,
    #[serde(rename = "Image_URL", default)]
    image_url: Option<String>,
    #[serde(rename = "Description", default)]
    description: Option<String>,
}

impl RawRow {
    fn into_record(self) -> ProductRecord {
        let category = self
            .category
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
        ProductRecord {
            category,
            sector: self.sector.unwrap_or_default(),
            year: self
                .year
                .as_deref()
                .map_or(YearToken::Text(String::new()), YearToken::parse),
            title: self.title.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }
}

/// Parses CSV with a header row into records, preserving row order.
///
/// A missing required column fails the whole source. Individual rows that
/// cannot be decoded (for example invalid UTF-8) are skipped with a warning.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<ProductRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawRow>().enumerate() {
        match row {
            Ok(raw) => records.push(raw.into_record()),
            Err(err) => {
                // +2: one for the header row, one for 1-based line numbers.
                catalogue_warn!("Skipping catalogue row {}: {}", index + 2, err);
            }
        }
    }
    Ok(records)
}
