use crate::{ProductRecord, YearToken};

/// Shown in the about panel when a resolved record has no description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Outcome of an exact-match lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a ProductRecord),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn record(self) -> Option<&'a ProductRecord> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound => None,
        }
    }
}

/// Finds the first record (in source order) equal on all four fields.
///
/// `category` is the raw category text, not the slug.
pub fn resolve<'a>(
    records: &'a [ProductRecord],
    category: &str,
    sector: &str,
    year: &YearToken,
    title: &str,
) -> Resolution<'a> {
    records
        .iter()
        .find(|record| {
            record.category == category
                && record.sector == sector
                && &record.year == year
                && record.title == title
        })
        .map_or(Resolution::NotFound, Resolution::Found)
}

/// A possibly partial selection as held by a visitor's selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionTuple<'a> {
    pub category: Option<&'a str>,
    pub sector: Option<&'a str>,
    pub year: Option<&'a YearToken>,
    pub title: Option<&'a str>,
}

impl<'a> SelectionTuple<'a> {
    /// All four components, if every one is present and non-blank.
    fn complete(&self) -> Option<(&'a str, &'a str, &'a YearToken, &'a str)> {
        let category = self.category.filter(|v| !v.is_empty())?;
        let sector = self.sector.filter(|v| !v.is_empty())?;
        let year = self.year.filter(|v| !v.is_blank())?;
        let title = self.title.filter(|v| !v.is_empty())?;
        Some((category, sector, year, title))
    }
}

/// Placeholder content for selections that are incomplete or match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFallback {
    pub url: String,
    pub description: String,
}

impl Default for ContentFallback {
    fn default() -> Self {
        Self {
            url: "/assets/loading.html".to_string(),
            description: "Select all filters to see product information.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStatus {
    Resolved,
    Incomplete,
}

/// What the content frame and about panel show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub url: String,
    pub description: String,
    pub status: ContentStatus,
}

impl ResolvedContent {
    fn incomplete(fallback: &ContentFallback) -> Self {
        Self {
            url: fallback.url.clone(),
            description: fallback.description.clone(),
            status: ContentStatus::Incomplete,
        }
    }
}

/// Maps a selection to displayable content; never fails.
pub fn resolve_content(
    records: &[ProductRecord],
    selection: SelectionTuple<'_>,
    fallback: &ContentFallback,
) -> ResolvedContent {
    let Some((category, sector, year, title)) = selection.complete() else {
        return ResolvedContent::incomplete(fallback);
    };
    match resolve(records, category, sector, year, title) {
        Resolution::Found(record) => ResolvedContent {
            url: record.url.clone(),
            description: if record.description.trim().is_empty() {
                NO_DESCRIPTION.to_string()
            } else {
                record.description.clone()
            },
            status: ContentStatus::Resolved,
        },
        Resolution::NotFound => ResolvedContent::incomplete(fallback),
    }
}
