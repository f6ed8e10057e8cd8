use std::collections::HashSet;

use crate::ProductRecord;

/// Category assigned to rows whose category cell is empty or missing.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Lower-cases a category and replaces spaces with hyphens.
pub fn category_slug(category: &str) -> String {
    category.to_lowercase().replace(' ', "-")
}

/// Turns a slug back into a heading: hyphens become spaces and every word is
/// title-cased (first letter of each alphabetic run upper, the rest lower).
pub fn display_title(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut at_word_start = true;
    for ch in slug.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Home-page tile and navigation target for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub slug: String,
    pub display_title: String,
    /// Image of the first record in the category (may be empty).
    pub representative_image: String,
    /// `/` + slug.
    pub link: String,
    /// Raw category text of the first record in the category.
    pub category: String,
}

/// Groups records by category slug.
///
/// Entries appear in order of first appearance in `records`; the first record
/// of each group supplies the image and the raw category text.
pub fn build_index(records: &[ProductRecord]) -> Vec<CatalogEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for record in records {
        let slug = record.category_slug();
        if !seen.insert(slug.clone()) {
            continue;
        }
        entries.push(CatalogEntry {
            display_title: display_title(&slug),
            representative_image: record.image_url.clone(),
            link: format!("/{slug}"),
            category: record.category.clone(),
            slug,
        });
    }
    entries
}

/// Loaded records plus the derived category index.
///
/// Built once per load and never mutated; share it behind an `Arc` and replace
/// the whole value to reload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalogue {
    records: Vec<ProductRecord>,
    entries: Vec<CatalogEntry>,
}

impl Catalogue {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        let entries = build_index(&records);
        Self { records, entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn entry(&self, slug: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.slug == slug)
    }

    /// Records whose category normalizes to `slug`, in source order.
    pub fn records_in_category<'a>(
        &'a self,
        slug: &'a str,
    ) -> impl Iterator<Item = &'a ProductRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.category_slug() == slug)
    }
}
