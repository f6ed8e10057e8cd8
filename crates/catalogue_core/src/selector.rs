use std::collections::{BTreeSet, HashSet};

use catalogue_logging::catalogue_debug;

use crate::{Catalogue, ProductRecord, SelectionTuple, YearToken};

/// Result of feeding one value into a selector level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOutcome {
    /// The selection changed (downstream levels were reset).
    Applied,
    /// The value was accepted but the state already matched it.
    Unchanged,
    /// The value is not in the legal option set; state left untouched.
    Rejected,
}

/// One visitor's cascading sector → year → title selection.
///
/// Invariants kept by every transition:
/// - `sector` is set only when a category is entered and the value is one of
///   `sector_options`.
/// - `year` is set only when `sector` is, and is one of `year_options`.
/// - `title` is set only when `year` is, and is one of `title_options`.
/// - Changing a level clears every level below it, including its options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorState {
    category_slug: Option<String>,
    category: Option<String>,
    sector: Option<String>,
    year: Option<YearToken>,
    title: Option<String>,
    sector_options: Vec<String>,
    year_options: Vec<YearToken>,
    title_options: Vec<String>,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the category page for `slug` and applies default selections.
    ///
    /// Returns `false` (and leaves a reset state) if the slug is unknown.
    ///
    /// Defaults are taken independently from the one-record-per-sector list
    /// (first sorted sector, first sorted year, first sorted title) and then
    /// fed through the validating setters, so a default year or title that
    /// does not exist under the default sector is dropped and that level stays
    /// unset.
    pub fn enter_category(&mut self, catalogue: &Catalogue, slug: &str) -> bool {
        *self = Self::default();
        let Some(entry) = catalogue.entry(slug) else {
            catalogue_debug!("Unknown category slug {slug:?}; selector left empty");
            return false;
        };

        let representatives = representatives_by_sector(catalogue, slug);
        self.category_slug = Some(entry.slug.clone());
        self.category = Some(entry.category.clone());
        self.sector_options = sorted_distinct(representatives.iter().map(|r| r.sector.clone()));

        let default_sector = self.sector_options.first().cloned();
        let default_year = representatives.iter().map(|r| &r.year).min().cloned();
        let default_title = representatives.iter().map(|r| &r.title).min().cloned();

        if let Some(sector) = default_sector {
            self.set_sector(catalogue, Some(sector.as_str()));
        }
        if let Some(year) = default_year {
            if self.set_year(catalogue, Some(&year)) == SelectorOutcome::Rejected {
                catalogue_debug!("Default year {year} not offered under the default sector");
            }
        }
        if let Some(title) = default_title {
            if self.set_title(Some(title.as_str())) == SelectorOutcome::Rejected {
                catalogue_debug!("Default title {title:?} not offered under the default year");
            }
        }
        true
    }

    /// Selects (or clears, with `None`) the sector.
    ///
    /// A legal value always clears the year and title, even when it equals the
    /// current sector; `Unchanged` means there was nothing below to clear.
    pub fn set_sector(&mut self, catalogue: &Catalogue, sector: Option<&str>) -> SelectorOutcome {
        let Some(sector) = sector else {
            if self.sector.is_none() {
                return SelectorOutcome::Unchanged;
            }
            self.sector = None;
            self.clear_year();
            return SelectorOutcome::Applied;
        };
        if !self.sector_options.iter().any(|option| option == sector) {
            catalogue_debug!("Rejected sector {sector:?}: not offered for this category");
            return SelectorOutcome::Rejected;
        }

        let before = self.clone();
        self.sector = Some(sector.to_string());
        self.clear_year();
        self.year_options = self
            .matching(catalogue, |_| true)
            .map(|r| r.year.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        self.outcome_since(&before)
    }

    /// Selects (or clears) the year; requires a sector. A legal value always
    /// clears the title.
    pub fn set_year(&mut self, catalogue: &Catalogue, year: Option<&YearToken>) -> SelectorOutcome {
        let Some(year) = year else {
            if self.year.is_none() {
                return SelectorOutcome::Unchanged;
            }
            self.clear_year_selection();
            return SelectorOutcome::Applied;
        };
        if !self.year_options.contains(year) {
            catalogue_debug!("Rejected year {year}: not offered for this sector");
            return SelectorOutcome::Rejected;
        }

        let before = self.clone();
        self.year = Some(year.clone());
        self.title = None;
        self.title_options = sorted_distinct(
            self.matching(catalogue, |r| &r.year == year)
                .map(|r| r.title.clone()),
        );
        self.outcome_since(&before)
    }

    /// Selects (or clears) the title; requires a year.
    pub fn set_title(&mut self, title: Option<&str>) -> SelectorOutcome {
        let Some(title) = title else {
            if self.title.is_none() {
                return SelectorOutcome::Unchanged;
            }
            self.title = None;
            return SelectorOutcome::Applied;
        };
        if !self.title_options.iter().any(|option| option == title) {
            catalogue_debug!("Rejected title {title:?}: not offered for this year");
            return SelectorOutcome::Rejected;
        }
        if self.title.as_deref() == Some(title) {
            return SelectorOutcome::Unchanged;
        }
        self.title = Some(title.to_string());
        SelectorOutcome::Applied
    }

    pub fn category_slug(&self) -> Option<&str> {
        self.category_slug.as_deref()
    }

    /// Raw category text used for exact-match resolution.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn sector(&self) -> Option<&str> {
        self.sector.as_deref()
    }

    pub fn year(&self) -> Option<&YearToken> {
        self.year.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn sector_options(&self) -> &[String] {
        &self.sector_options
    }

    pub fn year_options(&self) -> &[YearToken] {
        &self.year_options
    }

    pub fn title_options(&self) -> &[String] {
        &self.title_options
    }

    pub fn sector_enabled(&self) -> bool {
        self.category_slug.is_some()
    }

    pub fn year_enabled(&self) -> bool {
        self.sector.is_some() && !self.year_options.is_empty()
    }

    pub fn title_enabled(&self) -> bool {
        self.year.is_some() && !self.title_options.is_empty()
    }

    pub fn selection(&self) -> SelectionTuple<'_> {
        SelectionTuple {
            category: self.category(),
            sector: self.sector(),
            year: self.year(),
            title: self.title(),
        }
    }

    fn outcome_since(&self, before: &Self) -> SelectorOutcome {
        if self == before {
            SelectorOutcome::Unchanged
        } else {
            SelectorOutcome::Applied
        }
    }

    fn clear_year(&mut self) {
        self.year_options.clear();
        self.clear_year_selection();
    }

    fn clear_year_selection(&mut self) {
        self.year = None;
        self.title = None;
        self.title_options.clear();
    }

    /// Records with the stored category text and current sector that also
    /// satisfy `extra`.
    fn matching<'a>(
        &'a self,
        catalogue: &'a Catalogue,
        extra: impl Fn(&ProductRecord) -> bool + 'a,
    ) -> impl Iterator<Item = &'a ProductRecord> + 'a {
        let category = self.category.as_deref();
        let sector = self.sector.as_deref();
        catalogue.records().iter().filter(move |record| {
            category == Some(record.category.as_str())
                && sector == Some(record.sector.as_str())
                && extra(*record)
        })
    }
}

/// One record per sector within the category; the first record encountered in
/// source order wins.
fn representatives_by_sector<'a>(catalogue: &'a Catalogue, slug: &'a str) -> Vec<&'a ProductRecord> {
    let mut seen = HashSet::new();
    catalogue
        .records_in_category(slug)
        .filter(|record| seen.insert(record.sector.clone()))
        .collect()
}

fn sorted_distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}
