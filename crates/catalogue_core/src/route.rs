use crate::Catalogue;

/// Strips leading and trailing slashes.
pub fn normalize_pathname(pathname: &str) -> &str {
    pathname.trim_matches('/')
}

/// Which page a pathname selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Category(String),
}

impl Route {
    /// A pathname is a category page only if it names a known category link
    /// exactly; anything else, including nested paths, is the home view.
    pub fn from_pathname(pathname: &str, catalogue: &Catalogue) -> Self {
        let stripped = normalize_pathname(pathname);
        match catalogue.entry(stripped) {
            Some(entry) => Route::Category(entry.slug.clone()),
            None => Route::Home,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}
