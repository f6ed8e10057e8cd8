use std::fmt;

/// Publication year of a product.
///
/// Spreadsheet cells are either numeric or free text, so the year is kept as an
/// opaque but ordered token. Numbers sort numerically and before any text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YearToken {
    Number(i64),
    Text(String),
}

impl YearToken {
    /// Parses a raw cell or selector value.
    ///
    /// Integral floats such as `2020.0` (common in spreadsheet exports) become
    /// numbers so that they compare equal to `2020`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return YearToken::Number(n);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                return YearToken::Number(f as i64);
            }
        }
        YearToken::Text(trimmed.to_string())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, YearToken::Text(text) if text.is_empty())
    }
}

impl From<i64> for YearToken {
    fn from(value: i64) -> Self {
        YearToken::Number(value)
    }
}

impl From<i32> for YearToken {
    fn from(value: i32) -> Self {
        YearToken::Number(i64::from(value))
    }
}

impl fmt::Display for YearToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearToken::Number(n) => write!(f, "{n}"),
            YearToken::Text(text) => f.write_str(text),
        }
    }
}

/// One catalogue row after normalization. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub category: String,
    pub sector: String,
    pub year: YearToken,
    pub title: String,
    pub url: String,
    pub image_url: String,
    pub description: String,
}

impl ProductRecord {
    pub fn new(
        category: impl Into<String>,
        sector: impl Into<String>,
        year: impl Into<YearToken>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            sector: sector.into(),
            year: year.into(),
            title: title.into(),
            url: url.into(),
            image_url: String::new(),
            description: String::new(),
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Slug of this record's category, see [`crate::category_slug`].
    pub fn category_slug(&self) -> String {
        crate::category_slug(&self.category)
    }
}
