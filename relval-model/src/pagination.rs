//! Pagination parameters read from a page URL.
//!
//! Query-string input is untrusted: anything that does not parse to an
//! acceptable number silently falls back to the defaults below. Parsing never
//! fails and never touches anything but its argument, so the same query string
//! always yields the same [`Pagination`].

use std::num::NonZeroU64;

use url::form_urlencoded;

/// Page index used when `page` is absent or invalid.
pub const DEFAULT_PAGE: u64 = 0;

/// Rows per page used when `limit` is absent or invalid.
pub const DEFAULT_PAGE_SIZE: NonZeroU64 = match NonZeroU64::new(50) {
    Some(size) => size,
    None => unreachable!(),
};

const PAGE_PARAM: &str = "page";
const LIMIT_PARAM: &str = "limit";

/// Validated pagination pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pagination {
    pub page: u64,
    pub limit: NonZeroU64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Derive pagination from a raw query string such as `?page=2&limit=25`.
    ///
    /// A leading `?` is ignored, values are percent-decoded, and when a key
    /// repeats the first occurrence wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut page = None;
        let mut limit = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                PAGE_PARAM if page.is_none() => page = Some(value),
                LIMIT_PARAM if limit.is_none() => limit = Some(value),
                _ => {}
            }
        }

        Self::from_params(page.as_deref(), limit.as_deref())
    }

    /// Derive pagination from already-extracted `page` and `limit` values.
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page.and_then(parse_whole_number).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .and_then(parse_whole_number)
            .and_then(NonZeroU64::new)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page, limit }
    }

    /// Render the pair back into `page=..&limit=..` for a data request.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(PAGE_PARAM, &self.page.to_string())
            .append_pair(LIMIT_PARAM, &self.limit.to_string())
            .finish()
    }
}

/// Parse a non-negative whole number the way a browser coerces a query value.
///
/// Accepts surrounding whitespace, a leading `+`, exponent notation and a zero
/// fractional part (`"3.0"`). Rejects blanks, negatives, fractions, non-finite
/// values and anything past `u64::MAX`.
fn parse_whole_number(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = trimmed.parse::<u64>() {
        return Some(value);
    }

    // f64 parsing also accepts "inf" and "nan" spellings
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // -0.0 compares equal to 0.0 and is a valid page
    if value < 0.0 || value >= u64::MAX as f64 {
        return None;
    }
    Some(value as u64)
}
