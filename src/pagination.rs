//! This modules defines the common functionality for paging data.

use crate::Error;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of items per page when not specified in a request.
    pub default_page_size: u64,
    /// The largest page size a client may ask for. Larger requests are clamped.
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// A validated, one-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// The one-based page number.
    pub number: u64,
    /// The maximum number of items on the page.
    pub size: u64,
}

impl Page {
    /// Parse the raw `page` and `limit` query parameters, filling in defaults from `config`.
    ///
    /// # Errors
    ///
    /// Returns [Error::Validation] if either parameter is present but is not a
    /// positive integer.
    pub fn parse(
        raw_page: Option<&str>,
        raw_limit: Option<&str>,
        config: &PaginationConfig,
    ) -> Result<Self, Error> {
        let number = parse_positive(raw_page, "Invalid page")?.unwrap_or(config.default_page);
        let size = parse_positive(raw_limit, "Invalid limit")?
            .unwrap_or(config.default_page_size)
            .min(config.max_page_size);

        Ok(Self { number, size })
    }

    /// The number of items to skip to reach this page.
    pub fn offset(&self) -> u64 {
        self.number.saturating_sub(1).saturating_mul(self.size)
    }
}

fn parse_positive(raw: Option<&str>, message: &str) -> Result<Option<u64>, Error> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => match raw.parse::<u64>() {
            Ok(value) if value > 0 => Ok(Some(value)),
            _ => Err(Error::Validation(message.to_owned())),
        },
    }
}
