//! Page-number pagination
//!
//! Converts raw `page` / `perPage` / `order` request parameters into an
//! offset window and computes the total page count. Malformed input is never
//! an error: it falls back to the configured defaults.

use serde::{Deserialize, Serialize};

/// Default page size when none is configured
pub const DEFAULT_PER_PAGE: i64 = 10;
/// Upper bound for the page size when none is configured
pub const MAX_PER_PAGE: i64 = 50;

/// Sort direction over creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Lenient parse; anything but asc/desc yields `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// SQL keyword
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Raw pagination parameters as they arrive on the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default, rename = "perPage")]
    pub per_page: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

impl PageRequest {
    /// Build a request from already-known values
    pub fn new(page: i64, per_page: i64, order: SortOrder) -> Self {
        Self {
            page: Some(page.to_string()),
            per_page: Some(per_page.to_string()),
            order: Some(
                match order {
                    SortOrder::Asc => "asc",
                    SortOrder::Desc => "desc",
                }
                .to_string(),
            ),
        }
    }
}

/// Configured pagination defaults and bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSettings {
    pub default_per_page: i64,
    pub max_per_page: i64,
    pub default_order: SortOrder,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
            default_order: SortOrder::Desc,
        }
    }
}

impl PaginationSettings {
    /// Create settings, keeping both sizes at least 1 and the default within the bound
    pub fn new(default_per_page: i64, max_per_page: i64, default_order: SortOrder) -> Self {
        let max_per_page = max_per_page.max(1);
        Self {
            default_per_page: default_per_page.clamp(1, max_per_page),
            max_per_page,
            default_order,
        }
    }

    /// Normalize raw request parameters into a page window
    pub fn resolve(&self, request: &PageRequest) -> Page {
        let page = parse_positive(request.page.as_deref()).unwrap_or(1);
        let per_page = parse_positive(request.per_page.as_deref())
            .unwrap_or(self.default_per_page)
            .min(self.max_per_page);
        let order = request
            .order
            .as_deref()
            .and_then(SortOrder::parse)
            .unwrap_or(self.default_order);

        Page {
            page,
            per_page,
            order,
        }
    }
}

/// Parse an integer and clamp it to >= 1; non-numeric input yields `None`
fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).map(|n| n.max(1))
}

/// A normalized page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub page: i64,
    pub per_page: i64,
    pub order: SortOrder,
}

impl Page {
    /// Number of rows to skip
    pub fn skip(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Number of rows to take
    pub fn take(&self) -> i64 {
        self.per_page
    }

    /// Total pages for `total_items` matching rows; zero items yields zero pages
    pub fn total_pages(&self, total_items: i64) -> i64 {
        total_pages(total_items, self.per_page)
    }
}

/// `ceil(total_items / per_page)`, with non-positive totals yielding 0
pub fn total_pages(total_items: i64, per_page: i64) -> i64 {
    if total_items <= 0 {
        return 0;
    }
    let per_page = per_page.max(1);
    total_items / per_page + i64::from(total_items % per_page != 0)
}
