//! Pagination types
//!
//! Page selectors, envelope metadata and the page/aggregate containers
//! passed between page fetchers and the driver.

use super::links::parse_page_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest `per_page` value the API accepts
pub const MAX_PER_PAGE: u32 = 200;

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size
pub const PER_PAGE_PARAM: &str = "per_page";

// ============================================================================
// Page Selector
// ============================================================================

/// Selects one page of a list endpoint: `?page=N&per_page=M`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelector {
    /// 1-based page number
    pub page: u32,
    /// Page size, never above [`MAX_PER_PAGE`]
    pub per_page: u32,
}

impl PageSelector {
    /// First page at the maximum page size
    pub fn first() -> Self {
        Self {
            page: 1,
            per_page: MAX_PER_PAGE,
        }
    }

    /// First page with a clamped page size
    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Move to the following page; the page size is unchanged
    pub fn advance(&mut self) {
        self.page += 1;
    }

    /// Query parameters for this selector
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            (PAGE_PARAM, self.page.to_string()),
            (PER_PAGE_PARAM, self.per_page.to_string()),
        ]
    }
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for PageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page={} per_page={}", self.page, self.per_page)
    }
}

// ============================================================================
// Envelope Metadata
// ============================================================================

/// `links` object of a list envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Page navigation links
    #[serde(default)]
    pub pages: Option<Pages>,
    /// Links to actions started by the request
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<LinkAction>,
}

impl Links {
    /// Links pointing at a next page
    pub fn with_next(next: impl Into<String>) -> Self {
        Self {
            pages: Some(Pages {
                next: Some(next.into()),
                ..Default::default()
            }),
            actions: Vec::new(),
        }
    }

    /// The next-page link, if one was sent
    pub fn next(&self) -> Option<&str> {
        self.pages
            .as_ref()
            .and_then(|p| p.next.as_deref())
            .filter(|next| !next.is_empty())
    }

    /// Whether the response advertises another page
    pub fn has_next(&self) -> bool {
        self.next().is_some()
    }
}

/// `links.pages` navigation URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// Action link (`links.actions[]`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAction {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub href: String,
}

/// `meta` object of a list envelope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Total number of elements across all pages
    #[serde(default)]
    pub total: Option<u64>,
}

/// Pagination signals extracted from one envelope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// A next link was present
    pub has_next: bool,
    /// `meta.total`, informational only
    pub total: Option<u64>,
    /// Page number parsed from the next link
    pub next_page: Option<u32>,
}

impl PageMeta {
    /// Build from the optional `links`/`meta` objects of an envelope
    pub fn from_envelope(links: Option<&Links>, meta: Option<&Meta>) -> Self {
        let next = links.and_then(Links::next);
        Self {
            has_next: next.is_some(),
            total: meta.and_then(|m| m.total),
            next_page: next.and_then(parse_page_number),
        }
    }

    /// Metadata for a final page
    pub fn last() -> Self {
        Self::default()
    }

    /// Metadata for a page that has a successor
    pub fn with_next() -> Self {
        Self {
            has_next: true,
            ..Self::default()
        }
    }
}

// ============================================================================
// Page and Aggregate
// ============================================================================

/// One fetched page: its elements, optional auxiliary envelope data and
/// pagination signals
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T, A = ()> {
    pub items: Vec<T>,
    pub aux: Option<A>,
    pub meta: PageMeta,
}

impl<T, A> Page<T, A> {
    /// Create a page from its parts
    pub fn new(items: Vec<T>, meta: PageMeta) -> Self {
        Self {
            items,
            aux: None,
            meta,
        }
    }

    /// A page with no successor
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, PageMeta::last())
    }

    /// A page followed by another page
    pub fn with_next(items: Vec<T>) -> Self {
        Self::new(items, PageMeta::with_next())
    }

    /// Attach auxiliary envelope data
    #[must_use]
    pub fn with_aux(mut self, aux: A) -> Self {
        self.aux = Some(aux);
        self
    }

    /// Attach `meta.total`
    #[must_use]
    pub fn with_total(mut self, total: u64) -> Self {
        self.meta.total = Some(total);
        self
    }

    /// Whether another page follows
    pub fn has_next(&self) -> bool {
        self.meta.has_next
    }
}

/// Result of a completed list operation
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate<T, A = ()> {
    /// Every page's elements in fetch order
    pub items: Vec<T>,
    /// Auxiliary data of the last page fetched
    pub aux: Option<A>,
    /// Number of pages fetched
    pub pages: u32,
    /// `meta.total` reported by the last page
    pub total: Option<u64>,
}

impl<T, A> Default for Aggregate<T, A> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            aux: None,
            pages: 0,
            total: None,
        }
    }
}

impl<T, A> Aggregate<T, A> {
    /// Append a page; each page overwrites aux, even with `None`
    pub(crate) fn absorb(&mut self, page: Page<T, A>) {
        self.items.extend(page.items);
        self.aux = page.aux;
        if page.meta.total.is_some() {
            self.total = page.meta.total;
        }
        self.pages += 1;
    }
}

// ============================================================================
// Driver State
// ============================================================================

/// Lifecycle of one pagination run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No request issued yet
    Idle,
    /// Waiting on a page fetch
    Fetching,
    /// Appending a fetched page
    Accumulating,
    /// Last page reached
    Done,
    /// A fetch failed or the page ceiling was hit
    Failed,
}

impl DriverState {
    /// Done and Failed have no outgoing transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}
