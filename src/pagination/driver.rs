//! Pagination driver
//!
//! Walks a page-numbered list endpoint from page 1 until a page arrives
//! without a next link, concatenating every page's elements in fetch order.
//! Pages are requested strictly one after another.

use super::types::{Aggregate, DriverState, Page, PageSelector, MAX_PER_PAGE};
use crate::error::{Error, Result};
use std::future::Future;
use tracing::{debug, trace, warn};

/// Default ceiling on the number of pages fetched for one list
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// Drives a page fetcher to exhaustion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: u32,
    max_pages: Option<u32>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Paginator using the maximum page size and [`DEFAULT_MAX_PAGES`]
    pub fn new() -> Self {
        Self {
            per_page: MAX_PER_PAGE,
            max_pages: Some(DEFAULT_MAX_PAGES),
        }
    }

    /// Set the page size (clamped to `1..=MAX_PER_PAGE`)
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Set the page ceiling
    #[must_use]
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages.max(1));
        self
    }

    /// Follow next links for as long as the server sends them
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_pages = None;
        self
    }

    /// Selector for the first request
    pub fn first_page(&self) -> PageSelector {
        PageSelector::with_per_page(self.per_page)
    }

    /// Fetch every page and return the concatenated elements.
    ///
    /// The first failed fetch aborts the run; nothing fetched before it is
    /// returned.
    pub async fn collect<T, F, Fut>(&self, fetch: F) -> Result<Vec<T>>
    where
        F: FnMut(PageSelector) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        self.collect_with_aux(fetch).await.map(|aggregate| aggregate.items)
    }

    /// Like [`Paginator::collect`], also keeping the auxiliary envelope data
    /// of the last page.
    pub async fn collect_with_aux<T, A, F, Fut>(&self, mut fetch: F) -> Result<Aggregate<T, A>>
    where
        F: FnMut(PageSelector) -> Fut,
        Fut: Future<Output = Result<Page<T, A>>>,
    {
        let mut selector = self.first_page();
        let mut aggregate = Aggregate::default();
        let mut state = DriverState::Idle;

        loop {
            transition(&mut state, DriverState::Fetching);
            let page = match fetch(selector).await {
                Ok(page) => page,
                Err(e) => {
                    transition(&mut state, DriverState::Failed);
                    debug!("Page {} failed: {e}", selector.page);
                    return Err(e);
                }
            };

            transition(&mut state, DriverState::Accumulating);
            let has_next = page.has_next();
            debug!(
                page = selector.page,
                per_page = selector.per_page,
                items = page.items.len(),
                has_next,
                "Fetched page"
            );

            if let Some(linked) = page.meta.next_page {
                if has_next && linked != selector.page + 1 {
                    debug!(
                        "Next link points at page {linked}, requesting page {} instead",
                        selector.page + 1
                    );
                }
            }

            aggregate.absorb(page);

            if !has_next {
                transition(&mut state, DriverState::Done);
                check_total(&aggregate);
                return Ok(aggregate);
            }

            if let Some(max_pages) = self.max_pages {
                if aggregate.pages >= max_pages {
                    transition(&mut state, DriverState::Failed);
                    return Err(Error::PageLimitExceeded { max_pages });
                }
            }

            selector.advance();
        }
    }
}

/// Fetch every page with the default [`Paginator`]
pub async fn paginate<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(PageSelector) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    Paginator::default().collect(fetch).await
}

/// Fetch every page with the default [`Paginator`], keeping auxiliary data
pub async fn paginate_with_aux<T, A, F, Fut>(fetch: F) -> Result<Aggregate<T, A>>
where
    F: FnMut(PageSelector) -> Fut,
    Fut: Future<Output = Result<Page<T, A>>>,
{
    Paginator::default().collect_with_aux(fetch).await
}

fn transition(state: &mut DriverState, next: DriverState) {
    debug_assert!(!state.is_terminal(), "no transition out of {state:?}");
    trace!("pagination {:?} -> {:?}", state, next);
    *state = next;
}

fn check_total<T, A>(aggregate: &Aggregate<T, A>) {
    if let Some(total) = aggregate.total {
        if total != aggregate.items.len() as u64 {
            warn!(
                "Server reported {total} items but {} were received over {} pages",
                aggregate.items.len(),
                aggregate.pages
            );
        }
    }
}
