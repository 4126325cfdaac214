//! Pagination module
//!
//! Turns the API's page-numbered list endpoints into complete collections.
//!
//! # Overview
//!
//! A list call supplies a page fetcher: a closure that takes a
//! [`PageSelector`], performs one request and returns a [`Page`]. The
//! [`Paginator`] calls it with page 1, 2, 3, ... at a fixed page size until a
//! page comes back without a `links.pages.next` URL, and returns every
//! element in the order received. Any failed fetch fails the whole list.

mod driver;
mod links;
mod types;

pub use driver::{paginate, paginate_with_aux, Paginator, DEFAULT_MAX_PAGES};
pub use links::parse_page_number;
pub use types::{
    Aggregate, DriverState, LinkAction, Links, Meta, Page, PageMeta, PageSelector, Pages,
    MAX_PER_PAGE, PAGE_PARAM, PER_PAGE_PARAM,
};
