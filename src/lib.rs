// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # bl-cli
//!
//! Command-line client and library for the BinaryLane cloud API.
//!
//! Every list endpoint of the API is paginated. The [`pagination`] driver
//! walks the pages of one endpoint in order and hands back the complete
//! collection, or the first error it hit. The [`services`] layer binds the
//! driver to each resource and wraps the decoded elements in typed values.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bl_cli::http::{HttpClient, HttpClientConfig};
//! use bl_cli::services::Services;
//!
//! #[tokio::main]
//! async fn main() -> bl_cli::Result<()> {
//!     let client = HttpClient::with_config(
//!         HttpClientConfig::builder().token("my-token").build(),
//!     )?;
//!     let services = Services::new(&client);
//!
//!     for server in services.servers.list().await? {
//!         println!("{} {}", server.id, server.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                 CLI (clap, table / JSON)                   │
//! └────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────────────────────────────────────────────────────┐
//! │        Services: one typed adapter per resource            │
//! │  servers  actions  firewalls  floating IPs  invoices  ...  │
//! └────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────────┬──────────┴─────────┬───────────────────┐
//! │   Pagination     │    API envelopes   │      HTTP         │
//! ├──────────────────┼────────────────────┼───────────────────┤
//! │ page / per_page  │ servers, vpcs, ... │ Bearer token      │
//! │ links.pages.next │ links, meta.total  │ JSON decode       │
//! │ all-or-nothing   │ aux (preview)      │ API error object  │
//! └──────────────────┴────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// HTTP client
pub mod http;

/// Page-by-page aggregation of list endpoints
pub mod pagination;

/// API wire model and list envelopes
pub mod api;

/// Typed resource services
pub mod services;

/// Configuration file, environment and flag resolution
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{paginate, paginate_with_aux, Page, PageSelector, Paginator};
pub use services::Services;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
