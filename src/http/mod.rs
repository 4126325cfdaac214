//! HTTP client module
//!
//! Provides the transport used by every service: one authenticated request
//! per call, JSON decoding, and mapping of failed responses onto [`Error`].
//!
//! [`Error`]: crate::error::Error

mod client;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, DEFAULT_API_URL,
};

#[cfg(test)]
mod tests;
