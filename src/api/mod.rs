//! # Phish.in Integration Module
//!
//! HTTP access to the Phish.in v1 API. The client owns URL formatting from
//! a query spec, bearer-token authentication, and decoding responses into
//! wire models. Non-200 responses are hard failures; nothing is retried.
//!
//! ```text
//! CLI pipelines (cli::*)
//!      ↓
//! Client (URL formatting, GET, decode)
//!      ↓
//! HTTP layer (reqwest, JSON)
//!      ↓
//! Phish.in API
//! ```

mod client;

pub use client::Client;
