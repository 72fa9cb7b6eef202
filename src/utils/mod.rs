//! Utility modules for web, DOM, and content operations.
//!
//! Provides:
//! - [`dom`] - Browser globals, viewport, clock, listener guards
//! - [`fetch_json`], [`fetch_json_cached`] - Network fetching with timeout
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`cache`] - sessionStorage caching for CMS documents

pub mod cache;
pub mod dom;
mod fetch;
mod markdown;

pub use fetch::{fetch_json, fetch_json_cached};
pub use markdown::markdown_to_html;
