//! Page fetching over HTTP
//!
//! The library core works on HTML text; this module is how the command-line
//! tool gets that text for a URL.

pub mod client;
pub mod config;

pub use client::fetch_html;
pub use config::FetchOptions;
