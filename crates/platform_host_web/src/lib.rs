//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer: `fetch`-backed HTTP, viewport
//! measurement for the screen service, and microtask scheduling. Native builds compile the same
//! API with inert fallbacks so workspace tests run off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod http;
pub mod task;
pub mod viewport;

pub use host::{browser_host, BrowserHost};
pub use http::WebHttpService;
pub use task::WebTaskSpawner;
pub use viewport::{measure_viewport, ViewportTracker};
