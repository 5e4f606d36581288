//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The `bridge` module owns the DOM interop; off `wasm32` it compiles to inert fallbacks so
//! the workspace builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod clipboard;
pub mod external_url;

pub use adapters::{build_host_services, selected_host_strategy};
pub use clipboard::WebClipboardService;
pub use external_url::WebExternalUrlService;
