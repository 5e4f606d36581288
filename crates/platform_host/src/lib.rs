//! Typed host-domain contracts shared by the desktop runtime and the browser adapters.
//!
//! This crate is the API-first boundary for platform services. Concrete browser adapters live
//! in `platform_host_web`; this crate only defines the contracts, in-memory doubles, and
//! clock formatting helpers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod external_url;
pub mod host;
pub mod time;

pub use clipboard::{
    ClipboardFuture, ClipboardService, MemoryClipboardService, NoopClipboardService,
};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use time::{datetime_line, local_datetime_string, LocalClockSnapshot};
