//! Clipboard host-service adapter backed by `navigator.clipboard`.

use platform_host::{ClipboardFuture, ClipboardService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser clipboard adapter.
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::write_clipboard_text(text).await })
    }
}
