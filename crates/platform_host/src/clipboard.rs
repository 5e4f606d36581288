//! Clipboard host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ClipboardService`].
pub type ClipboardFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for writing plain text to the system clipboard.
pub trait ClipboardService {
    /// Replaces the clipboard contents with `text`.
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op clipboard service for unsupported targets.
pub struct NoopClipboardService;

impl ClipboardService for NoopClipboardService {
    fn write_text<'a>(&'a self, _text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory clipboard that keeps the last written text.
pub struct MemoryClipboardService {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboardService {
    /// Returns the last written text.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl ClipboardService for MemoryClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_clipboard_keeps_latest_text() {
        let clipboard = MemoryClipboardService::default();
        assert_eq!(clipboard.contents(), None);
        block_on(clipboard.write_text("first")).expect("write first");
        block_on(clipboard.write_text("contacto@azulestudio.com")).expect("write email");
        assert_eq!(
            clipboard.contents().as_deref(),
            Some("contacto@azulestudio.com")
        );
    }
}
