//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening external URLs outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory external URL service that records every requested URL.
pub struct MemoryExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl MemoryExternalUrlService {
    /// Returns the URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if url.trim().is_empty() {
                return Err("external url is empty".to_string());
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_service_records_urls_in_order() {
        let service = MemoryExternalUrlService::default();
        block_on(service.open_url("https://github.com")).expect("open github");
        block_on(service.open_url("https://linkedin.com")).expect("open linkedin");
        assert_eq!(
            service.opened(),
            vec!["https://github.com".to_string(), "https://linkedin.com".to_string()]
        );
    }

    #[test]
    fn memory_service_rejects_blank_urls() {
        let service = MemoryExternalUrlService::default();
        let err = block_on(service.open_url("  ")).expect_err("blank url rejected");
        assert_eq!(err, "external url is empty");
        assert!(service.opened().is_empty());
    }
}
