//! Host-bundle models for browser and headless runtime composition.

use std::rc::Rc;

use crate::{
    ClipboardService, ExternalUrlService, MemoryClipboardService, MemoryExternalUrlService,
    NoopClipboardService, NoopExternalUrlService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Composition without a browser, used by native builds and tests.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the shared desktop runtime.
///
/// Environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime and app crates free of browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Clipboard write service.
    pub clipboard: Rc<dyn ClipboardService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Headless bundle whose host requests are dropped.
    pub fn headless() -> Self {
        Self {
            external_urls: Rc::new(NoopExternalUrlService),
            clipboard: Rc::new(NoopClipboardService),
            host_strategy: HostStrategy::Headless,
        }
    }

    /// Headless bundle that records host requests into the given in-memory services.
    pub fn recording(urls: MemoryExternalUrlService, clipboard: MemoryClipboardService) -> Self {
        Self {
            external_urls: Rc::new(urls),
            clipboard: Rc::new(clipboard),
            host_strategy: HostStrategy::Headless,
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn recording_bundle_shares_the_memory_service() {
        let memory = MemoryExternalUrlService::default();
        let services = HostServices::recording(memory.clone(), MemoryClipboardService::default());
        block_on(services.external_urls.open_url("mailto:contacto@azulestudio.com"))
            .expect("open mailto");
        assert_eq!(services.host_strategy.as_str(), "headless");
        assert_eq!(memory.opened(), vec!["mailto:contacto@azulestudio.com".to_string()]);
    }
}
