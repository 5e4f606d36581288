use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, NoopClipboardService, NoopExternalUrlService};

use crate::{WebClipboardService, WebExternalUrlService};

/// Returns the host strategy for the active compilation target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Builds the host service bundle injected into `desktop_runtime`.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            external_urls: Rc::new(WebExternalUrlService),
            clipboard: Rc::new(WebClipboardService),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices {
            external_urls: Rc::new(NoopExternalUrlService),
            clipboard: Rc::new(NoopClipboardService),
            host_strategy: HostStrategy::Headless,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_builds_select_headless_services() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Headless);
        assert_eq!(selected_host_strategy().as_str(), "headless");
    }
}
