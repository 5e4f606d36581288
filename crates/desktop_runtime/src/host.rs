//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Effect execution sits behind [`DesktopHostContext`] so the reducer stays pure and tests can
//! inject recording services.

mod dom;

use std::rc::Rc;

use leptos::{logging, spawn_local};
use platform_host::{ClipboardService, ExternalUrlService, HostServices};

use crate::{
    model::{AppId, Viewport},
    reducer::RuntimeEffect,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    external_urls: Rc<dyn ExternalUrlService>,
    clipboard: Rc<dyn ClipboardService>,
    host_strategy_name: &'static str,
}

impl DesktopHostContext {
    /// Wraps the service bundle assembled by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self {
            external_urls: services.external_urls,
            clipboard: services.clipboard,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(app_id) => self.focus_window_input(app_id),
            RuntimeEffect::OpenExternalUrl(url) => self.open_external_url(url),
            RuntimeEffect::CopyToClipboard(text) => self.copy_to_clipboard(text),
        }
    }

    /// Moves keyboard focus into the app's primary input, when it renders one.
    pub fn focus_window_input(&self, app_id: AppId) {
        dom::focus_window_input(app_id);
    }

    /// Opens `url` outside the desktop shell.
    pub fn open_external_url(&self, url: String) {
        let service = self.external_urls.clone();
        spawn_local(async move {
            if let Err(err) = service.open_url(&url).await {
                logging::warn!("open external url failed for `{url}`: {err}");
            }
        });
    }

    /// Writes `text` to the clipboard.
    pub fn copy_to_clipboard(&self, text: String) {
        let service = self.clipboard.clone();
        spawn_local(async move {
            if let Err(err) = service.write_text(&text).await {
                logging::warn!("clipboard write failed: {err}");
            }
        });
    }

    /// Current viewport size used for context-menu placement.
    pub fn viewport(&self) -> Viewport {
        dom::viewport()
    }
}
