//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! App crates depend on this crate instead of the runtime: it defines the closed set of
//! application identifiers, the typed launch-parameter payloads each app accepts, and the
//! [`AppHost`] handle through which an app asks the shell to open other apps or external URLs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};

/// Stable identifier for every application shipped with the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    /// Profile summary.
    About,
    /// Project cards that open in the browser app.
    Projects,
    /// Work history timeline.
    Experience,
    /// Skill levels and technology tags.
    Skills,
    /// Contact links.
    Contact,
    /// Simulated terminal.
    Terminal,
    /// Simulated web browser.
    Browser,
}

impl AppId {
    /// Every application id in registry order.
    pub const ALL: [AppId; 7] = [
        Self::About,
        Self::Projects,
        Self::Experience,
        Self::Skills,
        Self::Contact,
        Self::Terminal,
        Self::Browser,
    ];

    /// Returns the stable string key used by manifests, deep links, and the terminal.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Terminal => "terminal",
            Self::Browser => "browser",
        }
    }

    /// Parses a string key into an app id. Unknown keys return `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == raw.trim())
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared shape of the launch parameters an application accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchParamsShape {
    /// The app takes no parameters.
    Empty,
    /// The app accepts [`BrowserLaunchParams`].
    Browser,
}

/// Parameters for opening the browser app at a specific address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserLaunchParams {
    /// Address loaded when the window mounts.
    pub initial_url: String,
}

impl BrowserLaunchParams {
    /// Creates browser params for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            initial_url: url.into(),
        }
    }
}

/// Typed payload forwarded from an opener to a window's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LaunchParams {
    /// Browser target address.
    Browser(BrowserLaunchParams),
}

impl LaunchParams {
    /// Returns the shape this payload satisfies.
    pub const fn shape(&self) -> LaunchParamsShape {
        match self {
            Self::Browser(_) => LaunchParamsShape::Browser,
        }
    }

    /// Returns browser params when this payload carries them.
    pub fn as_browser(&self) -> Option<&BrowserLaunchParams> {
        match self {
            Self::Browser(params) => Some(params),
        }
    }
}

impl LaunchParamsShape {
    /// Returns whether `params` may be delivered to an app declaring this shape.
    ///
    /// `None` is accepted by every shape; apps fall back to their own defaults.
    pub fn accepts(self, params: Option<&LaunchParams>) -> bool {
        match params {
            None => true,
            Some(params) => params.shape() == self,
        }
    }
}

/// Requests an app can send to the desktop shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppCommand {
    /// Open (or raise) an application window.
    OpenApp {
        /// Target application.
        app_id: AppId,
        /// Optional payload for the target app.
        params: Option<LaunchParams>,
    },
    /// Open a URL outside the desktop shell.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
    /// Write text to the system clipboard.
    CopyText {
        /// Text to copy.
        text: String,
    },
}

#[derive(Clone, Copy)]
/// Handle injected into app views for talking back to the desktop shell.
pub struct AppHost {
    sender: Callback<AppCommand>,
}

impl AppHost {
    /// Creates a host handle from the runtime command callback.
    pub fn new(sender: Callback<AppCommand>) -> Self {
        Self { sender }
    }

    /// Asks the shell to open or raise `app_id`.
    pub fn open_app(&self, app_id: AppId, params: Option<LaunchParams>) {
        self.send(AppCommand::OpenApp { app_id, params });
    }

    /// Asks the shell to open `url` outside the desktop.
    pub fn open_external_url(&self, url: impl Into<String>) {
        self.send(AppCommand::OpenExternalUrl { url: url.into() });
    }

    /// Asks the shell to place `text` on the clipboard.
    pub fn copy_text(&self, text: impl Into<String>) {
        self.send(AppCommand::CopyText { text: text.into() });
    }

    /// Low-level transport send.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }
}

/// DOM id an app puts on its primary text input so the shell can focus it when the window is
/// raised.
pub fn window_primary_input_dom_id(app_id: AppId) -> String {
    format!("app-{}-primary-input", app_id.as_str())
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window.
pub struct AppMountContext {
    /// Application being mounted.
    pub app_id: AppId,
    /// Launch params supplied at window-open time.
    pub launch_params: Option<LaunchParams>,
    /// Shell handle.
    pub host: AppHost,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
