//! Desktop session runtime: window manager reducer, app registry, and the Leptos shell.
//!
//! State lives in [`DesktopState`] and only changes through [`reduce_desktop`]. The
//! [`DesktopProvider`] component owns the reactive copy of that state and runs the
//! [`RuntimeEffect`] values the reducer emits; [`DesktopShell`] renders boot, lock, and desktop
//! screens from it.

pub mod apps;
pub mod components;
pub mod config;
pub mod context_menu;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod session;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::action_for_command;
