//! Shared UI primitive library for the desktop shell and its built-in applications.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the desktop stylesheet.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, DesktopBackdrop, DesktopRoot,
    DesktopWindowLayer, Dock, DockButton, Heading, HeadingLevel, IconButton, MenuBar,
    MenuBarSection, MenuItem, MenuSeparator, MenuSurface, ProgressBar, ResizeHandle,
    TerminalLine, TerminalPrompt, TerminalSurface, TerminalTranscript, TextField, WindowBody,
    WindowControlButton, WindowControlTone, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Heading, HeadingLevel, Icon, IconButton,
        IconName, IconSize, ProgressBar, TerminalLine, TerminalPrompt, TerminalSurface,
        TerminalTranscript, TextField,
    };
}
