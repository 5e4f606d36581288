//! Centralized stroke icon set rendered as inline SVG.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Every icon the desktop and its apps can draw.
pub enum IconName {
    /// Profile silhouette.
    User,
    /// Briefcase.
    Briefcase,
    /// Angle brackets.
    Code,
    /// Rosette.
    Award,
    /// Folder.
    Folder,
    /// Processor chip.
    Cpu,
    /// Envelope.
    Mail,
    /// Shell prompt.
    Terminal,
    /// Globe.
    Globe,
    /// Fruit logo for the system menu.
    Apple,
    /// Wireless signal.
    Wifi,
    /// Battery.
    Battery,
    /// Magnifier.
    Search,
    /// Control-center sliders.
    Sliders,
    /// Back arrow.
    ArrowLeft,
    /// Forward arrow.
    ArrowRight,
    /// Reload arrow.
    RotateCw,
    /// Box with outgoing arrow.
    ExternalLink,
    /// Two stacked sheets.
    Copy,
    /// Check mark.
    Check,
    /// Octocat-style mark.
    Github,
    /// Professional network mark.
    Linkedin,
    /// Warning triangle.
    AlertTriangle,
    /// Padlock.
    Lock,
    /// Diagonal cross.
    Close,
    /// Horizontal bar.
    Minimize,
    /// Outward arrows.
    Maximize,
    /// Partial ring used as a spinner.
    Loader,
}

impl IconName {
    /// Every icon, in declaration order.
    pub const ALL: [IconName; 28] = [
        Self::User,
        Self::Briefcase,
        Self::Code,
        Self::Award,
        Self::Folder,
        Self::Cpu,
        Self::Mail,
        Self::Terminal,
        Self::Globe,
        Self::Apple,
        Self::Wifi,
        Self::Battery,
        Self::Search,
        Self::Sliders,
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::RotateCw,
        Self::ExternalLink,
        Self::Copy,
        Self::Check,
        Self::Github,
        Self::Linkedin,
        Self::AlertTriangle,
        Self::Lock,
        Self::Close,
        Self::Minimize,
        Self::Maximize,
        Self::Loader,
    ];

    /// Stable kebab-case token used in manifests and `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Briefcase => "briefcase",
            Self::Code => "code",
            Self::Award => "award",
            Self::Folder => "folder",
            Self::Cpu => "cpu",
            Self::Mail => "mail",
            Self::Terminal => "terminal",
            Self::Globe => "globe",
            Self::Apple => "apple",
            Self::Wifi => "wifi",
            Self::Battery => "battery",
            Self::Search => "search",
            Self::Sliders => "sliders",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::RotateCw => "rotate-cw",
            Self::ExternalLink => "external-link",
            Self::Copy => "copy",
            Self::Check => "check",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::AlertTriangle => "alert-triangle",
            Self::Lock => "lock",
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Loader => "loader",
        }
    }

    /// Resolves a token produced by [`IconName::token`].
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == token)
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0",
            ],
            Self::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            Self::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Self::Award => &[
                "M18 8a6 6 0 1 1-12 0 6 6 0 0 1 12 0",
                "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
            ],
            Self::Folder => &[
                "M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z",
            ],
            Self::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M9 2v2", "M15 2v2", "M9 20v2", "M15 20v2", "M2 9h2", "M2 15h2", "M20 9h2",
                "M20 15h2",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            Self::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
            Self::Globe => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            Self::Apple => &[
                "M12 20.94c1.5 0 2.75 1.06 4 1.06 3 0 6-8 6-12.22A4.91 4.91 0 0 0 17 5c-2.22 0-4 1.44-5 2-1-.56-2.78-2-5-2a4.9 4.9 0 0 0-5 4.78C2 14 5 22 8 22c1.25 0 2.5-1.06 4-1.06Z",
                "M10 2c1 .5 2 2 2 5",
            ],
            Self::Wifi => &[
                "M5 12.55a11 11 0 0 1 14.08 0",
                "M1.42 9a16 16 0 0 1 21.16 0",
                "M8.53 16.11a6 6 0 0 1 6.95 0",
                "M12 20h.01",
            ],
            Self::Battery => &[
                "M3 7h14a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M23 13v-2",
            ],
            Self::Search => &["M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0", "m21 21-4.3-4.3"],
            Self::Sliders => &[
                "M4 21v-7", "M4 10V3", "M12 21v-9", "M12 8V3", "M20 21v-5", "M20 12V3", "M1 14h6",
                "M9 8h6", "M17 16h6",
            ],
            Self::ArrowLeft => &["M19 12H5", "m12 19-7-7 7-7"],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::RotateCw => &[
                "M21 12a9 9 0 1 1-9-9c2.52 0 4.93 1 6.74 2.74L21 8",
                "M21 3v5h-5",
            ],
            Self::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Self::Copy => &[
                "M10 8h10a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H10a2 2 0 0 1-2-2V10a2 2 0 0 1 2-2z",
                "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2",
            ],
            Self::Check => &["M20 6 9 17l-5-5"],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0 2 2 0 0 1 4 0",
            ],
            Self::AlertTriangle => &[
                "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3",
                "M12 9v4",
                "M12 17h.01",
            ],
            Self::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
            Self::Minimize => &["M5 12h14"],
            Self::Maximize => &["M15 3h6v6", "M9 21H3v-6", "m21 3-7 7", "m3 21 7-7"],
            Self::Loader => &["M21 12a9 9 0 1 1-6.219-8.56"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon edge length.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    #[default]
    Md,
    /// 28px.
    Lg,
    /// 40px.
    Xl,
}

impl IconSize {
    /// Edge length in CSS pixels.
    pub const fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 28,
            Self::Xl => 40,
        }
    }
}

#[component]
/// Inline SVG icon. Decorative by default (`aria-hidden`).
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class=crate::primitives::merge_layout_class("ui-icon", layout_class)
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
        >
            {icon.paths().iter().copied().map(|d| view! { <path d=d></path> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_resolve_back_to_icons() {
        for icon in IconName::ALL {
            assert_eq!(IconName::from_token(icon.token()), Some(icon));
            assert!(!icon.paths().is_empty());
        }
        assert_eq!(IconName::from_token("finder"), None);
    }
}
