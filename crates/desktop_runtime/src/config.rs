//! Shell timing and appearance constants.

/// Delays and intervals driving the simulated boot, login, and app behaviors, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellTimings {
    pub boot_tick_ms: u64,
    pub boot_finish_pause_ms: u64,
    pub login_delay_ms: u64,
    pub clock_tick_ms: u64,
}

impl ShellTimings {
    pub const DEFAULT: Self = Self {
        boot_tick_ms: 150,
        boot_finish_pause_ms: 500,
        login_delay_ms: 800,
        clock_tick_ms: 1_000,
    };
}

/// Largest random boot progress step per tick, in percent.
pub const BOOT_MAX_STEP: f64 = 10.0;

pub const BOOT_BACKGROUND: &str = "#2c3868";
pub const WALLPAPER_URL: &str = "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?q=80&w=2133&auto=format&fit=crop";
/// Painted under the wallpaper while it loads or when it fails.
pub const WALLPAPER_FALLBACK: &str = "#1e293b";

pub const OWNER_NAME: &str = "Azul Estudio";
pub const OWNER_TAGLINE: &str = "Proyectando tus ideas";
pub const OWNER_AVATAR_URL: &str = "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?q=80&w=200&auto=format&fit=crop";

/// Title shown in the menu bar when no window is active.
pub const IDLE_APP_TITLE: &str = "Finder";

/// Inline style for the desktop root.
pub fn wallpaper_style() -> String {
    format!("background-color: {WALLPAPER_FALLBACK}; background-image: url('{WALLPAPER_URL}');")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_timings_match_shell_behavior() {
        assert_eq!(
            ShellTimings::DEFAULT,
            ShellTimings {
                boot_tick_ms: 150,
                boot_finish_pause_ms: 500,
                login_delay_ms: 800,
                clock_tick_ms: 1_000,
            }
        );
        assert!(wallpaper_style().contains(WALLPAPER_URL));
    }
}
