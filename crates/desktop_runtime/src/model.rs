use serde::{Deserialize, Serialize};

pub use desktop_app_contract::{AppId, BrowserLaunchParams, LaunchParams, LaunchParamsShape};

pub const DEFAULT_WINDOW_WIDTH: i32 = 700;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 500;
/// z-index floor; the first window of a session is issued `BASE_Z_INDEX + 1`.
pub const BASE_Z_INDEX: u32 = 10;
pub const CASCADE_ORIGIN_X: i32 = 100;
pub const CASCADE_ORIGIN_Y: i32 = 50;
pub const CASCADE_STEP: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionMode {
    #[default]
    Booting,
    Locked,
    Active,
}

impl SessionMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Booting => "booting",
            Self::Locked => "locked",
            Self::Active => "active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    /// Cascading placement for the `n`-th window of the session.
    pub fn cascade(n: usize) -> Self {
        let step = CASCADE_STEP * n as i32;
        Self {
            x: CASCADE_ORIGIN_X + step,
            y: CASCADE_ORIGIN_Y + step,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self::cascade(0)
    }
}

/// One open application window. Geometry is remembered while maximized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub app_id: AppId,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    pub rect: WindowRect,
    pub launch_params: Option<LaunchParams>,
}

impl WindowRecord {
    pub fn browser_params(&self) -> Option<&BrowserLaunchParams> {
        self.launch_params.as_ref().and_then(LaunchParams::as_browser)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuPlacement {
    pub left: i32,
    pub top: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub session: SessionMode,
    pub windows: Vec<WindowRecord>,
    pub focus: Option<AppId>,
    pub z_counter: u32,
    pub context_menu: Option<ContextMenuPlacement>,
    /// Deep link waiting for the first activation of the session.
    pub pending_deep_link: Option<DeepLinkState>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            session: SessionMode::Booting,
            windows: Vec::new(),
            focus: None,
            z_counter: BASE_Z_INDEX,
            context_menu: None,
            pending_deep_link: None,
        }
    }
}

impl DesktopState {
    pub fn window(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn window_mut(&mut self, app_id: AppId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.app_id == app_id)
    }

    /// Returns whether `app_id` is the focus target and currently visible.
    pub fn is_active(&self, app_id: AppId) -> bool {
        self.focus == Some(app_id)
            && self.window(app_id).map(|w| !w.minimized).unwrap_or(false)
    }

    pub fn active_app(&self) -> Option<AppId> {
        self.focus.filter(|id| self.is_active(*id))
    }

    /// Whether the dock should draw an "open" indicator for `app_id`.
    pub fn is_running_visible(&self, app_id: AppId) -> bool {
        self.window(app_id).map(|w| !w.minimized).unwrap_or(false)
    }

    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| !w.minimized)
    }

    pub fn topmost_visible(&self) -> Option<&WindowRecord> {
        self.visible_windows().max_by_key(|w| w.z_index)
    }

    pub fn open_window_ids(&self) -> Vec<AppId> {
        self.windows.iter().map(|w| w.app_id).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub const fn class_suffix(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub app_id: AppId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// Transient pointer interaction state; never part of the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

/// Apps requested through the `?open=` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeepLinkState {
    pub open: Vec<AppId>,
}

impl DeepLinkState {
    /// Parses a comma-separated list of app keys. Unknown and duplicate keys are dropped.
    pub fn parse(raw: &str) -> Self {
        let mut open = Vec::new();
        for id in raw.split(',').filter_map(AppId::parse) {
            if !open.contains(&id) {
                open.push(id);
            }
        }
        Self { open }
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cascade_offsets_each_new_window() {
        assert_eq!(
            WindowRect::cascade(2),
            WindowRect {
                x: 160,
                y: 110,
                w: 700,
                h: 500
            }
        );
    }

    #[test]
    fn deep_link_keeps_known_ids_once() {
        let deep_link = DeepLinkState::parse("terminal,finder,about,terminal");
        assert_eq!(deep_link.open, vec![AppId::Terminal, AppId::About]);
        assert!(DeepLinkState::parse("").is_empty());
    }

    #[test]
    fn minimized_focus_target_is_not_active() {
        let mut state = DesktopState::default();
        state.windows.push(WindowRecord {
            app_id: AppId::About,
            z_index: 11,
            minimized: true,
            maximized: false,
            rect: WindowRect::default(),
            launch_params: None,
        });
        state.focus = Some(AppId::About);
        assert!(!state.is_active(AppId::About));
        assert_eq!(state.active_app(), None);
        assert!(!state.is_running_visible(AppId::About));
    }
}
