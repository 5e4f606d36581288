//! Window-manager transition helpers used by the desktop reducer.
//!
//! Every helper is total: naming an app with no window record is a no-op that returns `false`.

use crate::model::{
    AppId, DesktopState, LaunchParams, ResizeEdge, WindowRecord, WindowRect, BASE_Z_INDEX,
};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 320;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

/// Issues the next z-index. Values are strictly increasing within a session.
pub fn next_z(state: &mut DesktopState) -> u32 {
    state.z_counter = state.z_counter.saturating_add(1);
    state.z_counter
}

/// Resets the z-order counter to its base value.
pub fn reset_z(state: &mut DesktopState) {
    state.z_counter = BASE_Z_INDEX;
}

/// Focuses and raises `app_id`, restoring it if minimized.
///
/// Already-focused targets are left untouched so repeated clicks never consume z values.
/// Returns `true` when the window exists.
pub fn focus_window(state: &mut DesktopState, app_id: AppId) -> bool {
    if state.window(app_id).is_none() {
        return false;
    }
    if state.focus == Some(app_id) {
        return true;
    }
    raise_window(state, app_id);
    true
}

fn raise_window(state: &mut DesktopState, app_id: AppId) {
    let z = next_z(state);
    if let Some(window) = state.window_mut(app_id) {
        window.z_index = z;
        window.minimized = false;
    }
    state.focus = Some(app_id);
}

/// Opens `app_id`, restoring or re-raising an existing record.
///
/// Provided params replace the stored ones; `None` keeps whatever the record already had.
pub fn open_window(state: &mut DesktopState, app_id: AppId, params: Option<LaunchParams>) {
    match state.window_mut(app_id) {
        Some(window) => {
            if params.is_some() {
                window.launch_params = params;
            }
            raise_window(state, app_id);
        }
        None => {
            let rect = WindowRect::cascade(state.windows.len());
            let z_index = next_z(state);
            state.windows.push(WindowRecord {
                app_id,
                z_index,
                minimized: false,
                maximized: false,
                rect,
                launch_params: params,
            });
            state.focus = Some(app_id);
        }
    }
}

/// Removes the record for `app_id`, clearing focus when it was the target.
pub fn close_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| w.app_id != app_id);
    if state.windows.len() == before {
        return false;
    }
    if state.focus == Some(app_id) {
        state.focus = None;
    }
    true
}

/// Hides `app_id` without touching its z-index.
pub fn minimize_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.minimized = true;
    if state.focus == Some(app_id) {
        state.focus = None;
    }
    true
}

/// Flips the maximized flag and always re-raises the window.
pub fn toggle_maximize(state: &mut DesktopState, app_id: AppId) -> bool {
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.maximized = !window.maximized;
    raise_window(state, app_id);
    true
}

/// Stores a new top-left position, then applies focus semantics.
pub fn reposition_window(state: &mut DesktopState, app_id: AppId, x: i32, y: i32) -> bool {
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.rect = window.rect.moved_to(x, y);
    focus_window(state, app_id)
}

/// Stores new geometry clamped to the minimum size, then applies focus semantics.
pub fn resize_window(state: &mut DesktopState, app_id: AppId, rect: WindowRect) -> bool {
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.rect = clamp_rect(rect);
    focus_window(state, app_id)
}

/// Minimizes every record and clears focus. Window count is unchanged.
pub fn minimize_all(state: &mut DesktopState) {
    for window in &mut state.windows {
        window.minimized = true;
    }
    state.focus = None;
}

/// Drops every record and resets focus and the z-order counter.
pub fn discard_all(state: &mut DesktopState) {
    state.windows.clear();
    state.focus = None;
    reset_z(state);
}

pub fn clamp_rect(rect: WindowRect) -> WindowRect {
    rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

/// Applies resize deltas for a given edge/corner drag.
///
/// Edges anchored on the west or north keep the opposite edge fixed once the minimum is hit.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let grow_east = |r: WindowRect| WindowRect {
        w: (start.w + dx).max(MIN_WINDOW_WIDTH),
        ..r
    };
    let grow_south = |r: WindowRect| WindowRect {
        h: (start.h + dy).max(MIN_WINDOW_HEIGHT),
        ..r
    };
    let grow_west = |r: WindowRect| {
        let w = (start.w - dx).max(MIN_WINDOW_WIDTH);
        WindowRect {
            x: start.x + start.w - w,
            w,
            ..r
        }
    };
    let grow_north = |r: WindowRect| {
        let h = (start.h - dy).max(MIN_WINDOW_HEIGHT);
        WindowRect {
            y: start.y + start.h - h,
            h,
            ..r
        }
    };

    match edge {
        ResizeEdge::East => grow_east(start),
        ResizeEdge::West => grow_west(start),
        ResizeEdge::South => grow_south(start),
        ResizeEdge::North => grow_north(start),
        ResizeEdge::NorthEast => grow_north(grow_east(start)),
        ResizeEdge::NorthWest => grow_north(grow_west(start)),
        ResizeEdge::SouthEast => grow_south(grow_east(start)),
        ResizeEdge::SouthWest => grow_south(grow_west(start)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::BrowserLaunchParams;

    fn browser_params(url: &str) -> Option<LaunchParams> {
        Some(LaunchParams::Browser(BrowserLaunchParams::new(url)))
    }

    #[test]
    fn first_window_is_issued_eleven_and_cascades() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::About, None);
        open_window(&mut state, AppId::Skills, None);

        let about = state.window(AppId::About).expect("about");
        let skills = state.window(AppId::Skills).expect("skills");
        assert_eq!(about.z_index, 11);
        assert_eq!(skills.z_index, 12);
        assert_eq!((about.rect.x, about.rect.y), (100, 50));
        assert_eq!((skills.rect.x, skills.rect.y), (130, 80));
        assert_eq!(state.focus, Some(AppId::Skills));
    }

    #[test]
    fn focusing_the_focus_target_does_not_consume_z() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::About, None);
        let counter = state.z_counter;

        assert!(focus_window(&mut state, AppId::About));
        assert_eq!(state.z_counter, counter);
        assert!(!focus_window(&mut state, AppId::Contact));
    }

    #[test]
    fn reopening_a_minimized_window_keeps_geometry_and_params() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::Browser, browser_params("https://vitejs.dev/"));
        reposition_window(&mut state, AppId::Browser, 220, 140);
        minimize_window(&mut state, AppId::Browser);
        assert_eq!(state.focus, None);

        open_window(&mut state, AppId::Browser, None);
        let browser = state.window(AppId::Browser).expect("browser");
        assert!(!browser.minimized);
        assert_eq!((browser.rect.x, browser.rect.y), (220, 140));
        assert_eq!(
            browser.browser_params().map(|p| p.initial_url.as_str()),
            Some("https://vitejs.dev/")
        );
    }

    #[test]
    fn toggle_maximize_keeps_remembered_position() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::Terminal, None);
        let before = state.window(AppId::Terminal).expect("terminal").rect;

        toggle_maximize(&mut state, AppId::Terminal);
        assert!(state.window(AppId::Terminal).expect("terminal").maximized);
        toggle_maximize(&mut state, AppId::Terminal);

        let after = state.window(AppId::Terminal).expect("terminal");
        assert!(!after.maximized);
        assert_eq!(after.rect, before);
    }

    #[test]
    fn west_resize_stops_at_minimum_and_keeps_east_edge() {
        let start = WindowRect {
            x: 100,
            y: 50,
            w: 700,
            h: 500,
        };
        let resized = resize_rect(start, ResizeEdge::West, 600, 0);
        assert_eq!(resized.w, MIN_WINDOW_WIDTH);
        assert_eq!(resized.x + resized.w, start.x + start.w);

        let corner = resize_rect(start, ResizeEdge::SouthEast, -1000, 40);
        assert_eq!((corner.w, corner.h), (MIN_WINDOW_WIDTH, 540));
    }

    #[test]
    fn discard_all_resets_counter() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::About, None);
        discard_all(&mut state);
        assert!(state.windows.is_empty());
        assert_eq!(state.z_counter, BASE_Z_INDEX);
    }
}
