//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    apps, context_menu,
    model::{
        AppId, DeepLinkState, DesktopState, DragSession, InteractionState, LaunchParams,
        LaunchParamsShape, PointerPosition, ResizeEdge, ResizeSession, SessionMode, Viewport,
        WindowRect,
    },
    session, window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or restore and raise) the window for an app.
    OpenApp {
        /// App to open.
        app_id: AppId,
        /// Payload forwarded to the app; replaces stored params when present.
        params: Option<LaunchParams>,
    },
    /// Close a window.
    CloseWindow {
        /// Window to close.
        app_id: AppId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        app_id: AppId,
    },
    /// Toggle the maximized flag and raise the window.
    ToggleMaximize {
        /// Window to toggle.
        app_id: AppId,
    },
    /// Focus (and raise) a window.
    FocusWindow {
        /// Window to focus.
        app_id: AppId,
    },
    /// Move a window's top-left corner.
    RepositionWindow {
        /// Window to move.
        app_id: AppId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Replace a window's geometry.
    ResizeWindow {
        /// Window to resize.
        app_id: AppId,
        /// New geometry; clamped to the minimum size.
        rect: WindowRect,
    },
    /// Desktop background click: drop the focus target.
    ClearFocus,
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window from an edge or corner.
    BeginResize {
        /// Window being resized.
        app_id: AppId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Open the desktop context menu at a pointer position.
    ShowContextMenu {
        /// Pointer x.
        x: i32,
        /// Pointer y.
        y: i32,
        /// Current viewport size.
        viewport: Viewport,
    },
    /// Close the desktop context menu.
    HideContextMenu,
    /// "Limpiar Escritorio": minimize everything.
    RefreshDesktop,
    /// Boot animation finished.
    FinishBoot,
    /// Lock screen submitted.
    Login,
    /// Return to the lock screen.
    Logout,
    /// Store a deep link to apply on the first login.
    QueueDeepLink {
        /// Parsed deep link.
        deep_link: DeepLinkState,
    },
    /// Open a URL outside the desktop.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
    /// Copy text to the clipboard.
    CopyText {
        /// Text to copy.
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the newly focused window's primary input.
    FocusWindowInput(AppId),
    /// Open an external URL.
    OpenExternalUrl(String),
    /// Write text to the clipboard.
    CopyToClipboard(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that do not apply to the current state.
pub enum ReducerError {
    /// Desktop actions require an active session.
    #[error("desktop is not active (session is {})", .0.as_str())]
    SessionInactive(SessionMode),
    /// The session cannot move between these modes.
    #[error("invalid session transition from {} to {}", .from.as_str(), .to.as_str())]
    InvalidSessionTransition {
        /// Current mode.
        from: SessionMode,
        /// Requested mode.
        to: SessionMode,
    },
    /// Launch params do not match the shape the app declares.
    #[error("launch params rejected for `{app_id}`: expected {expected:?}")]
    LaunchParamsRejected {
        /// Target app.
        app_id: AppId,
        /// Shape the app accepts.
        expected: LaunchParamsShape,
    },
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Actions naming a window that does not exist are accepted no-ops.
///
/// # Errors
///
/// Returns a [`ReducerError`] when the action does not apply to the current session mode or
/// carries launch params the target app does not accept. State is unchanged in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::FinishBoot => session::finish_boot(state)?,
        DesktopAction::Login => {
            session::login(state)?;
            if let Some(deep_link) = state.pending_deep_link.take() {
                for app_id in deep_link.open {
                    window_manager::open_window(state, app_id, None);
                }
                if let Some(app_id) = state.focus {
                    effects.push(RuntimeEffect::FocusWindowInput(app_id));
                }
            }
        }
        DesktopAction::Logout => {
            session::logout(state)?;
            *interaction = InteractionState::default();
        }
        DesktopAction::QueueDeepLink { deep_link } => {
            if !deep_link.is_empty() {
                state.pending_deep_link = Some(deep_link);
            }
        }
        action => {
            session::require_active(state)?;
            reduce_active(state, interaction, action, &mut effects)?;
        }
    }
    Ok(effects)
}

fn reduce_active(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    match action {
        DesktopAction::OpenApp { app_id, params } => {
            let expected = apps::app_descriptor(app_id).params;
            if !expected.accepts(params.as_ref()) {
                return Err(ReducerError::LaunchParamsRejected { app_id, expected });
            }
            window_manager::open_window(state, app_id, params);
            state.context_menu = None;
            effects.push(RuntimeEffect::FocusWindowInput(app_id));
        }
        DesktopAction::CloseWindow { app_id } => {
            window_manager::close_window(state, app_id);
            clear_interaction_for(interaction, app_id);
        }
        DesktopAction::MinimizeWindow { app_id } => {
            window_manager::minimize_window(state, app_id);
            clear_interaction_for(interaction, app_id);
        }
        DesktopAction::ToggleMaximize { app_id } => {
            if window_manager::toggle_maximize(state, app_id) {
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::FocusWindow { app_id } => {
            let was_focused = state.focus == Some(app_id);
            if window_manager::focus_window(state, app_id) && !was_focused {
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::RepositionWindow { app_id, x, y } => {
            window_manager::reposition_window(state, app_id, x, y);
        }
        DesktopAction::ResizeWindow { app_id, rect } => {
            window_manager::resize_window(state, app_id, rect);
        }
        DesktopAction::ClearFocus => state.focus = None,
        DesktopAction::BeginMove { app_id, pointer } => {
            let Some(window) = state.window(app_id) else {
                return Ok(());
            };
            if window.maximized {
                window_manager::focus_window(state, app_id);
                return Ok(());
            }
            interaction.dragging = Some(DragSession {
                app_id,
                pointer_start: pointer,
                rect_start: window.rect,
            });
            window_manager::focus_window(state, app_id);
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = state.window_mut(session.app_id) {
                    window.rect = session.rect_start.offset(dx, dy);
                }
            }
        }
        DesktopAction::EndMove => {
            if let Some(session) = interaction.dragging.take() {
                if let Some(rect) = state.window(session.app_id).map(|w| w.rect) {
                    window_manager::reposition_window(state, session.app_id, rect.x, rect.y);
                }
            }
        }
        DesktopAction::BeginResize {
            app_id,
            edge,
            pointer,
        } => {
            let Some(window) = state.window(app_id) else {
                return Ok(());
            };
            if window.maximized {
                return Ok(());
            }
            interaction.resizing = Some(ResizeSession {
                app_id,
                edge,
                pointer_start: pointer,
                rect_start: window.rect,
            });
            window_manager::focus_window(state, app_id);
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = state.window_mut(session.app_id) {
                    window.rect =
                        window_manager::resize_rect(session.rect_start, session.edge, dx, dy);
                }
            }
        }
        DesktopAction::EndResize => {
            if let Some(session) = interaction.resizing.take() {
                if let Some(rect) = state.window(session.app_id).map(|w| w.rect) {
                    window_manager::resize_window(state, session.app_id, rect);
                }
            }
        }
        DesktopAction::ShowContextMenu { x, y, viewport } => {
            state.context_menu = Some(context_menu::place(x, y, viewport));
        }
        DesktopAction::HideContextMenu => state.context_menu = None,
        DesktopAction::RefreshDesktop => {
            window_manager::minimize_all(state);
            state.context_menu = None;
            *interaction = InteractionState::default();
        }
        DesktopAction::OpenExternalUrl { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
        DesktopAction::CopyText { text } => {
            effects.push(RuntimeEffect::CopyToClipboard(text));
        }
        DesktopAction::FinishBoot
        | DesktopAction::Login
        | DesktopAction::Logout
        | DesktopAction::QueueDeepLink { .. } => {}
    }
    Ok(())
}

fn clear_interaction_for(interaction: &mut InteractionState, app_id: AppId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| session.app_id == app_id)
    {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|session| session.app_id == app_id)
    {
        interaction.resizing = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{BrowserLaunchParams, ContextMenuPlacement};

    fn active_state() -> (DesktopState, InteractionState) {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(&mut state, &mut interaction, DesktopAction::FinishBoot).expect("boot");
        reduce_desktop(&mut state, &mut interaction, DesktopAction::Login).expect("login");
        (state, interaction)
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenApp {
                app_id,
                params: None,
            },
        )
        .expect("open window");
    }

    fn browser_params(url: &str) -> Option<LaunchParams> {
        Some(LaunchParams::Browser(BrowserLaunchParams::new(url)))
    }

    #[test]
    fn repeated_open_keeps_one_topmost_record() {
        let (mut state, mut interaction) = active_state();
        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Terminal);
        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::About);

        let about = state.windows.iter().filter(|w| w.app_id == AppId::About);
        assert_eq!(about.count(), 1);
        assert_eq!(state.topmost_visible().map(|w| w.app_id), Some(AppId::About));
        assert_eq!(state.active_app(), Some(AppId::About));
        assert!(state.windows.iter().all(|w| w.z_index > crate::model::BASE_Z_INDEX));
    }

    #[test]
    fn open_emits_focus_input_effect() {
        let (mut state, mut interaction) = active_state();
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Terminal,
                params: None,
            },
        )
        .expect("open");
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(AppId::Terminal)]);
    }

    #[test]
    fn close_then_open_builds_a_fresh_record() {
        let (mut state, mut interaction) = active_state();
        open(&mut state, &mut interaction, AppId::Skills);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RepositionWindow {
                app_id: AppId::Skills,
                x: 400,
                y: 300,
            },
        )
        .expect("move");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: AppId::Skills,
            },
        )
        .expect("close");
        assert_eq!(state.focus, None);

        open(&mut state, &mut interaction, AppId::Skills);
        let skills = state.window(AppId::Skills).expect("skills");
        assert!(!skills.minimized && !skills.maximized);
        assert_eq!((skills.rect.x, skills.rect.y), (100, 50));
    }

    #[test]
    fn minimize_then_open_restores_with_params() {
        let (mut state, mut interaction) = active_state();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Browser,
                params: browser_params("https://threejs.org/"),
            },
        )
        .expect("open browser");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Browser,
            },
        )
        .expect("minimize");
        assert_eq!(state.active_app(), None);

        open(&mut state, &mut interaction, AppId::Browser);
        let browser = state.window(AppId::Browser).expect("browser");
        assert!(!browser.minimized);
        assert_eq!(browser.launch_params, browser_params("https://threejs.org/"));
        assert_eq!(state.active_app(), Some(AppId::Browser));
    }

    #[test]
    fn open_with_new_params_replaces_stored_params() {
        let (mut state, mut interaction) = active_state();
        for url in ["https://threejs.org/", "https://vitejs.dev/"] {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::OpenApp {
                    app_id: AppId::Browser,
                    params: browser_params(url),
                },
            )
            .expect("open browser");
        }
        assert_eq!(
            state
                .window(AppId::Browser)
                .and_then(|w| w.browser_params())
                .map(|p| p.initial_url.as_str()),
            Some("https://vitejs.dev/")
        );
    }

    #[test]
    fn mismatched_params_are_rejected() {
        let (mut state, mut interaction) = active_state();
        let before = state.clone();
        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::About,
                params: browser_params("https://vitejs.dev/"),
            },
        )
        .expect_err("about takes no params");
        assert_eq!(
            err,
            ReducerError::LaunchParamsRejected {
                app_id: AppId::About,
                expected: LaunchParamsShape::Empty,
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn focus_target_always_names_a_visible_window() {
        let (mut state, mut interaction) = active_state();
        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Contact);

        let actions = [
            DesktopAction::MinimizeWindow {
                app_id: AppId::Contact,
            },
            DesktopAction::FocusWindow {
                app_id: AppId::About,
            },
            DesktopAction::CloseWindow {
                app_id: AppId::About,
            },
            DesktopAction::ToggleMaximize {
                app_id: AppId::Contact,
            },
            DesktopAction::ClearFocus,
            DesktopAction::FocusWindow {
                app_id: AppId::Terminal,
            },
        ];
        for action in actions {
            reduce_desktop(&mut state, &mut interaction, action).expect("action");
            if let Some(id) = state.focus {
                let window = state.window(id).expect("focus target exists");
                assert!(!window.minimized);
            }
        }
        assert_eq!(state.focus, None);
    }

    #[test]
    fn focusing_focused_window_consumes_no_z_and_no_effect() {
        let (mut state, mut interaction) = active_state();
        open(&mut state, &mut interaction, AppId::About);
        let before = state.clone();
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: AppId::About,
            },
        )
        .expect("focus");
        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_maximize_restores_minimized_window() {
        let (mut state, mut interaction) = active_state();
        open(&mut state, &mut interaction, AppId::Experience);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Experience,
            },
        )
        .expect("minimize");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Experience,
            },
        )
        .expect("maximize");
        let window = state.window(AppId::Experience).expect("experience");
        assert!(window.maximized && !window.minimized);
        assert_eq!(state.active_app(), Some(AppId::Experience));
    }

    #[test]
    fn drag_moves_window_and_end_keeps_position() {
        let (mut state, mut interaction) = active_state();
        open(&mut state, &mut interaction, AppId::Contact);
        let z_before = state.window(AppId::Contact).expect("contact").z_index;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Contact,
                pointer: PointerPosition { x: 150, y: 60 },
            },
        )
        .expect("begin");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 190, y: 100 },
            },
        )
        .expect("update");
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).expect("end");

        let contact = state.window(AppId::Contact).expect("contact");
        assert_eq!((contact.rect.x, contact.rect.y), (140, 90));
        assert_eq!(contact.z_index, z_before);
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn resize_session_clamps_to_minimum() {
        let (mut state, mut interaction) = active_state();
        open(&mut state, &mut interaction, AppId::Terminal);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: AppId::Terminal,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 800, y: 550 },
            },
        )
        .expect("begin");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 100, y: 100 },
            },
        )
        .expect("update");
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndResize).expect("end");

        let terminal = state.window(AppId::Terminal).expect("terminal");
        assert_eq!(
            (terminal.rect.w, terminal.rect.h),
            (window_manager::MIN_WINDOW_WIDTH, window_manager::MIN_WINDOW_HEIGHT)
        );
    }

    #[test]
    fn refresh_desktop_minimizes_everything_and_keeps_count() {
        let (mut state, mut interaction) = active_state();
        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Projects);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ShowContextMenu {
                x: 10,
                y: 10,
                viewport: Viewport { w: 1024, h: 768 },
            },
        )
        .expect("menu");
        assert_eq!(
            state.context_menu,
            Some(ContextMenuPlacement { left: 10, top: 10 })
        );

        reduce_desktop(&mut state, &mut interaction, DesktopAction::RefreshDesktop)
            .expect("refresh");
        assert_eq!(state.windows.len(), 2);
        assert!(state.windows.iter().all(|w| w.minimized));
        assert_eq!(state.focus, None);
        assert_eq!(state.context_menu, None);
    }

    #[test]
    fn window_actions_require_active_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::About,
                params: None,
            },
        )
        .expect_err("booting");
        assert_eq!(err, ReducerError::SessionInactive(SessionMode::Booting));
        assert!(state.windows.is_empty());
    }

    #[test]
    fn logout_then_login_starts_empty() {
        let (mut state, mut interaction) = active_state();
        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Terminal);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::About,
            },
        )
        .expect("minimize");
        assert_eq!(state.focus, Some(AppId::Terminal));

        reduce_desktop(&mut state, &mut interaction, DesktopAction::Logout).expect("logout");
        assert!(state.windows.is_empty());
        reduce_desktop(&mut state, &mut interaction, DesktopAction::Login).expect("login");

        assert!(state.windows.is_empty());
        assert_eq!(state.focus, None);
        open(&mut state, &mut interaction, AppId::Skills);
        assert_eq!(
            state.window(AppId::Skills).map(|w| w.z_index),
            Some(crate::model::BASE_Z_INDEX + 1)
        );
    }

    #[test]
    fn queued_deep_link_opens_on_first_login_only() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::QueueDeepLink {
                deep_link: DeepLinkState::parse("projects,terminal"),
            },
        )
        .expect("queue");
        reduce_desktop(&mut state, &mut interaction, DesktopAction::FinishBoot).expect("boot");
        let effects =
            reduce_desktop(&mut state, &mut interaction, DesktopAction::Login).expect("login");

        assert_eq!(state.open_window_ids(), vec![AppId::Projects, AppId::Terminal]);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(AppId::Terminal)]);

        reduce_desktop(&mut state, &mut interaction, DesktopAction::Logout).expect("logout");
        reduce_desktop(&mut state, &mut interaction, DesktopAction::Login).expect("login");
        assert!(state.windows.is_empty());
    }

    #[test]
    fn host_requests_become_effects() {
        let (mut state, mut interaction) = active_state();
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CopyText {
                text: "contacto@azulestudio.com".to_string(),
            },
        )
        .expect("copy");
        assert_eq!(
            effects,
            vec![RuntimeEffect::CopyToClipboard(
                "contacto@azulestudio.com".to_string()
            )]
        );
    }
}
