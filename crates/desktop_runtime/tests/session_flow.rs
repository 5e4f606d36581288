use desktop_runtime::{
    reduce_desktop, AppId, BrowserLaunchParams, DeepLinkState, DesktopAction, DesktopState,
    InteractionState, LaunchParams, PointerPosition, ReducerError, RuntimeEffect, SessionMode,
    Viewport, BASE_Z_INDEX,
};
use pretty_assertions::assert_eq;

struct Session {
    state: DesktopState,
    interaction: InteractionState,
}

impl Session {
    fn booted() -> Self {
        let mut session = Self {
            state: DesktopState::default(),
            interaction: InteractionState::default(),
        };
        session.apply(DesktopAction::FinishBoot);
        session
    }

    fn active() -> Self {
        let mut session = Self::booted();
        session.apply(DesktopAction::Login);
        session
    }

    fn try_apply(&mut self, action: DesktopAction) -> Result<Vec<RuntimeEffect>, ReducerError> {
        reduce_desktop(&mut self.state, &mut self.interaction, action)
    }

    fn apply(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        self.try_apply(action).expect("action applies")
    }

    fn open(&mut self, app_id: AppId) -> Vec<RuntimeEffect> {
        self.apply(DesktopAction::OpenApp {
            app_id,
            params: None,
        })
    }

    fn assert_focus_is_live(&self) {
        if let Some(app_id) = self.state.focus {
            let window = self.state.window(app_id).expect("focus names a live window");
            assert!(!window.minimized, "focus target {app_id} is minimized");
        }
    }
}

#[test]
fn boot_lock_and_login_walk_the_session_modes() {
    let mut session = Session {
        state: DesktopState::default(),
        interaction: InteractionState::default(),
    };
    assert_eq!(session.state.session, SessionMode::Booting);
    assert_eq!(
        session.try_apply(DesktopAction::Login),
        Err(ReducerError::InvalidSessionTransition {
            from: SessionMode::Booting,
            to: SessionMode::Active,
        })
    );

    session.apply(DesktopAction::FinishBoot);
    assert_eq!(session.state.session, SessionMode::Locked);
    assert_eq!(
        session.try_apply(DesktopAction::OpenApp {
            app_id: AppId::About,
            params: None,
        }),
        Err(ReducerError::SessionInactive(SessionMode::Locked))
    );

    session.apply(DesktopAction::Login);
    assert_eq!(session.state.session, SessionMode::Active);
}

#[test]
fn dock_opens_terminal_and_focuses_its_input() {
    let mut session = Session::active();
    let effects = session.open(AppId::Terminal);

    assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(AppId::Terminal)]);
    assert_eq!(session.state.active_app(), Some(AppId::Terminal));
    assert!(session.state.is_running_visible(AppId::Terminal));
}

#[test]
fn project_card_opens_browser_and_replaces_its_address() {
    let mut session = Session::active();
    session.open(AppId::Projects);
    for url in ["https://vitejs.dev/", "https://threejs.org/"] {
        session.apply(DesktopAction::OpenApp {
            app_id: AppId::Browser,
            params: Some(LaunchParams::Browser(BrowserLaunchParams::new(url))),
        });
    }

    let browser = session.state.window(AppId::Browser).expect("browser window");
    assert_eq!(
        browser.browser_params().map(|params| params.initial_url.as_str()),
        Some("https://threejs.org/")
    );
    assert_eq!(session.state.windows.len(), 2);
    assert_eq!(
        session.state.topmost_visible().map(|w| w.app_id),
        Some(AppId::Browser)
    );
}

#[test]
fn browser_params_are_rejected_by_portfolio_panels() {
    let mut session = Session::active();
    let before = session.state.clone();
    let result = session.try_apply(DesktopAction::OpenApp {
        app_id: AppId::Contact,
        params: Some(LaunchParams::Browser(BrowserLaunchParams::new(
            "https://github.com",
        ))),
    });

    assert!(matches!(
        result,
        Err(ReducerError::LaunchParamsRejected {
            app_id: AppId::Contact,
            ..
        })
    ));
    assert_eq!(session.state, before);
}

#[test]
fn mixed_window_operations_keep_focus_on_a_live_window() {
    let mut session = Session::active();
    let script = [
        DesktopAction::OpenApp {
            app_id: AppId::About,
            params: None,
        },
        DesktopAction::OpenApp {
            app_id: AppId::Skills,
            params: None,
        },
        DesktopAction::MinimizeWindow {
            app_id: AppId::Skills,
        },
        DesktopAction::FocusWindow {
            app_id: AppId::About,
        },
        DesktopAction::ToggleMaximize {
            app_id: AppId::Skills,
        },
        DesktopAction::CloseWindow {
            app_id: AppId::Skills,
        },
        DesktopAction::ClearFocus,
        DesktopAction::OpenApp {
            app_id: AppId::Contact,
            params: None,
        },
        DesktopAction::RefreshDesktop,
        DesktopAction::OpenApp {
            app_id: AppId::About,
            params: None,
        },
    ];

    for action in script {
        session.apply(action);
        session.assert_focus_is_live();
    }
    assert_eq!(session.state.open_window_ids(), vec![AppId::About, AppId::Contact]);
    assert_eq!(session.state.active_app(), Some(AppId::About));
}

#[test]
fn dragging_a_title_bar_moves_the_window() {
    let mut session = Session::active();
    session.open(AppId::Experience);
    let start = session.state.window(AppId::Experience).expect("window").rect;

    session.apply(DesktopAction::BeginMove {
        app_id: AppId::Experience,
        pointer: PointerPosition { x: 200, y: 70 },
    });
    session.apply(DesktopAction::UpdateMove {
        pointer: PointerPosition { x: 260, y: 110 },
    });
    session.apply(DesktopAction::EndMove);

    let rect = session.state.window(AppId::Experience).expect("window").rect;
    assert_eq!((rect.x, rect.y), (start.x + 60, start.y + 40));
    assert_eq!(session.interaction, InteractionState::default());
}

#[test]
fn context_menu_clean_desktop_minimizes_everything() {
    let mut session = Session::active();
    session.open(AppId::About);
    session.open(AppId::Terminal);
    session.apply(DesktopAction::ShowContextMenu {
        x: 1200,
        y: 100,
        viewport: Viewport { w: 1280, h: 800 },
    });
    assert_eq!(session.state.context_menu.map(|menu| menu.left), Some(1000));

    session.apply(DesktopAction::RefreshDesktop);
    assert_eq!(session.state.windows.len(), 2);
    assert!(session.state.windows.iter().all(|w| w.minimized));
    assert_eq!(session.state.focus, None);
    assert_eq!(session.state.context_menu, None);
}

#[test]
fn logout_discards_windows_and_restarts_z_order() {
    let mut session = Session::active();
    session.open(AppId::About);
    session.open(AppId::Projects);
    session.apply(DesktopAction::MinimizeWindow {
        app_id: AppId::About,
    });
    assert_eq!(
        session.state.window(AppId::About).map(|w| w.minimized),
        Some(true)
    );
    session.apply(DesktopAction::Logout);

    assert_eq!(session.state.session, SessionMode::Locked);
    assert!(session.state.windows.is_empty());
    assert_eq!(session.state.focus, None);

    session.apply(DesktopAction::Login);
    assert!(session.state.windows.is_empty());
    assert_eq!(session.state.focus, None);
    session.open(AppId::Contact);
    assert_eq!(
        session.state.window(AppId::Contact).map(|w| w.z_index),
        Some(BASE_Z_INDEX + 1)
    );
}

#[test]
fn deep_link_opens_apps_on_first_login_only() {
    let mut session = Session::booted();
    session.apply(DesktopAction::QueueDeepLink {
        deep_link: DeepLinkState::parse("about,terminal"),
    });
    let effects = session.apply(DesktopAction::Login);

    assert_eq!(session.state.open_window_ids(), vec![AppId::About, AppId::Terminal]);
    assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(AppId::Terminal)]);

    session.apply(DesktopAction::Logout);
    session.apply(DesktopAction::Login);
    assert!(session.state.windows.is_empty());
}
