use std::time::Duration;

use platform_host::LocalClockSnapshot;

use super::*;
use crate::{apps, config::ShellTimings, model::DesktopState};
use system_ui::{
    Icon, IconName, IconSize, MenuBar, MenuBarSection, MenuItem, MenuSeparator, MenuSurface,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppleMenuRow {
    Item(&'static str),
    Separator,
    Logout,
}

const APPLE_MENU: [AppleMenuRow; 14] = [
    AppleMenuRow::Item("Acerca de esta Mac"),
    AppleMenuRow::Separator,
    AppleMenuRow::Item("Ajustes del Sistema..."),
    AppleMenuRow::Item("App Store..."),
    AppleMenuRow::Separator,
    AppleMenuRow::Item("Ítems recientes"),
    AppleMenuRow::Separator,
    AppleMenuRow::Item("Forzar salida..."),
    AppleMenuRow::Separator,
    AppleMenuRow::Item("Reposo"),
    AppleMenuRow::Item("Reiniciar..."),
    AppleMenuRow::Item("Apagar equipo..."),
    AppleMenuRow::Separator,
    AppleMenuRow::Logout,
];

const LOGOUT_LABEL: &str = "Cerrar sesión de Azul Estudio...";

// Decorative only.
const FAKE_MENUS: [&str; 5] = ["Archivo", "Edición", "Ver", "Ventana", "Ayuda"];

/// Menu bar title: the active window's app, or the idle title.
fn active_title(state: &DesktopState) -> &'static str {
    state
        .active_app()
        .map(|app_id| apps::app_descriptor(app_id).title)
        .unwrap_or(config::IDLE_APP_TITLE)
}

#[component]
pub(super) fn StatusBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let menu_open = create_rw_signal(false);
    let menu_ref = create_node_ref::<html::Div>();
    let clock = create_rw_signal(LocalClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(LocalClockSnapshot::now()),
        Duration::from_millis(ShellTimings::DEFAULT.clock_tick_ms),
    ) {
        on_cleanup(move || interval.clear());
    }

    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        if menu_open.get_untracked() && !event_within(&ev, menu_ref) {
            menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let title = Signal::derive(move || runtime.state.with(active_title));
    let logout = Callback::new(move |_| {
        menu_open.set(false);
        runtime.dispatch_action(DesktopAction::Logout);
    });

    view! {
        <MenuBar layout_class="desktop-status-bar">
            <MenuBarSection ui_slot="leading">
                <div class="status-apple" node_ref=menu_ref>
                    <button
                        type="button"
                        class="status-apple-button"
                        aria-label="Menú Apple"
                        aria-haspopup="menu"
                        aria-expanded=move || menu_open.get().to_string()
                        data-ui-selected=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <Icon icon=IconName::Apple size=IconSize::Sm />
                    </button>
                    <Show when=move || menu_open.get() fallback=|| ()>
                        <MenuSurface layout_class="status-apple-menu" aria_label="Menú Apple">
                            {APPLE_MENU
                                .into_iter()
                                .map(|row| match row {
                                    AppleMenuRow::Item(label) => {
                                        view! { <MenuItem>{label}</MenuItem> }.into_view()
                                    }
                                    AppleMenuRow::Separator => view! { <MenuSeparator /> }.into_view(),
                                    AppleMenuRow::Logout => {
                                        view! { <MenuItem on_click=logout>{LOGOUT_LABEL}</MenuItem> }
                                            .into_view()
                                    }
                                })
                                .collect_view()}
                        </MenuSurface>
                    </Show>
                </div>
                <span class="status-app-title">{move || title.get()}</span>
                <nav class="status-fake-menus" aria-hidden="true">
                    {FAKE_MENUS
                        .into_iter()
                        .map(|label| view! { <span>{label}</span> })
                        .collect_view()}
                </nav>
            </MenuBarSection>
            <MenuBarSection ui_slot="trailing">
                <span class="status-tray" aria-hidden="true">
                    <Icon icon=IconName::Battery size=IconSize::Sm />
                    <Icon icon=IconName::Wifi size=IconSize::Sm />
                    <Icon icon=IconName::Search size=IconSize::Xs />
                </span>
                <time class="status-clock">
                    <span class="status-date">{move || clock.get().short_date_es()}</span>
                    <span class="status-time">{move || clock.get().time_24h()}</span>
                </time>
            </MenuBarSection>
        </MenuBar>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{AppId, InteractionState},
        reducer::reduce_desktop,
    };

    #[test]
    fn apple_menu_ends_with_logout() {
        assert_eq!(APPLE_MENU.last(), Some(&AppleMenuRow::Logout));
        let items = APPLE_MENU
            .iter()
            .filter(|row| matches!(row, AppleMenuRow::Item(_)))
            .count();
        assert_eq!(items, 8);
    }

    #[test]
    fn title_follows_the_active_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert_eq!(active_title(&state), "Finder");

        for action in [
            DesktopAction::FinishBoot,
            DesktopAction::Login,
            DesktopAction::OpenApp {
                app_id: AppId::Skills,
                params: None,
            },
        ] {
            reduce_desktop(&mut state, &mut interaction, action).expect("action applies");
        }
        assert_eq!(active_title(&state), "Habilidades");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Skills,
            },
        )
        .expect("minimize");
        assert_eq!(active_title(&state), "Finder");
    }
}
