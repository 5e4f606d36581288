use super::*;
use crate::apps;
use system_ui::{Dock, DockButton};

#[component]
pub(super) fn DesktopDock() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <Dock layout_class="desktop-dock" aria_label="Dock">
            {apps::dock_apps()
                .into_iter()
                .map(|app| {
                    let app_id = app.app_id;
                    let running = Signal::derive(move || {
                        runtime.state.get().is_running_visible(app_id)
                    });
                    view! {
                        <DockButton
                            icon=app.icon
                            label=app.title
                            accent=app.accent
                            data_app=app_id.as_str()
                            running
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::OpenApp {
                                    app_id,
                                    params: None,
                                });
                            })
                        />
                    }
                })
                .collect_view()}
        </Dock>
    }
}
