//! Desktop shell UI composition and interaction surfaces.

mod boot;
mod dock;
mod lock;
mod menus;
mod status_bar;
mod window;

use leptos::ev::{MouseEvent, PointerEvent};
use leptos::*;

use self::{
    boot::BootScreen, dock::DesktopDock, lock::LockScreen, menus::DesktopContextMenu,
    status_bar::StatusBar, window::DesktopWindow,
};

use crate::{
    config,
    model::{PointerPosition, SessionMode},
    reducer::DesktopAction,
};
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the screen for the current session mode: boot animation, lock screen, or desktop.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let session = create_memo(move |_| runtime.state.get().session);

    view! {
        <div
            id="desktop-stage"
            class="desktop-stage"
            style=config::wallpaper_style()
            data-ui-session=move || session.get().as_str()
        >
            {move || match session.get() {
                SessionMode::Booting => view! { <BootScreen /> }.into_view(),
                SessionMode::Locked => view! { <LockScreen /> }.into_view(),
                SessionMode::Active => view! { <DesktopSurface /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn DesktopSurface() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointermove = Callback::new(move |ev: PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    });
    let on_pointerup = Callback::new(move |_| end_active_pointer_interaction(runtime));
    let on_contextmenu = Callback::new(move |ev: MouseEvent| {
        ev.prevent_default();
        let viewport = runtime.host.with_value(|host| host.viewport());
        runtime.dispatch_action(DesktopAction::ShowContextMenu {
            x: ev.client_x(),
            y: ev.client_y(),
            viewport,
        });
    });
    let on_backdrop_click = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::ClearFocus);
        runtime.dispatch_action(DesktopAction::HideContextMenu);
    });

    view! {
        <DesktopRoot on_contextmenu on_pointermove on_pointerup>
            <StatusBar />
            <DesktopBackdrop on_click=on_backdrop_click />
            <DesktopWindowLayer>
                <For each=move || state.get().open_window_ids() key=|app_id| *app_id let:app_id>
                    <DesktopWindow app_id />
                </For>
            </DesktopWindowLayer>
            <DesktopContextMenu />
            <DesktopDock />
        </DesktopRoot>
    }
}

fn pointer_from_pointer_event(ev: &PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

/// Whether a pointer event landed inside the element behind `node_ref`.
#[cfg(target_arch = "wasm32")]
fn event_within(ev: &MouseEvent, node_ref: NodeRef<html::Div>) -> bool {
    use wasm_bindgen::JsCast;

    let Some(container) = node_ref.get_untracked() else {
        return false;
    };
    let target = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
    container.contains(target.as_ref())
}

#[cfg(not(target_arch = "wasm32"))]
fn event_within(_: &MouseEvent, _: NodeRef<html::Div>) -> bool {
    false
}
