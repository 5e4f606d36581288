use super::*;
use crate::{
    apps,
    model::{AppId, ResizeEdge, WindowRecord},
};
use system_ui::{
    ResizeHandle, WindowBody, WindowControlButton, WindowControlTone, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &PointerEvent) {}

fn is_primary_press(ev: &PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn window_style(window: &WindowRecord) -> String {
    let mut style = if window.maximized {
        format!("left:0;top:0;width:100%;height:100%;z-index:{};", window.z_index)
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            window.rect.x, window.rect.y, window.rect.w, window.rect.h, window.z_index
        )
    };
    // Minimized windows stay mounted so app state survives a restore.
    if window.minimized {
        style.push_str("visibility:hidden;pointer-events:none;");
    }
    style
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let descriptor = apps::app_descriptor(app_id);

    let record = create_memo(move |_| runtime.state.get().window(app_id).cloned());
    let launch_params = create_memo(move |_| record.get().and_then(|w| w.launch_params));
    let focused = Signal::derive(move || runtime.state.get().is_active(app_id));
    let maximized = Signal::derive(move || record.get().map(|w| w.maximized).unwrap_or(false));
    let style = Signal::derive(move || record.get().map(|w| window_style(&w)).unwrap_or_default());

    let focus = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::FocusWindow { app_id });
    });
    let close = Callback::new(move |_| runtime.dispatch_action(DesktopAction::CloseWindow { app_id }));
    let minimize =
        Callback::new(move |_| runtime.dispatch_action(DesktopAction::MinimizeWindow { app_id }));
    let toggle_maximize =
        Callback::new(move |_| runtime.dispatch_action(DesktopAction::ToggleMaximize { app_id }));
    let titlebar_double_click = Callback::new(move |ev: MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::ToggleMaximize { app_id });
    });
    let begin_move = Callback::new(move |ev: PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    let host = runtime.app_host();
    let contents = move || apps::render_window_contents(app_id, launch_params.get(), host);

    view! {
        <WindowFrame
            style
            aria_label=descriptor.title.to_string()
            focused
            maximized
            light_chrome={app_id == AppId::Browser}
            on_mousedown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move on_dblclick=titlebar_double_click>
                <WindowControls>
                    <WindowControlButton
                        tone=WindowControlTone::Close
                        aria_label="Cerrar"
                        on_click=close
                    />
                    <WindowControlButton
                        tone=WindowControlTone::Minimize
                        aria_label="Minimizar"
                        on_click=minimize
                    />
                    <WindowControlButton
                        tone=WindowControlTone::Zoom
                        aria_label=Signal::derive(move || {
                            let label = if maximized.get() { "Restaurar" } else { "Maximizar" };
                            label.to_string()
                        })
                        on_click=toggle_maximize
                    />
                </WindowControls>
                <WindowTitle>{descriptor.title}</WindowTitle>
            </WindowTitleBar>
            <WindowBody>{contents}</WindowBody>
            <Show when=move || !maximized.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle app_id edge /> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}

#[component]
fn WindowResizeHandle(app_id: AppId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            app_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=edge.class_suffix() on_pointerdown /> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRect;

    fn record() -> WindowRecord {
        WindowRecord {
            app_id: AppId::About,
            z_index: 12,
            minimized: false,
            maximized: false,
            rect: WindowRect::cascade(1),
            launch_params: None,
        }
    }

    #[test]
    fn style_places_window_at_its_rect() {
        assert_eq!(
            window_style(&record()),
            "left:130px;top:80px;width:700px;height:500px;z-index:12;"
        );
    }

    #[test]
    fn maximized_style_fills_the_layer_and_hides_when_minimized() {
        let mut window = record();
        window.maximized = true;
        window.minimized = true;
        assert_eq!(
            window_style(&window),
            "left:0;top:0;width:100%;height:100%;z-index:12;visibility:hidden;pointer-events:none;"
        );
    }
}
