use super::*;

#[component]
/// Root desktop shell primitive.
///
/// `on_pointerup` also fires for `pointercancel` so drags always end.
pub fn DesktopRoot(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional)] on_contextmenu: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointermove: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    let pointer_end = move |ev: PointerEvent| {
        if let Some(on_pointerup) = on_pointerup.as_ref() {
            on_pointerup.call(ev);
        }
    };
    view! {
        <div
            class=merge_layout_class("desktop-shell", layout_class)
            style=move || style.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:contextmenu=move |ev| {
                if let Some(on_contextmenu) = on_contextmenu.as_ref() {
                    on_contextmenu.call(ev);
                }
            }
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
            on:pointermove=move |ev| {
                if let Some(on_pointermove) = on_pointermove.as_ref() {
                    on_pointermove.call(ev);
                }
            }
            on:pointerup=pointer_end
            on:pointercancel=pointer_end
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop wallpaper host. Clicks on the bare wallpaper are reported through `on_click`.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        ></div>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Top menu bar.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-menubar", layout_class)
            role="menubar"
            data-ui-primitive="true"
            data-ui-kind="menubar"
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Leading or trailing group inside [`MenuBar`].
pub fn MenuBarSection(
    ui_slot: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menubar-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menubar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom application dock.
pub fn Dock(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-dock", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="dock"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Dock launcher with a hover tooltip and a running indicator.
pub fn DockButton(
    icon: IconName,
    #[prop(into)] label: String,
    #[prop(optional)] accent: Option<&'static str>,
    #[prop(optional)] data_app: Option<&'static str>,
    #[prop(optional, into)] running: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let tooltip = label.clone();
    view! {
        <button
            type="button"
            class="ui-dock-button"
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="dock-button"
            data-ui-accent=accent
            data-app=data_app
            data-ui-running=move || bool_token(running.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span class="ui-dock-tooltip" role="tooltip">{tooltip}</span>
            <span class="ui-dock-tile">
                <Icon icon size=IconSize::Lg />
            </span>
            <span class="ui-dock-indicator" aria-hidden="true"></span>
        </button>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional, into)] light_chrome: bool,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-maximized=move || bool_token(maximized.get())
            data-ui-chrome=if light_chrome { "light" } else { "dark" }
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared window titlebar primitive.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Shared window title group.
pub fn WindowTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar controls row.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Traffic-light colour of a titlebar control.
pub enum WindowControlTone {
    /// Red close light.
    Close,
    /// Amber minimize light.
    Minimize,
    /// Green zoom light.
    Zoom,
}

impl WindowControlTone {
    fn token(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Zoom => "zoom",
        }
    }

    fn glyph(self) -> IconName {
        match self {
            Self::Close => IconName::Close,
            Self::Minimize => IconName::Minimize,
            Self::Zoom => IconName::Maximize,
        }
    }
}

#[component]
/// Traffic-light titlebar control. The glyph only shows while the control group is hovered.
pub fn WindowControlButton(
    tone: WindowControlTone,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-tone=tone.token()
            on:pointerdown=move |ev: PointerEvent| ev.stop_propagation()
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon=tone.glyph() size=IconSize::Xs />
        </button>
    }
}

#[component]
/// Shared window body primitive.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared resize handle primitive.
pub fn ResizeHandle(
    edge: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        ></div>
    }
}
