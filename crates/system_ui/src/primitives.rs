//! Shared structural, control, and typography primitives.
//!
//! Every primitive stamps `data-ui-primitive="true"` and a `data-ui-kind` token; styling keys off
//! those attributes, while `layout_class` is reserved for caller-side placement.

use leptos::ev::{KeyboardEvent, MouseEvent, PointerEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod overlays;
mod shell;
mod terminal;

pub use overlays::{MenuItem, MenuSeparator, MenuSurface};
pub use shell::{
    DesktopBackdrop, DesktopRoot, DesktopWindowLayer, Dock, DockButton, MenuBar, MenuBarSection,
    ResizeHandle, WindowBody, WindowControlButton, WindowControlTone, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
pub use terminal::{TerminalLine, TerminalPrompt, TerminalSurface, TerminalTranscript};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Borderless button for menus and toolbars.
    Quiet,
}

impl ButtonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Heading levels.
pub enum HeadingLevel {
    /// Panel title.
    #[default]
    H2,
    /// Section title.
    H3,
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[component]
/// Shared button primitive with standardized states and icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Square icon-only button used in toolbars.
pub fn IconButton(
    icon: IconName,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Sm />
        </button>
    }
}

#[component]
/// Single-line text input.
pub fn TextField(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autofocus: bool,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <input
            id=id
            class=merge_layout_class("ui-field", layout_class)
            type=input_type.unwrap_or("text")
            placeholder=placeholder
            aria-label=aria_label
            autofocus=autofocus
            autocomplete="off"
            spellcheck="false"
            node_ref=node_ref
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        />
    }
}

#[component]
/// Horizontal progress track. `value` is a percentage.
pub fn ProgressBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] accent: Option<&'static str>,
    #[prop(into)] value: MaybeSignal<f64>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-progress", layout_class)
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", value.get())
            data-ui-primitive="true"
            data-ui-kind="progress"
            data-ui-accent=accent
        >
            <div
                class="ui-progress-fill"
                style=move || format!("width: {:.1}%", value.get().clamp(0.0, 100.0))
            ></div>
        </div>
    }
}

#[component]
/// Raised content card.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] interactive: bool,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-interactive=bool_token(interactive)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </article>
    }
}

#[component]
/// Panel heading with an optional leading icon.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let icon = icon.map(|icon| view! { <Icon icon size=IconSize::Md /> });
    let class = merge_layout_class("ui-heading", layout_class);
    match level {
        HeadingLevel::H2 => view! {
            <h2 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-level="2">
                {icon}
                {children()}
            </h2>
        }
        .into_view(),
        HeadingLevel::H3 => view! {
            <h3 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-level="3">
                {icon}
                {children()}
            </h3>
        }
        .into_view(),
    }
}

#[component]
/// Small pill label.
pub fn Badge(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
        >
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("project-card")),
            "ui-card project-card"
        );
    }
}
