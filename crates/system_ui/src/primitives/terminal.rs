use super::*;

#[component]
/// Shared terminal surface root.
pub fn TerminalSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-surface"
            node_ref=node_ref
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared terminal transcript container.
pub fn TerminalTranscript(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-transcript", layout_class)
            role="log"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="terminal-transcript"
        >
            {children()}
        </div>
    }
}

#[component]
/// One transcript row. Blank rows keep their height.
pub fn TerminalLine(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div
            class="ui-terminal-line"
            data-ui-primitive="true"
            data-ui-kind="terminal-line"
            data-ui-blank=bool_token(text.is_empty())
        >
            {text}
        </div>
    }
}

#[component]
/// Shared terminal prompt row.
pub fn TerminalPrompt(
    prompt: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-prompt", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-prompt"
        >
            <span class="ui-terminal-prompt-label">{prompt}</span>
            {children()}
        </div>
    }
}
