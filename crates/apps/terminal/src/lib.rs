//! Terminal desktop app UI component backed by the [`system_shell`] command table.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{window_primary_input_dom_id, AppHost, AppId, AppMountContext};
use leptos::ev::KeyboardEvent;
use leptos::*;
use platform_host::local_datetime_string;
use system_shell::{InputHistory, ShellEffect, ShellEnvironment, Transcript, PROMPT};
use system_ui::{TerminalLine, TerminalPrompt, TerminalSurface, TerminalTranscript, TextField};

/// `date` reads the host clock.
struct HostClock;

impl ShellEnvironment for HostClock {
    fn now(&self) -> String {
        local_datetime_string()
    }
}

/// Resolves an `open` effect to a registered app. The shell's allow-list and the app ids are
/// kept in sync by tests, so `None` only shows up if they drift.
fn app_to_open(effect: &ShellEffect) -> Option<AppId> {
    match effect {
        ShellEffect::OpenApp(key) => AppId::parse(key),
        ShellEffect::ClearTranscript => None,
    }
}

fn run_effect(effect: ShellEffect, host: AppHost) {
    match app_to_open(&effect) {
        Some(app_id) => host.open_app(app_id, None),
        None => {
            if let ShellEffect::OpenApp(key) = effect {
                logging::warn!("terminal cannot open unregistered app `{key}`");
            }
        }
    }
}

#[component]
/// Terminal app window contents.
pub fn TerminalApp(
    /// Shell handle used by `open`.
    host: AppHost,
) -> impl IntoView {
    let transcript = create_rw_signal(Transcript::default());
    let history = store_value(InputHistory::default());
    let input = create_rw_signal(String::new());
    let input_ref = create_node_ref::<html::Input>();
    let surface_ref = create_node_ref::<html::Div>();

    // Keep the newest line in view.
    create_effect(move |_| {
        let rows = transcript.with(|transcript| transcript.lines().len());
        if rows == 0 {
            return;
        }
        if let Some(surface) = surface_ref.get() {
            surface.set_scroll_top(surface.scroll_height());
        }
    });

    let submit = move || {
        let line = input.get_untracked();
        input.set(String::new());
        history.update_value(|history| history.record(&line));

        let mut effect = None;
        transcript.update(|transcript| effect = transcript.submit(&line, &HostClock));
        if let Some(effect) = effect {
            run_effect(effect, host);
        }
    };

    let on_keydown = Callback::new(move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            submit();
        }
        "ArrowUp" => {
            ev.prevent_default();
            let recalled = history
                .try_update_value(|history| history.previous().map(str::to_string))
                .flatten();
            if let Some(line) = recalled {
                input.set(line);
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            let recalled = history
                .try_update_value(|history| history.next().map(str::to_string))
                .flatten();
            input.set(recalled.unwrap_or_default());
        }
        _ => {}
    });

    let focus_input = Callback::new(move |_| {
        if let Some(field) = input_ref.get_untracked() {
            let _ = field.focus();
        }
    });

    view! {
        <TerminalSurface layout_class="app-terminal" node_ref=surface_ref on_click=focus_input>
            <TerminalTranscript>
                {move || {
                    transcript.with(|transcript| {
                        transcript
                            .lines()
                            .iter()
                            .map(|line| view! { <TerminalLine text=line.clone() /> })
                            .collect_view()
                    })
                }}
            </TerminalTranscript>
            <TerminalPrompt prompt=PROMPT>
                <TextField
                    id=window_primary_input_dom_id(AppId::Terminal)
                    layout_class="app-terminal-input"
                    aria_label="Entrada de terminal"
                    autofocus=true
                    node_ref=input_ref
                    value=Signal::derive(move || input.get())
                    on_input=Callback::new(move |value| input.set(value))
                    on_keydown
                />
            </TerminalPrompt>
        </TerminalSurface>
    }
}

/// Mounts the terminal window contents.
pub fn mount(context: AppMountContext) -> View {
    view! { <TerminalApp host=context.host /> }.into_view()
}
