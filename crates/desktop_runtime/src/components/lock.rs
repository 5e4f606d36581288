use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;
use crate::config::{ShellTimings, OWNER_AVATAR_URL, OWNER_NAME, OWNER_TAGLINE};
use system_ui::{Button, ButtonSize, ButtonVariant, Icon, IconName, IconSize, TextField};

/// Any non-empty value unlocks; there is no credential check.
fn can_submit(password: &str, logging_in: bool) -> bool {
    !logging_in && !password.is_empty()
}

#[component]
pub(super) fn LockScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let password = create_rw_signal(String::new());
    let logging_in = create_rw_signal(false);
    let pending_login = store_value(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = pending_login.try_get_value().flatten() {
            handle.clear();
        }
    });

    let submit = move || {
        if !password.with_untracked(|value| can_submit(value, logging_in.get_untracked())) {
            return;
        }
        logging_in.set(true);
        match set_timeout_with_handle(
            move || runtime.dispatch_action(DesktopAction::Login),
            Duration::from_millis(ShellTimings::DEFAULT.login_delay_ms),
        ) {
            Ok(handle) => pending_login.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("login timer failed: {err:?}");
                runtime.dispatch_action(DesktopAction::Login);
            }
        }
    };
    let show_submit = Signal::derive(move || {
        password.with(|value| can_submit(value, logging_in.get()))
    });

    view! {
        <div class="lock-screen" data-ui-kind="lock-screen">
            <div class="lock-avatar">
                <img src=OWNER_AVATAR_URL alt="Avatar" />
            </div>
            <div class="lock-identity">
                <h1>{OWNER_NAME}</h1>
                <p>{OWNER_TAGLINE}</p>
            </div>
            <form
                class="lock-form"
                data-ui-busy=move || logging_in.get().to_string()
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <Icon icon=IconName::Lock size=IconSize::Xs layout_class="lock-field-icon" />
                <TextField
                    layout_class="lock-password"
                    input_type="password"
                    placeholder="Contraseña"
                    aria_label="Contraseña"
                    autofocus=true
                    value=Signal::derive(move || password.get())
                    disabled=Signal::derive(move || logging_in.get())
                    on_input=Callback::new(move |value| password.set(value))
                />
                <Show when=move || show_submit.get() fallback=|| ()>
                    <Button
                        layout_class="lock-submit"
                        button_type="submit"
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        aria_label="Entrar"
                    >
                        <Icon icon=IconName::ArrowRight size=IconSize::Xs />
                    </Button>
                </Show>
                <Show when=move || logging_in.get() fallback=|| ()>
                    <span class="lock-spinner" role="status" aria-label="Iniciando sesión">
                        <Icon icon=IconName::Loader size=IconSize::Sm />
                    </span>
                </Show>
            </form>
            <p class="lock-hint">"PRESIONA ENTER PARA ENTRAR"</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_needs_a_value_and_an_idle_form() {
        assert!(!can_submit("", false));
        assert!(can_submit("x", false));
        assert!(!can_submit("hunter2", true));
    }
}
