//! Simulated web browser window: an address bar over a sandboxed frame.
//!
//! Sites that refuse embedding are caught by a host denylist up front and by the frame's error
//! event after the fact; both show a panel offering to open the page outside the desktop.

pub mod navigation;

use std::time::Duration;

use desktop_app_contract::{AppHost, AppMountContext, LaunchParams};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use system_ui::{Button, ButtonVariant, Icon, IconButton, IconName, IconSize, TextField};

use crate::navigation::{
    hostname, PageState, DEFAULT_URL, IFRAME_SANDBOX, LOAD_DELAY_MS, REFRESH_DELAY_MS,
};

fn clear_timer(slot: StoredValue<Option<TimeoutHandle>>) {
    if let Some(handle) = slot.try_update_value(Option::take).flatten() {
        handle.clear();
    }
}

#[component]
/// Browser window contents.
pub fn BrowserApp(
    /// Address loaded when the window mounts.
    initial_url: String,
    /// Shell handle used to open blocked pages externally.
    host: AppHost,
) -> impl IntoView {
    let page = create_rw_signal(PageState::default());
    let load_timer = store_value(None::<TimeoutHandle>);
    let refresh_timer = store_value(None::<TimeoutHandle>);

    let schedule_loaded = move || {
        clear_timer(load_timer);
        match set_timeout_with_handle(
            move || page.update(PageState::finish_loading),
            Duration::from_millis(LOAD_DELAY_MS),
        ) {
            Ok(handle) => load_timer.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("browser load timer failed: {err:?}");
                page.update(PageState::finish_loading);
            }
        }
    };

    let load = move |url: String| {
        let mut started = false;
        page.update(|page| started = page.load(url));
        if started {
            schedule_loaded();
        } else {
            clear_timer(load_timer);
        }
    };

    let submit = move || {
        let mut started = false;
        page.update(|page| started = page.submit_address());
        if started {
            schedule_loaded();
        } else {
            clear_timer(load_timer);
        }
    };

    let refresh = Callback::new(move |_| {
        clear_timer(load_timer);
        clear_timer(refresh_timer);
        let mut target = String::new();
        page.update(|page| target = page.begin_refresh());
        match set_timeout_with_handle(
            move || load(target),
            Duration::from_millis(REFRESH_DELAY_MS),
        ) {
            Ok(handle) => refresh_timer.set_value(Some(handle)),
            Err(err) => logging::warn!("browser refresh timer failed: {err:?}"),
        }
    });

    load(initial_url);
    on_cleanup(move || {
        clear_timer(load_timer);
        clear_timer(refresh_timer);
    });

    let url = create_memo(move |_| page.with(|page| page.url.clone()));
    let blocked = create_memo(move |_| page.with(|page| page.blocked));
    let loading = create_memo(move |_| page.with(|page| page.loading));

    let open_outside = Callback::new(move |_| host.open_external_url(url.get_untracked()));

    view! {
        <div class="app-browser" data-ui-kind="browser">
            <div class="app-browser-toolbar">
                <IconButton icon=IconName::ArrowLeft aria_label="Atrás" disabled=true />
                <IconButton icon=IconName::ArrowRight aria_label="Adelante" disabled=true />
                <IconButton icon=IconName::RotateCw aria_label="Recargar" on_click=refresh />
                <form
                    class="app-browser-address"
                    on:submit=move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <Icon icon=IconName::Lock size=IconSize::Xs layout_class="app-browser-lock" />
                    <TextField
                        layout_class="app-browser-url"
                        aria_label="Dirección"
                        value=Signal::derive(move || page.with(|page| page.address.clone()))
                        on_input=Callback::new(move |value| page.update(|page| page.address = value))
                    />
                </form>
            </div>
            <div class="app-browser-viewport">
                <Show when=move || loading.get() fallback=|| ()>
                    <div class="app-browser-loading" role="status">
                        <Icon icon=IconName::Loader size=IconSize::Lg />
                        <span>"Cargando..."</span>
                    </div>
                </Show>
                <Show
                    when=move || blocked.get()
                    fallback=move || {
                        view! {
                            <iframe
                                class="app-browser-frame"
                                title="Simulated Browser"
                                sandbox=IFRAME_SANDBOX
                                src=move || url.get()
                                on:load=move |_| page.update(PageState::finish_loading)
                                on:error=move |_| page.update(PageState::frame_failed)
                            ></iframe>
                        }
                    }
                >
                    <div class="app-browser-blocked">
                        <Icon icon=IconName::AlertTriangle size=IconSize::Xl />
                        <h3>"No se puede mostrar la vista previa"</h3>
                        <p>
                            "El sitio web "
                            <strong>{move || url.with(|url| hostname(url).to_string())}</strong>
                            " no permite ser incrustado en otras aplicaciones por motivos de seguridad."
                        </p>
                        <Button
                            variant=ButtonVariant::Primary
                            trailing_icon=IconName::ExternalLink
                            on_click=open_outside
                        >
                            "Abrir en nueva pestaña"
                        </Button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Mounts the browser window contents at the launch address, or [`DEFAULT_URL`].
pub fn mount(context: AppMountContext) -> View {
    let initial_url = context
        .launch_params
        .as_ref()
        .and_then(LaunchParams::as_browser)
        .map(|params| params.initial_url.clone())
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    view! { <BrowserApp initial_url host=context.host /> }.into_view()
}
