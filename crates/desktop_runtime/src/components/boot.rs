use std::time::Duration;

use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};

use super::*;
use crate::config::{ShellTimings, BOOT_BACKGROUND, BOOT_MAX_STEP, OWNER_AVATAR_URL};
use system_ui::ProgressBar;

#[derive(Debug, Clone, Copy, PartialEq)]
enum BootTick {
    Advance(f64),
    Complete,
}

/// One progress step; `roll` is a uniform sample in `0.0..1.0`.
fn next_boot_tick(current: f64, roll: f64) -> BootTick {
    if current >= 100.0 {
        BootTick::Complete
    } else {
        BootTick::Advance((current + roll * BOOT_MAX_STEP).min(100.0))
    }
}

#[cfg(target_arch = "wasm32")]
fn random_roll() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
fn random_roll() -> f64 {
    0.5
}

#[component]
pub(super) fn BootScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let timings = ShellTimings::DEFAULT;
    let progress = create_rw_signal(0.0_f64);
    let ticker = store_value(None::<IntervalHandle>);
    let finish = store_value(None::<TimeoutHandle>);

    let tick = move || match next_boot_tick(progress.get_untracked(), random_roll()) {
        BootTick::Advance(value) => progress.set(value),
        BootTick::Complete => {
            if let Some(handle) = ticker.get_value() {
                handle.clear();
            }
            ticker.set_value(None);
            match set_timeout_with_handle(
                move || runtime.dispatch_action(DesktopAction::FinishBoot),
                Duration::from_millis(timings.boot_finish_pause_ms),
            ) {
                Ok(handle) => finish.set_value(Some(handle)),
                Err(err) => {
                    logging::warn!("boot finish timer failed: {err:?}");
                    runtime.dispatch_action(DesktopAction::FinishBoot);
                }
            }
        }
    };

    match set_interval_with_handle(tick, Duration::from_millis(timings.boot_tick_ms)) {
        Ok(handle) => ticker.set_value(Some(handle)),
        Err(err) => {
            logging::warn!("boot progress timer failed: {err:?}");
            runtime.dispatch_action(DesktopAction::FinishBoot);
        }
    }
    on_cleanup(move || {
        if let Some(handle) = ticker.try_get_value().flatten() {
            handle.clear();
        }
        if let Some(handle) = finish.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <div
            class="boot-screen"
            style=format!("background-color:{BOOT_BACKGROUND};")
            data-ui-kind="boot-screen"
        >
            <div class="boot-logo">
                <img src=OWNER_AVATAR_URL alt="Logo Azul Estudio" />
            </div>
            <h1 class="boot-title">"AZUL ESTUDIO"</h1>
            <ProgressBar layout_class="boot-progress" value=Signal::derive(move || progress.get()) />
        </div>
    }
}
