//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the bridge
//! from app-issued [`AppCommand`] values to reducer actions. UI composition stays in
//! [`crate::components`].

use desktop_app_contract::{AppCommand, AppHost};
use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::DesktopHostContext,
    model::{DeepLinkState, DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize state.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Handle given to mounted apps; their commands are translated into reducer actions.
    pub fn app_host(&self) -> AppHost {
        let dispatch = self.dispatch;
        AppHost::new(Callback::new(move |command| {
            dispatch.call(action_for_command(command));
        }))
    }
}

/// Maps an app command onto the reducer action that serves it.
pub fn action_for_command(command: AppCommand) -> DesktopAction {
    match command {
        AppCommand::OpenApp { app_id, params } => DesktopAction::OpenApp { app_id, params },
        AppCommand::OpenExternalUrl { url } => DesktopAction::OpenExternalUrl { url },
        AppCommand::CopyText { text } => DesktopAction::CopyText { text },
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Apps to open once the first login completes.
    #[prop(default = None)]
    deep_link: Option<DeepLinkState>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop.session != previous_desktop.session {
                    logging::log!(
                        "desktop session {} -> {}",
                        previous_desktop.session.as_str(),
                        desktop.session.as_str()
                    );
                }
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    logging::log!(
        "desktop runtime started on {} host",
        host.with_value(|host| host.host_strategy_name())
    );

    if let Some(deep_link) = deep_link.filter(|deep_link| !deep_link.is_empty()) {
        runtime.dispatch_action(DesktopAction::QueueDeepLink { deep_link });
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
