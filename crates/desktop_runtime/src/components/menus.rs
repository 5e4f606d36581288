use super::*;
use crate::context_menu::ContextMenuEntry;
use system_ui::{MenuItem, MenuSeparator, MenuSurface};

fn action_for_entry(entry: ContextMenuEntry) -> DesktopAction {
    match entry {
        ContextMenuEntry::CleanDesktop => DesktopAction::RefreshDesktop,
        ContextMenuEntry::NewFolder | ContextMenuEntry::SortBy | ContextMenuEntry::GetInfo => {
            DesktopAction::HideContextMenu
        }
    }
}

#[component]
pub(super) fn DesktopContextMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let placement = create_memo(move |_| runtime.state.get().context_menu);
    let menu_ref = create_node_ref::<html::Div>();

    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        if placement.get_untracked().is_some() && !event_within(&ev, menu_ref) {
            runtime.dispatch_action(DesktopAction::HideContextMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let menu_style = Signal::derive(move || {
        placement
            .get()
            .map(|menu| format!("left:{}px;top:{}px;", menu.left, menu.top))
            .unwrap_or_default()
    });

    view! {
        <Show when=move || placement.get().is_some() fallback=|| ()>
            <MenuSurface
                layout_class="desktop-context-menu"
                aria_label="Menú del escritorio"
                style=menu_style
                node_ref=menu_ref
            >
                {ContextMenuEntry::ALL
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <MenuItem on_click=Callback::new(move |_| {
                                runtime.dispatch_action(action_for_entry(entry));
                            })>{entry.label()}</MenuItem>
                            {entry.ends_group().then(|| view! { <MenuSeparator /> })}
                        }
                    })
                    .collect_view()}
            </MenuSurface>
        </Show>
    }
}
