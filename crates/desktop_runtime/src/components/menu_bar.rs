use desktop_app_contract::{ApplicationKey, MenuEntry, MenuItem};

use super::*;
use crate::model::{WindowId, WindowRecord};

/// Focused window and its owner; moves, resizes and view loads leave it unchanged.
fn focused_owner(windows: &[WindowRecord]) -> Option<(WindowId, ApplicationKey)> {
    windows
        .iter()
        .find(|window| window.is_focused)
        .map(|window| (window.id, window.owner.clone()))
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open_menu = create_rw_signal(None::<usize>);

    let focus = create_memo(move |_| runtime.windows.with(|windows| focused_owner(windows)));
    let entries = Signal::derive(move || {
        focus.track();
        untrack(move || runtime.manager().focused_menu_entries())
    });

    create_effect(move |_| {
        focus.track();
        open_menu.set(None);
    });

    view! {
        <nav class="menu-bar" aria-label="Application menu">
            <span class="menu-bar-brand" aria-hidden="true">"◆"</span>
            <ul class="menu-bar-entries" role="menubar">
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <MenuBarEntry index=index entry=entry open_menu=open_menu /> })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

#[component]
fn MenuBarEntry(index: usize, entry: MenuEntry, open_menu: RwSignal<Option<usize>>) -> impl IntoView {
    let is_open = move || open_menu.get() == Some(index);
    let toggle = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        open_menu.update(|open| {
            *open = if *open == Some(index) { None } else { Some(index) };
        });
    };
    let class_name = if entry.display_options.bold_text {
        "menu-bar-entry app-name"
    } else {
        "menu-bar-entry"
    };
    let items = entry.items;

    view! {
        <li class=class_name role="none">
            <button
                class="menu-bar-button"
                role="menuitem"
                aria-haspopup="true"
                aria-expanded=move || is_open().to_string()
                on:click=toggle
            >
                {entry.name}
            </button>
            <Show when=is_open fallback=|| ()>
                <ul class="menu-dropdown" role="menu">
                    {items
                        .clone()
                        .into_iter()
                        .map(|item| view! { <MenuBarItem item=item open_menu=open_menu /> })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}

#[component]
fn MenuBarItem(item: MenuItem, open_menu: RwSignal<Option<usize>>) -> impl IntoView {
    let MenuItem { label, event } = item;
    let runtime = use_desktop_runtime();
    let activate = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        open_menu.set(None);
        if !runtime.manager().dispatch_to_focused(event.clone()) {
            logging::debug_warn!("menu item has no focused window to receive it");
        }
    };

    view! {
        <li role="none">
            <button class="menu-dropdown-item" role="menuitem" on:click=activate>
                {label}
            </button>
        </li>
    }
}
