use desktop_app_contract::ApplicationConfig;
use serde_json::Value;

use super::*;
use crate::apps::{launcher_entries, LauncherSurface};

fn surface_entries(
    runtime: DesktopRuntimeContext,
    surface: LauncherSurface,
) -> Vec<&'static ApplicationConfig> {
    let manager = runtime.manager();
    runtime
        .catalog
        .with_value(|catalog| launcher_entries(&manager, catalog, surface))
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = surface_entries(runtime, LauncherSurface::Dock);

    view! {
        <nav class="dock" aria-label="Dock">
            {entries
                .into_iter()
                .map(|config| view! { <DockButton config=config /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn DockButton(config: &'static ApplicationConfig) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let key = config.key();
    let running = move || {
        runtime
            .windows
            .with(|windows| windows.iter().any(|w| w.owner == key))
    };
    let launch = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.manager().open(&config.launch_path(), Value::Null);
    };

    view! {
        <button
            class="dock-item"
            class:running=running
            title=config.display_name
            aria-label=format!("Open {}", config.display_name)
            on:click=launch
        >
            <img src=config.app_icon.src alt=config.app_icon.alt draggable="false" />
            <span class="dock-indicator" aria-hidden="true"></span>
        </button>
    }
}

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = surface_entries(runtime, LauncherSurface::Desktop);
    let selected = create_rw_signal(None::<&'static str>);

    view! {
        <div class="desktop-icons" on:click=move |_| selected.set(None)>
            {entries
                .into_iter()
                .map(|config| {
                    let launch_path = config.launch_path();
                    let select = move |ev: web_sys::MouseEvent| {
                        stop_mouse_event(&ev);
                        selected.set(Some(config.app_name));
                    };
                    let open = move |ev: web_sys::MouseEvent| {
                        stop_mouse_event(&ev);
                        runtime.manager().open(&launch_path, Value::Null);
                    };
                    view! {
                        <button
                            class="desktop-icon"
                            class:selected=move || selected.get() == Some(config.app_name)
                            on:click=select
                            on:dblclick=open
                        >
                            <img src=config.app_icon.src alt=config.app_icon.alt draggable="false" />
                            <span class="desktop-icon-label">{config.display_name}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
