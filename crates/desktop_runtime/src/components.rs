//! Desktop shell UI: launchers, the focused application's menu bar, and the window layer.

mod launchers;
mod menu_bar;
mod window;

use leptos::*;

use crate::runtime_context::{use_desktop_runtime, DesktopRuntimeContext};

use self::launchers::{DesktopIcons, Dock};
use self::menu_bar::MenuBar;
use self::window::DesktopWindow;

#[component]
/// Root desktop shell. Must be rendered inside [`crate::DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointermove = move |ev: web_sys::PointerEvent| {
        if let Some(drag) = runtime.drag.get_untracked() {
            let (x, y) = drag.position_for(pointer_from_pointer_event(&ev));
            runtime.compositor().move_window(drag.window, x, y);
        }
    };
    let on_pointerup = move |_| end_window_drag(runtime);
    let on_pointercancel = move |_| end_window_drag(runtime);

    view! {
        <div
            class="desktop-shell"
            on:pointermove=on_pointermove
            on:pointerup=on_pointerup
            on:pointercancel=on_pointercancel
        >
            <MenuBar />
            <main class="desktop-area">
                <DesktopIcons />
                <div class="window-layer">
                    <For
                        each=move || runtime.windows.get()
                        key=|record| record.id
                        let:record
                    >
                        <DesktopWindow window=record.context() />
                    </For>
                </div>
            </main>
            <Dock />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> (i32, i32) {
    (ev.client_x(), ev.client_y())
}

fn end_window_drag(runtime: DesktopRuntimeContext) {
    if runtime.drag.get_untracked().is_some() {
        runtime.drag.set(None);
    }
}
