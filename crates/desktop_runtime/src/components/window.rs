use desktop_app_contract::{ApplicationEvent, WindowContext, WindowHost};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{
    model::{WindowId, WindowView},
    runtime_context::WindowDrag,
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn window_style(record: &crate::model::WindowRecord) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        record.rect.x, record.rect.y, record.rect.w, record.rect.h, record.z_index
    )
}

#[component]
pub(super) fn DesktopWindow(window: WindowContext) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = WindowId::from_context(window);

    let record = Signal::derive(move || {
        runtime
            .windows
            .with(|windows| windows.iter().find(|w| w.id == window_id).cloned())
    });

    let focus = move |_| {
        let should_focus = record
            .get_untracked()
            .map(|w| !w.is_focused)
            .unwrap_or(false);
        if should_focus {
            runtime.compositor().focus(window);
        }
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime
            .manager()
            .dispatch_to_window(window, ApplicationEvent::Close);
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        let Some(current) = record.get_untracked() else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.drag.set(Some(WindowDrag {
            window,
            pointer_origin: pointer_from_pointer_event(&ev),
            window_origin: (current.rect.x, current.rect.y),
        }));
    };

    let class_name = move || {
        let focused = record.with(|w| w.as_ref().map(|w| w.is_focused).unwrap_or(false));
        if focused {
            "desktop-window focused"
        } else {
            "desktop-window"
        }
    };
    let title = move || record.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default());

    view! {
        <section
            class=class_name
            style=move || record.with(|w| w.as_ref().map(window_style).unwrap_or_default())
            role="dialog"
            aria-label=title
            on:pointerdown=focus
        >
            <header class="titlebar" on:pointerdown=begin_move>
                <span class="titlebar-title">{title}</span>
                <button
                    class="titlebar-close"
                    aria-label="Close window"
                    on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                    on:click=close
                >
                    "×"
                </button>
            </header>
            <div class="window-body">
                <WindowBody window=window />
            </div>
        </section>
    }
}

#[component]
fn WindowBody(window: WindowContext) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = WindowId::from_context(window);

    // Position and focus changes must not remount the application view.
    let view_state = create_memo(move |_| {
        runtime.windows.with(|windows| {
            windows
                .iter()
                .find(|w| w.id == window_id)
                .map(|w| w.view.clone())
        })
    });

    move || match view_state.get() {
        Some(WindowView::Ready(module)) => match runtime.compositor().window(window) {
            Some(record) => {
                let context = runtime.manager().mount_context(&record);
                untrack(move || module.mount(context))
            }
            None => ().into_view(),
        },
        Some(WindowView::Failed(err)) => view! {
            <div class="window-load-failed" role="alert">
                <p>"This window could not be loaded."</p>
                <p class="window-load-error">{err}</p>
            </div>
        }
        .into_view(),
        Some(WindowView::Loading) => view! {
            <div class="window-loading" aria-busy="true">"Loading..."</div>
        }
        .into_view(),
        None => ().into_view(),
    }
}
