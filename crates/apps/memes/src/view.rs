use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use desktop_app_contract::{AppMountContext, WindowContext};
use leptos::*;
use platform_host::ListenerSet;

use crate::feed::{fetch_meme, Meme, XorShiftPicker};

#[component]
/// Memes window contents.
pub fn MemesView(
    /// Runtime-provided window context.
    context: AppMountContext,
    /// Refresh requests broadcast by the owning application.
    refresh_requests: ListenerSet<WindowContext>,
) -> impl IntoView {
    let meme = create_rw_signal(None::<Meme>);
    let loading = create_rw_signal(false);
    let notice = create_rw_signal(None::<&'static str>);
    let picker = Rc::new(RefCell::new(XorShiftPicker::from_entropy()));
    let alive = Rc::new(Cell::new(true));

    let http = context.apis.http.clone();
    let fetch = {
        let alive = alive.clone();
        move || {
            if loading.get_untracked() {
                return;
            }
            loading.set(true);
            notice.set(None);
            let http = http.clone();
            let picker = picker.clone();
            let alive = alive.clone();
            spawn_local(async move {
                let mut local_picker = picker.borrow().clone();
                let load = fetch_meme(http.as_ref(), &mut local_picker).await;
                *picker.borrow_mut() = local_picker;
                if !alive.get() {
                    return;
                }
                meme.set(Some(load.meme));
                notice.set(load.notice);
                loading.set(false);
            });
        }
    };

    let own_window = context.window;
    let refresh_subscription = {
        let fetch = fetch.clone();
        refresh_requests.subscribe(move |target: &WindowContext| {
            if *target == own_window {
                fetch();
            }
        })
    };
    on_cleanup(move || {
        alive.set(false);
        refresh_subscription.unsubscribe();
    });

    fetch();

    view! {
        <div class="memes-app">
            <h1>"Random Meme Generator"</h1>
            <div class="memes-controls">
                <button
                    class="system-button"
                    disabled=move || loading.get()
                    on:click={
                        let fetch = fetch.clone();
                        move |_| fetch()
                    }
                >
                    {move || if loading.get() { "Fetching..." } else { "New Meme" }}
                </button>
                <span class="memes-status">
                    {move || {
                        if loading.get() {
                            "Loading meme...".into_view()
                        } else if let Some(text) = notice.get() {
                            view! { <span class="memes-error">{text}</span> }.into_view()
                        } else if meme.with(Option::is_none) {
                            "Click the button to fetch a meme".into_view()
                        } else {
                            ().into_view()
                        }
                    }}
                </span>
            </div>
            <div class="memes-canvas">
                {move || match meme.get() {
                    Some(Meme { image, caption, source, .. }) => {
                        let alt = if caption.is_empty() {
                            "Random meme".to_string()
                        } else {
                            caption.clone()
                        };
                        let caption = (!caption.is_empty())
                            .then(|| view! { <div class="meme-caption">{caption}</div> });
                        view! {
                            <img class="meme-image" src=image alt=alt draggable="false" />
                            {caption}
                            <div class="meme-meta">{source}</div>
                        }
                        .into_view()
                    }
                    None if !loading.get() => {
                        view! { <p>"Ready when you are! Press \u{201c}New Meme\u{201d}."</p> }.into_view()
                    }
                    None => ().into_view(),
                }}
            </div>
        </div>
    }
}
