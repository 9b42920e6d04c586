use std::{cell::Cell, rc::Rc};

use desktop_app_contract::AppMountContext;
use leptos::*;

use crate::{
    form::{ContactDraft, ContactSubmitError},
    store::DraftStore,
};

const OWNER_EMAIL: &str = "abeihhamani24@gmail.com";
const GITHUB_URL: &str = "https://github.com/SuperAbeih99";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/abeih";

#[derive(Debug, Clone, PartialEq, Eq)]
enum SubmitStatus {
    Editing,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    fn slot(self, draft: &mut ContactDraft) -> &mut String {
        match self {
            Self::Name => &mut draft.name,
            Self::Email => &mut draft.email,
            Self::Company => &mut draft.company,
            Self::Message => &mut draft.message,
        }
    }
}

#[component]
/// Contact window contents.
pub fn ContactView(
    /// Runtime-provided window context.
    context: AppMountContext,
    /// Instance-owned draft.
    draft: DraftStore,
) -> impl IntoView {
    let form = create_rw_signal(draft.snapshot());
    let status = create_rw_signal(SubmitStatus::Editing);
    let alive = Rc::new(Cell::new(true));

    let reset_subscription = draft.on_reset(move |cleared| {
        form.set(cleared.clone());
        status.set(SubmitStatus::Editing);
    });
    {
        let alive = alive.clone();
        on_cleanup(move || {
            alive.set(false);
            reset_subscription.unsubscribe();
        });
    }

    let edit = {
        let draft = draft.clone();
        move |field: Field, value: String| {
            draft.update(|stored| *field.slot(stored) = value.clone());
            form.update(|current| *field.slot(current) = value);
        }
    };

    let http = context.apis.http.clone();
    let on_submit = {
        let draft = draft.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            if status.get_untracked() == SubmitStatus::Sending {
                return;
            }
            let snapshot = form.get_untracked();
            if let Err(err) = snapshot.validate() {
                status.set(SubmitStatus::Failed(err.to_string()));
                return;
            }

            status.set(SubmitStatus::Sending);
            let http = http.clone();
            let draft = draft.clone();
            let alive = alive.clone();
            spawn_local(async move {
                let result = draft.submit(http.as_ref(), &snapshot).await;
                if !alive.get() {
                    return;
                }
                match result {
                    Ok(()) => status.set(SubmitStatus::Sent),
                    Err(err @ ContactSubmitError::Transport(_)) => {
                        logging::warn!("contact submission failed: {err:?}");
                        status.set(SubmitStatus::Failed(err.to_string()));
                    }
                    Err(err) => status.set(SubmitStatus::Failed(err.to_string())),
                }
            });
        }
    };

    let message_edit = edit.clone();

    let input = move |field: Field, label: &'static str, kind: &'static str, required: bool| {
        let edit = edit.clone();
        let value = move || {
            let mut current = form.get();
            field.slot(&mut current).clone()
        };
        view! {
            <label class="contact-field">
                <span>{label}{required.then_some(" *")}</span>
                <input
                    type=kind
                    prop:value=value
                    on:input=move |ev| edit(field, event_target_value(&ev))
                />
            </label>
        }
    };


    view! {
        <div class="contact-app">
            <h1>"Contact"</h1>
            <div class="contact-socials">
                <a href=GITHUB_URL target="_blank" rel="noreferrer">
                    <img src="/icons/github-icon.svg" alt="GitHub" draggable="false" />
                </a>
                <a href=LINKEDIN_URL target="_blank" rel="noreferrer">
                    <img src="/icons/linkedin-icon.svg" alt="LinkedIn" draggable="false" />
                </a>
            </div>
            <Show
                when=move || status.get() == SubmitStatus::Sent
                fallback=move || {
                    let input = input.clone();
                    let message_edit = message_edit.clone();
                    let on_submit = on_submit.clone();
                    view! {
                        <p class="contact-intro">
                            "Feel free to reach out about opportunities, projects, or just to say hi. "
                            "You can also email me directly at "
                            <a href=format!("mailto:{OWNER_EMAIL}")>{OWNER_EMAIL}</a>
                            "."
                        </p>
                        <form class="contact-form" on:submit=on_submit>
                            {input(Field::Name, "Name", "text", true)}
                            {input(Field::Email, "Email", "email", true)}
                            {input(Field::Company, "Company", "text", false)}
                            <label class="contact-field">
                                <span>"Message *"</span>
                                <textarea
                                    prop:value=move || form.get().message
                                    on:input=move |ev| message_edit(Field::Message, event_target_value(&ev))
                                ></textarea>
                            </label>
                            {move || match status.get() {
                                SubmitStatus::Failed(message) => {
                                    view! { <p class="contact-error" role="alert">{message}</p> }.into_view()
                                }
                                _ => ().into_view(),
                            }}
                            <button
                                class="system-button"
                                type="submit"
                                disabled=move || status.get() == SubmitStatus::Sending
                            >
                                {move || if status.get() == SubmitStatus::Sending { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    }
                }
            >
                <div class="contact-success">
                    <h2>"Thank you!"</h2>
                    <p>"Your message has been sent. I'll get back to you soon."</p>
                    <button class="system-button" on:click=move |_| status.set(SubmitStatus::Editing)>
                        "Send Another Message"
                    </button>
                </div>
            </Show>
        </div>
    }
}
