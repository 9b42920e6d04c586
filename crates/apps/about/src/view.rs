use desktop_app_contract::{AppMountContext, ApplicationEvent};
use leptos::*;
use serde_json::Value;

use crate::{
    content::{
        navigate, Navigation, SubView, ABOUT_PARAGRAPHS, CONTACT_EMAIL, CV_ICON, EXPERIENCE,
        OWNER_NAME, OWNER_TAGLINE, PORTRAIT_SRC, PROJECTS,
    },
    ABOUT_OPEN_CONTACT_EVENT,
};

#[component]
/// About window contents.
pub fn AboutView(
    /// Runtime-provided window context.
    context: AppMountContext,
) -> impl IntoView {
    let sub_view = create_rw_signal(SubView::from_args(&context.args));
    let needs_mobile_view = create_rw_signal(false);

    let screen = context.apis.screen.clone();
    let subscription =
        screen.subscribe(move |resolution| needs_mobile_view.set(resolution.is_mobile_device()));
    if let Some(resolution) = screen.get_resolution() {
        needs_mobile_view.set(resolution.is_mobile_device());
    }
    on_cleanup(move || subscription.unsubscribe());

    let change = Callback::new(move |target: SubView| match navigate(target) {
        Navigation::Show(view) => sub_view.set(view),
        Navigation::OpenContact => context.emit(ApplicationEvent::custom(
            ABOUT_OPEN_CONTACT_EVENT,
            Value::Null,
        )),
    });
    let mobile_class = move || if needs_mobile_view.get() { " mobile" } else { "" };

    view! {
        <div class="content-outer about-app">
            <div class="content">
                <div class="content-inner" data-subpage=move || sub_view.get().label()>
                    {move || match sub_view.get() {
                        SubView::Home => view! {
                            <div class="subpage-home">
                                <h1 class="home-title">{OWNER_NAME}</h1>
                                <h3 class="home-subtitle">{OWNER_TAGLINE}</h3>
                                <div class="home-button-container">
                                    {SubView::NAVIGATION
                                        .into_iter()
                                        .filter(|target| *target != SubView::Home)
                                        .map(|target| view! {
                                            <button
                                                class=move || format!("home-button system-button{}", mobile_class())
                                                on:click=move |_| change.call(target)
                                            >
                                                {target.label()}
                                            </button>
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                        .into_view(),
                        SubView::About => view! {
                            <SubViewNavigation change=change mobile=needs_mobile_view />
                            <div class="subpage-content" data-subpage-content="true">
                                <img class="portrait" src=PORTRAIT_SRC alt=format!("Portrait of {OWNER_NAME}") draggable="false" />
                                {ABOUT_PARAGRAPHS.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
                                <DownloadCv />
                                <ContactLine change=change />
                            </div>
                        }
                        .into_view(),
                        SubView::Experience => view! {
                            <SubViewNavigation change=change mobile=needs_mobile_view />
                            <div class="subpage-content" data-subpage-content="true">
                                <h1>"Experience"</h1>
                                {EXPERIENCE
                                    .iter()
                                    .map(|entry| view! {
                                        <h2>{entry.role}</h2>
                                        <p>{entry.period}</p>
                                        <ul>
                                            {entry.highlights.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                                        </ul>
                                    })
                                    .collect_view()}
                                <DownloadCv />
                                <ContactLine change=change />
                            </div>
                        }
                        .into_view(),
                        SubView::Projects | SubView::Contact => view! {
                            <SubViewNavigation change=change mobile=needs_mobile_view />
                            <div class="subpage-content" data-subpage-content="true">
                                <h1>"Projects"</h1>
                                {PROJECTS
                                    .iter()
                                    .map(|project| view! {
                                        <h3>{project.name}</h3>
                                        <p>{project.stack}</p>
                                        <ul>
                                            {project.highlights.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                                        </ul>
                                        <p>
                                            {match project.website {
                                                Some(url) => view! { <a href=url target="_blank" rel="noreferrer">"Website"</a> }.into_view(),
                                                None => "Live Demo (Coming Soon)".into_view(),
                                            }}
                                            " | "
                                            <a href=project.source target="_blank" rel="noreferrer">"Source Code"</a>
                                        </p>
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SubViewNavigation(change: Callback<SubView>, mobile: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="navigation">
            <div>
                {OWNER_NAME
                    .split(' ')
                    .map(|part| view! { <span class="logo-part">{part}</span> })
                    .collect_view()}
            </div>
            <div class=move || if mobile.get() { "navigation-button-container mobile" } else { "navigation-button-container" }>
                {SubView::NAVIGATION
                    .into_iter()
                    .map(|target| view! {
                        <button class="system-button" on:click=move |_| change.call(target)>
                            {target.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DownloadCv() -> impl IntoView {
    view! {
        <div class="download-cv">
            <hr class="about-hr" />
            <div class="download-content">
                <img src=CV_ICON alt="Printer" draggable="false" />
                <div>
                    <h2>"Download my CV"</h2>
                    <a target="_blank" href="/files/cv.pdf">"Click here to download"</a>
                </div>
            </div>
            <hr class="about-hr" />
        </div>
    }
}

#[component]
fn ContactLine(change: Callback<SubView>) -> impl IntoView {
    view! {
        <p>
            "If you have any questions or comments, please contact me via the "
            <a
                href="#contact"
                on:click=move |ev| {
                    ev.prevent_default();
                    change.call(SubView::Contact);
                }
            >
                "contact application"
            </a>
            " or shoot me an email at "
            <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
        </p>
    }
}
