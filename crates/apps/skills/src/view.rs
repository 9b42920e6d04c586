use desktop_app_contract::AppMountContext;
use leptos::*;
use platform_host::ListenerSet;

use crate::catalog::{category, Skill, SKILL_CATEGORIES};

#[component]
/// Skills window contents.
///
/// A `{ "section": "<heading>" }` launch payload, or a later section request, scrolls that
/// section into view.
pub fn SkillsView(
    /// Runtime-provided window context.
    context: AppMountContext,
    /// Section requests broadcast by the owning application.
    section_requests: ListenerSet<&'static str>,
) -> impl IntoView {
    let target = create_rw_signal(
        context
            .args
            .get("section")
            .and_then(|raw| raw.as_str())
            .and_then(category)
            .map(|section| section.heading),
    );
    let subscription =
        section_requests.subscribe(move |heading: &&'static str| target.set(Some(*heading)));
    on_cleanup(move || subscription.unsubscribe());

    view! {
        <div class="content-outer">
            <div class="content">
                <div class="content-inner">
                    <div class="skills-content">
                        {SKILL_CATEGORIES
                            .iter()
                            .map(|section| {
                                let heading_ref = create_node_ref::<html::H1>();
                                let heading = section.heading;
                                create_effect(move |_| {
                                    if target.get() == Some(heading) {
                                        if let Some(node) = heading_ref.get() {
                                            node.scroll_into_view();
                                        }
                                    }
                                });
                                view! {
                                    <h1 node_ref=heading_ref>{heading}</h1>
                                    <ul>
                                        {section
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <li><SkillEntry skill=*skill /></li> })
                                            .collect_view()}
                                    </ul>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillEntry(skill: Skill) -> impl IntoView {
    view! {
        <div class="language-entry">
            <img src=skill.icon alt=skill.name width="40" height="40" draggable="false" />
            <span>{skill.name}</span>
        </div>
    }
}
