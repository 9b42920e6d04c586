//! Skills application: a static catalog of languages, frameworks, databases, and tools.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
mod view;

use std::rc::Rc;

use desktop_app_contract::{
    centered_window_rect, handle_base_event, open_with_policy, AppIcon, AppModule, Application,
    ApplicationConfig, ApplicationContext, ApplicationEvent, MenuEntry, MenuItem,
    OpenWindowRequest, ViewGenerator, WindowContext, WindowPolicy,
};
use leptos::*;
use platform_host::ListenerSet;
use serde_json::{json, Value};

pub use catalog::{category, Skill, SkillCategory, SKILL_CATEGORIES};
pub use view::SkillsView;

/// Custom event kind that opens the window and scrolls to the section named in `payload.section`.
pub const SKILLS_SHOW_SECTION_EVENT: &str = "skills-show-section";

const WINDOW_WIDTH: i32 = 640;
const WINDOW_HEIGHT: i32 = 560;
const WINDOW_TOP: i32 = 96;

/// Static configuration of the Skills application.
pub const SKILLS_CONFIG: ApplicationConfig = ApplicationConfig {
    display_name: "Skills",
    dock_priority: Some(3),
    path: "/Applications/",
    app_name: "Skills.app",
    app_icon: AppIcon {
        src: "/icons/skills.png",
        alt: "Skills application",
    },
    entrypoint: SkillsApplication::entrypoint,
};

/// Skills application instance.
pub struct SkillsApplication {
    context: ApplicationContext,
    section_requests: ListenerSet<&'static str>,
}

impl SkillsApplication {
    /// Creates the application from its runtime collaborators.
    pub fn new(context: ApplicationContext) -> Self {
        Self {
            context,
            section_requests: ListenerSet::default(),
        }
    }

    fn entrypoint(context: ApplicationContext) -> Rc<dyn Application> {
        Rc::new(Self::new(context))
    }

    fn open_window(&self, args: Value) -> WindowContext {
        let key = SKILLS_CONFIG.key();
        open_with_policy(
            self.context.compositor.as_ref(),
            &key,
            WindowPolicy::SingleWindow,
            || {
                let rect = centered_window_rect(
                    self.context.apis.screen.get_resolution(),
                    WINDOW_WIDTH,
                    WINDOW_HEIGHT,
                    WINDOW_TOP,
                );
                OpenWindowRequest::new(
                    key.clone(),
                    "Skills",
                    rect,
                    ViewGenerator::ready(module(self.section_requests.clone())),
                )
                .with_args(args)
            },
        )
    }
}

fn module(section_requests: ListenerSet<&'static str>) -> AppModule {
    AppModule::new(move |context| {
        let section_requests = section_requests.clone();
        view! { <SkillsView context=context section_requests=section_requests /> }.into_view()
    })
}

impl Application for SkillsApplication {
    fn config(&self) -> &'static ApplicationConfig {
        &SKILLS_CONFIG
    }

    fn menu_entries(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::app_name(
                "Skills",
                vec![MenuItem::new("Close Window", ApplicationEvent::Close)],
            ),
            MenuEntry::group(
                "Sections",
                SKILL_CATEGORIES
                    .iter()
                    .map(|section| {
                        MenuItem::new(
                            section.heading,
                            ApplicationEvent::custom(
                                SKILLS_SHOW_SECTION_EVENT,
                                json!({ "section": section.heading }),
                            ),
                        )
                    })
                    .collect(),
            ),
        ]
    }

    fn on(&self, event: ApplicationEvent, window: Option<WindowContext>) {
        handle_base_event(
            self.context.compositor.as_ref(),
            &SKILLS_CONFIG,
            &event,
            window,
        );

        match event {
            ApplicationEvent::Open { args } => {
                self.open_window(args);
            }
            ApplicationEvent::Custom(custom) if custom.kind == SKILLS_SHOW_SECTION_EVENT => {
                let Some(section) = custom
                    .payload
                    .get("section")
                    .and_then(Value::as_str)
                    .and_then(category)
                else {
                    return;
                };
                self.open_window(json!({ "section": section.heading }));
                self.section_requests.notify(&section.heading);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use desktop_app_contract::{
        testing::{MemoryLauncher, MemoryWindowHost},
        SystemApis,
    };
    use platform_host::{HostServices, ScreenResolution, ScreenService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn application(screen: ScreenService) -> (SkillsApplication, MemoryWindowHost) {
        let host = MemoryWindowHost::default();
        let apis = SystemApis::new(screen, HostServices::headless().http.clone());
        let app = SkillsApplication::new(ApplicationContext::new(
            Rc::new(host.clone()),
            Rc::new(MemoryLauncher::default()),
            apis,
        ));
        (app, host)
    }

    #[test]
    fn mobile_viewport_gets_full_width_window() {
        let screen = ScreenService::with_resolution(ScreenResolution::new(400, 800));
        let (app, host) = application(screen);

        app.on(ApplicationEvent::open(Value::Null), None);

        let rect = host.opened()[0].rect;
        assert_eq!((rect.x, rect.w), (0, 400));
        assert_eq!(rect.h, WINDOW_HEIGHT);
    }

    #[test]
    fn section_menu_items_reuse_the_open_window() {
        let (app, host) = application(ScreenService::new());
        let sections = app.menu_entries().remove(1);
        assert_eq!(sections.items.len(), SKILL_CATEGORIES.len());

        let heard = Rc::new(RefCell::new(Vec::new()));
        let sink = heard.clone();
        let subscription = app
            .section_requests
            .subscribe(move |section: &&'static str| sink.borrow_mut().push(*section));

        app.on(ApplicationEvent::open(Value::Null), None);
        app.on(sections.items[2].event.clone(), None);
        app.on(
            ApplicationEvent::custom(SKILLS_SHOW_SECTION_EVENT, json!({ "section": "Hobbies" })),
            None,
        );

        assert_eq!(host.opened().len(), 1);
        assert_eq!(host.focus_log(), vec![host.opened()[0].context]);
        assert_eq!(*heard.borrow(), vec!["Databases"]);
        subscription.unsubscribe();
    }

    #[test]
    fn section_request_opens_window_when_closed() {
        let (app, host) = application(ScreenService::new());
        app.on(
            ApplicationEvent::custom(SKILLS_SHOW_SECTION_EVENT, json!({ "section": "tools" })),
            None,
        );

        let opened = host.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].args, json!({ "section": "Tools" }));
    }
}
