//! About application: portfolio sub-views plus the hand-over to the Contact application.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod content;
mod view;

use std::rc::Rc;

use desktop_app_contract::{
    centered_window_rect, handle_base_event, open_with_policy, AppIcon, AppModule, Application,
    ApplicationConfig, ApplicationContext, ApplicationEvent, MenuEntry, MenuItem,
    OpenWindowRequest, ViewGenerator, WindowContext, WindowPolicy,
};
use leptos::*;
use serde_json::Value;

pub use content::SubView;
pub use view::AboutView;

/// Custom event kind emitted by the About view to hand over to the Contact application.
pub const ABOUT_OPEN_CONTACT_EVENT: &str = "about-open-contact-event";
/// Launch path of the Contact application.
pub const CONTACT_LAUNCH_PATH: &str = "/Applications/Contact.app";

const WINDOW_WIDTH: i32 = 720;
const WINDOW_HEIGHT: i32 = 600;
const WINDOW_TOP: i32 = 64;

/// Static configuration of the About application.
pub const ABOUT_CONFIG: ApplicationConfig = ApplicationConfig {
    display_name: "About",
    dock_priority: Some(1),
    path: "/Applications/",
    app_name: "About.app",
    app_icon: AppIcon {
        src: "/icons/about-me.png",
        alt: "About application",
    },
    entrypoint: AboutApplication::entrypoint,
};

/// About application instance.
pub struct AboutApplication {
    context: ApplicationContext,
}

impl AboutApplication {
    /// Creates the application from its runtime collaborators.
    pub fn new(context: ApplicationContext) -> Self {
        Self { context }
    }

    fn entrypoint(context: ApplicationContext) -> Rc<dyn Application> {
        Rc::new(Self::new(context))
    }

    fn open_window(&self, args: Value) -> WindowContext {
        let key = ABOUT_CONFIG.key();
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
                OpenWindowRequest::new(key.clone(), "About", rect, ViewGenerator::ready(module()))
                    .with_args(args)
            },
        )
    }
}

fn module() -> AppModule {
    AppModule::new(|context| view! { <AboutView context=context /> }.into_view())
}

impl Application for AboutApplication {
    fn config(&self) -> &'static ApplicationConfig {
        &ABOUT_CONFIG
    }

    fn menu_entries(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::app_name(
                "About",
                vec![MenuItem::new("Close Window", ApplicationEvent::Close)],
            ),
            MenuEntry::group(
                "Go",
                vec![MenuItem::new(
                    "Contact",
                    ApplicationEvent::custom(ABOUT_OPEN_CONTACT_EVENT, Value::Null),
                )],
            ),
        ]
    }

    fn on(&self, event: ApplicationEvent, window: Option<WindowContext>) {
        handle_base_event(
            self.context.compositor.as_ref(),
            &ABOUT_CONFIG,
            &event,
            window,
        );

        match event {
            ApplicationEvent::Open { args } => {
                self.open_window(args);
            }
            ApplicationEvent::Custom(custom) if custom.kind == ABOUT_OPEN_CONTACT_EVENT => {
                self.context.launcher.open(CONTACT_LAUNCH_PATH, Value::Null);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{
        testing::{MemoryLauncher, MemoryWindowHost},
        SystemApis, WindowHost, WindowRect,
    };
    use platform_host::{HostServices, ScreenResolution, ScreenService};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn application(screen: ScreenService) -> (AboutApplication, MemoryWindowHost, MemoryLauncher) {
        let host = MemoryWindowHost::default();
        let launcher = MemoryLauncher::default();
        let services = HostServices::headless();
        let apis = SystemApis::new(screen, services.http.clone());
        let app = AboutApplication::new(ApplicationContext::new(
            Rc::new(host.clone()),
            Rc::new(launcher.clone()),
            apis,
        ));
        (app, host, launcher)
    }

    #[test]
    fn open_places_single_centered_window() {
        let screen = ScreenService::with_resolution(ScreenResolution::new(1440, 900));
        let (app, host, _) = application(screen);

        app.on(ApplicationEvent::open(json!({ "view": "projects" })), None);
        app.on(ApplicationEvent::open(Value::Null), None);

        let opened = host.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(
            opened[0].rect,
            WindowRect {
                x: 360,
                y: WINDOW_TOP,
                w: WINDOW_WIDTH,
                h: WINDOW_HEIGHT
            }
        );
        assert_eq!(opened[0].args, json!({ "view": "projects" }));
        assert_eq!(host.focus_log(), vec![opened[0].context]);
    }

    #[test]
    fn contact_event_launches_contact_once() {
        let (app, host, launcher) = application(ScreenService::new());
        app.on(ApplicationEvent::open(Value::Null), None);
        let window = host.open_windows()[0];

        app.on(
            ApplicationEvent::custom(ABOUT_OPEN_CONTACT_EVENT, Value::Null),
            Some(window),
        );

        assert_eq!(
            launcher.launches(),
            vec![(CONTACT_LAUNCH_PATH.to_string(), Value::Null)]
        );
        assert_eq!(host.open_windows(), vec![window]);
    }

    #[test]
    fn close_and_unknown_events_follow_base_rules() {
        let (app, host, launcher) = application(ScreenService::new());
        app.on(ApplicationEvent::open(Value::Null), None);
        let window = host.open_windows()[0];

        app.on(ApplicationEvent::custom("snake-pause", Value::Null), Some(window));
        assert_eq!(host.open_windows(), vec![window]);
        assert!(launcher.launches().is_empty());

        app.on(ApplicationEvent::Close, Some(window));
        assert!(host.windows_of(&ABOUT_CONFIG.key()).is_empty());
    }

    #[test]
    fn menu_starts_with_bold_application_entry() {
        let (app, _, _) = application(ScreenService::new());
        let entries = app.menu_entries();
        assert!(entries[0].display_options.bold_text);
        assert_eq!(entries[0].name, "About");
        assert_eq!(app.config().launch_path(), "/Applications/About.app");
    }
}
