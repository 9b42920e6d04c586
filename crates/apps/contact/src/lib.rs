//! Contact application: a validated message form posted through the host HTTP service.
//!
//! The draft lives on the application instance rather than the window, so closing and reopening
//! the window keeps whatever the visitor already typed.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod form;
mod store;
mod view;

use std::rc::Rc;

use desktop_app_contract::{
    centered_window_rect, handle_base_event, open_with_policy, AppIcon, AppModule, Application,
    ApplicationConfig, ApplicationContext, ApplicationEvent, MenuEntry, MenuItem,
    OpenWindowRequest, ViewGenerator, WindowContext, WindowPolicy,
};
use leptos::*;
use serde_json::Value;

pub use form::{
    submit, ContactDraft, ContactSubmitError, ValidationError, CONTACT_ENDPOINT, CONTACT_SUBJECT,
    SUBMIT_FAILED_MESSAGE,
};
pub use store::DraftStore;
pub use view::ContactView;

/// Custom event kind that clears the instance draft.
pub const CONTACT_CLEAR_DRAFT_EVENT: &str = "contact-clear-draft";

const WINDOW_WIDTH: i32 = 560;
const WINDOW_HEIGHT: i32 = 620;
const WINDOW_TOP: i32 = 80;

/// Static configuration of the Contact application.
pub const CONTACT_CONFIG: ApplicationConfig = ApplicationConfig {
    display_name: "Contact",
    dock_priority: Some(2),
    path: "/Applications/",
    app_name: "Contact.app",
    app_icon: AppIcon {
        src: "/icons/contact.png",
        alt: "Contact application",
    },
    entrypoint: ContactApplication::entrypoint,
};

/// Contact application instance.
pub struct ContactApplication {
    context: ApplicationContext,
    draft: DraftStore,
}

impl ContactApplication {
    /// Creates the application with an empty draft.
    pub fn new(context: ApplicationContext) -> Self {
        Self {
            context,
            draft: DraftStore::default(),
        }
    }

    fn entrypoint(context: ApplicationContext) -> Rc<dyn Application> {
        Rc::new(Self::new(context))
    }

    /// Returns a snapshot of the current draft.
    pub fn draft(&self) -> ContactDraft {
        self.draft.snapshot()
    }

    fn open_window(&self, args: Value) -> WindowContext {
        let key = CONTACT_CONFIG.key();
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
                    "Contact",
                    rect,
                    ViewGenerator::ready(module(self.draft.clone())),
                )
                .with_args(args)
            },
        )
    }
}

fn module(draft: DraftStore) -> AppModule {
    AppModule::new(move |context| {
        let draft = draft.clone();
        view! { <ContactView context=context draft=draft /> }.into_view()
    })
}

impl Application for ContactApplication {
    fn config(&self) -> &'static ApplicationConfig {
        &CONTACT_CONFIG
    }

    fn menu_entries(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::app_name(
                "Contact",
                vec![MenuItem::new("Close Window", ApplicationEvent::Close)],
            ),
            MenuEntry::group(
                "Edit",
                vec![MenuItem::new(
                    "Clear Form",
                    ApplicationEvent::custom(CONTACT_CLEAR_DRAFT_EVENT, Value::Null),
                )],
            ),
        ]
    }

    fn on(&self, event: ApplicationEvent, window: Option<WindowContext>) {
        handle_base_event(
            self.context.compositor.as_ref(),
            &CONTACT_CONFIG,
            &event,
            window,
        );

        match event {
            ApplicationEvent::Open { args } => {
                self.open_window(args);
            }
            ApplicationEvent::Custom(custom) if custom.kind == CONTACT_CLEAR_DRAFT_EVENT => {
                self.draft.reset();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{
        testing::{MemoryLauncher, MemoryWindowHost},
        SystemApis, WindowHost,
    };
    use platform_host::{HostServices, ScreenResolution, ScreenService};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn application() -> (ContactApplication, MemoryWindowHost) {
        let host = MemoryWindowHost::default();
        let screen = ScreenService::with_resolution(ScreenResolution::new(1280, 800));
        let apis = SystemApis::new(screen, HostServices::headless().http.clone());
        let app = ContactApplication::new(ApplicationContext::new(
            Rc::new(host.clone()),
            Rc::new(MemoryLauncher::default()),
            apis,
        ));
        (app, host)
    }

    #[test]
    fn reopening_focuses_the_existing_window() {
        let (app, host) = application();
        app.on(ApplicationEvent::open(Value::Null), None);
        app.on(ApplicationEvent::open(json!({ "from": "about" })), None);

        let opened = host.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].rect.x, (1280 - WINDOW_WIDTH) / 2);
        assert_eq!(opened[0].title, "Contact");
        assert_eq!(host.focus_log(), vec![opened[0].context]);
    }

    #[test]
    fn draft_outlives_window_until_cleared() {
        let (app, host) = application();
        app.on(ApplicationEvent::open(Value::Null), None);
        app.draft.update(|draft| draft.name = "Ada".to_string());

        let window = host.open_windows()[0];
        app.on(ApplicationEvent::Close, Some(window));
        assert!(host.windows_of(&CONTACT_CONFIG.key()).is_empty());
        assert_eq!(app.draft().name, "Ada");

        app.on(
            ApplicationEvent::custom(CONTACT_CLEAR_DRAFT_EVENT, Value::Null),
            None,
        );
        assert_eq!(app.draft(), ContactDraft::default());
    }

    #[test]
    fn unknown_kinds_leave_draft_untouched() {
        let (app, _) = application();
        app.draft.update(|draft| draft.message = "Hi".to_string());
        app.on(ApplicationEvent::custom("memes-refresh", Value::Null), None);
        assert_eq!(app.draft().message, "Hi");
    }
}
