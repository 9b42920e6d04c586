//! Memes application: one wholesome meme per window, refreshed on demand.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod feed;
mod view;

use std::rc::Rc;

use desktop_app_contract::{
    centered_window_rect, handle_base_event, open_with_policy, AppIcon, AppModule, Application,
    ApplicationConfig, ApplicationContext, ApplicationEvent, MenuEntry, MenuItem,
    OpenWindowRequest, ViewGenerator, WindowContext, WindowPolicy,
};
use leptos::*;
use platform_host::ListenerSet;
use serde_json::Value;

pub use feed::{
    fallback_meme, fetch_meme, is_wholesome, Meme, MemeLoad, MemePicker, XorShiftPicker,
    BANNED_PATTERNS, FALLBACK_NOTICE, MEME_API_BASE, WHOLESOME_SUBS,
};
pub use view::MemesView;

/// Custom event kind asking the addressed window to fetch another meme.
pub const MEMES_REFRESH_EVENT: &str = "memes-refresh";

const WINDOW_WIDTH: i32 = 520;
const WINDOW_HEIGHT: i32 = 640;
const WINDOW_TOP: i32 = 120;

/// Static configuration of the Memes application.
pub const MEMES_CONFIG: ApplicationConfig = ApplicationConfig {
    display_name: "Memes",
    dock_priority: None,
    path: "/Applications/",
    app_name: "Memes.app",
    app_icon: AppIcon {
        src: "/icons/decent-memes.png",
        alt: "Memes application",
    },
    entrypoint: MemesApplication::entrypoint,
};

/// Memes application instance.
///
/// Every `application-open` creates a new window.
pub struct MemesApplication {
    context: ApplicationContext,
    refresh_requests: ListenerSet<WindowContext>,
}

impl MemesApplication {
    /// Creates the application from its runtime collaborators.
    pub fn new(context: ApplicationContext) -> Self {
        Self {
            context,
            refresh_requests: ListenerSet::default(),
        }
    }

    fn entrypoint(context: ApplicationContext) -> Rc<dyn Application> {
        Rc::new(Self::new(context))
    }

    fn open_window(&self, args: Value) -> WindowContext {
        let key = MEMES_CONFIG.key();
        open_with_policy(
            self.context.compositor.as_ref(),
            &key,
            WindowPolicy::MultiWindow,
            || {
                let rect = centered_window_rect(
                    self.context.apis.screen.get_resolution(),
                    WINDOW_WIDTH,
                    WINDOW_HEIGHT,
                    WINDOW_TOP,
                );
                OpenWindowRequest::new(
                    key.clone(),
                    "Memes",
                    rect,
                    ViewGenerator::ready(module(self.refresh_requests.clone())),
                )
                .with_args(args)
            },
        )
    }
}

fn module(refresh_requests: ListenerSet<WindowContext>) -> AppModule {
    AppModule::new(move |context| {
        let refresh_requests = refresh_requests.clone();
        view! { <MemesView context=context refresh_requests=refresh_requests /> }.into_view()
    })
}

impl Application for MemesApplication {
    fn config(&self) -> &'static ApplicationConfig {
        &MEMES_CONFIG
    }

    fn menu_entries(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::app_name(
                "Memes",
                vec![
                    MenuItem::new("New Window", ApplicationEvent::open(Value::Null)),
                    MenuItem::new("Close Window", ApplicationEvent::Close),
                ],
            ),
            MenuEntry::group(
                "Meme",
                vec![MenuItem::new(
                    "New Meme",
                    ApplicationEvent::custom(MEMES_REFRESH_EVENT, Value::Null),
                )],
            ),
        ]
    }

    fn on(&self, event: ApplicationEvent, window: Option<WindowContext>) {
        handle_base_event(
            self.context.compositor.as_ref(),
            &MEMES_CONFIG,
            &event,
            window,
        );

        match (event, window) {
            (ApplicationEvent::Open { args }, _) => {
                self.open_window(args);
            }
            (ApplicationEvent::Custom(custom), Some(window))
                if custom.kind == MEMES_REFRESH_EVENT =>
            {
                self.refresh_requests.notify(&window);
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
        SystemApis, WindowHost,
    };
    use platform_host::{HostServices, ScreenResolution, ScreenService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn application() -> (MemesApplication, MemoryWindowHost) {
        let host = MemoryWindowHost::default();
        let screen = ScreenService::with_resolution(ScreenResolution::new(1200, 900));
        let apis = SystemApis::new(screen, HostServices::headless().http.clone());
        let app = MemesApplication::new(ApplicationContext::new(
            Rc::new(host.clone()),
            Rc::new(MemoryLauncher::default()),
            apis,
        ));
        (app, host)
    }

    #[test]
    fn every_open_creates_a_window() {
        let (app, host) = application();
        app.on(ApplicationEvent::open(Value::Null), None);
        app.on(ApplicationEvent::open(Value::Null), None);

        let opened = host.opened();
        assert_eq!(opened.len(), 2);
        assert_eq!(opened[0].rect.x, 340);
        assert_eq!(opened[0].rect.y, WINDOW_TOP);
        assert_eq!(host.windows_of(&MEMES_CONFIG.key()).len(), 2);
    }

    #[test]
    fn refresh_reaches_listeners_with_window_context() {
        let (app, host) = application();
        app.on(ApplicationEvent::open(Value::Null), None);
        let window = host.open_windows()[0];

        let heard = Rc::new(RefCell::new(Vec::new()));
        let sink = heard.clone();
        let subscription = app
            .refresh_requests
            .subscribe(move |target: &WindowContext| sink.borrow_mut().push(*target));

        app.on(
            ApplicationEvent::custom(MEMES_REFRESH_EVENT, Value::Null),
            Some(window),
        );
        app.on(
            ApplicationEvent::custom(MEMES_REFRESH_EVENT, Value::Null),
            None,
        );

        assert_eq!(*heard.borrow(), vec![window]);
        subscription.unsubscribe();
    }

    #[test]
    fn close_without_context_closes_every_window() {
        let (app, host) = application();
        app.on(ApplicationEvent::open(Value::Null), None);
        app.on(ApplicationEvent::open(Value::Null), None);

        app.on(ApplicationEvent::Close, None);

        assert!(host.open_windows().is_empty());
    }
}
