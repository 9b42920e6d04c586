//! Snake application: a single-window grid game driven by a fixed-interval timer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod engine;
mod view;

use std::rc::Rc;

use desktop_app_contract::{
    centered_window_rect, handle_base_event, open_with_policy, AppIcon, AppModule, Application,
    ApplicationConfig, ApplicationContext, ApplicationEvent, MenuEntry, MenuItem,
    OpenWindowRequest, ViewGenerator, WindowContext, WindowPolicy,
};
use leptos::*;
use platform_host::{entropy_seed, ListenerSet};
use serde_json::Value;

pub use engine::{
    Direction, GameStatus, Point, SnakeGame, TickOutcome, FOOD_SCORE, GRID_SIZE, MOVE_INTERVAL_MS,
};
pub use view::SnakeView;

/// Custom event kind that pauses or resumes the game.
pub const SNAKE_TOGGLE_PAUSE_EVENT: &str = "snake-toggle-pause";
/// Custom event kind that starts a new game.
pub const SNAKE_RESTART_EVENT: &str = "snake-restart";

const WINDOW_WIDTH: i32 = 520;
const WINDOW_HEIGHT: i32 = 640;
const WINDOW_TOP: i32 = 120;

/// Static configuration of the Snake application.
pub const SNAKE_CONFIG: ApplicationConfig = ApplicationConfig {
    display_name: "Snake",
    dock_priority: None,
    path: "/Applications/",
    app_name: "Snake.app",
    app_icon: AppIcon {
        src: "/icons/snake-game.png",
        alt: "Snake application",
    },
    entrypoint: SnakeApplication::entrypoint,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Game command relayed from menu events to the mounted view.
pub enum SnakeCommand {
    /// Pause or resume.
    TogglePause,
    /// Start over.
    Restart,
}

/// Snake application instance.
pub struct SnakeApplication {
    context: ApplicationContext,
    commands: ListenerSet<SnakeCommand>,
}

impl SnakeApplication {
    /// Creates the application from its runtime collaborators.
    pub fn new(context: ApplicationContext) -> Self {
        Self {
            context,
            commands: ListenerSet::default(),
        }
    }

    fn entrypoint(context: ApplicationContext) -> Rc<dyn Application> {
        Rc::new(Self::new(context))
    }

    fn open_window(&self, args: Value) -> WindowContext {
        let key = SNAKE_CONFIG.key();
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
                    "Snake",
                    rect,
                    ViewGenerator::ready(module(self.commands.clone())),
                )
                .with_args(args)
            },
        )
    }
}

fn module(commands: ListenerSet<SnakeCommand>) -> AppModule {
    AppModule::new(move |_context| {
        let commands = commands.clone();
        view! { <SnakeView seed=entropy_seed() commands=commands /> }.into_view()
    })
}

impl Application for SnakeApplication {
    fn config(&self) -> &'static ApplicationConfig {
        &SNAKE_CONFIG
    }

    fn menu_entries(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::app_name(
                "Snake",
                vec![MenuItem::new("Close Window", ApplicationEvent::Close)],
            ),
            MenuEntry::group(
                "Game",
                vec![
                    MenuItem::new(
                        "Pause / Resume",
                        ApplicationEvent::custom(SNAKE_TOGGLE_PAUSE_EVENT, Value::Null),
                    ),
                    MenuItem::new(
                        "New Game",
                        ApplicationEvent::custom(SNAKE_RESTART_EVENT, Value::Null),
                    ),
                ],
            ),
        ]
    }

    fn on(&self, event: ApplicationEvent, window: Option<WindowContext>) {
        handle_base_event(
            self.context.compositor.as_ref(),
            &SNAKE_CONFIG,
            &event,
            window,
        );

        match event {
            ApplicationEvent::Open { args } => {
                self.open_window(args);
            }
            ApplicationEvent::Custom(custom) => match custom.kind.as_str() {
                SNAKE_TOGGLE_PAUSE_EVENT => self.commands.notify(&SnakeCommand::TogglePause),
                SNAKE_RESTART_EVENT => self.commands.notify(&SnakeCommand::Restart),
                _ => {}
            },
            ApplicationEvent::Close => {}
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
    use platform_host::{HostServices, ScreenService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn application() -> (SnakeApplication, MemoryWindowHost) {
        let host = MemoryWindowHost::default();
        let apis = SystemApis::new(ScreenService::new(), HostServices::headless().http.clone());
        let app = SnakeApplication::new(ApplicationContext::new(
            Rc::new(host.clone()),
            Rc::new(MemoryLauncher::default()),
            apis,
        ));
        (app, host)
    }

    #[test]
    fn opens_one_window_at_fixed_top() {
        let (app, host) = application();
        app.on(ApplicationEvent::open(Value::Null), None);
        app.on(ApplicationEvent::open(Value::Null), None);

        let opened = host.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].rect.y, WINDOW_TOP);
        assert_eq!(opened[0].rect.x, (1280 - WINDOW_WIDTH) / 2);
    }

    #[test]
    fn menu_events_relay_game_commands() {
        let (app, _) = application();
        let heard = Rc::new(RefCell::new(Vec::new()));
        let sink = heard.clone();
        let subscription = app
            .commands
            .subscribe(move |command: &SnakeCommand| sink.borrow_mut().push(*command));

        app.on(
            ApplicationEvent::custom(SNAKE_TOGGLE_PAUSE_EVENT, Value::Null),
            None,
        );
        app.on(ApplicationEvent::custom(SNAKE_RESTART_EVENT, Value::Null), None);
        app.on(ApplicationEvent::custom("snake-teleport", Value::Null), None);

        assert_eq!(
            *heard.borrow(),
            vec![SnakeCommand::TogglePause, SnakeCommand::Restart]
        );
        subscription.unsubscribe();
    }
}
