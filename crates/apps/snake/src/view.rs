use std::time::Duration;

use leptos::*;
use platform_host::ListenerSet;

use crate::{
    engine::{Direction, GameStatus, Point, SnakeGame, GRID_SIZE, MOVE_INTERVAL_MS},
    SnakeCommand,
};

#[component]
/// Snake window contents.
pub fn SnakeView(
    /// Seed for food placement.
    seed: u64,
    /// Commands relayed from the application menu.
    commands: ListenerSet<SnakeCommand>,
) -> impl IntoView {
    let game = create_rw_signal(SnakeGame::new(seed));
    let has_focus = create_rw_signal(false);
    let container = create_node_ref::<html::Div>();

    let command_subscription = commands.subscribe(move |command: &SnakeCommand| match command {
        SnakeCommand::TogglePause => game.update(SnakeGame::toggle_pause),
        SnakeCommand::Restart => game.update(SnakeGame::restart),
    });

    if let Ok(interval) = set_interval_with_handle(
        move || {
            if game.with_untracked(|state| state.status() == GameStatus::Running) {
                game.update(|state| {
                    state.tick();
                });
            }
        },
        Duration::from_millis(MOVE_INTERVAL_MS),
    ) {
        on_cleanup(move || interval.clear());
    }

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if !has_focus.get_untracked() {
            return;
        }
        let Some(direction) = Direction::from_key(&ev.key()) else {
            return;
        };
        let mut accepted = false;
        game.update(|state| accepted = state.turn(direction));
        if accepted {
            ev.prevent_default();
        }
    });
    on_cleanup(move || {
        key_listener.remove();
        command_subscription.unsubscribe();
    });

    create_effect(move |_| {
        if let Some(node) = container.get() {
            let _ = node.focus();
        }
    });

    let restart = move |_| {
        game.update(SnakeGame::restart);
        if let Some(node) = container.get_untracked() {
            let _ = node.focus();
        }
    };

    let cell_class = move |cell: Point| {
        game.with(|state| {
            let mut class = String::from("snake-cell");
            let mut segments = state.snake();
            if segments.next() == Some(cell) {
                class.push_str(" snake snake-head");
            } else if segments.any(|segment| segment == cell) {
                class.push_str(" snake");
            }
            if state.food() == Some(cell) {
                class.push_str(" food");
            }
            class
        })
    };

    view! {
        <div
            class="snake-app"
            tabindex="0"
            node_ref=container
            on:focus=move |_| has_focus.set(true)
            on:blur=move |_| has_focus.set(false)
        >
            <div class="snake-title-row">
                <img src="/icons/snake-game.png" alt="Snake icon" class="snake-title-icon" draggable="false" />
                <h1>"Snake"</h1>
            </div>
            <div class="snake-status-bar">
                <span>"Score: " {move || game.with(SnakeGame::score)}</span>
                <span>
                    {move || match (game.with(SnakeGame::status), has_focus.get()) {
                        (GameStatus::Paused, _) => "Paused",
                        (_, true) => "Focused",
                        (_, false) => "Click to focus",
                    }}
                </span>
            </div>
            <div class="snake-board-wrapper">
                <div
                    class="snake-board"
                    style=format!("grid-template-columns: repeat({GRID_SIZE}, 1fr)")
                    aria-label="Snake game board"
                >
                    {(0..GRID_SIZE)
                        .flat_map(|y| (0..GRID_SIZE).map(move |x| Point::new(x, y)))
                        .map(|cell| view! { <div class=move || cell_class(cell)></div> })
                        .collect_view()}
                </div>
                <Show when=move || game.with(|state| state.status() == GameStatus::GameOver)>
                    <div class="snake-overlay">
                        <h2>"Game Over"</h2>
                        <p>"Final score: " {move || game.with(SnakeGame::score)}</p>
                        <button class="snake-restart-button" on:click=restart>
                            "Play again"
                        </button>
                    </div>
                </Show>
            </div>
            <div class="snake-instructions">
                "Use arrow keys or WASD to move. Eat food, avoid walls and yourself."
            </div>
        </div>
    }
}
