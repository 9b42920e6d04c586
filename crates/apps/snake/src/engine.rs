//! Grid snake game state machine, independent of rendering and timers.

use std::collections::VecDeque;

use platform_host::XorShift64;
use serde::{Deserialize, Serialize};

/// Cells per board side.
pub const GRID_SIZE: i32 = 20;
/// Milliseconds between ticks.
pub const MOVE_INTERVAL_MS: u64 = 160;
/// Points awarded per food eaten.
pub const FOOD_SCORE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Board coordinate; `(0, 0)` is the top-left cell.
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Heading of the snake.
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the reverse heading.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Maps a `KeyboardEvent.key` value (arrow keys or WASD, any case) to a heading.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            other if other.chars().count() == 1 => match other.to_ascii_lowercase().as_str() {
                "w" => Some(Self::Up),
                "s" => Some(Self::Down),
                "a" => Some(Self::Left),
                "d" => Some(Self::Right),
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Game lifecycle.
pub enum GameStatus {
    /// Ticks advance the snake.
    Running,
    /// Ticks are ignored until resumed.
    Paused,
    /// The snake hit a wall or itself, or the board is full.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What one tick did.
pub enum TickOutcome {
    /// The game was not running.
    Idle,
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto food and grew.
    Ate,
    /// The snake collided; the board is unchanged.
    Crashed,
}

#[derive(Debug, Clone)]
/// Complete snake game state.
pub struct SnakeGame {
    snake: VecDeque<Point>,
    heading: Direction,
    queued: Direction,
    food: Option<Point>,
    score: u32,
    status: GameStatus,
    rng: XorShift64,
}

impl SnakeGame {
    /// Starts a game with a one-cell snake at the board center heading right.
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            snake: VecDeque::new(),
            heading: Direction::Right,
            queued: Direction::Right,
            food: None,
            score: 0,
            status: GameStatus::Running,
            rng: XorShift64::new(seed),
        };
        game.reset_board();
        game
    }

    fn reset_board(&mut self) {
        let center = GRID_SIZE / 2;
        self.snake = VecDeque::from([Point::new(center, center)]);
        self.heading = Direction::Right;
        self.queued = Direction::Right;
        self.score = 0;
        self.status = GameStatus::Running;
        self.food = self.spawn_food();
    }

    /// Resets to a fresh running game, keeping the random stream.
    pub fn restart(&mut self) {
        self.reset_board();
    }

    /// Snake cells, head first.
    pub fn snake(&self) -> impl Iterator<Item = Point> + '_ {
        self.snake.iter().copied()
    }

    /// Head cell.
    pub fn head(&self) -> Point {
        self.snake
            .front()
            .copied()
            .unwrap_or(Point::new(GRID_SIZE / 2, GRID_SIZE / 2))
    }

    /// Current food cell, `None` once the board is full.
    pub fn food(&self) -> Option<Point> {
        self.food
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current lifecycle state.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Heading the snake will move in on the next tick.
    pub fn direction(&self) -> Direction {
        self.queued
    }

    /// Queues a heading change; reversing onto the previous move is rejected.
    ///
    /// Returns whether the change was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.status == GameStatus::GameOver || direction == self.heading.opposite() {
            return false;
        }
        self.queued = direction;
        true
    }

    /// Pauses a running game or resumes a paused one.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => GameStatus::GameOver,
        };
    }

    /// Advances the game one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.heading = self.queued;
        let next = self.head().step(self.heading);
        let grows = self.food == Some(next);
        let body_len = if grows {
            self.snake.len()
        } else {
            self.snake.len().saturating_sub(1)
        };
        let hits_self = self.snake.iter().take(body_len).any(|cell| *cell == next);

        if !next.in_bounds() || hits_self {
            self.status = GameStatus::GameOver;
            return TickOutcome::Crashed;
        }

        self.snake.push_front(next);
        if grows {
            self.score += FOOD_SCORE;
            self.food = self.spawn_food();
            if self.food.is_none() {
                self.status = GameStatus::GameOver;
            }
            TickOutcome::Ate
        } else {
            self.snake.pop_back();
            TickOutcome::Moved
        }
    }

    fn spawn_food(&mut self) -> Option<Point> {
        let free: Vec<Point> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Point::new(x, y)))
            .filter(|cell| !self.snake.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.next_index(free.len())])
    }

    #[cfg(test)]
    fn place(&mut self, snake: &[Point], heading: Direction, food: Option<Point>) {
        self.snake = snake.iter().copied().collect();
        self.heading = heading;
        self.queued = heading;
        self.food = food;
    }
}
