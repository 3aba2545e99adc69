use std::collections::VecDeque;

use rand::Rng;

use crate::config::{DEFAULT_PLAYER_NAME, GameConfig};
use crate::model::{Direction, Frame, GameStatus, Position};

#[derive(Clone, Debug)]
pub struct GameState<R> {
    // Head first, tail last.
    pub snake: VecDeque<Position>,
    pub food: Position,
    pub direction: Direction,
    pub next_direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    pub videos_watched: u32,
    pub player_name: String,
    config: GameConfig,
    rng: R,
}

impl<R: Rng> GameState<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            snake: VecDeque::new(),
            food: Position::default(),
            direction: Direction::RIGHT,
            next_direction: Direction::RIGHT,
            score: 0,
            status: GameStatus::Idle,
            videos_watched: 0,
            player_name: String::new(),
            config,
            rng,
        }
    }

    pub fn start(&mut self, player_name: &str) {
        let name = player_name.trim();
        self.player_name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        };
        let mid = self.config.grid_size / 2;
        self.snake = VecDeque::from([
            Position::new(mid, mid),
            Position::new(mid - 1, mid),
            Position::new(mid - 2, mid),
        ]);
        self.direction = Direction::RIGHT;
        self.next_direction = Direction::RIGHT;
        self.score = 0;
        self.status = GameStatus::Playing;
        self.videos_watched = 0;
        self.spawn_food();
    }

    pub fn reset(&mut self) {
        let name = std::mem::take(&mut self.player_name);
        self.start(&name);
    }

    pub fn spawn_food(&mut self) {
        let size = self.config.grid_size;
        if size <= 0 || self.snake.len() >= (size * size) as usize {
            return;
        }
        loop {
            let candidate = Position::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            if !self.is_snake_at(candidate) {
                self.food = candidate;
                return;
            }
        }
    }

    pub fn is_snake_at(&self, position: Position) -> bool {
        self.snake.iter().any(|s| *s == position)
    }

    fn in_bounds(&self, p: Position) -> bool {
        let size = self.config.grid_size;
        p.x >= 0 && p.x < size && p.y >= 0 && p.y < size
    }

    // True when this step triggered a video break.
    pub fn update(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(&current) = self.snake.front() else {
            return false;
        };

        // Buffered one tick so a quick double turn cannot reverse into the neck.
        self.direction = self.next_direction;
        let head = current.step(self.direction);

        if !self.in_bounds(head) || self.is_snake_at(head) {
            self.status = GameStatus::Over;
            return false;
        }

        self.snake.push_front(head);

        if head == self.food {
            self.score += 1;
            self.check_video_trigger()
        } else {
            self.snake.pop_back();
            false
        }
    }

    // Food is not respawned while a video break is pending;
    // resume_after_video places it.
    pub fn check_video_trigger(&mut self) -> bool {
        let interval = self.config.video_interval;
        if interval != 0
            && self.score % interval == 0
            && self.videos_watched < self.config.max_video_breaks
        {
            self.status = GameStatus::Paused;
            self.videos_watched += 1;
            return true;
        }
        self.spawn_food();
        false
    }

    pub fn resume_after_video(&mut self) {
        self.status = GameStatus::Playing;
        self.spawn_food();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction.reverses(direction) {
            return;
        }
        self.next_direction = direction;
    }

    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
        }
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            snake: &self.snake,
            food: self.food,
            direction: self.direction,
        }
    }
}
