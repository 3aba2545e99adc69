use crate::model::{Direction, GameStatus};

pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::UP),
        "ArrowDown" | "s" | "S" => Some(Direction::DOWN),
        "ArrowLeft" | "a" | "A" => Some(Direction::LEFT),
        "ArrowRight" | "d" | "D" => Some(Direction::RIGHT),
        _ => None,
    }
}

pub fn is_pause_key(key: &str, code: &str) -> bool {
    code == "Space" || key == " " || key == "Spacebar"
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    TogglePause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyResponse {
    pub action: KeyAction,
    pub prevent_default: bool,
}

// What a key press does in the given status. Nothing reacts once the game is
// over, and the page keeps its default key handling while the name screen is up.
pub fn key_action(status: GameStatus, key: &str, code: &str) -> Option<KeyResponse> {
    if status == GameStatus::Over {
        return None;
    }
    if is_pause_key(key, code) {
        return match status {
            GameStatus::Playing | GameStatus::Paused => Some(KeyResponse {
                action: KeyAction::TogglePause,
                prevent_default: true,
            }),
            GameStatus::Idle | GameStatus::Over => None,
        };
    }
    direction_for_key(key).map(|dir| KeyResponse {
        action: KeyAction::Steer(dir),
        prevent_default: status != GameStatus::Idle,
    })
}

// A finished swipe steers unless the game is over.
pub fn swipe_action(status: GameStatus, swipe: Option<Direction>) -> Option<Direction> {
    swipe.filter(|_| status != GameStatus::Over)
}

// Direction of a finger movement, or `None` when it was too short.
// The dominant axis wins; a diagonal tie counts as vertical.
pub fn swipe_direction(dx: f64, dy: f64, min_distance: f64) -> Option<Direction> {
    if dx.abs() > dy.abs() && dx.abs() > min_distance {
        Some(if dx > 0.0 {
            Direction::RIGHT
        } else {
            Direction::LEFT
        })
    } else if dy.abs() > min_distance {
        Some(if dy > 0.0 {
            Direction::DOWN
        } else {
            Direction::UP
        })
    } else {
        None
    }
}

#[derive(Default, Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    pub fn end(&mut self, x: f64, y: f64, min_distance: f64) -> Option<Direction> {
        let (sx, sy) = self.start.take()?;
        swipe_direction(x - sx, y - sy, min_distance)
    }
}
