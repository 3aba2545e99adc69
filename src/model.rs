use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Self {
        Self {
            x: self.x + dir.x,
            y: self.y + dir.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    pub x: i32,
    pub y: i32,
}

impl Direction {
    pub const UP: Direction = Direction { x: 0, y: -1 };
    pub const DOWN: Direction = Direction { x: 0, y: 1 };
    pub const LEFT: Direction = Direction { x: -1, y: 0 };
    pub const RIGHT: Direction = Direction { x: 1, y: 0 };

    pub fn reverses(self, other: Direction) -> bool {
        (other.x != 0 && self.x == -other.x) || (other.y != 0 && self.y == -other.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Paused,
    Over,
}

// Field names match the stored JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    // Creation time in epoch milliseconds.
    pub id: i64,
    pub name: String,
    pub score: u32,
    pub date: String,
}

#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub snake: &'a VecDeque<Position>,
    pub food: Position,
    pub direction: Direction,
}

// One display row of the ranked list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub score: u32,
    pub date: String,
    pub highlight: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalScore {
    pub player_name: String,
    pub score: u32,
    pub high_score: bool,
    // Board as saved, with this player's rows highlighted.
    pub leaderboard: Vec<LeaderboardRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_reverse() {
        assert!(Direction::RIGHT.reverses(Direction::LEFT));
        assert!(Direction::LEFT.reverses(Direction::RIGHT));
        assert!(Direction::UP.reverses(Direction::DOWN));
        assert!(Direction::DOWN.reverses(Direction::UP));
    }

    #[test]
    fn perpendicular_and_same_directions_do_not_reverse() {
        assert!(!Direction::RIGHT.reverses(Direction::RIGHT));
        assert!(!Direction::RIGHT.reverses(Direction::UP));
        assert!(!Direction::RIGHT.reverses(Direction::DOWN));
        assert!(!Direction::UP.reverses(Direction::LEFT));
    }

    #[test]
    fn entries_parse_from_stored_json() {
        let raw = r#"[{"id":1760869200000,"name":"Maddes","score":12,"date":"19.10.2026"}]"#;
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(raw).unwrap();
        assert_eq!(entries[0].name, "Maddes");
        assert_eq!(entries[0].score, 12);
        assert_eq!(entries[0].id, 1_760_869_200_000);
    }
}
