use chrono::{DateTime, Local};

use crate::config::{DEFAULT_PLAYER_NAME, LEADERBOARD_KEY};
use crate::error::GameError;
use crate::game::ScoreBoard;
use crate::model::{LeaderboardEntry, LeaderboardRow};

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), GameError>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

pub struct Leaderboard<S, C = SystemClock> {
    store: S,
    clock: C,
    capacity: usize,
}

impl<S: KeyValueStore, C: Clock> Leaderboard<S, C> {
    pub fn new(store: S, clock: C, capacity: usize) -> Self {
        Self {
            store,
            clock,
            capacity,
        }
    }

    // Missing or unreadable data is an empty list.
    pub fn entries(&self) -> Vec<LeaderboardEntry> {
        let Some(raw) = self.store.get_item(LEADERBOARD_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("ignoring unreadable leaderboard: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save_entry(&mut self, name: &str, score: u32) {
        let mut entries = self.entries();
        let now = self.clock.now();
        entries.push(LeaderboardEntry {
            id: now.timestamp_millis(),
            name: if name.is_empty() {
                DEFAULT_PLAYER_NAME.to_string()
            } else {
                name.to_string()
            },
            score,
            date: now.format("%-d.%-m.%Y").to_string(),
        });
        // Stable: among equal scores the earlier entry stays ahead.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(self.capacity);

        let raw = match serde_json::to_string(&entries) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("could not serialize leaderboard: {}", e);
                return;
            }
        };
        match self.store.set_item(LEADERBOARD_KEY, &raw) {
            Ok(()) => log::info!("saved {} with {} points", name, score),
            Err(e) => log::warn!("could not save leaderboard: {}", e),
        }
    }

    pub fn is_high_score(&self, score: u32) -> bool {
        let entries = self.entries();
        if entries.len() < self.capacity {
            return true;
        }
        entries.last().is_none_or(|lowest| score > lowest.score)
    }

    pub fn rows(&self, current_player: &str) -> Vec<LeaderboardRow> {
        ranked_rows(&self.entries(), current_player)
    }
}

pub fn ranked_rows(entries: &[LeaderboardEntry], current_player: &str) -> Vec<LeaderboardRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| LeaderboardRow {
            rank: i + 1,
            name: e.name.clone(),
            score: e.score,
            date: e.date.clone(),
            highlight: e.name == current_player,
        })
        .collect()
}

impl<S: KeyValueStore, C: Clock> ScoreBoard for Leaderboard<S, C> {
    fn is_high_score(&self, score: u32) -> bool {
        Leaderboard::is_high_score(self, score)
    }

    fn save_entry(&mut self, name: &str, score: u32) {
        Leaderboard::save_entry(self, name, score);
    }

    fn rows(&self, current_player: &str) -> Vec<LeaderboardRow> {
        Leaderboard::rows(self, current_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: HashMap<String, String>,
        read_only: bool,
    }

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.items.get(key).cloned()
        }
        fn set_item(&mut self, key: &str, value: &str) -> Result<(), GameError> {
            if self.read_only {
                return Err(GameError::StorageUnavailable);
            }
            self.items.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    // Advances one second per reading so ids stay distinct.
    struct StepClock(Cell<i64>);

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Local> {
            let secs = self.0.get();
            self.0.set(secs + 1);
            let base = Local.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
            base + chrono::Duration::seconds(secs)
        }
    }

    fn board() -> Leaderboard<MemoryStore, StepClock> {
        Leaderboard::new(MemoryStore::default(), StepClock(Cell::new(0)), 10)
    }

    fn board_with(raw: &str) -> Leaderboard<MemoryStore, StepClock> {
        let mut store = MemoryStore::default();
        store.items.insert(LEADERBOARD_KEY.to_string(), raw.to_string());
        Leaderboard::new(store, StepClock(Cell::new(0)), 10)
    }

    fn scores(board: &Leaderboard<MemoryStore, StepClock>) -> Vec<u32> {
        board.entries().iter().map(|e| e.score).collect()
    }

    #[test]
    fn missing_storage_is_empty() {
        assert!(board().entries().is_empty());
    }

    #[test]
    fn corrupt_storage_is_empty() {
        assert!(board_with("{not json").entries().is_empty());
        assert!(board_with(r#"{"id":1}"#).entries().is_empty());
    }

    #[test]
    fn save_stamps_the_entry() {
        let mut board = board();
        board.save_entry("Maddes", 12);
        let entries = board.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Maddes");
        assert_eq!(entries[0].score, 12);
        assert_eq!(entries[0].date, "7.3.2026");
        let expected = Local.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(entries[0].id, expected.timestamp_millis());
    }

    #[test]
    fn blank_name_is_saved_as_default() {
        let mut board = board();
        board.save_entry("", 3);
        assert_eq!(board.entries()[0].name, DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn entries_are_sorted_best_first() {
        let mut board = board();
        for score in [4, 9, 1, 7] {
            board.save_entry("p", score);
        }
        assert_eq!(scores(&board), vec![9, 7, 4, 1]);
    }

    #[test]
    fn keeps_only_the_top_ten() {
        let mut board = board();
        for score in 0..15 {
            board.save_entry("p", score);
        }
        assert_eq!(scores(&board), (5..15).rev().collect::<Vec<_>>());
        board.save_entry("late", 2);
        assert_eq!(board.entries().len(), 10);
        assert!(board.entries().iter().all(|e| e.name != "late"));
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut board = board();
        board.save_entry("first", 5);
        board.save_entry("second", 5);
        let names: Vec<_> = board.entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn corrupt_data_is_replaced_on_save() {
        let mut board = board_with("garbage");
        board.save_entry("Maddes", 1);
        assert_eq!(scores(&board), vec![1]);
    }

    #[test]
    fn failed_write_is_swallowed() {
        let mut store = MemoryStore::default();
        store.read_only = true;
        let mut board = Leaderboard::new(store, StepClock(Cell::new(0)), 10);
        board.save_entry("Maddes", 1);
        assert!(board.entries().is_empty());
    }

    #[test]
    fn anything_is_a_high_score_until_full() {
        let mut board = board();
        assert!(board.is_high_score(0));
        for score in 10..19 {
            board.save_entry("p", score);
        }
        assert!(board.is_high_score(0));
    }

    #[test]
    fn full_board_compares_against_tenth_place() {
        let mut board = board();
        for score in 10..20 {
            board.save_entry("p", score);
        }
        assert!(!board.is_high_score(9));
        assert!(!board.is_high_score(10));
        assert!(board.is_high_score(11));
    }

    #[test]
    fn reads_entries_written_by_older_clients() {
        let board = board_with(
            r#"[{"id":1700000000000,"name":"Anna","score":8,"date":"14.11.2023"},
                {"id":1700000001000,"name":"Ben","score":3,"date":"14.11.2023"}]"#,
        );
        assert_eq!(scores(&board), vec![8, 3]);
    }

    #[test]
    fn rows_are_ranked_and_highlight_the_player() {
        let mut board = board();
        board.save_entry("Anna", 8);
        board.save_entry("Maddes", 5);
        board.save_entry("Maddes", 9);
        let rows = board.rows("Maddes");
        let summary: Vec<_> = rows.iter().map(|r| (r.rank, r.name.as_str(), r.highlight)).collect();
        assert_eq!(
            summary,
            vec![(1, "Maddes", true), (2, "Anna", false), (3, "Maddes", true)]
        );
        assert_eq!(rows[0].date, "7.3.2026");
    }

    #[test]
    fn scoreboard_seam_saves() {
        let mut board = board();
        assert!(ScoreBoard::is_high_score(&board, 2));
        ScoreBoard::save_entry(&mut board, "Maddes", 2);
        assert_eq!(scores(&board), vec![2]);
        let rows = ScoreBoard::rows(&board, "Maddes");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].highlight);
    }
}
