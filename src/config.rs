pub const VIDEOS: [&str; 4] = ["video2.mp4", "video3.mp4", "video4.mp4", "video5.mp4"];

pub const DEFAULT_PLAYER_NAME: &str = "Spieler";

pub const LEADERBOARD_KEY: &str = "maddesSnakeLeaderboard";

pub const MUSIC_SRC: &str = "music.mp3";
// Background music starts this many seconds into the track.
pub const MUSIC_CUE_SECS: f64 = 15.0;
pub const MUSIC_VOLUME: f64 = 0.5;

pub const SWIPE_MIN_DISTANCE: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: i32,
    pub canvas_size: u32,
    pub tile_size: u32,
    pub base_speed_ms: u32,
    // Zero disables video breaks.
    pub video_interval: u32,
    pub max_video_breaks: u32,
    pub video_fallback_ms: u32,
    pub leaderboard_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            canvas_size: 400,
            tile_size: 20,
            base_speed_ms: 300,
            video_interval: 3,
            max_video_breaks: 4,
            video_fallback_ms: 15_000,
            leaderboard_capacity: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_is_covered_by_the_grid() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.grid_size as u32 * cfg.tile_size, cfg.canvas_size);
    }

    #[test]
    fn every_video_break_has_a_video() {
        assert!(GameConfig::default().max_video_breaks as usize <= VIDEOS.len());
    }
}
