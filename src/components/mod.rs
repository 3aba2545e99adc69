pub mod app;
pub mod game_over_overlay;
pub mod leaderboard_panel;
pub mod name_screen;
pub mod score_display;
pub mod video_overlay;

pub use app::App;
