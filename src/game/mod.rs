pub mod game_loop;
pub mod state;
pub mod video;

pub use game_loop::{GameLoop, Render, ScoreBoard, TickOutcome, Timer, VideoBreaks};
pub use state::GameState;
pub use video::{VideoHandler, VideoSurface};
