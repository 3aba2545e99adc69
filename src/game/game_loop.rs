use rand::Rng;
use yew::Callback;

use super::state::GameState;
use crate::model::{FinalScore, Frame, GameStatus, LeaderboardRow};

pub trait Timer {
    fn schedule(&mut self, period_ms: u32);
    // Safe to call when nothing is scheduled.
    fn cancel(&mut self);
}

pub trait Render {
    fn render(&mut self, frame: &Frame<'_>);
}

pub trait VideoBreaks {
    // False once the sequence is used up.
    fn show_next_video(&mut self) -> bool;
    fn reset(&mut self);
}

pub trait ScoreBoard {
    fn is_high_score(&self, score: u32) -> bool;
    fn save_entry(&mut self, name: &str, score: u32);
    fn rows(&self, current_player: &str) -> Vec<LeaderboardRow>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Moved,
    VideoBreak,
    GameOver,
}

/// Fixed-interval driver around [`GameState`].
///
/// Every tick while playing advances the state and renders it. A video
/// break stops ticking and hands over to the video player; the game
/// resumes through [`GameLoop::finish_video_break`]. Game over stops
/// ticking and records the score.
pub struct GameLoop<R> {
    state: GameState<R>,
    tick_rate_ms: u32,
    ticker: Box<dyn Timer>,
    renderer: Box<dyn Render>,
    videos: Box<dyn VideoBreaks>,
    scores: Box<dyn ScoreBoard>,
    running: bool,
    in_video_break: bool,
    last_score: Option<u32>,
    on_game_over: Option<Callback<FinalScore>>,
    on_video_trigger: Option<Callback<()>>,
    on_score_change: Option<Callback<u32>>,
}

impl<R: Rng> GameLoop<R> {
    pub fn new(
        state: GameState<R>,
        tick_rate_ms: u32,
        ticker: Box<dyn Timer>,
        renderer: Box<dyn Render>,
        videos: Box<dyn VideoBreaks>,
        scores: Box<dyn ScoreBoard>,
    ) -> Self {
        Self {
            state,
            tick_rate_ms,
            ticker,
            renderer,
            videos,
            scores,
            running: false,
            in_video_break: false,
            last_score: None,
            on_game_over: None,
            on_video_trigger: None,
            on_score_change: None,
        }
    }

    pub fn on_game_over(&mut self, callback: Callback<FinalScore>) {
        self.on_game_over = Some(callback);
    }

    pub fn on_video_trigger(&mut self, callback: Callback<()>) {
        self.on_video_trigger = Some(callback);
    }

    pub fn on_score_change(&mut self, callback: Callback<u32>) {
        self.on_score_change = Some(callback);
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<R> {
        &mut self.state
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[cfg(test)]
    pub fn in_video_break(&self) -> bool {
        self.in_video_break
    }

    pub fn start(&mut self) {
        self.stop();
        self.renderer.render(&self.state.frame());
        self.publish_score();
        self.ticker.schedule(self.tick_rate_ms);
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            self.ticker.cancel();
            self.running = false;
        }
    }

    pub fn start_game(&mut self, player_name: &str) {
        self.state.start(player_name);
        self.begin_playthrough();
        log::info!("game started for {}", self.state.player_name);
    }

    pub fn restart(&mut self) {
        self.state.reset();
        self.begin_playthrough();
        log::info!("game restarted for {}", self.state.player_name);
    }

    fn begin_playthrough(&mut self) {
        self.videos.reset();
        self.in_video_break = false;
        self.start();
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Playing {
            return TickOutcome::Idle;
        }

        let video_triggered = self.state.update();
        self.renderer.render(&self.state.frame());
        self.publish_score();

        if video_triggered {
            self.stop();
            self.in_video_break = true;
            log::info!(
                "video break {} at score {}",
                self.state.videos_watched,
                self.state.score
            );
            let shown = self.videos.show_next_video();
            if let Some(cb) = &self.on_video_trigger {
                cb.emit(());
            }
            if !shown {
                log::warn!("no video left to show, resuming");
                self.finish_video_break();
            }
            return TickOutcome::VideoBreak;
        }

        // update() may have flipped the status to Over.
        if self.state.status == GameStatus::Over {
            self.stop();
            self.handle_game_over();
            return TickOutcome::GameOver;
        }
        TickOutcome::Moved
    }

    fn handle_game_over(&mut self) {
        let name = self.state.player_name.clone();
        let score = self.state.score;
        log::info!("game over: {} scored {}", name, score);
        let high_score = self.scores.is_high_score(score);
        self.scores.save_entry(&name, score);
        if let Some(cb) = &self.on_game_over {
            let leaderboard = self.scores.rows(&name);
            cb.emit(FinalScore {
                player_name: name,
                score,
                high_score,
                leaderboard,
            });
        }
    }

    pub fn finish_video_break(&mut self) {
        if !self.in_video_break {
            return;
        }
        self.in_video_break = false;
        self.state.resume_after_video();
        self.start();
    }

    pub fn pause(&mut self) {
        self.stop();
        self.state.pause();
    }

    pub fn resume(&mut self) {
        if self.state.status == GameStatus::Paused {
            self.state.resume();
            self.start();
        }
    }

    // Ignored during a video break.
    pub fn toggle_pause(&mut self) {
        if self.in_video_break {
            return;
        }
        match self.state.status {
            GameStatus::Playing => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::Idle | GameStatus::Over => {}
        }
    }

    fn publish_score(&mut self) {
        let score = self.state.score;
        if self.last_score == Some(score) {
            return;
        }
        self.last_score = Some(score);
        if let Some(cb) = &self.on_score_change {
            cb.emit(score);
        }
    }
}
