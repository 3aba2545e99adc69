use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;

use super::game_loop::{Timer, VideoBreaks};

pub trait VideoSurface {
    // Blocked playback is ignored.
    fn play(&mut self, source: &str);
    fn hide(&mut self);
    fn is_stalled(&self) -> bool;
}

/// Plays the interstitial sequence, one video per break.
///
/// A fallback timer covers environments that never start playback: when
/// it fires and the video is still stalled, the break ends as if the
/// video had finished.
pub struct VideoHandler<S, T> {
    videos: Vec<String>,
    index: usize,
    showing: bool,
    fallback_ms: u32,
    surface: S,
    fallback: T,
    on_video_end: Callback<()>,
}

impl<S: VideoSurface, T: Timer> VideoHandler<S, T> {
    pub fn new<I>(
        videos: I,
        fallback_ms: u32,
        surface: S,
        fallback: T,
        on_video_end: Callback<()>,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            videos: videos.into_iter().map(Into::into).collect(),
            index: 0,
            showing: false,
            fallback_ms,
            surface,
            fallback,
            on_video_end,
        }
    }

    pub fn show_next_video(&mut self) -> bool {
        let Some(source) = self.videos.get(self.index) else {
            return false;
        };
        log::debug!("playing {}", source);
        self.surface.play(source);
        self.showing = true;
        self.fallback.cancel();
        self.fallback.schedule(self.fallback_ms);
        self.index += 1;
        true
    }

    pub fn playback_ended(&mut self) {
        self.finish();
    }

    pub fn fallback_elapsed(&mut self) {
        if self.surface.is_stalled() {
            log::warn!("video did not play, skipping it");
            self.finish();
        }
    }

    fn finish(&mut self) {
        if !self.showing {
            return;
        }
        self.showing = false;
        self.hide();
        self.on_video_end.emit(());
    }

    fn hide(&mut self) {
        self.fallback.cancel();
        self.surface.hide();
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    #[cfg(test)]
    pub fn videos_watched(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn is_showing(&self) -> bool {
        self.showing
    }
}

impl<S: VideoSurface, T: Timer> VideoBreaks for Rc<RefCell<VideoHandler<S, T>>> {
    fn show_next_video(&mut self) -> bool {
        self.borrow_mut().show_next_video()
    }

    fn reset(&mut self) {
        self.borrow_mut().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, VIDEOS};
    use std::cell::Cell;

    #[derive(Default)]
    struct Screen {
        played: Vec<String>,
        visible: bool,
        stalled: bool,
        armed: Vec<u32>,
        cancels: u32,
    }

    type Shared = Rc<RefCell<Screen>>;

    struct FakeSurface(Shared);
    impl VideoSurface for FakeSurface {
        fn play(&mut self, source: &str) {
            let mut s = self.0.borrow_mut();
            s.played.push(source.to_string());
            s.visible = true;
        }
        fn hide(&mut self) {
            self.0.borrow_mut().visible = false;
        }
        fn is_stalled(&self) -> bool {
            self.0.borrow().stalled
        }
    }

    struct FakeTimer(Shared);
    impl Timer for FakeTimer {
        fn schedule(&mut self, period_ms: u32) {
            self.0.borrow_mut().armed.push(period_ms);
        }
        fn cancel(&mut self) {
            self.0.borrow_mut().cancels += 1;
        }
    }

    fn handler() -> (VideoHandler<FakeSurface, FakeTimer>, Shared, Rc<Cell<u32>>) {
        let screen: Shared = Rc::default();
        let ended = Rc::new(Cell::new(0));
        let counter = ended.clone();
        let handler = VideoHandler::new(
            VIDEOS,
            GameConfig::default().video_fallback_ms,
            FakeSurface(screen.clone()),
            FakeTimer(screen.clone()),
            Callback::from(move |()| counter.set(counter.get() + 1)),
        );
        (handler, screen, ended)
    }

    #[test]
    fn plays_videos_in_order_then_reports_exhaustion() {
        let (mut handler, screen, _) = handler();
        for _ in 0..VIDEOS.len() {
            assert!(handler.show_next_video());
            handler.playback_ended();
        }
        assert!(!handler.show_next_video());
        assert_eq!(screen.borrow().played, VIDEOS.map(String::from).to_vec());
        assert_eq!(handler.videos_watched(), 4);
    }

    #[test]
    fn arms_one_fallback_per_video() {
        let (mut handler, screen, _) = handler();
        handler.show_next_video();
        assert_eq!(screen.borrow().armed, vec![15_000]);
        // Any earlier fallback is cancelled before arming.
        assert_eq!(screen.borrow().cancels, 1);
        assert!(screen.borrow().visible);
    }

    #[test]
    fn natural_end_hides_and_notifies() {
        let (mut handler, screen, ended) = handler();
        handler.show_next_video();
        handler.playback_ended();
        assert_eq!(ended.get(), 1);
        assert!(!screen.borrow().visible);
        assert_eq!(screen.borrow().cancels, 2);
        assert!(!handler.is_showing());
    }

    #[test]
    fn fallback_skips_a_stalled_video() {
        let (mut handler, screen, ended) = handler();
        handler.show_next_video();
        screen.borrow_mut().stalled = true;
        handler.fallback_elapsed();
        assert_eq!(ended.get(), 1);
        assert!(!screen.borrow().visible);
        assert_eq!(handler.videos_watched(), 1);
    }

    #[test]
    fn fallback_leaves_a_playing_video_alone() {
        let (mut handler, screen, ended) = handler();
        handler.show_next_video();
        handler.fallback_elapsed();
        assert_eq!(ended.get(), 0);
        assert!(screen.borrow().visible);
        handler.playback_ended();
        assert_eq!(ended.get(), 1);
    }

    #[test]
    fn end_is_signalled_once_per_video() {
        let (mut handler, screen, ended) = handler();
        handler.show_next_video();
        screen.borrow_mut().stalled = true;
        handler.fallback_elapsed();
        handler.playback_ended();
        handler.fallback_elapsed();
        assert_eq!(ended.get(), 1);
    }

    #[test]
    fn reset_rewinds_the_sequence() {
        let (mut handler, screen, _) = handler();
        handler.show_next_video();
        handler.show_next_video();
        handler.reset();
        handler.show_next_video();
        assert_eq!(screen.borrow().played.last().map(String::as_str), Some(VIDEOS[0]));
    }

    #[test]
    fn shared_handler_drives_the_loop_seam() {
        let (handler, screen, _) = handler();
        let mut shared = Rc::new(RefCell::new(handler));
        assert!(VideoBreaks::show_next_video(&mut shared));
        VideoBreaks::reset(&mut shared);
        assert_eq!(shared.borrow().videos_watched(), 0);
        assert_eq!(screen.borrow().played.len(), 1);
    }
}
