use web_sys::{HtmlAudioElement, HtmlElement, HtmlVideoElement};

use crate::config::{MUSIC_CUE_SECS, MUSIC_VOLUME};
use crate::game::VideoSurface;
use crate::util::{play_quietly, set_display};

pub struct HtmlVideoSurface {
    overlay: HtmlElement,
    video: HtmlVideoElement,
}

impl HtmlVideoSurface {
    pub fn new(overlay: HtmlElement, video: HtmlVideoElement) -> Self {
        Self { overlay, video }
    }
}

impl VideoSurface for HtmlVideoSurface {
    fn play(&mut self, source: &str) {
        self.video.set_src(source);
        self.video.set_muted(true);
        set_display(&self.overlay, "flex");
        play_quietly(&self.video);
    }

    fn hide(&mut self) {
        set_display(&self.overlay, "none");
    }

    fn is_stalled(&self) -> bool {
        self.video.paused() && !self.video.ended()
    }
}

#[derive(Clone)]
pub struct BackgroundMusic {
    audio: HtmlAudioElement,
}

impl BackgroundMusic {
    pub fn new(audio: HtmlAudioElement) -> Self {
        audio.set_loop(true);
        Self { audio }
    }

    pub fn play_from_cue(&self) {
        self.audio.set_current_time(MUSIC_CUE_SECS);
        self.audio.set_volume(MUSIC_VOLUME);
        play_quietly(&self.audio);
    }

    pub fn resume_if_paused(&self) {
        if self.audio.paused() {
            self.play_from_cue();
        }
    }

    pub fn pause(&self) {
        if let Err(e) = self.audio.pause() {
            log::debug!("could not pause music: {:?}", e);
        }
    }
}
