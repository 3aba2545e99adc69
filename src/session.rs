use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{HtmlAudioElement, HtmlCanvasElement, HtmlElement, HtmlVideoElement};
use yew::{Callback, NodeRef};

use crate::config::{GameConfig, VIDEOS};
use crate::error::GameError;
use crate::game::{GameLoop, GameState, VideoHandler};
use crate::leaderboard::{Leaderboard, SystemClock};
use crate::model::FinalScore;
use crate::platform::{
    BackgroundMusic, BrowserTimer, HtmlVideoSurface, Listener, LocalStore, bind_input,
    bind_video_end,
};
use crate::render::CanvasRenderer;
use crate::util;

pub type BrowserLoop = GameLoop<SmallRng>;
pub type BrowserVideoHandler = VideoHandler<HtmlVideoSurface, BrowserTimer>;

pub struct SessionElements {
    pub canvas: HtmlCanvasElement,
    pub video_overlay: HtmlElement,
    pub video: HtmlVideoElement,
    pub music: HtmlAudioElement,
}

impl SessionElements {
    pub fn from_refs(
        canvas: &NodeRef,
        video_overlay: &NodeRef,
        video: &NodeRef,
        music: &NodeRef,
    ) -> Result<Self, GameError> {
        Ok(Self {
            canvas: canvas
                .cast::<HtmlCanvasElement>()
                .ok_or(GameError::MissingElement("game-canvas"))?,
            video_overlay: video_overlay
                .cast::<HtmlElement>()
                .ok_or(GameError::MissingElement("video-overlay"))?,
            video: video
                .cast::<HtmlVideoElement>()
                .ok_or(GameError::MissingElement("game-video"))?,
            music: music
                .cast::<HtmlAudioElement>()
                .ok_or(GameError::MissingElement("bg-music"))?,
        })
    }
}

pub struct SessionCallbacks {
    pub on_score: Callback<u32>,
    pub on_game_over: Callback<FinalScore>,
    pub on_video: Callback<()>,
}

pub struct Session {
    game: Rc<RefCell<BrowserLoop>>,
    music: BackgroundMusic,
    _video: Rc<RefCell<BrowserVideoHandler>>,
    _listeners: Vec<Listener>,
}

impl Session {
    pub fn mount(
        elements: SessionElements,
        callbacks: SessionCallbacks,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let window = util::window()?;
        let document = util::document()?;
        let renderer = CanvasRenderer::new(&elements.canvas, &config)?;
        let music = BackgroundMusic::new(elements.music);
        let leaderboard = Leaderboard::new(
            LocalStore::open(),
            SystemClock,
            config.leaderboard_capacity,
        );
        let state = GameState::new(config, SmallRng::seed_from_u64(random_seed()));

        let on_game_over = {
            let music = music.clone();
            let ui = callbacks.on_game_over;
            Callback::from(move |summary: FinalScore| {
                music.pause();
                ui.emit(summary);
            })
        };

        let video_element = elements.video.clone();
        let surface = HtmlVideoSurface::new(elements.video_overlay, elements.video);
        let mut video_slot = None;

        // The loop owns the video handler; the handler reports back through a weak link.
        let game = Rc::new_cyclic(|game_weak: &Weak<RefCell<BrowserLoop>>| {
            let on_video_end = {
                let game_weak = game_weak.clone();
                Callback::from(move |()| {
                    if let Some(game) = game_weak.upgrade() {
                        match game.try_borrow_mut() {
                            Ok(mut game) => game.finish_video_break(),
                            Err(_) => log::warn!("video ended while the game was busy"),
                        }
                    }
                })
            };
            let video = Rc::new_cyclic(|me: &Weak<RefCell<BrowserVideoHandler>>| {
                let me = me.clone();
                let fallback = BrowserTimer::timeout(window.clone(), move || {
                    if let Some(handler) = me.upgrade() {
                        if let Ok(mut handler) = handler.try_borrow_mut() {
                            handler.fallback_elapsed();
                        }
                    }
                });
                RefCell::new(VideoHandler::new(
                    VIDEOS,
                    config.video_fallback_ms,
                    surface,
                    fallback,
                    on_video_end,
                ))
            });
            video_slot = Some(video.clone());

            let ticker = {
                let game_weak = game_weak.clone();
                BrowserTimer::interval(window.clone(), move || {
                    if let Some(game) = game_weak.upgrade() {
                        if let Ok(mut game) = game.try_borrow_mut() {
                            game.tick();
                        }
                    }
                })
            };

            let mut game = GameLoop::new(
                state,
                config.base_speed_ms,
                Box::new(ticker),
                Box::new(renderer),
                Box::new(video),
                Box::new(leaderboard),
            );
            game.on_score_change(callbacks.on_score);
            game.on_video_trigger(callbacks.on_video);
            game.on_game_over(on_game_over);
            RefCell::new(game)
        });
        let video = video_slot.ok_or(GameError::MissingElement("game-video"))?;

        let mut listeners = bind_input(&document, &elements.canvas, Rc::downgrade(&game))?;
        listeners.push(bind_video_end(&video_element, Rc::downgrade(&video))?);

        log::info!("session ready");
        Ok(Self {
            game,
            music,
            _video: video,
            _listeners: listeners,
        })
    }

    pub fn start(&self, player_name: &str) {
        self.music.play_from_cue();
        self.game.borrow_mut().start_game(player_name);
    }

    pub fn restart(&self) {
        self.music.resume_if_paused();
        self.game.borrow_mut().restart();
    }
}

fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

