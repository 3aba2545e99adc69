use super::{
    game_over_overlay::GameOverOverlay, name_screen::NameScreen, score_display::ScoreDisplay,
    video_overlay::VideoOverlay,
};
use crate::config::{GameConfig, MUSIC_SRC};
use crate::model::FinalScore;
use crate::session::{Session, SessionCallbacks, SessionElements};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Screen {
    Name,
    Playing,
    GameOver,
}

#[function_component(App)]
pub fn app() -> Html {
    let config = GameConfig::default();
    let screen = use_state(|| Screen::Name);
    let score = use_state(|| 0u32);
    let final_score = use_state(|| None::<FinalScore>);
    let canvas_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let video_ref = use_node_ref();
    let music_ref = use_node_ref();
    let session = use_mut_ref(|| None::<Session>);

    // Build the game once the canvas and media elements are mounted.
    {
        let session = session.clone();
        let refs = (
            canvas_ref.clone(),
            overlay_ref.clone(),
            video_ref.clone(),
            music_ref.clone(),
        );
        let score = score.clone();
        let screen = screen.clone();
        let final_score = final_score.clone();
        use_effect_with((), move |_| {
            let callbacks = SessionCallbacks {
                on_score: Callback::from(move |s: u32| score.set(s)),
                on_game_over: Callback::from(move |summary: FinalScore| {
                    final_score.set(Some(summary));
                    screen.set(Screen::GameOver);
                }),
                on_video: Callback::from(|()| log::debug!("video break started")),
            };
            let mounted = SessionElements::from_refs(&refs.0, &refs.1, &refs.2, &refs.3)
                .and_then(|elements| Session::mount(elements, callbacks, config));
            match mounted {
                Ok(s) => *session.borrow_mut() = Some(s),
                Err(e) => log::error!("could not start the game: {}", e),
            }
            move || {
                session.borrow_mut().take();
            }
        });
    }

    let on_start = {
        let session = session.clone();
        let screen = screen.clone();
        Callback::from(move |name: String| {
            if let Some(s) = &*session.borrow() {
                s.start(&name);
                screen.set(Screen::Playing);
            }
        })
    };
    let on_restart = {
        let session = session.clone();
        let screen = screen.clone();
        let final_score = final_score.clone();
        Callback::from(move |()| {
            if let Some(s) = &*session.borrow() {
                final_score.set(None);
                s.restart();
                screen.set(Screen::Playing);
            }
        })
    };

    let game_over = *screen == Screen::GameOver;
    let (final_points, high_score, rows) = match (&*final_score, game_over) {
        (Some(summary), true) => (summary.score, summary.high_score, summary.leaderboard.clone()),
        _ => (0, false, Vec::new()),
    };

    html! {
        <div id="game-root" style="position:relative; min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; background:#0f0f1e; font-family:sans-serif; touch-action:none;">
            <ScoreDisplay score={*score} />
            <div style="position:relative;">
                <canvas ref={canvas_ref} id="game-canvas" style="display:block; border:3px solid #00ff88; border-radius:8px; max-width:95vw;"></canvas>
            </div>
            <audio ref={music_ref} id="bg-music" src={MUSIC_SRC} preload="auto"></audio>
            <VideoOverlay overlay_ref={overlay_ref} video_ref={video_ref} />
            if *screen == Screen::Name {
                <NameScreen {on_start} />
            }
            <GameOverOverlay show={game_over} score={final_points} {high_score} {rows} restart={on_restart} />
        </div>
    }
}
