use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, TouchEvent};

use crate::components::name_screen::PLAYER_NAME_INPUT_ID;
use crate::config::SWIPE_MIN_DISTANCE;
use crate::error::GameError;
use crate::input::{KeyAction, SwipeTracker, key_action, swipe_action};
use crate::session::{BrowserLoop, BrowserVideoHandler};
use crate::util::target_id;

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        f: impl FnMut(Event) + 'static,
    ) -> Result<Self, GameError> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    // passive: false so the handler may call preventDefault.
    pub fn active(
        target: &EventTarget,
        event: &'static str,
        f: impl FnMut(Event) + 'static,
    ) -> Result<Self, GameError> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn bind_input(
    document: &Document,
    canvas: &HtmlCanvasElement,
    game: Weak<RefCell<BrowserLoop>>,
) -> Result<Vec<Listener>, GameError> {
    let mut listeners = Vec::with_capacity(4);

    let keydown = {
        let game = game.clone();
        move |event: Event| {
            let Ok(e) = event.dyn_into::<KeyboardEvent>() else {
                return;
            };
            let Some(game) = game.upgrade() else {
                return;
            };
            let Ok(mut game) = game.try_borrow_mut() else {
                return;
            };
            let status = game.state().status;
            let Some(response) = key_action(status, &e.key(), &e.code()) else {
                return;
            };
            if response.prevent_default {
                e.prevent_default();
            }
            match response.action {
                KeyAction::TogglePause => game.toggle_pause(),
                KeyAction::Steer(dir) => game.state_mut().set_direction(dir),
            }
        }
    };
    listeners.push(Listener::new(document, "keydown", keydown)?);

    let swipe = Rc::new(RefCell::new(SwipeTracker::default()));

    let touch_start = {
        let swipe = swipe.clone();
        move |event: Event| {
            event.prevent_default();
            let Ok(e) = event.dyn_into::<TouchEvent>() else {
                return;
            };
            if let Some(t0) = e.touches().item(0) {
                swipe
                    .borrow_mut()
                    .begin(t0.client_x() as f64, t0.client_y() as f64);
            }
        }
    };
    listeners.push(Listener::active(canvas, "touchstart", touch_start)?);

    let touch_end = move |event: Event| {
        event.prevent_default();
        let Ok(e) = event.dyn_into::<TouchEvent>() else {
            return;
        };
        let Some(t0) = e.changed_touches().item(0) else {
            return;
        };
        let swiped = swipe.borrow_mut().end(
            t0.client_x() as f64,
            t0.client_y() as f64,
            SWIPE_MIN_DISTANCE,
        );
        let Some(game) = game.upgrade() else {
            return;
        };
        let Ok(mut game) = game.try_borrow_mut() else {
            return;
        };
        if let Some(dir) = swipe_action(game.state().status, swiped) {
            game.state_mut().set_direction(dir);
        }
    };
    listeners.push(Listener::active(canvas, "touchend", touch_end)?);

    // Keep the page from scrolling under the finger, except in the name field.
    if let Some(body) = document.body() {
        let no_scroll = |event: Event| {
            if target_id(event.target()).as_deref() != Some(PLAYER_NAME_INPUT_ID) {
                event.prevent_default();
            }
        };
        listeners.push(Listener::active(&body, "touchmove", no_scroll)?);
    }

    Ok(listeners)
}

pub fn bind_video_end(
    video: &EventTarget,
    handler: Weak<RefCell<BrowserVideoHandler>>,
) -> Result<Listener, GameError> {
    Listener::new(video, "ended", move |_event: Event| {
        if let Some(handler) = handler.upgrade() {
            handler.borrow_mut().playback_ended();
        }
    })
}
