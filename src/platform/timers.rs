use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::game::Timer;

#[derive(Clone, Copy)]
enum Kind {
    Interval,
    Timeout,
}

// The closure is created once and only the handle changes, so cancelling
// from inside the callback never frees the running closure.
pub struct BrowserTimer {
    window: Window,
    kind: Kind,
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl BrowserTimer {
    pub fn interval(window: Window, on_tick: impl FnMut() + 'static) -> Self {
        Self::new(window, Kind::Interval, on_tick)
    }

    pub fn timeout(window: Window, on_fire: impl FnMut() + 'static) -> Self {
        Self::new(window, Kind::Timeout, on_fire)
    }

    fn new(window: Window, kind: Kind, f: impl FnMut() + 'static) -> Self {
        Self {
            window,
            kind,
            callback: Closure::wrap(Box::new(f) as Box<dyn FnMut()>),
            handle: None,
        }
    }
}

impl Timer for BrowserTimer {
    fn schedule(&mut self, period_ms: u32) {
        self.cancel();
        let f = self.callback.as_ref().unchecked_ref();
        let timeout = period_ms.min(i32::MAX as u32) as i32;
        let result = match self.kind {
            Kind::Interval => self
                .window
                .set_interval_with_callback_and_timeout_and_arguments_0(f, timeout),
            Kind::Timeout => self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(f, timeout),
        };
        match result {
            Ok(id) => self.handle = Some(id),
            Err(e) => log::warn!("could not schedule timer: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(id) = self.handle.take() {
            match self.kind {
                Kind::Interval => self.window.clear_interval_with_handle(id),
                Kind::Timeout => self.window.clear_timeout_with_handle(id),
            }
        }
    }
}

impl Drop for BrowserTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
