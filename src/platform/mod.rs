pub mod listeners;
pub mod media;
pub mod storage;
pub mod timers;

pub use listeners::{Listener, bind_input, bind_video_end};
pub use media::{BackgroundMusic, HtmlVideoSurface};
pub use storage::LocalStore;
pub use timers::BrowserTimer;
