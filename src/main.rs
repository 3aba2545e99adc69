mod components;
mod config;
mod error;
mod game;
mod input;
mod leaderboard;
mod model;
mod platform;
mod render;
mod session;
mod util;

use components::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    yew::Renderer::<App>::new().render();
}
