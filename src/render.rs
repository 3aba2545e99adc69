use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Render;
use crate::model::{Direction, Frame, Position};

const BACKGROUND: &str = "#1a1a2e";
const FOOD: &str = "#ff4444";
const HEAD: &str = "#00ff88";
const EYE_SIZE: f64 = 3.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    canvas_size: f64,
    tile: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, config: &GameConfig) -> Result<Self, GameError> {
        canvas.set_width(config.canvas_size);
        canvas.set_height(config.canvas_size);
        let ctx = canvas
            .get_context("2d")?
            .ok_or(GameError::CanvasUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::CanvasUnavailable)?;
        Ok(Self {
            ctx,
            canvas_size: config.canvas_size as f64,
            tile: config.tile_size as f64,
        })
    }

    fn draw_background(&self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.canvas_size, self.canvas_size);
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx
            .fill_rect(0.0, 0.0, self.canvas_size, self.canvas_size);
    }

    fn draw_food(&self, food: Position) {
        let padding = 2.0;
        let size = self.tile - padding * 2.0;
        self.ctx.set_fill_style_str(FOOD);
        self.ctx.fill_rect(
            food.x as f64 * self.tile + padding,
            food.y as f64 * self.tile + padding,
            size,
            size,
        );
    }

    fn draw_cell(&self, x: f64, y: f64) {
        let padding = 1.0;
        let size = self.tile - padding * 2.0;
        self.ctx.fill_rect(x + padding, y + padding, size, size);
    }

    fn draw_snake(&self, frame: &Frame<'_>) {
        for (index, segment) in frame.snake.iter().enumerate() {
            let x = segment.x as f64 * self.tile;
            let y = segment.y as f64 * self.tile;
            if index == 0 {
                self.ctx.set_fill_style_str(HEAD);
                self.draw_cell(x, y);
                self.ctx.set_fill_style_str(BACKGROUND);
                for (ex, ey) in eye_positions(x, y, self.tile, frame.direction) {
                    self.ctx.fill_rect(ex, ey, EYE_SIZE, EYE_SIZE);
                }
            } else {
                self.ctx.set_fill_style_str(&body_color(index));
                self.draw_cell(x, y);
            }
        }
    }
}

impl Render for CanvasRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.draw_background();
        self.draw_food(frame.food);
        self.draw_snake(frame);
    }
}

pub fn body_color(index: usize) -> String {
    let fade = (index as i64 * 8).min(155);
    format!("rgb(0, {}, 100)", 255 - fade)
}

pub fn eye_positions(x: f64, y: f64, tile: f64, dir: Direction) -> [(f64, f64); 2] {
    let center = tile / 2.0;
    let offset = 5.0;
    let near = offset;
    let far = center + 2.0;
    if dir.x == 1 {
        [(x + 12.0, y + near), (x + 12.0, y + far)]
    } else if dir.x == -1 {
        [(x + near, y + near), (x + near, y + far)]
    } else if dir.y == -1 {
        [(x + near, y + near), (x + far, y + near)]
    } else {
        [(x + near, y + far), (x + far, y + far)]
    }
}
