//! Canvas 2D renderer
//!
//! Draws the entity set onto an HTML canvas. World space is a 60x60 square
//! centered on the origin with +Y up; canvas Y points down, so the vertical
//! axis flips during projection.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{PARTICLE_LIFE_TICKS, VIEW_SIZE};
use crate::frontend::Renderer;
use crate::sim::GameState;

const SHIP_COLOR: &str = "#00ff00";
const ASTEROID_COLOR: &str = "#888888";
const BULLET_COLOR: &str = "#ffff00";
const PARTICLE_COLOR: &str = "#ff8800";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Bind to a canvas; None when a 2d context cannot be obtained
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// World position to canvas pixels (Y flipped)
    fn project(&self, x: f32, y: f32) -> (f64, f64) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let scale = w.min(h) / VIEW_SIZE as f64;
        (w / 2.0 + x as f64 * scale, h / 2.0 - y as f64 * scale)
    }

    fn scale(&self) -> f64 {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        w.min(h) / VIEW_SIZE as f64
    }

    fn draw_ship(&self, state: &GameState) {
        let ship = &state.ship;
        let scale = self.scale();
        let fwd = ship.forward();
        let side = glam::Vec2::new(fwd.y, -fwd.x);

        let nose = ship.pos + fwd * 1.5;
        let left = ship.pos - fwd * 0.75 - side * 0.75;
        let right = ship.pos - fwd * 0.75 + side * 0.75;

        let (nx, ny) = self.project(nose.x, nose.y);
        let (lx, ly) = self.project(left.x, left.y);
        let (rx, ry) = self.project(right.x, right.y);

        self.ctx.set_stroke_style_str(SHIP_COLOR);
        self.ctx.set_line_width((scale * 0.15).max(1.0));
        self.ctx.begin_path();
        self.ctx.move_to(nx, ny);
        self.ctx.line_to(lx, ly);
        self.ctx.line_to(rx, ry);
        self.ctx.close_path();
        self.ctx.stroke();
    }

    fn draw_asteroids(&self, state: &GameState) {
        let scale = self.scale();
        self.ctx.set_stroke_style_str(ASTEROID_COLOR);
        self.ctx.set_line_width((scale * 0.15).max(1.0));

        for rock in &state.asteroids {
            let (cx, cy) = self.project(rock.pos.x, rock.pos.y);
            let r = rock.radius() as f64 * scale;

            self.ctx.begin_path();
            self.ctx
                .arc(cx, cy, r, 0.0, std::f64::consts::TAU)
                .ok();
            self.ctx.stroke();

            // Spoke at the tumble angle so the spin reads on screen
            let (sx, sy) = (
                cx + r * rock.rot.z.cos() as f64,
                cy - r * rock.rot.z.sin() as f64,
            );
            self.ctx.begin_path();
            self.ctx.move_to(cx, cy);
            self.ctx.line_to(sx, sy);
            self.ctx.stroke();
        }
    }

    fn draw_bullets(&self, state: &GameState) {
        let scale = self.scale();
        self.ctx.set_fill_style_str(BULLET_COLOR);

        for bullet in &state.bullets {
            let (x, y) = self.project(bullet.pos.x, bullet.pos.y);
            self.ctx.begin_path();
            self.ctx
                .arc(x, y, scale * 0.3, 0.0, std::f64::consts::TAU)
                .ok();
            self.ctx.fill();
        }
    }

    fn draw_particles(&self, state: &GameState) {
        let scale = self.scale();
        self.ctx.set_fill_style_str(PARTICLE_COLOR);

        for particle in &state.particles {
            let (x, y) = self.project(particle.pos.x, particle.pos.y);
            // Fade out over the particle's lifetime
            let alpha = particle.life as f64 / PARTICLE_LIFE_TICKS as f64;
            self.ctx.set_global_alpha(alpha);
            self.ctx.begin_path();
            self.ctx
                .arc(x, y, scale * 0.2, 0.0, std::f64::consts::TAU)
                .ok();
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);
    }
}

impl Renderer for CanvasRenderer {
    fn render_frame(&mut self, state: &GameState) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;

        self.ctx.set_fill_style_str("#000000");
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.draw_particles(state);
        self.draw_bullets(state);
        self.draw_asteroids(state);
        self.draw_ship(state);
    }
}
