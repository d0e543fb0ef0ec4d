// Renderer struct that handles the 2d canvas calls for one frame of the hero
// animation: a cleared viewport, a filled circle per particle, and connection
// lines between nearby pairs.

use crate::color;
use crate::field::ParticleField;
use crate::particle::Particle;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    context: CanvasRenderingContext2d,
}

impl Renderer {
    // Pairs closer than this many pixels get a connecting line
    pub const CONNECTION_DISTANCE: f64 = 150.0;
    const CONNECTION_LINE_WIDTH: f64 = 1.0;

    // On creation grabs the 2d drawing context from the canvas element
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Renderer, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Renderer { context })
    }

    // One full frame pass over the field's current state
    pub fn render(&self, field: &ParticleField) -> Result<(), JsValue> {
        self.clear_screen(field.width(), field.height());
        self.render_particles(field.particles())?;
        self.render_connections(field.particles());
        Ok(())
    }

    pub fn clear_screen(&self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    pub fn render_particles(&self, particles: &[Particle]) -> Result<(), JsValue> {
        for particle in particles {
            self.context
                .set_fill_style(&JsValue::from_str(&particle.color.to_css_string()));
            self.context.begin_path();
            self.context.arc(
                particle.pos[0],
                particle.pos[1],
                particle.radius,
                0.0,
                std::f64::consts::PI * 2.0,
            )?;
            self.context.fill();
        }
        Ok(())
    }

    #[allow(deprecated)]
    pub fn render_connections(&self, particles: &[Particle]) {
        self.context.set_line_width(Self::CONNECTION_LINE_WIDTH);
        // The inner index starts at the outer one: each unordered pair gets
        // visited exactly once, and the self pair is a zero-length line that
        // never shows up.
        for i in 0..particles.len() {
            for j in i..particles.len() {
                let distance = particles[i].distance_to(&particles[j]);
                if distance < Self::CONNECTION_DISTANCE {
                    let stroke = color::ACCENT.with_alpha(connection_opacity(distance));
                    self.context
                        .set_stroke_style(&JsValue::from_str(&stroke.to_css_string()));
                    self.context.begin_path();
                    self.context
                        .move_to(particles[i].pos[0], particles[i].pos[1]);
                    self.context
                        .line_to(particles[j].pos[0], particles[j].pos[1]);
                    self.context.stroke();
                }
            }
        }
    }
}

// Connection lines fade out linearly with distance and hit fully transparent
// right at the cutoff.
pub fn connection_opacity(distance: f64) -> f64 {
    0.1 - distance / 1500.0
}
