// The hero background simulation: a fixed population of slow particles
// drifting and bouncing around the viewport

use crate::color;
use crate::particle::Particle;
use rand::Rng;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub const PARTICLE_COUNT: usize = 50;

    pub fn new(width: f64, height: f64) -> ParticleField {
        let mut particles = Vec::with_capacity(Self::PARTICLE_COUNT);
        let mut rng = rand::thread_rng();
        let vel_spread = 0.5;
        let min_radius = 1.0;
        let max_radius = 3.0;
        let max_alpha = 0.5;
        for _ in 0..Self::PARTICLE_COUNT {
            let pos_x = rng.gen::<f64>() * width;
            let pos_y = rng.gen::<f64>() * height;
            let vel_x = (rng.gen::<f64>() - 0.5) * vel_spread;
            let vel_y = (rng.gen::<f64>() - 0.5) * vel_spread;
            let radius = rng.gen::<f64>() * (max_radius - min_radius) + min_radius;
            let color = color::ACCENT.with_alpha(rng.gen::<f64>() * max_alpha);
            particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color));
        }
        ParticleField {
            width,
            height,
            particles,
        }
    }

    // New bounds take effect from the next update; particles already outside
    // them are left where they are.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.pos[0] += particle.vel[0];
            particle.pos[1] += particle.vel[1];
            // Bounce off the edges: only the velocity sign flips, the position
            // is never pulled back inside the bounds. Landing exactly on an
            // edge does not count as leaving it.
            if particle.pos[0] < 0.0 || particle.pos[0] > self.width {
                particle.vel[0] *= -1.0;
            }
            if particle.pos[1] < 0.0 || particle.pos[1] > self.height {
                particle.vel[1] *= -1.0;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
