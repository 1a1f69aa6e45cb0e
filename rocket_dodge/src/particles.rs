//! Explosion particle effect
//!
//! A burst of small dots scattered from the collision point, fading out as
//! their lifespan runs down. The particle list is a field of the game state,
//! not process-wide data, so tests can drive it directly.

use rand::Rng;
use stage2d::prelude::{Color, Stage};

/// Particles per burst
const BURST_SIZE: usize = 50;

/// Initial lifespan in ticks
const LIFESPAN_TICKS: u32 = 60;

/// Velocity components are sampled uniformly from `[-MAX_SPREAD, MAX_SPREAD)`
const MAX_SPREAD: f32 = 3.0;

/// Draw radius of a particle, in pixels
const PARTICLE_RADIUS: f32 = 3.0;

/// A single explosion fragment
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position x
    pub x: f32,

    /// Position y
    pub y: f32,

    /// Velocity x, pixels per tick
    pub dx: f32,

    /// Velocity y, pixels per tick
    pub dy: f32,

    /// Remaining lifetime in ticks
    pub lifespan: u32,
}

/// Owns every live particle
#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    /// Create an empty particle system
    #[must_use]
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Emit a burst of particles at the given position
    ///
    /// Each particle starts at (`x`, `y`) with velocity components sampled
    /// independently, so the burst spreads in a rough square.
    pub fn emit(&mut self, rng: &mut impl Rng, x: f32, y: f32) {
        for _ in 0..BURST_SIZE {
            self.particles.push(Particle {
                x,
                y,
                dx: rng.gen_range(-MAX_SPREAD..MAX_SPREAD),
                dy: rng.gen_range(-MAX_SPREAD..MAX_SPREAD),
                lifespan: LIFESPAN_TICKS,
            });
        }
    }

    /// Advance every particle one tick and drop the expired ones
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.dx;
            particle.y += particle.dy;
            particle.lifespan -= 1;
        }
        self.particles.retain(|particle| particle.lifespan > 0);
    }

    /// Draw every particle as a fading orange dot
    ///
    /// Alpha is proportional to remaining lifespan, clamped at the u8
    /// boundary (a fresh particle's `60 * 5` would otherwise overflow).
    pub fn render(&self, stage: &Stage) {
        for particle in &self.particles {
            let alpha = (particle.lifespan * 5).min(255) as u8;
            stage.fill_circle(
                particle.x,
                particle.y,
                PARTICLE_RADIUS,
                Color::from_rgba(255, 200, 0, alpha),
            );
        }
    }

    /// Number of live particles
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether no particles are live
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterate over the live particles
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
