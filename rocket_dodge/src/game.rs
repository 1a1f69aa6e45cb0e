//! Game state machine and per-tick simulation
//!
//! All mutable state lives on [`Game`]: the rocket, the asteroid collection,
//! the particle system, the spawn timer, and the two score quantities. The
//! main loop drives phase transitions; everything here is pure state
//! mutation, testable without a window.

use rand::rngs::SmallRng;

use crate::collision::circles_collide;
use crate::components::{Asteroid, Bounds, MoveInput, Rocket, Sprite};
use crate::config::GameplayConfig;
use crate::particles::ParticleSystem;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting on the title screen for the confirm key
    Title,

    /// Rocket under player control, asteroids falling
    Playing,

    /// Post-collision explosion effect
    Exploding,

    /// Static score screen
    GameOver,

    /// Session is over; the loop exits
    Terminated,
}

/// Result of one Playing-phase tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No collision this tick
    Continue,

    /// The rocket hit an asteroid at the given position
    Collision {
        /// Collision x (the asteroid's center)
        x: f32,

        /// Collision y (the asteroid's center)
        y: f32,
    },
}

/// All mutable game state, exclusively owned by the main loop
pub struct Game {
    phase: Phase,
    bounds: Bounds,
    rocket: Rocket,
    asteroids: Vec<Asteroid>,
    particles: ParticleSystem,
    asteroid_sprite: Sprite,
    spawn_timer: f32,
    spawn_interval: f32,
    speed_increment: f32,
    survival_ticks: u64,
    rng: SmallRng,
}

impl Game {
    /// Create a fresh game on the title screen
    ///
    /// Sprites carry the bitmap half-extents measured after asset loading;
    /// the RNG is injected so tests can seed it.
    #[must_use]
    pub fn new(
        config: &GameplayConfig,
        bounds: Bounds,
        rocket_sprite: Sprite,
        asteroid_sprite: Sprite,
        rng: SmallRng,
    ) -> Self {
        Self {
            phase: Phase::Title,
            bounds,
            rocket: Rocket::new(bounds, config.rocket_speed, rocket_sprite),
            asteroids: Vec::new(),
            particles: ParticleSystem::new(),
            asteroid_sprite,
            spawn_timer: 0.0,
            spawn_interval: config.spawn_interval,
            speed_increment: config.speed_increment,
            survival_ticks: 0,
            rng,
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Leave the title screen and start play
    pub fn start_playing(&mut self) {
        self.phase = Phase::Playing;
        log::info!("game started");
    }

    /// End the session immediately (cancel key or window close)
    pub fn terminate(&mut self) {
        self.phase = Phase::Terminated;
        log::info!("session terminated by player");
    }

    /// Leave the explosion effect for the score screen
    pub fn finish_explosion(&mut self) {
        self.phase = Phase::GameOver;
    }

    /// Advance the Playing phase by one tick
    ///
    /// Order per tick: rocket movement, spawn cadence, asteroid movement and
    /// collision, then score and particle upkeep. `delta_time` is the
    /// wall-clock seconds since the previous tick.
    pub fn tick(&mut self, input: MoveInput, delta_time: f32) -> TickOutcome {
        self.rocket.update(input, self.bounds);

        // The timer accrues the true per-tick delta, so the cadence is one
        // spawn per interval of wall-clock play.
        self.spawn_timer += delta_time;
        if self.spawn_timer >= self.spawn_interval {
            for asteroid in &mut self.asteroids {
                asteroid.speed += self.speed_increment;
            }
            self.asteroids
                .push(Asteroid::spawn(&mut self.rng, self.bounds, self.asteroid_sprite));
            self.spawn_timer = 0.0;
            log::debug!("asteroid spawned, {} in play", self.asteroids.len());
        }

        let mut hit = None;
        for asteroid in &mut self.asteroids {
            asteroid.update(&mut self.rng, self.bounds);
            if circles_collide(
                self.rocket.x,
                self.rocket.y,
                self.rocket.sprite.radius(),
                asteroid.x,
                asteroid.y,
                asteroid.radius(),
            ) {
                hit = Some((asteroid.x, asteroid.y));
                break;
            }
        }

        if let Some((x, y)) = hit {
            self.particles.emit(&mut self.rng, x, y);
            self.phase = Phase::Exploding;
            log::info!(
                "collision at ({x:.0}, {y:.0}) after {} ticks survived",
                self.survival_ticks
            );
            return TickOutcome::Collision { x, y };
        }

        self.survival_ticks += 1;
        self.particles.advance();
        TickOutcome::Continue
    }

    /// Advance one iteration of the explosion effect
    ///
    /// Render-only phase: asteroids and the rocket freeze, only the
    /// particles keep moving.
    pub fn explosion_tick(&mut self) {
        self.particles.advance();
    }

    /// Ticks survived before the collision
    ///
    /// One of the two score quantities; counted per tick, never displayed
    /// on the score screen.
    #[must_use]
    pub fn survival_ticks(&self) -> u64 {
        self.survival_ticks
    }

    /// Score shown on the game-over screen
    ///
    /// The number of asteroids that entered play, not the tick count.
    /// Respawns reuse their slot, so they do not inflate this value.
    #[must_use]
    pub fn displayed_score(&self) -> usize {
        self.asteroids.len()
    }

    /// The player rocket, for rendering
    #[must_use]
    pub fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    /// The asteroids in play, for rendering
    #[must_use]
    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    /// The live particles, for rendering
    #[must_use]
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn test_game() -> Game {
        let config = GameplayConfig {
            rocket_speed: 5.0,
            spawn_interval: 5.0,
            speed_increment: 0.5,
            ..GameplayConfig::default()
        };
        Game::new(
            &config,
            BOUNDS,
            Sprite::from_size(64.0, 48.0),
            Sprite::from_size(40.0, 40.0),
            SmallRng::seed_from_u64(99),
        )
    }

    #[test]
    fn test_phase_transitions() {
        let mut game = test_game();
        assert_eq!(game.phase(), Phase::Title);

        game.start_playing();
        assert_eq!(game.phase(), Phase::Playing);

        game.terminate();
        assert_eq!(game.phase(), Phase::Terminated);
    }

    #[test]
    fn test_spawn_timer_accrues_across_ticks() {
        let mut game = test_game();
        game.start_playing();

        game.tick(MoveInput::default(), 4.9);
        assert!(game.asteroids.is_empty());

        // 4.9 + 0.2 crosses the 5-second interval.
        game.tick(MoveInput::default(), 0.2);
        assert_eq!(game.asteroids.len(), 1);
        assert_eq!(game.spawn_timer, 0.0);
    }

    #[test]
    fn test_spawn_appends_one_and_accelerates_existing() {
        let mut game = test_game();
        game.start_playing();

        game.tick(MoveInput::default(), 5.0);
        assert_eq!(game.asteroids.len(), 1);
        let first_speed = game.asteroids[0].speed;

        game.tick(MoveInput::default(), 5.0);
        assert_eq!(game.asteroids.len(), 2);

        // The pre-existing asteroid gains 0.5; the new one keeps its
        // sampled speed.
        approx::assert_relative_eq!(game.asteroids[0].speed, first_speed + 0.5);
        assert!(game.asteroids[1].speed >= 3.0 && game.asteroids[1].speed < 8.0);
    }

    #[test]
    fn test_survival_ticks_count_collision_free_ticks() {
        let mut game = test_game();
        game.start_playing();

        for _ in 0..10 {
            game.tick(MoveInput::default(), 0.016);
        }
        assert_eq!(game.survival_ticks(), 10);
    }

    #[test]
    fn test_collision_emits_burst_and_enters_exploding() {
        let mut game = test_game();
        game.start_playing();

        // Park an asteroid on top of the rocket. The tick moves it down by
        // its speed before testing, so the overlap survives the move.
        let rocket_x = game.rocket.x;
        let rocket_y = game.rocket.y;
        game.asteroids.push(Asteroid {
            x: rocket_x,
            y: rocket_y - 1.0,
            speed: 1.0,
            sprite: Sprite::from_size(40.0, 40.0),
        });

        let outcome = game.tick(MoveInput::default(), 0.016);

        assert_eq!(
            outcome,
            TickOutcome::Collision {
                x: rocket_x,
                y: rocket_y
            }
        );
        assert_eq!(game.phase(), Phase::Exploding);
        assert_eq!(game.particles.len(), 50);
        assert!(game
            .particles
            .iter()
            .all(|p| p.x == rocket_x && p.y == rocket_y));

        // The collision tick does not count as survived.
        assert_eq!(game.survival_ticks(), 0);
    }

    #[test]
    fn test_displayed_score_and_survival_ticks_are_distinct() {
        let mut game = test_game();
        game.start_playing();

        // Two spawns, then a stretch of quiet ticks.
        game.tick(MoveInput::default(), 5.0);
        game.tick(MoveInput::default(), 5.0);
        for _ in 0..20 {
            game.tick(MoveInput::default(), 0.016);
        }

        assert_eq!(game.displayed_score(), 2);
        assert_eq!(game.survival_ticks(), 22);
    }

    #[test]
    fn test_explosion_tick_advances_particles_only() {
        let mut game = test_game();
        game.start_playing();
        game.asteroids.push(Asteroid {
            x: game.rocket.x,
            y: game.rocket.y,
            speed: 0.0,
            sprite: Sprite::from_size(40.0, 40.0),
        });
        game.tick(MoveInput::default(), 0.016);
        assert_eq!(game.phase(), Phase::Exploding);

        let asteroid_y = game.asteroids[0].y;
        let lifespans_before: Vec<u32> = game.particles.iter().map(|p| p.lifespan).collect();

        game.explosion_tick();

        assert_eq!(game.asteroids[0].y, asteroid_y);
        for (particle, before) in game.particles.iter().zip(lifespans_before) {
            assert_eq!(particle.lifespan, before - 1);
        }

        game.finish_explosion();
        assert_eq!(game.phase(), Phase::GameOver);
    }
}
