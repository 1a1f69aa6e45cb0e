//! Game entities: the player rocket and falling asteroids

use rand::Rng;

/// Off-screen band above and below the playfield, in pixels
///
/// Asteroids spawn this far above the top edge and respawn once they have
/// fallen this far past the bottom edge.
pub const SPAWN_MARGIN: f32 = 50.0;

/// Fall speed range for a freshly spawned asteroid, pixels per tick
pub const SPAWN_SPEED_RANGE: std::ops::Range<f32> = 3.0..8.0;

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    /// Playfield width
    pub width: f32,

    /// Playfield height
    pub height: f32,
}

/// Cached half-extents of an entity's bitmap
///
/// Movement clamping uses both extents; the collision radius is half the
/// bitmap width.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    /// Half the bitmap width
    pub half_width: f32,

    /// Half the bitmap height
    pub half_height: f32,
}

impl Sprite {
    /// Build from full bitmap dimensions
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    /// Collision radius: half the bitmap width
    #[must_use]
    pub fn radius(self) -> f32 {
        self.half_width
    }
}

/// Held-key state sampled once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveInput {
    /// Move up
    pub up: bool,

    /// Move down
    pub down: bool,

    /// Move left
    pub left: bool,

    /// Move right
    pub right: bool,
}

/// The player-controlled rocket
///
/// One instance per session, owned by the game state and mutated every tick
/// by player input.
#[derive(Debug, Clone)]
pub struct Rocket {
    /// Center x position
    pub x: f32,

    /// Center y position
    pub y: f32,

    /// Movement speed in pixels per tick
    pub speed: f32,

    /// Bitmap half-extents
    pub sprite: Sprite,
}

impl Rocket {
    /// Create a rocket at the center of the playfield
    #[must_use]
    pub fn new(bounds: Bounds, speed: f32, sprite: Sprite) -> Self {
        Self {
            x: bounds.width / 2.0,
            y: bounds.height / 2.0,
            speed,
            sprite,
        }
    }

    /// Apply one tick of player movement
    ///
    /// Each axis moves independently at full speed; holding two keys gives
    /// full speed on both axes (arcade feel, intentional). A move is skipped
    /// when it would push the sprite's edge past the playfield boundary, so
    /// a rocket starting inside the bounds stays inside them.
    pub fn update(&mut self, input: MoveInput, bounds: Bounds) {
        let Sprite {
            half_width,
            half_height,
        } = self.sprite;

        if input.up && self.y - self.speed >= half_height {
            self.y -= self.speed;
        }
        if input.down && self.y + self.speed <= bounds.height - half_height {
            self.y += self.speed;
        }
        if input.left && self.x - self.speed >= half_width {
            self.x -= self.speed;
        }
        if input.right && self.x + self.speed <= bounds.width - half_width {
            self.x += self.speed;
        }
    }
}

/// A falling asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    /// Center x position
    pub x: f32,

    /// Center y position
    pub y: f32,

    /// Fall speed in pixels per tick; grows over the game's lifetime
    pub speed: f32,

    /// Bitmap half-extents
    pub sprite: Sprite,
}

impl Asteroid {
    /// Spawn an asteroid just above the playfield
    ///
    /// Position is uniform across the playfield width at `y = -SPAWN_MARGIN`;
    /// speed is uniform in [`SPAWN_SPEED_RANGE`].
    pub fn spawn(rng: &mut impl Rng, bounds: Bounds, sprite: Sprite) -> Self {
        Self {
            x: rng.gen_range(0.0..bounds.width),
            y: -SPAWN_MARGIN,
            speed: rng.gen_range(SPAWN_SPEED_RANGE),
            sprite,
        }
    }

    /// Advance one tick of falling
    ///
    /// Once the asteroid has fallen `SPAWN_MARGIN` past the bottom edge it
    /// respawns in place: same collection slot, fresh position and speed.
    /// A respawn discards any accumulated speed increments.
    pub fn update(&mut self, rng: &mut impl Rng, bounds: Bounds) {
        self.y += self.speed;
        if self.y > bounds.height + SPAWN_MARGIN {
            *self = Self::spawn(rng, bounds, self.sprite);
        }
    }

    /// Collision radius: half the bitmap width
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.sprite.radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn sprite() -> Sprite {
        Sprite::from_size(64.0, 48.0)
    }

    #[test]
    fn test_rocket_starts_centered() {
        let rocket = Rocket::new(BOUNDS, 5.0, sprite());
        assert_eq!(rocket.x, 400.0);
        assert_eq!(rocket.y, 300.0);
    }

    #[test]
    fn test_rocket_moves_full_speed_on_both_axes() {
        let mut rocket = Rocket::new(BOUNDS, 5.0, sprite());
        let input = MoveInput {
            up: true,
            left: true,
            ..MoveInput::default()
        };

        rocket.update(input, BOUNDS);

        // No diagonal normalization: each held axis moves the full 5 px.
        assert_eq!(rocket.x, 395.0);
        assert_eq!(rocket.y, 295.0);
    }

    #[test]
    fn test_rocket_stays_within_bounds() {
        let sprite = sprite();
        let directions = [
            MoveInput {
                up: true,
                ..MoveInput::default()
            },
            MoveInput {
                down: true,
                ..MoveInput::default()
            },
            MoveInput {
                left: true,
                ..MoveInput::default()
            },
            MoveInput {
                right: true,
                ..MoveInput::default()
            },
        ];

        for input in directions {
            let mut rocket = Rocket::new(BOUNDS, 5.0, sprite);

            // Far more ticks than needed to reach any edge.
            for _ in 0..500 {
                rocket.update(input, BOUNDS);
                assert!(rocket.x >= sprite.half_width);
                assert!(rocket.x <= BOUNDS.width - sprite.half_width);
                assert!(rocket.y >= sprite.half_height);
                assert!(rocket.y <= BOUNDS.height - sprite.half_height);
            }
        }
    }

    #[test]
    fn test_rocket_stops_short_of_edge_rather_than_overshooting() {
        let sprite = sprite();
        let mut rocket = Rocket::new(BOUNDS, 5.0, sprite);
        rocket.x = sprite.half_width + 2.0;

        let input = MoveInput {
            left: true,
            ..MoveInput::default()
        };
        rocket.update(input, BOUNDS);

        // A full step would cross the edge, so the move is skipped.
        assert_eq!(rocket.x, sprite.half_width + 2.0);
    }

    #[test]
    fn test_asteroid_spawns_above_playfield() {
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..100 {
            let asteroid = Asteroid::spawn(&mut rng, BOUNDS, sprite());
            assert!(asteroid.x >= 0.0 && asteroid.x < BOUNDS.width);
            assert_eq!(asteroid.y, -SPAWN_MARGIN);
            assert!(asteroid.speed >= 3.0 && asteroid.speed < 8.0);
        }
    }

    #[test]
    fn test_asteroid_falls_by_its_speed() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut asteroid = Asteroid::spawn(&mut rng, BOUNDS, sprite());
        asteroid.speed = 4.0;
        let start_y = asteroid.y;

        asteroid.update(&mut rng, BOUNDS);
        approx::assert_relative_eq!(asteroid.y, start_y + 4.0);
    }

    #[test]
    fn test_asteroid_respawns_after_leaving_playfield() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut asteroid = Asteroid::spawn(&mut rng, BOUNDS, sprite());

        // Accumulated speed increments are discarded on respawn.
        asteroid.speed = 20.5;
        asteroid.y = BOUNDS.height + SPAWN_MARGIN;

        asteroid.update(&mut rng, BOUNDS);

        assert_eq!(asteroid.y, -SPAWN_MARGIN);
        assert!(asteroid.speed >= 3.0 && asteroid.speed < 8.0);
        assert!(asteroid.x >= 0.0 && asteroid.x < BOUNDS.width);
    }

    #[test]
    fn test_asteroid_just_past_bottom_is_not_respawned() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut asteroid = Asteroid::spawn(&mut rng, BOUNDS, sprite());
        asteroid.speed = 5.0;
        asteroid.y = BOUNDS.height + 10.0;

        asteroid.update(&mut rng, BOUNDS);

        // Still inside the off-screen band below the playfield.
        assert_eq!(asteroid.y, BOUNDS.height + 15.0);
    }
}
