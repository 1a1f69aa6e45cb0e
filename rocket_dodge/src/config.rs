//! Game configuration
//!
//! Loaded from `rocket_dodge.toml` next to the binary; every field falls
//! back to the defaults below when the file or the field is absent.

use serde::{Deserialize, Serialize};
use stage2d::config::Config;

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window settings
    pub window: WindowConfig,

    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Asset file paths
    pub assets: AssetConfig,
}

impl Config for GameConfig {}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Rocket movement speed in pixels per tick
    pub rocket_speed: f32,

    /// Seconds of play between asteroid spawns
    pub spawn_interval: f32,

    /// Speed added to every asteroid in play at each spawn
    pub speed_increment: f32,

    /// Duration of the explosion effect in seconds
    pub explosion_duration: f32,

    /// Pacing delay between explosion frames in milliseconds
    pub explosion_frame_delay_ms: u64,

    /// How long the score screen is held, in milliseconds
    pub game_over_hold_ms: u64,
}

/// Asset file paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Rocket sprite
    pub rocket_image: String,

    /// Asteroid sprite
    pub asteroid_image: String,

    /// Title-screen art
    pub title_image: String,

    /// Game-over art
    pub game_over_image: String,

    /// UI font
    pub font: String,

    /// Background music, looped from startup
    pub background_music: String,

    /// One-shot collision sound
    pub collision_sound: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Rocket Dodge".to_string(),
            width: 800,
            height: 600,
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            rocket_speed: 5.0,
            spawn_interval: 5.0,
            speed_increment: 0.5,
            explosion_duration: 2.0,
            explosion_frame_delay_ms: 100,
            game_over_hold_ms: 4000,
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            rocket_image: "assets/images/rocket.png".to_string(),
            asteroid_image: "assets/images/asteroid.png".to_string(),
            title_image: "assets/images/title.png".to_string(),
            game_over_image: "assets/images/gameover.png".to_string(),
            font: "assets/fonts/arial.ttf".to_string(),
            background_music: "assets/sounds/backgroundmusic.ogg".to_string(),
            collision_sound: "assets/sounds/explosionnoise.ogg".to_string(),
        }
    }
}
