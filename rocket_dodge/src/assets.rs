//! Asset manifest
//!
//! Names every asset the game registers on the stage and loads them in one
//! pass. A load failure aborts the session; there is no in-game fallback
//! for missing art or audio.

use stage2d::stage::{Stage, StageError};

use crate::config::AssetConfig;

/// Rocket sprite
pub const ROCKET: &str = "rocket";

/// Asteroid sprite
pub const ASTEROID: &str = "asteroid";

/// Title-screen art
pub const TITLE: &str = "title";

/// Game-over art
pub const GAME_OVER: &str = "gameover";

/// UI font
pub const UI_FONT: &str = "ui_font";

/// Background music, looped from startup
pub const BACKGROUND_MUSIC: &str = "background_music";

/// One-shot collision sound
pub const COLLISION_SOUND: &str = "collision_sound";

/// Load every asset the game uses
///
/// # Errors
/// Returns the first [`StageError`] encountered; the caller treats that as
/// a session abort.
pub async fn load_all(stage: &mut Stage, config: &AssetConfig) -> Result<(), StageError> {
    stage.load_texture(ROCKET, &config.rocket_image).await?;
    stage.load_texture(ASTEROID, &config.asteroid_image).await?;
    stage.load_texture(TITLE, &config.title_image).await?;
    stage.load_texture(GAME_OVER, &config.game_over_image).await?;
    stage.load_font(UI_FONT, &config.font).await?;
    stage.load_sound(BACKGROUND_MUSIC, &config.background_music).await?;
    stage.load_sound(COLLISION_SOUND, &config.collision_sound).await?;
    log::info!("all assets loaded");
    Ok(())
}
