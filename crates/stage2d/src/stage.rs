//! Named-asset registry and the draw/audio/present primitives games consume
//!
//! A [`Stage`] owns every texture, font, and sound the game loads, keyed by
//! the name the game chose at load time. Draw and playback calls look assets
//! up by name and fail with [`StageError::Unknown`] when the name was never
//! registered, so a missing asset surfaces as an error instead of a panic.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use macroquad::audio::{self, PlaySoundParams, Sound};
use macroquad::prelude::{
    clear_background, draw_circle, draw_text_ex, draw_texture, is_quit_requested, measure_text,
    next_frame, prevent_quit, Color, Font, TextParams, Texture2D, WHITE,
};
use thiserror::Error;

/// Errors surfaced by the presentation layer
#[derive(Error, Debug)]
pub enum StageError {
    /// An asset file could not be read or decoded
    #[error("failed to load {kind} '{name}' from '{path}': {detail}")]
    Load {
        /// Asset kind ("texture", "font", or "sound")
        kind: &'static str,

        /// Name the asset was being registered under
        name: String,

        /// Path the load was attempted from
        path: String,

        /// Toolkit-reported failure detail
        detail: String,
    },

    /// A draw or playback call referenced a name that was never loaded
    #[error("unknown {kind} '{name}'")]
    Unknown {
        /// Asset kind ("texture", "font", or "sound")
        kind: &'static str,

        /// The unregistered name
        name: String,
    },
}

/// Asset registry plus draw, audio, input-adjacent, and pacing primitives
///
/// One `Stage` is created per session, after the window exists. All methods
/// are synchronous except asset loading and [`Stage::present`], which yield
/// to the toolkit's frame machinery.
pub struct Stage {
    textures: HashMap<String, Texture2D>,
    fonts: HashMap<String, Font>,
    sounds: HashMap<String, Sound>,
    last_frame: Instant,
}

impl Stage {
    /// Create an empty stage
    ///
    /// Registers interest in the window-close event so it is observable via
    /// [`Stage::quit_requested`] rather than tearing the process down
    /// mid-frame.
    #[must_use]
    pub fn new() -> Self {
        prevent_quit();
        Self {
            textures: HashMap::new(),
            fonts: HashMap::new(),
            sounds: HashMap::new(),
            last_frame: Instant::now(),
        }
    }

    /// Load a bitmap and register it under `name`
    ///
    /// # Errors
    /// Returns [`StageError::Load`] when the file is missing or not a
    /// supported image format.
    pub async fn load_texture(&mut self, name: &str, path: &str) -> Result<(), StageError> {
        let texture = macroquad::texture::load_texture(path)
            .await
            .map_err(|e| load_error("texture", name, path, &e))?;
        log::debug!("loaded texture '{name}' from '{path}'");
        self.textures.insert(name.to_string(), texture);
        Ok(())
    }

    /// Load a TTF font and register it under `name`
    ///
    /// # Errors
    /// Returns [`StageError::Load`] when the file is missing or not a valid
    /// font.
    pub async fn load_font(&mut self, name: &str, path: &str) -> Result<(), StageError> {
        let font = macroquad::text::load_ttf_font(path)
            .await
            .map_err(|e| load_error("font", name, path, &e))?;
        log::debug!("loaded font '{name}' from '{path}'");
        self.fonts.insert(name.to_string(), font);
        Ok(())
    }

    /// Load a sound file and register it under `name`
    ///
    /// # Errors
    /// Returns [`StageError::Load`] when the file is missing or not a
    /// supported audio format.
    pub async fn load_sound(&mut self, name: &str, path: &str) -> Result<(), StageError> {
        let sound = audio::load_sound(path)
            .await
            .map_err(|e| load_error("sound", name, path, &e))?;
        log::debug!("loaded sound '{name}' from '{path}'");
        self.sounds.insert(name.to_string(), sound);
        Ok(())
    }

    /// Get the pixel dimensions of a registered texture
    ///
    /// # Errors
    /// Returns [`StageError::Unknown`] when no texture is registered under
    /// `name`.
    pub fn texture_size(&self, name: &str) -> Result<(f32, f32), StageError> {
        let texture = self.texture(name)?;
        Ok((texture.width(), texture.height()))
    }

    /// Draw a texture with its center at (`x`, `y`)
    ///
    /// # Errors
    /// Returns [`StageError::Unknown`] when no texture is registered under
    /// `name`.
    pub fn draw_sprite_centered(&self, name: &str, x: f32, y: f32) -> Result<(), StageError> {
        let texture = self.texture(name)?;
        draw_texture(
            texture,
            x - texture.width() / 2.0,
            y - texture.height() / 2.0,
            WHITE,
        );
        Ok(())
    }

    /// Draw a texture with its top-left corner at (`x`, `y`)
    ///
    /// # Errors
    /// Returns [`StageError::Unknown`] when no texture is registered under
    /// `name`.
    pub fn draw_image_at(&self, name: &str, x: f32, y: f32) -> Result<(), StageError> {
        let texture = self.texture(name)?;
        draw_texture(texture, x, y, WHITE);
        Ok(())
    }

    /// Measure the rendered width of `text` in pixels
    ///
    /// # Errors
    /// Returns [`StageError::Unknown`] when no font is registered under
    /// `font_name`.
    pub fn text_width(&self, text: &str, font_name: &str, size: u16) -> Result<f32, StageError> {
        let font = self.font(font_name)?;
        Ok(measure_text(text, Some(font), size, 1.0).width)
    }

    /// Draw a line of text with its baseline-left at (`x`, `y`)
    ///
    /// # Errors
    /// Returns [`StageError::Unknown`] when no font is registered under
    /// `font_name`.
    pub fn draw_text_line(
        &self,
        text: &str,
        font_name: &str,
        size: u16,
        color: Color,
        x: f32,
        y: f32,
    ) -> Result<(), StageError> {
        let font = self.font(font_name)?;
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: Some(font),
                font_size: size,
                color,
                ..Default::default()
            },
        );
        Ok(())
    }

    /// Draw a line of text horizontally centered within `screen_width`
    ///
    /// # Errors
    /// Returns [`StageError::Unknown`] when no font is registered under
    /// `font_name`.
    pub fn draw_text_centered(
        &self,
        text: &str,
        font_name: &str,
        size: u16,
        color: Color,
        screen_width: f32,
        y: f32,
    ) -> Result<(), StageError> {
        let width = self.text_width(text, font_name, size)?;
        self.draw_text_line(text, font_name, size, color, (screen_width - width) / 2.0, y)
    }

    /// Draw a filled circle
    pub fn fill_circle(&self, x: f32, y: f32, radius: f32, color: Color) {
        draw_circle(x, y, radius, color);
    }

    /// Fill the frame with a solid color
    pub fn clear(&self, color: Color) {
        clear_background(color);
    }

    /// Start a sound playing on repeat
    ///
    /// # Errors
    /// Returns [`StageError::Unknown`] when no sound is registered under
    /// `name`.
    pub fn play_sound_looped(&self, name: &str) -> Result<(), StageError> {
        audio::play_sound(
            self.sound(name)?,
            PlaySoundParams {
                looped: true,
                volume: 1.0,
            },
        );
        Ok(())
    }

    /// Play a sound once
    ///
    /// # Errors
    /// Returns [`StageError::Unknown`] when no sound is registered under
    /// `name`.
    pub fn play_sound_once(&self, name: &str) -> Result<(), StageError> {
        audio::play_sound_once(self.sound(name)?);
        Ok(())
    }

    /// Whether the user asked to close the window
    ///
    /// Checked once per loop iteration by callers; the request stays set
    /// until the process exits.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        is_quit_requested()
    }

    /// Finish the current frame, poll window events, and hold the pace
    ///
    /// After the toolkit flips the frame, sleeps away whatever remains of
    /// the `1 / target_fps` frame budget, so per-tick quantities advance at
    /// the same real-time rate on every display. A `target_fps` of 0 leaves
    /// the rate uncapped.
    pub async fn present(&mut self, target_fps: u32) {
        next_frame().await;
        if let Some(remaining) = frame_budget_remaining(target_fps, self.last_frame.elapsed()) {
            std::thread::sleep(remaining);
        }
        self.last_frame = Instant::now();
    }

    /// Block the loop for a fixed pacing delay
    ///
    /// The session is a single cooperative loop, so a blocking sleep is the
    /// whole program pausing. Used for the explosion pacing interval and the
    /// game-over hold.
    pub fn sleep_ms(&self, millis: u64) {
        std::thread::sleep(Duration::from_millis(millis));
    }

    fn texture(&self, name: &str) -> Result<&Texture2D, StageError> {
        self.textures.get(name).ok_or_else(|| unknown("texture", name))
    }

    fn font(&self, name: &str) -> Result<&Font, StageError> {
        self.fonts.get(name).ok_or_else(|| unknown("font", name))
    }

    fn sound(&self, name: &str) -> Result<&Sound, StageError> {
        self.sounds.get(name).ok_or_else(|| unknown("sound", name))
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

fn load_error(
    kind: &'static str,
    name: &str,
    path: &str,
    detail: &dyn std::fmt::Display,
) -> StageError {
    StageError::Load {
        kind,
        name: name.to_string(),
        path: path.to_string(),
        detail: detail.to_string(),
    }
}

fn unknown(kind: &'static str, name: &str) -> StageError {
    StageError::Unknown {
        kind,
        name: name.to_string(),
    }
}

/// Time left in the frame budget, or `None` when the frame already ran long
/// (or the rate is uncapped)
fn frame_budget_remaining(target_fps: u32, elapsed: Duration) -> Option<Duration> {
    if target_fps == 0 {
        return None;
    }
    Duration::from_secs_f64(1.0 / f64::from(target_fps)).checked_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_asset_errors_name_the_asset() {
        let err = unknown("texture", "rocket");
        assert_eq!(err.to_string(), "unknown texture 'rocket'");

        let err = load_error("sound", "music", "sounds/music.ogg", &"no such file");
        assert_eq!(
            err.to_string(),
            "failed to load sound 'music' from 'sounds/music.ogg': no such file"
        );
    }

    #[test]
    fn test_fast_frames_sleep_out_the_budget() {
        // At 60 FPS a frame that took 1 ms still has ~15.6 ms to hold.
        let remaining =
            frame_budget_remaining(60, Duration::from_millis(1)).expect("budget not exhausted");
        assert!(remaining > Duration::from_millis(14));
        assert!(remaining < Duration::from_millis(16));
    }

    #[test]
    fn test_slow_frames_are_not_delayed() {
        assert_eq!(frame_budget_remaining(60, Duration::from_millis(20)), None);
    }

    #[test]
    fn test_zero_target_fps_leaves_the_rate_uncapped() {
        assert_eq!(frame_budget_remaining(0, Duration::ZERO), None);
    }
}
