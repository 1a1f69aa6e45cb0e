//! Rocket Dodge
//!
//! Arcade dodge game: steer the rocket with the arrow keys, survive the
//! falling asteroids. Collision ends the run with an explosion effect and a
//! score screen. Escape or closing the window quits at any point.
//!
//! The session is a single cooperative loop over the phases of
//! [`game::Phase`]; all rendering and audio goes through [`stage2d`].

mod assets;
mod collision;
mod components;
mod config;
mod game;
mod particles;

use std::io::Write as _;
use std::sync::OnceLock;

use macroquad::window::Conf;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use stage2d::config::Config as _;
use stage2d::foundation::logging;
use stage2d::foundation::time::{Stopwatch, Timer};
use stage2d::input::{self, Key};
use stage2d::prelude::{Stage, StageError, BLACK, WHITE};

use crate::components::{Bounds, MoveInput, Sprite};
use crate::config::GameConfig;
use crate::game::{Game, Phase, TickOutcome};

/// Configuration file read from the working directory
const CONFIG_PATH: &str = "rocket_dodge.toml";

/// Vertical offset of the title and game-over art
const ART_TOP_Y: f32 = 50.0;

/// Frame-presentation rate; per-tick speeds are tuned against this
const TARGET_FPS: u32 = 60;

/// Session errors; any of these aborts the run (the process still exits 0)
#[derive(thiserror::Error, Debug)]
enum AppError {
    /// Asset loading or presentation failure
    #[error("stage error: {0}")]
    Stage(#[from] StageError),

    /// Terminal IO failure while reading the player name
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lazily loaded configuration, shared between `window_conf` and `run`
fn game_config() -> &'static GameConfig {
    static CONFIG: OnceLock<GameConfig> = OnceLock::new();
    CONFIG.get_or_init(|| GameConfig::load_or_default(CONFIG_PATH))
}

fn window_conf() -> Conf {
    // Runs before `main`, so logging has to come up here for the config
    // loader's fallback warning to be visible.
    logging::init();

    let window = &game_config().window;
    Conf {
        window_title: window.title.clone(),
        window_width: window.width as i32,
        window_height: window.height as i32,
        window_resizable: false,
        ..Conf::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init();

    if let Err(err) = run().await {
        log::error!("session aborted: {err}");
    }
}

async fn run() -> Result<(), AppError> {
    let config = game_config();
    let player_name = read_player_name()?;
    log::info!("starting session for '{player_name}'");

    let mut stage = Stage::new();
    assets::load_all(&mut stage, &config.assets).await?;
    stage.play_sound_looped(assets::BACKGROUND_MUSIC)?;

    let bounds = Bounds {
        width: config.window.width as f32,
        height: config.window.height as f32,
    };
    let mut game = Game::new(
        &config.gameplay,
        bounds,
        sprite_of(&stage, assets::ROCKET)?,
        sprite_of(&stage, assets::ASTEROID)?,
        SmallRng::from_entropy(),
    );

    // Title: block on the confirm key; window close quits silently.
    loop {
        if stage.quit_requested() {
            return Ok(());
        }
        draw_title(&stage, &player_name, bounds)?;
        stage.present(TARGET_FPS).await;
        if input::key_pressed(Key::Enter) {
            break;
        }
    }
    game.start_playing();

    let mut timer = Timer::new();
    while game.phase() == Phase::Playing {
        if stage.quit_requested() || input::key_pressed(Key::Escape) {
            game.terminate();
            break;
        }

        timer.update();
        let outcome = game.tick(poll_move_input(), timer.delta_time());
        if let TickOutcome::Collision { .. } = outcome {
            stage.play_sound_once(assets::COLLISION_SOUND)?;
        }

        draw_scene(&stage, &game)?;
        stage.present(TARGET_FPS).await;
    }

    // Explosion: render-only, a fixed pacing delay per iteration, until the
    // measured span runs out or the window is closed.
    if game.phase() == Phase::Exploding {
        let explosion = Stopwatch::start_new();
        while game.phase() == Phase::Exploding {
            if stage.quit_requested() {
                game.terminate();
                break;
            }
            if explosion.elapsed_secs() >= config.gameplay.explosion_duration {
                game.finish_explosion();
                break;
            }

            game.explosion_tick();
            draw_scene(&stage, &game)?;
            stage.present(TARGET_FPS).await;
            stage.sleep_ms(config.gameplay.explosion_frame_delay_ms);
        }
    }

    if game.phase() == Phase::GameOver {
        log::info!(
            "game over for '{player_name}': {} ticks survived in {:.1}s, displayed score {}",
            game.survival_ticks(),
            timer.total_time(),
            game.displayed_score()
        );

        stage.clear(BLACK);
        let (art_width, _) = stage.texture_size(assets::GAME_OVER)?;
        stage.draw_image_at(assets::GAME_OVER, (bounds.width - art_width) / 2.0, ART_TOP_Y)?;
        stage.draw_text_centered(
            &format!("SCORE: {}", game.displayed_score()),
            assets::UI_FONT,
            24,
            WHITE,
            bounds.width,
            bounds.height - 100.0,
        )?;
        stage.present(TARGET_FPS).await;
        stage.sleep_ms(config.gameplay.game_over_hold_ms);
    }

    Ok(())
}

/// Prompt for and read the player name from standard input
///
/// The only terminal interaction of the session; no flags or environment
/// variables are consumed.
fn read_player_name() -> std::io::Result<String> {
    print!("Enter your name: ");
    std::io::stdout().flush()?;

    let mut name = String::new();
    std::io::stdin().read_line(&mut name)?;
    Ok(name.trim().to_string())
}

/// Sample the held movement keys for one tick
fn poll_move_input() -> MoveInput {
    MoveInput {
        up: input::key_down(Key::Up),
        down: input::key_down(Key::Down),
        left: input::key_down(Key::Left),
        right: input::key_down(Key::Right),
    }
}

/// Half-extents of a registered texture
fn sprite_of(stage: &Stage, name: &str) -> Result<Sprite, StageError> {
    let (width, height) = stage.texture_size(name)?;
    Ok(Sprite::from_size(width, height))
}

/// Draw the title screen
fn draw_title(stage: &Stage, player_name: &str, bounds: Bounds) -> Result<(), StageError> {
    stage.clear(BLACK);

    let (title_width, _) = stage.texture_size(assets::TITLE)?;
    stage.draw_image_at(assets::TITLE, (bounds.width - title_width) / 2.0, ART_TOP_Y)?;

    stage.draw_text_centered(
        "Press Enter to Start",
        assets::UI_FONT,
        36,
        WHITE,
        bounds.width,
        bounds.height / 2.0,
    )?;
    stage.draw_text_centered(
        &format!("Player: {player_name}"),
        assets::UI_FONT,
        24,
        WHITE,
        bounds.width,
        bounds.height / 2.0 + 50.0,
    )?;
    stage.draw_text_centered(
        "Avoid the Asteroids! They will begin falling shortly after the Game Starts. Good Luck!",
        assets::UI_FONT,
        16,
        WHITE,
        bounds.width,
        bounds.height - 50.0,
    )?;

    Ok(())
}

/// Draw the rocket, the asteroids, and any live particles
fn draw_scene(stage: &Stage, game: &Game) -> Result<(), StageError> {
    stage.clear(BLACK);

    let rocket = game.rocket();
    stage.draw_sprite_centered(assets::ROCKET, rocket.x, rocket.y)?;

    for asteroid in game.asteroids() {
        stage.draw_sprite_centered(assets::ASTEROID, asteroid.x, asteroid.y)?;
    }

    game.particles().render(stage);
    Ok(())
}
