//! # Stage2D
//!
//! A minimal 2D presentation facade for arcade games.
//!
//! The crate wraps the windowing toolkit behind a small, named-asset API so
//! game crates never touch raw handles: load bitmaps, fonts, and sounds once
//! under a name, then draw and play them by that name. Game logic stays free
//! of toolkit types and can be unit tested without a window.
//!
//! ## Modules
//!
//! - [`stage`]: asset registry plus draw, audio, and frame-presentation
//!   primitives
//! - [`input`]: per-frame keyboard polling
//! - [`config`]: file-backed configuration loading (`.toml` / `.ron`)
//! - [`foundation`]: timing and logging utilities
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stage2d::prelude::*;
//!
//! async fn frame(stage: &mut Stage) {
//!     stage.clear(BLACK);
//!     stage.fill_circle(400.0, 300.0, 3.0, WHITE);
//!     stage.present(60).await;
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod stage;

/// Common imports for stage users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::time::{Stopwatch, Timer},
        input::{key_down, key_pressed, Key},
        stage::{Stage, StageError},
    };

    pub use macroquad::color::{Color, BLACK, WHITE};
}
