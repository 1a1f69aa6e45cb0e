//! Foundation utilities shared by games: timing and logging

pub mod logging;
pub mod time;
