//! Fairway - a 2.5D arcade mini golf game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, game state)
//! - `city`: The city-life toy simulation sharing the same shell
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven physics balance and variant feature flags
//! - `settings` / `highscores`: Preferences and best rounds in LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod city;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::BestRounds;
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (course coordinates, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Cup capture radius
    pub const CUP_RADIUS: f32 = 15.0;

    /// Velocity below which a component snaps to zero
    pub const STOP_EPSILON: f32 = 0.01;

    /// Between-hole rest period (2 seconds at 120 Hz)
    pub const HOLE_BREATHER_TICKS: u32 = 2 * 120;

    /// City sim cadence (the toy updates at 30 Hz, per its original tuning)
    pub const CITY_DT: f32 = 1.0 / 30.0;
}

/// Playfield bounds as a vector
#[inline]
pub fn field_bounds() -> Vec2 {
    Vec2::new(consts::FIELD_WIDTH, consts::FIELD_HEIGHT)
}

/// Squared distance between two points
#[inline]
pub fn distance_sq(a: Vec2, b: Vec2) -> f32 {
    (a - b).length_squared()
}

/// Axis-aligned box overlap test (min/max corners)
#[inline]
pub fn aabb_overlap(min_a: Vec2, max_a: Vec2, min_b: Vec2, max_b: Vec2) -> bool {
    min_a.x <= max_b.x && max_a.x >= min_b.x && min_a.y <= max_b.y && max_a.y >= min_b.y
}
