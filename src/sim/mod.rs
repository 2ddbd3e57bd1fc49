//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No rendering or platform dependencies
//! - One writer per frame, runs to completion before the next read

pub mod collision;
pub mod course;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{cup_captures, obstacle_knockback, puddle_overlaps};
pub use course::{Course, Hole, course_par, default_course};
pub use physics::{StepContacts, launch_velocity, step};
pub use state::{Ball, Cup, GameEvent, GamePhase, GameState, Obstacle, Puddle};
pub use tick::{Shot, TickInput, tick};
