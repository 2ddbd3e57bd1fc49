//! Game state and core simulation types
//!
//! Everything that must be persisted for round resume lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::course::{Course, Hole};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball at rest, waiting for a drag-shot
    Aiming,
    /// Ball in motion, physics active
    Rolling,
    /// Cup sunk, short rest before the next hole
    HoleComplete,
    /// Game is paused
    Paused,
    /// Shot clock expired
    GameOver,
    /// Every hole on the course is done
    Finished,
}

/// One-shot events produced by the tick, drained by the shell for audio/FX
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Stroke,
    WallBounce,
    GroundBounce,
    ObstacleHit,
    Splash,
    CupSink,
    CourseFinished,
    ClockExpired,
}

/// The ball
///
/// `height` is a synthetic altitude above the ground plane; it drives the
/// shadow and draw offset but plays no part in plane collisions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    /// Position on the screen plane (y grows downward)
    pub pos: Vec2,
    /// Velocity on the screen plane
    pub vel: Vec2,
    /// Height above the ground plane, clamped to >= 0
    pub height: f32,
    /// Vertical velocity (positive = rising)
    pub v_height: f32,
    pub radius: f32,
    /// Latch so a puddle penalizes once per uninterrupted overlap
    #[serde(default)]
    pub in_puddle: bool,
}

impl Ball {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            height: 0.0,
            v_height: 0.0,
            radius: BALL_RADIUS,
            in_puddle: false,
        }
    }

    /// True when the ball is in ground contact
    #[inline]
    pub fn grounded(&self) -> bool {
        self.height == 0.0
    }

    /// Rest test: all velocity components below the stop threshold while in
    /// ground contact. The contact test is exact, not a near-epsilon band.
    pub fn at_rest(&self) -> bool {
        self.vel.x.abs() < STOP_EPSILON
            && self.vel.y.abs() < STOP_EPSILON
            && self.v_height.abs() < STOP_EPSILON
            && self.height == 0.0
    }

    /// Min corner of the ball's bounding square
    #[inline]
    pub fn bounds_min(&self) -> Vec2 {
        self.pos - Vec2::splat(self.radius)
    }

    /// Max corner of the ball's bounding square
    #[inline]
    pub fn bounds_max(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }
}

/// The cup (capture target), one per hole, never mutated
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cup {
    pub pos: Vec2,
    pub radius: f32,
}

impl Cup {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius: CUP_RADIUS,
        }
    }
}

/// A water hazard; touching it while grounded costs a penalty stroke
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Puddle {
    pub pos: Vec2,
    pub radius: f32,
}

/// An axis-aligned rectangle the ball knocks back from
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub min: Vec2,
    pub max: Vec2,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }
}

/// Complete game state (deterministic, serializable for round resume)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The course being played
    pub course: Course,
    /// Index of the hole in play (0-based)
    pub hole_index: usize,
    /// Strokes on the current hole, penalties included
    pub strokes: u32,
    /// Strokes across the whole round
    pub total_strokes: u32,
    /// Shot clock remaining for the current hole, in ticks
    pub clock_ticks: u32,
    /// Rest period remaining after sinking a hole, in ticks
    pub breather_ticks: u32,
    /// Current phase
    pub phase: GamePhase,
    /// The ball
    pub ball: Ball,
    /// Last position the ball came to rest at (puddles revert here)
    pub last_rest: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the shell last drained them (not persisted)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a round on the first hole of the course
    pub fn new(course: Course) -> Self {
        let first = course.holes[0].clone();
        let mut state = Self {
            course,
            hole_index: 0,
            strokes: 0,
            total_strokes: 0,
            clock_ticks: 0,
            breather_ticks: 0,
            phase: GamePhase::Aiming,
            ball: Ball::at(first.tee),
            last_rest: first.tee,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.clock_ticks = first.clock_ticks();
        state
    }

    /// The hole currently in play
    pub fn hole(&self) -> &Hole {
        &self.course.holes[self.hole_index]
    }

    /// Seconds remaining on the shot clock, rounded down for display
    pub fn clock_secs(&self) -> u32 {
        self.clock_ticks / SIM_TICKS_PER_SEC
    }

    /// Place the ball on the tee of the hole in play and reset per-hole
    /// counters. Used at hole start; the round total is untouched.
    pub fn reset_hole(&mut self) {
        let hole = self.course.holes[self.hole_index].clone();
        self.ball = Ball::at(hole.tee);
        self.last_rest = hole.tee;
        self.strokes = 0;
        self.clock_ticks = hole.clock_ticks();
        self.phase = GamePhase::Aiming;
    }

    /// Advance to the next hole, or finish the round after the last one
    pub fn advance_hole(&mut self) {
        if self.hole_index + 1 >= self.course.holes.len() {
            self.phase = GamePhase::Finished;
            self.events.push(GameEvent::CourseFinished);
        } else {
            self.hole_index += 1;
            self.reset_hole();
        }
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Ticks per second at the fixed timestep
pub const SIM_TICKS_PER_SEC: u32 = 120;
