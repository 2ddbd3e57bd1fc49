//! Fixed timestep simulation tick
//!
//! Advances the round state machine deterministically: aim, roll, sink,
//! advance. One writer, runs to completion before the next frame reads.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState};
use super::{collision, physics};
use crate::consts::*;
use crate::{Tuning, field_bounds};

/// A completed drag gesture, press point to release point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub press: Vec2,
    pub release: Vec2,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// A drag completed this tick; only honored while aiming
    pub shot: Option<Shot>,
    /// Pause toggle
    pub pause: bool,
    /// Skip to the next hole (debug/testing)
    pub skip_hole: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Aiming | GamePhase::Rolling => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => {
                state.phase = if state.ball.at_rest() {
                    GamePhase::Aiming
                } else {
                    GamePhase::Rolling
                };
            }
            _ => {}
        }
    }

    // Don't tick in terminal or suspended phases
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver | GamePhase::Finished => return,
        _ => {}
    }

    // Debug: skip to the next hole
    if input.skip_hole {
        state.advance_hole();
        return;
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Aiming => {
            if let Some(shot) = &input.shot {
                state.ball.vel =
                    physics::launch_velocity(shot.press, shot.release, tuning.launch_gain);
                if tuning.lofted_shots {
                    state.ball.v_height = tuning.loft_impulse;
                }
                // Every completed drag is a stroke, no matter how weak.
                state.strokes += 1;
                state.total_strokes += 1;
                state.events.push(GameEvent::Stroke);
                state.phase = GamePhase::Rolling;
            }
            run_shot_clock(state);
        }

        GamePhase::Rolling => {
            let contacts = physics::step(&mut state.ball, tuning, field_bounds(), dt);
            if contacts.wall {
                state.events.push(GameEvent::WallBounce);
            }
            if contacts.ground {
                state.events.push(GameEvent::GroundBounce);
            }

            let hole = &state.course.holes[state.hole_index];

            if tuning.obstacles {
                for obstacle in &hole.obstacles {
                    if collision::obstacle_knockback(&mut state.ball, obstacle, tuning.bounce) {
                        state.events.push(GameEvent::ObstacleHit);
                    }
                }
            }

            if tuning.puddles {
                let overlapping = hole
                    .puddles
                    .iter()
                    .any(|p| collision::puddle_overlaps(&state.ball, p));
                if overlapping && !state.ball.in_puddle {
                    // Penalty: back to the last rest spot, dead stop, one
                    // stroke. The latch holds until the overlap breaks.
                    state.ball.pos = state.last_rest;
                    state.ball.vel = Vec2::ZERO;
                    state.ball.height = 0.0;
                    state.ball.v_height = 0.0;
                    state.ball.in_puddle = true;
                    state.strokes += 1;
                    state.total_strokes += 1;
                    state.events.push(GameEvent::Splash);
                    state.phase = GamePhase::Aiming;
                } else {
                    state.ball.in_puddle = overlapping;
                }
            }

            if state.phase == GamePhase::Rolling {
                let cup = state.course.holes[state.hole_index].cup;
                if collision::cup_captures(&state.ball, &cup) {
                    state.phase = GamePhase::HoleComplete;
                    state.breather_ticks = HOLE_BREATHER_TICKS;
                    state.events.push(GameEvent::CupSink);
                } else if state.ball.at_rest() {
                    state.last_rest = state.ball.pos;
                    state.phase = GamePhase::Aiming;
                }
            }

            if matches!(state.phase, GamePhase::Aiming | GamePhase::Rolling) {
                run_shot_clock(state);
            }
        }

        GamePhase::HoleComplete => {
            if state.breather_ticks > 0 {
                state.breather_ticks -= 1;
            }
            if state.breather_ticks == 0 {
                state.advance_hole();
            }
        }

        GamePhase::Paused | GamePhase::GameOver | GamePhase::Finished => {}
    }
}

/// Count the shot clock down; expiry ends the round
fn run_shot_clock(state: &mut GameState) {
    if state.clock_ticks > 0 {
        state.clock_ticks -= 1;
        if state.clock_ticks == 0 {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::ClockExpired);
        }
    }
}
