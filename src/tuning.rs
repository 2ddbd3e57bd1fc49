//! Data-driven physics balance
//!
//! The engine grew out of several near-identical prototype variants, each
//! differing only in constants and which hazards were present. One record
//! captures all of them: numeric balance plus feature flags.

use serde::{Deserialize, Serialize};

/// Physics balance and variant feature flags for a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration on the height axis (px/s²)
    pub gravity: f32,
    /// Fraction of incoming speed retained (sign-inverted) after a surface hit
    pub bounce: f32,
    /// Horizontal velocity retention per tick while in ground contact
    pub friction: f32,
    /// Velocity-proportional deceleration per tick, applied in flight and on
    /// the ground alike
    pub air_resistance: f32,
    /// Launch speed per pixel of drag
    pub launch_gain: f32,
    /// Vertical impulse applied at launch when lofted shots are enabled (px/s)
    pub loft_impulse: f32,

    // Variant feature flags
    /// Launches also get a vertical impulse (ball flies instead of rolling)
    pub lofted_shots: bool,
    /// Puddle hazards are active
    pub puddles: bool,
    /// Rectangle obstacles are active
    pub obstacles: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::links()
    }
}

impl Tuning {
    /// The earliest variant: flat ground, walls only, the ball just rolls
    pub fn classic() -> Self {
        Self {
            gravity: 360.0,
            bounce: 0.8,
            friction: 0.985,
            air_resistance: 0.004,
            launch_gain: 3.0,
            loft_impulse: 0.0,
            lofted_shots: false,
            puddles: false,
            obstacles: false,
        }
    }

    /// The obstacle-course variant: rectangles knock the ball back
    pub fn obstacle_course() -> Self {
        Self {
            obstacles: true,
            ..Self::classic()
        }
    }

    /// The full engine: lofted flight, obstacles, and puddle hazards
    pub fn links() -> Self {
        Self {
            loft_impulse: 180.0,
            lofted_shots: true,
            puddles: true,
            obstacles: true,
            ..Self::classic()
        }
    }

    /// Look up a preset by name (used for the `?variant=` query parameter)
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "obstacles" => Some(Self::obstacle_course()),
            "links" => Some(Self::links()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_gate_features() {
        let classic = Tuning::classic();
        assert!(!classic.lofted_shots);
        assert!(!classic.puddles);
        assert!(!classic.obstacles);

        let obstacles = Tuning::obstacle_course();
        assert!(obstacles.obstacles);
        assert!(!obstacles.puddles);

        let links = Tuning::links();
        assert!(links.lofted_shots);
        assert!(links.puddles);
        assert!(links.obstacles);
        assert!(links.loft_impulse > 0.0);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(Tuning::preset("classic"), Some(Tuning::classic()));
        assert_eq!(Tuning::preset("links"), Some(Tuning::links()));
        assert_eq!(Tuning::preset("bogus"), None);
    }

    #[test]
    fn test_tuning_round_trips_through_json() {
        let tuning = Tuning::links();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(tuning, back);
    }
}
