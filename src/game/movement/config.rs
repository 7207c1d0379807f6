// Movement tuning: designer-facing parameters and the constants derived from them

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while loading or validating a movement archetype
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("Failed to parse movement config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Designer-facing movement parameters for one character archetype
///
/// Times are in seconds, speeds in units/second. Every value is a
/// magnitude: the controller applies the signs itself (up is +y).
/// Designers tune "seconds to reach speed X" and the controller derives
/// raw accelerations from them once, in [`MovementConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    // Run
    /// Horizontal speed reached by holding a direction
    pub run_speed: f32,
    /// Time to reach `run_speed` from rest on the ground
    pub acceleration_time: f32,
    /// Time to reach `run_speed` from rest in the air
    pub air_acceleration_time: f32,
    /// Time to stop from `run_speed` on the ground with no input
    pub deceleration_time: f32,
    /// Time to stop from `run_speed` in the air with no input
    pub air_deceleration_time: f32,
    /// Time to stop from `run_speed` on the ground while pushing the other way
    pub turn_around_time: f32,
    /// Time to stop from `run_speed` in the air while pushing the other way
    pub air_turn_around_time: f32,

    // Jump
    /// Vertical velocity set by a jump
    pub jump_strength: f32,
    /// Fraction of gravity cancelled at the apex while jump is held
    pub jump_peak_slowdown_strength: f32,
    /// Vertical speed under which the character counts as being at the apex
    pub jump_peak_threshold: f32,
    /// Extra gravity multiplier after releasing jump early or passing the apex
    pub jump_end_gravity_multiplier: f32,
    /// How long a jump press is remembered
    pub jump_buffer: f32,
    /// How long after leaving ground a jump is still allowed
    pub coyote_time: f32,
    pub double_jump_unlocked: bool,
    /// Minimum airborne time before a double jump is usable
    pub double_jump_delay: f32,

    // Wall jump
    pub wall_jump_cooldown: f32,
    pub wall_jump_vertical_strength: f32,
    pub wall_jump_horizontal_strength: f32,

    // Dash
    /// Distance covered by a dash at dash speed
    pub dash_distance: f32,
    /// Duration of a dash
    pub dash_duration: f32,
    /// Multiplier applied when already moving faster than dash speed
    pub dash_velocity_multiplier: f32,
    /// Horizontal multiplier applied when a jump cancels a dash
    pub dash_cancel_multiplier: f32,
    /// How long a dash press is remembered
    pub dash_buffer: f32,
    pub dash_cooldown_grounded: f32,
    pub dash_cooldown_airborne: f32,

    // Gravity
    pub gravity_strength: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// Fraction of gravity added while holding down in the air
    pub fast_fall_strength: f32,
    /// Multiplier on `max_fall_speed` while fast falling
    pub fast_fall_terminal_multiplier: f32,

    // Velocity caps
    pub max_ground_speed: f32,
    pub max_air_speed: f32,
    pub over_cap_ground_deceleration: f32,
    pub over_cap_air_deceleration: f32,
    /// Time after landing before the grounded speed cap kicks in
    pub landing_clamp_grace: f32,
    /// Terminal fall speed while touching a wall
    pub wall_slide_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            run_speed: 12.0,
            acceleration_time: 0.2,
            air_acceleration_time: 0.2,
            deceleration_time: 0.1,
            air_deceleration_time: 0.25,
            // Extra turn-around of 180 on the ground, 60 in the air
            turn_around_time: 0.05,
            air_turn_around_time: 0.1,

            jump_strength: 25.0,
            jump_peak_slowdown_strength: 0.5,
            jump_peak_threshold: 0.2,
            jump_end_gravity_multiplier: 1.0,
            jump_buffer: 0.05,
            coyote_time: 0.1,
            double_jump_unlocked: false,
            double_jump_delay: 0.1,

            wall_jump_cooldown: 0.1,
            wall_jump_vertical_strength: 20.0,
            wall_jump_horizontal_strength: 20.0,

            dash_distance: 5.0,
            dash_duration: 0.25,
            dash_velocity_multiplier: 1.2,
            dash_cancel_multiplier: 1.2,
            dash_buffer: 0.1,
            dash_cooldown_grounded: 0.1,
            dash_cooldown_airborne: 0.5,

            gravity_strength: 50.0,
            max_fall_speed: 250.0,
            fast_fall_strength: 1.0,
            fast_fall_terminal_multiplier: 1.5,

            max_ground_speed: 10.0,
            max_air_speed: 50.0,
            over_cap_ground_deceleration: 100.0,
            over_cap_air_deceleration: 50.0,
            landing_clamp_grace: 0.05,
            wall_slide_speed: 5.0,
        }
    }
}

fn finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl MovementConfig {
    /// Parse an archetype from RON text; omitted fields keep their defaults
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    /// Load an archetype from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_ron_str(&source)
    }

    /// Check every parameter and compute the derived constants
    pub fn validate(&self) -> Result<MovementTuning, ConfigError> {
        let run_speed = positive("run_speed", self.run_speed)?;
        let acceleration_time = positive("acceleration_time", self.acceleration_time)?;
        let air_acceleration_time = positive("air_acceleration_time", self.air_acceleration_time)?;
        let deceleration_time = positive("deceleration_time", self.deceleration_time)?;
        let air_deceleration_time = positive("air_deceleration_time", self.air_deceleration_time)?;
        let turn_around_time = positive("turn_around_time", self.turn_around_time)?;
        let air_turn_around_time = positive("air_turn_around_time", self.air_turn_around_time)?;
        let dash_distance = positive("dash_distance", self.dash_distance)?;
        let dash_duration = positive("dash_duration", self.dash_duration)?;

        positive("jump_strength", self.jump_strength)?;
        positive("gravity_strength", self.gravity_strength)?;
        positive("max_fall_speed", self.max_fall_speed)?;
        positive("max_ground_speed", self.max_ground_speed)?;
        positive("max_air_speed", self.max_air_speed)?;
        positive("wall_slide_speed", self.wall_slide_speed)?;
        positive(
            "fast_fall_terminal_multiplier",
            self.fast_fall_terminal_multiplier,
        )?;

        for (field, value) in [
            ("jump_peak_slowdown_strength", self.jump_peak_slowdown_strength),
            ("jump_peak_threshold", self.jump_peak_threshold),
            ("jump_end_gravity_multiplier", self.jump_end_gravity_multiplier),
            ("jump_buffer", self.jump_buffer),
            ("coyote_time", self.coyote_time),
            ("double_jump_delay", self.double_jump_delay),
            ("wall_jump_cooldown", self.wall_jump_cooldown),
            ("wall_jump_vertical_strength", self.wall_jump_vertical_strength),
            ("wall_jump_horizontal_strength", self.wall_jump_horizontal_strength),
            ("dash_velocity_multiplier", self.dash_velocity_multiplier),
            ("dash_cancel_multiplier", self.dash_cancel_multiplier),
            ("dash_buffer", self.dash_buffer),
            ("dash_cooldown_grounded", self.dash_cooldown_grounded),
            ("dash_cooldown_airborne", self.dash_cooldown_airborne),
            ("fast_fall_strength", self.fast_fall_strength),
            ("over_cap_ground_deceleration", self.over_cap_ground_deceleration),
            ("over_cap_air_deceleration", self.over_cap_air_deceleration),
            ("landing_clamp_grace", self.landing_clamp_grace),
        ] {
            non_negative(field, value)?;
        }

        let ground_acceleration = run_speed / acceleration_time;
        let air_acceleration = run_speed / air_acceleration_time;

        Ok(MovementTuning {
            config: self.clone(),
            ground_acceleration,
            air_acceleration,
            ground_deceleration: run_speed / deceleration_time,
            air_deceleration: run_speed / air_deceleration_time,
            ground_turn_around: (run_speed / turn_around_time - ground_acceleration).abs(),
            air_turn_around: (run_speed / air_turn_around_time - air_acceleration).abs(),
            dash_velocity: dash_distance / dash_duration,
        })
    }
}

/// Validated parameters plus the accelerations derived from them
///
/// Only obtainable through [`MovementConfig::validate`], so holding one
/// means no per-tick division can blow up.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementTuning {
    config: MovementConfig,
    pub(crate) ground_acceleration: f32,
    pub(crate) air_acceleration: f32,
    pub(crate) ground_deceleration: f32,
    pub(crate) air_deceleration: f32,
    pub(crate) ground_turn_around: f32,
    pub(crate) air_turn_around: f32,
    pub(crate) dash_velocity: f32,
}

impl MovementTuning {
    /// The parameters this tuning was derived from
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn ground_acceleration(&self) -> f32 {
        self.ground_acceleration
    }

    pub fn air_acceleration(&self) -> f32 {
        self.air_acceleration
    }

    pub fn ground_deceleration(&self) -> f32 {
        self.ground_deceleration
    }

    pub fn air_deceleration(&self) -> f32 {
        self.air_deceleration
    }

    pub fn ground_turn_around(&self) -> f32 {
        self.ground_turn_around
    }

    pub fn air_turn_around(&self) -> f32 {
        self.air_turn_around
    }

    /// Dash speed along the dash direction
    pub fn dash_velocity(&self) -> f32 {
        self.dash_velocity
    }
}

impl std::ops::Deref for MovementTuning {
    type Target = MovementConfig;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}
