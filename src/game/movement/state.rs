// Persistent per-character movement state

use glam::Vec2;

use super::config::MovementTuning;

/// Where the current jump is in its lifecycle
///
/// A buffered request is not a phase of its own: it is the press
/// timestamp, which stays honourable for `jump_buffer` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JumpPhase {
    /// No jump in progress
    #[default]
    Idle,
    /// Rising (or falling) from a jump with the button still held
    Active,
    /// The button was released or a ceiling was hit mid-jump
    EndedEarly,
}

impl JumpPhase {
    /// Whether a jump is in progress, ended early or not
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn ended_early(&self) -> bool {
        matches!(self, Self::EndedEarly)
    }
}

/// Dash economy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashPhase {
    /// A dash can be started
    Ready,
    /// Dashing; gravity and run are suspended
    Active,
    /// Waiting for the cooldown and ground contact to refresh
    #[default]
    Recharging,
}

/// Seconds elapsed since `timestamp`, infinite if it never happened
pub(crate) fn elapsed(timestamp: Option<f64>, now: f64) -> f32 {
    match timestamp {
        Some(at) => (now - at) as f32,
        None => f32::INFINITY,
    }
}

/// Everything the controller remembers between ticks
///
/// Owned by exactly one character and only written by
/// [`MovementStateMachine`](super::MovementStateMachine); everything else
/// reads it through the accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    /// x = horizontal, y = vertical (up is positive)
    pub(crate) velocity: Vec2,
    /// -1 or 1
    pub(crate) facing_direction: f32,

    // Derived this tick
    pub(crate) on_ground: bool,
    pub(crate) touching_wall: bool,
    pub(crate) wall_direction: f32,
    pub(crate) fast_fall_active: bool,

    // Jump economy
    pub(crate) jump_available: bool,
    pub(crate) double_jump_available: bool,
    pub(crate) double_jump_unlocked: bool,
    pub(crate) jump_phase: JumpPhase,

    // Dash economy
    pub(crate) dash_phase: DashPhase,
    /// Cooldown window currently in force (grounded or airborne)
    pub(crate) dash_cooldown: f32,
    pub(crate) dash_direction: Vec2,

    // Clock readings
    pub(crate) time_jump_last_pressed: Option<f64>,
    pub(crate) time_jump_last_used: Option<f64>,
    pub(crate) time_left_ground: Option<f64>,
    pub(crate) time_touched_ground: Option<f64>,
    pub(crate) time_dash_last_pressed: Option<f64>,
    pub(crate) time_dash_activated: Option<f64>,
    pub(crate) time_dash_ended: Option<f64>,
}

impl MovementState {
    /// Spawn state for a character using `tuning`
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            velocity: Vec2::ZERO,
            facing_direction: 1.0,
            on_ground: false,
            touching_wall: false,
            wall_direction: 0.0,
            fast_fall_active: false,
            jump_available: false,
            double_jump_available: false,
            double_jump_unlocked: tuning.double_jump_unlocked,
            jump_phase: JumpPhase::Idle,
            dash_phase: DashPhase::Recharging,
            dash_cooldown: tuning.dash_cooldown_airborne,
            dash_direction: Vec2::new(1.0, 0.0),
            time_jump_last_pressed: None,
            time_jump_last_used: None,
            time_left_ground: None,
            time_touched_ground: None,
            time_dash_last_pressed: None,
            time_dash_activated: None,
            time_dash_ended: None,
        }
    }

    /// Velocity to hand to the integrator
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn horizontal_velocity(&self) -> f32 {
        self.velocity.x
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.velocity.y
    }

    /// 1 = right, -1 = left
    pub fn facing_direction(&self) -> f32 {
        self.facing_direction
    }

    pub fn is_grounded(&self) -> bool {
        self.on_ground
    }

    pub fn touching_wall(&self) -> bool {
        self.touching_wall
    }

    /// -1 = wall on the left, 1 = right, 0 = none
    pub fn wall_direction(&self) -> f32 {
        self.wall_direction
    }

    pub fn fast_fall_active(&self) -> bool {
        self.fast_fall_active
    }

    pub fn jump_available(&self) -> bool {
        self.jump_available
    }

    pub fn double_jump_available(&self) -> bool {
        self.double_jump_available
    }

    pub fn double_jump_unlocked(&self) -> bool {
        self.double_jump_unlocked
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.jump_phase
    }

    pub fn jump_active(&self) -> bool {
        self.jump_phase.is_active()
    }

    pub fn jump_ended_early(&self) -> bool {
        self.jump_phase.ended_early()
    }

    pub fn dash_phase(&self) -> DashPhase {
        self.dash_phase
    }

    pub fn dash_available(&self) -> bool {
        self.dash_phase == DashPhase::Ready
    }

    pub fn dash_active(&self) -> bool {
        self.dash_phase == DashPhase::Active
    }

    /// Direction chosen by the most recent dash (unnormalised, axis signs)
    pub fn dash_direction(&self) -> Vec2 {
        self.dash_direction
    }

    /// Clock reading of the last jump activation of any kind
    pub fn time_jump_last_used(&self) -> Option<f64> {
        self.time_jump_last_used
    }

    pub fn time_left_ground(&self) -> Option<f64> {
        self.time_left_ground
    }

    pub fn time_touched_ground(&self) -> Option<f64> {
        self.time_touched_ground
    }

    pub fn time_dash_ended(&self) -> Option<f64> {
        self.time_dash_ended
    }

    /// End an active dash at `now`
    pub(crate) fn end_dash(&mut self, now: f64) {
        self.dash_phase = DashPhase::Recharging;
        self.time_dash_ended = Some(now);
    }
}
