// Per-tick samples handed to the movement controller by its collaborators

use crate::core::math::sign;
use crate::engine::input::{Action, PlayerInput};

/// Input state for one tick, as produced by the input adapter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Left/right axis in [-1, 1]
    pub horizontal_axis: f32,
    /// Down/up axis in [-1, 1]
    pub vertical_axis: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dash_pressed: bool,
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

impl InputSample {
    /// Copy with both axes forced into [-1, 1] (NaN reads as centred)
    pub fn clamped(&self) -> Self {
        Self {
            horizontal_axis: clamp_axis(self.horizontal_axis),
            vertical_axis: clamp_axis(self.vertical_axis),
            ..*self
        }
    }

    /// -1, 0 or 1
    pub fn horizontal_direction(&self) -> f32 {
        sign(self.horizontal_axis)
    }

    /// -1, 0 or 1
    pub fn vertical_direction(&self) -> f32 {
        sign(self.vertical_axis)
    }

    /// Whether the player is asking to go down: only a full deflection counts
    pub fn wants_down(&self) -> bool {
        self.vertical_axis <= -1.0
    }

    /// Snapshot a player's action state for the current tick
    ///
    /// Presses are edges, so this must be taken before `PlayerInput::update`.
    pub fn from_player(player: &PlayerInput) -> Self {
        let (horizontal_axis, vertical_axis) = player.get_direction();
        Self {
            horizontal_axis,
            vertical_axis,
            jump_pressed: player.just_pressed(Action::Jump),
            jump_held: player.is_pressed(Action::Jump),
            dash_pressed: player.just_pressed(Action::Dash),
        }
    }
}

/// Result of probing the world around the body for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceSample {
    pub grounded: bool,
    pub ceiling_hit: bool,
    pub wall_hit: bool,
    /// -1 for a wall on the left, 1 on the right, 0 for none
    pub wall_direction: i8,
}

impl SurfaceSample {
    /// Standing on ground, nothing else nearby
    pub fn ground() -> Self {
        Self {
            grounded: true,
            ..Self::default()
        }
    }

    /// In the air, nothing nearby
    pub fn air() -> Self {
        Self::default()
    }

    /// Builder-style wall contact on the given side (-1 left, 1 right)
    pub fn with_wall(mut self, direction: i8) -> Self {
        self.wall_hit = true;
        self.wall_direction = direction.signum();
        self
    }

    /// Builder-style ceiling contact
    pub fn with_ceiling(mut self) -> Self {
        self.ceiling_hit = true;
        self
    }

    /// Wall side as a float direction; 0 when no wall is touched
    pub fn wall_sign(&self) -> f32 {
        if self.wall_hit {
            f32::from(self.wall_direction.signum())
        } else {
            0.0
        }
    }
}
