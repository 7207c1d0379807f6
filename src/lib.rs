// Kinematic movement controller for 2D platformer characters, with a
// rapier2d-backed character adapter and a fixed-step clock

pub mod core;
pub mod engine;
pub mod game;

pub use game::characters::{Character, CharacterManager};
pub use game::movement::{
    ConfigError, InputSample, MovementConfig, MovementState, MovementStateMachine,
    SurfaceSample,
};
