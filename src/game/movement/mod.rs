// Character movement controller
//
// Converts one tick of input and surface probes into a target velocity
// for the character's body. The controller never touches the physics
// world itself:
//
// - `sample`: per-tick input and surface samples handed in by adapters
// - `config`: designer parameters, validation and derived constants
// - `state`: persistent per-character velocities, flags and timestamps
// - `machine`: the fixed sub-behaviour pipeline run by `step`
// - `flags`, `gravity`, `run`, `jump`, `dash`, `clamp`: the sub-behaviours

mod clamp;
pub mod config;
mod dash;
mod flags;
mod gravity;
mod jump;
pub mod machine;
pub mod run;
pub mod sample;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, MovementConfig, MovementTuning};
pub use machine::MovementStateMachine;
pub use sample::{InputSample, SurfaceSample};
pub use state::{DashPhase, JumpPhase, MovementState};
