// Character system
//
// A character ties one rigid body to one movement state and runs the
// probe, controller step and velocity hand-off each tick.

pub mod character;

// Re-export commonly used types
pub use character::{Character, CharacterId, CharacterManager, DEFAULT_PROBE_DISTANCE};
