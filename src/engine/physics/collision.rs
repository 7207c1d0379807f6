use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
///
/// Surface probes only care about level geometry, so the split is small:
/// characters, the level they move through, and trigger volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// Player characters
    Player = 0b0000_0010,

    /// Static platforms and walls
    Platform = 0b0000_1000,

    /// Sensors (trigger zones, etc.) - don't cause physical collision
    Sensor = 0b1000_0000,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Characters pass through each other and only stand on the level
            CollisionGroups::Player => Group::from_bits_truncate(
                CollisionGroups::Platform as u32 | CollisionGroups::Sensor as u32,
            ),

            CollisionGroups::Platform => Group::from_bits_truncate(
                CollisionGroups::Player as u32 | CollisionGroups::Platform as u32,
            ),

            CollisionGroups::Sensor => Group::ALL,

            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}
