// Surface probing: short raycasts around a body answering ground, ceiling and wall contact

use glam::Vec2;
use rapier2d::prelude::*;

use super::world::{PhysicsWorld, RigidBodyHandle};
use crate::game::movement::SurfaceSample;

/// Horizontal spread of the ground and ceiling rays, as a fraction of the half width
const RAY_SPREAD: f32 = 0.9;

impl PhysicsWorld {
    /// Probe the level around `body` and summarise the contacts
    ///
    /// Rays start at the body centre and reach `distance` past the edge
    /// described by `half_extents`. Three parallel rays cover the width
    /// below and above; one ray goes each way sideways, the left one
    /// checked first. Sensors and the body itself are ignored.
    ///
    /// A body that no longer exists reports no contact at all.
    pub fn probe_surfaces(
        &self,
        body: RigidBodyHandle,
        half_extents: Vec2,
        distance: f32,
    ) -> SurfaceSample {
        let Some(rigid_body) = self.get_rigid_body(body) else {
            return SurfaceSample::air();
        };
        let centre = *rigid_body.translation();
        let filter = QueryFilter::default()
            .exclude_rigid_body(body)
            .exclude_sensors();

        let hits = |origin: Vector<Real>, direction: Vector<Real>, reach: Real| {
            self.raycast(origin, direction, reach, true, filter).is_some()
        };
        let vertical = |direction: Vector<Real>| {
            [-RAY_SPREAD, 0.0, RAY_SPREAD].iter().any(|offset| {
                let origin = centre + vector![offset * half_extents.x, 0.0];
                hits(origin, direction, half_extents.y + distance)
            })
        };

        let grounded = vertical(vector![0.0, -1.0]);
        let ceiling_hit = vertical(vector![0.0, 1.0]);

        let side_reach = half_extents.x + distance;
        let wall_direction = if hits(centre, vector![-1.0, 0.0], side_reach) {
            -1
        } else if hits(centre, vector![1.0, 0.0], side_reach) {
            1
        } else {
            0
        };

        SurfaceSample {
            grounded,
            ceiling_hit,
            wall_hit: wall_direction != 0,
            wall_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::body::presets;
    use super::*;

    const HALF: Vec2 = Vec2::new(0.5, 1.0);

    fn world_with_player(x: f32, y: f32) -> (PhysicsWorld, RigidBodyHandle) {
        let mut world = PhysicsWorld::new();
        let player = world.add_rigid_body(presets::player_body(x, y));
        world.add_collider(presets::player_collider(1.0, 2.0), player);
        (world, player)
    }

    fn add_block(world: &mut PhysicsWorld, x: f32, y: f32, width: f32, height: f32) {
        let handle = world.add_rigid_body(presets::platform_body(x, y));
        world.add_collider(presets::platform_collider(width, height), handle);
    }

    #[test]
    fn test_grounded_on_platform() {
        let (mut world, player) = world_with_player(0.0, 1.55);
        add_block(&mut world, 0.0, 0.0, 20.0, 1.0);
        world.step();

        let surface = world.probe_surfaces(player, HALF, 0.1);
        assert!(surface.grounded);
        assert!(!surface.ceiling_hit);
        assert!(!surface.wall_hit);
    }

    #[test]
    fn test_ledge_edge_still_grounded() {
        // Only the outermost ray is over the platform
        let (mut world, player) = world_with_player(-0.4, 1.55);
        add_block(&mut world, 5.0, 0.0, 10.0, 1.0);
        world.step();

        assert!(world.probe_surfaces(player, HALF, 0.1).grounded);
    }

    #[test]
    fn test_airborne_far_from_everything() {
        let (mut world, player) = world_with_player(0.0, 5.0);
        add_block(&mut world, 0.0, 0.0, 20.0, 1.0);
        world.step();

        assert_eq!(world.probe_surfaces(player, HALF, 0.1), SurfaceSample::air());
    }

    #[test]
    fn test_ceiling_hit() {
        let (mut world, player) = world_with_player(0.0, 5.0);
        add_block(&mut world, 0.0, 6.55, 20.0, 1.0);
        world.step();

        assert!(world.probe_surfaces(player, HALF, 0.1).ceiling_hit);
    }

    #[test]
    fn test_wall_on_right() {
        let (mut world, player) = world_with_player(0.0, 5.0);
        add_block(&mut world, 1.05, 5.0, 1.0, 4.0);
        world.step();

        let surface = world.probe_surfaces(player, HALF, 0.1);
        assert!(surface.wall_hit);
        assert_eq!(surface.wall_direction, 1);
    }

    #[test]
    fn test_left_wall_checked_first() {
        let (mut world, player) = world_with_player(0.0, 5.0);
        add_block(&mut world, -1.05, 5.0, 1.0, 4.0);
        add_block(&mut world, 1.05, 5.0, 1.0, 4.0);
        world.step();

        assert_eq!(world.probe_surfaces(player, HALF, 0.1).wall_direction, -1);
    }

    #[test]
    fn test_sensor_is_not_ground() {
        let (mut world, player) = world_with_player(0.0, 1.55);
        let zone = world.add_rigid_body(presets::platform_body(0.0, 0.0));
        world.add_collider(presets::sensor_collider(20.0, 1.0), zone);
        world.step();

        assert!(!world.probe_surfaces(player, HALF, 0.1).grounded);
    }
}
