use glam::Vec2;
use rapier2d::prelude::*;
use std::collections::HashMap;

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Physics world that integrates bodies and answers surface queries
///
/// Gravity defaults to zero: characters get their vertical motion from the
/// movement controller and the world only resolves contacts.
pub struct PhysicsWorld {
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,

    /// Query pipeline for raycasts, refreshed on every step
    query_pipeline: QueryPipeline,

    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,

    /// User data mapping from handles to game entity IDs
    body_to_entity: HashMap<RigidBodyHandle, u64>,
}

impl PhysicsWorld {
    /// Create a new physics world without global gravity
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, 0.0])
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            body_to_entity: HashMap::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Associate a game entity ID with a rigid body
    pub fn set_entity_mapping(&mut self, body_handle: RigidBodyHandle, entity_id: u64) {
        self.body_to_entity.insert(body_handle, entity_id);
    }

    /// Get the entity ID associated with a rigid body
    pub fn get_entity_id(&self, body_handle: RigidBodyHandle) -> Option<u64> {
        self.body_to_entity.get(&body_handle).copied()
    }

    /// Current translation of a body, if it exists
    pub fn position(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(handle).map(|body| {
            let translation = body.translation();
            Vec2::new(translation.x, translation.y)
        })
    }

    /// Teleport a body and clear its velocity
    pub fn set_position(&mut self, handle: RigidBodyHandle, position: Vec2) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_translation(vector![position.x, position.y], true);
            body.set_linvel(vector![0.0, 0.0], true);
        }
    }

    /// Overwrite a body's linear velocity for the next step
    ///
    /// Returns false when the handle no longer refers to a body.
    pub fn set_linear_velocity(&mut self, handle: RigidBodyHandle, velocity: Vec2) -> bool {
        match self.rigid_body_set.get_mut(handle) {
            Some(body) => {
                body.set_linvel(vector![velocity.x, velocity.y], true);
                true
            }
            None => false,
        }
    }

    /// Cast a ray and return the first hit
    pub fn raycast(
        &self,
        ray_origin: Vector<Real>,
        ray_dir: Vector<Real>,
        max_toi: Real,
        solid: bool,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, Real)> {
        let ray = Ray::new(point![ray_origin.x, ray_origin.y], ray_dir);
        self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_toi,
            solid,
            filter,
        )
    }

    /// Get current gravity
    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Set the timestep for physics simulation
    pub fn set_timestep(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
    }

    /// Get the current timestep
    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::body::presets;
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_world_has_no_gravity_by_default() {
        let world = PhysicsWorld::new();
        assert_eq!(world.gravity(), vector![0.0, 0.0]);
        assert_relative_eq!(world.timestep(), 1.0 / 60.0);
    }

    #[test]
    fn test_linear_velocity_moves_body() {
        let mut world = PhysicsWorld::new();
        world.set_timestep(0.1);
        let handle = world.add_rigid_body(presets::player_body(0.0, 0.0));
        world.add_collider(presets::player_collider(1.0, 2.0), handle);

        assert!(world.set_linear_velocity(handle, Vec2::new(10.0, 0.0)));
        world.step();

        let position = world.position(handle).unwrap();
        assert_relative_eq!(position.x, 1.0, epsilon = 1e-3);
        assert_relative_eq!(position.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_raycast_hits_platform() {
        let mut world = PhysicsWorld::new();
        let platform = world.add_rigid_body(presets::platform_body(0.0, 0.0));
        world.add_collider(presets::platform_collider(10.0, 1.0), platform);
        // Queries only see colliders after the pipeline has been updated
        world.step();

        let hit = world.raycast(
            vector![0.0, 2.0],
            vector![0.0, -1.0],
            5.0,
            true,
            QueryFilter::default(),
        );
        let (_, toi) = hit.unwrap();
        assert_relative_eq!(toi, 1.5, epsilon = 1e-3);
    }

    #[test]
    fn test_entity_mapping() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_rigid_body(presets::player_body(0.0, 0.0));
        world.set_entity_mapping(handle, 7);
        assert_eq!(world.get_entity_id(handle), Some(7));
    }

    #[test]
    fn test_set_position_clears_velocity() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_rigid_body(presets::player_body(0.0, 0.0));
        world.set_linear_velocity(handle, Vec2::new(3.0, 3.0));
        world.set_position(handle, Vec2::new(4.0, 5.0));

        assert_eq!(world.position(handle), Some(Vec2::new(4.0, 5.0)));
        let body = world.get_rigid_body(handle).unwrap();
        assert_eq!(body.linvel().x, 0.0);
    }
}
