use rapier2d::prelude::*;

use super::surface::SurfaceKind;

/// Physics world that manages all physics simulation
pub struct PhysicsWorld {
    /// Gravity vector (default: -9.81 m/s² in y-axis)
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

    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
}

impl PhysicsWorld {
    /// Create a new physics world with default settings
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, -9.81])
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
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
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
            None,
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

    /// Remove a rigid body and all its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true, // remove attached colliders
        );
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable reference to a rigid body
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Get a reference to a collider
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Check whether a collider is in active contact with any collider tagged
    /// with the given surface kind.
    ///
    /// This is the explicit replacement for tag-string collision callbacks:
    /// the contact graph is polled after each step instead of latching state
    /// from collision-stay events.
    pub fn is_touching_surface(&self, collider: ColliderHandle, surface: SurfaceKind) -> bool {
        for pair in self.narrow_phase.contact_pairs_with(collider) {
            if !pair.has_any_active_contact {
                continue;
            }
            let other = if pair.collider1 == collider {
                pair.collider2
            } else {
                pair.collider1
            };
            if let Some(other) = self.collider_set.get(other) {
                if SurfaceKind::from_user_data(other.user_data) == surface {
                    return true;
                }
            }
        }
        false
    }

}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;

    #[test]
    fn test_add_and_get_body() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_rigid_body(presets::player_body(1.0, 2.0));

        let body = world.get_rigid_body(handle).unwrap();
        assert_eq!(body.translation().x, 1.0);
        assert_eq!(body.translation().y, 2.0);
    }

    #[test]
    fn test_remove_body() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_rigid_body(presets::player_body(0.0, 0.0));
        world.remove_rigid_body(handle);
        assert!(world.get_rigid_body(handle).is_none());
    }

    #[test]
    fn test_gravity_integrates_velocity() {
        let mut world = PhysicsWorld::new();
        let body = world.add_rigid_body(presets::player_body(0.0, 10.0));
        world.add_collider(presets::player_collider(1.0, 2.0), body);

        for _ in 0..10 {
            world.step();
        }

        let vy = world.get_rigid_body(body).unwrap().linvel().y;
        assert!(vy < 0.0, "free-falling body should gain downward velocity");
    }

    #[test]
    fn test_is_touching_surface_after_settling() {
        let mut world = PhysicsWorld::new();

        // Ground slab with its top at y = 0
        let ground = world.add_rigid_body(presets::terrain_body(0.0, -0.5));
        world.add_collider(presets::ground_collider(40.0, 1.0), ground);

        // Player slightly above the slab
        let player = world.add_rigid_body(presets::player_body(0.0, 1.05));
        let player_collider = world.add_collider(presets::player_collider(1.0, 2.0), player);

        for _ in 0..120 {
            world.step();
        }

        assert!(world.is_touching_surface(player_collider, SurfaceKind::Ground));
        assert!(!world.is_touching_surface(player_collider, SurfaceKind::Hazard));
    }
}
