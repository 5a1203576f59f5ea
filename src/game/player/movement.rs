// Horizontal movement, jumping, and ground detection

use super::direction::Direction;
use super::sprite::PlayerSprite;
use super::PlayerTunables;
use crate::engine::audio::{AudioPlayer, Sfx};
use crate::engine::input::{Action, PlayerInput};
use crate::engine::physics::{
    na as nalgebra, vector, ColliderHandle, PhysicsWorld, RigidBodyHandle, SurfaceKind,
};
use crate::game::SetupError;
use log::debug;

/// Drives the character's physics body from polled input, once per fixed
/// step.
///
/// Grounding uses two signals: a near-zero vertical-velocity heuristic
/// (`on_ground`, which also drives the gravity-scale switch) and an actual
/// contact check against `Ground`-tagged colliders. Footsteps only play when
/// both agree. The velocity heuristic can misread the apex of a jump as
/// grounded for a step; known approximation.
#[derive(Debug)]
pub struct MovementController {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    tunables: PlayerTunables,

    facing: Direction,
    /// Grounded per the vertical-velocity heuristic
    on_ground: bool,
    /// In contact with Ground-tagged geometry, per the contact graph
    touching_ground: bool,
    /// Gravity scale captured from the body at construction; restored on
    /// landing
    base_gravity_scale: f32,
}

impl MovementController {
    /// Wire the controller to an existing body and collider. Fails if the
    /// handles are not present in the physics world.
    pub fn new(
        body: RigidBodyHandle,
        collider: ColliderHandle,
        tunables: PlayerTunables,
        physics: &PhysicsWorld,
    ) -> Result<Self, SetupError> {
        let base_gravity_scale = physics
            .get_rigid_body(body)
            .ok_or(SetupError::MissingBody)?
            .gravity_scale();
        if physics.get_collider(collider).is_none() {
            return Err(SetupError::MissingCollider);
        }

        Ok(Self {
            body,
            collider,
            tunables,
            facing: Direction::default(),
            // Starts airborne; the first step with settled velocity lands
            on_ground: false,
            touching_ground: false,
            base_gravity_scale,
        })
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn is_touching_ground(&self) -> bool {
        self.touching_ground
    }

    /// Advance by one fixed step: input forces, speed clamp, damping, jump,
    /// then the grounded-state refresh.
    pub fn step(
        &mut self,
        input: &PlayerInput,
        physics: &mut PhysicsWorld,
        sprite: &mut PlayerSprite,
        audio: &mut AudioPlayer,
        dt: f32,
    ) {
        let grounded_now;
        {
            let Some(body) = physics.get_rigid_body_mut(self.body) else {
                return;
            };

            // Directional input: force, facing, footsteps, animation cue
            let held = if input.is_pressed(Action::MoveRight) {
                Some(Direction::Right)
            } else if input.is_pressed(Action::MoveLeft) {
                Some(Direction::Left)
            } else {
                None
            };

            if let Some(dir) = held {
                body.apply_impulse(vector![dir.signum() * self.tunables.move_force * dt, 0.0], true);
                self.facing = dir;
                sprite.face(dir);
                if self.on_ground && self.touching_ground {
                    audio.play_if_not_playing(Sfx::Footstep);
                }
                sprite.signal_run();
            } else {
                sprite.signal_idle();
            }

            // Clamp speed, then damp. Both run every step regardless of
            // input, so the character drifts to rest on its own.
            let mut vel = *body.linvel();
            if vel.magnitude() > self.tunables.speed_max {
                vel = vel.normalize() * self.tunables.speed_max;
            }
            vel *= self.tunables.damping;
            body.set_linvel(vel, true);

            // Jump: edge-triggered, grounded only. Holding the key never
            // re-fires.
            if input.just_pressed(Action::Jump) && self.on_ground {
                body.apply_impulse(vector![0.0, self.tunables.jump_power], true);
                debug!("jump");
            }

            // Grounded heuristic from vertical speed; switching gravity
            // scale on the transition makes falls heavier than ascents
            grounded_now = body.linvel().y.abs() <= self.tunables.ground_epsilon;
            if grounded_now != self.on_ground {
                if grounded_now {
                    body.set_gravity_scale(self.base_gravity_scale, true);
                    debug!("landed");
                } else {
                    body.set_gravity_scale(self.tunables.falling_gravity_scale, true);
                    debug!("airborne");
                }
            }
        }
        self.on_ground = grounded_now;

        // Contact-graph check against Ground-tagged geometry
        self.touching_ground = physics.is_touching_surface(self.collider, SurfaceKind::Ground);
    }
}
