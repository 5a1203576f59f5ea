// The player character
//
// Three cooperating parts, each advanced once per fixed step:
// - `MovementController`: input-driven forces, speed clamp/damping, jump,
//   ground detection, gravity-scale switching
// - `AttackSpawner`: edge-triggered projectile and wind-gust spawns
// - `DamageReactionSequencer`: knockback + sprite flicker + camera shake on
//   health-changed notifications

pub mod attack;
pub mod damage;
pub mod direction;
pub mod movement;
pub mod sprite;

pub use attack::AttackSpawner;
pub use damage::DamageReactionSequencer;
pub use direction::Direction;
pub use movement::MovementController;
pub use sprite::PlayerSprite;

use crate::engine::audio::AudioPlayer;
use crate::engine::camera::CameraShake;
use crate::engine::input::PlayerInput;
use crate::engine::physics::{body::presets, ColliderHandle, PhysicsWorld, RigidBodyHandle};
use crate::game::effects::EffectRegistry;
use crate::game::SetupError;
use glam::Vec2;

/// Movement, attack, and reaction parameters
#[derive(Debug, Clone, Copy)]
pub struct PlayerTunables {
    /// Horizontal force magnitude, scaled by the step duration
    pub move_force: f32,
    /// Upward jump impulse
    pub jump_power: f32,
    /// Hard cap on speed; velocity is rescaled down to it
    pub speed_max: f32,
    /// Multiplicative velocity damping applied every step
    pub damping: f32,
    /// |vertical speed| at or below this counts as grounded
    pub ground_epsilon: f32,
    /// Gravity scale while airborne
    pub falling_gravity_scale: f32,
    /// Projectile launch impulse
    pub throw_power: f32,
    /// Knockback impulse on damage
    pub knockback_power: f32,
    /// Interval between flicker toggles
    pub flush_span: f32,
    /// Total flicker duration
    pub flush_time: f32,
    pub shake_duration: f32,
    pub shake_strength: f32,
    /// Collider dimensions
    pub width: f32,
    pub height: f32,
}

/// Reference tuning for the player character
pub const DEFAULT_TUNABLES: PlayerTunables = PlayerTunables {
    move_force: 10.0,
    jump_power: 10.0,
    speed_max: 10.0,
    damping: 0.8,
    ground_epsilon: 0.1,
    falling_gravity_scale: 10.0,
    throw_power: 100.0,
    knockback_power: 100.0,
    flush_span: 1.0,
    flush_time: 1.5,
    shake_duration: 1.0,
    shake_strength: 1.0,
    width: 1.0,
    height: 2.0,
};

impl Default for PlayerTunables {
    fn default() -> Self {
        DEFAULT_TUNABLES
    }
}

/// The player character: physics handles plus the three controller parts
#[derive(Debug)]
pub struct Player {
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
    pub movement: MovementController,
    pub attacks: AttackSpawner,
    pub reaction: DamageReactionSequencer,
    pub sprite: PlayerSprite,
}

impl Player {
    /// Create the player's physics body and wire up the controllers
    pub fn spawn(
        physics: &mut PhysicsWorld,
        x: f32,
        y: f32,
        tunables: PlayerTunables,
    ) -> Result<Self, SetupError> {
        let body = physics.add_rigid_body(presets::player_body(x, y));
        let collider =
            physics.add_collider(presets::player_collider(tunables.width, tunables.height), body);

        Ok(Self {
            body,
            collider,
            movement: MovementController::new(body, collider, tunables, physics)?,
            attacks: AttackSpawner::new(tunables.throw_power),
            reaction: DamageReactionSequencer::new(
                tunables.knockback_power,
                tunables.flush_span,
                tunables.flush_time,
                tunables.shake_duration,
                tunables.shake_strength,
            ),
            sprite: PlayerSprite::new(),
        })
    }

    /// Current position, if the body still exists
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.body).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    /// Advance every controller part by one fixed step
    pub fn step(
        &mut self,
        input: &PlayerInput,
        physics: &mut PhysicsWorld,
        effects: &mut EffectRegistry,
        audio: &mut AudioPlayer,
        camera: &mut CameraShake,
        dt: f32,
    ) {
        self.movement
            .step(input, physics, &mut self.sprite, audio, dt);

        if let Some(origin) = self.position(physics) {
            self.attacks.step(
                input,
                self.movement.facing(),
                origin,
                physics,
                effects,
                audio,
            );
        }

        self.reaction.step(
            physics,
            self.body,
            self.movement.facing(),
            &mut self.sprite,
            camera,
            dt,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_places_body() {
        let mut physics = PhysicsWorld::new();
        let player = Player::spawn(&mut physics, 3.0, 4.0, PlayerTunables::default()).unwrap();
        let pos = player.position(&physics).unwrap();
        assert_eq!(pos, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_default_tunables() {
        let tunables = PlayerTunables::default();
        assert_eq!(tunables.damping, 0.8);
        assert_eq!(tunables.speed_max, 10.0);
        assert_eq!(tunables.flush_span, 1.0);
    }
}
