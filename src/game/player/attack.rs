// Directional ranged attacks

use super::direction::Direction;
use crate::engine::audio::{AudioPlayer, Sfx};
use crate::engine::input::{Action, PlayerInput};
use crate::engine::physics::{na as nalgebra, vector, PhysicsWorld};
use crate::game::effects::{EffectId, EffectRegistry, EffectTemplate};
use glam::Vec2;

/// Spawns attack entities in front of the character on input edges.
///
/// Every press edge spawns exactly once; there is no cooldown or ammo.
#[derive(Debug)]
pub struct AttackSpawner {
    projectile: EffectTemplate,
    wind: EffectTemplate,
    throw_power: f32,
}

impl AttackSpawner {
    pub fn new(throw_power: f32) -> Self {
        Self {
            projectile: EffectTemplate::projectile(),
            wind: EffectTemplate::wind(),
            throw_power,
        }
    }

    /// Check attack edges for this step and spawn accordingly.
    /// `origin` is the character's current position.
    pub fn step(
        &self,
        input: &PlayerInput,
        facing: Direction,
        origin: Vec2,
        physics: &mut PhysicsWorld,
        effects: &mut EffectRegistry,
        audio: &mut AudioPlayer,
    ) {
        if input.just_pressed(Action::Throw) {
            self.throw(facing, origin, physics, effects);
            audio.play(Sfx::Throw);
        }

        if input.just_pressed(Action::Gust) {
            effects.spawn(&self.wind, origin, facing, physics);
            audio.play(Sfx::Gust);
        }
    }

    /// Spawn the projectile and send it off in the facing direction
    fn throw(
        &self,
        facing: Direction,
        origin: Vec2,
        physics: &mut PhysicsWorld,
        effects: &mut EffectRegistry,
    ) -> EffectId {
        let id = effects.spawn(&self.projectile, origin, facing, physics);
        effects.apply_impulse(id, vector![facing.signum() * self.throw_power, 0.0], physics);
        id
    }
}
