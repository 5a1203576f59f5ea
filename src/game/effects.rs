// Spawned attack entities: projectiles and area effects
//
// The registry plays the part of an entity factory: it instantiates a
// template into the physics world in front of the character (mirroring the
// spawn offset by facing) and despawns time-boxed entries when their
// lifetime runs out.

use crate::engine::physics::{
    BodyBuilder, ColliderBuilder2D, CollisionGroups, PhysicsWorld, RigidBodyHandle, Vector,
};
use crate::game::player::Direction;
use glam::Vec2;
use log::debug;

/// Unique identifier for a spawned effect
pub type EffectId = u32;

/// What a spawned entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Thrown projectile, travels with an impulse
    Projectile,
    /// Stationary wind gust volume
    Wind,
}

/// Blueprint for a spawnable entity
#[derive(Debug, Clone)]
pub struct EffectTemplate {
    pub kind: EffectKind,
    /// Offset from the character at spawn time; `x` is mirrored by facing
    pub spawn_offset: Vec2,
    /// Collider radius
    pub radius: f32,
    /// Auto-despawn delay in seconds; `None` lives until removed externally
    pub lifetime: Option<f32>,
    pub gravity_scale: f32,
}

impl EffectTemplate {
    /// The thrown projectile (despawns 5 seconds after spawn)
    pub fn projectile() -> Self {
        Self {
            kind: EffectKind::Projectile,
            spawn_offset: Vec2::new(1.0, 0.2),
            radius: 0.15,
            lifetime: Some(5.0),
            gravity_scale: 0.0,
        }
    }

    /// The wind gust volume in front of the character
    pub fn wind() -> Self {
        Self {
            kind: EffectKind::Wind,
            spawn_offset: Vec2::new(1.2, 0.0),
            radius: 0.8,
            lifetime: Some(0.6),
            gravity_scale: 0.0,
        }
    }
}

/// A live spawned entity
#[derive(Debug)]
struct SpawnedEffect {
    id: EffectId,
    kind: EffectKind,
    body: RigidBodyHandle,
    /// Remaining lifetime, if time-boxed
    ttl: Option<f32>,
}

/// Owns all live spawned effects and their physics objects
#[derive(Debug, Default)]
pub struct EffectRegistry {
    effects: Vec<SpawnedEffect>,
    next_id: EffectId,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate a template at `origin` plus its facing-mirrored spawn
    /// offset. Returns the new entity's id.
    pub fn spawn(
        &mut self,
        template: &EffectTemplate,
        origin: Vec2,
        facing: Direction,
        physics: &mut PhysicsWorld,
    ) -> EffectId {
        let mut offset = template.spawn_offset;
        offset.x *= facing.signum();
        let pos = origin + offset;

        let body = BodyBuilder::new_dynamic()
            .position(pos.x, pos.y)
            .gravity_scale(template.gravity_scale)
            .can_sleep(false)
            .build();
        let body = physics.add_rigid_body(body);

        let collider = ColliderBuilder2D::circle(template.radius)
            .collision_groups(match template.kind {
                EffectKind::Projectile => CollisionGroups::Projectile,
                EffectKind::Wind => CollisionGroups::Effect,
            })
            .sensor(template.kind == EffectKind::Wind)
            .density(0.1)
            .build();
        physics.add_collider(collider, body);

        let id = self.next_id;
        self.next_id += 1;
        debug!(
            "spawned {:?} #{id} at ({:.2}, {:.2})",
            template.kind, pos.x, pos.y
        );

        self.effects.push(SpawnedEffect {
            id,
            kind: template.kind,
            body,
            ttl: template.lifetime,
        });
        id
    }

    /// Apply an impulse to a spawned entity's body
    pub fn apply_impulse(&self, id: EffectId, impulse: Vector<f32>, physics: &mut PhysicsWorld) {
        let Some(effect) = self.effects.iter().find(|e| e.id == id) else {
            return;
        };
        if let Some(body) = physics.get_rigid_body_mut(effect.body) {
            body.apply_impulse(impulse, true);
        }
    }

    /// Current position of a spawned entity
    pub fn position(&self, id: EffectId, physics: &PhysicsWorld) -> Option<Vec2> {
        let effect = self.effects.iter().find(|e| e.id == id)?;
        let body = physics.get_rigid_body(effect.body)?;
        let pos = body.translation();
        Some(Vec2::new(pos.x, pos.y))
    }

    /// Current velocity of a spawned entity
    pub fn velocity(&self, id: EffectId, physics: &PhysicsWorld) -> Option<Vec2> {
        let effect = self.effects.iter().find(|e| e.id == id)?;
        let body = physics.get_rigid_body(effect.body)?;
        let vel = body.linvel();
        Some(Vec2::new(vel.x, vel.y))
    }

    /// The kind of a live entity, if it exists
    pub fn kind(&self, id: EffectId) -> Option<EffectKind> {
        self.effects.iter().find(|e| e.id == id).map(|e| e.kind)
    }

    /// Advance lifetimes and despawn expired entities
    pub fn step(&mut self, dt: f32, physics: &mut PhysicsWorld) {
        let mut expired = Vec::new();
        for effect in &mut self.effects {
            if let Some(ttl) = &mut effect.ttl {
                *ttl -= dt;
                if *ttl <= 0.0 {
                    expired.push(effect.id);
                }
            }
        }

        for id in expired {
            self.despawn(id, physics);
        }
    }

    /// Remove an entity and its physics body immediately
    pub fn despawn(&mut self, id: EffectId, physics: &mut PhysicsWorld) {
        if let Some(pos) = self.effects.iter().position(|e| e.id == id) {
            let effect = self.effects.remove(pos);
            physics.remove_rigid_body(effect.body);
            debug!("despawned {:?} #{id}", effect.kind);
        }
    }

    /// Number of live entities
    pub fn count(&self) -> usize {
        self.effects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::{na as nalgebra, vector};
    use approx::assert_relative_eq;

    #[test]
    fn test_spawn_offset_mirrored_by_facing() {
        let mut physics = PhysicsWorld::new();
        let mut registry = EffectRegistry::new();
        let template = EffectTemplate::projectile();
        let origin = Vec2::new(3.0, 2.0);

        let right = registry.spawn(&template, origin, Direction::Right, &mut physics);
        let left = registry.spawn(&template, origin, Direction::Left, &mut physics);

        let right_pos = registry.position(right, &physics).unwrap();
        let left_pos = registry.position(left, &physics).unwrap();

        assert_relative_eq!(right_pos.x, origin.x + template.spawn_offset.x);
        assert_relative_eq!(left_pos.x, origin.x - template.spawn_offset.x);
        // the vertical offset component is never mirrored
        assert_relative_eq!(right_pos.y, origin.y + template.spawn_offset.y);
        assert_relative_eq!(left_pos.y, origin.y + template.spawn_offset.y);
    }

    #[test]
    fn test_lifetime_despawn() {
        let mut physics = PhysicsWorld::new();
        let mut registry = EffectRegistry::new();

        let id = registry.spawn(
            &EffectTemplate::wind(),
            Vec2::ZERO,
            Direction::Right,
            &mut physics,
        );
        assert_eq!(registry.count(), 1);

        registry.step(1.0, &mut physics); // wind lifetime is 0.6
        assert_eq!(registry.count(), 0);
        assert!(registry.position(id, &physics).is_none());
    }

    #[test]
    fn test_projectile_survives_until_lifetime() {
        let mut physics = PhysicsWorld::new();
        let mut registry = EffectRegistry::new();

        registry.spawn(
            &EffectTemplate::projectile(),
            Vec2::ZERO,
            Direction::Right,
            &mut physics,
        );

        for _ in 0..99 {
            registry.step(0.05, &mut physics); // 4.95 s total
        }
        assert_eq!(registry.count(), 1);

        registry.step(0.1, &mut physics);
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_impulse_moves_projectile() {
        let mut physics = PhysicsWorld::new();
        let mut registry = EffectRegistry::new();

        let id = registry.spawn(
            &EffectTemplate::projectile(),
            Vec2::ZERO,
            Direction::Right,
            &mut physics,
        );
        registry.apply_impulse(id, vector![10.0, 0.0], &mut physics);

        let vel = registry.velocity(id, &physics).unwrap();
        assert!(vel.x > 0.0);
    }
}
