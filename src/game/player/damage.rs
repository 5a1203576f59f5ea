// Damage reaction: knockback, sprite flicker, camera shake

use super::direction::Direction;
use super::sprite::PlayerSprite;
use crate::engine::camera::CameraShake;
use crate::engine::physics::{na as nalgebra, vector, PhysicsWorld, RigidBodyHandle};
use log::debug;
use std::cell::Cell;
use std::rc::Rc;

/// Flicker phase, advanced once per fixed step
#[derive(Debug, Clone, Copy, PartialEq)]
enum FlickerState {
    Idle,
    Flickering {
        /// Time since the last visibility toggle
        timer: f32,
        /// Total flicker time accumulated so far
        elapsed: f32,
    },
}

/// Reacts to health-changed notifications with a knockback impulse, a
/// visibility flicker on the sprite, and a camera shake.
///
/// Notifications are recorded by the registered listener and consumed at the
/// start of the next `step`; delivery is synchronous and single-threaded. A
/// damage event that arrives mid-flicker cancels and restarts the sequence
/// (still applying its knockback and shake), so exactly one flicker runs at
/// a time and the exit always leaves the sprite visible.
#[derive(Debug)]
pub struct DamageReactionSequencer {
    /// Damage notifications seen since the last step
    pending: Rc<Cell<u32>>,
    state: FlickerState,

    knockback_power: f32,
    /// Interval between visibility toggles
    flush_span: f32,
    /// Total duration of the flicker sequence
    flush_time: f32,
    shake_duration: f32,
    shake_strength: f32,
}

impl DamageReactionSequencer {
    pub fn new(
        knockback_power: f32,
        flush_span: f32,
        flush_time: f32,
        shake_duration: f32,
        shake_strength: f32,
    ) -> Self {
        Self {
            pending: Rc::new(Cell::new(0)),
            state: FlickerState::Idle,
            knockback_power,
            flush_span,
            flush_time,
            shake_duration,
            shake_strength,
        }
    }

    /// A listener to register with the health collaborator's changed signal
    pub fn listener(&self) -> impl FnMut() + 'static {
        let pending = Rc::clone(&self.pending);
        move || pending.set(pending.get() + 1)
    }

    /// Whether a flicker sequence is in progress
    pub fn is_flickering(&self) -> bool {
        matches!(self.state, FlickerState::Flickering { .. })
    }

    /// Consume pending damage notifications and advance the flicker
    pub fn step(
        &mut self,
        physics: &mut PhysicsWorld,
        body: RigidBodyHandle,
        facing: Direction,
        sprite: &mut PlayerSprite,
        camera: &mut CameraShake,
        dt: f32,
    ) {
        let events = self.pending.replace(0);
        if events > 0 {
            // One knockback per event, pushing away from where the
            // character is looking
            let push = facing.flipped().signum() * self.knockback_power;
            if let Some(body) = physics.get_rigid_body_mut(body) {
                for _ in 0..events {
                    body.apply_impulse(vector![push, 0.0], true);
                }
            }
            camera.start(self.shake_duration, self.shake_strength);
            debug!("damage reaction: knockback opposite {facing:?}");

            // Cancel-and-restart on overlap
            self.state = FlickerState::Flickering {
                timer: 0.0,
                elapsed: 0.0,
            };
        }

        let FlickerState::Flickering {
            mut timer,
            mut elapsed,
        } = self.state
        else {
            return;
        };

        timer += dt;
        while timer >= self.flush_span {
            timer -= self.flush_span;
            elapsed += self.flush_span;
            sprite.toggle_visible();
            if elapsed >= self.flush_time {
                // Always exit visible, whatever the toggle parity
                sprite.set_visible(true);
                self.state = FlickerState::Idle;
                debug!("damage reaction: flicker done");
                return;
            }
        }
        self.state = FlickerState::Flickering { timer, elapsed };
    }
}
