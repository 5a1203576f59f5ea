// Camera shake effect
//
// Produces a decaying positional offset the renderer would add to the
// camera transform. Advanced once per fixed step; deterministic (no RNG)
// so reactions are reproducible in tests.

use crate::core::math::lerp;
use glam::Vec2;
use log::debug;

/// Oscillation frequencies for the two axes, deliberately non-harmonic so
/// the shake path doesn't visibly repeat
const FREQ_X: f32 = 73.0;
const FREQ_Y: f32 = 91.0;

/// Timed camera shake with linear falloff
#[derive(Debug, Default)]
pub struct CameraShake {
    duration: f32,
    strength: f32,
    elapsed: f32,
    offset: Vec2,
}

impl CameraShake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a shake, replacing any shake still in progress
    pub fn start(&mut self, duration: f32, strength: f32) {
        debug!("camera shake: duration={duration} strength={strength}");
        self.duration = duration;
        self.strength = strength;
        self.elapsed = 0.0;
    }

    /// Advance the shake by one step
    pub fn step(&mut self, dt: f32) {
        if !self.is_active() {
            self.offset = Vec2::ZERO;
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.offset = Vec2::ZERO;
            return;
        }

        // Amplitude fades linearly from full strength to zero
        let falloff = lerp(self.strength, 0.0, self.elapsed / self.duration);
        self.offset = Vec2::new(
            (self.elapsed * FREQ_X).sin(),
            (self.elapsed * FREQ_Y).cos(),
        ) * falloff;
    }

    /// Whether a shake is in progress
    pub fn is_active(&self) -> bool {
        self.duration > 0.0 && self.elapsed < self.duration
    }

    /// Current camera offset; zero when no shake is active
    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}
