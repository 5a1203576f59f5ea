// Sound effect triggering
//
// Actual mixing and output are outside this crate; a triggered clip is
// emitted as a log line. What the game logic needs from audio is the
// trigger surface itself plus "is this clip still playing", which gates
// the footstep loop, so playback timing is tracked here.

use log::debug;

/// Sound effects the player controller can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    /// Footsteps while running on the ground
    Footstep,
    /// Projectile throw
    Throw,
    /// Wind gust attack
    Gust,
}

const SFX_COUNT: usize = 3;

impl Sfx {
    fn index(self) -> usize {
        match self {
            Self::Footstep => 0,
            Self::Throw => 1,
            Self::Gust => 2,
        }
    }

    /// Nominal clip length in seconds, used for the "still playing" gate
    fn duration(self) -> f32 {
        match self {
            Self::Footstep => 0.3,
            Self::Throw => 0.4,
            Self::Gust => 0.8,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Footstep => "footstep",
            Self::Throw => "throw",
            Self::Gust => "gust",
        }
    }
}

/// Tracks which clips are currently playing
#[derive(Debug, Default)]
pub struct AudioPlayer {
    /// Remaining playback time per clip; 0 means idle
    remaining: [f32; SFX_COUNT],
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger a clip, restarting it if it is already playing
    pub fn play(&mut self, sfx: Sfx) {
        debug!("audio: play {}", sfx.name());
        self.remaining[sfx.index()] = sfx.duration();
    }

    /// Trigger a clip only if it is not already playing
    pub fn play_if_not_playing(&mut self, sfx: Sfx) {
        if !self.is_playing(sfx) {
            self.play(sfx);
        }
    }

    /// Check whether a clip is still playing
    pub fn is_playing(&self, sfx: Sfx) -> bool {
        self.remaining[sfx.index()] > 0.0
    }

    /// Advance playback timers by one step
    pub fn step(&mut self, dt: f32) {
        for remaining in &mut self.remaining {
            *remaining = (*remaining - dt).max(0.0);
        }
    }
}
