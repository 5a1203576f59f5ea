// Player sprite state
//
// The renderer is outside this crate; what the controller owns is the
// sprite's visibility flag, horizontal flip, and which motion cue the
// animation collaborator should be playing.

use super::direction::Direction;
use log::debug;

/// Animation cue signalled to the sprite/animation collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionCue {
    #[default]
    Idle,
    Run,
}

/// Visibility, flip, and motion state for the player's sprite
#[derive(Debug)]
pub struct PlayerSprite {
    visible: bool,
    flip_x: bool,
    motion: MotionCue,
}

impl PlayerSprite {
    pub fn new() -> Self {
        Self {
            visible: true,
            flip_x: false,
            motion: MotionCue::Idle,
        }
    }

    /// Signal the run animation; a no-op if it is already running
    pub fn signal_run(&mut self) {
        if self.motion != MotionCue::Run {
            self.motion = MotionCue::Run;
            debug!("sprite: run");
        }
    }

    /// Signal the idle animation; a no-op if already idle
    pub fn signal_idle(&mut self) {
        if self.motion != MotionCue::Idle {
            self.motion = MotionCue::Idle;
            debug!("sprite: idle");
        }
    }

    /// Mirror the sprite to match the facing direction.
    /// Only writes the flip flag when the sign actually differs.
    pub fn face(&mut self, direction: Direction) {
        let flip = direction == Direction::Left;
        if self.flip_x != flip {
            self.flip_x = flip;
        }
    }

    pub fn motion(&self) -> MotionCue {
        self.motion
    }

    pub fn is_flipped(&self) -> bool {
        self.flip_x
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Invert the visibility flag (flicker toggle)
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }
}

impl Default for PlayerSprite {
    fn default() -> Self {
        Self::new()
    }
}
