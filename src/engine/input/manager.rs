// Input manager - translates winit keyboard events into action state

use super::action::{default_bindings, Action};
use super::player::PlayerInput;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Maps physical keys to actions and maintains the per-frame input state
pub struct InputManager {
    bindings: HashMap<KeyCode, Action>,
    input: PlayerInput,
}

impl InputManager {
    /// Create an input manager with the default key bindings
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            input: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        let Some(&action) = self.bindings.get(&key_code) else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                // OS key repeats are not press edges
                if !event.repeat {
                    self.input.press(action);
                }
            }
            ElementState::Released => {
                self.input.release(action);
            }
        }
    }

    /// Clear edge state for a new frame.
    /// Call once per frame after processing all events.
    pub fn update(&mut self) {
        self.input.update();
    }

    /// Current input state
    pub fn input(&self) -> &PlayerInput {
        &self.input
    }

    /// Mutable input state, for consuming edges during the update batch
    pub fn input_mut(&mut self) -> &mut PlayerInput {
        &mut self.input
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
