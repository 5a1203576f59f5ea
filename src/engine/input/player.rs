// Per-frame input state

use super::action::Action;
use std::collections::HashSet;

/// Pressed/edge state for all actions, rebuilt once per frame.
///
/// `is_pressed` answers "is the key held right now"; `just_pressed` and
/// `just_released` are edge flags valid until the next `update()`.
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press edges)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release edges)
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear edge state for a new frame.
    /// Call this once per frame after all events have been processed.
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_edge_and_held() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_update_clears_edge_keeps_held() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        assert!(input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_edge() {
        let mut input = PlayerInput::new();
        input.press(Action::Throw);
        input.update();
        input.release(Action::Throw);
        assert!(!input.is_pressed(Action::Throw));
        assert!(input.just_released(Action::Throw));
    }

    #[test]
    fn test_repeat_press_is_not_an_edge() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.press(Action::Jump); // key repeat while held
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::Jump);
        assert!(!input.just_released(Action::Jump));
    }
}
