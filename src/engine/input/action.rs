// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Attacks
    /// Throw a projectile in the facing direction
    Throw,
    /// Release the area wind effect in front of the character
    Gust,

    // Meta actions
    Pause,
}

/// Default keyboard bindings (arrow keys + Space/Z, matching the classic
/// platformer layout)
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::ArrowUp, Action::Jump),
        (KeyCode::Space, Action::Throw),
        (KeyCode::KeyZ, Action::Gust),
        (KeyCode::KeyP, Action::Pause),
    ]
}
