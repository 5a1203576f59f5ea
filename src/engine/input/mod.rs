// Input handling system
//
// Keyboard events from winit are translated into `Action`s through a binding
// table, and the per-frame `PlayerInput` exposes held state plus press and
// release edges. Game logic polls this state each fixed step; nothing
// subscribes to raw key events directly.

pub mod action;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
pub use player::PlayerInput;
