// Engine modules: game loop, input, physics, audio, camera effects

pub mod audio;
pub mod camera;
pub mod game_loop;
pub mod input;
pub mod physics;
