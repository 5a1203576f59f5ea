// Physics system using rapier2d

pub mod body;
mod surface;
mod world;

pub use body::{BodyBuilder, ColliderBuilder2D, ColliderHandle, RigidBodyHandle};
pub use surface::{CollisionGroups, SurfaceKind};
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience. `vector!`
// expands to `nalgebra::` paths, so call sites outside this module
// must also import `na as nalgebra`.
pub use rapier2d::na;
pub use rapier2d::prelude::{vector, Vector};
