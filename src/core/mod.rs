// Engine-agnostic helpers

pub mod math;
