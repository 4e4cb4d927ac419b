//! Procedural generation for the static world: runway, mountains, trees, sky,
//! and the aircraft model.

pub mod aircraft;
pub mod mountain;
pub mod world;

pub use aircraft::*;
pub use mountain::*;
pub use world::*;
