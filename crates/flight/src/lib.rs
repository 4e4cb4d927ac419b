//! Flight dynamics, crash/respawn handling and the chase camera.
//!
//! Everything advances in whole ticks. Per tick the order is fixed: take the input
//! snapshot, step the [`FlightController`], then update the [`ChaseCamera`] from the
//! aircraft pose it just published. [`Simulation`] owns that ordering.

pub mod camera;
pub mod controller;
pub mod sim;

pub use camera::*;
pub use controller::*;
pub use sim::*;
