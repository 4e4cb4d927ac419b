//! Core engine types and utilities for Skyhop.
//!
//! This crate provides the foundational types used across all engine systems:
//! - Pose and Euler-angle rotation
//! - Fixed-step time management
//! - Common component types for the scenery ECS

pub mod components;
pub mod pose;
pub mod time;

pub use components::*;
pub use pose::*;
pub use time::*;

// Re-export commonly used types
pub use glam::{Mat3, Mat4, Vec2, Vec3};
pub use hecs::{Entity, World};
