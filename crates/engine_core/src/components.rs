//! Common ECS components used across the engine.

use glam::Vec3;

/// Flat colour as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint(pub u32);

impl Tint {
    /// Linear-ish RGB in `[0, 1]` for shading.
    pub fn to_rgb(self) -> Vec3 {
        let r = (self.0 >> 16) & 0xff;
        let g = (self.0 >> 8) & 0xff;
        let b = self.0 & 0xff;
        Vec3::new(r as f32, g as f32, b as f32) / 255.0
    }
}

/// What a static scenery entity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneryKind {
    Runway,
    Mountain,
    TreeTrunk,
    TreeCrown,
}

/// Tag component for static scenery. Scenery never moves and takes no part in collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenery {
    pub kind: SceneryKind,
}

impl Scenery {
    pub fn new(kind: SceneryKind) -> Self {
        Self { kind }
    }
}
