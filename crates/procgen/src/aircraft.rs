//! Aircraft model as a list of primitive parts in the aircraft's local frame.
//!
//! Local axes match the flight model: +X is the nose, +Y is up. Renderers place each
//! part at `aircraft_pose.local_to_world(part.offset)` and compose the rotations.

use engine_core::{Euler, Tint};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

pub const FUSELAGE_COLOR: Tint = Tint(0xe0e0e0);
pub const WING_COLOR: Tint = Tint(0x1565c0);
pub const COCKPIT_COLOR: Tint = Tint(0x90caf9);

/// Primitive shape of one part, in its own frame before `rotation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    /// Along the part's Y axis.
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Box {
        size: Vec3,
    },
    Sphere {
        radius: f32,
        segments: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Fuselage,
    Wing,
    Tailplane,
    Fin,
    Cockpit,
}

/// One part of the aircraft. Also used as the ECS component for spawned parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftPart {
    pub kind: PartKind,
    pub shape: PartShape,
    pub offset: Vec3,
    pub rotation: Euler,
    pub color: Tint,
    /// 1.0 is opaque.
    pub opacity: f32,
}

/// The whole aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftModel {
    pub parts: Vec<AircraftPart>,
}

impl Default for AircraftModel {
    fn default() -> Self {
        let part = |kind, shape, offset, rotation, color| AircraftPart {
            kind,
            shape,
            offset,
            rotation,
            color,
            opacity: 1.0,
        };
        // Cylinders stand on Y; a quarter turn about Z lays the fuselage along X.
        let along_x = Euler::new(0.0, 0.0, FRAC_PI_2);
        Self {
            parts: vec![
                part(
                    PartKind::Fuselage,
                    PartShape::Cylinder {
                        radius_top: 1.0,
                        radius_bottom: 1.0,
                        height: 8.0,
                        segments: 12,
                    },
                    Vec3::ZERO,
                    along_x,
                    FUSELAGE_COLOR,
                ),
                part(
                    PartKind::Wing,
                    PartShape::Box {
                        size: Vec3::new(10.0, 0.3, 1.2),
                    },
                    Vec3::ZERO,
                    Euler::ZERO,
                    WING_COLOR,
                ),
                part(
                    PartKind::Tailplane,
                    PartShape::Box {
                        size: Vec3::new(2.0, 0.2, 0.7),
                    },
                    Vec3::new(-3.5, 0.5, 0.0),
                    Euler::ZERO,
                    WING_COLOR,
                ),
                part(
                    PartKind::Fin,
                    PartShape::Box {
                        size: Vec3::new(0.2, 1.0, 0.5),
                    },
                    Vec3::new(-4.0, 0.5, 0.0),
                    along_x,
                    WING_COLOR,
                ),
                AircraftPart {
                    opacity: 0.7,
                    ..part(
                        PartKind::Cockpit,
                        PartShape::Sphere {
                            radius: 1.0,
                            segments: 8,
                        },
                        Vec3::new(2.0, 0.7, 0.0),
                        Euler::ZERO,
                        COCKPIT_COLOR,
                    )
                },
            ],
        }
    }
}

impl AircraftModel {
    pub fn part(&self, kind: PartKind) -> Option<&AircraftPart> {
        self.parts.iter().find(|p| p.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_has_one_of_each_part() {
        let model = AircraftModel::default();
        assert_eq!(model.parts.len(), 5);
        for kind in [
            PartKind::Fuselage,
            PartKind::Wing,
            PartKind::Tailplane,
            PartKind::Fin,
            PartKind::Cockpit,
        ] {
            assert!(model.part(kind).is_some(), "missing {:?}", kind);
        }
    }

    #[test]
    fn tail_sits_behind_and_cockpit_ahead() {
        let model = AircraftModel::default();
        let tail = model.part(PartKind::Tailplane).map(|p| p.offset);
        let fin = model.part(PartKind::Fin).map(|p| p.offset);
        let cockpit = model.part(PartKind::Cockpit).copied();
        assert_eq!(tail, Some(Vec3::new(-3.5, 0.5, 0.0)));
        assert_eq!(fin, Some(Vec3::new(-4.0, 0.5, 0.0)));
        let cockpit = cockpit.expect("cockpit");
        assert!(cockpit.offset.x > 0.0);
        assert_eq!(cockpit.opacity, 0.7);
        assert_eq!(cockpit.color, COCKPIT_COLOR);
    }

    /// The fuselage's cylinder axis (local Y) ends up along the flight axis.
    #[test]
    fn fuselage_lies_along_flight_axis() {
        let fuselage = AircraftModel::default().part(PartKind::Fuselage).copied();
        let axis = fuselage.expect("fuselage").rotation.rotate(Vec3::Y);
        assert!(axis.abs_diff_eq(Vec3::NEG_X, 1e-6), "got {:?}", axis);
    }
}
