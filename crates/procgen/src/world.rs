//! World layout: the static scene the aircraft flies through.
//!
//! The layout is pure data. Nothing here takes part in flight or collision; renderers
//! either read [`WorldLayout`] directly or spawn it into an ECS with
//! [`WorldLayout::spawn_into`].

use engine_core::{Euler, Pose, Scenery, SceneryKind, Tint};
use glam::Vec3;
use hecs::World;
use rand::prelude::*;

use crate::aircraft::AircraftModel;
use crate::mountain::{Mountain, MountainConfig};

pub const SKY_COLOR: Tint = Tint(0x87ceeb);
pub const RUNWAY_COLOR: Tint = Tint(0x333333);
pub const MOUNTAIN_COLOR: Tint = Tint(0x556b2f);
pub const TRUNK_COLOR: Tint = Tint(0x8b5a2b);
pub const CROWN_COLOR: Tint = Tint(0x228b22);

/// Fixed mountain placements: centre x, centre z, footprint size, max height.
pub const MOUNTAINS: [MountainConfig; 4] = [
    MountainConfig::new(-80.0, -100.0, 80.0, 30.0),
    MountainConfig::new(100.0, 80.0, 100.0, 40.0),
    MountainConfig::new(-120.0, 120.0, 60.0, 25.0),
    MountainConfig::new(120.0, -120.0, 70.0, 35.0),
];

/// Number of tree placements attempted; attempts near the runway are dropped.
pub const TREE_ATTEMPTS: usize = 15;
/// Trees are scattered over `(-TREE_SPREAD/2, TREE_SPREAD/2)` on x and z.
pub const TREE_SPREAD: f32 = 300.0;
/// Half-extents of the tree-free zone around the runway.
pub const TREE_CLEARANCE_X: f32 = 30.0;
pub const TREE_CLEARANCE_Z: f32 = 100.0;

/// Launch height above the runway, and distance in from the runway's start.
const LAUNCH_HEIGHT: f32 = 2.0;
const LAUNCH_INSET: f32 = 10.0;

/// Flat runway strip lying on the ground plane, long axis along z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Runway {
    pub width: f32,
    pub length: f32,
    /// Centre of the strip. Raised slightly above y = 0 to avoid z-fighting.
    pub center: Vec3,
}

impl Default for Runway {
    fn default() -> Self {
        Self {
            width: 20.0,
            length: 200.0,
            center: Vec3::new(0.0, 0.01, 0.0),
        }
    }
}

impl Runway {
    /// Where the aircraft starts and respawns: a few units in from the near end.
    pub fn launch_point(&self) -> Vec3 {
        Vec3::new(
            self.center.x,
            LAUNCH_HEIGHT,
            self.center.z - self.length / 2.0 + LAUNCH_INSET,
        )
    }
}

/// A tree: cylindrical trunk with a spherical crown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tree {
    /// Base of the trunk on the ground plane.
    pub base: Vec3,
    pub trunk_height: f32,
    pub crown_radius: f32,
}

impl Tree {
    pub fn new(x: f32, z: f32) -> Self {
        Self {
            base: Vec3::new(x, 0.0, z),
            trunk_height: 6.0,
            crown_radius: 4.0,
        }
    }

    /// Centre of the trunk cylinder.
    pub fn trunk_center(&self) -> Vec3 {
        self.base + Vec3::Y * (self.trunk_height / 2.0)
    }

    /// Centre of the crown sphere; the crown sinks partly into the trunk top.
    pub fn crown_center(&self) -> Vec3 {
        self.base + Vec3::Y * (self.trunk_height + self.crown_radius * 0.6)
    }
}

/// A light source for the flat-shaded scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub color: Tint,
    pub intensity: f32,
    /// Position of a directional light; `None` for ambient.
    pub position: Option<Vec3>,
}

/// Everything static in the scene.
#[derive(Debug, Clone)]
pub struct WorldLayout {
    pub seed: u64,
    pub sky: Tint,
    pub lights: Vec<Light>,
    pub runway: Runway,
    pub mountains: Vec<Mountain>,
    pub trees: Vec<Tree>,
    pub aircraft: AircraftModel,
}

/// True if a tree at (x, z) would sit on or beside the runway.
pub fn in_runway_clearance(x: f32, z: f32) -> bool {
    x.abs() < TREE_CLEARANCE_X && z.abs() < TREE_CLEARANCE_Z
}

impl WorldLayout {
    /// Generate the world. The same seed always produces the same layout.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mountains = MOUNTAINS
            .iter()
            .map(|&config| Mountain::generate(config, &mut rng))
            .collect();

        let mut trees = Vec::with_capacity(TREE_ATTEMPTS);
        for _ in 0..TREE_ATTEMPTS {
            let x = (rng.gen::<f32>() - 0.5) * TREE_SPREAD;
            let z = (rng.gen::<f32>() - 0.5) * TREE_SPREAD;
            if in_runway_clearance(x, z) {
                continue;
            }
            trees.push(Tree::new(x, z));
        }

        log::debug!(
            "Generated world (seed {}): {} trees of {} attempts",
            seed,
            trees.len(),
            TREE_ATTEMPTS
        );

        Self {
            seed,
            sky: SKY_COLOR,
            lights: vec![
                Light {
                    color: Tint(0xffffff),
                    intensity: 0.7,
                    position: None,
                },
                Light {
                    color: Tint(0xffffff),
                    intensity: 0.8,
                    position: Some(Vec3::new(100.0, 200.0, 100.0)),
                },
            ],
            runway: Runway::default(),
            mountains,
            trees,
            aircraft: AircraftModel::default(),
        }
    }

    /// Launch and respawn pose: level, on the runway centreline.
    pub fn launch_pose(&self) -> Pose {
        Pose::from_position(self.runway.launch_point())
    }

    /// Spawn every scenery object as an entity with `(Scenery, Pose, Tint)`.
    /// Mountains additionally carry their [`Mountain`] heightfield. Aircraft parts are
    /// spawned as bare [`crate::AircraftPart`] entities since they move with the aircraft.
    /// Returns the entity count.
    pub fn spawn_into(&self, world: &mut World) -> usize {
        let mut spawned = 0;

        // Ground-plane meshes are authored in XY; lay them flat.
        let flat = Euler::new(-std::f32::consts::FRAC_PI_2, 0.0, 0.0);
        world.spawn((
            Scenery::new(SceneryKind::Runway),
            Pose::new(self.runway.center, flat),
            RUNWAY_COLOR,
        ));
        spawned += 1;

        for mountain in &self.mountains {
            world.spawn((
                Scenery::new(SceneryKind::Mountain),
                Pose::from_position(mountain.center()),
                MOUNTAIN_COLOR,
                mountain.clone(),
            ));
            spawned += 1;
        }

        for tree in &self.trees {
            world.spawn((
                Scenery::new(SceneryKind::TreeTrunk),
                Pose::from_position(tree.trunk_center()),
                TRUNK_COLOR,
            ));
            world.spawn((
                Scenery::new(SceneryKind::TreeCrown),
                Pose::from_position(tree.crown_center()),
                CROWN_COLOR,
            ));
            spawned += 2;
        }

        for part in &self.aircraft.parts {
            world.spawn((*part,));
            spawned += 1;
        }

        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_point_is_near_runway_start() {
        let layout = WorldLayout::generate(1);
        assert_eq!(layout.runway.launch_point(), Vec3::new(0.0, 2.0, -90.0));
        assert_eq!(layout.launch_pose().orientation, Euler::ZERO);
    }

    #[test]
    fn trees_avoid_runway() {
        for seed in 0..50 {
            let layout = WorldLayout::generate(seed);
            assert!(layout.trees.len() <= TREE_ATTEMPTS);
            for tree in &layout.trees {
                assert!(
                    !in_runway_clearance(tree.base.x, tree.base.z),
                    "seed {} placed a tree at {:?}",
                    seed,
                    tree.base
                );
                assert!(tree.base.x.abs() <= TREE_SPREAD / 2.0);
                assert!(tree.base.z.abs() <= TREE_SPREAD / 2.0);
            }
        }
    }

    /// Same world seed must produce the same scene.
    #[test]
    fn world_deterministic_same_seed() {
        let a = WorldLayout::generate(2024);
        let b = WorldLayout::generate(2024);
        assert_eq!(a.trees, b.trees);
        assert_eq!(a.mountains.len(), MOUNTAINS.len());
        for (ma, mb) in a.mountains.iter().zip(&b.mountains) {
            assert_eq!(ma.heightmap, mb.heightmap);
        }
    }

    #[test]
    fn different_seeds_different_mountains() {
        let a = WorldLayout::generate(11111);
        let b = WorldLayout::generate(22222);
        assert_ne!(a.mountains[0].heightmap, b.mountains[0].heightmap);
    }

    #[test]
    fn tree_crown_sits_on_trunk() {
        let tree = Tree::new(50.0, 50.0);
        assert_eq!(tree.trunk_center(), Vec3::new(50.0, 3.0, 50.0));
        assert!((tree.crown_center().y - 8.4).abs() < 1e-5);
    }

    #[test]
    fn spawn_creates_one_entity_per_object() {
        let layout = WorldLayout::generate(9);
        let mut world = World::new();
        let spawned = layout.spawn_into(&mut world);
        assert_eq!(
            spawned,
            1 + layout.mountains.len() + layout.trees.len() * 2 + layout.aircraft.parts.len()
        );
        assert_eq!(world.len() as usize, spawned);

        let mountains = world
            .query::<(&Scenery, &Mountain)>()
            .iter()
            .filter(|(_, (s, _))| s.kind == SceneryKind::Mountain)
            .count();
        assert_eq!(mountains, MOUNTAINS.len());

        let parts = world.query::<&crate::AircraftPart>().iter().count();
        assert_eq!(parts, 5);
        // Aircraft parts are not static scenery.
        let tagged = world.query::<(&Scenery, &crate::AircraftPart)>().iter().count();
        assert_eq!(tagged, 0);
    }
}
