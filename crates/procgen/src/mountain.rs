//! Mountain heightfields.
//!
//! Each mountain is a square grid of vertices with an independent random height per
//! vertex, which gives the jagged flat-shaded look. All randomness comes from the
//! caller's RNG so a world seed reproduces the same peaks.

use glam::Vec3;
use rand::Rng;

/// Grid segments per side; the grid has `SEGMENTS + 1` vertices per side.
pub const MOUNTAIN_SEGMENTS: u32 = 16;

/// Placement and extent of one mountain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountainConfig {
    /// Centre of the footprint on the ground plane (x, z).
    pub center_x: f32,
    pub center_z: f32,
    /// Side length of the square footprint in world units.
    pub size: f32,
    /// Heights are drawn from `[0, max_height)`.
    pub max_height: f32,
}

impl MountainConfig {
    pub const fn new(center_x: f32, center_z: f32, size: f32, max_height: f32) -> Self {
        Self {
            center_x,
            center_z,
            size,
            max_height,
        }
    }
}

/// Generated mountain heightfield.
#[derive(Debug, Clone)]
pub struct Mountain {
    pub config: MountainConfig,
    /// Row-major heights, `(SEGMENTS + 1)^2` entries. Row index runs along +z.
    pub heightmap: Vec<f32>,
}

impl Mountain {
    pub fn generate<R: Rng + ?Sized>(config: MountainConfig, rng: &mut R) -> Self {
        let side = (MOUNTAIN_SEGMENTS + 1) as usize;
        let heightmap = (0..side * side)
            .map(|_| {
                if config.max_height > 0.0 {
                    rng.gen_range(0.0..config.max_height)
                } else {
                    0.0
                }
            })
            .collect();
        Self { config, heightmap }
    }

    /// Vertices per side.
    pub fn side(&self) -> usize {
        (MOUNTAIN_SEGMENTS + 1) as usize
    }

    /// World-space centre of the footprint at ground level.
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.config.center_x, 0.0, self.config.center_z)
    }

    /// Tallest vertex.
    pub fn peak(&self) -> f32 {
        self.heightmap.iter().copied().fold(0.0, f32::max)
    }

    /// Vertex positions relative to [`Mountain::center`].
    pub fn local_positions(&self) -> Vec<Vec3> {
        let side = self.side();
        let step = self.config.size / MOUNTAIN_SEGMENTS as f32;
        let half = self.config.size * 0.5;
        let mut positions = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                positions.push(Vec3::new(
                    col as f32 * step - half,
                    self.heightmap[row * side + col],
                    row as f32 * step - half,
                ));
            }
        }
        positions
    }

    /// Triangle list over [`Mountain::local_positions`], two triangles per grid cell.
    pub fn indices(&self) -> Vec<u32> {
        let side = self.side() as u32;
        let mut indices = Vec::with_capacity((MOUNTAIN_SEGMENTS * MOUNTAIN_SEGMENTS * 6) as usize);
        for row in 0..MOUNTAIN_SEGMENTS {
            for col in 0..MOUNTAIN_SEGMENTS {
                let i = row * side + col;
                indices.extend_from_slice(&[i, i + side, i + 1, i + 1, i + side, i + side + 1]);
            }
        }
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CONFIG: MountainConfig = MountainConfig::new(-80.0, -100.0, 80.0, 30.0);

    #[test]
    fn heights_stay_below_max() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Mountain::generate(CONFIG, &mut rng);
        assert_eq!(m.heightmap.len(), 17 * 17);
        assert!(m.heightmap.iter().all(|&h| (0.0..30.0).contains(&h)));
        assert!(m.peak() < 30.0);
    }

    /// Same seed must produce identical heightmaps (replayability).
    #[test]
    fn mountain_deterministic_same_seed() {
        let a = Mountain::generate(CONFIG, &mut StdRng::seed_from_u64(42));
        let b = Mountain::generate(CONFIG, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.heightmap, b.heightmap);
    }

    #[test]
    fn grid_spans_footprint() {
        let m = Mountain::generate(CONFIG, &mut StdRng::seed_from_u64(1));
        let positions = m.local_positions();
        let first = positions[0];
        let last = positions[positions.len() - 1];
        assert!((first.x + 40.0).abs() < 1e-4 && (first.z + 40.0).abs() < 1e-4);
        assert!((last.x - 40.0).abs() < 1e-4 && (last.z - 40.0).abs() < 1e-4);

        let indices = m.indices();
        assert_eq!(indices.len(), 16 * 16 * 6);
        assert!(indices.iter().all(|&i| (i as usize) < positions.len()));
    }

    #[test]
    fn flat_mountain_has_zero_heights() {
        let flat = MountainConfig::new(0.0, 0.0, 10.0, 0.0);
        let m = Mountain::generate(flat, &mut StdRng::seed_from_u64(3));
        assert_eq!(m.peak(), 0.0);
    }
}
