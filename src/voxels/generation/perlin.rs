//! Perlin-noise heightmap terrain.
//!
//! Each column samples a 2D Perlin field at `(cx + x / SIZE_X, cz + z / SIZE_Z)`.
//! Sampling from the integer chunk coordinate plus the fractional column offset
//! keeps the field continuous across chunk borders.

use noise::{NoiseFn, Perlin};

use crate::error::VoxelError;
use crate::voxels::block::Block;
use crate::voxels::chunk::{ChunkCoordinate, Chunk, SIZE_X, SIZE_Z};

use super::{fill_from_height_map, HeightMap, TerrainGenerator};

/// Lowest possible terrain surface.
pub const BASE_HEIGHT: i32 = 64;
/// Span added on top of [`BASE_HEIGHT`] by the noise, so surfaces lie in `[64, 80]`.
pub const HEIGHT_AMPLITUDE: i32 = 16;

/// Deterministic heightmap generator driven by a seeded Perlin field.
pub struct PerlinNoiseGenerator {
    perlin: Perlin,
}

impl PerlinNoiseGenerator {
    pub fn new(seed: u32) -> Self {
        PerlinNoiseGenerator {
            perlin: Perlin::new(seed),
        }
    }

    /// Noise for local column `(x, z)` of `coordinate`, normalised to `[0, 1]`.
    fn sample(&self, coordinate: ChunkCoordinate, x: i32, z: i32) -> f64 {
        let position = [
            coordinate.cx as f64 + x as f64 / SIZE_X as f64,
            coordinate.cz as f64 + z as f64 / SIZE_Z as f64,
        ];
        ((self.perlin.get(position) + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    /// Surface height of local column `(x, z)` of `coordinate`.
    pub fn column_height(&self, coordinate: ChunkCoordinate, x: i32, z: i32) -> i32 {
        let noise = self.sample(coordinate, x, z);
        BASE_HEIGHT + (noise * HEIGHT_AMPLITUDE as f64).floor() as i32
    }

    /// Surface heights for every column of the chunk at `coordinate`.
    pub fn height_map(&self, coordinate: ChunkCoordinate) -> HeightMap {
        HeightMap::from_fn(|x, z| self.column_height(coordinate, x, z))
    }

    /// Surface height of the world-space column `(world_x, world_z)`.
    pub fn height_at(&self, world_x: i32, world_z: i32) -> i32 {
        let (coordinate, x, z) = ChunkCoordinate::from_world_position(world_x, world_z);
        self.column_height(coordinate, x, z)
    }
}

impl TerrainGenerator for PerlinNoiseGenerator {
    fn generate_chunk(&self, coordinate: ChunkCoordinate) -> Result<Chunk, VoxelError> {
        fill_from_height_map(coordinate, &self.height_map(coordinate), Block::SOLID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::chunk::SIZE_Y;
    use cgmath::Point3;

    #[test]
    fn same_seed_generates_identical_chunks() {
        let first = PerlinNoiseGenerator::new(1234);
        let second = PerlinNoiseGenerator::new(1234);

        for coordinate in [ChunkCoordinate::new(0, 0), ChunkCoordinate::new(-3, 7)] {
            let a = first.generate_chunk(coordinate).unwrap();
            let b = second.generate_chunk(coordinate).unwrap();
            let again = first.generate_chunk(coordinate).unwrap();

            assert_eq!(a.blocks(), b.blocks());
            assert_eq!(a.blocks(), again.blocks());
        }
    }

    #[test]
    fn origin_chunk_heights_stay_in_bounds() {
        let generator = PerlinNoiseGenerator::new(0);
        let chunk = generator.generate_chunk(ChunkCoordinate::new(0, 0)).unwrap();
        let height_map = generator.height_map(ChunkCoordinate::new(0, 0));

        for (x, z, height) in height_map.columns() {
            assert!((BASE_HEIGHT..=BASE_HEIGHT + HEIGHT_AMPLITUDE).contains(&height));

            for y in 0..SIZE_Y {
                let block = chunk.block(Point3::new(x, y, z)).unwrap();
                if y <= height {
                    assert_eq!(block, Block::SOLID, "({x}, {y}, {z}) below surface {height}");
                } else {
                    assert_eq!(block, Block::AIR, "({x}, {y}, {z}) above surface {height}");
                }
            }
        }
    }

    #[test]
    fn heights_match_across_chunk_borders() {
        let generator = PerlinNoiseGenerator::new(99);

        // The last column of chunk 0 and the first column of chunk 1 are one block apart
        // in world space, so their noise samples are 1/16 apart and must be close.
        for z in 0..SIZE_Z {
            let left = generator.height_at(SIZE_X - 1, z);
            let right = generator.height_at(SIZE_X, z);
            assert!((left - right).abs() <= 4, "z = {z}: {left} vs {right}");
        }
    }

    #[test]
    fn world_height_agrees_with_chunk_height_map() {
        let generator = PerlinNoiseGenerator::new(7);
        let coordinate = ChunkCoordinate::new(-2, 3);
        let height_map = generator.height_map(coordinate);
        let origin = coordinate.world_origin();

        for (x, z, height) in height_map.columns() {
            assert_eq!(generator.height_at(origin.x + x, origin.z + z), height);
        }
    }

    #[test]
    fn terrain_is_not_flat() {
        let generator = PerlinNoiseGenerator::new(0);
        let heights: Vec<i32> = ChunkCoordinate::new(0, 0)
            .area(2)
            .flat_map(|c| {
                let map = generator.height_map(c);
                [map.min(), map.max()]
            })
            .collect();

        let lowest = heights.iter().min().unwrap();
        let highest = heights.iter().max().unwrap();
        assert!(highest > lowest);
    }
}
