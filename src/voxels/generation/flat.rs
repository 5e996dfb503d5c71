//! Flat terrain: every column shares one surface height.

use crate::error::VoxelError;
use crate::voxels::block::Block;
use crate::voxels::chunk::{Chunk, ChunkCoordinate};

use super::{fill_from_height_map, HeightMap, TerrainGenerator};

/// Generates solid ground from `y = 0` up to and including `height` everywhere.
///
/// Useful as a predictable world for tests and tooling. A negative height produces
/// empty chunks; a height at or above the chunk top fails every generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatGenerator {
    height: i32,
    block: Block,
}

impl FlatGenerator {
    pub fn new(height: i32) -> Self {
        FlatGenerator {
            height,
            block: Block::SOLID,
        }
    }

    /// Fills the ground with `block` instead of [`Block::SOLID`].
    pub fn with_block(mut self, block: Block) -> Self {
        self.block = block;
        self
    }
}

impl TerrainGenerator for FlatGenerator {
    fn generate_chunk(&self, coordinate: ChunkCoordinate) -> Result<Chunk, VoxelError> {
        fill_from_height_map(coordinate, &HeightMap::from_fn(|_, _| self.height), self.block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::chunk::{CHUNK_COLUMNS, SIZE_Y};

    #[test]
    fn every_column_has_the_same_surface() {
        let chunk = FlatGenerator::new(3)
            .generate_chunk(ChunkCoordinate::new(8, -8))
            .unwrap();

        assert_eq!(chunk.coordinate(), ChunkCoordinate::new(8, -8));
        assert_eq!(chunk.solid_count(), CHUNK_COLUMNS * 4);
        assert_eq!(chunk.column_height(0, 0), Ok(Some(3)));
        assert_eq!(chunk.column_height(15, 15), Ok(Some(3)));
    }

    #[test]
    fn custom_block_is_used_for_the_fill() {
        let chunk = FlatGenerator::new(0)
            .with_block(Block::new(5))
            .generate_chunk(ChunkCoordinate::new(0, 0))
            .unwrap();

        assert!(chunk
            .solid_blocks()
            .all(|(position, block)| position.y == 0 && block == Block::new(5)));
    }

    #[test]
    fn negative_height_generates_air() {
        let chunk = FlatGenerator::new(-1)
            .generate_chunk(ChunkCoordinate::new(0, 0))
            .unwrap();
        assert_eq!(chunk.solid_count(), 0);
    }

    #[test]
    fn height_past_the_top_fails() {
        let result = FlatGenerator::new(SIZE_Y).generate_chunk(ChunkCoordinate::new(2, 2));
        assert!(matches!(result, Err(VoxelError::GenerationFailure { .. })));
    }
}
