//! # Terrain Generation
//!
//! Generators turn a [`ChunkCoordinate`] into a fully populated [`Chunk`]. The
//! world only sees the [`TerrainGenerator`] capability, so alternative worlds
//! (flat test worlds, fixtures) plug in without touching the cache.
//!
//! ## Heightmap Generators
//!
//! Both bundled generators work column by column: they compute one surface height
//! per `(x, z)` column and then fill `0..=height` with a solid block via
//! [`fill_from_height_map`]. There are no caves or overhangs.

use crate::error::VoxelError;
use crate::voxels::block::Block;
use crate::voxels::chunk::{Chunk, ChunkCoordinate, CHUNK_COLUMNS, SIZE_X, SIZE_Y, SIZE_Z};

mod flat;
mod perlin;

pub use flat::FlatGenerator;
pub use perlin::{PerlinNoiseGenerator, BASE_HEIGHT, HEIGHT_AMPLITUDE};

/// Produces the contents of a chunk from its coordinate.
///
/// Implementations must be deterministic: the same generator state and coordinate
/// always yield an identical block grid. The world relies on this to treat a
/// generated chunk as the one true chunk for that coordinate.
pub trait TerrainGenerator: Send + Sync {
    /// Generates the chunk at `coordinate`.
    ///
    /// # Errors
    /// [`VoxelError::GenerationFailure`] when the generator cannot produce a valid chunk.
    fn generate_chunk(&self, coordinate: ChunkCoordinate) -> Result<Chunk, VoxelError>;
}

/// Surface heights for every column of one chunk, indexed `x * SIZE_Z + z`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightMap {
    heights: Vec<i32>,
}

impl HeightMap {
    /// Builds a heightmap by evaluating `height` for every local column.
    pub fn from_fn(mut height: impl FnMut(i32, i32) -> i32) -> Self {
        let mut heights = Vec::with_capacity(CHUNK_COLUMNS);
        for x in 0..SIZE_X {
            for z in 0..SIZE_Z {
                heights.push(height(x, z));
            }
        }
        HeightMap { heights }
    }

    /// Height of local column `(x, z)`, or `None` outside the chunk footprint.
    pub fn get(&self, x: i32, z: i32) -> Option<i32> {
        if !(0..SIZE_X).contains(&x) || !(0..SIZE_Z).contains(&z) {
            return None;
        }
        self.heights.get((x * SIZE_Z + z) as usize).copied()
    }

    /// `(x, z, height)` for every column in storage order.
    pub fn columns(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        self.heights
            .iter()
            .enumerate()
            .map(|(i, &height)| (i as i32 / SIZE_Z, i as i32 % SIZE_Z, height))
    }

    pub fn min(&self) -> i32 {
        self.heights.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> i32 {
        self.heights.iter().copied().max().unwrap_or(0)
    }
}

/// Creates the chunk at `coordinate` with every column filled from `y = 0` up to and
/// including its height in `height_map`.
///
/// The whole heightmap is validated before any cell is written, so a failure never
/// yields a partly filled chunk.
///
/// # Errors
/// [`VoxelError::GenerationFailure`] if any column height reaches past the top of the chunk.
pub fn fill_from_height_map(
    coordinate: ChunkCoordinate,
    height_map: &HeightMap,
    block: Block,
) -> Result<Chunk, VoxelError> {
    if let Some((x, z, height)) = height_map.columns().find(|&(_, _, h)| h >= SIZE_Y) {
        return Err(VoxelError::GenerationFailure {
            coordinate,
            reason: format!(
                "column ({x}, {z}) has height {height}, chunk height is {SIZE_Y}"
            ),
        });
    }

    let mut chunk = Chunk::new(coordinate);
    for (x, z, height) in height_map.columns() {
        chunk
            .fill_column(x, z, height, block)
            .map_err(|error| VoxelError::GenerationFailure {
                coordinate,
                reason: error.to_string(),
            })?;
    }

    Ok(chunk)
}
