//! # World Module
//!
//! This module provides the `World` struct, the append-only cache of materialized
//! chunks. It is the only place chunks are created during normal operation.
//!
//! ## Architecture
//!
//! The world uses sparse storage: only chunks that have been requested are kept in
//! memory. A miss invokes the generator synchronously and stores the result; a hit
//! returns the stored handle. Chunks are never evicted, so a coordinate is generated
//! at most once for the lifetime of the world.
//!
//! ## Editing
//!
//! Blocks are addressed in world space by [`World::block_at`] and changed by
//! [`World::set_block_at`], [`World::break_block`] and [`World::place_block`]. Each
//! resolves the containing chunk through the cache, so editing an unloaded column
//! generates it first. Edits live only as long as the world.
//!
//! ## Thread Safety
//!
//! `World` itself is not internally synchronized. A threaded host wraps it in a
//! [`SharedWorld`] and calls [`World::load_or_generate_chunk`] under the write guard,
//! which makes check-then-generate-then-store one critical section.

use std::collections::HashMap;

use cgmath::Point3;
use log::{debug, trace};

use crate::core::MtResource;
use crate::error::VoxelError;

use super::block::{block_side::BlockSide, Block};
use super::chunk::{Chunk, ChunkCoordinate, LocalCoordinate};
use super::generation::{PerlinNoiseGenerator, TerrainGenerator};

/// A world behind the single lock a multi-threaded host needs.
pub type SharedWorld = MtResource<World>;

/// Represents a voxel world composed of lazily generated chunks.
///
/// # Examples
///
/// ```
/// use voxel_world::{ChunkCoordinate, World};
///
/// let mut world = World::with_seed(0);
/// let origin = ChunkCoordinate::new(0, 0);
///
/// let chunk = world.load_or_generate_chunk(origin).unwrap();
/// let cached = world.get_loaded_chunk(origin).unwrap();
///
/// assert!(chunk.ptr_eq(&cached));
/// ```
pub struct World {
    /// A mapping from chunk coordinates to chunk handles.
    chunks: HashMap<ChunkCoordinate, MtResource<Chunk>>,
    /// Fills chunks on a cache miss.
    generator: Box<dyn TerrainGenerator>,
}

impl World {
    /// Creates a new, empty world that generates chunks with `generator`.
    pub fn new(generator: Box<dyn TerrainGenerator>) -> Self {
        World {
            chunks: HashMap::new(),
            generator,
        }
    }

    /// Creates a new, empty world backed by Perlin terrain with the given seed.
    pub fn with_seed(seed: u32) -> Self {
        World::new(Box::new(PerlinNoiseGenerator::new(seed)))
    }

    /// Retrieves the resident chunk at `coordinate`, if it has been loaded.
    ///
    /// Never generates. The returned handle shares the cached allocation.
    pub fn get_loaded_chunk(&self, coordinate: ChunkCoordinate) -> Option<MtResource<Chunk>> {
        self.chunks.get(&coordinate).cloned()
    }

    /// Returns the resident chunk at `coordinate`, generating and caching it on a miss.
    ///
    /// After a successful call every later lookup of `coordinate` returns this same
    /// chunk instance.
    ///
    /// # Errors
    /// Propagates the generator's [`VoxelError::GenerationFailure`]. Nothing is
    /// cached for `coordinate` in that case.
    pub fn load_or_generate_chunk(
        &mut self,
        coordinate: ChunkCoordinate,
    ) -> Result<MtResource<Chunk>, VoxelError> {
        if let Some(chunk) = self.chunks.get(&coordinate) {
            trace!("Chunk {} served from cache", coordinate);
            return Ok(chunk.clone());
        }

        let start = std::time::Instant::now();
        let chunk = self.generator.generate_chunk(coordinate)?;
        debug!(
            "Generated chunk {} with {} solid blocks in {:?}",
            coordinate,
            chunk.solid_count(),
            start.elapsed()
        );

        let chunk = MtResource::new(chunk);
        self.chunks.insert(coordinate, chunk.clone());
        Ok(chunk)
    }

    /// Loads or generates every chunk within `distance` of `center`.
    ///
    /// Handles come back in [`ChunkCoordinate::area`] order. Stops at the first failure;
    /// chunks generated before it stay cached.
    pub fn load_area(
        &mut self,
        center: ChunkCoordinate,
        distance: u32,
    ) -> Result<Vec<MtResource<Chunk>>, VoxelError> {
        center
            .area(distance)
            .map(|coordinate| self.load_or_generate_chunk(coordinate))
            .collect()
    }

    /// Height of the highest solid block in the world-space column `(world_x, world_z)`.
    ///
    /// Loads the containing chunk if needed. `None` means the column is all air.
    pub fn terrain_height(&mut self, world_x: i32, world_z: i32) -> Result<Option<i32>, VoxelError> {
        let (coordinate, x, z) = ChunkCoordinate::from_world_position(world_x, world_z);
        let chunk = self.load_or_generate_chunk(coordinate)?;
        let height = chunk.get().column_height(x, z)?;
        Ok(height)
    }

    /// The block at world-space `position`.
    ///
    /// # Errors
    /// [`VoxelError::IndexOutOfRange`] when `position.y` is outside `[0, SIZE_Y)`; no
    /// chunk is generated in that case. Generation failures are propagated.
    pub fn block_at(&mut self, position: Point3<i32>) -> Result<Block, VoxelError> {
        let (coordinate, local) = locate(position)?;
        let chunk = self.load_or_generate_chunk(coordinate)?;
        let block = chunk.get().block(local)?;
        Ok(block)
    }

    /// Overwrites the block at world-space `position`, generating its chunk if needed.
    ///
    /// The write happens under the chunk's exclusive guard, so it is seen by every
    /// handle to that chunk.
    ///
    /// # Errors
    /// Same as [`World::block_at`].
    pub fn set_block_at(&mut self, position: Point3<i32>, block: Block) -> Result<(), VoxelError> {
        let (coordinate, local) = locate(position)?;
        let chunk = self.load_or_generate_chunk(coordinate)?;
        chunk.get_mut().set_block(local, block)?;
        debug!(
            "Set block {} at ({}, {}, {}) in chunk {}",
            block.block_id(),
            position.x,
            position.y,
            position.z,
            coordinate
        );
        Ok(())
    }

    /// Replaces the block at `position` with air and returns what was there.
    pub fn break_block(&mut self, position: Point3<i32>) -> Result<Block, VoxelError> {
        let previous = self.block_at(position)?;
        self.set_block_at(position, Block::AIR)?;
        Ok(previous)
    }

    /// Puts `block` in the cell that touches `side` of the block at `target`.
    ///
    /// Returns the world position that was written, which may lie in a neighbouring
    /// chunk.
    pub fn place_block(
        &mut self,
        target: Point3<i32>,
        side: BlockSide,
        block: Block,
    ) -> Result<Point3<i32>, VoxelError> {
        let position = side.neighbor_position(target);
        self.set_block_at(position, block)?;
        Ok(position)
    }

    pub fn is_loaded(&self, coordinate: ChunkCoordinate) -> bool {
        self.chunks.contains_key(&coordinate)
    }

    pub fn loaded_chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// Splits a world-space block position into its chunk and the local cell in it.
fn locate(position: Point3<i32>) -> Result<(ChunkCoordinate, LocalCoordinate), VoxelError> {
    let (coordinate, x, z) = ChunkCoordinate::from_world_position(position.x, position.z);
    let local = Point3::new(x, position.y, z);
    if !Chunk::contains(local) {
        return Err(VoxelError::IndexOutOfRange {
            x,
            y: position.y,
            z,
        });
    }
    Ok((coordinate, local))
}
