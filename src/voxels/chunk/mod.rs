//! # Chunk Module
//!
//! Fixed-size 16x128x16 grids of blocks addressed by a [`ChunkCoordinate`].
//!
//! ## Storage
//!
//! A chunk keeps two parallel views of the same cells:
//! - `blocks`: the dense block array, one `Block` per cell
//! - `solid_array`: a bit vector (1 bit per cell) that is set exactly where the
//!   block is not air
//!
//! Both use the canonical index `x * SIZE_Z * SIZE_Y + y * SIZE_Z + z`. The bit
//! mask answers the mesh builder's neighbour queries without loading block data
//! and lets [`SolidBlockIterator`] skip air a word at a time.
//!
//! ### Performance Characteristics
//! - **Block Lookup**: O(1)
//! - **Solidity Check**: O(1), bounds included
//! - **Solid Iteration**: proportional to the number of set bits plus words scanned

use bitvec::vec::BitVec;
use cgmath::Point3;

use crate::error::VoxelError;

use super::block::Block;

mod chunk_coordinate;
pub mod chunk_iteration;

pub use chunk_coordinate::ChunkCoordinate;
pub use chunk_iteration::SolidBlockIterator;

/// Width of a chunk in blocks.
pub const SIZE_X: i32 = 16;
/// Height of a chunk in blocks. Chunks span the whole world vertically.
pub const SIZE_Y: i32 = 128;
/// Depth of a chunk in blocks.
pub const SIZE_Z: i32 = 16;
/// The total number of cells in a chunk.
pub const CHUNK_VOLUME: usize = (SIZE_X * SIZE_Y * SIZE_Z) as usize;
/// The number of vertical columns in a chunk.
pub const CHUNK_COLUMNS: usize = (SIZE_X * SIZE_Z) as usize;

/// A position inside a chunk. Each component must lie in `[0, SIZE_*)`.
pub type LocalCoordinate = Point3<i32>;

/// Represents a 16x128x16 collection of voxel blocks in the world.
///
/// A new chunk is entirely air. After construction it is only changed through
/// [`Chunk::set_block`] (or the column helpers built on it) and is never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    coordinate: ChunkCoordinate,

    /// Dense block storage, `CHUNK_VOLUME` entries.
    blocks: Vec<Block>,

    /// One bit per cell, set where `blocks` holds a non-air block.
    solid_array: BitVec,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn new(coordinate: ChunkCoordinate) -> Self {
        Chunk {
            coordinate,
            blocks: vec![Block::AIR; CHUNK_VOLUME],
            solid_array: BitVec::repeat(false, CHUNK_VOLUME),
        }
    }

    /// Creates a new chunk filled with `block` in every cell.
    pub fn filled(coordinate: ChunkCoordinate, block: Block) -> Self {
        Chunk {
            coordinate,
            blocks: vec![block; CHUNK_VOLUME],
            solid_array: BitVec::repeat(block.is_solid(), CHUNK_VOLUME),
        }
    }

    pub fn coordinate(&self) -> ChunkCoordinate {
        self.coordinate
    }

    /// World-space position of this chunk's `(0, 0, 0)` cell.
    pub fn world_origin(&self) -> Point3<i32> {
        self.coordinate.world_origin()
    }

    /// Whether every component of `coordinate` is within the chunk.
    pub fn contains(coordinate: LocalCoordinate) -> bool {
        (0..SIZE_X).contains(&coordinate.x)
            && (0..SIZE_Y).contains(&coordinate.y)
            && (0..SIZE_Z).contains(&coordinate.z)
    }

    /// Storage index of a local coordinate.
    ///
    /// # Errors
    /// [`VoxelError::IndexOutOfRange`] if any component is outside the chunk.
    pub fn index(coordinate: LocalCoordinate) -> Result<usize, VoxelError> {
        if !Self::contains(coordinate) {
            return Err(VoxelError::IndexOutOfRange {
                x: coordinate.x,
                y: coordinate.y,
                z: coordinate.z,
            });
        }

        Ok((coordinate.x * SIZE_Z * SIZE_Y + coordinate.y * SIZE_Z + coordinate.z) as usize)
    }

    /// Returns the block at the given local coordinate.
    pub fn block(&self, coordinate: LocalCoordinate) -> Result<Block, VoxelError> {
        Ok(self.blocks[Self::index(coordinate)?])
    }

    /// Overwrites the cell at `coordinate` with `block`, keeping the solidity mask in sync.
    pub fn set_block(&mut self, coordinate: LocalCoordinate, block: Block) -> Result<(), VoxelError> {
        let index = Self::index(coordinate)?;
        self.blocks[index] = block;
        self.solid_array.set(index, block.is_solid());
        Ok(())
    }

    /// Checks if the block at the specified chunk-relative coordinates is solid.
    ///
    /// Coordinates outside the chunk are never solid; neighbouring chunks are not consulted.
    pub fn is_block_solid(&self, x: i32, y: i32, z: i32) -> bool {
        match Self::index(Point3::new(x, y, z)) {
            Ok(index) => self.solid_array[index],
            Err(_) => false,
        }
    }

    /// Sets every cell of column `(x, z)` from `y = 0` up to and including `height` to `block`.
    ///
    /// A negative height leaves the column untouched.
    pub fn fill_column(&mut self, x: i32, z: i32, height: i32, block: Block) -> Result<(), VoxelError> {
        if height >= SIZE_Y {
            return Err(VoxelError::IndexOutOfRange { x, y: height, z });
        }
        Self::index(Point3::new(x, 0, z))?;

        for y in 0..=height {
            self.set_block(Point3::new(x, y, z), block)?;
        }

        Ok(())
    }

    /// The y of the highest solid cell in column `(x, z)`, or `None` for an all-air column.
    pub fn column_height(&self, x: i32, z: i32) -> Result<Option<i32>, VoxelError> {
        let base = Self::index(Point3::new(x, 0, z))?;
        let column = (0..SIZE_Y).rev().find(|&y| self.solid_array[base + (y * SIZE_Z) as usize]);
        Ok(column)
    }

    /// Number of non-air cells.
    pub fn solid_count(&self) -> usize {
        self.solid_array.count_ones()
    }

    /// All cells in storage order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterates the non-air cells with their positions (X outer, Y, Z inner).
    pub fn solid_blocks(&self) -> SolidBlockIterator<'_> {
        SolidBlockIterator::new(self)
    }
}
