//! # Chunk Iteration Module
//!
//! Walks the solid cells of a chunk in storage order without touching air.
//!
//! ## Memory-Aware Iteration
//!
//! The iterator scans the chunk's solidity bit mask for the next set bit and only
//! then reads the block array, so long runs of air (everything above the terrain
//! surface) are skipped a word at a time instead of cell by cell.

use cgmath::Point3;

use crate::voxels::block::Block;

use super::{Chunk, LocalCoordinate, SIZE_Y, SIZE_Z};

/// An iterator over all non-air blocks in a chunk.
///
/// Yields cells in ascending storage index, which is X outermost, then Y, then Z
/// innermost. The mesh builder relies on this order to keep its output stable.
pub struct SolidBlockIterator<'a> {
    /// Chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Next storage index to examine
    next_index: usize,
}

impl<'a> SolidBlockIterator<'a> {
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        SolidBlockIterator {
            chunk_ref,
            next_index: 0,
        }
    }
}

impl<'a> Iterator for SolidBlockIterator<'a> {
    type Item = (LocalCoordinate, Block);

    fn next(&mut self) -> Option<Self::Item> {
        let solid_array = &self.chunk_ref.solid_array;
        if self.next_index >= solid_array.len() {
            return None;
        }

        let index = self.next_index + solid_array[self.next_index..].first_one()?;
        self.next_index = index + 1;

        Some((position_from_index(index), self.chunk_ref.blocks[index]))
    }
}

/// Inverse of the chunk index formula `x * SIZE_Z * SIZE_Y + y * SIZE_Z + z`.
pub(super) fn position_from_index(index: usize) -> LocalCoordinate {
    let index = index as i32;
    Point3::new(
        index / (SIZE_Z * SIZE_Y),
        (index / SIZE_Z) % SIZE_Y,
        index % SIZE_Z,
    )
}
