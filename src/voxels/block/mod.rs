//! # Block Module
//!
//! The smallest unit of occupancy in the world. A block is pure data: an integer id
//! where `0` means air and any other value is an opaque solid-material tag.

pub mod block_side;

/// The underlying integer type used to tag block materials.
pub type BlockId = i32;

/// Represents a single voxel cell.
///
/// # Memory Layout
/// `#[repr(C)]` with a single `i32`, so a chunk's block array can be viewed as raw
/// bytes through `bytemuck` without copying.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Block {
    block_id: BlockId,
}

impl Block {
    /// Empty space. Never produces geometry and never occludes a neighbour.
    pub const AIR: Block = Block::new(0);

    /// The fill used by the terrain generators for every cell at or below the surface.
    pub const SOLID: Block = Block::new(1);

    /// Creates a block with the given id.
    pub const fn new(block_id: BlockId) -> Self {
        Block { block_id }
    }

    pub fn block_id(&self) -> BlockId {
        self.block_id
    }

    pub fn is_air(&self) -> bool {
        self.block_id == 0
    }

    /// Any nonzero id counts as solid; materials are not interpreted further.
    pub fn is_solid(&self) -> bool {
        !self.is_air()
    }
}
