use cgmath::Point3;

use crate::voxels::block::block_side::BlockSide;

/// Represents a single unit quad on one side of a voxel.
///
/// The corners come straight from the constant face table, offset by the voxel
/// position, so every face of a given side shares one winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Minimum corner of the voxel this face belongs to, in chunk coordinates
    pub origin: Point3<i32>,
    /// Which side of the voxel this face covers
    pub side: BlockSide,
}

impl Face {
    pub fn new(origin: Point3<i32>, side: BlockSide) -> Self {
        Face { origin, side }
    }

    /// The four corners of the quad in emission order.
    pub fn corners(&self) -> [Point3<i32>; 4] {
        self.side.corners().map(|[x, y, z]| {
            Point3::new(self.origin.x + x, self.origin.y + y, self.origin.z + z)
        })
    }

    pub fn normal(&self) -> [f32; 3] {
        self.side.normal()
    }
}
