//! # Block Side Module
//!
//! The six axis-aligned faces of a voxel, together with the constant tables that
//! describe each face's quad. The tables are the single source of winding order:
//! every emitted face copies its corners from [`FACE_CORNERS`] and never derives
//! them per voxel.

use cgmath::{Point3, Vector3};

/// Represents the six possible faces of a voxel block.
///
/// The discriminant indexes [`FACE_CORNERS`], [`FACE_NORMALS`] and
/// [`FACE_NEIGHBOR_OFFSETS`], and it is also the order in which a voxel's
/// visible faces are emitted.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The face looking down the negative X axis
    XNEG = 0,

    /// The face looking down the positive X axis
    XPOS = 1,

    /// The bottom face (negative Y)
    YNEG = 2,

    /// The top face (positive Y)
    YPOS = 3,

    /// The face looking down the negative Z axis
    ZNEG = 4,

    /// The face looking down the positive Z axis
    ZPOS = 5,
}

/// Corner offsets of the unit quad for each side, relative to the voxel's minimum corner.
///
/// Read in order, the corners run counter-clockwise when the face is viewed from
/// outside the voxel, so triangles `(0, 1, 2)` and `(2, 3, 0)` are front-facing.
pub const FACE_CORNERS: [[[i32; 3]; 4]; 6] = [
    [[0, 1, 1], [0, 1, 0], [0, 0, 0], [0, 0, 1]], // XNEG
    [[1, 0, 1], [1, 0, 0], [1, 1, 0], [1, 1, 1]], // XPOS
    [[0, 0, 1], [0, 0, 0], [1, 0, 0], [1, 0, 1]], // YNEG
    [[1, 1, 1], [1, 1, 0], [0, 1, 0], [0, 1, 1]], // YPOS
    [[0, 0, 0], [0, 1, 0], [1, 1, 0], [1, 0, 0]], // ZNEG
    [[0, 1, 1], [0, 0, 1], [1, 0, 1], [1, 1, 1]], // ZPOS
];

/// Per-face constant normals, in the same order as [`FACE_CORNERS`].
pub const FACE_NORMALS: [[f32; 3]; 6] = [
    [-1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, -1.0],
    [0.0, 0.0, 1.0],
];

/// Step from a voxel to the neighbour that can occlude each face.
pub const FACE_NEIGHBOR_OFFSETS: [[i32; 3]; 6] = [
    [-1, 0, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
];

impl BlockSide {
    /// Returns all six block faces in emission order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::XNEG,
            BlockSide::XPOS,
            BlockSide::YNEG,
            BlockSide::YPOS,
            BlockSide::ZNEG,
            BlockSide::ZPOS,
        ]
    }

    /// The four corner offsets of this face's quad.
    pub fn corners(self) -> [[i32; 3]; 4] {
        FACE_CORNERS[self as usize]
    }

    pub fn normal(self) -> [f32; 3] {
        FACE_NORMALS[self as usize]
    }

    /// Offset to the neighbouring cell this face touches.
    pub fn neighbor_offset(self) -> Vector3<i32> {
        let [x, y, z] = FACE_NEIGHBOR_OFFSETS[self as usize];
        Vector3::new(x, y, z)
    }

    /// The cell that shares this face with the cell at `position`.
    ///
    /// Works in any integer space, chunk-local or world. Placing a block against a
    /// face puts it at this position.
    pub fn neighbor_position(self, position: Point3<i32>) -> Point3<i32> {
        position + self.neighbor_offset()
    }

    /// The side whose constant normal equals `normal`, if any.
    pub fn from_normal(normal: [f32; 3]) -> Option<BlockSide> {
        BlockSide::all()
            .into_iter()
            .find(|side| side.normal() == normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    fn corner(side: BlockSide, i: usize) -> Vector3<f32> {
        let [x, y, z] = side.corners()[i];
        Vector3::new(x as f32, y as f32, z as f32)
    }

    #[test]
    fn both_triangles_face_along_the_normal() {
        for side in BlockSide::all() {
            let [nx, ny, nz] = side.normal();
            let normal = Vector3::new(nx, ny, nz);

            for (a, b, c) in [(0, 1, 2), (2, 3, 0)] {
                let edge_one = corner(side, b) - corner(side, a);
                let edge_two = corner(side, c) - corner(side, a);
                let facing = edge_one.cross(edge_two);
                assert_eq!(facing, normal, "triangle ({a}, {b}, {c}) of {side:?}");
            }
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for side in BlockSide::all() {
            let offset = side.neighbor_offset();
            let axis = (0..3).find(|&i| offset[i] != 0).unwrap();
            let plane = if offset[axis] > 0 { 1 } else { 0 };

            for c in side.corners() {
                assert_eq!(c[axis], plane, "{side:?}");
            }
        }
    }

    #[test]
    fn each_quad_covers_a_unit_square() {
        for side in BlockSide::all() {
            let diagonal = corner(side, 2) - corner(side, 0);
            assert_eq!(diagonal.magnitude2(), 2.0, "{side:?}");
            let other_diagonal = corner(side, 3) - corner(side, 1);
            assert_eq!(other_diagonal.magnitude2(), 2.0, "{side:?}");
        }
    }

    #[test]
    fn normals_agree_with_neighbor_offsets() {
        for side in BlockSide::all() {
            let offset = side.neighbor_offset();
            let normal = side.normal();
            for axis in 0..3 {
                assert_eq!(offset[axis] as f32, normal[axis]);
            }
            assert_eq!(BlockSide::from_normal(normal), Some(side));
        }
        assert_eq!(BlockSide::from_normal([1.0, 1.0, 0.0]), None);
    }

    #[test]
    fn neighbor_position_steps_one_cell_across_the_face() {
        let origin = Point3::new(0, 64, -1);

        assert_eq!(BlockSide::XNEG.neighbor_position(origin), Point3::new(-1, 64, -1));
        assert_eq!(BlockSide::XPOS.neighbor_position(origin), Point3::new(1, 64, -1));
        assert_eq!(BlockSide::YNEG.neighbor_position(origin), Point3::new(0, 63, -1));
        assert_eq!(BlockSide::YPOS.neighbor_position(origin), Point3::new(0, 65, -1));
        assert_eq!(BlockSide::ZNEG.neighbor_position(origin), Point3::new(0, 64, -2));
        assert_eq!(BlockSide::ZPOS.neighbor_position(origin), Point3::new(0, 64, 0));
    }
}
