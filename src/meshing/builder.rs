//! Face-culling mesh construction.
//!
//! For every solid voxel, each of the six faces is emitted if and only if the
//! neighbouring cell on that side is air or lies outside the chunk. Neighbouring
//! chunks are never consulted, so faces on a chunk's side walls are always
//! emitted even when the adjacent chunk would hide them.

use std::time::Instant;

use cgmath::Vector3;
use log::debug;

use crate::error::VoxelError;
use crate::voxels::{
    block::block_side::BlockSide,
    chunk::{Chunk, ChunkCoordinate, LocalCoordinate},
};

use super::{face::Face, mesh::Mesh, mesh::VertexLayout};

/// Turns chunk occupancy into renderable geometry.
///
/// The builder holds no state beyond the requested vertex layout; every call
/// produces a fresh [`Mesh`] and nothing is cached between calls.
///
/// # Examples
///
/// ```
/// use voxel_world::{Block, Chunk, ChunkCoordinate, MeshBuilder, VertexLayout};
/// use cgmath::Point3;
///
/// let mut chunk = Chunk::new(ChunkCoordinate::new(0, 0));
/// chunk.set_block(Point3::new(0, 0, 0), Block::SOLID).unwrap();
///
/// let mesh = MeshBuilder::new(VertexLayout::Position).build(&chunk);
/// assert_eq!(mesh.vertex_count, 24);
/// assert_eq!(mesh.indices.len(), 36);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshBuilder {
    layout: VertexLayout,
}

impl MeshBuilder {
    pub fn new(layout: VertexLayout) -> Self {
        MeshBuilder { layout }
    }

    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    /// Builds the mesh of every exposed face in `chunk`, in chunk-local coordinates.
    ///
    /// Voxels are visited X outermost, then Y, then Z, and each voxel's faces are
    /// emitted in [`BlockSide::all`] order. A chunk with no exposed faces yields an
    /// empty mesh.
    pub fn build(&self, chunk: &Chunk) -> Mesh {
        let start = Instant::now();
        let mut mesh = Mesh::new(self.layout);

        for (position, _) in chunk.solid_blocks() {
            let visible = visible_sides(chunk, position);
            for side in BlockSide::all() {
                if visible[side as usize] {
                    mesh.push_face(&Face::new(position, side));
                }
            }
        }

        debug!(
            "Meshed chunk {}: {} faces, {} vertices in {:?}",
            chunk.coordinate(),
            mesh.face_count(),
            mesh.vertex_count,
            start.elapsed()
        );

        mesh
    }

    /// Builds every chunk and concatenates them into one mesh placed relative to `origin`.
    pub fn build_combined<'a>(
        &self,
        chunks: impl IntoIterator<Item = &'a Chunk>,
        origin: ChunkCoordinate,
    ) -> Result<Mesh, VoxelError> {
        self.combine(
            chunks
                .into_iter()
                .map(|chunk| (chunk.coordinate(), self.build(chunk))),
            origin,
        )
    }

    /// Concatenates already built chunk meshes into one mesh placed relative to `origin`.
    ///
    /// Each mesh is shifted by the world offset of its chunk from `origin`'s chunk,
    /// and its indices by the running vertex count.
    ///
    /// # Errors
    /// [`VoxelError::LayoutMismatch`] if a mesh was built with a different layout.
    pub fn combine(
        &self,
        meshes: impl IntoIterator<Item = (ChunkCoordinate, Mesh)>,
        origin: ChunkCoordinate,
    ) -> Result<Mesh, VoxelError> {
        let origin = origin.world_origin();
        let mut combined = Mesh::new(self.layout);

        for (coordinate, mut mesh) in meshes {
            let chunk_origin = coordinate.world_origin();
            mesh.translate(Vector3::new(
                chunk_origin.x.wrapping_sub(origin.x) as f32,
                0.0,
                chunk_origin.z.wrapping_sub(origin.z) as f32,
            ));
            combined.append(mesh)?;
        }

        Ok(combined)
    }
}

/// Determines which faces of the voxel at `position` are adjacent to non-solid cells.
///
/// # Returns
/// An array of 6 booleans indexed by `BlockSide`, `true` where the face must be drawn.
pub fn visible_sides(chunk: &Chunk, position: LocalCoordinate) -> [bool; 6] {
    BlockSide::all().map(|side| {
        let neighbor = side.neighbor_position(position);
        !chunk.is_block_solid(neighbor.x, neighbor.y, neighbor.z)
    })
}
