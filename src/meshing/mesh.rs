//! Mesh data structures for voxel rendering.
//!
//! A [`Mesh`] is a pair of flat buffers ready for upload: interleaved `f32` vertex
//! data and `u32` triangle indices. The vertex layout is part of the host contract:
//! position `[x, y, z]`, optionally followed by the face normal `[nx, ny, nz]`.

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::VoxelError;

use super::face::Face;

/// Index pattern for one quad, relative to its first vertex `a`:
/// triangles `(a, a+1, a+2)` and `(a+2, a+3, a)` sharing the diagonal `(a, a+2)`.
pub const QUAD_INDEX_PATTERN: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Vertices emitted per face.
pub const VERTICES_PER_FACE: u32 = 4;

/// Which attributes each vertex carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexLayout {
    /// `[x, y, z]`
    Position,
    /// `[x, y, z, nx, ny, nz]`
    #[default]
    PositionNormal,
}

impl VertexLayout {
    pub fn floats_per_vertex(self) -> usize {
        match self {
            VertexLayout::Position => 3,
            VertexLayout::PositionNormal => 6,
        }
    }

    /// Byte distance between consecutive vertices in the vertex buffer.
    pub fn stride_bytes(self) -> usize {
        self.floats_per_vertex() * std::mem::size_of::<f32>()
    }

    pub fn has_normals(self) -> bool {
        self == VertexLayout::PositionNormal
    }
}

/// Geometry for one or more chunks.
///
/// Indices are relative to this mesh's own vertex buffer and start at `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Interleaved vertex data, `layout.floats_per_vertex()` floats per vertex
    pub vertices: Vec<f32>,
    /// Triangle list indices, six per face
    pub indices: Vec<u32>,
    /// Number of vertices in `vertices`
    pub vertex_count: u32,
    layout: VertexLayout,
}

impl Mesh {
    /// Creates a new, empty mesh.
    pub fn new(layout: VertexLayout) -> Self {
        Mesh {
            vertices: Vec::new(),
            indices: Vec::new(),
            vertex_count: 0,
            layout,
        }
    }

    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / QUAD_INDEX_PATTERN.len()
    }

    /// Appends the four vertices and six indices of `face`.
    pub fn push_face(&mut self, face: &Face) {
        let base = self.vertex_count;
        let normal = face.normal();

        for corner in face.corners() {
            self.vertices
                .extend_from_slice(&[corner.x as f32, corner.y as f32, corner.z as f32]);
            if self.layout.has_normals() {
                self.vertices.extend_from_slice(&normal);
            }
        }
        self.vertex_count += VERTICES_PER_FACE;

        self.indices
            .extend(QUAD_INDEX_PATTERN.iter().map(|offset| base + offset));
    }

    /// Appends `other` to this mesh, shifting its indices by the current vertex count.
    ///
    /// # Errors
    /// [`VoxelError::LayoutMismatch`] if the two meshes interleave different attributes.
    pub fn append(&mut self, other: Mesh) -> Result<(), VoxelError> {
        if other.layout != self.layout {
            return Err(VoxelError::LayoutMismatch {
                expected: self.layout,
                found: other.layout,
            });
        }

        let offset = self.vertex_count;
        self.vertices.extend(other.vertices);
        self.indices
            .extend(other.indices.into_iter().map(|index| index + offset));
        self.vertex_count += other.vertex_count;
        Ok(())
    }

    /// Moves every vertex position by `offset`. Normals are left untouched.
    pub fn translate(&mut self, offset: Vector3<f32>) {
        let stride = self.layout.floats_per_vertex();
        for vertex in self.vertices.chunks_exact_mut(stride) {
            vertex[0] += offset.x;
            vertex[1] += offset.y;
            vertex[2] += offset.z;
        }
    }

    /// Position of vertex `index`.
    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        let start = index * self.layout.floats_per_vertex();
        let slice = self.vertices.get(start..start + 3)?;
        Some([slice[0], slice[1], slice[2]])
    }

    /// Normal of vertex `index`, or `None` for position-only meshes.
    pub fn normal(&self, index: usize) -> Option<[f32; 3]> {
        if !self.layout.has_normals() {
            return None;
        }
        let start = index * self.layout.floats_per_vertex() + 3;
        let slice = self.vertices.get(start..start + 3)?;
        Some([slice[0], slice[1], slice[2]])
    }

    /// The vertex buffer as raw bytes, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index buffer as raw bytes, ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Mesh::new(VertexLayout::default())
    }
}
