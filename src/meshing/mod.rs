//! Mesh generation for voxel rendering.
//!
//! This module converts chunk occupancy into GPU-friendly vertex and index buffers.
//! It performs no graphics API calls; uploading the buffers is the host's job.
//!
//! # Architecture
//! - [`MeshBuilder`]: per-voxel face culling over a chunk
//! - [`Face`]: one unit quad on one side of a voxel
//! - [`Mesh`]: the resulting interleaved vertex buffer and triangle index buffer
//!
//! # Performance Considerations
//! - One pass over the solid cells of a chunk with constant work per neighbour
//! - Output size follows the exposed surface area, not the chunk volume
//! - Air runs are skipped through the chunk's solidity bit mask

mod builder;
mod face;
mod mesh;

pub use builder::{visible_sides, MeshBuilder};
pub use face::Face;
pub use mesh::{Mesh, VertexLayout, QUAD_INDEX_PATTERN, VERTICES_PER_FACE};
