//! Error types for the voxel core and its configuration layer.
//!
//! None of these are retried inside the crate. Recovery (skipping a chunk,
//! falling back to a default config) is left to the host.

use thiserror::Error;

use crate::meshing::VertexLayout;
use crate::voxels::chunk::{ChunkCoordinate, SIZE_X, SIZE_Y, SIZE_Z};

/// Failures raised by chunk access, generation and mesh assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoxelError {
    /// A local coordinate fell outside `[0, SIZE_X) x [0, SIZE_Y) x [0, SIZE_Z)`.
    #[error(
        "local coordinate ({x}, {y}, {z}) is outside the chunk bounds {sx}x{sy}x{sz}",
        sx = SIZE_X,
        sy = SIZE_Y,
        sz = SIZE_Z
    )]
    IndexOutOfRange { x: i32, y: i32, z: i32 },

    /// A generator could not produce the chunk at `coordinate`.
    #[error("failed to generate chunk {coordinate}: {reason}")]
    GenerationFailure {
        coordinate: ChunkCoordinate,
        reason: String,
    },

    /// Two meshes with different vertex layouts cannot share one buffer.
    #[error("cannot append a {found:?} mesh to a {expected:?} mesh")]
    LayoutMismatch {
        expected: VertexLayout,
        found: VertexLayout,
    },
}

/// Failures while loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("render distance {0} exceeds the supported maximum of {max}", max = crate::config::MAX_RENDER_DISTANCE)]
    RenderDistance(u32),
}
