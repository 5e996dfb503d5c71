#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! The data core of a block-based voxel engine: chunked block storage, a lazily
//! populated world cache, deterministic Perlin terrain and face-culled meshing.
//!
//! The crate does no rendering. It hands a host flat vertex and index buffers in a
//! fixed layout, and the host owns windowing, cameras and GPU upload.
//!
//! ## Key Modules
//!
//! * `voxels` - blocks, chunks, terrain generators and the [`World`] cache
//! * `meshing` - [`MeshBuilder`] and the [`Mesh`] buffers it produces
//! * `config` - JSON configuration for a host
//! * `core` - the shared-ownership handle used for chunks and worlds
//!
//! ## Usage
//!
//! ```rust
//! use voxel_world::{ChunkCoordinate, MeshBuilder, VertexLayout, World};
//!
//! let mut world = World::with_seed(0);
//! let chunk = world.load_or_generate_chunk(ChunkCoordinate::new(0, 0)).unwrap();
//!
//! let mesh = MeshBuilder::new(VertexLayout::PositionNormal).build(&chunk.get());
//! assert!(!mesh.is_empty());
//! assert_eq!(mesh.indices.len() % 6, 0);
//! ```
//!
//! ## Performance Considerations
//!
//! * Chunks are generated once per coordinate and never evicted
//! * Solid cells are tracked in a bit mask so meshing skips air quickly
//! * Meshing is linear in the number of solid cells

use std::error::Error;

use log::info;

mod config;
mod core;
mod error;
mod meshing;
mod voxels;

pub use crate::config::{EngineConfig, GeneratorKind, MAX_RENDER_DISTANCE};
pub use crate::core::MtResource;
pub use crate::error::{ConfigError, VoxelError};
pub use crate::meshing::{
    visible_sides, Face, Mesh, MeshBuilder, VertexLayout, QUAD_INDEX_PATTERN, VERTICES_PER_FACE,
};
pub use crate::voxels::block::{block_side::BlockSide, Block, BlockId};
pub use crate::voxels::chunk::{
    Chunk, ChunkCoordinate, LocalCoordinate, SolidBlockIterator, CHUNK_COLUMNS, CHUNK_VOLUME,
    SIZE_X, SIZE_Y, SIZE_Z,
};
pub use crate::voxels::generation::{
    fill_from_height_map, FlatGenerator, HeightMap, PerlinNoiseGenerator, TerrainGenerator,
    BASE_HEIGHT, HEIGHT_AMPLITUDE,
};
pub use crate::voxels::world::{SharedWorld, World};

/// Runs the headless host: loads the configuration, generates the area around the
/// origin chunk and meshes every chunk in it, logging what was produced.
///
/// `config_path` names a JSON file read by [`EngineConfig::from_path`]; without one
/// the defaults are used.
///
/// # Errors
/// Returns configuration, generation and mesh assembly failures.
pub fn run(config_path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let mut log_builder = env_logger::Builder::new();
    let initialized = log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init();

    // A second run in the same process keeps the first logger.
    if initialized.is_ok() {
        info!("Logger initialized");
    }

    let config = match config_path {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    info!(
        "Using {:?} terrain, seed {}, render distance {}",
        config.generator, config.seed, config.render_distance
    );

    let world: SharedWorld = MtResource::new(config.build_world());
    let center = ChunkCoordinate::new(0, 0);

    let chunks = world.get_mut().load_area(center, config.render_distance)?;
    info!(
        "Loaded {} chunks around {}",
        world.get().loaded_chunk_count(),
        center
    );

    let builder = config.mesh_builder();
    let mut meshes = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let chunk = chunk.get();
        let mesh = builder.build(&chunk);
        info!(
            "Chunk {}: {} faces, {} vertices, {} indices",
            chunk.coordinate(),
            mesh.face_count(),
            mesh.vertex_count,
            mesh.indices.len()
        );
        meshes.push((chunk.coordinate(), mesh));
    }

    let combined = builder.combine(meshes, center)?;
    info!(
        "Area mesh: {} vertices, {} bytes of vertex data",
        combined.vertex_count,
        combined.vertex_bytes().len()
    );

    let height = world.get_mut().terrain_height(0, 0)?;
    match height {
        Some(height) => info!("Surface at world column (0, 0) is y = {}", height),
        None => info!("World column (0, 0) is empty"),
    }

    Ok(())
}
