//! Engine configuration.
//!
//! Loaded from JSON. Every field has a default, so an empty object (or no file at
//! all) yields a Perlin world with seed 0, a render distance of 2 and normals in the
//! vertex layout.
//!
//! ```json
//! {
//!     "seed": 42,
//!     "generator": { "kind": "flat", "height": 10 },
//!     "render_distance": 3,
//!     "vertex_layout": "position"
//! }
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::meshing::{MeshBuilder, VertexLayout};
use crate::voxels::generation::{FlatGenerator, PerlinNoiseGenerator, TerrainGenerator};
use crate::voxels::world::World;

/// Largest render distance accepted from a config file.
pub const MAX_RENDER_DISTANCE: u32 = 32;

/// Which terrain generator backs the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Seeded Perlin heightmap terrain.
    #[default]
    Perlin,
    /// Constant surface height everywhere.
    Flat { height: i32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed handed to the noise generator. Negative seeds are reinterpreted bit for bit.
    pub seed: i32,
    pub generator: GeneratorKind,
    /// Chunks loaded in each direction around the centre chunk
    pub render_distance: u32,
    pub vertex_layout: VertexLayout,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            seed: 0,
            generator: GeneratorKind::default(),
            render_distance: 2,
            vertex_layout: VertexLayout::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.render_distance > MAX_RENDER_DISTANCE {
            return Err(ConfigError::RenderDistance(self.render_distance));
        }
        Ok(self)
    }

    pub fn build_generator(&self) -> Box<dyn TerrainGenerator> {
        match self.generator {
            GeneratorKind::Perlin => Box::new(PerlinNoiseGenerator::new(self.seed as u32)),
            GeneratorKind::Flat { height } => Box::new(FlatGenerator::new(height)),
        }
    }

    pub fn build_world(&self) -> World {
        World::new(self.build_generator())
    }

    pub fn mesh_builder(&self) -> MeshBuilder {
        MeshBuilder::new(self.vertex_layout)
    }
}
