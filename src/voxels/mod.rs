//! # Voxel Data Model
//!
//! Representation, generation and caching of the voxel world.
//!
//! ## Architecture
//!
//! * **Block**: a single voxel cell, air or an opaque solid id
//! * **Chunk**: a fixed-size 16x128x16 grid of blocks at a 2D chunk coordinate
//! * **Generation**: deterministic terrain generators behind the `TerrainGenerator` trait
//! * **World**: the append-only chunk cache that calls a generator on a miss
//!
//! ## Data Flow
//!
//! 1. A host asks the world for the chunk at a coordinate
//! 2. The world returns the cached chunk, or generates, stores and returns it
//! 3. The host hands the chunk to the mesh builder and uploads the result

pub mod block;
pub mod chunk;
pub mod generation;
pub mod world;
