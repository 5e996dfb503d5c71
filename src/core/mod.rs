//! # Core Module
//!
//! Shared-ownership primitives used throughout the crate.
//!
//! ## Key Components
//! - `MtResource`: Thread-safe reference-counted resource with read-write locking.
//!   Chunks leave the world as `MtResource<Chunk>` handles, and a threaded host
//!   wraps the world itself in one (`SharedWorld`).

pub mod mt_resource;

pub use mt_resource::MtResource;
