//! # Chunk Coordinate Module
//!
//! Chunks span the full world height, so they are addressed by a 2D integer
//! coordinate. This is the world's cache key.

use std::fmt;

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use super::{SIZE_X, SIZE_Z};

/// The position of a chunk in chunk units (not blocks). Equality is by component.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChunkCoordinate {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoordinate {
    pub const fn new(cx: i32, cz: i32) -> Self {
        ChunkCoordinate { cx, cz }
    }

    /// Splits a world-space column into the chunk that contains it and the
    /// local `(x, z)` column inside that chunk.
    ///
    /// Uses floor division, so `-1` lands in chunk `-1` at local column `SIZE - 1`.
    pub fn from_world_position(world_x: i32, world_z: i32) -> (ChunkCoordinate, i32, i32) {
        (
            ChunkCoordinate::new(world_x.div_euclid(SIZE_X), world_z.div_euclid(SIZE_Z)),
            world_x.rem_euclid(SIZE_X),
            world_z.rem_euclid(SIZE_Z),
        )
    }

    /// World-space position of this chunk's `(0, 0, 0)` cell.
    ///
    /// Block positions only fit in `i32` for chunk coordinates within
    /// `i32::MIN / SIZE_X ..= i32::MAX / SIZE_X`. Beyond that the result wraps.
    pub fn world_origin(&self) -> Point3<i32> {
        Point3::new(self.cx.wrapping_mul(SIZE_X), 0, self.cz.wrapping_mul(SIZE_Z))
    }

    /// Every coordinate within `distance` chunks of `self` along both axes.
    ///
    /// Ordered with the X offset outermost and the Z offset innermost, which is the
    /// slot order a renderer uses when it keeps one buffer per chunk around the player.
    /// Offsets that would leave the `i32` range are skipped.
    pub fn area(&self, distance: u32) -> impl Iterator<Item = ChunkCoordinate> {
        let center = *self;
        let distance = distance.min(i32::MAX as u32) as i32;
        (-distance..=distance)
            .filter_map(move |dcx| center.cx.checked_add(dcx))
            .flat_map(move |cx| {
                (-distance..=distance)
                    .filter_map(move |dcz| center.cz.checked_add(dcz))
                    .map(move |cz| ChunkCoordinate::new(cx, cz))
            })
    }
}

impl fmt::Display for ChunkCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.cx, self.cz)
    }
}
