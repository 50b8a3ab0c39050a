//! Procedural dungeon generation split into coherent submodules.

pub mod model;

mod generator;
mod partition;
mod random;
mod roles;
mod rooms;

pub use generator::DungeonGenerator;
pub use model::{DungeonMap, Room, RoomKind};

use crate::error::GenerateError;

/// Smallest room edge, and therefore the smallest grid that can be generated.
pub const MIN_ROOM_SIZE: u32 = 2;

/// Generates a map with the default policy.
pub fn generate_dungeon(seed: i64, grid_size: u32) -> Result<DungeonMap, GenerateError> {
    DungeonGenerator::default().generate(seed, grid_size)
}
