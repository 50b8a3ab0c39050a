//! Deterministic BSP dungeon generation for the adventure map panel.
//!
//! [`generate_dungeon`] turns a seed and grid size into a [`DungeonMap`]. After
//! that the caller owns the map and only changes which rooms are visited and
//! which room is current, through [`DungeonMap::move_to_room`] and
//! [`DungeonMap::mark_visited`].

pub mod config;
pub mod error;
pub mod mapgen;
mod navigation;
mod validate;

pub use config::GeneratorConfig;
pub use error::{ConfigError, GenerateError, MapInvariantError, NavigationError};
pub use mapgen::{DungeonGenerator, DungeonMap, MIN_ROOM_SIZE, Room, RoomKind, generate_dungeon};
