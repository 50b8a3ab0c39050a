//! Error types for generation, configuration, navigation, and map validation.

use std::error::Error;
use std::fmt;

/// Describes why a [`GeneratorConfig`](crate::GeneratorConfig) was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    DepthTooLarge { max_depth: u32, limit: u32 },
    InvalidSpecialRatio { ratio: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthTooLarge { max_depth, limit } => {
                write!(f, "max_depth {max_depth} exceeds the supported limit of {limit}")
            }
            Self::InvalidSpecialRatio { ratio } => {
                write!(f, "special_room_ratio {ratio} must be a finite value in [0, 1]")
            }
        }
    }
}

impl Error for ConfigError {}

/// Describes why a dungeon could not be generated.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateError {
    /// The grid cannot hold a single 2x2 room.
    GridTooSmall { grid_size: u32, minimum: u32 },
    InvalidConfig(ConfigError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { grid_size, minimum } => {
                write!(f, "grid size {grid_size} is below the minimum of {minimum}")
            }
            Self::InvalidConfig(e) => write!(f, "invalid generator config: {e}"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::GridTooSmall { .. } => None,
        }
    }
}

impl From<ConfigError> for GenerateError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfig(error)
    }
}

/// Rejected player movement or visit bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationError {
    UnknownRoom { room_id: String },
    NotConnected { from: String, to: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRoom { room_id } => write!(f, "no room with id '{room_id}'"),
            Self::NotConnected { from, to } => {
                write!(f, "room '{to}' is not connected to current room '{from}'")
            }
        }
    }
}

impl Error for NavigationError {}

/// First broken invariant found while checking a map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapInvariantError {
    NoRooms,
    DuplicateRoomId { room_id: String },
    RoomOutOfBounds { room_id: String },
    RoomTooSmall { room_id: String },
    RoomsOverlap { first: String, second: String },
    SelfConnection { room_id: String },
    DanglingConnection { room_id: String, target: String },
    AsymmetricConnection { room_id: String, target: String },
    EntranceMisplaced,
    BossMisplaced,
    UnknownCurrentRoom { room_id: String },
}

impl fmt::Display for MapInvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRooms => write!(f, "map has no rooms"),
            Self::DuplicateRoomId { room_id } => write!(f, "room id '{room_id}' appears twice"),
            Self::RoomOutOfBounds { room_id } => {
                write!(f, "room '{room_id}' extends outside the grid")
            }
            Self::RoomTooSmall { room_id } => write!(f, "room '{room_id}' is smaller than 2x2"),
            Self::RoomsOverlap { first, second } => {
                write!(f, "rooms '{first}' and '{second}' overlap")
            }
            Self::SelfConnection { room_id } => write!(f, "room '{room_id}' connects to itself"),
            Self::DanglingConnection { room_id, target } => {
                write!(f, "room '{room_id}' connects to missing room '{target}'")
            }
            Self::AsymmetricConnection { room_id, target } => {
                write!(f, "room '{room_id}' connects to '{target}' but not the reverse")
            }
            Self::EntranceMisplaced => {
                write!(f, "exactly one entrance is required and it must be the first room")
            }
            Self::BossMisplaced => {
                write!(f, "exactly one boss is required and it must be the last room")
            }
            Self::UnknownCurrentRoom { room_id } => {
                write!(f, "current room '{room_id}' does not exist")
            }
        }
    }
}

impl Error for MapInvariantError {}
