//! Public data models for generated dungeon maps and their rooms.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Entrance,
    Corridor,
    Treasure,
    Boss,
    Rest,
    Event,
    Shop,
}

impl RoomKind {
    /// Roles an interior room can be promoted to, in draw order.
    pub const SPECIAL: [RoomKind; 4] =
        [RoomKind::Treasure, RoomKind::Rest, RoomKind::Shop, RoomKind::Event];

    pub fn is_special(self) -> bool {
        Self::SPECIAL.contains(&self)
    }

    fn code(self) -> u8 {
        match self {
            Self::Entrance => 0,
            Self::Corridor => 1,
            Self::Treasure => 2,
            Self::Boss => 3,
            Self::Rest => 4,
            Self::Event => 5,
            Self::Shop => 6,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    pub connections: Vec<String>,
    pub visited: bool,
    /// Narrative text attached by the caller; generation never sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Room {
    // Saturates on overflow, which `validate` then reports as out of bounds.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_connected_to(&self, room_id: &str) -> bool {
        self.connections.iter().any(|id| id == room_id)
    }

    /// True when the two rectangles share interior area.
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DungeonMap {
    pub width: u32,
    pub height: u32,
    pub rooms: Vec<Room>,
    pub current_room_id: String,
    pub seed: i64,
}

impl DungeonMap {
    pub fn room_by_id(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }

    pub(crate) fn room_by_id_mut(&mut self, room_id: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id == room_id)
    }

    /// Rooms reachable in one step from `room_id`, in connection order.
    /// Unknown ids on either side are skipped rather than reported.
    pub fn connected_rooms(&self, room_id: &str) -> Vec<&Room> {
        let Some(room) = self.room_by_id(room_id) else {
            return Vec::new();
        };
        room.connections.iter().filter_map(|id| self.room_by_id(id)).collect()
    }

    pub fn entrance(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.kind == RoomKind::Entrance)
    }

    pub fn boss(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.kind == RoomKind::Boss)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.width.to_le_bytes());
        bytes.extend(self.height.to_le_bytes());
        bytes.extend(self.seed.to_le_bytes());
        push_str(&mut bytes, &self.current_room_id);

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            push_str(&mut bytes, &room.id);
            bytes.extend(room.x.to_le_bytes());
            bytes.extend(room.y.to_le_bytes());
            bytes.extend(room.width.to_le_bytes());
            bytes.extend(room.height.to_le_bytes());
            bytes.push(room.kind.code());
            bytes.push(u8::from(room.visited));
            bytes.extend((room.connections.len() as u32).to_le_bytes());
            for connection in &room.connections {
                push_str(&mut bytes, connection);
            }
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn push_str(bytes: &mut Vec<u8>, value: &str) {
    bytes.extend((value.len() as u32).to_le_bytes());
    bytes.extend(value.as_bytes());
}
