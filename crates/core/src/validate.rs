//! Structural checks for maps, mainly ones reloaded from caller-owned session state.

use std::collections::HashSet;

use crate::error::MapInvariantError;
use crate::mapgen::{DungeonMap, MIN_ROOM_SIZE, RoomKind};

impl DungeonMap {
    /// Returns the first broken invariant, checking rooms in order.
    pub fn validate(&self) -> Result<(), MapInvariantError> {
        if self.rooms.is_empty() {
            return Err(MapInvariantError::NoRooms);
        }

        let mut ids = HashSet::new();
        for room in &self.rooms {
            if !ids.insert(room.id.as_str()) {
                return Err(MapInvariantError::DuplicateRoomId { room_id: room.id.clone() });
            }
        }

        for (index, room) in self.rooms.iter().enumerate() {
            if room.right() > self.width || room.bottom() > self.height {
                return Err(MapInvariantError::RoomOutOfBounds { room_id: room.id.clone() });
            }
            if room.width < MIN_ROOM_SIZE || room.height < MIN_ROOM_SIZE {
                return Err(MapInvariantError::RoomTooSmall { room_id: room.id.clone() });
            }
            if let Some(other) = self.rooms[index + 1..].iter().find(|other| room.overlaps(other)) {
                return Err(MapInvariantError::RoomsOverlap {
                    first: room.id.clone(),
                    second: other.id.clone(),
                });
            }
            for target in &room.connections {
                if *target == room.id {
                    return Err(MapInvariantError::SelfConnection { room_id: room.id.clone() });
                }
                let Some(other) = self.room_by_id(target) else {
                    return Err(MapInvariantError::DanglingConnection {
                        room_id: room.id.clone(),
                        target: target.clone(),
                    });
                };
                if !other.is_connected_to(&room.id) {
                    return Err(MapInvariantError::AsymmetricConnection {
                        room_id: room.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        let entrances = self.rooms.iter().filter(|room| room.kind == RoomKind::Entrance).count();
        if entrances != 1 || self.rooms[0].kind != RoomKind::Entrance {
            return Err(MapInvariantError::EntranceMisplaced);
        }
        let bosses = self.rooms.iter().filter(|room| room.kind == RoomKind::Boss).count();
        let boss_ok = match self.rooms.last() {
            Some(last) if self.rooms.len() > 1 => bosses == 1 && last.kind == RoomKind::Boss,
            _ => bosses == 0,
        };
        if !boss_ok {
            return Err(MapInvariantError::BossMisplaced);
        }

        if self.room_by_id(&self.current_room_id).is_none() {
            return Err(MapInvariantError::UnknownCurrentRoom {
                room_id: self.current_room_id.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MapInvariantError;
    use crate::mapgen::{DungeonMap, RoomKind, generate_dungeon};

    fn generated() -> DungeonMap {
        generate_dungeon(42, 10).expect("valid grid")
    }

    #[test]
    fn generated_map_is_valid() {
        assert_eq!(generated().validate(), Ok(()));
    }

    #[test]
    fn detects_room_outside_grid() {
        let mut map = generated();
        map.rooms[3].x = 9;
        assert_eq!(
            map.validate(),
            Err(MapInvariantError::RoomOutOfBounds { room_id: "room_3".to_string() })
        );
    }

    #[test]
    fn detects_overlap() {
        let mut map = generated();
        map.rooms[1].x = 1;
        assert_eq!(
            map.validate(),
            Err(MapInvariantError::RoomsOverlap {
                first: "room_0".to_string(),
                second: "room_1".to_string()
            })
        );
    }

    #[test]
    fn detects_broken_connections() {
        let mut map = generated();
        map.rooms[0].connections.push("room_0".to_string());
        assert_eq!(
            map.validate(),
            Err(MapInvariantError::SelfConnection { room_id: "room_0".to_string() })
        );

        let mut map = generated();
        map.rooms[0].connections.push("room_77".to_string());
        assert!(matches!(map.validate(), Err(MapInvariantError::DanglingConnection { .. })));

        let mut map = generated();
        map.rooms[0].connections.push("room_7".to_string());
        assert_eq!(
            map.validate(),
            Err(MapInvariantError::AsymmetricConnection {
                room_id: "room_0".to_string(),
                target: "room_7".to_string()
            })
        );
    }

    #[test]
    fn detects_role_and_current_room_problems() {
        let mut map = generated();
        map.rooms[2].kind = RoomKind::Entrance;
        assert_eq!(map.validate(), Err(MapInvariantError::EntranceMisplaced));

        let mut map = generated();
        map.rooms[2].kind = RoomKind::Boss;
        assert_eq!(map.validate(), Err(MapInvariantError::BossMisplaced));

        let mut map = generated();
        map.current_room_id = "gone".to_string();
        assert!(matches!(map.validate(), Err(MapInvariantError::UnknownCurrentRoom { .. })));

        let mut map = generated();
        map.rooms.clear();
        assert_eq!(map.validate(), Err(MapInvariantError::NoRooms));
    }
}
