//! Caller-side movement through a generated map: the only place visit state changes
//! after generation.

use crate::error::NavigationError;
use crate::mapgen::{DungeonMap, Room};

impl DungeonMap {
    pub fn current_room(&self) -> Option<&Room> {
        self.room_by_id(&self.current_room_id)
    }

    /// Fog of war: only visited rooms are revealed.
    pub fn is_revealed(&self, room_id: &str) -> bool {
        self.room_by_id(room_id).is_some_and(|room| room.visited)
    }

    pub fn mark_visited(&mut self, room_id: &str) -> Result<(), NavigationError> {
        let room = self
            .room_by_id_mut(room_id)
            .ok_or_else(|| NavigationError::UnknownRoom { room_id: room_id.to_string() })?;
        room.visited = true;
        Ok(())
    }

    /// Moves the player into a room connected to the current one and marks it visited.
    pub fn move_to_room(&mut self, room_id: &str) -> Result<&Room, NavigationError> {
        if self.room_by_id(room_id).is_none() {
            return Err(NavigationError::UnknownRoom { room_id: room_id.to_string() });
        }
        if room_id != self.current_room_id {
            let connected =
                self.current_room().is_some_and(|current| current.is_connected_to(room_id));
            if !connected {
                return Err(NavigationError::NotConnected {
                    from: self.current_room_id.clone(),
                    to: room_id.to_string(),
                });
            }
            self.current_room_id = room_id.to_string();
        }

        self.mark_visited(room_id)?;
        log::debug!("moved to {room_id}");
        self.room_by_id(room_id)
            .ok_or_else(|| NavigationError::UnknownRoom { room_id: room_id.to_string() })
    }

    pub fn visited_count(&self) -> usize {
        self.rooms.iter().filter(|room| room.visited).count()
    }
}
