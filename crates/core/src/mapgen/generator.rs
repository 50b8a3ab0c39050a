//! High-level dungeon generation orchestration: partition, carve, connect, assign roles.

use crate::config::GeneratorConfig;
use crate::error::GenerateError;

use super::MIN_ROOM_SIZE;
use super::model::DungeonMap;
use super::partition::{PartitionTree, Rect};
use super::random::SeededRandom;
use super::roles::assign_roles;
use super::rooms::{carve_rooms, connect_rooms};

#[derive(Clone, Debug, Default)]
pub struct DungeonGenerator {
    config: GeneratorConfig,
}

impl DungeonGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the map for `seed` on a `grid_size` x `grid_size` grid.
    ///
    /// The same seed, grid size, and config always yield an identical map.
    pub fn generate(&self, seed: i64, grid_size: u32) -> Result<DungeonMap, GenerateError> {
        self.config.validate()?;
        if grid_size < MIN_ROOM_SIZE {
            return Err(GenerateError::GridTooSmall { grid_size, minimum: MIN_ROOM_SIZE });
        }

        let mut random = SeededRandom::new(seed);
        let bounds = Rect { x: 0, y: 0, width: grid_size, height: grid_size };
        let leaves = PartitionTree::build(bounds, self.config.max_depth, &mut random).leaves();

        let mut rooms = carve_rooms(&leaves, self.config.padding);
        connect_rooms(&mut rooms, &leaves);
        let special_budget = self.config.special_room_budget(rooms.len());
        assign_roles(&mut rooms, special_budget, &mut random);

        let current_room_id = rooms.first().map(|room| room.id.clone()).unwrap_or_default();
        log::debug!(
            "generated dungeon seed={seed} grid={grid_size} rooms={} special_budget={special_budget}",
            rooms.len()
        );

        Ok(DungeonMap { width: grid_size, height: grid_size, rooms, current_room_id, seed })
    }
}
