//! Generation policy knobs. `Default` is the standard map panel policy.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Deepest BSP recursion a config may request. Adjacency is a pairwise pass,
/// so 2^8 leaves keeps it to tens of thousands of comparisons.
pub const MAX_SUPPORTED_DEPTH: u32 = 8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Partitions at this depth are never split further.
    pub max_depth: u32,
    /// Margin carved off each side of a leaf partition when it becomes a room.
    pub padding: u32,
    /// Fraction of all rooms that may be promoted to a special role.
    pub special_room_ratio: f64,
    /// Hard ceiling on special-role promotions regardless of ratio.
    pub special_room_cap: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { max_depth: 4, padding: 1, special_room_ratio: 0.3, special_room_cap: 5 }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::DepthTooLarge {
                max_depth: self.max_depth,
                limit: MAX_SUPPORTED_DEPTH,
            });
        }
        if !self.special_room_ratio.is_finite() || !(0.0..=1.0).contains(&self.special_room_ratio)
        {
            return Err(ConfigError::InvalidSpecialRatio { ratio: self.special_room_ratio });
        }
        Ok(())
    }

    /// `min(floor(room_count * ratio), cap)`.
    pub fn special_room_budget(&self, room_count: usize) -> usize {
        let scaled = (room_count as f64 * self.special_room_ratio).floor() as usize;
        scaled.min(self.special_room_cap)
    }
}
