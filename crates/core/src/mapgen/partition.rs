//! Binary space partitioning of the logical grid into disjoint leaf rectangles.

use slotmap::{SlotMap, new_key_type};

use super::MIN_ROOM_SIZE;
use super::random::SeededRandom;

/// Partitions narrower or shorter than this are never split.
pub(super) const MIN_SPLIT_SIZE: u32 = 4;

new_key_type! {
    pub(super) struct PartitionId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Rect {
    pub(super) x: u32,
    pub(super) y: u32,
    pub(super) width: u32,
    pub(super) height: u32,
}

impl Rect {
    pub(super) fn right(self) -> u32 {
        self.x + self.width
    }

    pub(super) fn bottom(self) -> u32 {
        self.y + self.height
    }

    pub(super) fn overlaps_x(self, other: Self) -> bool {
        self.x < other.right() && self.right() > other.x
    }

    pub(super) fn overlaps_y(self, other: Self) -> bool {
        self.y < other.bottom() && self.bottom() > other.y
    }

    /// Top part keeps `offset` rows, bottom part the rest.
    fn split_rows(self, offset: u32) -> (Self, Self) {
        (
            Self { height: offset, ..self },
            Self { y: self.y + offset, height: self.height - offset, ..self },
        )
    }

    /// Left part keeps `offset` columns, right part the rest.
    fn split_columns(self, offset: u32) -> (Self, Self) {
        (
            Self { width: offset, ..self },
            Self { x: self.x + offset, width: self.width - offset, ..self },
        )
    }
}

#[derive(Clone, Debug)]
struct Partition {
    rect: Rect,
    children: Option<(PartitionId, PartitionId)>,
}

/// Arena-backed BSP tree. Lives only for the duration of one generation pass.
pub(super) struct PartitionTree {
    nodes: SlotMap<PartitionId, Partition>,
    root: PartitionId,
}

impl PartitionTree {
    pub(super) fn build(bounds: Rect, max_depth: u32, random: &mut SeededRandom) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Partition { rect: bounds, children: None });
        let mut tree = Self { nodes, root };
        tree.split(root, 0, max_depth, random);
        tree
    }

    fn split(&mut self, id: PartitionId, depth: u32, max_depth: u32, random: &mut SeededRandom) {
        let rect = self.nodes[id].rect;
        if depth >= max_depth || rect.width < MIN_SPLIT_SIZE || rect.height < MIN_SPLIT_SIZE {
            return;
        }

        // A preferred axis that is too small ends the split; the other axis is not tried.
        let split_rows = random.next_bool();
        let halves = if split_rows && rect.height >= MIN_SPLIT_SIZE {
            Some(rect.split_rows(split_offset(rect.height, random)))
        } else if !split_rows && rect.width >= MIN_SPLIT_SIZE {
            Some(rect.split_columns(split_offset(rect.width, random)))
        } else {
            None
        };
        let Some((first, second)) = halves else {
            return;
        };

        log::trace!("depth {depth}: split {rect:?} into {first:?} and {second:?}");

        let first_id = self.nodes.insert(Partition { rect: first, children: None });
        let second_id = self.nodes.insert(Partition { rect: second, children: None });
        self.nodes[id].children = Some((first_id, second_id));

        self.split(first_id, depth + 1, max_depth, random);
        self.split(second_id, depth + 1, max_depth, random);
    }

    /// Leaf rectangles in depth-first, first-child-first order.
    pub(super) fn leaves(&self) -> Vec<Rect> {
        let mut leaves = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            match node.children {
                Some((first, second)) => {
                    stack.push(second);
                    stack.push(first);
                }
                None => leaves.push(node.rect),
            }
        }
        leaves
    }
}

/// Half the extent with -1/0 jitter, clamped so both halves can still hold a room.
fn split_offset(extent: u32, random: &mut SeededRandom) -> u32 {
    let jittered = i64::from(extent / 2) + random.next_jitter();
    let lowest = i64::from(MIN_ROOM_SIZE);
    let highest = i64::from(extent - MIN_ROOM_SIZE);
    jittered.clamp(lowest, highest) as u32
}
