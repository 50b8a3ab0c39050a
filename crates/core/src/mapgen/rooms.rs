//! Carves padded rooms out of leaf partitions and links rooms whose leaves touch.

use super::MIN_ROOM_SIZE;
use super::model::{Room, RoomKind};
use super::partition::Rect;

const ADJACENCY_TOLERANCE: u32 = 1;

/// One room per leaf, ids assigned in leaf order.
pub(super) fn carve_rooms(leaves: &[Rect], padding: u32) -> Vec<Room> {
    leaves
        .iter()
        .enumerate()
        .map(|(index, leaf)| {
            let (x, width) = carve_axis(leaf.x, leaf.width, padding);
            let (y, height) = carve_axis(leaf.y, leaf.height, padding);
            Room {
                id: format!("room_{index}"),
                x,
                y,
                width,
                height,
                kind: RoomKind::Corridor,
                connections: Vec::new(),
                visited: false,
                description: None,
            }
        })
        .collect()
}

/// `max(MIN_ROOM_SIZE, extent - 2 * padding)` cells at offset `padding`. The
/// inset only shrinks when that room would not fit inside the leaf.
fn carve_axis(start: u32, extent: u32, padding: u32) -> (u32, u32) {
    let size = extent.saturating_sub(padding.saturating_mul(2)).max(MIN_ROOM_SIZE).min(extent);
    let inset = padding.min(extent - size);
    (start + inset, size)
}

/// Records a connection between every pair of rooms whose leaf footprints lie
/// within one cell of each other on one axis and overlap on the other.
///
/// Footprints are used instead of the carved rectangles because padding on
/// both sides of a split line leaves carved neighbours `2 * padding` apart.
pub(super) fn connect_rooms(rooms: &mut [Room], footprints: &[Rect]) {
    debug_assert_eq!(rooms.len(), footprints.len());
    for i in 0..rooms.len() {
        for j in 0..rooms.len() {
            if i == j || !footprints_adjacent(footprints[i], footprints[j]) {
                continue;
            }
            let other_id = rooms[j].id.clone();
            if !rooms[i].is_connected_to(&other_id) {
                rooms[i].connections.push(other_id);
            }
        }
    }
}

fn footprints_adjacent(a: Rect, b: Rect) -> bool {
    let near = |p: u32, q: u32| p.abs_diff(q) <= ADJACENCY_TOLERANCE;
    (near(a.x, b.right()) && a.overlaps_y(b))
        || (near(a.right(), b.x) && a.overlaps_y(b))
        || (near(a.y, b.bottom()) && a.overlaps_x(b))
        || (near(a.bottom(), b.y) && a.overlaps_x(b))
}
