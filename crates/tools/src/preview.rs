//! Text rendering of a map with fog of war, for eyeballing generator output.

use dungeon_core::{DungeonMap, Room, RoomKind};

const EMPTY: char = ' ';
const FOG: char = '~';
const PLAYER: char = '@';

fn glyph(kind: RoomKind) -> char {
    match kind {
        RoomKind::Entrance => 'E',
        RoomKind::Corridor => '#',
        RoomKind::Treasure => 'T',
        RoomKind::Boss => 'B',
        RoomKind::Rest => 'R',
        RoomKind::Event => '?',
        RoomKind::Shop => '$',
    }
}

/// One line per grid row. Unvisited rooms render as fog unless `reveal` is set.
pub fn render(map: &DungeonMap, reveal: bool) -> String {
    let width = map.width as usize;
    let mut cells = vec![EMPTY; width * map.height as usize];

    for room in &map.rooms {
        let fill = if reveal || room.visited { glyph(room.kind) } else { FOG };
        for y in room.y..room.bottom() {
            for x in room.x..room.right() {
                cells[y as usize * width + x as usize] = fill;
            }
        }
    }
    if let Some(current) = map.current_room() {
        let (x, y) = center(current);
        cells[y as usize * width + x as usize] = PLAYER;
    }

    let mut out = String::with_capacity(cells.len() + map.height as usize);
    for row in cells.chunks(width) {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

fn center(room: &Room) -> (u32, u32) {
    (room.x + room.width / 2, room.y + room.height / 2)
}
