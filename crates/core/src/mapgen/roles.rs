//! Overlays entrance, boss, and special roles onto freshly carved rooms.

use super::model::{Room, RoomKind};
use super::random::SeededRandom;

/// First room becomes the (visited) entrance, the last one the boss, and up to
/// `special_budget` draws promote interior rooms to a special role.
///
/// Draws are independent, so the same interior room may be picked twice and
/// fewer than `special_budget` rooms can end up special.
pub(super) fn assign_roles(rooms: &mut [Room], special_budget: usize, random: &mut SeededRandom) {
    let Some((entrance, rest)) = rooms.split_first_mut() else {
        return;
    };
    entrance.kind = RoomKind::Entrance;
    entrance.visited = true;

    let Some((boss, interior)) = rest.split_last_mut() else {
        return;
    };
    boss.kind = RoomKind::Boss;

    let draws = special_budget.min(interior.len());
    for _ in 0..draws {
        let room_index = random.next_index(interior.len());
        let kind = RoomKind::SPECIAL[random.next_index(RoomKind::SPECIAL.len())];
        interior[room_index].kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridors(count: usize) -> Vec<Room> {
        (0..count)
            .map(|index| Room {
                id: format!("room_{index}"),
                x: 0,
                y: 0,
                width: 2,
                height: 2,
                kind: RoomKind::Corridor,
                connections: Vec::new(),
                visited: false,
                description: None,
            })
            .collect()
    }

    #[test]
    fn empty_room_list_is_left_alone() {
        let mut rooms = corridors(0);
        assign_roles(&mut rooms, 5, &mut SeededRandom::new(1));
        assert!(rooms.is_empty());
    }

    #[test]
    fn single_room_is_entrance_without_boss() {
        let mut rooms = corridors(1);
        assign_roles(&mut rooms, 5, &mut SeededRandom::new(1));
        assert_eq!(rooms[0].kind, RoomKind::Entrance);
        assert!(rooms[0].visited);
    }

    #[test]
    fn two_rooms_get_entrance_and_boss_only() {
        let mut rooms = corridors(2);
        let mut random = SeededRandom::new(1);
        assign_roles(&mut rooms, 5, &mut random);
        assert_eq!(rooms[0].kind, RoomKind::Entrance);
        assert_eq!(rooms[1].kind, RoomKind::Boss);
        assert!(!rooms[1].visited);

        // No interior rooms means no draws were spent.
        let mut untouched = SeededRandom::new(1);
        assert_eq!(random.next_float().to_bits(), untouched.next_float().to_bits());
    }

    #[test]
    fn special_rooms_respect_budget_and_stay_interior() {
        for seed in 0..50 {
            let mut rooms = corridors(12);
            assign_roles(&mut rooms, 3, &mut SeededRandom::new(seed));
            let special = rooms.iter().filter(|room| room.kind.is_special()).count();
            assert!(special <= 3, "seed={seed} special={special}");
            assert_eq!(rooms[0].kind, RoomKind::Entrance);
            assert_eq!(rooms[11].kind, RoomKind::Boss);
            assert!(rooms[1..11].iter().all(|room| !room.visited));
        }
    }

    #[test]
    fn each_draw_consumes_two_random_values() {
        let mut rooms = corridors(6);
        let mut random = SeededRandom::new(77);
        assign_roles(&mut rooms, 2, &mut random);

        let mut expected = SeededRandom::new(77);
        for _ in 0..4 {
            expected.next_float();
        }
        assert_eq!(random.next_float().to_bits(), expected.next_float().to_bits());
    }
}
