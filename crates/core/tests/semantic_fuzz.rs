use dungeon_core::{DungeonMap, generate_dungeon};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

/// Random walk over the connection graph; every step must stay on a valid map.
fn run_fuzz_walk(map_seed: i64, walk_seed: u64, steps: u32) -> Result<(), String> {
    let grid_size = 8 + (walk_seed % 57) as u32;
    let mut map = generate_dungeon(map_seed, grid_size)
        .map_err(|e| format!("generation failed on map_seed {map_seed}: {e}"))?;
    let mut rng = ChaCha8Rng::seed_from_u64(walk_seed);

    check(&map, map_seed)?;
    for _ in 0..steps {
        let neighbours: Vec<String> = map
            .connected_rooms(&map.current_room_id)
            .iter()
            .map(|room| room.id.clone())
            .collect();
        if neighbours.is_empty() {
            if map.rooms.len() > 1 {
                return Err(format!("Invariant failed: stranded room on map_seed {map_seed}"));
            }
            break;
        }
        let next = choose(&mut rng, &neighbours);
        map.move_to_room(&next)
            .map_err(|e| format!("Invariant failed: {e} on map_seed {map_seed}"))?;
        check(&map, map_seed)?;
    }

    Ok(())
}

fn check(map: &DungeonMap, map_seed: i64) -> Result<(), String> {
    map.validate().map_err(|e| format!("Invariant failed: {e} on map_seed {map_seed}"))?;
    if !map.is_revealed(&map.current_room_id) {
        return Err(format!("Invariant failed: current room hidden on map_seed {map_seed}"));
    }
    Ok(())
}

#[test]
fn test_fuzz_random_walks() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    let seeds = (any::<i64>(), any::<u64>());

    runner
        .run(&seeds, |(map_seed, walk_seed)| {
            run_fuzz_walk(map_seed, walk_seed, 200).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("random walks should preserve map invariants");
}
