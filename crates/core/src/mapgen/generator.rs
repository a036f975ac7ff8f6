//! Generation orchestration: one seeded stream threaded through placement, corridors, walls.

use log::debug;

use super::corridors::{connect_extra, connect_sequential};
use super::layout::place_rooms;
use super::model::MapData;
use super::params::GenerationParameters;
use super::rng::MapRng;
use super::walls::derive_walls;

/// Stateless generator service; holds only its parameters, so repeated calls with the
/// same seed always reproduce the same map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapGenerator {
    params: GenerationParameters,
}

impl MapGenerator {
    pub fn new(params: GenerationParameters) -> Self {
        Self { params }
    }

    pub fn generate(&self, seed: i32) -> MapData {
        let params = &self.params;
        let mut rng = MapRng::from_seed(seed);
        let mut map = MapData::empty(params.width, params.height);

        place_rooms(&mut map, params, &mut rng);
        debug!(
            "seed {seed}: placed {} of {} room attempts",
            map.rooms.len(),
            params.room_attempts
        );
        if map.rooms.is_empty() {
            return map;
        }

        connect_sequential(&mut map);
        connect_extra(&mut map, params.extra_corridors, &mut rng);
        let walls = derive_walls(&mut map);
        debug!("seed {seed}: {} cells after corridors and {walls} walls", map.cells.len());

        map
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::types::{CellType, GridPos};

    fn scenario_params() -> GenerationParameters {
        GenerationParameters {
            width: 20,
            height: 15,
            room_attempts: 10,
            min_room_size: 3,
            max_room_size: 5,
            extra_corridors: 0,
        }
    }

    #[test]
    fn scenario_seed_42_produces_floor_and_wall_only_map() {
        let map = MapGenerator::new(scenario_params()).generate(42);

        assert!(!map.rooms.is_empty());
        assert!(
            map.cells.values().all(|cell| matches!(cell.kind, CellType::Floor | CellType::Wall))
        );
        for room in &map.rooms {
            assert!(room.bounds.min.x >= 1 && room.bounds.max.x <= 19, "{room:?}");
            assert!(room.bounds.min.y >= 1 && room.bounds.max.y <= 14, "{room:?}");
        }
    }

    #[test]
    fn same_inputs_produce_byte_identical_output() {
        let generator = MapGenerator::new(GenerationParameters::default());
        let first = generator.generate(1_337);
        let second = generator.generate(1_337);
        assert_eq!(first, second);
        assert_eq!(first.canonical_bytes(), second.canonical_bytes());
    }

    #[test]
    fn changing_seed_changes_output() {
        let generator = MapGenerator::new(GenerationParameters::default());
        assert_ne!(generator.generate(1).fingerprint(), generator.generate(2).fingerprint());
    }

    #[test]
    fn zero_attempts_yield_empty_map_for_any_seed() {
        let params = GenerationParameters { room_attempts: 0, ..Default::default() };
        for seed in [i32::MIN, -1, 0, 1, 42, i32::MAX] {
            let map = MapGenerator::new(params).generate(seed);
            assert!(map.rooms.is_empty());
            assert!(map.cells.is_empty());
        }
    }

    #[test]
    fn zero_size_grid_degenerates_to_empty_map() {
        let params = GenerationParameters { width: 0, height: 0, ..Default::default() };
        let map = MapGenerator::new(params).generate(9);
        assert!(map.rooms.is_empty());
        assert!(map.cells.is_empty());
    }

    #[test]
    fn oversized_rooms_on_degenerate_grids_yield_empty_map() {
        for (width, height) in [(0, 0), (-5, -5), (i32::MIN, 3)] {
            let params = GenerationParameters {
                width,
                height,
                room_attempts: 4,
                min_room_size: i32::MAX,
                max_room_size: i32::MAX,
                extra_corridors: 3,
            };
            let map = MapGenerator::new(params).generate(1);
            assert!(map.rooms.is_empty(), "{width}x{height}");
            assert!(map.cells.is_empty(), "{width}x{height}");
        }
    }

    #[test]
    fn sequential_corridors_connect_every_room() {
        for seed in [3, 42, 1_337, 90_210] {
            let map = MapGenerator::new(GenerationParameters::default()).generate(seed);
            assert!(map.rooms.len() > 1, "seed {seed} should place several rooms");
            assert_eq!(map.walkable_region_count(), 1, "seed {seed} left floor islands");
        }
    }

    #[test]
    fn extra_corridors_only_add_floor() {
        let base = GenerationParameters { extra_corridors: 0, ..Default::default() };
        let extra = GenerationParameters { extra_corridors: 12, ..Default::default() };
        let without = MapGenerator::new(base).generate(77);
        let with = MapGenerator::new(extra).generate(77);

        assert_eq!(without.rooms, with.rooms);
        for cell in without.cells.values().filter(|cell| cell.kind == CellType::Floor) {
            assert_eq!(with.cell_type_at(cell.pos()), CellType::Floor);
        }
    }

    #[test]
    fn rooms_are_stamped_as_floor() {
        let map = MapGenerator::new(GenerationParameters::default()).generate(5);
        for room in &map.rooms {
            assert!(room.bounds.positions().all(|pos| map.cell_type_at(pos) == CellType::Floor));
        }
    }

    fn assert_map_invariants(map: &MapData) -> Result<(), TestCaseError> {
        for (key, cell) in &map.cells {
            prop_assert_eq!(*key, cell.pos());
            prop_assert!(map.in_bounds(*key), "cell outside extent: {:?}", key);
        }
        for (index, room) in map.rooms.iter().enumerate() {
            for (other_index, other) in map.rooms.iter().enumerate() {
                if index != other_index {
                    prop_assert!(
                        !room.bounds.expanded(1).intersects(&other.bounds),
                        "rooms {} and {} violate padding",
                        index,
                        other_index
                    );
                }
            }
        }
        let floor_like: HashSet<GridPos> = map
            .cells
            .values()
            .filter(|cell| cell.kind.is_walkable())
            .map(|cell| cell.pos())
            .collect();
        for cell in map.cells.values().filter(|cell| cell.kind == CellType::Wall) {
            prop_assert!(
                cell.pos().orthogonal_neighbors().iter().any(|next| floor_like.contains(next)),
                "wall without walkable neighbour at {:?}",
                cell.pos()
            );
        }
        if !map.rooms.is_empty() {
            prop_assert_eq!(map.walkable_region_count(), 1);
        }
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_maps_hold_structural_invariants(
            seed in any::<i32>(),
            width in 1_i32..64,
            height in 1_i32..64,
            room_attempts in 0_i32..40,
            min_room_size in 1_i32..6,
            size_spread in 0_i32..5,
            extra_corridors in 0_i32..8,
        ) {
            let params = GenerationParameters {
                width,
                height,
                room_attempts,
                min_room_size,
                max_room_size: min_room_size + size_spread,
                extra_corridors,
            };
            let map = MapGenerator::new(params).generate(seed);
            assert_map_invariants(&map)?;
            prop_assert_eq!(map, MapGenerator::new(params).generate(seed));
        }
    }
}
