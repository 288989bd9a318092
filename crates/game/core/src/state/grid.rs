//! Table construction, group partitioning, and the N-swap shuffle.

use crate::config::SessionConfig;
use crate::env::{RngOracle, mix_seed};
use crate::sequence::TraversalMode;
use crate::state::{Cell, Group, GroupId, Rotation, Spin};

// Seed-mixing contexts; see `env::mix_seed`.
const CTX_SWAP_A: u32 = 0;
const CTX_SWAP_B: u32 = 1;
const CTX_ROTATION: u32 = 2;
const CTX_SPIN: u32 = 3;

/// Ordered collection of cells as presented to the player.
///
/// The cell at position `i` is what the player sees at grid slot `i`
/// (row-major); `build` lays cells out contiguously per group and
/// `shuffle` permutes them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds the unshuffled table and its groups from configuration.
    ///
    /// `grid_size²` positions are split into `group_count` contiguous
    /// groups; group 0 absorbs the remainder so every cell is assigned.
    pub fn build(config: &SessionConfig) -> (Grid, Vec<Group>) {
        let cell_count = config.cell_count();
        let group_count = config.group_count as usize;

        let base = cell_count / group_count;
        let remainder = cell_count % group_count;

        let mut cells = Vec::with_capacity(cell_count);
        let mut groups = Vec::with_capacity(group_count);

        for index in 0..group_count {
            let id = GroupId(index as u8);
            let size = if index == 0 { base + remainder } else { base } as u16;
            let mode = group_mode(config, index);

            for number in 1..=size {
                cells.push(Cell::new(number, id));
            }
            groups.push(Group::new(id, size, mode));
        }

        debug_assert_eq!(cells.len(), cell_count);
        (Grid { cells }, groups)
    }

    /// Randomizes rotation/spin decorations according to the config flags.
    ///
    /// Clears both when the flags are off, matching a rebuild with the
    /// options disabled.
    pub fn apply_decorations(
        &mut self,
        config: &SessionConfig,
        rng: &dyn RngOracle,
        seed: u64,
        round: u32,
    ) {
        for (index, cell) in self.cells.iter_mut().enumerate() {
            cell.rotation = if config.turn_symbols {
                let variant = rng.pick_variant(mix_seed(seed, round, index as u32, CTX_ROTATION), 4);
                Rotation::from_variant(variant)
            } else {
                Rotation::None
            };
            cell.spin = if config.spin_symbols {
                let variant = rng.pick_variant(mix_seed(seed, round, index as u32, CTX_SPIN), 2);
                Spin::from_variant(variant)
            } else {
                Spin::None
            };
        }
    }

    /// Applies `iterations` independent random pairwise swaps.
    ///
    /// Both slots are drawn uniformly with replacement, so a slot may be
    /// swapped with itself or repeatedly. This is deliberately not a
    /// Fisher-Yates permutation: the resulting distribution is part of the
    /// perceived difficulty curve and must not be "fixed".
    pub fn shuffle(&mut self, rng: &dyn RngOracle, seed: u64, round: u32, iterations: u32) {
        let len = self.cells.len();
        if len < 2 {
            return;
        }
        for step in 0..iterations {
            let a = rng.pick_slot(mix_seed(seed, round, step, CTX_SWAP_A), len);
            let b = rng.pick_slot(mix_seed(seed, round, step, CTX_SWAP_B), len);
            self.cells.swap(a, b);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Linear scan for the cell carrying `number` in `group`.
    pub fn index_of(&self, group: GroupId, number: u16) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.group == group && cell.number == number)
    }

    /// Position of the cell a group currently expects, if any.
    pub fn index_of_expected(&self, group: &Group) -> Option<usize> {
        group
            .expected()
            .and_then(|number| self.index_of(group.id(), number))
    }

    pub fn mark_traced(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.traced = true;
        }
    }
}

/// Traversal mode for group `index` under `config`.
///
/// Uniform mode: `divergent` applies to every group; `inverse` flips odd
/// indices, or the lone group of a single-group table. Varied mode cycles
/// the fixed 4-way rotation instead.
fn group_mode(config: &SessionConfig, index: usize) -> TraversalMode {
    if config.varied_modes {
        TraversalMode::VARIED_ROTATION[index % TraversalMode::VARIED_ROTATION.len()]
    } else {
        TraversalMode {
            inverted: config.inverse && (index % 2 == 1 || config.group_count == 1),
            divergent: config.divergent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use std::collections::BTreeMap;

    fn multiset(grid: &Grid) -> BTreeMap<(GroupId, u16), usize> {
        let mut counts = BTreeMap::new();
        for cell in grid.cells() {
            *counts.entry((cell.group, cell.number)).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn build_partitions_every_cell() {
        for (grid_size, group_count) in [(2u8, 1u8), (5, 1), (5, 2), (7, 3), (9, 5)] {
            let config = SessionConfig::new()
                .with_grid_size(grid_size)
                .with_group_count(group_count)
                .clamped();
            let (grid, groups) = Grid::build(&config);

            assert_eq!(grid.len(), config.cell_count());
            assert_eq!(groups.len(), group_count as usize);

            let total: usize = groups.iter().map(|g| g.size() as usize).sum();
            assert_eq!(total, config.cell_count());
        }
    }

    #[test]
    fn group_zero_absorbs_remainder() {
        let config = SessionConfig::new()
            .with_grid_size(5)
            .with_group_count(2)
            .clamped();
        let (_, groups) = Grid::build(&config);
        assert_eq!(groups[0].size(), 13);
        assert_eq!(groups[1].size(), 12);
    }

    #[test]
    fn group_numbers_form_exact_range() {
        let config = SessionConfig::new()
            .with_grid_size(7)
            .with_group_count(3)
            .clamped();
        let (grid, groups) = Grid::build(&config);

        for group in &groups {
            let mut numbers: Vec<u16> = grid
                .cells()
                .iter()
                .filter(|c| c.group == group.id())
                .map(|c| c.number)
                .collect();
            numbers.sort_unstable();
            let expected: Vec<u16> = (1..=group.size()).collect();
            assert_eq!(numbers, expected);
        }
    }

    #[test]
    fn shuffle_preserves_cell_multiset() {
        let config = SessionConfig::new()
            .with_grid_size(5)
            .with_group_count(3)
            .clamped();
        let (mut grid, _) = Grid::build(&config);
        let before = multiset(&grid);

        let rng = PcgRng;
        grid.shuffle(&rng, 0xfeed, 1, SessionConfig::SHUFFLE_ITERATIONS);
        assert_eq!(multiset(&grid), before);

        // Shuffling again is still a permutation.
        grid.shuffle(&rng, 0xfeed, 2, SessionConfig::SHUFFLE_ITERATIONS);
        assert_eq!(multiset(&grid), before);
    }

    #[test]
    fn zero_iteration_shuffle_is_identity() {
        let config = SessionConfig::new().with_grid_size(4).clamped();
        let (mut grid, _) = Grid::build(&config);
        let before = grid.clone();
        grid.shuffle(&PcgRng, 7, 1, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn shuffle_is_deterministic_per_seed_and_round() {
        let config = SessionConfig::new().with_grid_size(5).clamped();
        let (mut a, _) = Grid::build(&config);
        let (mut b, _) = Grid::build(&config);
        a.shuffle(&PcgRng, 99, 1, 1000);
        b.shuffle(&PcgRng, 99, 1, 1000);
        assert_eq!(a, b);

        let (mut c, _) = Grid::build(&config);
        c.shuffle(&PcgRng, 99, 2, 1000);
        assert_ne!(a, c, "different rounds should give different layouts");
    }

    #[test]
    fn index_of_expected_finds_the_target() {
        let config = SessionConfig::new()
            .with_grid_size(5)
            .with_group_count(2)
            .clamped();
        let (mut grid, groups) = Grid::build(&config);
        grid.shuffle(&PcgRng, 3, 1, 1000);

        for group in &groups {
            let index = grid.index_of_expected(group).expect("target must exist");
            let cell = grid.cell(index).unwrap();
            assert_eq!(cell.group, group.id());
            assert_eq!(Some(cell.number), group.expected());
        }
    }

    #[test]
    fn uniform_inverse_alternates_by_index() {
        let config = SessionConfig {
            inverse: true,
            ..SessionConfig::new().with_grid_size(6).with_group_count(3)
        }
        .clamped();
        let (_, groups) = Grid::build(&config);
        assert!(!groups[0].mode().inverted);
        assert!(groups[1].mode().inverted);
        assert!(!groups[2].mode().inverted);
    }

    #[test]
    fn uniform_inverse_applies_to_a_lone_group() {
        let config = SessionConfig {
            inverse: true,
            ..SessionConfig::new().with_grid_size(4)
        }
        .clamped();
        let (_, groups) = Grid::build(&config);
        assert!(groups[0].mode().inverted);
        assert_eq!(groups[0].expected(), Some(16));
    }

    #[test]
    fn varied_modes_cycle_all_four_rules() {
        let config = SessionConfig {
            varied_modes: true,
            ..SessionConfig::new().with_grid_size(9).with_group_count(5)
        }
        .clamped();
        let (_, groups) = Grid::build(&config);
        let modes: Vec<TraversalMode> = groups.iter().map(|g| g.mode()).collect();
        assert_eq!(modes[0], TraversalMode::ORDINAL);
        assert_eq!(modes[1], TraversalMode::INVERTED);
        assert_eq!(modes[2], TraversalMode::DIVERGENT);
        assert_eq!(modes[3], TraversalMode::DIVERGENT_INVERTED);
        assert_eq!(modes[4], TraversalMode::ORDINAL);
    }

    #[test]
    fn decorations_follow_config_flags() {
        let config = SessionConfig {
            turn_symbols: true,
            spin_symbols: true,
            ..SessionConfig::new().with_grid_size(5)
        }
        .clamped();
        let (mut grid, _) = Grid::build(&config);
        grid.apply_decorations(&config, &PcgRng, 11, 1);
        assert!(grid.cells().iter().all(|c| c.spin != Spin::None));

        let plain = SessionConfig::new().with_grid_size(5).clamped();
        grid.apply_decorations(&plain, &PcgRng, 11, 2);
        assert!(
            grid.cells()
                .iter()
                .all(|c| c.rotation == Rotation::None && c.spin == Spin::None)
        );
    }
}
