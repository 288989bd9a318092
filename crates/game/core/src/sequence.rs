//! Traversal rules: which number a group expects next.
//!
//! Pure arithmetic over `(current, size, mode)`. The rule itself never
//! clamps and never signals exhaustion; callers stop consulting it once a
//! group has produced all `size` values (see `Group::advance`).

use strum::{Display, EnumIter};

/// How a group walks its value range.
///
/// The two flags combine freely into four traversal rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalMode {
    /// Run from the high end toward 1 (ordinal) or edge-inward (divergent).
    pub inverted: bool,
    /// Start at the middle value and expand alternately outward.
    pub divergent: bool,
}

impl TraversalMode {
    pub const ORDINAL: Self = Self {
        inverted: false,
        divergent: false,
    };
    pub const INVERTED: Self = Self {
        inverted: true,
        divergent: false,
    };
    pub const DIVERGENT: Self = Self {
        inverted: false,
        divergent: true,
    };
    pub const DIVERGENT_INVERTED: Self = Self {
        inverted: true,
        divergent: true,
    };

    /// The fixed rotation used by "varied modes": ordinal, inverted,
    /// divergent, divergent-inverted, cycled by group index.
    pub const VARIED_ROTATION: [Self; 4] = [
        Self::ORDINAL,
        Self::INVERTED,
        Self::DIVERGENT,
        Self::DIVERGENT_INVERTED,
    ];

    pub fn kind(self) -> TraversalKind {
        match (self.divergent, self.inverted) {
            (false, false) => TraversalKind::Ordinal,
            (false, true) => TraversalKind::Inverted,
            (true, false) => TraversalKind::Divergent,
            (true, true) => TraversalKind::DivergentInverted,
        }
    }
}

/// Named traversal rule, mostly for display and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalKind {
    #[strum(serialize = "ascending")]
    Ordinal,
    #[strum(serialize = "descending")]
    Inverted,
    #[strum(serialize = "divergent")]
    Divergent,
    #[strum(serialize = "convergent")]
    DivergentInverted,
}

/// First value a group of `size` cells expects under `mode`.
pub fn start_value(size: u16, mode: TraversalMode) -> u16 {
    debug_assert!(size >= 1);
    if size == 1 {
        return 1;
    }
    match mode.kind() {
        TraversalKind::Ordinal => 1,
        TraversalKind::Inverted => size,
        // Middle value, rounded down for even sizes.
        TraversalKind::Divergent => size / 2,
        TraversalKind::DivergentInverted => 1,
    }
}

/// Value expected after `current` for a group of `size` cells.
///
/// Only meaningful while the group is not exhausted; the result is then
/// guaranteed to lie in `1..=size` and to complete a permutation of that
/// range (see the coverage tests below).
pub fn next_value(current: u16, size: u16, mode: TraversalMode) -> u16 {
    let h = size / 2;
    match mode.kind() {
        TraversalKind::Ordinal => current + 1,
        TraversalKind::Inverted => current - 1,
        TraversalKind::Divergent => {
            // h, h+1, h-1, h+2, h-2, ... growing outward from the middle,
            // continuing rightward once the left side is spent.
            if current == h {
                h + 1
            } else if current < h {
                h + 1 + (h - current)
            } else if current - h < h {
                h - (current - h)
            } else {
                current + 1
            }
        }
        TraversalKind::DivergentInverted => {
            // 1, size, 2, size-1, ... from the outer edges inward.
            if current <= h {
                size - current + 1
            } else {
                2 + (size - current)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the full sequence for a mode, collecting `size` values.
    fn walk(size: u16, mode: TraversalMode) -> Vec<u16> {
        let mut values = Vec::with_capacity(size as usize);
        let mut current = start_value(size, mode);
        values.push(current);
        for _ in 1..size {
            current = next_value(current, size, mode);
            values.push(current);
        }
        values
    }

    fn assert_visits_all_once(size: u16, mode: TraversalMode) {
        let mut values = walk(size, mode);
        values.sort_unstable();
        let expected: Vec<u16> = (1..=size).collect();
        assert_eq!(values, expected, "size={size} mode={:?}", mode.kind());
    }

    #[test]
    fn ordinal_ascending_reaches_size() {
        let values = walk(25, TraversalMode::ORDINAL);
        assert_eq!(values.first(), Some(&1));
        assert_eq!(values.last(), Some(&25));
    }

    #[test]
    fn ordinal_descending_reaches_one() {
        let values = walk(25, TraversalMode::INVERTED);
        assert_eq!(values.first(), Some(&25));
        assert_eq!(values.last(), Some(&1));
    }

    #[test]
    fn divergent_starts_at_middle_and_alternates() {
        assert_eq!(walk(5, TraversalMode::DIVERGENT), vec![2, 3, 1, 4, 5]);
        assert_eq!(
            walk(9, TraversalMode::DIVERGENT),
            vec![4, 5, 3, 6, 2, 7, 1, 8, 9]
        );
    }

    #[test]
    fn divergent_inverted_converges_from_edges() {
        assert_eq!(
            walk(5, TraversalMode::DIVERGENT_INVERTED),
            vec![1, 5, 2, 4, 3]
        );
        assert_eq!(
            walk(9, TraversalMode::DIVERGENT_INVERTED),
            vec![1, 9, 2, 8, 3, 7, 4, 6, 5]
        );
    }

    #[test]
    fn every_mode_visits_each_value_exactly_once() {
        for size in [2u16, 3, 4, 5, 9, 25] {
            for mode in TraversalMode::VARIED_ROTATION {
                assert_visits_all_once(size, mode);
            }
        }
    }

    #[test]
    fn single_cell_group_starts_at_one() {
        for mode in TraversalMode::VARIED_ROTATION {
            assert_eq!(start_value(1, mode), 1);
        }
    }
}
