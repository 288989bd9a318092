//! An independently-advancing counting sequence sharing the grid.

use crate::sequence::{self, TraversalMode};

/// Stable 0-based identifier of a group within its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(pub u8);

impl GroupId {
    pub const FIRST: GroupId = GroupId(0);
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Live cursor of one counting sequence.
///
/// Invariant: `1 <= current_expected <= size` while `completed < size`.
/// Exhaustion is defined purely by the completion counter, never by the
/// magnitude of the next candidate value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    id: GroupId,
    size: u16,
    mode: TraversalMode,
    current_expected: u16,
    completed: u16,
}

impl Group {
    pub fn new(id: GroupId, size: u16, mode: TraversalMode) -> Self {
        debug_assert!(size >= 1, "a group owns at least one cell");
        Self {
            id,
            size,
            mode,
            current_expected: sequence::start_value(size, mode),
            completed: 0,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    /// Number of values already correctly selected.
    pub fn completed(&self) -> u16 {
        self.completed
    }

    /// The next number this group's cursor needs, or `None` once the
    /// sequence has produced all `size` values.
    pub fn expected(&self) -> Option<u16> {
        (!self.is_exhausted()).then_some(self.current_expected)
    }

    pub fn is_exhausted(&self) -> bool {
        self.completed >= self.size
    }

    /// Commits one correct selection and advances the cursor.
    ///
    /// Must only be called while the group is not exhausted.
    pub fn advance(&mut self) {
        debug_assert!(!self.is_exhausted(), "advance on exhausted group");
        self.completed += 1;
        if !self.is_exhausted() {
            let next = sequence::next_value(self.current_expected, self.size, self.mode);
            debug_assert!(
                (1..=self.size).contains(&next),
                "sequence rule produced {next} outside 1..={}",
                self.size
            );
            self.current_expected = next;
        }
    }

    /// Short label describing the traversal range, e.g. `1→25`, `25→1`,
    /// `←12|13→` (divergent) or `→12|13←` (convergent).
    pub fn range_label(&self) -> String {
        let size = self.size;
        let h = size / 2;
        match (self.mode.divergent, self.mode.inverted) {
            (false, false) => format!("1→{size}"),
            (false, true) => format!("{size}→1"),
            (true, false) => format!("←{h}|{}→", h + 1),
            (true, true) => format!("→{h}|{}←", h + 1),
        }
    }
}
