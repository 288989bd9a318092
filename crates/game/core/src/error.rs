//! Fatal invariant violations.
//!
//! Stray input and out-of-range configuration are *not* errors here: the
//! first is silently ignored and the second is clamped. This type covers
//! only conditions that indicate a bug in table construction or the
//! sequence rule.

use crate::state::GroupId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// `index_of_expected` found nothing for an active, non-exhausted
    /// group. The grid no longer carries the value the cursor demands.
    #[error("no cell carries number {number} for active group {group}")]
    ExpectedCellMissing { group: GroupId, number: u16 },
}
