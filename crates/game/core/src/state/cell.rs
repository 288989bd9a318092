//! A single grid position and its presentation attributes.

use strum::{Display, EnumIter};

use crate::state::GroupId;

/// Quarter-turn applied when drawing a cell's symbol.
///
/// A tagged variant instead of per-angle booleans, so conflicting
/// rotations cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    /// Maps a 0..4 draw to a rotation; 3 leaves the symbol upright.
    pub(crate) fn from_variant(variant: u32) -> Self {
        match variant {
            0 => Rotation::Quarter,
            1 => Rotation::Half,
            2 => Rotation::ThreeQuarter,
            _ => Rotation::None,
        }
    }
}

/// Spin animation direction for a cell's symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spin {
    #[default]
    None,
    Left,
    Right,
}

impl Spin {
    pub(crate) fn from_variant(variant: u32) -> Self {
        match variant {
            0 => Spin::Left,
            _ => Spin::Right,
        }
    }
}

/// Color assigned to a group for rendering.
///
/// Single-group tables are black; multi-group tables cycle the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorTag {
    Black,
    Green,
    Red,
    Blue,
    Magenta,
    Brown,
}

impl ColorTag {
    const PALETTE: [ColorTag; 5] = [
        ColorTag::Green,
        ColorTag::Red,
        ColorTag::Blue,
        ColorTag::Magenta,
        ColorTag::Brown,
    ];

    /// Color for `group` in a table of `group_count` groups.
    pub fn for_group(group: GroupId, group_count: u8) -> Self {
        if group_count <= 1 {
            ColorTag::Black
        } else {
            Self::PALETTE[group.0 as usize % Self::PALETTE.len()]
        }
    }
}

/// One grid position holding a number belonging to exactly one group.
///
/// Cells are created together on every table build and replaced wholesale
/// on the next one; they are never added or removed individually.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Value within the owning group, `1..=group.size`.
    pub number: u16,
    /// The group this cell belongs to.
    pub group: GroupId,
    /// True once correctly selected in the current table.
    pub traced: bool,
    /// Rendered symbol; normally the decimal form of `number`.
    pub symbol: String,
    pub rotation: Rotation,
    pub spin: Spin,
}

impl Cell {
    pub fn new(number: u16, group: GroupId) -> Self {
        Self {
            number,
            group,
            traced: false,
            symbol: number.to_string(),
            rotation: Rotation::None,
            spin: Spin::None,
        }
    }
}
