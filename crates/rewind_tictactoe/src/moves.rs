//! Rendered move list: sort order and entries.

use serde::{Deserialize, Serialize};

/// Order in which the move list is shown.
///
/// Only the rendering is reordered; the stored history is always oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEntry {
    index: usize,
    is_current: bool,
}

impl MoveEntry {
    pub(crate) fn new(index: usize, is_current: bool) -> Self {
        Self { index, is_current }
    }

    /// History index this entry jumps to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this entry is the position on the board.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Whether this entry is the empty starting board.
    pub fn is_game_start(&self) -> bool {
        self.index == 0
    }
}
