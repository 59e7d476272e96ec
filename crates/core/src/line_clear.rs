//! Line clear resolution after a lock
//!
//! Every full row is removed in one pass; rows above settle down by the number
//! of cleared rows beneath them and the top is refilled with empty rows. The
//! original indices are reported so a renderer can animate them.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Result of resolving line clears for one lock
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineClear {
    /// Original indices of cleared rows, bottom to top
    pub rows: Vec<usize>,
}

impl LineClear {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Detect and remove full rows
pub fn resolve_line_clears(grid: &mut Grid) -> LineClear {
    LineClear {
        rows: grid.clear_full_rows(),
    }
}
