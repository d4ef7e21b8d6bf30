//! Rectangular selection model.

use serde::{Deserialize, Serialize};

use crate::address::{CellAddress, CellRange, UNBOUNDED};

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// An anchor (`start`) and a free corner (`end`), not necessarily normalized.
///
/// An extent of [`UNBOUNDED`] selects an entire row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl Selection {
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    pub fn cell(address: CellAddress) -> Self {
        Self::new(address, address)
    }

    pub fn entire_row(row: u32) -> Self {
        Self::new(CellAddress::new(row, 0), CellAddress::new(row, UNBOUNDED))
    }

    pub fn entire_column(column: u32) -> Self {
        Self::new(CellAddress::new(0, column), CellAddress::new(UNBOUNDED, column))
    }

    pub fn is_single_cell(&self) -> bool {
        self.start == self.end
    }

    pub fn is_unbounded(&self) -> bool {
        [self.start.row, self.start.column, self.end.row, self.end.column].contains(&UNBOUNDED)
    }

    /// The normalized rectangle, unbounded extents included.
    pub fn range(&self) -> CellRange {
        CellRange::spanning(self.start, self.end)
    }

    /// The normalized rectangle with unbounded extents cut back to `used`.
    ///
    /// `None` when an unbounded selection has nothing to clamp against, or lies entirely
    /// outside the used range.
    pub fn clamped(&self, used: Option<CellRange>) -> Option<CellRange> {
        let mut range = self.range();
        if !self.is_unbounded() {
            return Some(range);
        }
        let used = used?;
        if range.end.row == UNBOUNDED {
            range.end.row = used.end.row;
        }
        if range.end.column == UNBOUNDED {
            range.end.column = used.end.column;
        }
        let inside = range.start.row <= used.end.row.min(range.end.row)
            && range.start.column <= used.end.column.min(range.end.column);
        inside.then_some(range)
    }

    /// Collapse to the cell next to the free corner, or next to the anchor of a whole row or
    /// column.
    pub fn moved(&self, direction: Direction) -> Self {
        let (rows, columns) = direction.delta();
        let from = if self.is_unbounded() { self.start } else { self.end };
        Self::cell(from.offset(rows, columns))
    }

    /// Move the free corner, keeping the anchor.
    pub fn extended(&self, direction: Direction) -> Self {
        let (rows, columns) = direction.delta();
        Self::new(self.start, self.end.offset(rows, columns))
    }
}
