use rustc_hash::FxHashMap;

use crate::address::{CellAddress, CellRange};
use crate::cell::{Cell, CellValue};
use crate::viewport::SizeOverrides;

/// Default pixel sizes of a new sheet.
pub const DEFAULT_COLUMN_WIDTH: f64 = 100.0;
pub const DEFAULT_ROW_HEIGHT: f64 = 24.0;

/// A named sheet: sparse cells keyed by address, the used range and size overrides.
///
/// The used range grows with every write and never shrinks when cells are cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    name: String,
    cells: FxHashMap<CellAddress, Cell>,
    used_range: Option<CellRange>,
    pub columns: SizeOverrides,
    pub rows: SizeOverrides,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: FxHashMap::default(),
            used_range: None,
            columns: SizeOverrides::new(DEFAULT_COLUMN_WIDTH),
            rows: SizeOverrides::new(DEFAULT_ROW_HEIGHT),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bounding rectangle of every cell ever written, `None` for a fresh sheet.
    pub fn used_range(&self) -> Option<CellRange> {
        self.used_range
    }

    /// Extend the used range without writing a cell (the `!ref` of a loaded file).
    pub fn include_range(&mut self, range: CellRange) {
        self.used_range = Some(match self.used_range {
            Some(used) => used.including(range.start).including(range.end),
            None => range,
        });
    }

    pub fn get(&self, address: CellAddress) -> Option<&Cell> {
        self.cells.get(&address)
    }

    pub fn value(&self, address: CellAddress) -> Option<&CellValue> {
        self.get(address).map(Cell::value)
    }

    /// Write `value`, returning the previous one.
    pub fn set(&mut self, address: CellAddress, value: CellValue) -> Option<CellValue> {
        self.include_range(CellRange::single(address));
        self.cells
            .insert(address, Cell::new(value))
            .map(Cell::into_value)
    }

    /// Write or clear a cell.
    pub fn put(&mut self, address: CellAddress, value: Option<CellValue>) -> Option<CellValue> {
        match value {
            Some(value) => self.set(address, value),
            None => self.remove(address),
        }
    }

    /// Clear a cell. The used range is left as is.
    pub fn remove(&mut self, address: CellAddress) -> Option<CellValue> {
        self.cells.remove(&address).map(Cell::into_value)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &Cell)> {
        self.cells.iter().map(|(address, cell)| (*address, cell))
    }

    /// Cells sorted row-major.
    pub fn sorted_cells(&self) -> Vec<(CellAddress, &Cell)> {
        let mut cells: Vec<_> = self.cells().collect();
        cells.sort_by_key(|(address, _)| *address);
        cells
    }

    fn rekey(&mut self, map: impl Fn(CellAddress) -> Option<CellAddress>) {
        let cells = std::mem::take(&mut self.cells);
        self.cells = cells
            .into_iter()
            .filter_map(|(address, cell)| map(address).map(|moved| (moved, cell)))
            .collect();
    }

    /// Shift every row at or below `row` down by one.
    pub fn insert_row(&mut self, row: u32) {
        self.rekey(|a| {
            Some(if a.row >= row {
                CellAddress::new(a.row.saturating_add(1), a.column)
            } else {
                a
            })
        });
        if let Some(range) = &mut self.used_range
            && range.end.row >= row
        {
            range.end.row = range.end.row.saturating_add(1);
        }
        self.rows.insert(row);
    }

    /// Drop `row` and shift the rows below it up by one.
    pub fn delete_row(&mut self, row: u32) {
        self.rekey(|a| match a.row.cmp(&row) {
            std::cmp::Ordering::Less => Some(a),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(CellAddress::new(a.row - 1, a.column)),
        });
        if let Some(range) = &mut self.used_range {
            if range.start.row > row {
                range.start.row -= 1;
                range.end.row -= 1;
            } else if range.end.row >= row && range.end.row > range.start.row {
                range.end.row -= 1;
            }
        }
        self.rows.remove(row);
    }

    /// Shift every column at or right of `column` right by one.
    pub fn insert_column(&mut self, column: u32) {
        self.rekey(|a| {
            Some(if a.column >= column {
                CellAddress::new(a.row, a.column.saturating_add(1))
            } else {
                a
            })
        });
        if let Some(range) = &mut self.used_range
            && range.end.column >= column
        {
            range.end.column = range.end.column.saturating_add(1);
        }
        self.columns.insert(column);
    }

    /// Drop `column` and shift the columns right of it left by one.
    pub fn delete_column(&mut self, column: u32) {
        self.rekey(|a| match a.column.cmp(&column) {
            std::cmp::Ordering::Less => Some(a),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(CellAddress::new(a.row, a.column - 1)),
        });
        if let Some(range) = &mut self.used_range {
            if range.start.column > column {
                range.start.column -= 1;
                range.end.column -= 1;
            } else if range.end.column >= column && range.end.column > range.start.column {
                range.end.column -= 1;
            }
        }
        self.columns.remove(column);
    }
}
