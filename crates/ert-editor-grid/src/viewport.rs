//! Viewport virtualization.
//!
//! Only the rows and columns intersecting the scroll window (plus a small overscan) are
//! materialized. Sizes are a shared default with sparse per-index overrides, so pixel offsets
//! are computed by walking the overrides rather than every index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Pixel sizes along one axis: a default plus sparse overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOverrides {
    pub default: f64,
    pub overrides: BTreeMap<u32, f64>,
}

impl SizeOverrides {
    /// `default` is clamped to at least one pixel.
    pub fn new(default: f64) -> Self {
        Self {
            default: default.max(1.0),
            overrides: BTreeMap::new(),
        }
    }

    pub fn size(&self, index: u32) -> f64 {
        self.overrides.get(&index).copied().unwrap_or(self.default)
    }

    /// Set an override; a size equal to the default removes it.
    pub fn set(&mut self, index: u32, size: f64) {
        if size == self.default {
            self.overrides.remove(&index);
        } else {
            self.overrides.insert(index, size);
        }
    }

    /// Pixel offset of the leading edge of `index`.
    pub fn offset_of(&self, index: u32) -> f64 {
        let adjustment: f64 = self
            .overrides
            .range(..index)
            .map(|(_, size)| size - self.default)
            .sum();
        f64::from(index) * self.default + adjustment
    }

    /// The index covering pixel `offset` and how far into it `offset` lies.
    pub fn index_at(&self, offset: f64) -> (u32, f64) {
        let mut remaining = offset.max(0.0);
        let mut next = 0u32;
        for (&index, &size) in &self.overrides {
            let block = f64::from(index - next) * self.default;
            if remaining < block {
                break;
            }
            remaining -= block;
            if remaining < size {
                return (index, remaining);
            }
            remaining -= size;
            next = index + 1;
        }
        let steps = (remaining / self.default).floor();
        (
            next.saturating_add(steps as u32),
            remaining - steps * self.default,
        )
    }

    /// Number of indices starting at `first` needed to cover `extent` pixels.
    pub fn count_to_fill(&self, first: u32, extent: f64) -> u32 {
        let mut covered = 0.0;
        let mut count = 0u32;
        while covered < extent {
            covered += self.size(first.saturating_add(count));
            count += 1;
        }
        count
    }

    /// Shift overrides at or after `index` by one, opening a gap at `index`.
    pub fn insert(&mut self, index: u32) {
        let shifted: Vec<(u32, f64)> = self.overrides.split_off(&index).into_iter().collect();
        for (i, size) in shifted {
            self.overrides.insert(i.saturating_add(1), size);
        }
    }

    /// Drop the override at `index` and shift later ones back by one.
    pub fn remove(&mut self, index: u32) {
        let shifted: Vec<(u32, f64)> = self.overrides.split_off(&index).into_iter().collect();
        for (i, size) in shifted {
            if i > index {
                self.overrides.insert(i - 1, size);
            }
        }
    }
}

/// The materialized window of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub first_row: u32,
    pub row_count: u32,
    pub first_column: u32,
    pub column_count: u32,
    /// Pixel offset of the first materialized row/column relative to the scroll position.
    pub offset_top: f64,
    pub offset_left: f64,
}

impl Viewport {
    /// Compute the window for a scroll position and client size.
    pub fn compute(
        scroll: (f64, f64),
        client: (f64, f64),
        columns: &SizeOverrides,
        rows: &SizeOverrides,
        overscan: u32,
    ) -> Self {
        let (scroll_left, scroll_top) = scroll;
        let (width, height) = client;
        let (first_column, into_column) = columns.index_at(scroll_left);
        let (first_row, into_row) = rows.index_at(scroll_top);
        Self {
            first_row,
            row_count: rows.count_to_fill(first_row, height + into_row) + overscan,
            first_column,
            column_count: columns.count_to_fill(first_column, width + into_column) + overscan,
            offset_top: -into_row,
            offset_left: -into_column,
        }
    }

    pub fn rows(&self) -> std::ops::Range<u32> {
        self.first_row..self.first_row.saturating_add(self.row_count)
    }

    pub fn columns(&self) -> std::ops::Range<u32> {
        self.first_column..self.first_column.saturating_add(self.column_count)
    }
}

/// Scroll metrics reported by the host's scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

/// How many rows and columns are materialized, grown one step at a time as the user scrolls
/// towards the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridExtent {
    pub rows: u32,
    pub columns: u32,
    threshold: f64,
    last_scroll: (f64, f64),
}

impl GridExtent {
    pub fn new(rows: u32, columns: u32, threshold: f64) -> Self {
        Self {
            rows,
            columns,
            threshold,
            last_scroll: (0.0, 0.0),
        }
    }

    /// Make sure `rows x columns` are materialized.
    pub fn ensure(&mut self, rows: u32, columns: u32) {
        self.rows = self.rows.max(rows);
        self.columns = self.columns.max(columns);
    }

    /// Apply a scroll event. Returns whether the extent grew.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) -> bool {
        let (last_left, last_top) = self.last_scroll;
        self.last_scroll = (metrics.scroll_left, metrics.scroll_top);

        let mut grew = false;
        let max_top = (metrics.scroll_height - metrics.client_height).max(0.0);
        if metrics.scroll_top > last_top && metrics.scroll_top >= self.threshold * max_top {
            self.rows = self.rows.saturating_add(1);
            log::trace!("grid extent grew to {} rows", self.rows);
            grew = true;
        }
        let max_left = (metrics.scroll_width - metrics.client_width).max(0.0);
        if metrics.scroll_left > last_left && metrics.scroll_left >= self.threshold * max_left {
            self.columns = self.columns.saturating_add(1);
            log::trace!("grid extent grew to {} columns", self.columns);
            grew = true;
        }
        grew
    }
}
