//! Grid configuration, read from the host's settings store.

use ert_editor_lang::SettingsStore;
use serde::{Deserialize, Serialize};

use crate::worksheet::{DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub default_column_width: f64,
    pub default_row_height: f64,
    /// Rows and columns materialized beyond the visible area.
    pub overscan: u32,
    /// Fraction of the scrollable distance past which the grid grows by one row or column.
    pub growth_threshold: f64,
    pub initial_rows: u32,
    pub initial_columns: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_column_width: DEFAULT_COLUMN_WIDTH,
            default_row_height: DEFAULT_ROW_HEIGHT,
            overscan: 2,
            growth_threshold: 0.95,
            initial_rows: 50,
            initial_columns: 26,
        }
    }
}

impl GridConfig {
    pub const SETTINGS_KEY: &'static str = "ert.grid";

    /// Read the configuration, falling back to defaults when the section is absent or
    /// malformed.
    pub fn from_settings(store: &dyn SettingsStore) -> Self {
        let Some(value) = store.get(Self::SETTINGS_KEY) else {
            return Self::default();
        };
        serde_json::from_value(value).unwrap_or_else(|err| {
            log::warn!("ignoring malformed `{}` settings: {err}", Self::SETTINGS_KEY);
            Self::default()
        })
    }
}
