//! Per-file view state persisted by the host between sessions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::selection::Selection;

/// View state of one worksheet. Size maps are keyed by zero-based row/column index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetViewState {
    pub worksheet_name: String,
    pub selection: Option<Selection>,
    pub scroll_left: f64,
    pub scroll_top: f64,
    #[serde(default)]
    pub column_widths: BTreeMap<u32, f64>,
    #[serde(default)]
    pub row_heights: BTreeMap<u32, f64>,
}

impl SheetViewState {
    pub fn new(worksheet_name: impl Into<String>) -> Self {
        Self {
            worksheet_name: worksheet_name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileViewState {
    pub visible_worksheet_name: String,
    #[serde(default)]
    pub view_states: Vec<SheetViewState>,
}

impl FileViewState {
    pub fn sheet(&self, name: &str) -> Option<&SheetViewState> {
        self.view_states.iter().find(|s| s.worksheet_name == name)
    }

    /// Insert or replace the state of `state.worksheet_name`.
    pub fn upsert(&mut self, state: SheetViewState) {
        match self
            .view_states
            .iter_mut()
            .find(|s| s.worksheet_name == state.worksheet_name)
        {
            Some(existing) => *existing = state,
            None => self.view_states.push(state),
        }
    }

    pub fn to_json(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a blob stored by the host. Unreadable state is logged and dropped, so the file
    /// opens with a fresh view.
    pub fn decode_stored(text: &str) -> Option<Self> {
        Self::from_json(text)
            .map_err(|err| log::warn!("discarding unreadable view state: {err}"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::CellAddress;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn sample() -> FileViewState {
        let mut priors = SheetViewState::new("Priors");
        priors.selection = Some(Selection::new(CellAddress::new(1, 2), CellAddress::new(3, 0)));
        priors.scroll_left = 40.0;
        priors.scroll_top = 480.0;
        priors.column_widths.insert(2, 180.0);
        priors.row_heights.insert(0, 30.0);
        FileViewState {
            visible_worksheet_name: "Priors".to_string(),
            view_states: vec![priors, SheetViewState::new("Sheet2")],
        }
    }

    #[test]
    fn test_layout() {
        let value: Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(value["visibleWorksheetName"], "Priors");
        let priors = &value["viewStates"][0];
        assert_eq!(priors["worksheetName"], "Priors");
        assert_eq!(
            priors["selection"],
            json!({ "start": { "row": 1, "column": 2 }, "end": { "row": 3, "column": 0 } })
        );
        assert_eq!(priors["scrollTop"], 480.0);
        assert_eq!(priors["columnWidths"], json!({ "2": 180.0 }));
        assert_eq!(value["viewStates"][1]["selection"], Value::Null);
    }

    #[test]
    fn test_round_trip() {
        let state = sample();
        assert_eq!(FileViewState::from_json(&state.to_json().unwrap()).unwrap(), state);
        assert_eq!(FileViewState::decode_stored("{\"viewStates\": 3}"), None);
    }

    #[test]
    fn test_upsert_replaces_by_name() {
        let mut state = sample();
        let mut replacement = SheetViewState::new("Sheet2");
        replacement.scroll_top = 10.0;
        state.upsert(replacement.clone());
        assert_eq!(state.view_states.len(), 2);
        assert_eq!(state.sheet("Sheet2"), Some(&replacement));
    }
}
