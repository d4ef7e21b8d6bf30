//! The spreadsheet editor for one open file.
//!
//! [`SpreadsheetEditor`] owns the workbook model, the selection, the per-cell edit session,
//! the undo log and the scroll/viewport state. Hosts drive it either through the individual
//! methods or through [`SpreadsheetEditor::execute`] with a [`GridCommand`].
//!
//! State machine: `Closed -> Loaded` on [`open`](SpreadsheetEditor::open),
//! `Loaded -> Editing(cell)` on double-click or on a printable keystroke while a single cell
//! is selected, `Editing -> Loaded` on commit (Enter), on selecting another cell or on blur.
//! [`close`](SpreadsheetEditor::close) discards the model.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::address::{CellAddress, CellRange};
use crate::cell::CellValue;
use crate::clipboard::{Clipboard, Notification, Notifier, parse_tsv, to_tsv};
use crate::codec::codec_for_path;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::fs::FileSystem;
use crate::selection::{Direction, Selection};
use crate::undo::{UndoAction, UndoLog};
use crate::view_state::{FileViewState, SheetViewState};
use crate::viewport::{GridExtent, ScrollMetrics, Viewport};
use crate::workbook::Workbook;
use crate::worksheet::Worksheet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Closed,
    Loaded,
    Editing(CellAddress),
}

/// Input events and actions accepted by [`SpreadsheetEditor::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum GridCommand {
    /// Press on a cell; `extend` (shift) moves the free corner instead of re-anchoring.
    PointerDown { address: CellAddress, extend: bool },
    PointerMove(CellAddress),
    PointerUp,
    DoubleClick(CellAddress),
    Arrow { direction: Direction, extend: bool },
    SelectRow(u32),
    SelectColumn(u32),
    TypeChar(char),
    /// Replace the text of the active edit session.
    SetEditText(String),
    CommitEdit,
    Blur,
    Delete,
    Copy,
    Paste,
    InsertRow(u32),
    DeleteRow(u32),
    InsertColumn(u32),
    DeleteColumn(u32),
    Undo,
    Scroll(ScrollMetrics),
    ResizeColumn { column: u32, width: f64 },
    ResizeRow { row: u32, height: f64 },
    SetActiveSheet(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridOutcome {
    Success,
    /// The command does not apply in the current state.
    Ignored,
    /// The command failed and the user was notified.
    Notified,
    Viewport(Viewport),
    Pasted(CellRange),
}

impl From<bool> for GridOutcome {
    fn from(applied: bool) -> Self {
        if applied { Self::Success } else { Self::Ignored }
    }
}

#[derive(Debug)]
struct EditSession {
    address: CellAddress,
    text: String,
}

#[derive(Debug)]
struct OpenFile {
    path: PathBuf,
    workbook: Workbook,
    active_sheet: String,
    view_state: FileViewState,
    selection: Option<Selection>,
    dragging: bool,
    edit: Option<EditSession>,
    undo: UndoLog,
    /// Set by structural and size changes, which the undo log does not track.
    structure_changed: bool,
    scroll: (f64, f64),
    client: (f64, f64),
    extent: GridExtent,
    /// Set after a programmatic scroll restore; the next scroll event is the echo of it.
    ignore_next_scroll: bool,
}

impl OpenFile {
    fn sheet(&self) -> Result<&Worksheet, GridError> {
        self.workbook.sheet(&self.active_sheet)
    }

    fn sheet_mut(&mut self) -> Result<&mut Worksheet, GridError> {
        self.workbook.sheet_mut(&self.active_sheet)
    }

    /// Write or clear a cell of the active sheet and record it for undo.
    fn write(&mut self, address: CellAddress, value: Option<CellValue>) -> Result<(), GridError> {
        let old = self.sheet_mut()?.put(address, value.clone());
        self.undo.push(UndoAction {
            sheet: self.active_sheet.clone(),
            address,
            old,
            new: value,
        });
        self.extent.ensure(
            address.row.saturating_add(1),
            address.column.saturating_add(1),
        );
        Ok(())
    }

    fn commit_edit(&mut self) -> Result<bool, GridError> {
        let Some(session) = self.edit.take() else {
            return Ok(false);
        };
        self.write(session.address, CellValue::from_input(&session.text))?;
        Ok(true)
    }

    fn clamped_selection(&self) -> Result<Option<CellRange>, GridError> {
        let used = self.sheet()?.used_range();
        Ok(self.selection.and_then(|selection| selection.clamped(used)))
    }

    /// Store the active sheet's view into the file view state.
    fn capture_view(&mut self) -> Result<(), GridError> {
        let sheet = self.sheet()?;
        let state = SheetViewState {
            worksheet_name: self.active_sheet.clone(),
            selection: self.selection,
            scroll_left: self.scroll.0,
            scroll_top: self.scroll.1,
            column_widths: sheet.columns.overrides.clone(),
            row_heights: sheet.rows.overrides.clone(),
        };
        self.view_state.visible_worksheet_name = self.active_sheet.clone();
        self.view_state.upsert(state);
        Ok(())
    }

    /// Make `name` the active sheet and apply its saved view, if any.
    fn restore_view(&mut self, name: &str, config: &GridConfig) -> Result<(), GridError> {
        let saved = self
            .view_state
            .sheet(name)
            .cloned()
            .unwrap_or_else(|| SheetViewState::new(name));

        let sheet = self.workbook.sheet_mut(name)?;
        for (&column, &width) in &saved.column_widths {
            sheet.columns.set(column, width);
        }
        for (&row, &height) in &saved.row_heights {
            sheet.rows.set(row, height);
        }
        let (first_row, _) = sheet.rows.index_at(saved.scroll_top);
        let (first_column, _) = sheet.columns.index_at(saved.scroll_left);
        let used = sheet.used_range();

        let mut extent = GridExtent::new(
            config.initial_rows,
            config.initial_columns,
            config.growth_threshold,
        );
        extent.ensure(
            first_row.saturating_add(config.initial_rows),
            first_column.saturating_add(config.initial_columns),
        );
        if let Some(used) = used {
            extent.ensure(
                used.end.row.saturating_add(1),
                used.end.column.saturating_add(1),
            );
        }

        self.active_sheet = name.to_string();
        self.view_state.visible_worksheet_name = name.to_string();
        self.selection = saved.selection;
        self.dragging = false;
        self.edit = None;
        self.scroll = (saved.scroll_left, saved.scroll_top);
        self.extent = extent;
        self.ignore_next_scroll = self.scroll != (0.0, 0.0);
        Ok(())
    }

    fn viewport(&self, overscan: u32) -> Result<Viewport, GridError> {
        let sheet = self.sheet()?;
        let mut viewport =
            Viewport::compute(self.scroll, self.client, &sheet.columns, &sheet.rows, overscan);
        viewport.row_count = viewport
            .row_count
            .min(self.extent.rows.saturating_sub(viewport.first_row));
        viewport.column_count = viewport
            .column_count
            .min(self.extent.columns.saturating_sub(viewport.first_column));
        Ok(viewport)
    }
}

/// Editor for one spreadsheet file at a time.
pub struct SpreadsheetEditor {
    fs: Box<dyn FileSystem>,
    clipboard: Box<dyn Clipboard>,
    notifier: Box<dyn Notifier>,
    config: GridConfig,
    file: Option<OpenFile>,
}

impl SpreadsheetEditor {
    pub fn new(
        fs: Box<dyn FileSystem>,
        clipboard: Box<dyn Clipboard>,
        notifier: Box<dyn Notifier>,
        config: GridConfig,
    ) -> Self {
        Self {
            fs,
            clipboard,
            notifier,
            config,
            file: None,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn state(&self) -> EditorState {
        match &self.file {
            None => EditorState::Closed,
            Some(OpenFile {
                edit: Some(session),
                ..
            }) => EditorState::Editing(session.address),
            Some(_) => EditorState::Loaded,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(|file| file.path.as_path())
    }

    pub fn workbook(&self) -> Option<&Workbook> {
        self.file.as_ref().map(|file| &file.workbook)
    }

    pub fn active_sheet(&self) -> Option<&Worksheet> {
        self.file.as_ref().and_then(|file| file.sheet().ok())
    }

    pub fn selection(&self) -> Option<Selection> {
        self.file.as_ref().and_then(|file| file.selection)
    }

    /// Text of the active edit session.
    pub fn edit_text(&self) -> Option<&str> {
        self.file
            .as_ref()
            .and_then(|file| file.edit.as_ref())
            .map(|session| session.text.as_str())
    }

    /// Scroll position the host should apply, `(left, top)`.
    pub fn scroll(&self) -> Option<(f64, f64)> {
        self.file.as_ref().map(|file| file.scroll)
    }

    /// Materialized `(rows, columns)`.
    pub fn extent(&self) -> Option<(u32, u32)> {
        self.file
            .as_ref()
            .map(|file| (file.extent.rows, file.extent.columns))
    }

    /// Whether there are changes since the file was opened or last saved.
    pub fn is_dirty(&self) -> bool {
        self.file
            .as_ref()
            .is_some_and(|file| file.structure_changed || !file.undo.is_clean())
    }

    /// Display text of a cell on the active sheet.
    pub fn display(&self, address: CellAddress) -> Option<String> {
        self.active_sheet()?.value(address).map(CellValue::display)
    }

    fn file(&self) -> Result<&OpenFile, GridError> {
        self.file.as_ref().ok_or(GridError::NoFileOpen)
    }

    fn file_mut(&mut self) -> Result<&mut OpenFile, GridError> {
        self.file.as_mut().ok_or(GridError::NoFileOpen)
    }

    /// Load `path` and apply `view_state`. A missing file opens as a blank workbook.
    pub fn open(
        &mut self,
        path: impl Into<PathBuf>,
        view_state: Option<FileViewState>,
    ) -> Result<(), GridError> {
        let path = path.into();
        let bytes = if self.fs.exists(&path) {
            self.fs.read_buffer(&path)
        } else {
            None
        };
        let mut workbook = match bytes {
            Some(bytes) => codec_for_path(&path).decode(&bytes)?,
            None => {
                log::debug!("nothing to load at {}, starting blank", path.display());
                Workbook::blank()
            }
        };
        if workbook.sheets().is_empty() {
            workbook = Workbook::blank();
        }
        for sheet in workbook.sheets_mut() {
            sheet.columns.default = self.config.default_column_width.max(1.0);
            sheet.rows.default = self.config.default_row_height.max(1.0);
        }

        let view_state = view_state.unwrap_or_default();
        let visible = workbook
            .sheet_names()
            .find(|name| *name == view_state.visible_worksheet_name)
            .or_else(|| workbook.sheet_names().next())
            .unwrap_or(Workbook::DEFAULT_SHEET_NAME)
            .to_string();

        let mut file = OpenFile {
            path,
            workbook,
            active_sheet: visible.clone(),
            view_state,
            selection: None,
            dragging: false,
            edit: None,
            undo: UndoLog::default(),
            structure_changed: false,
            scroll: (0.0, 0.0),
            client: (0.0, 0.0),
            extent: GridExtent::new(
                self.config.initial_rows,
                self.config.initial_columns,
                self.config.growth_threshold,
            ),
            ignore_next_scroll: false,
        };
        file.restore_view(&visible, &self.config)?;
        log::debug!(
            "opened {} with {} sheet(s), showing `{visible}`",
            file.path.display(),
            file.workbook.sheets().len()
        );
        self.file = Some(file);
        Ok(())
    }

    /// Discard the model without saving.
    pub fn close(&mut self) {
        if let Some(file) = self.file.take() {
            log::debug!("closed {}", file.path.display());
        }
    }

    /// Write the workbook and return the view state for the host to persist.
    pub fn save(&mut self) -> Result<FileViewState, GridError> {
        let file = self.file.as_mut().ok_or(GridError::NoFileOpen)?;
        file.commit_edit()?;
        file.capture_view()?;
        let bytes = codec_for_path(&file.path).encode(&file.workbook)?;
        if !self.fs.write_buffer(&file.path, &bytes) {
            return Err(GridError::WriteFailed(file.path.clone()));
        }
        file.undo.mark_clean();
        file.structure_changed = false;
        Ok(file.view_state.clone())
    }

    /// The current view state, including the active sheet's live view.
    pub fn view_state(&mut self) -> Result<FileViewState, GridError> {
        let file = self.file_mut()?;
        file.capture_view()?;
        Ok(file.view_state.clone())
    }

    pub fn set_active_sheet(&mut self, name: &str) -> Result<(), GridError> {
        let config = self.config;
        let file = self.file_mut()?;
        if !file.workbook.contains(name) {
            return Err(GridError::UnknownWorksheet(name.to_string()));
        }
        file.commit_edit()?;
        file.capture_view()?;
        file.selection = None;
        file.restore_view(name, &config)
    }

    pub fn pointer_down(&mut self, address: CellAddress, extend: bool) -> Result<(), GridError> {
        let file = self.file_mut()?;
        let editing_other = file
            .edit
            .as_ref()
            .is_some_and(|session| session.address != address);
        if editing_other {
            file.commit_edit()?;
        }
        file.selection = Some(match file.selection {
            Some(selection) if extend => Selection::new(selection.start, address),
            _ => Selection::cell(address),
        });
        file.dragging = true;
        Ok(())
    }

    /// Returns whether the selection changed.
    pub fn pointer_move(&mut self, address: CellAddress) -> Result<bool, GridError> {
        let file = self.file_mut()?;
        match &mut file.selection {
            Some(selection) if file.dragging && selection.end != address => {
                selection.end = address;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// End a drag and persist the selection into the view state.
    pub fn pointer_up(&mut self) -> Result<(), GridError> {
        let file = self.file_mut()?;
        file.dragging = false;
        file.capture_view()
    }

    /// Select `address` and start editing its current value.
    pub fn double_click(&mut self, address: CellAddress) -> Result<(), GridError> {
        let file = self.file_mut()?;
        file.commit_edit()?;
        let text = file
            .sheet()?
            .value(address)
            .map(CellValue::display)
            .unwrap_or_default();
        file.selection = Some(Selection::cell(address));
        file.edit = Some(EditSession { address, text });
        Ok(())
    }

    /// Navigate. Any edit session is committed and closed.
    pub fn arrow(&mut self, direction: Direction, extend: bool) -> Result<(), GridError> {
        let file = self.file_mut()?;
        file.commit_edit()?;
        let selection = match file.selection {
            None => Selection::cell(CellAddress::new(0, 0)),
            Some(selection) if extend => selection.extended(direction),
            Some(selection) => selection.moved(direction),
        };
        if !selection.is_unbounded() {
            file.extent.ensure(
                selection.end.row.saturating_add(1),
                selection.end.column.saturating_add(1),
            );
        }
        file.selection = Some(selection);
        Ok(())
    }

    pub fn select_row(&mut self, row: u32) -> Result<(), GridError> {
        let file = self.file_mut()?;
        file.commit_edit()?;
        file.selection = Some(Selection::entire_row(row));
        Ok(())
    }

    pub fn select_column(&mut self, column: u32) -> Result<(), GridError> {
        let file = self.file_mut()?;
        file.commit_edit()?;
        file.selection = Some(Selection::entire_column(column));
        Ok(())
    }

    /// A printable keystroke.
    ///
    /// Outside an edit session with a single cell selected, the cell is first overwritten with
    /// an empty string and the session starts from the typed character. Returns whether the
    /// keystroke was consumed.
    pub fn type_char(&mut self, c: char) -> Result<bool, GridError> {
        if c.is_control() {
            return Ok(false);
        }
        let file = self.file_mut()?;
        if let Some(session) = &mut file.edit {
            session.text.push(c);
            return Ok(true);
        }
        let Some(selection) = file.selection.filter(Selection::is_single_cell) else {
            return Ok(false);
        };
        let address = selection.start;
        file.write(address, Some(CellValue::String(String::new())))?;
        file.edit = Some(EditSession {
            address,
            text: c.to_string(),
        });
        Ok(true)
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) -> Result<bool, GridError> {
        let file = self.file_mut()?;
        match &mut file.edit {
            Some(session) => {
                session.text = text.into();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Write the edit text to its cell (Enter). Returns whether a session was open.
    pub fn commit_edit(&mut self) -> Result<bool, GridError> {
        self.file_mut()?.commit_edit()
    }

    /// Focus left the grid: commit any edit and end any drag.
    pub fn blur(&mut self) -> Result<bool, GridError> {
        let file = self.file_mut()?;
        file.dragging = false;
        file.commit_edit()
    }

    /// Clear every cell in the selection. Returns how many cells were cleared.
    pub fn delete(&mut self) -> Result<usize, GridError> {
        let file = self.file_mut()?;
        if file.edit.is_some() {
            return Ok(0);
        }
        let Some(range) = file.clamped_selection()? else {
            return Ok(0);
        };
        let mut targets: Vec<CellAddress> = file
            .sheet()?
            .cells()
            .map(|(address, _)| address)
            .filter(|address| range.contains(*address))
            .collect();
        targets.sort();
        for &address in &targets {
            file.write(address, None)?;
        }
        Ok(targets.len())
    }

    /// Copy the selection as tab-separated text. Returns `false` when there was nothing to
    /// copy or the clipboard rejected it (the user is notified of the latter).
    pub fn copy(&self) -> Result<bool, GridError> {
        let file = self.file()?;
        let Some(range) = file.clamped_selection()? else {
            return Ok(false);
        };
        let sheet = file.sheet()?;
        let rows: Vec<Vec<String>> = (range.start.row..=range.end.row)
            .map(|row| {
                (range.start.column..=range.end.column)
                    .map(|column| {
                        sheet
                            .value(CellAddress::new(row, column))
                            .map(CellValue::display)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        let text = to_tsv(&rows);
        if self.clipboard.write_text(&text) {
            return Ok(true);
        }
        log::warn!(
            "clipboard rejected {} copied cell(s)",
            u64::from(range.rows()) * u64::from(range.columns())
        );
        self.notifier
            .notify(Notification::error("Could not copy the selection to the clipboard."));
        Ok(false)
    }

    /// Paste tab-separated clipboard text at the top-left of the selection and select the
    /// pasted block. On failure the user is notified and the selection is left as it was.
    pub fn paste(&mut self) -> Result<Option<CellRange>, GridError> {
        let file = self.file.as_mut().ok_or(GridError::NoFileOpen)?;
        let Some(selection) = file.selection else {
            return Ok(None);
        };
        let Some(text) = self.clipboard.read_text() else {
            log::warn!("clipboard could not be read");
            self.notifier
                .notify(Notification::error("Could not read the clipboard."));
            return Ok(None);
        };
        let rows = parse_tsv(&text);
        if rows.is_empty() {
            return Ok(None);
        }

        file.commit_edit()?;
        let anchor = selection.range().start;
        let width = rows.iter().map(Vec::len).max().unwrap_or(1).max(1);
        for (r, row) in rows.iter().enumerate() {
            for (c, field) in row.iter().enumerate() {
                file.write(anchor.offset(r as i64, c as i64), CellValue::from_input(field))?;
            }
        }
        let end = anchor.offset(rows.len() as i64 - 1, width as i64 - 1);
        let pasted = CellRange::spanning(anchor, end);
        // Empty fields clear cells without growing the used range.
        file.sheet_mut()?.include_range(pasted);
        file.extent
            .ensure(end.row.saturating_add(1), end.column.saturating_add(1));
        file.selection = Some(Selection::new(anchor, end));
        Ok(Some(pasted))
    }

    fn restructure(&mut self, change: impl FnOnce(&mut Worksheet)) -> Result<(), GridError> {
        let file = self.file_mut()?;
        file.commit_edit()?;
        change(file.sheet_mut()?);
        // Recorded addresses no longer line up with the shifted cells.
        file.undo.clear();
        file.structure_changed = true;
        Ok(())
    }

    pub fn insert_row(&mut self, row: u32) -> Result<(), GridError> {
        self.restructure(|sheet| sheet.insert_row(row))
    }

    pub fn delete_row(&mut self, row: u32) -> Result<(), GridError> {
        self.restructure(|sheet| sheet.delete_row(row))
    }

    pub fn insert_column(&mut self, column: u32) -> Result<(), GridError> {
        self.restructure(|sheet| sheet.insert_column(column))
    }

    pub fn delete_column(&mut self, column: u32) -> Result<(), GridError> {
        self.restructure(|sheet| sheet.delete_column(column))
    }

    /// Revert the most recent cell write. An open edit session is dropped.
    pub fn undo(&mut self) -> Result<bool, GridError> {
        let file = self.file_mut()?;
        file.edit = None;
        let Some(action) = file.undo.pop() else {
            return Ok(false);
        };
        file.workbook
            .sheet_mut(&action.sheet)?
            .put(action.address, action.old);
        Ok(true)
    }

    /// Handle a scroll event from the host.
    ///
    /// Returns `None` for the echo of a programmatic restore, which must not overwrite the
    /// restored position.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) -> Result<Option<Viewport>, GridError> {
        let overscan = self.config.overscan;
        let file = self.file_mut()?;
        file.client = (metrics.client_width, metrics.client_height);
        if std::mem::take(&mut file.ignore_next_scroll) {
            log::trace!("ignoring scroll echo of a restored position");
            return Ok(None);
        }
        file.scroll = (metrics.scroll_left, metrics.scroll_top);
        file.extent.on_scroll(metrics);
        file.viewport(overscan).map(Some)
    }

    pub fn set_client_size(&mut self, width: f64, height: f64) -> Result<Viewport, GridError> {
        let overscan = self.config.overscan;
        let file = self.file_mut()?;
        file.client = (width, height);
        file.viewport(overscan)
    }

    pub fn viewport(&self) -> Result<Viewport, GridError> {
        self.file()?.viewport(self.config.overscan)
    }

    /// Pixel size of the materialized grid, `(width, height)`.
    pub fn content_size(&self) -> Result<(f64, f64), GridError> {
        let file = self.file()?;
        let sheet = file.sheet()?;
        Ok((
            sheet.columns.offset_of(file.extent.columns),
            sheet.rows.offset_of(file.extent.rows),
        ))
    }

    pub fn set_column_width(&mut self, column: u32, width: f64) -> Result<(), GridError> {
        let file = self.file_mut()?;
        file.sheet_mut()?.columns.set(column, width.max(1.0));
        file.structure_changed = true;
        Ok(())
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) -> Result<(), GridError> {
        let file = self.file_mut()?;
        file.sheet_mut()?.rows.set(row, height.max(1.0));
        file.structure_changed = true;
        Ok(())
    }

    /// Write a typed value. `None` clears the cell.
    pub fn write_cell(
        &mut self,
        address: CellAddress,
        value: Option<CellValue>,
    ) -> Result<(), GridError> {
        self.file_mut()?.write(address, value)
    }

    /// Write a dynamically typed value from the host. Values cells cannot hold are rejected
    /// with [`GridError::UnsupportedCellType`].
    pub fn write_json(&mut self, address: CellAddress, value: &Value) -> Result<(), GridError> {
        let value = CellValue::from_json(value)?;
        self.write_cell(address, Some(value))
    }

    pub fn execute(&mut self, command: GridCommand) -> Result<GridOutcome, GridError> {
        match command {
            GridCommand::PointerDown { address, extend } => {
                self.pointer_down(address, extend)?;
                Ok(GridOutcome::Success)
            }
            GridCommand::PointerMove(address) => self.pointer_move(address).map(Into::into),
            GridCommand::PointerUp => {
                self.pointer_up()?;
                Ok(GridOutcome::Success)
            }
            GridCommand::DoubleClick(address) => {
                self.double_click(address)?;
                Ok(GridOutcome::Success)
            }
            GridCommand::Arrow { direction, extend } => {
                self.arrow(direction, extend)?;
                Ok(GridOutcome::Success)
            }
            GridCommand::SelectRow(row) => {
                self.select_row(row)?;
                Ok(GridOutcome::Success)
            }
            GridCommand::SelectColumn(column) => {
                self.select_column(column)?;
                Ok(GridOutcome::Success)
            }
            GridCommand::TypeChar(c) => self.type_char(c).map(Into::into),
            GridCommand::SetEditText(text) => self.set_edit_text(text).map(Into::into),
            GridCommand::CommitEdit => self.commit_edit().map(Into::into),
            GridCommand::Blur => self.blur().map(Into::into),
            GridCommand::Delete => self.delete().map(|cleared| (cleared > 0).into()),
            GridCommand::Copy => {
                let had_range = self.file()?.clamped_selection()?.is_some();
                Ok(match self.copy()? {
                    true => GridOutcome::Success,
                    false if had_range => GridOutcome::Notified,
                    false => GridOutcome::Ignored,
                })
            }
            GridCommand::Paste => {
                let has_selection = self.selection().is_some();
                Ok(match self.paste()? {
                    Some(range) => GridOutcome::Pasted(range),
                    None if has_selection => GridOutcome::Notified,
                    None => GridOutcome::Ignored,
                })
            }
            GridCommand::InsertRow(row) => self.insert_row(row).map(|()| GridOutcome::Success),
            GridCommand::DeleteRow(row) => self.delete_row(row).map(|()| GridOutcome::Success),
            GridCommand::InsertColumn(column) => {
                self.insert_column(column).map(|()| GridOutcome::Success)
            }
            GridCommand::DeleteColumn(column) => {
                self.delete_column(column).map(|()| GridOutcome::Success)
            }
            GridCommand::Undo => self.undo().map(Into::into),
            GridCommand::Scroll(metrics) => Ok(match self.on_scroll(&metrics)? {
                Some(viewport) => GridOutcome::Viewport(viewport),
                None => GridOutcome::Ignored,
            }),
            GridCommand::ResizeColumn { column, width } => self
                .set_column_width(column, width)
                .map(|()| GridOutcome::Success),
            GridCommand::ResizeRow { row, height } => self
                .set_row_height(row, height)
                .map(|()| GridOutcome::Success),
            GridCommand::SetActiveSheet(name) => self
                .set_active_sheet(&name)
                .map(|()| GridOutcome::Success),
        }
    }
}
