//! `ert-editor-grid` - the spreadsheet engine behind the tabular file editor.
//!
//! The model is a [`Workbook`] of named [`Worksheet`]s, each a sparse map from
//! [`CellAddress`] to a typed [`Cell`] plus a used range that grows with every write.
//! [`SpreadsheetEditor`] layers the interactive state on top: selection, edit session,
//! clipboard, undo, viewport virtualization and persisted [`FileViewState`].
//!
//! I/O goes through collaborator traits ([`FileSystem`], [`Clipboard`], [`Notifier`]) so hosts
//! and tests can supply their own.

pub mod address;
pub mod cell;
pub mod clipboard;
pub mod codec;
pub mod config;
pub mod editor;
pub mod error;
pub mod fs;
pub mod selection;
pub mod undo;
pub mod view_state;
pub mod viewport;
pub mod workbook;
pub mod worksheet;

pub use address::{CellAddress, CellRange, UNBOUNDED, column_letters};
pub use cell::{Cell, CellType, CellValue};
pub use clipboard::{
    Clipboard, MemoryClipboard, MemoryNotifier, Notification, NotificationLevel, Notifier,
    parse_tsv, to_tsv,
};
pub use codec::{CsvCodec, SheetJsonCodec, WorkbookCodec, codec_for_path};
pub use config::GridConfig;
pub use editor::{EditorState, GridCommand, GridOutcome, SpreadsheetEditor};
pub use error::GridError;
pub use fs::{FileSystem, MemoryFileSystem, StdFileSystem};
pub use selection::{Direction, Selection};
pub use undo::{UndoAction, UndoLog};
pub use view_state::{FileViewState, SheetViewState};
pub use viewport::{GridExtent, ScrollMetrics, SizeOverrides, Viewport};
pub use workbook::Workbook;
pub use worksheet::{DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT, Worksheet};
