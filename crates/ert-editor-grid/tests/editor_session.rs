use std::path::Path;
use std::sync::Arc;

use ert_editor_grid::{
    CellAddress, CellValue, Direction, EditorState, FileSystem, FileViewState, GridConfig,
    GridError, MemoryClipboard, MemoryFileSystem, MemoryNotifier, ScrollMetrics, Selection,
    SheetJsonCodec, SpreadsheetEditor, Workbook, WorkbookCodec, Worksheet,
};
use pretty_assertions::assert_eq;

fn a(row: u32, column: u32) -> CellAddress {
    CellAddress::new(row, column)
}

fn new_editor(fs: Arc<MemoryFileSystem>) -> SpreadsheetEditor {
    SpreadsheetEditor::new(
        Box::new(fs),
        Box::new(MemoryClipboard::new()),
        Box::new(MemoryNotifier::new()),
        GridConfig::default(),
    )
}

fn two_sheet_file() -> Arc<MemoryFileSystem> {
    let mut workbook = Workbook::new();
    let mut priors = Worksheet::new("Priors");
    priors.set(a(0, 0), CellValue::String("PORO".into()));
    priors.set(a(0, 1), CellValue::Number(0.3));
    workbook.push(priors);
    workbook.push(Worksheet::new("Notes"));
    let bytes = SheetJsonCodec.encode(&workbook).unwrap();
    Arc::new(MemoryFileSystem::new().with_file("model.json", bytes))
}

fn scroll(left: f64, top: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left: left,
        scroll_top: top,
        scroll_width: 5000.0,
        scroll_height: 5000.0,
        client_width: 800.0,
        client_height: 600.0,
    }
}

#[test]
fn test_undo_chain_restores_each_write() {
    let mut editor = new_editor(two_sheet_file());
    editor.open("model.json", None).unwrap();

    editor.write_cell(a(0, 1), Some(CellValue::Number(0.25))).unwrap();
    editor.write_cell(a(0, 1), Some(CellValue::Number(0.2))).unwrap();
    editor.write_cell(a(3, 3), Some(CellValue::Boolean(true))).unwrap();
    assert!(editor.is_dirty());

    assert!(editor.undo().unwrap());
    assert_eq!(editor.display(a(3, 3)), None);
    assert!(editor.undo().unwrap());
    assert_eq!(editor.display(a(0, 1)).as_deref(), Some("0.25"));
    assert!(editor.undo().unwrap());
    assert_eq!(editor.display(a(0, 1)).as_deref(), Some("0.3"));
    assert!(!editor.undo().unwrap());
    assert!(!editor.is_dirty());
}

#[test]
fn test_undo_after_typing_restores_previous_value() {
    let mut editor = new_editor(two_sheet_file());
    editor.open("model.json", None).unwrap();
    editor.pointer_down(a(0, 0), false).unwrap();
    editor.type_char('S').unwrap();
    editor.commit_edit().unwrap();
    assert_eq!(editor.display(a(0, 0)).as_deref(), Some("S"));

    // Committing and the initial clear are separate writes.
    editor.undo().unwrap();
    assert_eq!(editor.display(a(0, 0)).as_deref(), Some(""));
    editor.undo().unwrap();
    assert_eq!(editor.display(a(0, 0)).as_deref(), Some("PORO"));
}

#[test]
fn test_view_state_survives_save_and_reopen() {
    let fs = two_sheet_file();
    let mut editor = new_editor(fs.clone());
    editor.open("model.json", None).unwrap();

    editor.set_active_sheet("Notes").unwrap();
    editor.set_active_sheet("Priors").unwrap();
    editor.on_scroll(&scroll(120.0, 480.0)).unwrap();
    editor.pointer_down(a(2, 1), false).unwrap();
    editor.pointer_move(a(4, 3)).unwrap();
    editor.pointer_up().unwrap();
    editor.set_column_width(1, 180.0).unwrap();
    editor.set_row_height(0, 40.0).unwrap();
    let saved = editor.save().unwrap();
    assert!(!editor.is_dirty());

    let blob = saved.to_json().unwrap();
    editor.close();
    assert_eq!(editor.state(), EditorState::Closed);

    let mut reopened = new_editor(fs);
    reopened
        .open("model.json", FileViewState::decode_stored(&blob))
        .unwrap();
    assert_eq!(reopened.active_sheet().unwrap().name(), "Priors");
    assert_eq!(reopened.scroll(), Some((120.0, 480.0)));
    assert_eq!(
        reopened.selection(),
        Some(Selection::new(a(2, 1), a(4, 3)))
    );
    let sheet = reopened.active_sheet().unwrap();
    assert_eq!(sheet.columns.size(1), 180.0);
    assert_eq!(sheet.rows.size(0), 40.0);
    assert_eq!(sheet.value(a(0, 1)), Some(&CellValue::Number(0.3)));
    assert_eq!(reopened.view_state().unwrap(), saved);
}

#[test]
fn test_switching_sheets_keeps_per_sheet_views() {
    let mut editor = new_editor(two_sheet_file());
    editor.open("model.json", None).unwrap();
    editor.pointer_down(a(1, 1), false).unwrap();
    editor.pointer_up().unwrap();

    editor.set_active_sheet("Notes").unwrap();
    assert_eq!(editor.active_sheet().unwrap().name(), "Notes");
    assert_eq!(editor.selection(), None);

    editor.set_active_sheet("Priors").unwrap();
    assert_eq!(editor.selection(), Some(Selection::cell(a(1, 1))));
    assert!(matches!(
        editor.set_active_sheet("Missing"),
        Err(GridError::UnknownWorksheet(_))
    ));
}

#[test]
fn test_restored_scroll_echo_is_ignored_once() {
    let fs = two_sheet_file();
    let mut editor = new_editor(fs);
    let mut state = FileViewState {
        visible_worksheet_name: "Priors".into(),
        ..FileViewState::default()
    };
    let mut priors = ert_editor_grid::SheetViewState::new("Priors");
    priors.scroll_top = 240.0;
    priors.selection = Some(Selection::cell(a(10, 0)));
    state.upsert(priors);
    editor.open("model.json", Some(state)).unwrap();

    // The host applies the restored position; its scroll event must not clobber it.
    assert_eq!(editor.on_scroll(&scroll(0.0, 0.0)).unwrap(), None);
    assert_eq!(editor.scroll(), Some((0.0, 240.0)));
    assert_eq!(editor.selection(), Some(Selection::cell(a(10, 0))));

    let viewport = editor.on_scroll(&scroll(0.0, 264.0)).unwrap().unwrap();
    assert_eq!(viewport.first_row, 11);
    assert_eq!(editor.scroll(), Some((0.0, 264.0)));
}

#[test]
fn test_scrolling_near_the_end_grows_the_grid() {
    let mut editor = new_editor(Arc::new(MemoryFileSystem::new()));
    editor.open("empty.csv", None).unwrap();
    let (rows, columns) = editor.extent().unwrap();

    editor.on_scroll(&scroll(0.0, 100.0)).unwrap();
    assert_eq!(editor.extent(), Some((rows, columns)));

    // 96% of the 4400px scrollable height.
    editor.on_scroll(&scroll(0.0, 4224.0)).unwrap();
    assert_eq!(editor.extent(), Some((rows + 1, columns)));

    // Scrolling back up never grows.
    editor.on_scroll(&scroll(0.0, 4200.0)).unwrap();
    assert_eq!(editor.extent(), Some((rows + 1, columns)));
}

#[test]
fn test_viewport_has_overscan() {
    let mut editor = new_editor(Arc::new(MemoryFileSystem::new()));
    editor.open("empty.csv", None).unwrap();
    let viewport = editor.set_client_size(400.0, 240.0).unwrap();
    assert_eq!(viewport.first_row, 0);
    assert_eq!(viewport.row_count, 10 + 2);
    assert_eq!(viewport.column_count, 4 + 2);
}

#[test]
fn test_structural_edits_shift_cells_and_mark_dirty() {
    let mut editor = new_editor(two_sheet_file());
    editor.open("model.json", None).unwrap();
    editor.insert_column(0).unwrap();
    assert_eq!(editor.display(a(0, 1)).as_deref(), Some("PORO"));
    assert!(editor.is_dirty());
    editor.delete_row(0).unwrap();
    assert_eq!(editor.display(a(0, 1)), None);
    assert!(!editor.undo().unwrap());
}

#[test]
fn test_save_writes_through_codec() {
    let fs = Arc::new(MemoryFileSystem::new());
    let mut editor = new_editor(fs.clone());
    editor.open("new.csv", None).unwrap();
    editor.pointer_down(a(0, 0), false).unwrap();
    editor.type_char('1').unwrap();
    editor.arrow(Direction::Right, false).unwrap();
    editor.type_char('x').unwrap();
    editor.save().unwrap();
    assert_eq!(
        fs.read_string(Path::new("new.csv")).as_deref(),
        Some("1,x\n")
    );
}
