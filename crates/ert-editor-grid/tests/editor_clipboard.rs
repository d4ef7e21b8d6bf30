use std::sync::Arc;

use ert_editor_grid::{
    CellAddress, CellRange, Clipboard, GridCommand, GridConfig, GridOutcome, MemoryClipboard,
    MemoryFileSystem, MemoryNotifier, NotificationLevel, Selection, SpreadsheetEditor,
};
use pretty_assertions::assert_eq;

struct Harness {
    editor: SpreadsheetEditor,
    clipboard: Arc<MemoryClipboard>,
    notifier: Arc<MemoryNotifier>,
}

fn harness(clipboard: MemoryClipboard, csv: &str) -> Harness {
    let clipboard = Arc::new(clipboard);
    let notifier = Arc::new(MemoryNotifier::new());
    let mut editor = SpreadsheetEditor::new(
        Box::new(MemoryFileSystem::new().with_file("priors.csv", csv)),
        Box::new(clipboard.clone()),
        Box::new(notifier.clone()),
        GridConfig::default(),
    );
    editor.open("priors.csv", None).unwrap();
    Harness {
        editor,
        clipboard,
        notifier,
    }
}

fn a(row: u32, column: u32) -> CellAddress {
    CellAddress::new(row, column)
}

fn select(editor: &mut SpreadsheetEditor, from: CellAddress, to: CellAddress) {
    editor.pointer_down(from, false).unwrap();
    editor.pointer_move(to).unwrap();
    editor.pointer_up().unwrap();
}

fn block(editor: &SpreadsheetEditor, top_left: CellAddress) -> Vec<Vec<Option<String>>> {
    (0..3)
        .map(|r| {
            (0..3)
                .map(|c| editor.display(top_left.offset(r, c)))
                .collect()
        })
        .collect()
}

const BLOCK: &str = "PORO,0.3,TRUE\nPERM,150,x y\nNTG,,2024-01-31\n";

#[test]
fn test_copy_paste_reproduces_block() {
    let mut h = harness(MemoryClipboard::new(), BLOCK);
    let original = block(&h.editor, a(0, 0));

    // Select bottom-right to top-left; range operations normalize.
    select(&mut h.editor, a(2, 2), a(0, 0));
    assert!(h.editor.copy().unwrap());
    assert_eq!(
        h.clipboard.read_text().unwrap(),
        "PORO\t0.3\tTRUE\nPERM\t150\tx y\nNTG\t\t2024-01-31T00:00:00"
    );

    h.editor.pointer_down(a(10, 5), false).unwrap();
    let pasted = h.editor.paste().unwrap();
    assert_eq!(
        pasted,
        Some(CellRange::spanning(a(10, 5), a(12, 7)))
    );
    assert_eq!(block(&h.editor, a(10, 5)), original);
    assert_eq!(
        h.editor.selection(),
        Some(Selection::new(a(10, 5), a(12, 7)))
    );
    assert_eq!(
        h.editor.active_sheet().unwrap().used_range(),
        Some(CellRange::spanning(a(0, 0), a(12, 7)))
    );
}

#[test]
fn test_paste_starts_at_normalized_top_left() {
    let mut h = harness(MemoryClipboard::new(), "1,2\n");
    h.clipboard.write_text("a\tb\nc\td");
    select(&mut h.editor, a(6, 4), a(5, 3));
    h.editor.paste().unwrap();
    assert_eq!(h.editor.display(a(5, 3)).as_deref(), Some("a"));
    assert_eq!(h.editor.display(a(6, 4)).as_deref(), Some("d"));
}

#[test]
fn test_copy_entire_row_clamps_to_used_range() {
    let mut h = harness(MemoryClipboard::new(), "a,b,c\nd,e,f\n");
    h.editor.select_row(1).unwrap();
    assert!(h.editor.copy().unwrap());
    assert_eq!(h.clipboard.read_text().as_deref(), Some("d\te\tf"));
}

#[test]
fn test_clipboard_failure_notifies_and_keeps_selection() {
    let mut h = harness(MemoryClipboard::unavailable(), BLOCK);
    select(&mut h.editor, a(0, 0), a(1, 1));
    let before = h.editor.selection();

    assert_eq!(
        h.editor.execute(GridCommand::Copy).unwrap(),
        GridOutcome::Notified
    );
    assert_eq!(
        h.editor.execute(GridCommand::Paste).unwrap(),
        GridOutcome::Notified
    );
    assert_eq!(h.editor.selection(), before);
    assert_eq!(h.editor.display(a(0, 0)).as_deref(), Some("PORO"));

    let received = h.notifier.received();
    assert_eq!(received.len(), 2);
    assert!(received.iter().all(|n| n.level == NotificationLevel::Error));
}

#[test]
fn test_delete_clears_selection_and_keeps_used_range() {
    let mut h = harness(MemoryClipboard::new(), BLOCK);
    let used = h.editor.active_sheet().unwrap().used_range();
    h.editor.select_column(1).unwrap();
    assert_eq!(h.editor.delete().unwrap(), 2);
    assert_eq!(h.editor.display(a(0, 1)), None);
    assert_eq!(h.editor.display(a(1, 1)), None);
    assert_eq!(h.editor.display(a(0, 0)).as_deref(), Some("PORO"));
    assert_eq!(h.editor.active_sheet().unwrap().used_range(), used);
}

#[test]
fn test_quotes_survive_copy_and_paste() {
    let mut h = harness(MemoryClipboard::new(), "1\n");
    h.clipboard.write_text("say \"hi\"\t\"abc\n\"quoted\" text\tz");
    h.editor.pointer_down(a(0, 0), false).unwrap();
    assert_eq!(
        h.editor.paste().unwrap(),
        Some(CellRange::spanning(a(0, 0), a(1, 1)))
    );
    assert_eq!(h.editor.display(a(0, 0)).as_deref(), Some("say \"hi\""));
    assert_eq!(h.editor.display(a(0, 1)).as_deref(), Some("\"abc"));
    assert_eq!(h.editor.display(a(1, 0)).as_deref(), Some("\"quoted\" text"));

    assert!(h.editor.copy().unwrap());
    assert_eq!(
        h.clipboard.read_text().as_deref(),
        Some("say \"hi\"\t\"abc\n\"quoted\" text\tz")
    );
}

#[test]
fn test_unclosed_quote_does_not_merge_cells() {
    let mut h = harness(MemoryClipboard::new(), "1\n");
    h.clipboard.write_text("\"abc\tdef\nghi\tjkl");
    h.editor.pointer_down(a(0, 0), false).unwrap();
    h.editor.paste().unwrap();
    assert_eq!(h.editor.display(a(0, 0)).as_deref(), Some("\"abc"));
    assert_eq!(h.editor.display(a(0, 1)).as_deref(), Some("def"));
    assert_eq!(h.editor.display(a(1, 0)).as_deref(), Some("ghi"));
    assert_eq!(h.editor.display(a(1, 1)).as_deref(), Some("jkl"));
}

#[test]
fn test_paste_with_empty_edge_grows_used_range() {
    let mut h = harness(MemoryClipboard::new(), "1\n");
    h.clipboard.write_text("x\t\n\t\n");
    h.editor.pointer_down(a(2, 2), false).unwrap();
    let pasted = h.editor.paste().unwrap();
    assert_eq!(pasted, Some(CellRange::spanning(a(2, 2), a(3, 3))));
    assert_eq!(h.editor.display(a(3, 3)), None);
    assert_eq!(
        h.editor.active_sheet().unwrap().used_range(),
        Some(CellRange::spanning(a(0, 0), a(3, 3)))
    );
}
