//! Word lookup around a cursor position. Columns are 1-based character columns.

use ert_editor_lang::Word;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The part of the word before `column`: the run of word characters ending at the cursor.
///
/// An empty word starting at `column` is returned when the cursor does not follow a word
/// character.
pub fn word_until_position(line: &str, column: u32) -> Word {
    let chars: Vec<char> = line.chars().collect();
    let cursor = (column.max(1) as usize - 1).min(chars.len());
    let start = chars[..cursor]
        .iter()
        .rposition(|c| !is_word_char(*c))
        .map_or(0, |idx| idx + 1);
    Word {
        text: chars[start..cursor].iter().collect(),
        start_column: start as u32 + 1,
        end_column: cursor as u32 + 1,
    }
}

/// The whole word touching `column`, if any.
pub fn word_at_position(line: &str, column: u32) -> Option<Word> {
    let chars: Vec<char> = line.chars().collect();
    let cursor = (column.max(1) as usize - 1).min(chars.len());
    let start = chars[..cursor]
        .iter()
        .rposition(|c| !is_word_char(*c))
        .map_or(0, |idx| idx + 1);
    let end = chars[cursor..]
        .iter()
        .position(|c| !is_word_char(*c))
        .map_or(chars.len(), |idx| cursor + idx);
    if start == end {
        return None;
    }
    Some(Word {
        text: chars[start..end].iter().collect(),
        start_column: start as u32 + 1,
        end_column: end as u32 + 1,
    })
}
