//! Keyword completion.
//!
//! No ranking happens here; the host editor filters the list by the typed prefix.

use ert_editor_lang::{Keyword, Language, Position};
use serde::Serialize;

use crate::config::CompletionOptions;
use crate::text::word_until_position;

/// An editor range. Lines and columns are 1-based, `end_column` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_line_number: u32,
    pub start_column: u32,
    pub end_line_number: u32,
    pub end_column: u32,
}

impl Range {
    /// A range within a single line.
    pub fn on_line(line_number: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            start_line_number: line_number,
            start_column,
            end_line_number: line_number,
            end_column,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionItemKind {
    Keyword,
}

/// How the host treats `insert_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertTextRule {
    Plain,
    /// `${n:label}` placeholders are expanded by the host.
    Snippet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub label: &'static str,
    pub kind: CompletionItemKind,
    pub detail: String,
    pub documentation: &'static str,
    pub insert_text: String,
    pub insert_text_rules: InsertTextRule,
    /// The text replaced on accept.
    pub range: Range,
}

impl CompletionItem {
    fn for_keyword(keyword: &'static Keyword, snippet: bool, range: Range) -> Self {
        let (insert_text, insert_text_rules) = if snippet {
            (keyword.snippet(), InsertTextRule::Snippet)
        } else {
            (keyword.label.to_string(), InsertTextRule::Plain)
        };
        Self {
            label: keyword.label,
            kind: CompletionItemKind::Keyword,
            detail: usage_line(keyword),
            documentation: keyword.documentation,
            insert_text,
            insert_text_rules,
            range,
        }
    }
}

/// `LABEL usage`, as shown in completion details and hovers.
pub(crate) fn usage_line(keyword: &Keyword) -> String {
    if keyword.usage.is_empty() {
        keyword.label.to_string()
    } else {
        format!("{} {}", keyword.label, keyword.usage)
    }
}

/// Completion items for the cursor at `position` on `line`.
///
/// ERT keywords are only offered while the word being typed starts the line. DIST keywords
/// are offered anywhere and always insert their snippet.
pub fn complete(
    language: Language,
    line: &str,
    position: Position,
    options: &CompletionOptions,
) -> Vec<CompletionItem> {
    let word = word_until_position(line, position.column);
    let range = Range::on_line(position.line_number, word.start_column, word.end_column);

    let snippet = match language {
        Language::Ert if word.start_column != 1 => return Vec::new(),
        Language::Ert => options.snippets,
        Language::Dist => true,
    };

    language
        .keywords()
        .iter()
        .map(|keyword| CompletionItem::for_keyword(keyword, snippet, range))
        .collect()
}
