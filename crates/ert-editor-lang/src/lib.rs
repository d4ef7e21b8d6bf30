//! `ert-editor-lang` - grammar tables, line tokenizer and validation for the ERT configuration
//! language and its DIST prior sub-language.
//!
//! Everything here is synchronous and side-effect free: tokenizing a line depends on the line
//! text alone, and the keyword tables are immutable statics.

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod settings;
pub mod validation;

pub use error::LexerError;
pub use grammar::{
    Keyword, KeywordParameter, KeywordTag, Language, ParameterOption, Signature, find_keyword,
};
pub use lexer::{LexerGrammar, LexerState, Position, Token, TokenKind, Word};
pub use settings::{MemorySettings, SettingsStore};
pub use validation::{Diagnostic, Severity, apply_ert_rules, diagnostics, validate_dist_line};

/// Tokenize a single line as line 1.
pub fn tokenize(language: Language, line: &str) -> Vec<Token> {
    tokenize_line(language, line, 1)
}

/// Tokenize a single line. `line_number` is 1-based.
///
/// ERT lines are additionally checked against the keyword's parameter schema, see
/// [`apply_ert_rules`].
pub fn tokenize_line(language: Language, line: &str, line_number: u32) -> Vec<Token> {
    match language {
        Language::Dist => lexer::dist_grammar().tokenize_line(line, line_number),
        Language::Ert => {
            let mut tokens = lexer::ert_grammar().tokenize_line(line, line_number);
            apply_ert_rules(&mut tokens);
            tokens
        }
    }
}

/// Tokenize every line of `text`. Lines are independent; the result has one entry per line.
pub fn tokenize_document(language: Language, text: &str) -> Vec<Vec<Token>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| tokenize_line(language, line, idx as u32 + 1))
        .collect()
}
