//! DIST grammar: `NAME KEYWORD arg...`.
//!
//! Unknown words are identifiers, never errors; validation happens on the token stream.

use super::rules::{Action, Case, GrammarSpec, Matcher, RuleEntry, RuleSpec, Transition};
use super::{LexerState, TokenKind};
use crate::grammar::dist::DIST_KEYWORDS;
use crate::grammar::enums::is_numeric_literal;

pub(super) fn grammar() -> GrammarSpec {
    use LexerState::*;

    let whitespace: Vec<RuleEntry> = vec![
        RuleSpec::token(r"[ \t]+", TokenKind::White).into(),
        RuleSpec::token(r"--.*", TokenKind::Comment).into(),
    ];

    let root = vec![
        RuleEntry::Include(Whitespace),
        RuleSpec::cases(
            r"\S+",
            vec![
                Case::new(Matcher::Keyword, TokenKind::Keyword).then(Action::push(AfterKeyword)),
                Case::new(Matcher::Any, TokenKind::Identifier)
                    .then(Action::push(HasIdentifier).at_eos(Transition::Stay)),
            ],
        )
        .into(),
    ];

    let has_identifier = vec![
        RuleEntry::Include(Whitespace),
        RuleSpec::cases(
            r"\S+",
            vec![
                Case::new(Matcher::Keyword, TokenKind::Keyword)
                    .then(Action::switch(AfterKeyword)),
                Case::new(Matcher::Any, TokenKind::Identifier)
                    .then(Action::STAY.at_eos(Transition::Pop)),
            ],
        )
        .into(),
    ];

    let after_keyword = vec![
        RuleEntry::Include(Whitespace),
        RuleSpec::cases(
            r"\S+",
            vec![
                Case::new(Matcher::Predicate(is_numeric_literal), TokenKind::Number)
                    .then(Action::STAY.at_eos(Transition::Pop)),
                Case::new(Matcher::Any, TokenKind::Identifier)
                    .then(Action::STAY.at_eos(Transition::Pop)),
            ],
        )
        .into(),
    ];

    GrammarSpec {
        name: "dist",
        default_kind: TokenKind::Identifier,
        keywords: DIST_KEYWORDS,
        states: vec![
            (Root, root),
            (Whitespace, whitespace),
            (HasIdentifier, has_identifier),
            (AfterKeyword, after_keyword),
        ],
    }
}
