//! Token-stream validation.
//!
//! DIST lines are validated as a whole ([`validate_dist_line`]). ERT validation refines the
//! kinds the grammar assigned ([`apply_ert_rules`]) and reports problems as [`Diagnostic`]s.

use crate::grammar::enums::is_numeric_literal;
use crate::grammar::{Keyword, Language};
use crate::lexer::{Token, TokenKind};
use serde::Serialize;

/// Whether a tokenized DIST line is a complete prior definition.
///
/// Requires `NAME KEYWORD n1 .. nk` where `k` is the keyword's declared parameter count and
/// every argument is a number. Whitespace and comments are ignored.
pub fn validate_dist_line(tokens: &[Token]) -> bool {
    let significant: Vec<&Token> = tokens.iter().filter(|t| t.kind.is_significant()).collect();
    let [name, keyword, args @ ..] = significant.as_slice() else {
        return false;
    };
    if name.kind != TokenKind::Identifier || keyword.kind != TokenKind::Keyword {
        return false;
    }
    let Some(keyword) = keyword.keyword else {
        return false;
    };
    keyword.num_params() == args.len() && args.iter().all(|t| t.kind == TokenKind::Number)
}

/// An argument of an ERT keyword, as indices into the line's token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Argument {
    Positional(usize),
    /// `NAME:VALUE`; the value is missing for `NAME:`.
    Named { name: usize, value: Option<usize> },
}

struct Arguments {
    keyword: Option<usize>,
    args: Vec<Argument>,
    unmatched_parens: Vec<usize>,
}

fn is_delimiter(token: &Token, text: &str) -> bool {
    token.kind == TokenKind::Delimiter && token.text() == text
}

fn adjacent(left: &Token, right: &Token) -> bool {
    left.value.end_column == right.value.start_column
}

/// Split an ERT line into its keyword and arguments. Tokens inside parentheses belong to the
/// preceding argument and are skipped.
fn split_arguments(tokens: &[Token]) -> Arguments {
    let significant: Vec<usize> = (0..tokens.len())
        .filter(|&i| tokens[i].kind.is_significant())
        .collect();
    let Some((&keyword, rest)) = significant.split_first() else {
        return Arguments {
            keyword: None,
            args: Vec::new(),
            unmatched_parens: Vec::new(),
        };
    };

    let mut args = Vec::new();
    let mut open = Vec::new();
    let mut cursor = 0;
    while cursor < rest.len() {
        let idx = rest[cursor];
        let token = &tokens[idx];
        cursor += 1;

        if is_delimiter(token, "(") {
            open.push(idx);
            continue;
        }
        if is_delimiter(token, ")") {
            open.pop();
            continue;
        }
        if !open.is_empty() {
            continue;
        }

        let delimiter = rest.get(cursor).map(|&i| &tokens[i]);
        match delimiter {
            Some(delim) if is_delimiter(delim, ":") && adjacent(token, delim) => {
                cursor += 1;
                let value = rest
                    .get(cursor)
                    .copied()
                    .filter(|&i| adjacent(delim, &tokens[i]));
                if value.is_some() {
                    cursor += 1;
                }
                args.push(Argument::Named { name: idx, value });
            }
            _ => args.push(Argument::Positional(idx)),
        }
    }

    Arguments {
        keyword: Some(keyword),
        args,
        unmatched_parens: open,
    }
}

/// Refine the kinds of a tokenized ERT line against the keyword's parameter schema.
///
/// - a deprecated keyword becomes [`TokenKind::Warn`];
/// - an unknown `NAME:` parameter becomes [`TokenKind::Invalid`];
/// - values outside a closed option set, or non-numbers for numerical parameters, become
///   [`TokenKind::Invalid`]; accepted option values become [`TokenKind::Constant`];
/// - an unmatched `(` becomes [`TokenKind::Invalid`].
pub fn apply_ert_rules(tokens: &mut [Token]) {
    let parsed = split_arguments(tokens);
    let Some(keyword_idx) = parsed.keyword else {
        return;
    };
    let Some(keyword) = tokens[keyword_idx].keyword else {
        return;
    };
    if keyword.is_deprecated() {
        tokens[keyword_idx].kind = TokenKind::Warn;
    }

    let mut positional = keyword.parameters().iter().filter(|p| p.is_positional());
    for arg in parsed.args {
        match arg {
            Argument::Positional(idx) => {
                let Some(param) = positional.next() else {
                    continue;
                };
                let token = &mut tokens[idx];
                if token.kind == TokenKind::Invalid {
                    continue;
                }
                if !param.accepts(token.text())
                    || (param.numerical && !is_numeric_literal(token.text()))
                {
                    token.kind = TokenKind::Invalid;
                }
            }
            Argument::Named { name, value } => {
                let param = keyword
                    .parameter(tokens[name].text())
                    .filter(|p| p.delimiter == Some(":"));
                let Some(param) = param else {
                    tokens[name].kind = TokenKind::Invalid;
                    continue;
                };
                let Some(value) = value else {
                    continue;
                };
                let token = &mut tokens[value];
                if !param.options.is_empty() {
                    token.kind = if param.accepts(token.text()) {
                        TokenKind::Constant
                    } else {
                        TokenKind::Invalid
                    };
                } else if param.numerical {
                    token.kind = if is_numeric_literal(token.text()) {
                        TokenKind::Number
                    } else {
                        TokenKind::Invalid
                    };
                }
            }
        }
    }

    for idx in parsed.unmatched_parens {
        tokens[idx].kind = TokenKind::Invalid;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found in an ERT document. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub line_number: u32,
    pub start_column: u32,
    pub end_column: u32,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    fn at(token: &Token, severity: Severity, message: String) -> Self {
        Self {
            line_number: token.position.line_number,
            start_column: token.value.start_column,
            end_column: token.value.end_column,
            severity,
            message,
        }
    }
}

/// Diagnose an ERT document.
///
/// Reports invalid tokens, deprecated keywords, missing required arguments and required
/// keywords that never appear.
pub fn diagnostics(text: &str) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let mut seen: Vec<&'static str> = Vec::new();

    for line_tokens in crate::tokenize_document(Language::Ert, text) {
        let parsed = split_arguments(&line_tokens);
        for (idx, token) in line_tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Invalid if Some(idx) == parsed.keyword => out.push(Diagnostic::at(
                    token,
                    Severity::Error,
                    format!("unknown keyword `{}`", token.text()),
                )),
                TokenKind::Invalid => out.push(Diagnostic::at(
                    token,
                    Severity::Error,
                    format!("unexpected `{}`", token.text()),
                )),
                TokenKind::Warn => out.push(Diagnostic::at(
                    token,
                    Severity::Warning,
                    format!("`{}` is deprecated", token.text()),
                )),
                _ => {}
            }
        }

        let Some(keyword_idx) = parsed.keyword else {
            continue;
        };
        let keyword_token = &line_tokens[keyword_idx];
        let Some(keyword) = keyword_token.keyword else {
            continue;
        };
        seen.push(keyword.label);
        out.extend(missing_arguments(keyword, keyword_token, &parsed, &line_tokens));
    }

    let first_line = Token {
        value: crate::lexer::Word {
            text: String::new(),
            start_column: 1,
            end_column: 1,
        },
        position: crate::lexer::Position {
            line_number: 1,
            column: 1,
        },
        kind: TokenKind::White,
        keyword: None,
    };
    for keyword in Language::Ert.keywords().iter().filter(|k| k.required) {
        if !seen.contains(&keyword.label) {
            out.push(Diagnostic::at(
                &first_line,
                Severity::Error,
                format!("missing required keyword `{}`", keyword.label),
            ));
        }
    }
    out
}

fn missing_arguments(
    keyword: &'static Keyword,
    keyword_token: &Token,
    parsed: &Arguments,
    tokens: &[Token],
) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let positional_count = parsed
        .args
        .iter()
        .filter(|a| matches!(a, Argument::Positional(_)))
        .count();
    let required_positional = keyword
        .parameters()
        .iter()
        .filter(|p| p.is_positional() && p.required)
        .count();
    if positional_count < required_positional {
        out.push(Diagnostic::at(
            keyword_token,
            Severity::Error,
            format!(
                "`{}` expects at least {} argument{}, found {}",
                keyword.label,
                required_positional,
                if required_positional == 1 { "" } else { "s" },
                positional_count
            ),
        ));
    }

    let named: Vec<&str> = parsed
        .args
        .iter()
        .filter_map(|a| match a {
            Argument::Named { name, .. } => Some(tokens[*name].text()),
            Argument::Positional(_) => None,
        })
        .collect();
    for param in keyword
        .parameters()
        .iter()
        .filter(|p| !p.is_positional() && p.required)
    {
        if !named.contains(&param.label) {
            out.push(Diagnostic::at(
                keyword_token,
                Severity::Error,
                format!("missing required parameter `{}:`", param.label),
            ));
        }
    }
    out
}
