//! Hover content for keywords and DIST priors.

use ert_editor_lang::{Language, Position, TokenKind, tokenize_line};
use serde::Serialize;

use crate::completion::{Range, usage_line};
use crate::config::ServiceConfig;
use crate::distribution::Distribution;
use crate::plot::{PlotOptions, markdown_image};
use crate::preview::preview_for_tokens;
use crate::text::word_at_position;

/// Hover result: the source range it describes and markdown content blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hover {
    pub range: Range,
    pub contents: Vec<String>,
}

fn code_block(text: &str) -> String {
    format!("```\n{text}\n```")
}

/// Documentation of the keyword under the cursor. No keyword, no hover.
pub fn keyword_hover(language: Language, line: &str, position: Position) -> Option<Hover> {
    let word = word_at_position(line, position.column)?;
    let keyword = language.keyword(&word.text)?;
    Some(Hover {
        range: Range::on_line(position.line_number, word.start_column, word.end_column),
        contents: vec![
            keyword.documentation.to_string(),
            code_block(&usage_line(keyword)),
        ],
    })
}

/// Plot and summary statistics of the prior defined on a DIST line.
///
/// Fires only when the cursor is within the line's definition and the line validates.
/// Construction failures are swallowed: the result is simply `None`.
pub fn distribution_hover(line: &str, position: Position, plot: &PlotOptions) -> Option<Hover> {
    let tokens = tokenize_line(Language::Dist, line, position.line_number);
    let significant: Vec<_> = tokens.iter().filter(|t| t.kind.is_significant()).collect();
    let (first, last) = (significant.first()?, significant.last()?);
    let range = Range::on_line(
        position.line_number,
        first.value.start_column,
        last.value.end_column,
    );
    if position.column < range.start_column || position.column > range.end_column {
        return None;
    }

    let preview = match preview_for_tokens(&tokens) {
        Ok(preview) => preview,
        Err(err) => {
            log::debug!(
                "no distribution preview for line {}: {err:?}",
                position.line_number
            );
            return None;
        }
    };

    let keyword = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Keyword)
        .and_then(|t| t.keyword)?;
    let d: &dyn Distribution = preview.distribution.as_ref();
    let stats = format!(
        "- mean: {}\n- median: {}\n- mode: {}\n- std: {}",
        format_value(d.mean()),
        format_value(d.median()),
        format_value(d.mode()),
        format_value(d.std()),
    );

    Some(Hover {
        range,
        contents: vec![
            code_block(&usage_line(keyword)),
            markdown_image(&preview, plot),
            stats,
        ],
    })
}

/// Hover for `language` at `position`, using `config` for the plot.
///
/// DIST lines that define a plottable prior show the preview; everything else falls back to
/// keyword documentation.
pub fn hover(
    language: Language,
    line: &str,
    position: Position,
    config: &ServiceConfig,
) -> Option<Hover> {
    if language == Language::Dist
        && let Some(preview) = distribution_hover(line, position, &config.plot)
    {
        return Some(preview);
    }
    keyword_hover(language, line, position)
}

/// Six significant digits, without trailing zeros.
fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v != 0.0 && !(1e-4..1e6).contains(&v.abs()) {
        return format!("{v:.5e}");
    }
    let digits = (5 - v.abs().log10().floor().max(-5.0) as i32).max(0) as usize;
    let fixed = format!("{v:.digits$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.3), "0.3");
        assert_eq!(format_value(0.05), "0.05");
        assert_eq!(format_value(123.456789), "123.457");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(2.5e7), "2.50000e7");
    }

    #[test]
    fn test_keyword_hover_content() {
        let hover = keyword_hover(
            Language::Dist,
            "PORO NORMAL 0.3",
            Position {
                line_number: 1,
                column: 7,
            },
        )
        .unwrap();
        assert_eq!(hover.range, Range::on_line(1, 6, 12));
        assert_eq!(hover.contents[1], "```\nNORMAL mean std\n```");
    }
}
