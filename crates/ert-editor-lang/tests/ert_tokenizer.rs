use ert_editor_lang::{Language, TokenKind, tokenize};
use pretty_assertions::assert_eq;

/// Significant tokens as `(text, kind)` pairs.
fn significant(line: &str) -> Vec<(String, TokenKind)> {
    tokenize(Language::Ert, line)
        .into_iter()
        .filter(|t| t.kind.is_significant())
        .map(|t| (t.value.text, t.kind))
        .collect()
}

fn s(text: &str, kind: TokenKind) -> (String, TokenKind) {
    (text.to_string(), kind)
}

#[test]
fn test_simple_keyword_arguments() {
    assert_eq!(
        significant("NUM_REALIZATIONS 100"),
        vec![s("NUM_REALIZATIONS", TokenKind::Keyword), s("100", TokenKind::Number)]
    );
    assert_eq!(
        significant("RUNPATH output/real_<IENS>/iter_<ITER> -- where runs go"),
        vec![
            s("RUNPATH", TokenKind::Keyword),
            s("output/real_<IENS>/iter_<ITER>", TokenKind::String),
        ]
    );
}

#[test]
fn test_unknown_leading_word_is_invalid() {
    let tokens = significant("NOT_A_KEYWORD 1 foo");
    assert_eq!(tokens[0], s("NOT_A_KEYWORD", TokenKind::Invalid));
    assert_eq!(tokens[1], s("1", TokenKind::Number));
    assert_eq!(tokens[2], s("foo", TokenKind::String));

    // Keywords are case sensitive.
    assert_eq!(significant("grid x")[0].1, TokenKind::Invalid);
}

#[test]
fn test_field_parameters() {
    assert_eq!(
        significant("FIELD PORO PARAMETER poro.grdecl INIT_FILES:poro%d.grdecl FORWARD_INIT:True"),
        vec![
            s("FIELD", TokenKind::Keyword),
            s("PORO", TokenKind::Identifier),
            s("PARAMETER", TokenKind::Type),
            s("poro.grdecl", TokenKind::String),
            s("INIT_FILES", TokenKind::Predefined),
            s(":", TokenKind::Delimiter),
            s("poro%d.grdecl", TokenKind::String),
            s("FORWARD_INIT", TokenKind::Predefined),
            s(":", TokenKind::Delimiter),
            s("True", TokenKind::Constant),
        ]
    );
}

#[test]
fn test_forward_model_call_syntax() {
    assert_eq!(
        significant("FORWARD_MODEL COPY_FILE(<FROM>=a.txt, <TO>=\"b c.txt\")"),
        vec![
            s("FORWARD_MODEL", TokenKind::Keyword),
            s("COPY_FILE", TokenKind::Function),
            s("(", TokenKind::Delimiter),
            s("<FROM>", TokenKind::Identifier),
            s("=", TokenKind::Operator),
            s("a.txt", TokenKind::String),
            s(",", TokenKind::Delimiter),
            s("<TO>", TokenKind::Identifier),
            s("=", TokenKind::Operator),
            s("\"b c.txt\"", TokenKind::String),
            s(")", TokenKind::Delimiter),
        ]
    );
}

#[test]
fn test_queue_keywords() {
    assert_eq!(
        significant("QUEUE_SYSTEM LSF"),
        vec![s("QUEUE_SYSTEM", TokenKind::Keyword), s("LSF", TokenKind::Type)]
    );
    assert_eq!(significant("QUEUE_SYSTEM PBS")[1], s("PBS", TokenKind::Invalid));

    assert_eq!(
        significant("QUEUE_OPTION SLURM PARTITION short"),
        vec![
            s("QUEUE_OPTION", TokenKind::Keyword),
            s("SLURM", TokenKind::Type),
            s("PARTITION", TokenKind::Predefined),
            s("short", TokenKind::String),
        ]
    );
    assert_eq!(
        significant("QUEUE_OPTION LOCAL LSF_QUEUE x")[2],
        s("LSF_QUEUE", TokenKind::Invalid)
    );
}

#[test]
fn test_hook_workflow_points() {
    assert_eq!(
        significant("HOOK_WORKFLOW export POST_SIMULATION"),
        vec![
            s("HOOK_WORKFLOW", TokenKind::Keyword),
            s("export", TokenKind::Identifier),
            s("POST_SIMULATION", TokenKind::Constant),
        ]
    );
    assert_eq!(
        significant("HOOK_WORKFLOW export WHENEVER")[2],
        s("WHENEVER", TokenKind::Invalid)
    );
}

#[test]
fn test_summary_is_permissive() {
    assert_eq!(significant("SUMMARY WOPR:*")[1], s("WOPR:*", TokenKind::Predefined));
    assert_eq!(significant("SUMMARY FOPT")[1], s("FOPT", TokenKind::Predefined));
    assert_eq!(significant("SUMMARY CUSTOM")[1], s("CUSTOM", TokenKind::Identifier));
}

#[test]
fn test_job_keywords() {
    assert_eq!(
        significant("SIMULATION_JOB ECLIPSE100 <ECLBASE>"),
        vec![
            s("SIMULATION_JOB", TokenKind::Keyword),
            s("ECLIPSE100", TokenKind::Function),
            s("<ECLBASE>", TokenKind::String),
        ]
    );
    assert_eq!(
        significant("SETENV OMP_NUM_THREADS 1"),
        vec![
            s("SETENV", TokenKind::Keyword),
            s("OMP_NUM_THREADS", TokenKind::Identifier),
            s("1", TokenKind::Number),
        ]
    );
}

#[test]
fn test_whitespace_and_comments_cover_line() {
    let line = "\tGRID  MY.EGRID   -- grid file";
    let tokens = tokenize(Language::Ert, line);
    let joined: String = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(joined, line);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Comment);

    // Columns are contiguous and 1-based.
    let mut column = 1;
    for token in &tokens {
        assert_eq!(token.value.start_column, column);
        column = token.value.end_column;
    }
}

#[test]
fn test_tokenize_is_independent_of_history() {
    let lines = [
        "FIELD PORO PARAMETER poro.grdecl INIT_FILES:p%d.grdecl",
        "FORWARD_MODEL RMS(<IENS>=1",
        "QUEUE_OPTION LSF LSF_QUEUE normal",
        "SUMMARY WOPR:*",
        "BOGUS x y",
    ];
    let first: Vec<_> = lines.iter().map(|l| tokenize(Language::Ert, l)).collect();
    for _ in 0..3 {
        for (line, expected) in lines.iter().rev().zip(first.iter().rev()) {
            assert_eq!(&tokenize(Language::Ert, line), expected);
        }
    }
}
