use ert_editor_lang::{Language, Severity, TokenKind, diagnostics, tokenize, validate_dist_line};

fn line_with(label: &str, args: &[String]) -> String {
    let mut line = format!("X {label}");
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[test]
fn test_dist_arity_round_trip_for_every_keyword() {
    for keyword in Language::Dist.keywords() {
        let n = keyword.num_params();
        let numbers: Vec<String> = (0..n).map(|i| format!("{}.5", i + 1)).collect();

        let full = line_with(keyword.label, &numbers);
        assert!(
            validate_dist_line(&tokenize(Language::Dist, &full)),
            "expected `{full}` to validate"
        );

        if n > 0 {
            let short = line_with(keyword.label, &numbers[..n - 1]);
            assert!(
                !validate_dist_line(&tokenize(Language::Dist, &short)),
                "expected `{short}` to fail"
            );

            for replaced in 0..n {
                let mut args = numbers.clone();
                args[replaced] = "abc".to_string();
                let bad = line_with(keyword.label, &args);
                assert!(
                    !validate_dist_line(&tokenize(Language::Dist, &bad)),
                    "expected `{bad}` to fail"
                );
            }
        }

        let long = line_with(keyword.label, &[numbers.clone(), vec!["1".into()]].concat());
        assert!(!validate_dist_line(&tokenize(Language::Dist, &long)));
    }
}

#[test]
fn test_dist_line_shape() {
    assert!(validate_dist_line(&tokenize(Language::Dist, "PORO NORMAL 0.3 0.05")));
    assert!(validate_dist_line(&tokenize(
        Language::Dist,
        "PORO NORMAL 0.3 0.05 -- porosity"
    )));
    // Keyword first: no variable name.
    assert!(!validate_dist_line(&tokenize(Language::Dist, "NORMAL 0.3 0.05")));
    // Unknown distribution.
    assert!(!validate_dist_line(&tokenize(Language::Dist, "PORO GAUSS 0.3 0.05")));
    assert!(!validate_dist_line(&tokenize(Language::Dist, "")));
    assert!(!validate_dist_line(&tokenize(Language::Dist, "PORO NORMAL inf 1")));
}

#[test]
fn test_ert_schema_marks_tokens() {
    let tokens = tokenize(Language::Ert, "GEN_DATA RESPONSE RESULT_FILE:out_%d INPUT_FORMAT:XML");
    let format = tokens.iter().find(|t| t.text() == "XML").unwrap();
    assert_eq!(format.kind, TokenKind::Invalid);
    let ascii = tokenize(Language::Ert, "GEN_DATA RESPONSE RESULT_FILE:out_%d INPUT_FORMAT:ASCII");
    let format = ascii.iter().find(|t| t.text() == "ASCII").unwrap();
    assert_eq!(format.kind, TokenKind::Constant);
}

#[test]
fn test_clean_document_has_no_diagnostics() {
    let text = "\
-- a small but complete config
NUM_REALIZATIONS 50
QUEUE_SYSTEM LOCAL
QUEUE_OPTION LOCAL MAX_RUNNING 4
RUNPATH output/real_<IENS>/iter_<ITER>
GEN_KW MULTFLT templates/multflt.tmpl multflt.txt priors/multflt.txt
FORWARD_MODEL COPY_FILE(<FROM>=a, <TO>=b)
";
    let found = diagnostics(text);
    assert!(found.is_empty(), "{found:#?}");
}

#[test]
fn test_diagnostic_positions() {
    let found = diagnostics("NUM_REALIZATIONS 5\nQUEUE_SYSTEM  PBS\n");
    assert_eq!(found.len(), 1);
    let d = &found[0];
    assert_eq!(d.severity, Severity::Error);
    assert_eq!((d.line_number, d.start_column, d.end_column), (2, 15, 18));
}
