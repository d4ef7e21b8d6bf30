//! ERT grammar.
//!
//! A line is `KEYWORD arg...`. Keywords with structured arguments route to a dedicated state;
//! everything else takes free-form arguments in [`LexerState::AfterKeyword`].

use super::rules::{Action, Case, GrammarSpec, Matcher, RuleEntry, RuleSpec, Transition};
use super::{LexerState, TokenKind};
use crate::grammar::enums::{
    BOOLEAN_LITERALS, HOOK_POINTS, LOCAL_QUEUE_OPTIONS, LSF_QUEUE_OPTIONS, QUEUE_SYSTEMS,
    SLURM_QUEUE_OPTIONS, TORQUE_QUEUE_OPTIONS, is_numeric_literal, is_summary_vector,
};
use crate::grammar::ert::ERT_KEYWORDS;

/// Keywords whose arguments have a dedicated sub-grammar.
const ROUTED: &[(&str, LexerState)] = &[
    ("FIELD", LexerState::Field),
    ("GEN_DATA", LexerState::GenData),
    ("SURFACE", LexerState::Surface),
    ("GEN_KW", LexerState::GenKw),
    ("HOOK_WORKFLOW", LexerState::HookWorkflow),
    ("INSTALL_JOB", LexerState::InstallJob),
    ("SETENV", LexerState::SetEnv),
    ("SUMMARY", LexerState::Summary),
    ("QUEUE_SYSTEM", LexerState::QueueSystem),
    ("QUEUE_OPTION", LexerState::QueueOption),
    ("FORWARD_MODEL", LexerState::ForwardModel),
    ("SIMULATION_JOB", LexerState::SimulationJob),
];

/// `NAME:VALUE` with the value possibly empty.
const NAMED_PARAMETER: &str = r"([A-Z_]+)(:)(\S*)";
const NAMED_PARAMETER_KINDS: &[TokenKind] =
    &[TokenKind::Predefined, TokenKind::Delimiter, TokenKind::String];

/// Last word of the line closes the state.
const CLOSE_AT_EOS: Action = Action::STAY.at_eos(Transition::Pop);

pub(super) fn grammar() -> GrammarSpec {
    use LexerState::*;

    let mut root_cases: Vec<Case> = ROUTED
        .iter()
        .map(|(label, state)| {
            Case::new(Matcher::Exact(*label), TokenKind::Keyword).then(Action::push(*state))
        })
        .collect();
    root_cases.push(Case::new(Matcher::Keyword, TokenKind::Keyword).then(Action::push(AfterKeyword)));
    root_cases.push(Case::new(Matcher::Any, TokenKind::Invalid).then(Action::push(AfterKeyword)));

    let states: Vec<(LexerState, Vec<RuleEntry>)> = vec![
        (
            Whitespace,
            vec![
                RuleSpec::token(r"[ \t]+", TokenKind::White).into(),
                RuleSpec::token(r"--.*", TokenKind::Comment).into(),
            ],
        ),
        (
            Numbers,
            vec![word(vec![
                Case::new(Matcher::Predicate(is_numeric_literal), TokenKind::Number)
                    .then(CLOSE_AT_EOS),
            ])],
        ),
        (
            Booleans,
            vec![word(vec![
                Case::new(Matcher::OneOf(BOOLEAN_LITERALS), TokenKind::Constant).then(CLOSE_AT_EOS),
            ])],
        ),
        (
            Strings,
            vec![
                RuleSpec::token(r#""[^"]*""#, TokenKind::String).then(CLOSE_AT_EOS).into(),
                RuleSpec::token(r"'[^']*'", TokenKind::String).then(CLOSE_AT_EOS).into(),
            ],
        ),
        (Root, vec![RuleEntry::Include(Whitespace), word(root_cases)]),
        (
            AfterKeyword,
            vec![
                RuleEntry::Include(Whitespace),
                RuleEntry::Include(Numbers),
                RuleEntry::Include(Booleans),
                RuleEntry::Include(Strings),
                word(vec![any(TokenKind::String, CLOSE_AT_EOS)]),
            ],
        ),
        (Field, first_word_then(FieldParams)),
        (
            FieldParams,
            params_state(vec![
                Case::new(Matcher::Exact("PARAMETER"), TokenKind::Type).then(CLOSE_AT_EOS),
                any(TokenKind::String, CLOSE_AT_EOS),
            ]),
        ),
        (GenData, first_word_then(GenDataParams)),
        (GenDataParams, params_state(vec![any(TokenKind::String, CLOSE_AT_EOS)])),
        (Surface, first_word_then(SurfaceParams)),
        (SurfaceParams, params_state(vec![any(TokenKind::String, CLOSE_AT_EOS)])),
        (GenKw, first_word_then(GenKwParams)),
        (GenKwParams, params_state(vec![any(TokenKind::String, CLOSE_AT_EOS)])),
        (
            HookWorkflow,
            vec![
                RuleEntry::Include(Whitespace),
                word(vec![
                    Case::new(Matcher::OneOf(HOOK_POINTS), TokenKind::Constant).then(CLOSE_AT_EOS),
                    any(TokenKind::Identifier, CLOSE_AT_EOS),
                ]),
            ],
        ),
        (
            QueueSystem,
            vec![
                RuleEntry::Include(Whitespace),
                word(vec![
                    Case::new(Matcher::OneOf(QUEUE_SYSTEMS), TokenKind::Type).then(CLOSE_AT_EOS),
                    any(TokenKind::Invalid, CLOSE_AT_EOS),
                ]),
            ],
        ),
        (
            QueueOption,
            vec![
                RuleEntry::Include(Whitespace),
                word(vec![
                    queue("LSF", LsfQueue),
                    queue("SLURM", SlurmQueue),
                    queue("TORQUE", TorqueQueue),
                    queue("LOCAL", LocalQueue),
                    any(TokenKind::Invalid, Action::switch(AfterKeyword)),
                ]),
            ],
        ),
        (LsfQueue, queue_options(LSF_QUEUE_OPTIONS)),
        (SlurmQueue, queue_options(SLURM_QUEUE_OPTIONS)),
        (TorqueQueue, queue_options(TORQUE_QUEUE_OPTIONS)),
        (LocalQueue, queue_options(LOCAL_QUEUE_OPTIONS)),
        (
            ForwardModel,
            vec![
                RuleEntry::Include(Whitespace),
                RuleSpec::token(r"[A-Za-z_][\w\-]*", TokenKind::Function).into(),
                RuleSpec::token(r"\(", TokenKind::Delimiter)
                    .then(Action::push(ForwardModelParams))
                    .into(),
                word(vec![any(TokenKind::String, CLOSE_AT_EOS)]),
            ],
        ),
        (
            ForwardModelParams,
            vec![
                RuleEntry::Include(Whitespace),
                RuleSpec::token(r"<[^>\s]*>", TokenKind::Identifier).into(),
                RuleSpec::token(r"=", TokenKind::Operator).into(),
                RuleSpec::token(r",", TokenKind::Delimiter).into(),
                RuleSpec::token(r"\)", TokenKind::Delimiter)
                    .then(Action::pop())
                    .into(),
                RuleEntry::Include(Strings),
                RuleSpec::cases(
                    r"[^\s,()=]+",
                    vec![
                        Case::new(Matcher::Predicate(is_numeric_literal), TokenKind::Number),
                        Case::new(Matcher::OneOf(BOOLEAN_LITERALS), TokenKind::Constant),
                        Case::new(Matcher::Any, TokenKind::String),
                    ],
                )
                .into(),
            ],
        ),
        (
            SimulationJob,
            vec![
                RuleEntry::Include(Whitespace),
                word(vec![any(TokenKind::Function, Action::switch(AfterKeyword))]),
            ],
        ),
        (
            InstallJob,
            vec![
                RuleEntry::Include(Whitespace),
                word(vec![any(TokenKind::Identifier, Action::switch(AfterKeyword))]),
            ],
        ),
        (
            SetEnv,
            vec![
                RuleEntry::Include(Whitespace),
                word(vec![any(TokenKind::Identifier, Action::switch(AfterKeyword))]),
            ],
        ),
        (
            Summary,
            vec![
                RuleEntry::Include(Whitespace),
                word(vec![
                    Case::new(Matcher::Predicate(is_summary_vector), TokenKind::Predefined)
                        .then(CLOSE_AT_EOS),
                    any(TokenKind::Identifier, CLOSE_AT_EOS),
                ]),
            ],
        ),
    ];

    GrammarSpec {
        name: "ert",
        default_kind: TokenKind::Invalid,
        keywords: ERT_KEYWORDS,
        states,
    }
}

/// A whitespace-delimited word classified by `cases`.
fn word(cases: Vec<Case>) -> RuleEntry {
    RuleSpec::cases(r"\S+", cases).into()
}

fn any(kind: TokenKind, action: Action) -> Case {
    Case::new(Matcher::Any, kind).then(action)
}

/// The first positional argument names the entity; the rest are parameters.
fn first_word_then(params: LexerState) -> Vec<RuleEntry> {
    vec![
        RuleEntry::Include(LexerState::Whitespace),
        word(vec![any(
            TokenKind::Identifier,
            Action::switch(params).at_eos(Transition::Pop),
        )]),
    ]
}

/// `NAME:VALUE` parameters mixed with positional words.
fn params_state(positional: Vec<Case>) -> Vec<RuleEntry> {
    vec![
        RuleEntry::Include(LexerState::Whitespace),
        RuleSpec::groups(NAMED_PARAMETER, NAMED_PARAMETER_KINDS)
            .then(CLOSE_AT_EOS)
            .into(),
        RuleEntry::Include(LexerState::Strings),
        word(positional),
    ]
}

fn queue(system: &'static str, state: LexerState) -> Case {
    Case::new(Matcher::Exact(system), TokenKind::Type).then(Action::switch(state))
}

/// Driver option name followed by a free-form value.
fn queue_options(options: &'static [&'static str]) -> Vec<RuleEntry> {
    vec![
        RuleEntry::Include(LexerState::Whitespace),
        word(vec![
            Case::new(Matcher::OneOf(options), TokenKind::Predefined)
                .then(Action::switch(LexerState::AfterKeyword)),
            any(TokenKind::Invalid, Action::switch(LexerState::AfterKeyword)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Language;

    #[test]
    fn test_routed_keywords_exist() {
        for (label, _) in ROUTED {
            assert!(Language::Ert.keyword(label).is_some(), "{label}");
        }
    }
}
