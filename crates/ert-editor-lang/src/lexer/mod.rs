//! Line tokenizer.
//!
//! Both languages are strictly line oriented, so the tokenizer works on one line at a time and
//! keeps no state between lines. A grammar is a table of named [`LexerState`]s, each holding an
//! ordered list of regex rules; the first rule that matches at the current position wins and may
//! push, pop or switch the state stack.

mod dist;
mod engine;
mod ert;
mod rules;

pub use engine::LexerGrammar;
pub use rules::{Action, Case, Emit, GrammarSpec, Matcher, RuleEntry, RuleSpec, Transition};

use crate::grammar::Keyword;
use serde::Serialize;
use std::sync::LazyLock;

/// Token classification, mirroring the host editor's token classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,
    String,
    Comment,
    White,
    Operator,
    Delimiter,
    Invalid,
    Type,
    Predefined,
    Constant,
    Function,
    #[serde(rename = "warn-token")]
    Warn,
}

impl TokenKind {
    /// Base prefix for token-kind style ids.
    ///
    /// Values below this are reserved for other style sources.
    pub const STYLE_BASE: u32 = 0x0500_0000;

    /// The host editor's token class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Keyword => "keyword",
            Self::Number => "number",
            Self::String => "string",
            Self::Comment => "comment",
            Self::White => "white",
            Self::Operator => "operator",
            Self::Delimiter => "delimiter",
            Self::Invalid => "invalid",
            Self::Type => "type",
            Self::Predefined => "predefined",
            Self::Constant => "constant",
            Self::Function => "function",
            Self::Warn => "warn-token",
        }
    }

    /// A stable style id for theming.
    pub fn style_id(self) -> u32 {
        Self::STYLE_BASE | (self as u32 + 1)
    }

    /// Whether the token carries meaning (not whitespace or a comment).
    pub fn is_significant(self) -> bool {
        !matches!(self, Self::White | Self::Comment)
    }
}

/// The closed set of lexer states shared by both grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LexerState {
    Root,
    Whitespace,
    Numbers,
    Booleans,
    Strings,
    AfterKeyword,
    HasIdentifier,
    HookWorkflow,
    Field,
    FieldParams,
    GenData,
    GenDataParams,
    Surface,
    SurfaceParams,
    GenKw,
    GenKwParams,
    ForwardModel,
    ForwardModelParams,
    SimulationJob,
    InstallJob,
    SetEnv,
    Summary,
    QueueSystem,
    QueueOption,
    LsfQueue,
    SlurmQueue,
    TorqueQueue,
    LocalQueue,
}

/// 1-based position of a token in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub line_number: u32,
    pub column: u32,
}

/// The text span of a token. Columns are 1-based; `end_column` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub text: String,
    pub start_column: u32,
    pub end_column: u32,
}

/// A classified lexical unit of one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub value: Word,
    pub position: Position,
    pub kind: TokenKind,
    /// The keyword this token names, when it is a keyword token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<&'static Keyword>,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.value.text
    }
}

static DIST_GRAMMAR: LazyLock<LexerGrammar> = LazyLock::new(|| {
    LexerGrammar::compile(dist::grammar()).expect("built-in DIST grammar compiles")
});

static ERT_GRAMMAR: LazyLock<LexerGrammar> = LazyLock::new(|| {
    LexerGrammar::compile(ert::grammar()).expect("built-in ERT grammar compiles")
});

/// The compiled DIST grammar.
pub fn dist_grammar() -> &'static LexerGrammar {
    &DIST_GRAMMAR
}

/// The compiled ERT grammar.
pub fn ert_grammar() -> &'static LexerGrammar {
    &ERT_GRAMMAR
}
