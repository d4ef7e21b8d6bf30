use super::{LexerState, TokenKind};
use crate::grammar::Keyword;

/// How the state stack changes after a rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep the current state.
    Stay,
    /// Push a new state on top of the current one.
    Push(LexerState),
    /// Return to the parent state. Popping the root state is a no-op.
    Pop,
    /// Replace the current state.
    Switch(LexerState),
    /// Unwind to the root state.
    PopAll,
}

/// Transition taken after a match, with an optional override at end of line.
///
/// "End of line" means nothing but whitespace follows the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub transition: Transition,
    pub at_eos: Option<Transition>,
}

impl Action {
    pub const STAY: Self = Self::new(Transition::Stay);

    pub const fn new(transition: Transition) -> Self {
        Self {
            transition,
            at_eos: None,
        }
    }

    pub const fn push(state: LexerState) -> Self {
        Self::new(Transition::Push(state))
    }

    pub const fn switch(state: LexerState) -> Self {
        Self::new(Transition::Switch(state))
    }

    pub const fn pop() -> Self {
        Self::new(Transition::Pop)
    }

    /// Use `transition` instead when the match is the last word of the line.
    pub const fn at_eos(self, transition: Transition) -> Self {
        Self {
            at_eos: Some(transition),
            ..self
        }
    }

    pub(crate) fn resolve(&self, eos: bool) -> Transition {
        match (eos, self.at_eos) {
            (true, Some(t)) => t,
            _ => self.transition,
        }
    }
}

/// Predicate over the matched text of a [`Case`].
#[derive(Clone, Copy)]
pub enum Matcher {
    /// Always matches.
    Any,
    /// Matches a label of the grammar's keyword table.
    Keyword,
    Exact(&'static str),
    /// Exact membership in a closed set.
    OneOf(&'static [&'static str]),
    Predicate(fn(&str) -> bool),
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Keyword => f.write_str("Keyword"),
            Self::Exact(s) => f.debug_tuple("Exact").field(s).finish(),
            Self::OneOf(set) => f.debug_tuple("OneOf").field(&set.len()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl Matcher {
    pub(crate) fn matches(&self, text: &str, keywords: &'static [Keyword]) -> bool {
        match self {
            Self::Any => true,
            Self::Keyword => keywords.iter().any(|k| k.label == text),
            Self::Exact(s) => *s == text,
            Self::OneOf(set) => set.contains(&text),
            Self::Predicate(f) => f(text),
        }
    }
}

/// One arm of a [`Emit::Cases`] dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub matcher: Matcher,
    pub kind: TokenKind,
    pub action: Action,
}

impl Case {
    pub const fn new(matcher: Matcher, kind: TokenKind) -> Self {
        Self {
            matcher,
            kind,
            action: Action::STAY,
        }
    }

    pub const fn then(self, action: Action) -> Self {
        Self { action, ..self }
    }
}

/// What a matching rule produces.
#[derive(Debug, Clone)]
pub enum Emit {
    /// One token of the given kind covering the whole match.
    Kind(TokenKind),
    /// One token per capture group; empty groups produce nothing.
    Groups(&'static [TokenKind]),
    /// Classify the matched text by the first matching case. When no case matches the rule is
    /// treated as not matching and the next rule is tried.
    Cases(Vec<Case>),
}

/// A regex rule of a lexer state.
#[derive(Debug, Clone)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub emit: Emit,
    /// Transition for `Kind` and `Groups` rules. Case arms carry their own.
    pub action: Action,
}

impl RuleSpec {
    pub fn token(pattern: &'static str, kind: TokenKind) -> Self {
        Self {
            pattern,
            emit: Emit::Kind(kind),
            action: Action::STAY,
        }
    }

    pub fn groups(pattern: &'static str, kinds: &'static [TokenKind]) -> Self {
        Self {
            pattern,
            emit: Emit::Groups(kinds),
            action: Action::STAY,
        }
    }

    pub fn cases(pattern: &'static str, cases: Vec<Case>) -> Self {
        Self {
            pattern,
            emit: Emit::Cases(cases),
            action: Action::STAY,
        }
    }

    pub fn then(self, action: Action) -> Self {
        Self { action, ..self }
    }
}

/// An entry of a state's rule list.
#[derive(Debug, Clone)]
pub enum RuleEntry {
    Rule(RuleSpec),
    /// Splice in the rules of another state at this position.
    Include(LexerState),
}

impl From<RuleSpec> for RuleEntry {
    fn from(rule: RuleSpec) -> Self {
        Self::Rule(rule)
    }
}

/// Uncompiled grammar: a named table of lexer states.
#[derive(Debug, Clone)]
pub struct GrammarSpec {
    pub name: &'static str,
    /// Kind of a word no rule accepts.
    pub default_kind: TokenKind,
    pub keywords: &'static [Keyword],
    pub states: Vec<(LexerState, Vec<RuleEntry>)>,
}
