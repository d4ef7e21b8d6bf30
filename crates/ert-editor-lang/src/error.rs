use thiserror::Error;

use crate::lexer::LexerState;

#[derive(Debug, Error)]
/// Errors produced while compiling a lexer grammar.
pub enum LexerError {
    #[error("regex compile error for pattern '{pattern}': {message}")]
    /// A rule pattern failed to compile.
    RegexCompile {
        /// The rule pattern.
        pattern: String,
        /// The compiler error message.
        message: String,
    },

    #[error("grammar '{grammar}' has no rules for state {state:?}")]
    /// A transition or include targets a state the grammar does not define.
    UnknownState {
        /// Grammar name.
        grammar: &'static str,
        /// The missing state.
        state: LexerState,
    },

    #[error("include cycle detected involving state {0:?}")]
    /// Rule-group includes formed a cycle.
    IncludeCycle(LexerState),

    #[error("grammar '{0}' does not define a root state")]
    /// Every grammar must start in [`LexerState::Root`].
    MissingRoot(&'static str),
}
