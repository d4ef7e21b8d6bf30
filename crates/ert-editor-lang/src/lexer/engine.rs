use super::rules::{Emit, GrammarSpec, RuleEntry, RuleSpec, Transition};
use super::{LexerState, Position, Token, TokenKind, Word};
use crate::error::LexerError;
use crate::grammar::{Keyword, find_keyword};
use regex::Regex;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
struct CompiledRule {
    regex: Regex,
    emit: Emit,
    action: super::Action,
}

/// A compiled grammar: every state maps to its flattened, anchored rule list.
#[derive(Debug, Clone)]
pub struct LexerGrammar {
    name: &'static str,
    default_kind: TokenKind,
    keywords: &'static [Keyword],
    states: HashMap<LexerState, Vec<CompiledRule>>,
}

impl LexerGrammar {
    /// Compile a grammar table.
    ///
    /// Includes are flattened in place, every pattern is anchored at the current position and
    /// every transition target is checked to exist.
    pub fn compile(spec: GrammarSpec) -> Result<Self, LexerError> {
        let raw: HashMap<LexerState, Vec<RuleEntry>> = spec.states.into_iter().collect();
        if !raw.contains_key(&LexerState::Root) {
            return Err(LexerError::MissingRoot(spec.name));
        }

        let mut cache = PatternCache::default();
        let mut states = HashMap::with_capacity(raw.len());
        for state in raw.keys() {
            let mut flat = Vec::new();
            let mut visiting = HashSet::new();
            flatten_state(spec.name, *state, &raw, &mut flat, &mut visiting)?;

            let mut compiled = Vec::with_capacity(flat.len());
            for rule in flat {
                check_targets(spec.name, rule, &raw)?;
                compiled.push(CompiledRule {
                    regex: cache.get(rule.pattern)?,
                    emit: rule.emit.clone(),
                    action: rule.action,
                });
            }
            states.insert(*state, compiled);
        }

        Ok(Self {
            name: spec.name,
            default_kind: spec.default_kind,
            keywords: spec.keywords,
            states,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn keywords(&self) -> &'static [Keyword] {
        self.keywords
    }

    /// Tokenize one line. `line_number` is 1-based and only used for token positions.
    ///
    /// The state stack starts at [`LexerState::Root`] for every call; the result depends on the
    /// line text alone.
    pub fn tokenize_line(&self, line: &str, line_number: u32) -> Vec<Token> {
        let mut lexer = LineLexer {
            grammar: self,
            line,
            line_number,
            stack: vec![LexerState::Root],
            tokens: Vec::new(),
        };
        lexer.run();
        lexer.tokens
    }
}

struct LineLexer<'g, 'l> {
    grammar: &'g LexerGrammar,
    line: &'l str,
    line_number: u32,
    stack: Vec<LexerState>,
    tokens: Vec<Token>,
}

impl LineLexer<'_, '_> {
    fn run(&mut self) {
        let mut pos = 0usize;
        while pos < self.line.len() {
            let consumed = self.step(pos);
            // Every step consumes at least one char.
            pos += consumed.max(1);
        }
    }

    fn state(&self) -> LexerState {
        self.stack.last().copied().unwrap_or(LexerState::Root)
    }

    /// Apply the first matching rule at `pos`; returns the number of bytes consumed.
    fn step(&mut self, pos: usize) -> usize {
        let line = self.line;
        let rest = &line[pos..];
        let grammar = self.grammar;
        let rules = grammar
            .states
            .get(&self.state())
            .map(Vec::as_slice)
            .unwrap_or_default();

        for rule in rules {
            let Some(caps) = rule.regex.captures(rest) else {
                continue;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.is_empty() {
                continue;
            }
            let matched = whole.as_str();
            let eos = rest[whole.end()..].trim().is_empty();

            let action = match &rule.emit {
                Emit::Kind(kind) => {
                    self.push_token(pos, matched, *kind);
                    rule.action
                }
                Emit::Groups(kinds) => {
                    for (idx, kind) in kinds.iter().enumerate() {
                        if let Some(group) = caps.get(idx + 1)
                            && !group.is_empty()
                        {
                            self.push_token(pos + group.start(), group.as_str(), *kind);
                        }
                    }
                    rule.action
                }
                Emit::Cases(cases) => {
                    let Some(case) = cases
                        .iter()
                        .find(|c| c.matcher.matches(matched, grammar.keywords))
                    else {
                        continue;
                    };
                    self.push_token(pos, matched, case.kind);
                    case.action
                }
            };

            self.apply(action.resolve(eos));
            return whole.end();
        }

        self.fallback(pos)
    }

    /// No rule matched: consume a whitespace run or a word of the grammar's default kind.
    fn fallback(&mut self, pos: usize) -> usize {
        let line = self.line;
        let rest = &line[pos..];
        let is_white = rest.starts_with(char::is_whitespace);
        let len = rest
            .find(|c: char| c.is_whitespace() != is_white)
            .unwrap_or(rest.len());
        let kind = if is_white {
            TokenKind::White
        } else {
            self.grammar.default_kind
        };
        self.push_token(pos, &rest[..len], kind);
        len
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Push(state) => self.stack.push(state),
            Transition::Pop => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
            Transition::Switch(state) => {
                if let Some(top) = self.stack.last_mut() {
                    *top = state;
                }
            }
            Transition::PopAll => self.stack.truncate(1),
        }
    }

    fn push_token(&mut self, byte_offset: usize, text: &str, kind: TokenKind) {
        let start_column = self.line[..byte_offset].chars().count() as u32 + 1;
        let end_column = start_column + text.chars().count() as u32;
        let keyword = match kind {
            TokenKind::Keyword | TokenKind::Warn => find_keyword(self.grammar.keywords, text),
            _ => None,
        };
        self.tokens.push(Token {
            value: Word {
                text: text.to_string(),
                start_column,
                end_column,
            },
            position: Position {
                line_number: self.line_number,
                column: start_column,
            },
            kind,
            keyword,
        });
    }
}

#[derive(Default)]
struct PatternCache {
    compiled: HashMap<&'static str, Regex>,
}

impl PatternCache {
    fn get(&mut self, pattern: &'static str) -> Result<Regex, LexerError> {
        if let Some(re) = self.compiled.get(pattern) {
            return Ok(re.clone());
        }
        let re = Regex::new(&format!("^(?:{pattern})")).map_err(|e| LexerError::RegexCompile {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.compiled.insert(pattern, re.clone());
        Ok(re)
    }
}

fn flatten_state<'a>(
    grammar: &'static str,
    state: LexerState,
    raw: &'a HashMap<LexerState, Vec<RuleEntry>>,
    out: &mut Vec<&'a RuleSpec>,
    visiting: &mut HashSet<LexerState>,
) -> Result<(), LexerError> {
    let Some(entries) = raw.get(&state) else {
        return Err(LexerError::UnknownState { grammar, state });
    };
    if !visiting.insert(state) {
        return Err(LexerError::IncludeCycle(state));
    }
    for entry in entries {
        match entry {
            RuleEntry::Rule(rule) => out.push(rule),
            RuleEntry::Include(target) => flatten_state(grammar, *target, raw, out, visiting)?,
        }
    }
    visiting.remove(&state);
    Ok(())
}

fn check_targets(
    grammar: &'static str,
    rule: &RuleSpec,
    raw: &HashMap<LexerState, Vec<RuleEntry>>,
) -> Result<(), LexerError> {
    let mut actions = vec![rule.action];
    if let Emit::Cases(cases) = &rule.emit {
        actions.extend(cases.iter().map(|c| c.action));
    }
    let targets = actions
        .iter()
        .flat_map(|a| [Some(a.transition), a.at_eos])
        .flatten();
    for transition in targets {
        if let Transition::Push(state) | Transition::Switch(state) = transition
            && !raw.contains_key(&state)
        {
            return Err(LexerError::UnknownState { grammar, state });
        }
    }
    Ok(())
}
