//! Static keyword tables for the ERT and DIST languages.
//!
//! The tables are plain `static` data built from `const fn` builders, so every lookup is a
//! linear scan over a few dozen entries. Labels are matched case-sensitively: both languages
//! only recognise uppercase keywords.

pub mod dist;
pub mod enums;
pub mod ert;

use serde::Serialize;

/// The two embedded languages supported by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// ERT main configuration files.
    Ert,
    /// Prior distribution files (`GEN_KW` priors).
    Dist,
}

impl Language {
    /// The language id registered with the host editor.
    pub fn id(self) -> &'static str {
        match self {
            Self::Ert => "ert",
            Self::Dist => "dist",
        }
    }

    /// The keyword table for this language.
    pub fn keywords(self) -> &'static [Keyword] {
        match self {
            Self::Ert => ert::ERT_KEYWORDS,
            Self::Dist => dist::DIST_KEYWORDS,
        }
    }

    /// Look a keyword up by its exact (case-sensitive) label.
    pub fn keyword(self, label: &str) -> Option<&'static Keyword> {
        find_keyword(self.keywords(), label)
    }
}

/// Linear, case-sensitive keyword lookup.
pub fn find_keyword(keywords: &'static [Keyword], label: &str) -> Option<&'static Keyword> {
    keywords.iter().find(|k| k.label == label)
}

/// Extra classification attached to a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordTag {
    /// Still accepted, but slated for removal.
    Deprecated,
}

/// How a keyword declares its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Signature {
    /// A fixed number of numeric arguments (DIST).
    Count(usize),
    /// A parameter schema (ERT).
    Parameters(&'static [KeywordParameter]),
}

/// A top-level directive of one of the languages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    /// Unique uppercase identifier.
    pub label: &'static str,
    /// Example argument string shown in hovers.
    pub usage: &'static str,
    /// Markdown documentation.
    pub documentation: &'static str,
    /// Argument declaration.
    pub signature: Signature,
    /// Whether a configuration must contain this keyword.
    pub required: bool,
    /// Whether the arguments are numeric.
    pub numerical: bool,
    /// Whether the first argument is a file path.
    pub takes_filepath: bool,
    /// Optional classification tags.
    pub tags: &'static [KeywordTag],
}

impl Keyword {
    /// Start a keyword definition with no arguments.
    pub const fn new(
        label: &'static str,
        usage: &'static str,
        documentation: &'static str,
    ) -> Self {
        Self {
            label,
            usage,
            documentation,
            signature: Signature::Count(0),
            required: false,
            numerical: false,
            takes_filepath: false,
            tags: &[],
        }
    }

    /// Declare a fixed count of numeric arguments.
    pub const fn count(self, n: usize) -> Self {
        Self {
            signature: Signature::Count(n),
            numerical: true,
            ..self
        }
    }

    /// Declare a parameter schema.
    pub const fn params(self, parameters: &'static [KeywordParameter]) -> Self {
        Self {
            signature: Signature::Parameters(parameters),
            ..self
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn numerical(self) -> Self {
        Self {
            numerical: true,
            ..self
        }
    }

    pub const fn filepath(self) -> Self {
        Self {
            takes_filepath: true,
            ..self
        }
    }

    pub const fn deprecated(self) -> Self {
        Self {
            tags: &[KeywordTag::Deprecated],
            ..self
        }
    }

    /// Number of arguments the keyword takes.
    ///
    /// For schema keywords this counts the positional (undelimited) parameters.
    pub fn num_params(&self) -> usize {
        match self.signature {
            Signature::Count(n) => n,
            Signature::Parameters(params) => params.iter().filter(|p| p.is_positional()).count(),
        }
    }

    /// The declared parameter schema (empty for DIST keywords).
    pub fn parameters(&self) -> &'static [KeywordParameter] {
        match self.signature {
            Signature::Count(_) => &[],
            Signature::Parameters(params) => params,
        }
    }

    /// Find a parameter by label.
    pub fn parameter(&self, label: &str) -> Option<&'static KeywordParameter> {
        self.parameters().iter().find(|p| p.label == label)
    }

    pub fn is_deprecated(&self) -> bool {
        self.tags.contains(&KeywordTag::Deprecated)
    }

    /// Snippet insertion text with `${n:label}` placeholders.
    ///
    /// DIST keywords take their placeholder names from `usage`; ERT keywords use the labels
    /// of their required positional parameters.
    pub fn snippet(&self) -> String {
        let mut out = String::from(self.label);
        let names: Vec<&str> = match self.signature {
            Signature::Count(n) => self.usage.split_whitespace().take(n).collect(),
            Signature::Parameters(params) => params
                .iter()
                .filter(|p| p.required && p.is_positional())
                .map(|p| p.label)
                .collect(),
        };
        for (idx, name) in names.iter().enumerate() {
            out.push_str(&format!(" ${{{}:{}}}", idx + 1, name));
        }
        out
    }
}

/// A documented member of a closed option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterOption {
    pub label: &'static str,
    pub documentation: &'static str,
}

impl ParameterOption {
    pub const fn new(label: &'static str, documentation: &'static str) -> Self {
        Self {
            label,
            documentation,
        }
    }
}

/// A parameter accepted by an ERT keyword.
///
/// Parameters without a delimiter are positional; delimited ones are written as
/// `NAME<delimiter>VALUE` (e.g. `INIT_FILES:prior%d.grdecl`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordParameter {
    pub label: &'static str,
    pub documentation: &'static str,
    pub required: bool,
    pub numerical: bool,
    pub takes_filepath: bool,
    pub delimiter: Option<&'static str>,
    pub options: &'static [ParameterOption],
}

impl KeywordParameter {
    /// An optional positional parameter.
    pub const fn new(label: &'static str, documentation: &'static str) -> Self {
        Self {
            label,
            documentation,
            required: false,
            numerical: false,
            takes_filepath: false,
            delimiter: None,
            options: &[],
        }
    }

    /// A `NAME:VALUE` parameter.
    pub const fn named(label: &'static str, documentation: &'static str) -> Self {
        Self {
            delimiter: Some(":"),
            ..Self::new(label, documentation)
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn numerical(self) -> Self {
        Self {
            numerical: true,
            ..self
        }
    }

    pub const fn filepath(self) -> Self {
        Self {
            takes_filepath: true,
            ..self
        }
    }

    /// Restrict the value to a closed set.
    pub const fn options(self, options: &'static [ParameterOption]) -> Self {
        Self { options, ..self }
    }

    pub fn is_positional(&self) -> bool {
        self.delimiter.is_none()
    }

    /// Exact membership test against the option set; an empty set accepts anything.
    pub fn accepts(&self, value: &str) -> bool {
        self.options.is_empty() || self.options.iter().any(|o| o.label == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_labels_are_unique_and_uppercase() {
        for language in [Language::Ert, Language::Dist] {
            let keywords = language.keywords();
            for (idx, kw) in keywords.iter().enumerate() {
                assert_eq!(kw.label, kw.label.to_uppercase(), "{}", kw.label);
                assert!(
                    keywords[idx + 1..].iter().all(|other| other.label != kw.label),
                    "duplicate keyword {}",
                    kw.label
                );
            }
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(Language::Ert.keyword("FIELD").is_some());
        assert!(Language::Ert.keyword("field").is_none());
        assert!(Language::Dist.keyword("NORMAL").is_some());
        assert!(Language::Dist.keyword("Normal").is_none());
    }

    #[test]
    fn test_snippet_placeholders() {
        let normal = Language::Dist.keyword("NORMAL").unwrap();
        assert_eq!(normal.snippet(), "NORMAL ${1:mean} ${2:std}");

        let field = Language::Ert.keyword("FIELD").unwrap();
        assert!(field.snippet().starts_with("FIELD ${1:"));
    }

    #[test]
    fn test_parameter_option_membership() {
        let field = Language::Ert.keyword("FIELD").unwrap();
        let forward_init = field.parameter("FORWARD_INIT").unwrap();
        assert!(forward_init.accepts("True"));
        assert!(!forward_init.accepts("yes"));
    }
}
