//! Operator vocabularies
//!
//! An operator vocabulary is a named set of short tokens, each bound to one
//! top-level matching routine, mimicking a relational database's native JSON
//! operators. The set of vocabularies is closed: a new dialect is a new
//! [`OperatorVocabulary`] variant, resolved by name once at configuration
//! time.

use jsontext_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level matching routine an operator token selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Match an entry by integer position / numeric key
    MatchOnInt,
    /// Match an object member by exact key
    MatchOnStr,
    /// Match one level below an outer key (key → key)
    MatchOnPath,
}

impl MatchKind {
    /// Operation name as used in `allowed_operators`
    pub fn name(&self) -> &'static str {
        match self {
            MatchKind::MatchOnInt => "matchOnInt",
            MatchKind::MatchOnStr => "matchOnStr",
            MatchKind::MatchOnPath => "matchOnPath",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported operator dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OperatorVocabulary {
    /// PostgreSQL JSON operators: `->`, `->>`, `#>`
    #[default]
    Postgres,
}

const POSTGRES_OPERATORS: &[(MatchKind, &str)] = &[
    (MatchKind::MatchOnInt, "->"),
    (MatchKind::MatchOnStr, "->>"),
    (MatchKind::MatchOnPath, "#>"),
];

impl OperatorVocabulary {
    /// Every supported vocabulary
    pub const ALL: &'static [OperatorVocabulary] = &[OperatorVocabulary::Postgres];

    /// Canonical configuration name
    pub fn name(&self) -> &'static str {
        match self {
            OperatorVocabulary::Postgres => "postgres",
        }
    }

    /// Resolve a vocabulary by its configuration name (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if no vocabulary carries that name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(OperatorVocabulary::Postgres),
            other => Err(Error::configuration(format!(
                "unknown operator backend '{}', expected one of: {}",
                other,
                OperatorVocabulary::ALL
                    .iter()
                    .map(OperatorVocabulary::name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    /// Operation name → operator token mapping
    pub fn allowed_operators(&self) -> &'static [(MatchKind, &'static str)] {
        match self {
            OperatorVocabulary::Postgres => POSTGRES_OPERATORS,
        }
    }

    /// Every operator token of this vocabulary
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> {
        self.allowed_operators().iter().map(|(_, token)| *token)
    }

    /// Token bound to `kind`, if the vocabulary supports it
    pub fn token_for(&self, kind: MatchKind) -> Option<&'static str> {
        self.allowed_operators()
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, token)| *token)
    }

    /// Routine bound to `token`, if it is one of this vocabulary's tokens
    pub fn kind_for(&self, token: &str) -> Option<MatchKind> {
        self.allowed_operators()
            .iter()
            .find(|(_, t)| *t == token)
            .map(|(kind, _)| *kind)
    }
}

impl fmt::Display for OperatorVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperatorVocabulary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        OperatorVocabulary::from_name(s)
    }
}

impl TryFrom<String> for OperatorVocabulary {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        OperatorVocabulary::from_name(&s)
    }
}

impl From<OperatorVocabulary> for String {
    fn from(v: OperatorVocabulary) -> Self {
        v.name().to_string()
    }
}
