//! Contributor names
//!
//! A [`Person`] is either a single free-text name or a set of structured name parts. The two
//! representations are mutually exclusive: switching between them with
//! [`Person::toggle_variant`] rebuilds the value and keeps no hidden state.

use serde::{Deserialize, Serialize};

/// A contributor name.
///
/// The discriminant is explicit (`kind` in serialized records):
///
/// ```text
/// {"kind": "combined", "name": "Jane Doe"}
/// {"kind": "structured", "family": "Doe", "given": "Jane"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Person {
    /// The full rendered name in one field.
    Combined {
        #[serde(default)]
        name: String,
    },
    /// Name split into its parts.
    Structured(NameParts),
}

/// Structured parts of a person's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameParts {
    pub family: String,
    pub given: String,
    pub prefix: String,
    pub suffix: String,
    pub alias: String,
}

impl Default for Person {
    fn default() -> Self {
        Person::Combined {
            name: String::new(),
        }
    }
}

impl Person {
    /// Shorthand for a combined name.
    pub fn combined(name: impl Into<String>) -> Self {
        Person::Combined { name: name.into() }
    }

    /// Shorthand for a structured name with only family and given parts.
    pub fn structured(family: impl Into<String>, given: impl Into<String>) -> Self {
        Person::Structured(NameParts {
            family: family.into(),
            given: given.into(),
            ..NameParts::default()
        })
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Person::Structured(_))
    }

    /// Switch to the other representation.
    ///
    /// Structured names collapse into `prefix family, given, suffix`, leaving out empty parts
    /// together with their separators; `alias` is dropped. A combined name moves wholesale into
    /// `family`.
    pub fn toggle_variant(&self) -> Person {
        match self {
            Person::Structured(parts) => Person::Combined {
                name: parts.render(),
            },
            Person::Combined { name } => Person::Structured(NameParts {
                family: name.clone(),
                ..NameParts::default()
            }),
        }
    }
}

impl NameParts {
    fn render(&self) -> String {
        let mut out = String::new();
        if !self.prefix.is_empty() {
            out.push_str(&self.prefix);
            out.push(' ');
        }
        out.push_str(&self.family);
        for part in [&self.given, &self.suffix] {
            if !part.is_empty() {
                out.push_str(", ");
                out.push_str(part);
            }
        }
        out
    }
}
