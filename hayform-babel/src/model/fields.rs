//! Compound entry fields: contributor roles, publisher, URL and serial numbers

use crate::error::FormatError;
use crate::model::person::Person;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Credited role of an affiliated contributor group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Afterword,
    Annotator,
    CastMember,
    Cinematography,
    Collaborator,
    Commentator,
    Compiler,
    Composer,
    Director,
    ExecutiveProducer,
    Foreword,
    Founder,
    Holder,
    Illustrator,
    Introduction,
    Narrator,
    Organizer,
    Producer,
    Translator,
    Writer,
}

impl Role {
    pub const ALL: [Role; 20] = [
        Role::Afterword,
        Role::Annotator,
        Role::CastMember,
        Role::Cinematography,
        Role::Collaborator,
        Role::Commentator,
        Role::Compiler,
        Role::Composer,
        Role::Director,
        Role::ExecutiveProducer,
        Role::Foreword,
        Role::Founder,
        Role::Holder,
        Role::Illustrator,
        Role::Introduction,
        Role::Narrator,
        Role::Organizer,
        Role::Producer,
        Role::Translator,
        Role::Writer,
    ];

    /// Wire name, as written into documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Afterword => "afterword",
            Role::Annotator => "annotator",
            Role::CastMember => "cast-member",
            Role::Cinematography => "cinematography",
            Role::Collaborator => "collaborator",
            Role::Commentator => "commentator",
            Role::Compiler => "compiler",
            Role::Composer => "composer",
            Role::Director => "director",
            Role::ExecutiveProducer => "executive-producer",
            Role::Foreword => "foreword",
            Role::Founder => "founder",
            Role::Holder => "holder",
            Role::Illustrator => "illustrator",
            Role::Introduction => "introduction",
            Role::Narrator => "narrator",
            Role::Organizer => "organizer",
            Role::Producer => "producer",
            Role::Translator => "translator",
            Role::Writer => "writer",
        }
    }

    /// Human-readable name ("Cast member").
    pub fn display_name(&self) -> String {
        capitalize(&self.as_str().replace('-', " "))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| FormatError::UnknownRole(s.to_string()))
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Contributors sharing one credited role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleGroup {
    /// `None` until the user picks a role.
    pub role: Option<Role>,
    pub names: Vec<Person>,
}

impl Default for RoleGroup {
    fn default() -> Self {
        RoleGroup {
            role: None,
            names: vec![Person::default()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publisher {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Url {
    pub value: String,
    /// Access date.
    pub date: String,
}

/// Kinds of identifier with a dedicated slot in [`SerialNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerialKind {
    Doi,
    Isbn,
    Issn,
    Pmid,
    Pmcid,
    Arxiv,
}

impl SerialKind {
    pub const ALL: [SerialKind; 6] = [
        SerialKind::Doi,
        SerialKind::Isbn,
        SerialKind::Issn,
        SerialKind::Pmid,
        SerialKind::Pmcid,
        SerialKind::Arxiv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SerialKind::Doi => "doi",
            SerialKind::Isbn => "isbn",
            SerialKind::Issn => "issn",
            SerialKind::Pmid => "pmid",
            SerialKind::Pmcid => "pmcid",
            SerialKind::Arxiv => "arxiv",
        }
    }
}

/// Serial numbers of an item.
///
/// The generic `serial` slot and the per-kind slots can all be filled at once; which of them
/// reaches the document is decided at normalization time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialNumber {
    pub serial: String,
    pub doi: String,
    pub isbn: String,
    pub issn: String,
    pub pmid: String,
    pub pmcid: String,
    pub arxiv: String,
}

impl SerialNumber {
    pub fn get(&self, kind: SerialKind) -> &str {
        match kind {
            SerialKind::Doi => &self.doi,
            SerialKind::Isbn => &self.isbn,
            SerialKind::Issn => &self.issn,
            SerialKind::Pmid => &self.pmid,
            SerialKind::Pmcid => &self.pmcid,
            SerialKind::Arxiv => &self.arxiv,
        }
    }

    pub fn get_mut(&mut self, kind: SerialKind) -> &mut String {
        match kind {
            SerialKind::Doi => &mut self.doi,
            SerialKind::Isbn => &mut self.isbn,
            SerialKind::Issn => &mut self.issn,
            SerialKind::Pmid => &mut self.pmid,
            SerialKind::Pmcid => &mut self.pmcid,
            SerialKind::Arxiv => &mut self.arxiv,
        }
    }

    pub fn set(&mut self, kind: SerialKind, value: impl Into<String>) {
        *self.get_mut(kind) = value.into();
    }

    /// Whether any per-kind slot is filled.
    pub fn has_identifier(&self) -> bool {
        SerialKind::ALL.iter().any(|kind| !self.get(*kind).is_empty())
    }

    /// Strip a leading resolver URL (`https://doi.org/...`) from every per-kind slot.
    ///
    /// Returns `true` if any slot changed. The generic `serial` slot is left alone.
    pub fn strip_resolver_prefixes(&mut self, prefixes: &ResolverPrefixes) -> bool {
        let mut changed = false;
        for kind in SerialKind::ALL {
            let slot = self.get_mut(kind);
            if let Some(stripped) = prefixes.strip(slot) {
                *slot = stripped.to_string();
                changed = true;
            }
        }
        changed
    }
}

/// URL prefixes that resolve identifiers and are removed when pasted into an identifier slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverPrefixes(pub Vec<String>);

impl ResolverPrefixes {
    fn strip<'a>(&self, value: &'a str) -> Option<&'a str> {
        self.0
            .iter()
            .find_map(|prefix| value.strip_prefix(prefix.as_str()))
    }
}

impl Default for ResolverPrefixes {
    fn default() -> Self {
        ResolverPrefixes(
            [
                "https://doi.org/",
                "https://dx.doi.org/",
                "https://arxiv.org/abs/",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}
