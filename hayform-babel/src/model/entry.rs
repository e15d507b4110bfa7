//! The recursive entry record
//!
//! An [`Entry`] is one bibliographic item. It exclusively owns its optional parent (the book a
//! chapter belongs to, the periodical an article appeared in, ...), so entry chains are strict
//! trees: a parent is always freshly built by [`Entry::attach_parent`] and can only be dropped
//! again, never re-linked.

use crate::error::FormatError;
use crate::model::fields::{capitalize, Publisher, ResolverPrefixes, RoleGroup, SerialNumber, Url};
use crate::model::person::Person;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of bibliographic item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Anthology,
    Anthos,
    Article,
    Artwork,
    Audio,
    Blog,
    Book,
    Case,
    Chapter,
    Conference,
    Entry,
    Exhibition,
    Legislation,
    Manuscript,
    #[default]
    Misc,
    Newspaper,
    Original,
    Patent,
    Performance,
    Periodical,
    Post,
    Proceedings,
    Reference,
    Report,
    Repository,
    Scene,
    Thesis,
    Thread,
    Video,
    Web,
}

impl EntryType {
    pub const ALL: [EntryType; 30] = [
        EntryType::Anthology,
        EntryType::Anthos,
        EntryType::Article,
        EntryType::Artwork,
        EntryType::Audio,
        EntryType::Blog,
        EntryType::Book,
        EntryType::Case,
        EntryType::Chapter,
        EntryType::Conference,
        EntryType::Entry,
        EntryType::Exhibition,
        EntryType::Legislation,
        EntryType::Manuscript,
        EntryType::Misc,
        EntryType::Newspaper,
        EntryType::Original,
        EntryType::Patent,
        EntryType::Performance,
        EntryType::Periodical,
        EntryType::Post,
        EntryType::Proceedings,
        EntryType::Reference,
        EntryType::Report,
        EntryType::Repository,
        EntryType::Scene,
        EntryType::Thesis,
        EntryType::Thread,
        EntryType::Video,
        EntryType::Web,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Anthology => "anthology",
            EntryType::Anthos => "anthos",
            EntryType::Article => "article",
            EntryType::Artwork => "artwork",
            EntryType::Audio => "audio",
            EntryType::Blog => "blog",
            EntryType::Book => "book",
            EntryType::Case => "case",
            EntryType::Chapter => "chapter",
            EntryType::Conference => "conference",
            EntryType::Entry => "entry",
            EntryType::Exhibition => "exhibition",
            EntryType::Legislation => "legislation",
            EntryType::Manuscript => "manuscript",
            EntryType::Misc => "misc",
            EntryType::Newspaper => "newspaper",
            EntryType::Original => "original",
            EntryType::Patent => "patent",
            EntryType::Performance => "performance",
            EntryType::Periodical => "periodical",
            EntryType::Post => "post",
            EntryType::Proceedings => "proceedings",
            EntryType::Reference => "reference",
            EntryType::Report => "report",
            EntryType::Repository => "repository",
            EntryType::Scene => "scene",
            EntryType::Thesis => "thesis",
            EntryType::Thread => "thread",
            EntryType::Video => "video",
            EntryType::Web => "web",
        }
    }

    pub fn display_name(&self) -> String {
        capitalize(self.as_str())
    }

    /// Type given to a parent created for an entry of this type.
    pub fn default_parent(&self) -> EntryType {
        match self {
            EntryType::Article => EntryType::Periodical,
            EntryType::Chapter => EntryType::Book,
            EntryType::Entry => EntryType::Reference,
            EntryType::Anthos => EntryType::Anthology,
            EntryType::Web => EntryType::Web,
            EntryType::Scene => EntryType::Video,
            EntryType::Artwork => EntryType::Exhibition,
            EntryType::Legislation => EntryType::Anthology,
            EntryType::Post => EntryType::Post,
            EntryType::Video => EntryType::Video,
            EntryType::Audio => EntryType::Audio,
            _ => EntryType::Misc,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FormatError::UnknownType(s.to_string()))
    }
}

/// One bibliographic item and, optionally, the item it is part of.
///
/// Field order is the order keys appear in emitted documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub title: String,
    pub author: Vec<Person>,
    pub date: String,
    pub parent: Option<Box<Entry>>,
    #[serde(rename = "abstract")]
    pub abstract_: String,
    pub genre: String,
    pub editor: Vec<Person>,
    pub affiliated: Vec<RoleGroup>,
    pub call_number: String,
    pub publisher: Publisher,
    pub location: String,
    pub organization: String,
    pub issue: String,
    pub volume: String,
    pub volume_total: String,
    pub edition: String,
    pub page_range: String,
    pub page_total: String,
    pub time_range: String,
    pub runtime: String,
    pub url: Url,
    pub serial_number: SerialNumber,
    pub language: String,
    pub archive: String,
    pub archive_location: String,
    pub note: String,
}

impl Default for Entry {
    fn default() -> Self {
        Entry::create_default(None)
    }
}

impl Entry {
    /// A blank entry: one empty person in `author` and `editor`, everything else empty.
    pub fn create_default(entry_type: Option<EntryType>) -> Self {
        Entry {
            entry_type: entry_type.unwrap_or_default(),
            title: String::new(),
            author: vec![Person::default()],
            date: String::new(),
            parent: None,
            abstract_: String::new(),
            genre: String::new(),
            editor: vec![Person::default()],
            affiliated: Vec::new(),
            call_number: String::new(),
            publisher: Publisher::default(),
            location: String::new(),
            organization: String::new(),
            issue: String::new(),
            volume: String::new(),
            volume_total: String::new(),
            edition: String::new(),
            page_range: String::new(),
            page_total: String::new(),
            time_range: String::new(),
            runtime: String::new(),
            url: Url::default(),
            serial_number: SerialNumber::default(),
            language: String::new(),
            archive: String::new(),
            archive_location: String::new(),
            note: String::new(),
        }
    }

    /// A blank entry of the same type. Backs the "clear fields" action.
    pub fn cleared(&self) -> Self {
        Entry::create_default(Some(self.entry_type))
    }

    /// Attach a blank parent typed after [`EntryType::default_parent`].
    ///
    /// An existing parent is kept as is. Returns the parent either way.
    pub fn attach_parent(&mut self) -> &mut Entry {
        let parent_type = self.entry_type.default_parent();
        self.parent
            .get_or_insert_with(|| Box::new(Entry::create_default(Some(parent_type))))
    }

    /// Drop the parent along with its own ancestors.
    pub fn detach_parent(&mut self) -> Option<Box<Entry>> {
        self.parent.take()
    }

    /// Deep copy, independent of any later mutation of `self`.
    pub fn snapshot(&self) -> Entry {
        self.clone()
    }

    /// Number of ancestors above this entry.
    pub fn parent_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent.as_deref();
        while let Some(parent) = current {
            depth += 1;
            current = parent.parent.as_deref();
        }
        depth
    }

    /// Apply [`SerialNumber::strip_resolver_prefixes`] to this entry and every ancestor.
    pub fn strip_serial_prefixes(&mut self, prefixes: &ResolverPrefixes) -> bool {
        let mut changed = self.serial_number.strip_resolver_prefixes(prefixes);
        if let Some(parent) = self.parent.as_deref_mut() {
            changed |= parent.strip_serial_prefixes(prefixes);
        }
        changed
    }
}

/// Top-level document: the citation label and its entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub label: String,
    pub entry: Entry,
}

/// Label used when the user leaves it blank.
pub const DEFAULT_LABEL: &str = "label";

impl Record {
    pub fn new(label: impl Into<String>, entry: Entry) -> Self {
        Record {
            label: label.into(),
            entry,
        }
    }

    pub fn effective_label(&self) -> &str {
        effective_label(&self.label, DEFAULT_LABEL)
    }
}

pub(crate) fn effective_label<'a>(label: &'a str, fallback: &'a str) -> &'a str {
    if label.is_empty() {
        fallback
    } else {
        label
    }
}
