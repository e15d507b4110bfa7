//! Field constraints of the entry form
//!
//! The recompute pipeline only asks one question of the presentation layer: is every rendered
//! field currently valid? [`Form`] is that capability. Hosts with their own widgets implement
//! it (a closure works too); headless hosts use [`RenderedForm`], which evaluates the same
//! native constraints the form's inputs carry:
//!
//! | field                     | constraint                                               |
//! |---------------------------|----------------------------------------------------------|
//! | date, url.date            | `-?YYYY(-MM(-DD)?)?`; url.date only while a URL is set    |
//! | runtime                   | timestamp `[[D:]H:]M:S[,ms]`                             |
//! | time_range                | `timestamp-timestamp`                                    |
//! | volume_total, page_total  | non-negative number                                      |
//! | author, editor            | every name required once the list has two or more people |
//! | structured person         | family name always required                              |
//! | affiliated group          | role and every name required                             |
//!
//! Patterns must match the whole value; empty values never violate a pattern.

use crate::model::{Entry, Person, RoleGroup};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const DATE_PATTERN: &str = "-?[0-9]{4}(-[01][0-9](-[0-3][0-9])?)?";
pub const DATE_HINT: &str = "YYYY-MM-DD, YYYY-MM or YYYY";

pub const TIMESTAMP_PATTERN: &str = "(([0-9]+:)?[0-9]+:)?[0-9]+:[0-9]+(,[0-9]+)?";
pub const TIMESTAMP_HINT: &str = "MM:SS (full format: DD:HH:MM:SS,msms)";

pub const TIMESTAMP_RANGE_HINT: &str = "MM:SS-MM:SS (full format: DD:HH:MM:SS,msms)";

static DATE_RE: Lazy<Regex> = Lazy::new(|| anchored(DATE_PATTERN));
static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| anchored(TIMESTAMP_PATTERN));
static TIMESTAMP_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| anchored(&format!("{TIMESTAMP_PATTERN}-{TIMESTAMP_PATTERN}")));

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).expect("field patterns are valid regexes")
}

/// Validity source consulted by the scheduler at each frame.
pub trait Form {
    /// Run every native constraint check across the currently rendered fields.
    fn check_validity(&self) -> bool;
}

impl<F> Form for F
where
    F: Fn() -> bool,
{
    fn check_validity(&self) -> bool {
        self()
    }
}

/// Knobs for [`RenderedForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintRules {
    /// Check date and timestamp patterns. Required-ness is always checked.
    pub enforce_patterns: bool,
}

impl Default for ConstraintRules {
    fn default() -> Self {
        ConstraintRules {
            enforce_patterns: true,
        }
    }
}

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field left empty.
    Missing,
    /// Value does not match the field pattern; carries the format hint.
    PatternMismatch(&'static str),
    /// Not a non-negative number.
    NotANumber,
}

/// A constraint failure at a dotted field path (`parent.author[1].name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "{}: required", self.path),
            ViolationKind::PatternMismatch(hint) => write!(f, "{}: expected {hint}", self.path),
            ViolationKind::NotANumber => {
                write!(f, "{}: expected a non-negative number", self.path)
            }
        }
    }
}

/// Constraint state of the fields rendered for one entry tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedForm {
    violations: Vec<Violation>,
}

impl RenderedForm {
    /// Evaluate the constraints of every field the form shows for `entry`.
    pub fn render(entry: &Entry, rules: ConstraintRules) -> Self {
        let mut checker = Checker {
            rules,
            violations: Vec::new(),
        };
        checker.entry("", entry);
        RenderedForm {
            violations: checker.violations,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl Form for RenderedForm {
    fn check_validity(&self) -> bool {
        self.violations.is_empty()
    }
}

struct Checker {
    rules: ConstraintRules,
    violations: Vec<Violation>,
}

impl Checker {
    fn report(&mut self, path: String, kind: ViolationKind) {
        self.violations.push(Violation { path, kind });
    }

    fn entry(&mut self, prefix: &str, entry: &Entry) {
        self.person_list(&format!("{prefix}author"), &entry.author);
        self.pattern(&format!("{prefix}date"), &entry.date, &DATE_RE, DATE_HINT);
        self.person_list(&format!("{prefix}editor"), &entry.editor);
        for (i, group) in entry.affiliated.iter().enumerate() {
            self.role_group(&format!("{prefix}affiliated[{i}]"), group);
        }
        self.number(&format!("{prefix}volume_total"), &entry.volume_total);
        self.number(&format!("{prefix}page_total"), &entry.page_total);
        self.pattern(
            &format!("{prefix}time_range"),
            &entry.time_range,
            &TIMESTAMP_RANGE_RE,
            TIMESTAMP_RANGE_HINT,
        );
        self.pattern(
            &format!("{prefix}runtime"),
            &entry.runtime,
            &TIMESTAMP_RE,
            TIMESTAMP_HINT,
        );
        if !entry.url.value.is_empty() {
            self.pattern(&format!("{prefix}url.date"), &entry.url.date, &DATE_RE, DATE_HINT);
        }
        if let Some(parent) = entry.parent.as_deref() {
            self.entry(&format!("{prefix}parent."), parent);
        }
    }

    /// A lone person is optional; in longer lists every person is.
    fn person_list(&mut self, path: &str, persons: &[Person]) {
        match persons {
            [single] => self.person(path, single, false),
            _ => {
                for (i, person) in persons.iter().enumerate() {
                    self.person(&format!("{path}[{i}]"), person, true);
                }
            }
        }
    }

    fn person(&mut self, path: &str, person: &Person, required: bool) {
        match person {
            Person::Combined { name } => {
                if required && name.is_empty() {
                    self.report(format!("{path}.name"), ViolationKind::Missing);
                }
            }
            Person::Structured(parts) => {
                if parts.family.is_empty() {
                    self.report(format!("{path}.family"), ViolationKind::Missing);
                }
            }
        }
    }

    fn role_group(&mut self, path: &str, group: &RoleGroup) {
        if group.role.is_none() {
            self.report(format!("{path}.role"), ViolationKind::Missing);
        }
        match group.names.as_slice() {
            [single] => self.person(&format!("{path}.names"), single, true),
            names => {
                for (i, person) in names.iter().enumerate() {
                    self.person(&format!("{path}.names[{i}]"), person, true);
                }
            }
        }
    }

    fn pattern(&mut self, path: &str, value: &str, re: &Regex, hint: &'static str) {
        if self.rules.enforce_patterns && !value.is_empty() && !re.is_match(value) {
            self.report(path.to_string(), ViolationKind::PatternMismatch(hint));
        }
    }

    fn number(&mut self, path: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => {}
            _ => self.report(path.to_string(), ViolationKind::NotANumber),
        }
    }
}
