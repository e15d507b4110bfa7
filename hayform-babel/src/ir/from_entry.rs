//! Entry → normalized tree
//!
//! Every rule here is local to one field, so they compose in any order:
//!
//! - numeric fields become integers when they are nothing but ASCII digits
//! - one-element person lists collapse to the person itself
//! - publisher, url and serial number collapse to a bare string when their extra parts are empty
//! - `archive_location` and `call_number` only exist next to a non-empty `archive`
//! - the parent is normalized recursively, or `Null`

use super::nodes::{Node, NormalizedDoc};
use crate::model::{Entry, Person, Publisher, RoleGroup, SerialKind, SerialNumber, Url};

/// Normalize `entry` for filing under `label`.
pub fn normalize(label: &str, entry: &Entry) -> NormalizedDoc {
    NormalizedDoc {
        label: label.to_string(),
        root: from_entry(entry),
    }
}

/// Converts one entry (and its ancestors) to a mapping node.
pub fn from_entry(entry: &Entry) -> Node {
    let mut fields: Vec<(String, Node)> = Vec::with_capacity(27);
    let mut push = |key: &str, value: Node| fields.push((key.to_string(), value));

    push("type", entry.entry_type.as_str().into());
    push("title", entry.title.as_str().into());
    push("author", persons(&entry.author));
    push("date", entry.date.as_str().into());
    push(
        "parent",
        entry
            .parent
            .as_deref()
            .map(from_entry)
            .unwrap_or(Node::Null),
    );
    push("abstract", entry.abstract_.as_str().into());
    push("genre", entry.genre.as_str().into());
    push("editor", persons(&entry.editor));
    push(
        "affiliated",
        Node::Seq(entry.affiliated.iter().map(role_group).collect()),
    );
    push("call_number", entry.call_number.as_str().into());
    push("publisher", publisher(&entry.publisher));
    push("location", entry.location.as_str().into());
    push("organization", entry.organization.as_str().into());
    push("issue", try_numeric(&entry.issue));
    push("volume", try_numeric(&entry.volume));
    push("volume_total", try_numeric(&entry.volume_total));
    push("edition", try_numeric(&entry.edition));
    push("page_range", try_numeric(&entry.page_range));
    push("page_total", try_numeric(&entry.page_total));
    push("time_range", entry.time_range.as_str().into());
    push("runtime", entry.runtime.as_str().into());
    push("url", url(&entry.url));
    push("serial_number", serial_number(&entry.serial_number));
    push("language", entry.language.as_str().into());
    push("archive", entry.archive.as_str().into());
    push("archive_location", entry.archive_location.as_str().into());
    push("note", entry.note.as_str().into());

    if entry.archive.is_empty() {
        fields.retain(|(key, _)| key != "archive_location" && key != "call_number");
    }

    Node::Map(fields)
}

/// `"2020"` → `2020`; anything else (including `""` and `"3-5"`) stays a string.
///
/// Digit runs that overflow `u64` stay strings as well.
pub fn try_numeric(value: &str) -> Node {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(number) = value.parse::<u64>() {
            return Node::Int(number);
        }
    }
    Node::Str(value.to_string())
}

/// Render a person list, unwrapping it when it holds exactly one person.
fn persons(list: &[Person]) -> Node {
    match list {
        [single] => person(single),
        _ => Node::Seq(list.iter().map(person).collect()),
    }
}

pub fn person(person: &Person) -> Node {
    match person {
        Person::Combined { name } => name.as_str().into(),
        Person::Structured(parts) => Node::Map(vec![
            ("name".into(), parts.family.as_str().into()),
            ("given_name".into(), parts.given.as_str().into()),
            ("prefix".into(), parts.prefix.as_str().into()),
            ("suffix".into(), parts.suffix.as_str().into()),
            ("alias".into(), parts.alias.as_str().into()),
        ]),
    }
}

fn role_group(group: &RoleGroup) -> Node {
    let role = group
        .role
        .map(|role| Node::from(role.as_str()))
        .unwrap_or(Node::Null);
    Node::Map(vec![
        ("role".into(), role),
        ("names".into(), persons(&group.names)),
    ])
}

fn publisher(publisher: &Publisher) -> Node {
    if publisher.name.is_empty() {
        Node::Str(String::new())
    } else if publisher.location.is_empty() {
        publisher.name.as_str().into()
    } else {
        Node::Map(vec![
            ("name".into(), publisher.name.as_str().into()),
            ("location".into(), publisher.location.as_str().into()),
        ])
    }
}

fn url(url: &Url) -> Node {
    if url.value.is_empty() {
        Node::Str(String::new())
    } else if url.date.is_empty() {
        url.value.as_str().into()
    } else {
        Node::Map(vec![
            ("value".into(), url.value.as_str().into()),
            ("date".into(), url.date.as_str().into()),
        ])
    }
}

/// Full mapping as soon as one per-kind identifier is set, otherwise just the generic serial.
fn serial_number(serial: &SerialNumber) -> Node {
    if !serial.has_identifier() {
        return serial.serial.as_str().into();
    }
    let mut fields = vec![("serial".to_string(), serial.serial.as_str().into())];
    for kind in SerialKind::ALL {
        fields.push((kind.as_str().to_string(), serial.get(kind).into()));
    }
    Node::Map(fields)
}
