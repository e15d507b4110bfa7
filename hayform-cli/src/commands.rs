//! CLI commands over records
//!
//! Every command here is a pure function from already-loaded inputs to the text the binary
//! prints; reading files, writing output and exiting live in main.rs.
//!
//! ## Pipeline
//!
//! A record file goes through the same path the form does:
//!
//! 1. **Load** - JSON or YAML text → [`Record`]
//! 2. **Tidy** - resolver prefixes (`https://doi.org/`, ...) are stripped from serial numbers
//! 3. **Settle** - a [`Session`] is seeded with the record and driven through one frame,
//!    with [`RenderedForm`] answering the validity check
//!
//! A record whose form is invalid yields its violations instead of a document.

use hayform_babel::model::{Entry, EntryType, ResolverPrefixes, Role};
use hayform_babel::{
    ConstraintRules, Form, Record, RecordFormat, RenderedForm, Session, SessionDefaults, Violation,
};

/// Settings shared by the commands that run records through the form.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub defaults: SessionDefaults,
    pub prefixes: ResolverPrefixes,
    pub rules: ConstraintRules,
}

/// Pick the record format from `--from` or, failing that, the file extension.
pub fn resolve_format(input: &str, from: Option<&str>) -> Result<RecordFormat, String> {
    match from {
        Some(name) => RecordFormat::from_name(name).map_err(|e| e.to_string()),
        None => RecordFormat::detect_from_filename(input).ok_or_else(|| {
            format!(
                "Could not detect format from filename '{input}'\nPlease specify --from explicitly"
            )
        }),
    }
}

pub fn load_record(source: &str, format: RecordFormat) -> Result<Record, String> {
    format.parse(source).map_err(|e| e.to_string())
}

/// Run a record through the form and return the settled document.
///
/// `Err` carries the violations that kept the document empty.
pub fn emit_record(mut record: Record, settings: &Settings) -> Result<String, Vec<Violation>> {
    record.entry.strip_serial_prefixes(&settings.prefixes);

    let form = RenderedForm::render(&record.entry, settings.rules);
    let mut session = Session::from_record(record, settings.defaults.clone());
    session.on_frame(&form);

    if form.check_validity() {
        Ok(session.document().to_string())
    } else {
        Err(form.violations().to_vec())
    }
}

pub fn check_record(record: &Record, rules: ConstraintRules) -> Vec<Violation> {
    RenderedForm::render(&record.entry, rules)
        .violations()
        .to_vec()
}

pub fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| format!("{violation}\n"))
        .collect()
}

/// A blank record of `entry_type` with `parents` ancestors along the default-parent chain.
pub fn template_record(entry_type: EntryType, parents: usize) -> Record {
    let mut entry = Entry::create_default(Some(entry_type));
    let mut current = &mut entry;
    for _ in 0..parents {
        current = current.attach_parent();
    }
    Record::new("", entry)
}

pub fn list_types() -> String {
    let mut output = String::from("Entry types:\n");
    for entry_type in EntryType::ALL {
        output.push_str(&format!(
            "  {:<14} {:<16} (parent: {})\n",
            entry_type.as_str(),
            entry_type.display_name(),
            entry_type.default_parent()
        ));
    }
    output
}

pub fn list_roles() -> String {
    let mut output = String::from("Roles:\n");
    for role in Role::ALL {
        output.push_str(&format!("  {:<16} {}\n", role.as_str(), role.display_name()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use hayform_babel::model::{Person, SerialKind};

    fn book() -> Record {
        let mut entry = Entry::create_default(Some(EntryType::Book));
        entry.title = "Rust".into();
        entry.author = vec![Person::combined("Jane Doe")];
        Record::new("doe", entry)
    }

    #[test]
    fn resolve_format_prefers_explicit_name() {
        assert_eq!(
            resolve_format("entry.json", Some("yaml")),
            Ok(RecordFormat::Yaml)
        );
        assert_eq!(resolve_format("entry.yml", None), Ok(RecordFormat::Yaml));
        assert!(resolve_format("entry.txt", None).is_err());
        assert!(resolve_format("entry.json", Some("toml")).is_err());
    }

    #[test]
    fn emit_record_settles_a_valid_record() {
        let document = emit_record(book(), &Settings::default()).unwrap();
        assert_eq!(
            document,
            "doe:\n  type: book\n  title: Rust\n  author: Jane Doe\n"
        );
    }

    #[test]
    fn emit_record_strips_resolver_prefixes() {
        let mut record = book();
        record
            .entry
            .serial_number
            .set(SerialKind::Doi, "https://doi.org/10.1000/182");
        let document = emit_record(record, &Settings::default()).unwrap();
        assert!(document.contains("    doi: 10.1000/182\n"));
    }

    #[test]
    fn emit_record_reports_violations() {
        let mut record = book();
        record.entry.date = "spring".into();
        let violations = emit_record(record, &Settings::default()).unwrap_err();
        assert_eq!(
            format_violations(&violations),
            "date: expected YYYY-MM-DD, YYYY-MM or YYYY\n"
        );
    }

    #[test]
    fn blank_label_uses_configured_default() {
        let settings = Settings {
            defaults: SessionDefaults {
                default_label: "untitled".into(),
                ..SessionDefaults::default()
            },
            ..Settings::default()
        };
        let record = Record::new("", Entry::create_default(Some(EntryType::Web)));
        assert_eq!(
            emit_record(record, &settings).unwrap(),
            "untitled:\n  type: web\n"
        );
    }

    #[test]
    fn template_follows_default_parent_chain() {
        let record = template_record(EntryType::Chapter, 2);
        assert_eq!(record.entry.parent_depth(), 2);
        let parent = record.entry.parent.as_deref().unwrap();
        assert_eq!(parent.entry_type, EntryType::Book);
        assert_eq!(
            parent.parent.as_deref().unwrap().entry_type,
            EntryType::Misc
        );
    }

    #[test]
    fn listings_cover_every_value() {
        assert_eq!(list_types().lines().count(), EntryType::ALL.len() + 1);
        assert!(list_roles().contains("  cast-member      Cast member\n"));
    }
}
