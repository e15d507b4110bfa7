//! Property tests for the normalization laws.

use hayform_babel::ir::from_entry::try_numeric;
use hayform_babel::model::{Entry, EntryType, NameParts, Person};
use hayform_babel::{normalize, to_yaml, Node};
use proptest::prelude::*;

/// Printable text including characters YAML treats specially.
const TEXT: &str = "[a-zA-Z0-9 :#'\"&*!|>%@,.-]{0,12}";

fn person() -> impl Strategy<Value = Person> {
    prop_oneof![
        TEXT.prop_map(Person::combined),
        (TEXT, TEXT, "[a-z]{0,3}").prop_map(|(family, given, prefix)| {
            Person::Structured(NameParts {
                family,
                given,
                prefix,
                ..NameParts::default()
            })
        }),
    ]
}

fn entry() -> impl Strategy<Value = Entry> {
    (
        prop::sample::select(EntryType::ALL.to_vec()),
        TEXT,
        prop::collection::vec(person(), 0..4),
        "[0-9]{0,4}|[0-9]{1,2}-[0-9]{1,2}",
        "[a-z ]{0,6}",
        any::<bool>(),
    )
        .prop_map(|(kind, title, author, issue, archive, with_parent)| {
            let mut entry = Entry::create_default(Some(kind));
            entry.title = title;
            entry.author = author;
            entry.issue = issue;
            entry.archive = archive;
            entry.call_number = "C-1".into();
            if with_parent {
                entry.attach_parent().title = "Parent".into();
            }
            entry
        })
}

proptest! {
    #[test]
    fn normalize_is_deterministic(entry in entry()) {
        let snapshot = entry.snapshot();
        prop_assert_eq!(normalize("k", &entry), normalize("k", &snapshot));
        prop_assert_eq!(to_yaml("k", &entry).unwrap(), to_yaml("k", &snapshot).unwrap());
    }

    #[test]
    fn emitted_yaml_always_parses(entry in entry()) {
        let yaml = to_yaml("k", &entry).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        prop_assert!(parsed.get("k").is_some());
    }

    #[test]
    fn archive_gates_call_number(entry in entry()) {
        let root = normalize("k", &entry).root;
        prop_assert_eq!(root.get("call_number").is_some(), !entry.archive.is_empty());
    }

    #[test]
    fn single_author_is_never_wrapped(p in person()) {
        let mut entry = Entry::default();
        entry.author = vec![p.clone()];
        let root = normalize("k", &entry).root;
        prop_assert!(!matches!(root.get("author"), Some(Node::Seq(_))));
    }

    #[test]
    fn combined_name_survives_double_toggle(name in ".{0,24}") {
        let person = Person::combined(name);
        prop_assert_eq!(person.toggle_variant().toggle_variant(), person);
    }

    #[test]
    fn digit_strings_become_integers(n in any::<u32>()) {
        prop_assert_eq!(try_numeric(&n.to_string()), Node::Int(u64::from(n)));
    }

    #[test]
    fn non_digit_strings_stay_strings(s in "[0-9]{0,3}[^0-9][0-9]{0,3}") {
        prop_assert_eq!(try_numeric(&s), Node::Str(s.clone()));
    }
}
