//! Export tests (Entry → YAML)

use crate::common::{jane_doe_book, kitchensink_chapter};
use hayform_babel::model::{Entry, EntryType, Person};
use hayform_babel::{emit, normalize, to_yaml};
use insta::assert_snapshot;
use serde_yaml::Value;

#[test]
fn test_book_by_single_author() {
    let yaml = to_yaml("doe2020", &jane_doe_book()).unwrap();
    assert_snapshot!(yaml, @r"
    doe2020:
      type: book
      title: Example
      author: Jane Doe
      date: '2020'
      publisher: Acme
    ");
}

#[test]
fn test_book_values_read_back() {
    let yaml = to_yaml("doe2020", &jane_doe_book()).unwrap();
    let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
    let entry = parsed["doe2020"].as_mapping().unwrap();

    assert_eq!(entry.len(), 5);
    assert_eq!(parsed["doe2020"]["author"], Value::from("Jane Doe"));
    assert_eq!(parsed["doe2020"]["date"], Value::from("2020"));
    assert_eq!(parsed["doe2020"]["publisher"], Value::from("Acme"));
}

#[test]
fn test_kitchensink_chapter() {
    let yaml = to_yaml("ch1", &kitchensink_chapter()).unwrap();
    assert_snapshot!(yaml, @r"
    ch1:
      type: chapter
      title: The Middle
      author:
      - name: Doe
        given-name: Jane
      - Richard Roe
      date: 2019-05
      parent:
        type: book
        title: Collected Essays
        editor: Ann Editor
        publisher:
          name: Acme Press
          location: Berlin
        volume: 2
        volume-total: 3
      affiliated:
      - role: translator
        names: Tom Trans
      call-number: X1
      page-range: 20-45
      url:
        value: https://example.org/middle
        date: 2021-01-02
      serial-number:
        doi: 10.1000/182
      language: en
      archive: State Library
      archive-location: Box 4
    ");
}

#[test]
fn test_detached_parent_leaves_no_key() {
    let mut entry = kitchensink_chapter();
    entry.detach_parent();
    let yaml = to_yaml("ch1", &entry).unwrap();
    let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
    assert!(parsed["ch1"].get("parent").is_none());
    assert_eq!(parsed["ch1"]["type"], Value::from("chapter"));
}

#[test]
fn test_archive_gating_drops_filled_fields() {
    let mut entry = Entry::default();
    entry.archive_location = "Box 4".into();
    entry.call_number = "X1".into();
    let yaml = to_yaml("x", &entry).unwrap();
    assert_eq!(yaml, "x:\n  type: misc\n");
}

#[test]
fn test_numeric_fields_in_document() {
    let mut entry = Entry::default();
    entry.issue = "2020".into();
    entry.page_range = "20-24".into();
    entry.edition = String::new();
    let yaml = to_yaml("x", &entry).unwrap();
    let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed["x"]["issue"], Value::from(2020));
    assert_eq!(parsed["x"]["page-range"], Value::from("20-24"));
    assert!(parsed["x"].get("edition").is_none());
}

#[test]
fn test_deep_parent_chain_nests() {
    let mut entry = Entry::create_default(Some(EntryType::Scene));
    let mut current = &mut entry;
    for depth in 0..6 {
        current.title = format!("level {depth}");
        current = current.attach_parent();
    }
    let yaml = to_yaml("deep", &entry).unwrap();
    let parsed: Value = serde_yaml::from_str(&yaml).unwrap();

    let mut node = &parsed["deep"];
    for depth in 0..6 {
        assert_eq!(node["title"], Value::from(format!("level {depth}")));
        node = &node["parent"];
    }
    assert_eq!(node["type"], Value::from("video"));
    assert!(node.get("parent").is_none());
}

#[test]
fn test_emit_is_separate_from_normalize() {
    let mut entry = Entry::default();
    entry.editor = vec![Person::combined(""), Person::combined("Bo")];
    let doc = normalize("x", &entry);
    let yaml = emit(&doc).unwrap();
    let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
    let editors = parsed["x"]["editor"].as_sequence().unwrap();
    assert_eq!(editors, &vec![Value::from(""), Value::from("Bo")]);
}
