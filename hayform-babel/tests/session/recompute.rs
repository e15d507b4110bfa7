use crate::common::jane_doe_book;
use hayform_babel::model::{EntryType, Person, Record};
use hayform_babel::{ConstraintRules, RenderedForm, SchedulerState, Session, SessionDefaults};
use std::cell::Cell;

fn rendered(session: &Session) -> RenderedForm {
    RenderedForm::render(session.entry(), ConstraintRules::default())
}

#[test]
fn test_record_settles_to_document_on_first_frame() {
    let mut session = Session::from_record(
        Record::new("doe2020", jane_doe_book()),
        SessionDefaults::default(),
    );
    assert_eq!(session.state(), SchedulerState::PendingRecompute);
    assert_eq!(session.document(), "");

    let form = rendered(&session);
    session.on_frame(&form);
    assert_eq!(session.state(), SchedulerState::Settled);
    assert!(session.document().starts_with("doe2020:\n  type: book\n"));
}

#[test]
fn test_two_mutations_in_one_turn_recompute_once() {
    let mut session = Session::new(SessionDefaults::default());
    let form = rendered(&session);
    session.on_frame(&form);
    assert_eq!(session.recomputations(), 1);

    session.set_label("first");
    session.set_label("second");

    let checks = Cell::new(0);
    let host = || {
        checks.set(checks.get() + 1);
        true
    };
    session.on_frame(&host);
    assert_eq!(checks.get(), 1);
    assert_eq!(session.recomputations(), 2);
    assert_eq!(session.document(), "second:\n  type: misc\n");
}

#[test]
fn test_lagging_presentation_never_emits_intermediate_state() {
    // The host's inputs still show one author when the model already has two; the second,
    // still-empty input only exists once the frame renders, and it makes the form invalid.
    let mut session = Session::new(SessionDefaults::default());
    session.edit(|entry| entry.author[0] = Person::combined("Ann"));
    session.edit(|entry| entry.author.push(Person::default()));

    let form = rendered(&session);
    assert!(!form.violations().is_empty());
    session.on_frame(&form);
    assert_eq!(session.document(), "");
}

#[test]
fn test_chapter_parent_round_trip() {
    let mut session = Session::new(SessionDefaults {
        default_type: EntryType::Chapter,
        ..SessionDefaults::default()
    });
    session.set_label("ch");
    session.attach_parent();
    session.edit(|entry| {
        if let Some(parent) = entry.parent.as_deref_mut() {
            parent.title = "Book".into();
        }
    });
    let form = rendered(&session);
    session.on_frame(&form);
    assert_eq!(
        session.document(),
        "ch:\n  type: chapter\n  parent:\n    type: book\n    title: Book\n"
    );

    session.detach_parent();
    assert!(session.frame_requested());
    let form = rendered(&session);
    session.on_frame(&form);
    assert_eq!(session.document(), "ch:\n  type: chapter\n");
}

#[test]
fn test_invalid_state_recovers() {
    let mut session = Session::new(SessionDefaults::default());
    session.edit(|entry| entry.date = "20".into());
    let form = rendered(&session);
    session.on_frame(&form);
    assert_eq!(session.document(), "");

    session.edit(|entry| entry.date = "2020-02".into());
    let form = rendered(&session);
    session.on_frame(&form);
    assert_eq!(session.document(), "label:\n  type: misc\n  date: 2020-02\n");
}
