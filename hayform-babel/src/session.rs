//! Editing session: live state plus the recompute scheduler
//!
//! The session is the mutation channel the form's handlers go through. It owns the live label
//! and entry tree; every change is reported to the [`Scheduler`], and the host drives
//! [`Session::on_frame`] from its paint loop.
//!
//! ```ignore
//! let mut session = Session::new(SessionDefaults::default());
//! session.edit(|entry| entry.title = "Example".into());
//! session.edit(|entry| entry.author.push(Person::default()));
//!
//! // next frame
//! let form = RenderedForm::render(session.entry(), ConstraintRules::default());
//! session.on_frame(&form);
//! println!("{}", session.document());
//! ```

use crate::constraints::Form;
use crate::model::{Entry, EntryType, Person, Record, DEFAULT_LABEL};
use crate::scheduler::{Scheduler, SchedulerState};

/// Which person list of the root entry an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonList {
    Author,
    Editor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    /// Label used when the record's label is blank.
    pub default_label: String,
    pub default_type: EntryType,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        SessionDefaults {
            default_label: DEFAULT_LABEL.to_string(),
            default_type: EntryType::Misc,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    label: String,
    entry: Entry,
    scheduler: Scheduler,
}

impl Session {
    /// Fresh session on a blank entry of the default type.
    pub fn new(defaults: SessionDefaults) -> Self {
        let entry = Entry::create_default(Some(defaults.default_type));
        Self::from_record(Record::new("", entry), defaults)
    }

    /// Session seeded with an existing record. The initial state counts as a mutation.
    pub fn from_record(record: Record, defaults: SessionDefaults) -> Self {
        let mut session = Session {
            label: record.label,
            entry: record.entry,
            scheduler: Scheduler::with_default_label(defaults.default_label),
        };
        session.notify();
        session
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.notify();
    }

    /// Mutate the entry tree in place.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut Entry) -> R) -> R {
        let result = f(&mut self.entry);
        self.notify();
        result
    }

    /// Reset every field but the type.
    pub fn clear_fields(&mut self) {
        self.edit(|entry| *entry = entry.cleared());
    }

    pub fn attach_parent(&mut self) {
        self.edit(|entry| {
            entry.attach_parent();
        });
    }

    pub fn detach_parent(&mut self) {
        self.edit(|entry| {
            entry.detach_parent();
        });
    }

    /// Toggle the name representation of one person. Out-of-range indices are ignored.
    pub fn toggle_person(&mut self, list: PersonList, index: usize) {
        self.edit(|entry| {
            let persons: &mut Vec<Person> = match list {
                PersonList::Author => &mut entry.author,
                PersonList::Editor => &mut entry.editor,
            };
            if let Some(person) = persons.get_mut(index) {
                *person = person.toggle_variant();
            }
        });
    }

    /// Whether a frame callback is outstanding.
    pub fn frame_requested(&self) -> bool {
        self.scheduler.frame_requested()
    }

    pub fn on_frame(&mut self, form: &dyn Form) -> Option<&str> {
        self.scheduler.on_frame(form)
    }

    /// Text for display and for the clipboard; empty while the form is invalid.
    pub fn document(&self) -> &str {
        self.scheduler.document()
    }

    pub fn state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub fn recomputations(&self) -> u64 {
        self.scheduler.recomputations()
    }

    pub fn into_record(self) -> Record {
        Record::new(self.label, self.entry)
    }

    fn notify(&mut self) {
        self.scheduler.observe(&self.label, &self.entry);
    }
}
