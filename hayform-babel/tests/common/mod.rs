//! Shared entry fixtures.

use hayform_babel::model::{
    Entry, EntryType, NameParts, Person, Publisher, Role, RoleGroup, SerialNumber, Url,
};

/// The book from the canonical example: one author, a year and a publisher without location.
pub fn jane_doe_book() -> Entry {
    let mut entry = Entry::create_default(Some(EntryType::Book));
    entry.title = "Example".into();
    entry.author = vec![Person::combined("Jane Doe")];
    entry.date = "2020".into();
    entry.publisher = Publisher {
        name: "Acme".into(),
        location: String::new(),
    };
    entry
}

/// A chapter touching every compound field, inside a book.
pub fn kitchensink_chapter() -> Entry {
    let mut entry = Entry::create_default(Some(EntryType::Chapter));
    entry.title = "The Middle".into();
    entry.author = vec![
        Person::Structured(NameParts {
            family: "Doe".into(),
            given: "Jane".into(),
            ..NameParts::default()
        }),
        Person::combined("Richard Roe"),
    ];
    entry.date = "2019-05".into();
    entry.affiliated = vec![RoleGroup {
        role: Some(Role::Translator),
        names: vec![Person::combined("Tom Trans")],
    }];
    entry.page_range = "20-45".into();
    entry.url = Url {
        value: "https://example.org/middle".into(),
        date: "2021-01-02".into(),
    };
    entry.serial_number = SerialNumber {
        doi: "10.1000/182".into(),
        ..SerialNumber::default()
    };
    entry.language = "en".into();
    entry.archive = "State Library".into();
    entry.archive_location = "Box 4".into();
    entry.call_number = "X1".into();

    let parent = entry.attach_parent();
    parent.title = "Collected Essays".into();
    parent.editor = vec![Person::combined("Ann Editor")];
    parent.publisher = Publisher {
        name: "Acme Press".into(),
        location: "Berlin".into(),
    };
    parent.volume = "2".into();
    parent.volume_total = "3".into();
    entry
}
