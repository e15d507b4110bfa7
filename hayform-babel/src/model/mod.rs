//! In-memory entry model
//!
//!     The model is what the form edits: plain owned data, cloned into snapshots before the
//!     normalizer ever sees it. Nothing here knows about documents or YAML.
//!
//!     - person.rs: contributor names (combined / structured)
//!     - fields.rs: roles, publisher, URL, serial numbers
//!     - entry.rs:  the recursive entry, its types and the top-level record

pub mod entry;
pub mod fields;
pub mod person;

pub use entry::{Entry, EntryType, Record, DEFAULT_LABEL};
pub use fields::{Publisher, ResolverPrefixes, Role, RoleGroup, SerialKind, SerialNumber, Url};
pub use person::{NameParts, Person};
