//! Bibliographic entries to Hayagriva YAML
//!
//!     This crate holds everything between a filled-in entry form and the YAML document a
//!     citation processor reads: the recursive entry model, the normalizer, the YAML emitter,
//!     the form's field constraints and the scheduler that decides when the document is
//!     recomputed.
//!
//!     This is a pure lib: it powers hayform-cli but is shell agnostic. No code here prints,
//!     reads environment variables or touches the filesystem.
//!
//! Architecture
//!
//!     The pipeline has three stages, each with a single owner:
//!
//!         Entry (model) ──normalize──▶ Node tree (ir) ──emit──▶ YAML text (formats/yaml)
//!
//!     The model is what the user edits. The normalized tree has every field rule applied
//!     (numeric coercion, singleton unwrapping, collapsing, archive gating) but still carries
//!     empty values. The emitter drops empties, renames keys and writes text. Keeping these
//!     apart means each rule is tested once, in the stage that owns it.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── model                   # Entry, Person, compound fields, Record
//!     ├── ir                      # Normalized tree and the normalizer
//!     ├── formats
//!     │   ├── record.rs           # Reading/writing records (JSON, YAML)
//!     │   └── yaml                # Document emitter
//!     ├── constraints.rs          # Form validity (patterns, required fields)
//!     ├── scheduler.rs            # Deferred, coalescing recomputation
//!     └── session.rs              # Live state + scheduler, the mutation channel
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Recomputation
//!
//!     The document is never regenerated synchronously on a mutation. The scheduler snapshots
//!     the state, waits for the host's next frame, asks the form whether it is valid and only
//!     then normalizes and emits. See ./scheduler.rs for the reasoning and the state machine.
//!
//! Library Choices
//!
//!     YAML text is produced by serde_yaml from a `serde_yaml::Value`, never by hand. Records
//!     are plain serde types, so any serde format can carry them; the CLI reads JSON and YAML.
//!     Field patterns use regex, logging goes through tracing.
pub mod constraints;
pub mod error;
pub mod formats;
pub mod ir;
pub mod model;
pub mod scheduler;
pub mod session;

pub use constraints::{ConstraintRules, Form, RenderedForm, Violation};
pub use error::FormatError;
pub use formats::{to_yaml, RecordFormat};
pub use ir::nodes::{Node, NormalizedDoc};
pub use model::{Entry, EntryType, Person, Record};
pub use scheduler::{Scheduler, SchedulerState};
pub use session::{Session, SessionDefaults};

/// Normalizes an entry for filing under `label`.
///
/// The result still contains empty values; [`emit`] removes them.
pub fn normalize(label: &str, entry: &Entry) -> NormalizedDoc {
    ir::from_entry::normalize(label, entry)
}

/// Renders a normalized document as YAML text.
pub fn emit(doc: &NormalizedDoc) -> Result<String, FormatError> {
    formats::yaml::emit(doc)
}
