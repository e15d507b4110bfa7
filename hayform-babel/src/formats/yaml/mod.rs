//! Hayagriva YAML output
//!
//! Renders a [`NormalizedDoc`](crate::ir::nodes::NormalizedDoc) as one top-level mapping keyed
//! by the record label.
//!
//! # Library Choice
//!
//! We use `serde_yaml` for the actual text. The serializer builds a `serde_yaml::Value` and
//! never writes YAML syntax by hand, so quoting, escaping and multi-line scalars are always
//! valid, however deep the parent chain goes.
//!
//! # Element Mapping Table
//!
//! | Normalized node | YAML                          | Notes                                   |
//! |-----------------|-------------------------------|-----------------------------------------|
//! | Map             | block mapping                 | `_` in keys becomes `-`                 |
//! | Seq             | block sequence                | elements written as-is                  |
//! | Str             | scalar                        | quoted only where YAML needs it         |
//! | Int             | integer scalar                |                                         |
//! | Null            | (omitted)                     | never reaches the output inside a map   |
//!
//! Mapping entries whose value is an empty string, `Null` or an empty sequence are dropped,
//! independent of what the normalizer already removed.

mod serializer;

pub use serializer::{emit, render_key};

use crate::error::FormatError;
use crate::ir::from_entry::normalize;
use crate::model::Entry;

/// Normalize and emit in one go.
pub fn to_yaml(label: &str, entry: &Entry) -> Result<String, FormatError> {
    emit(&normalize(label, entry))
}
