//! Normalized representation of entries.
//!
//! The normalizer turns an [`Entry`](crate::model::Entry) into a generic tree of mappings,
//! sequences and scalars with every field-specific rule already applied. Emitters only walk
//! this tree; they never look at the entry model.

pub mod from_entry;
pub mod nodes;
