//! Format implementations
//!
//! - record: reading and writing the editable record model (JSON, YAML)
//! - yaml:   emitting the normalized document as Hayagriva YAML

pub mod record;
pub mod yaml;

pub use record::RecordFormat;
pub use yaml::{emit, to_yaml};
