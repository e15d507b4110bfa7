//! YAML document tests
//!
//! End-to-end checks from entry model to emitted text.

mod export;
