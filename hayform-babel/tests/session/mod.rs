//! Session and recompute scheduling tests
//!
//! These drive a [`Session`](hayform_babel::Session) the way a host would: mutations from
//! handlers, then a frame callback with whatever validity the presentation layer reports.

mod recompute;
