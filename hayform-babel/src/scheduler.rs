//! Deferred recomputation of the emitted document
//!
//!     Every mutation of the label or the entry tree is reported to [`Scheduler::observe`],
//!     which snapshots the state right away and asks the host for one frame callback. The
//!     validity check and the emission only happen in [`Scheduler::on_frame`], at the host's
//!     next paint boundary.
//!
//!     The delay is part of the contract, not a convenience. Structural edits (a person list
//!     growing from one to two entries) reach the model one tick before the matching inputs
//!     exist, and validity is decided by those inputs. Checking synchronously would emit
//!     documents for states the form never showed as valid.
//!
//!     State machine:
//!
//!         Idle ──observe──▶ PendingRecompute ──on_frame──▶ Settled
//!                            ▲        │observe                 │observe
//!                            └────────┘ (coalesced)            ▼
//!                                                      PendingRecompute
//!
//!     Mutations arriving while a frame is outstanding only replace the snapshot: exactly one
//!     recomputation runs per frame and it sees the latest state.

use crate::constraints::Form;
use crate::formats::yaml::emit;
use crate::ir::from_entry::normalize;
use crate::model::entry::effective_label;
use crate::model::{Entry, DEFAULT_LABEL};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Nothing observed yet.
    Idle,
    /// A frame callback is outstanding.
    PendingRecompute,
    /// The document reflects the last observed state.
    Settled,
}

/// Immutable copy of the label and entry tree taken at mutation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Label with the blank-label fallback already applied.
    pub label: String,
    pub entry: Entry,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    state: SchedulerState,
    pending: Option<Snapshot>,
    document: String,
    recomputations: u64,
    default_label: String,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_default_label(DEFAULT_LABEL)
    }

    /// Scheduler that files blank-labelled records under `default_label`.
    pub fn with_default_label(default_label: impl Into<String>) -> Self {
        Scheduler {
            state: SchedulerState::Idle,
            pending: None,
            document: String::new(),
            recomputations: 0,
            default_label: default_label.into(),
        }
    }

    /// Record a mutation.
    ///
    /// Returns `true` when the host has to request a frame callback, `false` when one is
    /// already outstanding and this mutation was folded into it.
    pub fn observe(&mut self, label: &str, entry: &Entry) -> bool {
        self.pending = Some(Snapshot {
            label: effective_label(label, &self.default_label).to_string(),
            entry: entry.snapshot(),
        });
        if self.state == SchedulerState::PendingRecompute {
            trace!("mutation coalesced into pending recompute");
            return false;
        }
        self.state = SchedulerState::PendingRecompute;
        debug!("recompute scheduled for next frame");
        true
    }

    /// The host's frame boundary: validate and, if valid, emit the latest snapshot.
    ///
    /// Returns the settled document, or `None` if nothing was pending.
    pub fn on_frame(&mut self, form: &dyn Form) -> Option<&str> {
        let snapshot = self.pending.take()?;
        self.recomputations += 1;
        self.document = if form.check_validity() {
            match emit(&normalize(&snapshot.label, &snapshot.entry)) {
                Ok(text) => text,
                Err(err) => {
                    warn!(error = %err, label = %snapshot.label, "failed to emit document");
                    String::new()
                }
            }
        } else {
            String::new()
        };
        self.state = SchedulerState::Settled;
        debug!(
            label = %snapshot.label,
            valid = !self.document.is_empty(),
            recomputations = self.recomputations,
            "document settled"
        );
        Some(&self.document)
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn frame_requested(&self) -> bool {
        self.state == SchedulerState::PendingRecompute
    }

    /// Current document text; empty while the form is invalid.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// How many frames actually recomputed the document.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn pending_snapshot(&self) -> Option<&Snapshot> {
        self.pending.as_ref()
    }
}
