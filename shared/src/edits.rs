//! Pending-edit lifecycle for optimistic admin table edits.
//!
//! Each editable cell is keyed by `(record id, field name)`. The frontend
//! applies edits to its local collection immediately, then persists them:
//! debounced for free-text fields, immediately for discrete ones. This
//! tracker owns the bookkeeping that makes that safe to reason about,
//! namely which value still needs to be sent, and whether a network
//! response that just arrived is the one we are actually waiting for.
//!
//! Responses can arrive out of send order. Every dispatch gets a
//! monotonically increasing sequence number and only the response matching
//! the *latest* dispatch for its key is allowed to settle the cell; older
//! arrivals are reported as superseded and ignored.
//!
//! A failed persist does not roll the optimistic value back. The cell is
//! flagged [`EditPhase::Stale`] and stays that way until the next full
//! re-fetch replaces the collection (and [`EditTracker::clear`] wipes the
//! bookkeeping).

use std::collections::HashMap;

/// Key for one editable cell: record id plus field name.
pub type EditKey = (i64, &'static str);

/// Where one cell sits in its edit lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditPhase {
    /// No local change outstanding.
    #[default]
    Idle,
    /// Edited locally; not yet handed to the network.
    Editing,
    /// The latest value has been dispatched and is awaiting a response.
    PendingPersist,
    /// The last persist failed; the optimistic value is still shown and
    /// only a re-fetch will reconcile it.
    Stale,
}

/// What a finished network call meant for its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// This response settles the cell; it is clean again.
    Accepted,
    /// This response settles the cell, but the write failed; the cell is
    /// stale until the next re-fetch.
    Failed,
    /// A newer edit or dispatch exists (or the view was re-fetched); ignore
    /// this response entirely.
    Superseded,
}

#[derive(Debug, Default)]
struct Entry {
    phase: EditPhase,
    value: String,
    last_dispatched: Option<u64>,
}

/// Per-cell edit bookkeeping for one admin list view.
#[derive(Debug, Default)]
pub struct EditTracker {
    entries: HashMap<EditKey, Entry>,
    next_seq: u64,
}

impl EditTracker {
    /// A tracker with no outstanding edits.
    pub fn new() -> Self {
        EditTracker::default()
    }

    /// Record a local edit. Any previous un-dispatched value for the same
    /// cell is replaced; a pending dispatch keeps running but its response
    /// will come back [`PersistOutcome::Superseded`].
    pub fn note_edit(&mut self, id: i64, field: &'static str, value: impl Into<String>) {
        let entry = self.entries.entry((id, field)).or_default();
        entry.value = value.into();
        entry.phase = EditPhase::Editing;
    }

    /// Hand the latest value for a cell to the network.
    ///
    /// Returns the dispatch sequence number and the value to send, or `None`
    /// if nothing is waiting (the debounce timer can fire after a response
    /// already settled the cell).
    pub fn begin_persist(&mut self, id: i64, field: &'static str) -> Option<(u64, String)> {
        let entry = self.entries.get_mut(&(id, field))?;
        if entry.phase != EditPhase::Editing {
            return None;
        }
        self.next_seq += 1;
        entry.last_dispatched = Some(self.next_seq);
        entry.phase = EditPhase::PendingPersist;
        Some((self.next_seq, entry.value.clone()))
    }

    /// Settle (or discard) the response for dispatch `seq`.
    pub fn complete_persist(
        &mut self,
        id: i64,
        field: &'static str,
        seq: u64,
        ok: bool,
    ) -> PersistOutcome {
        let Some(entry) = self.entries.get_mut(&(id, field)) else {
            // Cleared by a re-fetch while the call was in flight.
            return PersistOutcome::Superseded;
        };
        if entry.last_dispatched != Some(seq) || entry.phase != EditPhase::PendingPersist {
            // Either a newer dispatch owns the cell, or the user edited
            // again while this call was in flight.
            return PersistOutcome::Superseded;
        }
        if ok {
            entry.phase = EditPhase::Idle;
            PersistOutcome::Accepted
        } else {
            entry.phase = EditPhase::Stale;
            PersistOutcome::Failed
        }
    }

    /// Current phase for a cell.
    pub fn phase(&self, id: i64, field: &'static str) -> EditPhase {
        self.entries
            .get(&(id, field))
            .map(|entry| entry.phase)
            .unwrap_or_default()
    }

    /// True if any cell failed to persist since the last re-fetch.
    pub fn any_stale(&self) -> bool {
        self.entries
            .values()
            .any(|entry| entry.phase == EditPhase::Stale)
    }

    /// Forget everything. Called when a re-fetch replaces the collection,
    /// which is the only reconciliation point for stale cells.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{EditPhase, EditTracker, PersistOutcome};

    const FIELD: &str = "displayName";

    #[test]
    fn rapid_edits_coalesce_into_one_dispatch_with_last_value() {
        let mut tracker = EditTracker::new();
        tracker.note_edit(1, FIELD, "J");
        tracker.note_edit(1, FIELD, "Jo");
        tracker.note_edit(1, FIELD, "Joe");

        let (seq, value) = tracker.begin_persist(1, FIELD).expect("an edit is waiting");
        assert_eq!(value, "Joe");

        // The timer can only have fired once per quiescence window; a second
        // fire with nothing new to send is a no-op.
        assert_eq!(tracker.begin_persist(1, FIELD), None);

        assert_eq!(
            tracker.complete_persist(1, FIELD, seq, true),
            PersistOutcome::Accepted
        );
        assert_eq!(tracker.phase(1, FIELD), EditPhase::Idle);
    }

    #[test]
    fn older_response_is_superseded_by_newer_dispatch() {
        let mut tracker = EditTracker::new();
        tracker.note_edit(1, FIELD, "first");
        let (seq1, _) = tracker.begin_persist(1, FIELD).expect("first dispatch");

        tracker.note_edit(1, FIELD, "second");
        let (seq2, value2) = tracker.begin_persist(1, FIELD).expect("second dispatch");
        assert_eq!(value2, "second");

        // Responses arrive out of order: the stale one must not settle the
        // cell.
        assert_eq!(
            tracker.complete_persist(1, FIELD, seq1, true),
            PersistOutcome::Superseded
        );
        assert_eq!(tracker.phase(1, FIELD), EditPhase::PendingPersist);

        assert_eq!(
            tracker.complete_persist(1, FIELD, seq2, true),
            PersistOutcome::Accepted
        );
        assert_eq!(tracker.phase(1, FIELD), EditPhase::Idle);
    }

    #[test]
    fn edit_during_flight_keeps_cell_dirty() {
        let mut tracker = EditTracker::new();
        tracker.note_edit(1, FIELD, "first");
        let (seq, _) = tracker.begin_persist(1, FIELD).expect("dispatch");

        // User types again before the response lands.
        tracker.note_edit(1, FIELD, "second");
        assert_eq!(
            tracker.complete_persist(1, FIELD, seq, true),
            PersistOutcome::Superseded
        );
        assert_eq!(tracker.phase(1, FIELD), EditPhase::Editing);

        // The restarted debounce timer still gets the newest value out.
        let (_, value) = tracker.begin_persist(1, FIELD).expect("redispatch");
        assert_eq!(value, "second");
    }

    #[test]
    fn failed_persist_flags_the_cell_stale_without_rollback() {
        let mut tracker = EditTracker::new();
        tracker.note_edit(1, FIELD, "kept locally");
        let (seq, _) = tracker.begin_persist(1, FIELD).expect("dispatch");

        assert_eq!(
            tracker.complete_persist(1, FIELD, seq, false),
            PersistOutcome::Failed
        );
        assert_eq!(tracker.phase(1, FIELD), EditPhase::Stale);
        assert!(tracker.any_stale());

        // Re-fetch is the reconciliation point.
        tracker.clear();
        assert_eq!(tracker.phase(1, FIELD), EditPhase::Idle);
        assert!(!tracker.any_stale());
    }

    #[test]
    fn response_after_clear_is_discarded() {
        let mut tracker = EditTracker::new();
        tracker.note_edit(1, FIELD, "value");
        let (seq, _) = tracker.begin_persist(1, FIELD).expect("dispatch");

        tracker.clear();
        assert_eq!(
            tracker.complete_persist(1, FIELD, seq, true),
            PersistOutcome::Superseded
        );
    }

    #[test]
    fn cells_are_independent() {
        let mut tracker = EditTracker::new();
        tracker.note_edit(1, FIELD, "one");
        tracker.note_edit(2, FIELD, "two");
        tracker.note_edit(1, "roles", "driver");

        let (seq, value) = tracker.begin_persist(2, FIELD).expect("dispatch");
        assert_eq!(value, "two");
        tracker.complete_persist(2, FIELD, seq, true);

        assert_eq!(tracker.phase(1, FIELD), EditPhase::Editing);
        assert_eq!(tracker.phase(1, "roles"), EditPhase::Editing);
        assert_eq!(tracker.phase(2, FIELD), EditPhase::Idle);
    }
}
