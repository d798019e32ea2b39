//! One-shot relay for the outcome of an edit session
//!
//! The screen that launches an edit flow needs to know, exactly once,
//! whether the flow ended in a save or a cancel. The [`ResultChannel`] is a
//! single-slot, write-once/read-once value: the edit flow records the
//! outcome just before handing control back, and the originating screen
//! consumes it when it regains control. Consuming resets the slot, so a
//! re-render observes `Unset` instead of a stale repeat.

use std::mem;

/// Outcome of an edit session as seen by the originating screen.
///
/// `Unset` means "no completed edit to report" and callers treat it the
/// same as "the user has not edited anything". It is a valid value, never
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditOutcome {
    #[default]
    Unset,
    Saved,
    Cancelled,
}

/// Token for an in-flight edit session.
///
/// [`ResultChannel::complete_edit`] takes the token by value, so an
/// outcome can be recorded at most once per session. Dropping the token
/// without completing abandons the session and leaves the channel `Unset`,
/// which is the same as "nothing happened".
#[derive(Debug)]
#[must_use = "an edit session that is never completed reports no outcome"]
pub struct EditSession(());

/// Single-slot channel carrying an [`EditOutcome`] across a navigation
/// boundary.
#[derive(Debug, Default)]
pub struct ResultChannel {
    pending: EditOutcome,
}

impl ResultChannel {
    pub fn new() -> Self {
        Self {
            pending: EditOutcome::Unset,
        }
    }

    /// Mark the start of an edit session.
    ///
    /// Clears any stale prior outcome so the new session starts from
    /// `Unset` even if a previous outcome was never consumed.
    pub fn begin_edit(&mut self) -> EditSession {
        self.pending = EditOutcome::Unset;
        EditSession(())
    }

    /// Record the session's outcome, consuming the session token.
    ///
    /// Called exactly once by the edit flow before it yields control back.
    pub fn complete_edit(&mut self, _session: EditSession, outcome: EditOutcome) {
        self.pending = outcome;
    }

    /// Take the pending outcome, resetting the slot to `Unset`.
    ///
    /// The read and the reset are a single check-and-clear, so a second
    /// call (from a re-render, say) observes `Unset` rather than a repeat
    /// of the prior outcome.
    pub fn consume_outcome(&mut self) -> EditOutcome {
        mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;
    use crate::state::data::FilmDraft;

    #[test]
    fn test_consume_yields_outcome_once_then_unset() {
        let mut channel = ResultChannel::new();

        let session = channel.begin_edit();
        channel.complete_edit(session, EditOutcome::Saved);

        assert_eq!(channel.consume_outcome(), EditOutcome::Saved);
        assert_eq!(channel.consume_outcome(), EditOutcome::Unset);
    }

    #[test]
    fn test_fresh_channel_consumes_as_unset() {
        let mut channel = ResultChannel::new();
        assert_eq!(channel.consume_outcome(), EditOutcome::Unset);
    }

    #[test]
    fn test_begin_edit_clears_stale_outcome() {
        let mut channel = ResultChannel::new();

        let session = channel.begin_edit();
        channel.complete_edit(session, EditOutcome::Saved);

        // A new session starts before the old outcome was consumed; it
        // must not leak into the new session.
        let abandoned = channel.begin_edit();
        drop(abandoned);

        assert_eq!(channel.consume_outcome(), EditOutcome::Unset);
    }

    #[test]
    fn test_abandoned_session_reports_nothing() {
        let mut channel = ResultChannel::new();

        let session = channel.begin_edit();
        drop(session);

        assert_eq!(channel.consume_outcome(), EditOutcome::Unset);
    }

    #[test]
    fn test_cancel_is_reported_like_save() {
        let mut channel = ResultChannel::new();

        let session = channel.begin_edit();
        channel.complete_edit(session, EditOutcome::Cancelled);

        assert_eq!(channel.consume_outcome(), EditOutcome::Cancelled);
        assert_eq!(channel.consume_outcome(), EditOutcome::Unset);
    }

    /// End-to-end walk through the seeded catalog plus one edit session.
    #[test]
    fn test_seeded_catalog_edit_round_trip() {
        let mut catalog = Catalog::new();
        let mut channel = ResultChannel::new();

        assert_eq!(catalog.film_count(), 3);

        let mut draft = FilmDraft::placeholder();
        draft.title = Some("X".to_string());
        let added = catalog.add(draft).unwrap();
        assert_eq!(added.id, 3);
        assert_eq!(catalog.film_count(), 4);

        let session = channel.begin_edit();
        channel.complete_edit(session, EditOutcome::Saved);

        assert_eq!(channel.consume_outcome(), EditOutcome::Saved);
        assert_eq!(channel.consume_outcome(), EditOutcome::Unset);
    }
}
