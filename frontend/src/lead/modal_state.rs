//! Lead-capture modal state machine.
//!
//! `Closed -> Open -> Submitting -> Success -> Closed`. Closing from any open
//! phase leaves the fields in place until the reset timer fires, so the form
//! does not visibly empty while the modal fades out.

use super::channel::LeadError;
use super::form::{LeadField, LeadForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    Submitting,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalAction {
    Open,
    Close,
    /// The deferred field reset armed by `Close` has elapsed.
    ResetElapsed,
    Edit(LeadField, String),
    Submit,
    Delivered {
        ticket: u64,
        result: Result<(), LeadError>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    phase: ModalPhase,
    form: LeadForm,
    pending_reset: bool,
    ticket: u64,
    error: Option<LeadError>,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            phase: ModalPhase::Closed,
            form: LeadForm::default(),
            pending_reset: false,
            ticket: 0,
            error: None,
        }
    }
}

impl ModalState {
    /// Starts open, for forms embedded in a page rather than a modal.
    pub fn opened() -> Self {
        Self {
            phase: ModalPhase::Open,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn error(&self) -> Option<&LeadError> {
        self.error.as_ref()
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset
    }

    /// Ticket of the submission currently in flight.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    fn clear(&mut self) {
        self.form = LeadForm::default();
        self.error = None;
        self.pending_reset = false;
    }

    /// Applies `action`. Returns false when it does not apply in the current phase.
    pub fn apply(&mut self, action: ModalAction) -> bool {
        match (self.phase, action) {
            (ModalPhase::Closed, ModalAction::Open) => {
                // Re-opened before the reset timer fired.
                if self.pending_reset {
                    self.clear();
                }
                self.phase = ModalPhase::Open;
            }
            (ModalPhase::Closed, ModalAction::Close) => return false,
            (_, ModalAction::Close) => {
                self.phase = ModalPhase::Closed;
                self.pending_reset = true;
            }
            (ModalPhase::Closed, ModalAction::ResetElapsed) if self.pending_reset => self.clear(),
            (ModalPhase::Open, ModalAction::Edit(field, value)) => {
                self.form.set(field, value);
                self.error = None;
            }
            (ModalPhase::Open, ModalAction::Submit) => {
                self.ticket += 1;
                self.error = None;
                self.phase = ModalPhase::Submitting;
            }
            (ModalPhase::Submitting, ModalAction::Delivered { ticket, result })
                if ticket == self.ticket =>
            {
                match result {
                    Ok(()) => self.phase = ModalPhase::Success,
                    Err(err) => {
                        self.error = Some(err);
                        self.phase = ModalPhase::Open;
                    }
                }
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ModalState {
        let mut state = ModalState::default();
        state.apply(ModalAction::Open);
        state.apply(ModalAction::Edit(LeadField::FirstName, "Jane".into()));
        state.apply(ModalAction::Edit(LeadField::Email, "jane@co.com".into()));
        state
    }

    #[test]
    fn test_round_trip_clears_fields() {
        let mut state = filled();
        assert!(state.apply(ModalAction::Submit));
        assert_eq!(state.phase(), ModalPhase::Submitting);
        let ticket = state.ticket();
        assert!(state.apply(ModalAction::Delivered {
            ticket,
            result: Ok(())
        }));
        assert_eq!(state.phase(), ModalPhase::Success);

        assert!(state.apply(ModalAction::Close));
        assert_eq!(state.phase(), ModalPhase::Closed);
        // Fields survive until the reset timer fires.
        assert_eq!(state.form().first_name, "Jane");
        assert!(state.apply(ModalAction::ResetElapsed));
        assert!(state.form().is_empty());
        assert!(!state.has_pending_reset());

        assert!(state.apply(ModalAction::Open));
        assert_eq!(state.phase(), ModalPhase::Open);
        assert!(state.form().is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_reopen_before_reset_starts_clean() {
        let mut state = filled();
        state.apply(ModalAction::Close);
        state.apply(ModalAction::Open);
        assert_eq!(state.phase(), ModalPhase::Open);
        assert!(state.form().is_empty());
        // The late timer is harmless.
        assert!(!state.apply(ModalAction::ResetElapsed));
    }

    #[test]
    fn test_close_while_submitting_stays_closed() {
        let mut state = filled();
        state.apply(ModalAction::Submit);
        let ticket = state.ticket();
        state.apply(ModalAction::Close);
        assert!(!state.apply(ModalAction::Delivered {
            ticket,
            result: Ok(())
        }));
        assert_eq!(state.phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_stale_delivery_is_ignored() {
        let mut state = filled();
        state.apply(ModalAction::Submit);
        let stale = state.ticket();
        state.apply(ModalAction::Close);
        state.apply(ModalAction::Open);
        state.apply(ModalAction::Submit);
        assert!(!state.apply(ModalAction::Delivered {
            ticket: stale,
            result: Ok(())
        }));
        assert_eq!(state.phase(), ModalPhase::Submitting);
    }

    #[test]
    fn test_failed_delivery_returns_to_form() {
        let mut state = filled();
        state.apply(ModalAction::Submit);
        let ticket = state.ticket();
        state.apply(ModalAction::Delivered {
            ticket,
            result: Err(LeadError::NoWindow),
        });
        assert_eq!(state.phase(), ModalPhase::Open);
        assert_eq!(state.error(), Some(&LeadError::NoWindow));
        assert_eq!(state.form().first_name, "Jane");
    }

    #[test]
    fn test_invalid_transitions() {
        let mut state = ModalState::default();
        assert!(!state.apply(ModalAction::Close));
        assert!(!state.apply(ModalAction::Submit));
        assert!(!state.apply(ModalAction::Edit(LeadField::Email, "x".into())));
        assert_eq!(state, ModalState::default());
    }
}
