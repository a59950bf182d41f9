//! Lead form UI state machine.
//!
//! DESIGN
//! ======
//! The component owns the field signals and the network call; this state
//! owns every decision about them: whether a submit may start, which errors
//! show, which banner is up, and when the submit control is enabled.
//!
//! ```text
//! Idle ──valid submit──▶ Submitting ──2xx──────▶ Success ──cooldown──▶ Idle
//!  ▲                         │
//!  │                         └──failure──▶ Error ──window / edit──▶ Idle
//!  └── invalid submit stays Idle with field errors
//! ```
//!
//! Timers scheduled by the component carry the `phase_seq` they were armed
//! with; [`LeadFormState::settle`] ignores any that are stale.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use crate::net::error::ApiError;
use crate::net::types::LeadSubmission;
use crate::util::validation::{FORM_HAS_ERRORS, FieldErrors, LeadDraft, validate_lead};

pub const SUCCESS_MESSAGE: &str = "Заявка успешно отправлена! Мы свяжемся с вами в ближайшее время.";

/// Submission lifecycle of the lead form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Status banner under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Success,
    Error(String),
    /// The last submit was blocked by field errors.
    Invalid,
}

impl Banner {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Success => format!("✓ {SUCCESS_MESSAGE}"),
            Self::Error(message) => format!("✗ {message}"),
            Self::Invalid => format!("✗ {FORM_HAS_ERRORS}"),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "form-status success",
            Self::Error(_) | Self::Invalid => "form-status error",
        }
    }
}

/// What a submit attempt resolved to.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitDecision {
    /// A request is in flight or the success cooldown is running.
    Busy,
    /// Validation failed; errors are set and nothing may be sent.
    Invalid,
    /// Send exactly this payload, once.
    Send(LeadSubmission),
}

/// Result of applying a response; carries the sequence a follow-up timer must quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finished {
    /// The form should be reset; arm the cooldown timer.
    Succeeded { seq: u64 },
    /// Arm the error banner timer.
    Failed { seq: u64 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFormState {
    pub phase: FormPhase,
    pub errors: FieldErrors,
    /// Bumped on every phase change.
    pub phase_seq: u64,
}

impl LeadFormState {
    /// Whether the submit button accepts clicks.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        matches!(self.phase, FormPhase::Idle | FormPhase::Error(_))
    }

    /// Whether the submit label is swapped for the loading indicator.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    #[must_use]
    pub fn banner(&self) -> Option<Banner> {
        match &self.phase {
            FormPhase::Success => Some(Banner::Success),
            FormPhase::Error(message) => Some(Banner::Error(message.clone())),
            FormPhase::Idle if !self.errors.is_empty() => Some(Banner::Invalid),
            FormPhase::Idle | FormPhase::Submitting => None,
        }
    }

    fn enter(&mut self, phase: FormPhase) -> u64 {
        self.phase = phase;
        self.phase_seq += 1;
        self.phase_seq
    }

    /// Start a submit: guard, clear old errors, validate, and hand out the payload.
    pub fn begin_submit(&mut self, draft: &LeadDraft) -> SubmitDecision {
        if !self.submit_enabled() {
            return SubmitDecision::Busy;
        }
        self.errors = FieldErrors::default();
        match validate_lead(draft) {
            Ok(lead) => {
                self.enter(FormPhase::Submitting);
                SubmitDecision::Send(lead)
            }
            Err(errors) => {
                self.errors = errors;
                self.enter(FormPhase::Idle);
                SubmitDecision::Invalid
            }
        }
    }

    /// Apply the response of the in-flight request.
    ///
    /// Returns `None` when no request was in flight.
    pub fn finish(&mut self, outcome: Result<(), ApiError>) -> Option<Finished> {
        if self.phase != FormPhase::Submitting {
            return None;
        }
        Some(match outcome {
            Ok(()) => Finished::Succeeded { seq: self.enter(FormPhase::Success) },
            Err(err) => Finished::Failed { seq: self.enter(FormPhase::Error(err.user_message())) },
        })
    }

    /// A timer armed at `seq` fired. Returns whether the form went back to idle.
    pub fn settle(&mut self, seq: u64) -> bool {
        if seq != self.phase_seq || !matches!(self.phase, FormPhase::Success | FormPhase::Error(_)) {
            return false;
        }
        self.enter(FormPhase::Idle);
        true
    }

    /// The user changed a field. Dismisses an error banner; the success
    /// cooldown keeps running.
    pub fn note_edit(&mut self) {
        if matches!(self.phase, FormPhase::Error(_)) {
            self.enter(FormPhase::Idle);
        }
    }
}
