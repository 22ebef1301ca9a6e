use chrono::{DateTime, Utc};
use shared_types::{LeadDraft, LeadField, LeadPayload, SubmitError};

use crate::transport::{deliver, LeadTransport};

/// Where the signup form is in its lifecycle.
///
/// `Submitted` is terminal: there is no path back to `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Result of settling an in-flight submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted,
    Failed(SubmitError),
}

/// A draft plus the phase of the form that owns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupSession {
    draft: LeadDraft,
    phase: FormPhase,
}

impl SignupSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing && self.is_valid()
    }

    /// Write one field of the draft. Returns `false` once the session has
    /// been submitted and the draft is gone.
    pub fn update_field(&mut self, field: LeadField, value: impl Into<String>) -> bool {
        if self.is_submitted() {
            return false;
        }
        self.draft.set(field, value);
        true
    }

    /// Move to `Submitting` and hand back the payload to send.
    ///
    /// Returns `None` without side effects when the draft is invalid or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self, at: DateTime<Utc>) -> Option<LeadPayload> {
        if !self.can_submit() {
            tracing::debug!(
                phase = ?self.phase,
                missing = ?self.draft.missing_fields(),
                "Submit ignored"
            );
            return None;
        }
        let payload = self.draft.seal(at)?;
        self.phase = FormPhase::Submitting;
        Some(payload)
    }

    /// Settle the in-flight submission.
    ///
    /// Success discards the draft and ends the session. Failure returns to
    /// `Editing` with every field kept so the user can retry.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        if self.phase != FormPhase::Submitting {
            tracing::warn!(phase = ?self.phase, "Submission settled outside of a submit");
        }
        match result {
            Ok(()) => {
                self.phase = FormPhase::Submitted;
                self.draft = LeadDraft::default();
                SubmitOutcome::Submitted
            }
            Err(e) => {
                tracing::error!(error = %e, kind = %e.kind, "Signup submission failed");
                if self.phase == FormPhase::Submitting {
                    self.phase = FormPhase::Editing;
                }
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Run a full submission against `endpoint`.
    ///
    /// Returns `None` if the guard refused to start one.
    pub async fn submit<T: LeadTransport>(
        &mut self,
        transport: &T,
        endpoint: &str,
    ) -> Option<SubmitOutcome> {
        let payload = self.begin_submit(Utc::now())?;
        let result = deliver(transport, endpoint, &payload).await;
        Some(self.finish_submit(result))
    }
}
