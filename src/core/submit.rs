//! Submission lifecycle for auth forms.
//!
//! Each form owns a [`SubmissionState`]: a small state machine that enforces
//! single-flight semantics (at most one submission outstanding per form) and
//! holds the terminal outcome of the last attempt. The machine is plain data,
//! deliberately free of reactive signals, so the whole flow can be exercised
//! in unit tests; components wrap it in an `RwSignal` and drive it from their
//! submit handlers.

use serde::Deserialize;

use crate::core::validation::FieldErrors;

/// Fallback message for a reply that carries neither slot.
const EMPTY_REPLY_MESSAGE: &str = "Something went wrong. Please try again.";

/// Terminal result of a submission, as reported by the backend action.
///
/// Exactly one message exists per resolution; the enum makes the
/// error/success exclusivity structural rather than conventional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Error(String),
    Success(String),
}

impl SubmissionOutcome {
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Error(message) => Some(message),
            SubmissionOutcome::Success(_) => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Success(message) => Some(message),
            SubmissionOutcome::Error(_) => None,
        }
    }
}

/// Wire shape of an action reply: two optional string slots.
///
/// The backend populates one of the two. Replies that violate that are still
/// resolved deterministically by the [`SubmissionOutcome`] conversion below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub success: Option<String>,
}

impl From<ActionResponse> for SubmissionOutcome {
    fn from(response: ActionResponse) -> Self {
        // Error wins if a reply ever populates both slots.
        if let Some(message) = response.error.filter(|m| !m.is_empty()) {
            SubmissionOutcome::Error(message)
        } else if let Some(message) = response.success.filter(|m| !m.is_empty()) {
            SubmissionOutcome::Success(message)
        } else {
            SubmissionOutcome::Error(EMPTY_REPLY_MESSAGE.to_string())
        }
    }
}

/// Token identifying one submission attempt.
///
/// A resolution is only applied if its token still matches the in-flight
/// attempt, so a response arriving after the form was torn down or reset
/// cannot touch state it no longer owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Per-form submission state machine.
///
/// `Idle -> Submitting -> Idle` with the outcome of the last resolved attempt
/// retained until the next one begins. Terminal outcomes are not sticky: the
/// next `begin` clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    in_flight: Option<Generation>,
    counter: u64,
    outcome: Option<SubmissionOutcome>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the single-flight slot.
    ///
    /// Returns the token for this attempt, or `None` while another submission
    /// is outstanding (the caller must treat that as a no-op). Clears the
    /// previous outcome so stale feedback never shows next to a pending
    /// submission.
    pub fn begin(&mut self) -> Option<Generation> {
        if self.in_flight.is_some() {
            return None;
        }
        self.counter += 1;
        let token = Generation(self.counter);
        self.in_flight = Some(token);
        self.outcome = None;
        Some(token)
    }

    /// Apply a terminal outcome for the attempt identified by `token`.
    ///
    /// Returns whether the outcome was applied. Stale tokens are ignored:
    /// the slot was reset or belongs to a newer attempt.
    pub fn resolve(&mut self, token: Generation, outcome: SubmissionOutcome) -> bool {
        if self.in_flight != Some(token) {
            return false;
        }
        self.in_flight = None;
        self.outcome = Some(outcome);
        true
    }

    /// Abandon any in-flight attempt and clear feedback.
    ///
    /// Called on component teardown; the abandoned attempt's resolution will
    /// fail the token check in [`SubmissionState::resolve`].
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.outcome = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(SubmissionOutcome::error)
    }

    pub fn success(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(SubmissionOutcome::success)
    }
}

/// Result of asking the controller to start a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt<T> {
    /// Input failed validation; the action must not be invoked.
    Rejected(FieldErrors),
    /// Another submission is outstanding; this call is a no-op.
    InFlight,
    /// Validation passed and the single-flight slot was claimed. The caller
    /// invokes the action exactly once with `input` and resolves with `token`.
    Started { input: T, token: Generation },
}

/// Gate a submit request through validation and the single-flight slot.
///
/// The in-flight check comes first: while a submission is pending the call is
/// a no-op regardless of input, matching the disabled form controls.
pub fn start<T>(
    state: &mut SubmissionState,
    validated: Result<T, FieldErrors>,
) -> SubmitAttempt<T> {
    if state.is_submitting() {
        return SubmitAttempt::InFlight;
    }
    match validated {
        Err(errors) => SubmitAttempt::Rejected(errors),
        Ok(input) => match state.begin() {
            Some(token) => SubmitAttempt::Started { input, token },
            None => SubmitAttempt::InFlight,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;
    use crate::core::validation::{
        LoginInput, RegisterInput, fields, validate_login, validate_registration,
    };

    /// Counts invocations and resolves with a canned outcome, standing in for
    /// the backend action.
    async fn fake_action(calls: &Cell<u32>, outcome: SubmissionOutcome) -> SubmissionOutcome {
        calls.set(calls.get() + 1);
        outcome
    }

    #[test]
    fn begin_claims_the_slot_once() {
        let mut state = SubmissionState::new();

        let first = state.begin();
        assert!(first.is_some());
        assert!(state.is_submitting());

        // Second attempt while in flight is refused.
        assert!(state.begin().is_none());
    }

    #[test]
    fn resolve_clears_submitting_and_stores_exactly_one_message() {
        let mut state = SubmissionState::new();
        let token = state.begin().unwrap();

        assert!(state.resolve(token, SubmissionOutcome::Error("Invalid credentials".into())));
        assert!(!state.is_submitting());
        assert_eq!(state.error(), Some("Invalid credentials"));
        assert_eq!(state.success(), None);
    }

    #[test]
    fn begin_clears_previous_outcome() {
        let mut state = SubmissionState::new();
        let token = state.begin().unwrap();
        state.resolve(token, SubmissionOutcome::Success("Account created".into()));
        assert!(state.success().is_some());

        state.begin().unwrap();
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut state = SubmissionState::new();
        let stale = state.begin().unwrap();
        state.reset();

        assert!(!state.resolve(stale, SubmissionOutcome::Success("too late".into())));
        assert_eq!(state.outcome(), None);
        assert!(!state.is_submitting());
    }

    #[test]
    fn token_from_superseded_attempt_is_ignored() {
        let mut state = SubmissionState::new();
        let old = state.begin().unwrap();
        state.reset();
        let current = state.begin().unwrap();

        assert!(!state.resolve(old, SubmissionOutcome::Error("stale".into())));
        assert!(state.is_submitting());
        assert!(state.resolve(current, SubmissionOutcome::Success("fresh".into())));
        assert_eq!(state.success(), Some("fresh"));
    }

    #[test]
    fn invalid_input_never_reaches_the_action() {
        let calls = Cell::new(0);
        let mut state = SubmissionState::new();
        let raw = LoginInput {
            email: "bad-email".into(),
            password: String::new(),
        };

        match start(&mut state, validate_login(&raw)) {
            SubmitAttempt::Rejected(errors) => {
                assert!(errors.get(fields::EMAIL).is_some());
                assert!(errors.get(fields::PASSWORD).is_some());
            }
            other => panic!("expected rejection, got {other:?}"),
        }

        assert_eq!(calls.get(), 0);
        assert!(!state.is_submitting());
    }

    #[test]
    fn second_submit_while_in_flight_is_a_no_op() {
        let calls = Cell::new(0);
        let mut state = SubmissionState::new();
        let raw = LoginInput {
            email: "john@x.com".into(),
            password: "secret".into(),
        };

        let token = match start(&mut state, validate_login(&raw)) {
            SubmitAttempt::Started { input, token } => {
                block_on(fake_action(
                    &calls,
                    SubmissionOutcome::Error("Invalid credentials".into()),
                ));
                let _ = input;
                token
            }
            other => panic!("expected start, got {other:?}"),
        };
        assert_eq!(calls.get(), 1);

        // Resubmission before resolution: no-op, even with valid input.
        assert_eq!(start(&mut state, validate_login(&raw)), SubmitAttempt::InFlight);
        assert_eq!(calls.get(), 1);

        state.resolve(token, SubmissionOutcome::Error("Invalid credentials".into()));
        assert!(!state.is_submitting());
    }

    #[test]
    fn login_rejected_by_backend_shows_error_banner_only() {
        let calls = Cell::new(0);
        let mut state = SubmissionState::new();
        let raw = LoginInput {
            email: "john@x.com".into(),
            password: "secret".into(),
        };

        match start(&mut state, validate_login(&raw)) {
            SubmitAttempt::Started { input, token } => {
                assert_eq!(input.email, "john@x.com");
                assert_eq!(input.password, "secret");
                let outcome = block_on(fake_action(
                    &calls,
                    SubmissionOutcome::Error("Invalid credentials".into()),
                ));
                assert!(state.resolve(token, outcome));
            }
            other => panic!("expected start, got {other:?}"),
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(state.error(), Some("Invalid credentials"));
        assert_eq!(state.success(), None);
        // Form re-enabled for a manual retry.
        assert!(!state.is_submitting());
    }

    #[test]
    fn registration_success_shows_success_banner_only() {
        let calls = Cell::new(0);
        let mut state = SubmissionState::new();
        let raw = RegisterInput {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            password: "Sup3rSecret".into(),
        };

        match start(&mut state, validate_registration(&raw)) {
            SubmitAttempt::Started { input, token } => {
                assert_eq!(input.name, "John Doe");
                let outcome = block_on(fake_action(
                    &calls,
                    SubmissionOutcome::Success("Account created".into()),
                ));
                assert!(state.resolve(token, outcome));
            }
            other => panic!("expected start, got {other:?}"),
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(state.success(), Some("Account created"));
        assert_eq!(state.error(), None);
        assert!(!state.is_submitting());
    }

    #[test]
    fn response_with_error_slot_becomes_error() {
        let response = ActionResponse {
            error: Some("Invalid credentials".into()),
            success: None,
        };
        assert_eq!(
            SubmissionOutcome::from(response),
            SubmissionOutcome::Error("Invalid credentials".into())
        );
    }

    #[test]
    fn response_with_success_slot_becomes_success() {
        let response = ActionResponse {
            error: None,
            success: Some("Account created".into()),
        };
        assert_eq!(
            SubmissionOutcome::from(response),
            SubmissionOutcome::Success("Account created".into())
        );
    }

    #[test]
    fn error_wins_when_both_slots_are_populated() {
        let response = ActionResponse {
            error: Some("no".into()),
            success: Some("yes".into()),
        };
        assert_eq!(
            SubmissionOutcome::from(response),
            SubmissionOutcome::Error("no".into())
        );
    }

    #[test]
    fn empty_reply_becomes_generic_error() {
        let outcome = SubmissionOutcome::from(ActionResponse::default());
        assert!(outcome.error().is_some());
        assert!(outcome.success().is_none());

        // Empty strings count as absent, not as a blank banner.
        let blank = ActionResponse {
            error: Some(String::new()),
            success: Some(String::new()),
        };
        assert!(SubmissionOutcome::from(blank).error().is_some());
    }

    #[test]
    fn response_deserializes_with_missing_slots() {
        let response: ActionResponse = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(response.error.as_deref(), Some("nope"));
        assert_eq!(response.success, None);

        let response: ActionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.error.is_none() && response.success.is_none());
    }
}
