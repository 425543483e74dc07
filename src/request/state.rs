//! Request status state machine and shared application state.
//!
//! [`RequestStatus`] is the transient state of the current submission. The
//! UI reads it via [`SharedState`] to render the form, spinner, error banner
//! or results panel.
//!
//! The status transitions are:
//!
//! ```text
//! Idle ──submit──▶ Loading ──response ok──▶ Success(result)
//!                          ──any failure──▶ Error(message)
//! Success / Error ──next submit──▶ Loading
//! ```
//!
//! A new submission while one is still in flight also moves to `Loading`;
//! the superseded call's outcome is discarded via the sequence counter (see
//! [`RequestState::finish`]).

use std::sync::{Arc, Mutex};

use crate::client::ClassificationResult;

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// State of the current classification request.
///
/// Exactly one variant holds at any time — success and error can never be
/// set simultaneously.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestStatus {
    /// No submission yet.
    Idle,

    /// A request is in flight.
    Loading,

    /// The service answered; holds the decoded result.
    Success(ClassificationResult),

    /// The request failed; holds the user-visible message.
    Error(String),
}

impl RequestStatus {
    /// `true` while a request is in flight.
    ///
    /// The UI uses this to disable the submit button.
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    /// A short human-readable label for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "Idle",
            RequestStatus::Loading => "Classifying",
            RequestStatus::Success(_) => "Done",
            RequestStatus::Error(_) => "Error",
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Idle
    }
}

// ---------------------------------------------------------------------------
// RequestState
// ---------------------------------------------------------------------------

/// Shared request state — the single source of truth for the UI.
///
/// Held behind [`SharedState`] (`Arc<Mutex<RequestState>>`). The orchestrator
/// mutates it; the egui update loop reads it each frame.
#[derive(Debug, Default)]
pub struct RequestState {
    /// Status of the most recent submission.
    pub status: RequestStatus,

    /// Sequence number of the most recent submission. Outcomes of earlier
    /// submissions are discarded on arrival.
    seq: u64,
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new submission: clears any previous result or error, sets
    /// `Loading`, and returns the submission's sequence number.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.status = RequestStatus::Loading;
        self.seq
    }

    /// Record the outcome of submission `seq`.
    ///
    /// Returns `false` (leaving the status untouched) when a newer
    /// submission has been issued since — a late-arriving earlier response
    /// must never overwrite a later one.
    pub fn finish(
        &mut self,
        seq: u64,
        outcome: Result<ClassificationResult, String>,
    ) -> bool {
        if seq != self.seq {
            return false;
        }
        self.status = match outcome {
            Ok(result) => RequestStatus::Success(result),
            Err(message) => RequestStatus::Error(message),
        };
        true
    }

    /// Sequence number of the most recent submission (0 before the first).
    pub fn current_seq(&self) -> u64 {
        self.seq
    }
}

// ---------------------------------------------------------------------------
// SharedState
// ---------------------------------------------------------------------------

/// Thread-safe handle to [`RequestState`].
///
/// Cheap to clone (`Arc` clone). Lock for a short critical section; do
/// **not** hold the lock across `.await` points.
pub type SharedState = Arc<Mutex<RequestState>>;

/// Construct a new [`SharedState`] in the `Idle` status.
pub fn new_shared_state() -> SharedState {
    Arc::new(Mutex::new(RequestState::new()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
