//! Request orchestrator — drives one classification call per submission.
//!
//! [`RequestOrchestrator`] owns the [`SharedState`] and responds to
//! validated [`Transcript`]s received over a `tokio::sync::mpsc` channel.
//!
//! # Request flow
//!
//! ```text
//! Transcript received
//!   └─▶ seq = state.begin()          status = Loading, previous outcome cleared
//!         └─▶ tokio::spawn(classify)
//!               ├─ Ok(result) → state.finish(seq, Ok)   [Success]
//!               └─ Err(e)     → state.finish(seq, Err)  [Error]
//! ```
//!
//! Each call is spawned so the orchestrator stays responsive to further
//! submissions while one is in flight. `finish` discards the outcome of any
//! superseded submission, so a slow earlier response can never overwrite a
//! newer one. The terminal-state write is the final step on every path —
//! `Loading` is always cleared, failures included.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::Classifier;
use crate::transcript::Transcript;

use super::state::SharedState;

// ---------------------------------------------------------------------------
// RequestOrchestrator
// ---------------------------------------------------------------------------

/// Drives classification requests and records their outcomes.
///
/// Create with [`RequestOrchestrator::new`], then call [`run`](Self::run)
/// inside a tokio task.
pub struct RequestOrchestrator {
    state: SharedState,
    classifier: Arc<dyn Classifier>,
}

impl RequestOrchestrator {
    /// Create a new orchestrator.
    ///
    /// # Arguments
    ///
    /// * `state`      — shared request state (also read by the UI).
    /// * `classifier` — classification backend (e.g. `ApiClassifier`).
    pub fn new(state: SharedState, classifier: Arc<dyn Classifier>) -> Self {
        Self { state, classifier }
    }

    /// Run the orchestrator until `submit_rx` is closed.
    ///
    /// In-flight calls are drained before returning so every issued
    /// submission reaches a terminal state.
    pub async fn run(self, mut submit_rx: mpsc::Receiver<Transcript>) {
        let mut in_flight: Vec<JoinHandle<()>> = Vec::new();

        while let Some(transcript) = submit_rx.recv().await {
            in_flight.retain(|handle| !handle.is_finished());
            in_flight.push(self.dispatch(transcript));
        }

        for handle in in_flight {
            let _ = handle.await;
        }

        log::info!("request: submit channel closed, orchestrator shutting down");
    }

    /// Issue exactly one classification call for `transcript`.
    fn dispatch(&self, transcript: Transcript) -> JoinHandle<()> {
        let seq = self.state.lock().unwrap().begin();
        log::debug!(
            "request: submission #{seq} ({} messages)",
            transcript.len()
        );

        let classifier = Arc::clone(&self.classifier);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let outcome = classifier
                .classify(&transcript)
                .await
                .map_err(|e| e.to_string());

            if let Err(ref message) = outcome {
                log::error!("request: submission #{seq} failed: {message}");
            }

            let applied = state.lock().unwrap().finish(seq, outcome);
            if !applied {
                log::debug!("request: submission #{seq} superseded, outcome discarded");
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
