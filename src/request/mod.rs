//! Request orchestration — one classification call per submission.
//!
//! This module wires validated transcripts to the classification client and
//! exposes the shared status that the UI reads every frame.
//!
//! # Architecture
//!
//! ```text
//! Transcript (mpsc, sent by the form on successful validation)
//!        │
//!        ▼
//! RequestOrchestrator::run()  ← async tokio task
//!        │
//!        ├─ bump sequence counter, status = Loading
//!        └─ spawn: Classifier::classify(transcript)
//!              ├─ Ok(result)  → Success(result)   (if still the latest)
//!              └─ Err(e)      → Error(message)    (if still the latest)
//!
//! SharedState (Arc<Mutex<RequestState>>) ←─── read by egui update() each frame
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//! use disposition_classifier::client::{ApiClassifier, Classifier};
//! use disposition_classifier::config::ApiConfig;
//! use disposition_classifier::request::{new_shared_state, RequestOrchestrator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = new_shared_state();
//!     let classifier: Arc<dyn Classifier> =
//!         Arc::new(ApiClassifier::from_config(&ApiConfig::default()));
//!
//!     let (submit_tx, submit_rx) = mpsc::channel(16);
//!     let orchestrator = RequestOrchestrator::new(state.clone(), classifier);
//!
//!     tokio::spawn(async move { orchestrator.run(submit_rx).await });
//!
//!     // submit_tx is handed to the UI form
//!     # drop(submit_tx);
//! }
//! ```

pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::RequestOrchestrator;
pub use state::{new_shared_state, RequestState, RequestStatus, SharedState};
