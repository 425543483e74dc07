//! Classification service client.
//!
//! This module provides:
//! * [`Classifier`] — async trait implemented by all classifier backends.
//! * [`ApiClassifier`] — REST client for the disposition endpoint.
//! * [`ClassificationResult`] — decoded response plus confidence helpers.
//! * [`ClassifyError`] — error variants for classification calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use disposition_classifier::client::{ApiClassifier, Classifier};
//! use disposition_classifier::config::ApiConfig;
//! use disposition_classifier::transcript::Transcript;
//!
//! #[tokio::main]
//! async fn main() {
//!     let classifier = ApiClassifier::from_config(&ApiConfig::default());
//!
//!     let transcript = Transcript::parse(r#"[{"role":"user","content":"Hello"}]"#).unwrap();
//!     let result = classifier.classify(&transcript).await.unwrap();
//!     println!("{} ({:?})", result.disposition_code, result.confidence_band());
//! }
//! ```

pub mod api;
pub mod result;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use api::{ApiClassifier, Classifier, ClassifyError, REMOTE_ERROR_FALLBACK};
pub use result::{ClassificationResult, ConfidenceBand};
