//! Transcript parsing and validation.
//!
//! This module provides:
//! * [`Transcript`] — an ordered list of message objects, the unit sent to
//!   the classification endpoint.
//! * [`TranscriptError`] — validation error variants surfaced in the form.
//!
//! # Quick start
//!
//! ```rust
//! use disposition_classifier::transcript::Transcript;
//!
//! let raw = r#"[{"role": "user", "content": "Hello"}]"#;
//! let transcript = Transcript::parse(raw).unwrap();
//! assert_eq!(transcript.len(), 1);
//! ```

pub mod parse;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use parse::{Transcript, TranscriptError};
