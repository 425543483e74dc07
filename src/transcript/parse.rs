//! [`Transcript`] type and all-or-nothing validation of pasted JSON.
//!
//! A transcript is an ordered array of message objects. Each message must be
//! a non-null JSON object carrying both a `"role"` and a `"content"` key;
//! everything else about a message (extra keys, value types) is passed
//! through to the classification endpoint untouched. Messages are therefore
//! kept as raw [`serde_json::Map`]s rather than a narrower struct — the
//! payload that goes over the wire is exactly what the user pasted.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

// ---------------------------------------------------------------------------
// TranscriptError
// ---------------------------------------------------------------------------

/// Validation failures for pasted transcript text.
///
/// Every variant renders as a user-facing message shown inline under the
/// form input. None of them is fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranscriptError {
    /// The input was empty or whitespace-only. Checked before parsing.
    #[error("Please paste the transcript JSON")]
    EmptyInput,

    /// The input did not decode as JSON at all.
    #[error("Invalid JSON: {0}")]
    Parse(String),

    /// The input decoded, but the top-level value is not an array.
    #[error("Transcript must be an array of objects")]
    NotAnArray,

    /// The array contains an element that is not an object with both
    /// `"role"` and `"content"` keys.
    #[error("Message {index} must have \"role\" and \"content\" fields")]
    MissingFields { index: usize },
}

// ---------------------------------------------------------------------------
// Transcript
// ---------------------------------------------------------------------------

/// An ordered, validated conversation transcript.
///
/// Construct exclusively through [`Transcript::parse`] — there is no way to
/// build one from partially-valid data. Serializes back to the same JSON
/// array it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Transcript(Vec<Map<String, Value>>);

impl Transcript {
    /// Parse and validate raw text as a transcript.
    ///
    /// Validation is all-or-nothing: the first offending message fails the
    /// whole input and nothing is submitted.
    pub fn parse(raw: &str) -> Result<Self, TranscriptError> {
        if raw.trim().is_empty() {
            return Err(TranscriptError::EmptyInput);
        }

        let value: Value =
            serde_json::from_str(raw).map_err(|e| TranscriptError::Parse(e.to_string()))?;

        let Value::Array(items) = value else {
            return Err(TranscriptError::NotAnArray);
        };

        let mut messages = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                // `Value::Object` is necessarily non-null; nulls and every
                // other JSON type fall through to the error arm.
                Value::Object(obj) if obj.contains_key("role") && obj.contains_key("content") => {
                    messages.push(obj);
                }
                _ => return Err(TranscriptError::MissingFields { index }),
            }
        }

        Ok(Self(messages))
    }

    /// Number of messages. An empty transcript is valid.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The decoded message objects, in conversation order.
    pub fn messages(&self) -> &[Map<String, Value>] {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
