//! [`ClassificationResult`] — the decoded disposition endpoint response.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ClassificationResult
// ---------------------------------------------------------------------------

/// A classification verdict for one transcript.
///
/// Mirrors the service's wire format, including its `Disposition_code`
/// field capitalization. `summary` and `key_points` are optional on the
/// wire; an absent `key_points` decodes as an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Categorical label assigned to the transcript.
    #[serde(rename = "Disposition_code")]
    pub disposition_code: String,

    /// Service-reported certainty in `[0, 1]`. The service sends a negative
    /// value (conventionally `-1.0`) when no confidence is available.
    pub confidence: f64,

    /// Free-text reasoning behind the disposition and confidence.
    pub explanation: String,

    /// Neutral English summary of the call, when the service produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Ordered key points extracted from the transcript.
    #[serde(default)]
    pub key_points: Vec<String>,
}

impl ClassificationResult {
    /// `false` when the service reported the no-confidence sentinel.
    pub fn has_confidence(&self) -> bool {
        self.confidence >= 0.0
    }

    /// Band the confidence score for display.
    pub fn confidence_band(&self) -> ConfidenceBand {
        if self.confidence >= 0.8 {
            ConfidenceBand::High
        } else if self.confidence >= 0.5 {
            ConfidenceBand::Medium
        } else if self.confidence >= 0.0 {
            ConfidenceBand::Low
        } else {
            ConfidenceBand::Unavailable
        }
    }

    /// Confidence as a percent string (`"88.0"`), or `None` when unavailable.
    pub fn confidence_percent(&self) -> Option<String> {
        self.has_confidence()
            .then(|| format!("{:.1}", self.confidence * 100.0))
    }
}

// ---------------------------------------------------------------------------
// ConfidenceBand
// ---------------------------------------------------------------------------

/// Display grouping for confidence scores.
///
/// | Band        | Range        |
/// |-------------|--------------|
/// | High        | `>= 0.8`     |
/// | Medium      | `>= 0.5`     |
/// | Low         | `>= 0.0`     |
/// | Unavailable | `< 0.0`      |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
    Unavailable,
}

impl ConfidenceBand {
    /// Short label shown on the confidence badge.
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "High",
            ConfidenceBand::Medium => "Medium",
            ConfidenceBand::Low => "Low",
            ConfidenceBand::Unavailable => "N/A",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
