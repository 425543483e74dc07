//! Disposition Classifier window — egui/eframe application.
//!
//! # Architecture
//!
//! [`DispositionApp`] is the top-level [`eframe::App`]. It owns:
//!
//! * [`TranscriptForm`] — the pasted JSON text and the most recent
//!   validation failure.
//! * `submit_tx` — sends validated [`Transcript`]s to the request
//!   orchestrator.
//! * [`SharedState`] — read every frame to render the current
//!   [`RequestStatus`].
//!
//! The form validates on submit; nothing is sent unless the whole input is
//! a valid transcript. While a request is in flight the submit button is
//! disabled and a spinner line is shown; the stored result or error renders
//! below the form once the orchestrator records it.

use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::client::{ClassificationResult, ConfidenceBand};
use crate::config::AppConfig;
use crate::request::{RequestStatus, SharedState};
use crate::transcript::{Transcript, TranscriptError};

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 212, 255);
const BUSY: egui::Color32 = egui::Color32::from_rgb(68, 136, 255);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 107, 107);
const MUTED: egui::Color32 = egui::Color32::from_rgb(140, 140, 140);

/// Example transcript shown as the input hint.
const PLACEHOLDER: &str =
    r#"[{"role": "user", "content": "Hello"}, {"role": "assistant", "content": "Hi, how can I help?"}]"#;

// ---------------------------------------------------------------------------
// TranscriptForm
// ---------------------------------------------------------------------------

/// The transcript input form: raw text plus the most recent validation
/// failure.
///
/// Validation is all-or-nothing — [`try_submit`](Self::try_submit) returns a
/// [`Transcript`] only when the whole input validates, and the caller is
/// expected to submit it exactly once.
#[derive(Debug, Default)]
pub struct TranscriptForm {
    /// Raw text being edited.
    pub input: String,
    error: Option<TranscriptError>,
}

impl TranscriptForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the current input.
    ///
    /// On success the held failure is cleared and the parsed transcript is
    /// returned for submission. On failure the error is recorded for display
    /// and `None` is returned — nothing may be submitted.
    pub fn try_submit(&mut self) -> Option<Transcript> {
        match Transcript::parse(&self.input) {
            Ok(transcript) => {
                self.error = None;
                Some(transcript)
            }
            Err(e) => {
                log::debug!("transcript validation failed: {e}");
                self.error = Some(e);
                None
            }
        }
    }

    /// The most recent validation failure, if any.
    pub fn error(&self) -> Option<&TranscriptError> {
        self.error.as_ref()
    }

    /// Clear the displayed failure (called when the user edits the text).
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

// ---------------------------------------------------------------------------
// DispositionApp
// ---------------------------------------------------------------------------

/// eframe application — transcript form plus classification results.
pub struct DispositionApp {
    form: TranscriptForm,

    /// Send validated transcripts to the request orchestrator.
    submit_tx: mpsc::Sender<Transcript>,
    /// Request status written by the orchestrator, read here every frame.
    state: SharedState,

    /// Application configuration (read-only after startup).
    config: AppConfig,

    /// Spinner animation phase (increases each frame while loading).
    spinner_phase: f32,
}

impl DispositionApp {
    /// Create a new [`DispositionApp`].
    ///
    /// * `submit_tx` — sender end of the submission channel.
    /// * `state`     — shared request state, also held by the orchestrator.
    /// * `config`    — loaded application configuration.
    pub fn new(submit_tx: mpsc::Sender<Transcript>, state: SharedState, config: AppConfig) -> Self {
        Self {
            form: TranscriptForm::new(),
            submit_tx,
            state,
            config,
            spinner_phase: 0.0,
        }
    }

    /// Validate the form and hand the transcript to the orchestrator.
    fn submit(&mut self) {
        if let Some(transcript) = self.form.try_submit() {
            if let Err(e) = self.submit_tx.try_send(transcript) {
                log::warn!("submit channel unavailable: {e}");
            }
        }
    }

    // ── Section renderers ────────────────────────────────────────────────

    fn draw_header(&self, ui: &mut egui::Ui) {
        ui.heading("Disposition Classifier");
        ui.label(
            egui::RichText::new("Classify loan collection call transcripts")
                .color(MUTED)
                .size(12.0),
        );
    }

    /// Render the transcript input, inline validation error, and submit
    /// button.
    fn draw_form(&mut self, ui: &mut egui::Ui, loading: bool) {
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Transcript JSON").strong());
        ui.label(
            egui::RichText::new(
                "Paste the transcript as an array of {\"role\", \"content\"} objects.",
            )
            .color(MUTED)
            .size(12.0),
        );
        ui.add_space(4.0);

        let editor = egui::TextEdit::multiline(&mut self.form.input)
            .hint_text(PLACEHOLDER)
            .font(egui::TextStyle::Monospace)
            .desired_rows(12)
            .desired_width(f32::INFINITY)
            .interactive(!loading);
        if ui.add(editor).changed() {
            self.form.clear_error();
        }

        if let Some(error) = self.form.error() {
            ui.add_space(2.0);
            ui.label(
                egui::RichText::new(error.to_string())
                    .color(ERROR_COLOR)
                    .size(12.0),
            );
        }

        ui.add_space(6.0);
        let label = if loading {
            "Classifying…"
        } else {
            "Classify Disposition"
        };
        if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
            self.submit();
        }
    }

    fn draw_loading(&self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(format!("{} Classifying transcript…", self.spinner_char()))
                .color(BUSY)
                .size(13.0),
        );
    }

    fn draw_error(ui: &mut egui::Ui, message: &str) {
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(format!("Error: {message}"))
                .color(ERROR_COLOR)
                .size(13.0),
        );
    }

    /// Render the classification results panel.
    fn draw_results(ui: &mut egui::Ui, result: &ClassificationResult) {
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(6.0);
        ui.heading("Classification Results");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&result.disposition_code)
                    .color(ACCENT)
                    .size(18.0)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let band = result.confidence_band();
                let value = result
                    .confidence_percent()
                    .map(|p| format!("{p}%"))
                    .unwrap_or_else(|| "N/A".into());
                ui.label(
                    egui::RichText::new(format!("Confidence: {value} ({})", band.label()))
                        .color(Self::confidence_color(band))
                        .size(13.0),
                );
            });
        });

        ui.add_space(6.0);
        ui.label(egui::RichText::new("Explanation").strong());
        ui.label(result.explanation.as_str());

        if let Some(summary) = &result.summary {
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Summary").strong());
            ui.label(summary.as_str());
        }

        if !result.key_points.is_empty() {
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Key Points").strong());
            for point in &result.key_points {
                ui.label(format!("• {point}"));
            }
        }
    }

    fn draw_footer(&self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(format!("endpoint: {}", self.config.api.base_url))
                .color(MUTED)
                .size(10.0),
        );
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    /// A simple rotating ASCII spinner character driven by `spinner_phase`.
    fn spinner_char(&self) -> char {
        let chars = ['|', '/', '-', '\\'];
        let idx = (self.spinner_phase as usize) % chars.len();
        chars[idx]
    }

    /// Badge colour for a confidence band.
    fn confidence_color(band: ConfidenceBand) -> egui::Color32 {
        match band {
            ConfidenceBand::High => ACCENT,
            ConfidenceBand::Medium => egui::Color32::from_rgb(255, 193, 7),
            ConfidenceBand::Low => ERROR_COLOR,
            ConfidenceBand::Unavailable => egui::Color32::from_rgb(108, 117, 125),
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for DispositionApp {
    /// Called every frame by eframe. Reads the request status, then renders
    /// the form and whichever status panel applies.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Snapshot the status under a short lock — never hold it while
        // rendering.
        let status = self.state.lock().unwrap().status.clone();
        let loading = status.is_loading();

        if loading {
            self.spinner_phase += 0.08;
            if self.spinner_phase >= 4.0 {
                self.spinner_phase = 0.0;
            }
            // Keep repainting so the outcome written by the orchestrator is
            // picked up promptly.
            ctx.request_repaint_after(Duration::from_millis(66));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.draw_header(ui);
                    ui.separator();
                    self.draw_form(ui, loading);

                    match &status {
                        RequestStatus::Idle => {}
                        RequestStatus::Loading => self.draw_loading(ui),
                        RequestStatus::Error(message) => Self::draw_error(ui, message),
                        RequestStatus::Success(result) => Self::draw_results(ui, result),
                    }

                    self.draw_footer(ui);
                });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Disposition Classifier closing");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
