//! Desktop client for a call-transcript disposition classification service.
//!
//! The user pastes a JSON transcript into the form; the client validates it,
//! POSTs it to the classification endpoint, and renders the returned
//! disposition, confidence, explanation, summary and key points.
//!
//! # Modules
//!
//! * [`transcript`] — transcript parsing and all-or-nothing validation.
//! * [`client`]     — `Classifier` trait, REST client, result types.
//! * [`request`]    — request status state machine and orchestrator.
//! * [`config`]     — settings with TOML persistence and platform paths.
//! * [`app`]        — egui/eframe application.

pub mod app;
pub mod client;
pub mod config;
pub mod request;
pub mod transcript;
