//! Two-stage text classification gate for an AI interview orchestrator.
//!
//! Stage one decides whether an incoming user message is finance-related;
//! stage two, invoked only when stage one accepts, assigns one of six intent
//! categories. Both stages are fine-tuned ModernBERT sequence classifiers run
//! in-process with candle, served behind a small axum API:
//!
//! - `POST /classify` — `{"message": ...}` → layer 1 result plus, for
//!   finance-labeled messages, a layer 2 result.
//! - `GET /health` — reports whether both models are loaded.

pub mod classifiers;
pub mod config;
pub mod core;
pub mod models;
pub mod server;

pub use crate::classifiers::{ClassificationPipeline, DomainLabel, GateOutcome, IntentLabel};
pub use crate::config::GateConfig;
pub use crate::core::{GateError, GateResult};
pub use crate::server::{build_router, AppState};

#[cfg(test)]
pub mod test_fixtures;
