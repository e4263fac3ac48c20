//! # Two-stage classification

pub mod domain;
pub mod intent;
pub mod labels;
pub mod pipeline;

pub use domain::{DomainClassifier, DomainResult};
pub use intent::{IntentClassifier, IntentResult};
pub use labels::{DomainLabel, IntentLabel};
pub use pipeline::{ClassificationPipeline, GateOutcome};
