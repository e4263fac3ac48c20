//! Sequential two-stage classification pipeline
//!
//! Runs the domain gate first and only invokes the intent classifier when the
//! message is finance-related. This conditional branch is the entirety of the
//! routing logic.

use crate::classifiers::domain::{DomainClassifier, DomainResult};
use crate::classifiers::intent::{IntentClassifier, IntentResult};
use crate::classifiers::labels::DomainLabel;
use crate::core::error::GateResult;
use crate::validation_error;

/// Both classifiers, loaded once and shared read-only across requests
pub struct ClassificationPipeline {
    domain: DomainClassifier,
    intent: IntentClassifier,
}

/// Combined result of one pass through the gate
#[derive(Debug, Clone)]
pub struct GateOutcome {
    pub domain: DomainResult,
    /// Present only when the domain gate accepted the message
    pub intent: Option<IntentResult>,
}

impl ClassificationPipeline {
    /// Load both classifiers
    pub fn load(domain_model: &str, intent_model: &str, use_cpu: bool) -> GateResult<Self> {
        let domain = DomainClassifier::load(domain_model, use_cpu)?;
        let intent = IntentClassifier::load(intent_model, use_cpu)?;

        Ok(Self { domain, intent })
    }

    /// Classify a message through the two-stage gate
    pub fn classify(&self, text: &str) -> GateResult<GateOutcome> {
        if text.trim().is_empty() {
            return Err(validation_error!(
                "message",
                "non-empty text",
                "empty or whitespace-only input"
            ));
        }

        let domain = self.domain.classify(text)?;
        tracing::debug!(
            label = %domain.label,
            confidence = domain.confidence,
            time_ms = domain.processing_time_ms,
            "layer 1 prediction"
        );

        if domain.label != DomainLabel::Finance {
            return Ok(GateOutcome {
                domain,
                intent: None,
            });
        }

        let intent = self.intent.classify(text)?;
        tracing::debug!(
            label = %intent.label,
            confidence = intent.confidence,
            time_ms = intent.processing_time_ms,
            "layer 2 prediction"
        );

        Ok(GateOutcome {
            domain,
            intent: Some(intent),
        })
    }
}
