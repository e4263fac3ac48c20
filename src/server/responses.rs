use serde::{Deserialize, Serialize};

use crate::classifiers::labels::{DomainLabel, IntentLabel};
use crate::classifiers::pipeline::GateOutcome;

/// Layer 1 prediction on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer1Result {
    pub label: DomainLabel,
    pub confidence: f32,
}

/// Layer 2 prediction on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer2Result {
    pub label: IntentLabel,
    pub confidence: f32,
}

/// Response of `POST /classify`
///
/// `layer2` is omitted entirely (not serialized as null) when the domain gate
/// rejected the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub layer1: Layer1Result,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer2: Option<Layer2Result>,
}

impl From<GateOutcome> for ClassificationResponse {
    fn from(outcome: GateOutcome) -> Self {
        Self {
            layer1: Layer1Result {
                label: outcome.domain.label,
                confidence: outcome.domain.confidence,
            },
            layer2: outcome.intent.map(|intent| Layer2Result {
                label: intent.label,
                confidence: intent.confidence,
            }),
        }
    }
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub models_loaded: bool,
}

impl HealthResponse {
    pub fn from_loaded(models_loaded: bool) -> Self {
        Self {
            status: if models_loaded { "ok" } else { "loading" }.to_string(),
            models_loaded,
        }
    }
}
