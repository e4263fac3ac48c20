//! Layer 1: finance / non-finance domain classifier

use crate::classifiers::labels::DomainLabel;
use crate::core::config_loader::load_layer_labels_from_file;
use crate::core::error::{model_errors, GateResult, ModelErrorType};
use crate::models::modernbert::{ModelFiles, ModernBertSequenceClassifier};
use std::time::Instant;

/// Binary gate deciding whether a message is finance-related
pub struct DomainClassifier {
    classifier: ModernBertSequenceClassifier,
    /// Class-index-ordered label table from the model's `id2label`
    labels: Vec<DomainLabel>,
}

/// Domain classification result
#[derive(Debug, Clone)]
pub struct DomainResult {
    pub label: DomainLabel,
    pub confidence: f32,
    pub processing_time_ms: u64,
}

impl DomainClassifier {
    /// Load the domain classifier from a local directory or Hub reference
    pub fn load(model_ref: &str, use_cpu: bool) -> GateResult<Self> {
        let files = ModelFiles::resolve(model_ref)?;

        let expected = DomainLabel::label_names();
        let label_strings =
            load_layer_labels_from_file(&files.config.to_string_lossy(), &expected)?;
        let labels: Vec<DomainLabel> = label_strings
            .iter()
            .filter_map(|s| DomainLabel::parse(s))
            .collect();

        let classifier =
            ModernBertSequenceClassifier::load_from_files(&files, labels.len(), use_cpu)?;

        tracing::info!(
            model = model_ref,
            num_classes = labels.len(),
            "domain classifier loaded"
        );

        Ok(Self { classifier, labels })
    }

    /// Classify a message as finance or non-finance
    pub fn classify(&self, text: &str) -> GateResult<DomainResult> {
        let start_time = Instant::now();

        let (predicted_class, confidence) = self.classifier.classify_text(text)?;

        let label = self.labels.get(predicted_class).copied().ok_or_else(|| {
            model_errors::inference_failure(
                ModelErrorType::Classifier,
                &format!(
                    "invalid class index {} not found in labels (max: {})",
                    predicted_class,
                    self.labels.len()
                ),
            )
        })?;

        Ok(DomainResult {
            label,
            confidence,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
