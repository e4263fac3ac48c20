//! Layer 2: six-way intent classifier, gated by Layer 1

use crate::classifiers::labels::IntentLabel;
use crate::core::config_loader::load_layer_labels_from_file;
use crate::core::error::{model_errors, GateResult, ModelErrorType};
use crate::models::modernbert::{ModelFiles, ModernBertSequenceClassifier};
use std::time::Instant;

/// Intent classifier for finance-related messages
pub struct IntentClassifier {
    classifier: ModernBertSequenceClassifier,
    /// Class-index-ordered label table from the model's `id2label`
    labels: Vec<IntentLabel>,
}

/// Intent classification result
#[derive(Debug, Clone)]
pub struct IntentResult {
    pub label: IntentLabel,
    pub confidence: f32,
    pub processing_time_ms: u64,
}

impl IntentClassifier {
    /// Load the intent classifier from a local directory or Hub reference
    pub fn load(model_ref: &str, use_cpu: bool) -> GateResult<Self> {
        let files = ModelFiles::resolve(model_ref)?;

        let expected = IntentLabel::label_names();
        let label_strings =
            load_layer_labels_from_file(&files.config.to_string_lossy(), &expected)?;
        let labels: Vec<IntentLabel> = label_strings
            .iter()
            .filter_map(|s| IntentLabel::parse(s))
            .collect();

        let classifier =
            ModernBertSequenceClassifier::load_from_files(&files, labels.len(), use_cpu)?;

        tracing::info!(
            model = model_ref,
            num_classes = labels.len(),
            "intent classifier loaded"
        );

        Ok(Self { classifier, labels })
    }

    /// Classify the intent of a finance-related message
    pub fn classify(&self, text: &str) -> GateResult<IntentResult> {
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

        Ok(IntentResult {
            label,
            confidence,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
