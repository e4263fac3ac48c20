//! Model configuration loader
//!
//! Reads the HuggingFace `config.json` that ships with each classifier
//! artifact. The `id2label` mapping in that file is the single source of truth
//! for class count and index-to-label order.

use crate::core::error::{config_errors, GateResult};
use serde_json::Value;
use std::path::Path;

/// Loader for classifier model configuration files
pub struct ModelConfigLoader;

impl ModelConfigLoader {
    /// Load and parse `config.json` from a model directory
    pub fn load_json_config(model_path: &str) -> GateResult<Value> {
        let config_path = Path::new(model_path).join("config.json");
        Self::load_json_config_from_path(&config_path.to_string_lossy())
    }

    /// Load and parse a JSON configuration file from a specific path
    pub fn load_json_config_from_path(config_path: &str) -> GateResult<Value> {
        let config_content = std::fs::read_to_string(config_path)
            .map_err(|_e| config_errors::file_not_found(config_path))?;

        serde_json::from_str(&config_content)
            .map_err(|e| config_errors::invalid_json(config_path, &e.to_string()))
    }

    /// Extract labels as `Vec<String>` sorted by numeric class id
    pub fn extract_sorted_labels(config_json: &Value) -> GateResult<Vec<String>> {
        let id2label = config_json
            .get("id2label")
            .and_then(|v| v.as_object())
            .ok_or_else(|| config_errors::missing_field("id2label", "config.json"))?;

        let mut labels: Vec<(usize, String)> = Vec::with_capacity(id2label.len());
        for (id_str, label_value) in id2label {
            let id: usize = id_str.parse().map_err(|e| {
                config_errors::invalid_json(
                    "config.json",
                    &format!("invalid id in id2label: {}", e),
                )
            })?;
            let label = label_value
                .as_str()
                .ok_or_else(|| {
                    config_errors::invalid_json("config.json", "label value is not a string")
                })?
                .to_string();
            labels.push((id, label));
        }

        labels.sort_by_key(|&(id, _)| id);

        // Class ids must be dense 0..n, otherwise arg-max indices would not
        // line up with the label table.
        for (position, (id, _)) in labels.iter().enumerate() {
            if *id != position {
                return Err(config_errors::invalid_json(
                    "config.json",
                    &format!("id2label ids are not contiguous, missing id {}", position),
                ));
            }
        }

        Ok(labels.into_iter().map(|(_, label)| label).collect())
    }
}

/// Load the class labels for one classification layer and validate them
/// against the fixed label set that layer is trained on.
///
/// The returned vector preserves the class-index order from `id2label`, which
/// may differ between training runs even when the label set is fixed.
pub fn load_layer_labels(model_path: &str, expected: &[&str]) -> GateResult<Vec<String>> {
    let config_path = Path::new(model_path).join("config.json");
    load_layer_labels_from_file(&config_path.to_string_lossy(), expected)
}

/// Same as [`load_layer_labels`] but for an already-resolved `config.json`
/// path (Hub-cached artifacts do not live in the directory the user named).
pub fn load_layer_labels_from_file(config_path: &str, expected: &[&str]) -> GateResult<Vec<String>> {
    let config_json = ModelConfigLoader::load_json_config_from_path(config_path)?;
    let labels = ModelConfigLoader::extract_sorted_labels(&config_json)?;

    if labels.len() != expected.len() {
        return Err(config_errors::invalid_labels(
            config_path,
            &format!(
                "expected {} labels, model declares {}",
                expected.len(),
                labels.len()
            ),
        ));
    }

    // Count plus membership plus no duplicates makes the sets equal; a model
    // declaring one label twice must not slip past the check.
    for (position, label) in labels.iter().enumerate() {
        if !expected.contains(&label.as_str()) {
            return Err(config_errors::invalid_labels(
                config_path,
                &format!("unexpected label '{}' in id2label", label),
            ));
        }
        if labels[..position].contains(label) {
            return Err(config_errors::invalid_labels(
                config_path,
                &format!("duplicate label '{}' in id2label", label),
            ));
        }
    }

    Ok(labels)
}
