//! Tests for the model configuration loader

use super::config_loader::*;
use crate::core::error::GateError;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, config: &serde_json::Value) -> String {
    let path = dir.path().join("config.json");
    fs::write(&path, serde_json::to_string(config).unwrap()).unwrap();
    dir.path().to_string_lossy().to_string()
}

#[test]
fn test_extract_sorted_labels_orders_by_numeric_id() {
    let config = json!({
        "id2label": { "1": "non_finance", "0": "finance" }
    });
    let labels = ModelConfigLoader::extract_sorted_labels(&config).unwrap();
    assert_eq!(labels, vec!["finance", "non_finance"]);
}

#[test]
fn test_extract_sorted_labels_rejects_non_contiguous_ids() {
    let config = json!({
        "id2label": { "0": "finance", "2": "non_finance" }
    });
    let err = ModelConfigLoader::extract_sorted_labels(&config).unwrap_err();
    assert!(err.to_string().contains("not contiguous"));
}

#[test]
fn test_extract_sorted_labels_requires_id2label() {
    let config = json!({ "hidden_size": 768 });
    let err = ModelConfigLoader::extract_sorted_labels(&config).unwrap_err();
    assert!(matches!(err, GateError::Configuration { .. }));
    assert!(err.to_string().contains("id2label"));
}

#[test]
fn test_load_json_config_missing_file() {
    let err = ModelConfigLoader::load_json_config("/nonexistent/model/dir").unwrap_err();
    assert!(err.to_string().contains("file not found"));
}

#[test]
fn test_load_layer_labels_accepts_expected_set_in_any_order() {
    let dir = TempDir::new().unwrap();
    let model_path = write_config(
        &dir,
        &json!({ "id2label": { "0": "non_finance", "1": "finance" } }),
    );

    let labels = load_layer_labels(&model_path, &["finance", "non_finance"]).unwrap();
    // Index order comes from id2label, not from the expected set.
    assert_eq!(labels, vec!["non_finance", "finance"]);
}

#[test]
fn test_load_layer_labels_rejects_wrong_count() {
    let dir = TempDir::new().unwrap();
    let model_path = write_config(&dir, &json!({ "id2label": { "0": "finance" } }));

    let err = load_layer_labels(&model_path, &["finance", "non_finance"]).unwrap_err();
    assert!(err.to_string().contains("expected 2 labels"));
}

#[test]
fn test_load_layer_labels_rejects_unknown_label() {
    let dir = TempDir::new().unwrap();
    let model_path = write_config(
        &dir,
        &json!({ "id2label": { "0": "finance", "1": "sports" } }),
    );

    let err = load_layer_labels(&model_path, &["finance", "non_finance"]).unwrap_err();
    assert!(err.to_string().contains("unexpected label 'sports'"));
}

#[test]
fn test_load_layer_labels_rejects_duplicated_label() {
    let dir = TempDir::new().unwrap();
    // Right count, every label is a member of the set, but one expected label
    // is missing because another appears twice.
    let model_path = write_config(
        &dir,
        &json!({ "id2label": { "0": "finance", "1": "finance" } }),
    );

    let err = load_layer_labels(&model_path, &["finance", "non_finance"]).unwrap_err();
    assert!(err.to_string().contains("duplicate label 'finance'"));
}
