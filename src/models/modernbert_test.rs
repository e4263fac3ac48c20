//! Tests for the ModernBERT classifier plumbing

use super::modernbert::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_argmax_picks_highest_probability() {
    let probs = [0.1, 0.7, 0.2];
    assert_eq!(argmax_with_confidence(&probs), Some((1, 0.7)));
}

#[test]
fn test_argmax_keeps_first_on_ties() {
    let probs = [0.4, 0.4, 0.2];
    assert_eq!(argmax_with_confidence(&probs), Some((0, 0.4)));
}

#[test]
fn test_argmax_empty_distribution_is_none() {
    assert_eq!(argmax_with_confidence(&[]), None);
}

#[test]
fn test_argmax_single_class() {
    assert_eq!(argmax_with_confidence(&[1.0]), Some((0, 1.0)));
}

#[test]
fn test_resolve_local_directory_requires_all_artifact_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), "{}").unwrap();
    // tokenizer.json and model.safetensors are missing

    let err = ModelFiles::resolve(&dir.path().to_string_lossy()).unwrap_err();
    assert!(err.to_string().contains("file not found"));
}

#[test]
fn test_resolve_local_directory_with_all_files() {
    let dir = TempDir::new().unwrap();
    for name in ["config.json", "tokenizer.json", "model.safetensors"] {
        fs::write(dir.path().join(name), "").unwrap();
    }

    let files = ModelFiles::resolve(&dir.path().to_string_lossy()).unwrap();
    assert!(files.config.ends_with("config.json"));
    assert!(files.tokenizer.ends_with("tokenizer.json"));
    assert!(files.weights.ends_with("model.safetensors"));
}

#[test]
fn test_select_device_cpu_flag_forces_cpu() {
    let device = select_device(true);
    assert!(matches!(device, candle_core::Device::Cpu));
}
