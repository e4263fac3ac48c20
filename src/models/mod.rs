//! # Model architectures

pub mod modernbert;

pub use modernbert::{select_device, ModelFiles, ModernBertSequenceClassifier};

#[cfg(test)]
pub mod modernbert_test;
