//! # Core support layer

pub mod config_loader;
pub mod error;
pub mod tokenization;

pub use config_loader::{load_layer_labels, load_layer_labels_from_file, ModelConfigLoader};

pub use error::{
    config_errors, from_candle_error, model_errors, processing_errors, ConfigErrorType, GateError,
    GateResult, ModelErrorType,
};

pub use tokenization::{SequenceTokenizer, TokenizationConfig, TokenizationResult};

// Test modules (only compiled in test builds)
#[cfg(test)]
pub mod config_loader_test;
