//! Tokenization for sequence classification
//!
//! Thin wrapper around the HuggingFace fast tokenizer that applies the
//! truncation settings a ModernBERT classifier expects and turns an encoding
//! into the `(input_ids, attention_mask)` tensor pair the backbone consumes.

use crate::core::error::{model_errors, processing_errors, GateResult};
use candle_core::{Device, Tensor};
use tokenizers::{Tokenizer, TruncationDirection, TruncationParams, TruncationStrategy};

/// Tokenization configuration for a sequence classifier
#[derive(Debug, Clone)]
pub struct TokenizationConfig {
    /// Maximum sequence length
    pub max_length: usize,
    /// Whether to add special tokens
    pub add_special_tokens: bool,
}

impl Default for TokenizationConfig {
    fn default() -> Self {
        Self {
            max_length: 512,
            add_special_tokens: true,
        }
    }
}

/// Tokenization result for a single text
#[derive(Debug, Clone)]
pub struct TokenizationResult {
    /// Token IDs
    pub token_ids: Vec<u32>,
    /// Attention mask
    pub attention_mask: Vec<u32>,
}

/// Tokenizer wrapper shared by both classification layers
#[derive(Debug)]
pub struct SequenceTokenizer {
    tokenizer: Tokenizer,
    config: TokenizationConfig,
    device: Device,
}

impl SequenceTokenizer {
    /// Create a tokenizer wrapper with truncation configured up front
    pub fn new(
        mut tokenizer: Tokenizer,
        config: TokenizationConfig,
        device: Device,
    ) -> GateResult<Self> {
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: config.max_length,
                strategy: TruncationStrategy::LongestFirst,
                stride: 0,
                direction: TruncationDirection::Right,
            }))
            .map_err(|e| model_errors::tokenizer_failure(&e.to_string()))?;

        Ok(Self {
            tokenizer,
            config,
            device,
        })
    }

    /// Load from a `tokenizer.json` file
    pub fn from_file(
        tokenizer_path: &str,
        config: TokenizationConfig,
        device: Device,
    ) -> GateResult<Self> {
        let tokenizer = Tokenizer::from_file(tokenizer_path).map_err(|e| {
            model_errors::tokenizer_failure(&format!(
                "failed to load tokenizer from {}: {}",
                tokenizer_path, e
            ))
        })?;
        Self::new(tokenizer, config, device)
    }

    /// Tokenize a single text
    pub fn tokenize(&self, text: &str) -> GateResult<TokenizationResult> {
        let encoding = self
            .tokenizer
            .encode(text, self.config.add_special_tokens)
            .map_err(|e| model_errors::tokenizer_failure(&e.to_string()))?;

        Ok(TokenizationResult {
            token_ids: encoding.get_ids().to_vec(),
            attention_mask: encoding.get_attention_mask().to_vec(),
        })
    }

    /// Create `(input_ids, attention_mask)` tensors of shape `[1, seq_len]`
    pub fn create_tensors(&self, result: &TokenizationResult) -> GateResult<(Tensor, Tensor)> {
        let token_ids = Tensor::new(&result.token_ids[..], &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| processing_errors::tensor_operation("input_ids", &e.to_string()))?;
        let attention_mask = Tensor::new(&result.attention_mask[..], &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| processing_errors::tensor_operation("attention_mask", &e.to_string()))?;

        Ok((token_ids, attention_mask))
    }
}
