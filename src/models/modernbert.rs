//! ModernBERT sequence classifier
//!
//! Loads a fine-tuned ModernBERT sequence-classification checkpoint (backbone,
//! optional pre-classifier head, linear classifier) and runs single-text
//! inference: tokenize, forward, pool, classify, softmax, arg-max.

use crate::core::error::{
    config_errors, from_candle_error, model_errors, GateResult, ModelErrorType,
};
use crate::core::tokenization::{SequenceTokenizer, TokenizationConfig};
use crate::model_error;
use candle_core::{DType, Device, IndexOp, Tensor};
use candle_nn::{Module, VarBuilder};
use candle_transformers::models::modernbert::{ClassifierPooling, Config, ModernBert};
use hf_hub::{api::sync::Api, Repo, RepoType};
use std::path::{Path, PathBuf};

/// Resolved paths of the three files a classifier artifact consists of
#[derive(Debug, Clone)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub tokenizer: PathBuf,
    pub weights: PathBuf,
}

impl ModelFiles {
    /// Resolve a model reference to concrete file paths.
    ///
    /// A reference that names an existing directory is used as-is; anything
    /// else is treated as a HuggingFace Hub model id and the three files are
    /// fetched into the local cache.
    pub fn resolve(model_ref: &str) -> GateResult<Self> {
        if Path::new(model_ref).is_dir() {
            let dir = Path::new(model_ref);
            let files = Self {
                config: dir.join("config.json"),
                tokenizer: dir.join("tokenizer.json"),
                weights: dir.join("model.safetensors"),
            };
            for path in [&files.config, &files.tokenizer, &files.weights] {
                if !path.exists() {
                    return Err(config_errors::file_not_found(&path.to_string_lossy()));
                }
            }
            return Ok(files);
        }

        tracing::info!(model = model_ref, "resolving model from HuggingFace Hub");
        let repo = Repo::with_revision(model_ref.to_string(), RepoType::Model, "main".to_string());
        let api = Api::new()
            .map_err(|e| hub_error("api initialization", &e.to_string()))?
            .repo(repo);

        Ok(Self {
            config: api
                .get("config.json")
                .map_err(|e| hub_error("config.json download", &e.to_string()))?,
            tokenizer: api
                .get("tokenizer.json")
                .map_err(|e| hub_error("tokenizer.json download", &e.to_string()))?,
            weights: api
                .get("model.safetensors")
                .map_err(|e| hub_error("model.safetensors download", &e.to_string()))?,
        })
    }
}

fn hub_error(operation: &str, error: &str) -> crate::core::error::GateError {
    crate::core::error::GateError::External {
        library: "hf-hub".to_string(),
        operation: operation.to_string(),
        error: error.to_string(),
    }
}

/// Select the inference device, never failing on CUDA-less machines
pub fn select_device(use_cpu: bool) -> Device {
    if use_cpu {
        Device::Cpu
    } else {
        Device::cuda_if_available(0).unwrap_or(Device::Cpu)
    }
}

/// Optional dense + layer-norm head applied between pooling and the classifier
#[derive(Clone)]
pub struct ModernBertHead {
    dense: candle_nn::Linear,
    layer_norm: candle_nn::LayerNorm,
}

impl ModernBertHead {
    pub fn load(vb: VarBuilder, config: &Config) -> Result<Self, candle_core::Error> {
        // The checkpoint stores the head dense layer without bias.
        let dense = candle_nn::Linear::new(
            vb.get((config.hidden_size, config.hidden_size), "dense.weight")?,
            None,
        );

        // LayerNorm::new requires a bias tensor even though the checkpoint
        // does not carry one.
        let layer_norm = candle_nn::LayerNorm::new(
            vb.get((config.hidden_size,), "norm.weight")?,
            Tensor::zeros((config.hidden_size,), DType::F32, vb.device())?,
            1e-12,
        );

        Ok(Self { dense, layer_norm })
    }
}

impl Module for ModernBertHead {
    fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        let xs = xs.apply(&self.dense)?;
        let xs = xs.gelu()?;
        xs.apply(&self.layer_norm)
    }
}

/// Linear classifier that maps pooled hidden states to class probabilities
#[derive(Clone)]
pub struct ModernBertClassificationHead {
    classifier: candle_nn::Linear,
}

impl ModernBertClassificationHead {
    pub fn load_with_classes(
        vb: VarBuilder,
        config: &Config,
        num_classes: usize,
    ) -> Result<Self, candle_core::Error> {
        let weight = vb.get((num_classes, config.hidden_size), "weight")?;
        let bias = vb.get((num_classes,), "bias")?;
        let classifier = candle_nn::Linear::new(weight, Some(bias));

        Ok(Self { classifier })
    }
}

impl Module for ModernBertClassificationHead {
    fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        let logits = xs.apply(&self.classifier)?;
        candle_nn::ops::softmax(&logits, candle_core::D::Minus1)
    }
}

/// Fine-tuned ModernBERT sequence classifier held in memory for the lifetime
/// of the service
pub struct ModernBertSequenceClassifier {
    model: ModernBert,
    head: Option<ModernBertHead>,
    classifier: ModernBertClassificationHead,
    classifier_pooling: ClassifierPooling,
    tokenizer: SequenceTokenizer,
    num_classes: usize,
}

impl std::fmt::Debug for ModernBertSequenceClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModernBertSequenceClassifier")
            .field("classifier_pooling", &self.classifier_pooling)
            .field("num_classes", &self.num_classes)
            .finish()
    }
}

impl ModernBertSequenceClassifier {
    /// Load a classifier from a local directory or HuggingFace Hub reference
    pub fn load(model_ref: &str, num_classes: usize, use_cpu: bool) -> GateResult<Self> {
        let files = ModelFiles::resolve(model_ref)?;
        Self::load_from_files(&files, num_classes, use_cpu)
    }

    /// Load a classifier from already-resolved artifact files
    pub fn load_from_files(
        files: &ModelFiles,
        num_classes: usize,
        use_cpu: bool,
    ) -> GateResult<Self> {
        let device = select_device(use_cpu);
        let model_ref = files.weights.to_string_lossy();

        let config_str = std::fs::read_to_string(&files.config)
            .map_err(|_e| config_errors::file_not_found(&files.config.to_string_lossy()))?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| {
            config_errors::invalid_json(&files.config.to_string_lossy(), &e.to_string())
        })?;

        let classifier_pooling = config
            .classifier_config
            .as_ref()
            .map(|cc| cc.classifier_pooling.clone())
            .unwrap_or(ClassifierPooling::MEAN);

        let tokenizer = SequenceTokenizer::from_file(
            &files.tokenizer.to_string_lossy(),
            TokenizationConfig::default(),
            device.clone(),
        )?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[files.weights.clone()], DType::F32, &device)
                .map_err(|e| {
                    model_errors::load_failure(
                        ModelErrorType::ModernBert,
                        &files.weights.to_string_lossy(),
                        &e.to_string(),
                    )
                })?
        };

        // Checkpoints exported through torch.compile prefix every tensor with
        // `_orig_mod.`, so try both.
        let (model, model_vb) = if let Ok(model) = ModernBert::load(vb.clone(), &config) {
            (model, vb.clone())
        } else if let Ok(model) = ModernBert::load(vb.pp("_orig_mod"), &config) {
            (model, vb.pp("_orig_mod"))
        } else {
            return Err(model_error!(
                ModelErrorType::ModernBert,
                "model loading",
                "failed to load ModernBERT backbone with or without _orig_mod prefix",
                model_ref
            ));
        };

        let head = ModernBertHead::load(model_vb.pp("head"), &config).ok();

        let classifier = ModernBertClassificationHead::load_with_classes(
            model_vb.pp("classifier"),
            &config,
            num_classes,
        )
        .map_err(|e| {
            model_errors::load_failure(ModelErrorType::Classifier, &model_ref, &e.to_string())
        })?;

        Ok(Self {
            model,
            head,
            classifier,
            classifier_pooling,
            tokenizer,
            num_classes,
        })
    }

    /// Classify a text, returning the predicted class index and the softmax
    /// probability of that class
    pub fn classify_text(&self, text: &str) -> GateResult<(usize, f32)> {
        let tokenization = self.tokenizer.tokenize(text)?;
        let (input_ids, attention_mask) = self.tokenizer.create_tensors(&tokenization)?;

        let model_output = self
            .model
            .forward(&input_ids, &attention_mask)
            .map_err(|e| from_candle_error(e, "backbone forward"))?;

        let pooled = pool_hidden_states(&model_output, &attention_mask, &self.classifier_pooling)
            .map_err(|e| from_candle_error(e, "pooling"))?;

        let classifier_input = match &self.head {
            Some(head) => head
                .forward(&pooled)
                .map_err(|e| from_candle_error(e, "head forward"))?,
            None => pooled,
        };

        let probabilities = self
            .classifier
            .forward(&classifier_input)
            .map_err(|e| from_candle_error(e, "classifier forward"))?;

        let probabilities = probabilities
            .squeeze(0)
            .and_then(|t| t.to_vec1::<f32>())
            .map_err(|e| from_candle_error(e, "probability extraction"))?;

        let (predicted_class, confidence) =
            argmax_with_confidence(&probabilities).ok_or_else(|| {
                model_errors::inference_failure(
                    ModelErrorType::Classifier,
                    "classifier produced an empty probability distribution",
                )
            })?;

        if predicted_class >= self.num_classes {
            return Err(model_errors::inference_failure(
                ModelErrorType::Classifier,
                &format!(
                    "invalid class index {} (num_classes: {})",
                    predicted_class, self.num_classes
                ),
            ));
        }

        Ok((predicted_class, confidence))
    }

    /// Number of output classes
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }
}

/// Pool token hidden states into one vector per sequence
fn pool_hidden_states(
    model_output: &Tensor,
    attention_mask: &Tensor,
    pooling: &ClassifierPooling,
) -> candle_core::Result<Tensor> {
    match pooling {
        ClassifierPooling::CLS => model_output.i((.., 0, ..)),
        ClassifierPooling::MEAN => {
            // Attention-mask-weighted mean over the sequence dimension.
            let mask = attention_mask.unsqueeze(2)?.to_dtype(DType::F32)?;
            let masked = model_output.broadcast_mul(&mask)?;
            let summed = masked.sum(1)?;
            let mask_sum = attention_mask.sum_keepdim(1)?.to_dtype(DType::F32)?;
            summed.broadcast_div(&mask_sum)
        }
    }
}

/// Arg-max over a probability distribution, returning `(index, probability)`
pub fn argmax_with_confidence(probabilities: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &prob) in probabilities.iter().enumerate() {
        match best {
            Some((_, best_prob)) if prob <= best_prob => {}
            _ => best = Some((i, prob)),
        }
    }
    best
}
