pub mod config;


pub use config::CrossEncoderConfig;

use candle_core::{Device, Tensor};
use tokenizers::{Encoding, Tokenizer};
use tracing::{debug, info};

use super::Scorer;
use super::bert::BertClassifier;
use super::device::{Backend, SelectedDevice, select_device};
use super::error::ModelError;
use super::utils::load_pair_tokenizer;

const REQUIRED_FILES: [&str; 3] = ["config.json", "model.safetensors", "tokenizer.json"];

pub struct CrossEncoder {
    device: Device,
    backend: Backend,
    config: CrossEncoderConfig,
    model: BertClassifier,
    tokenizer: Tokenizer,
}

impl std::fmt::Debug for CrossEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossEncoder")
            .field("backend", &self.backend)
            .field("config", &self.config)
            .finish()
    }
}

impl CrossEncoder {
    /// Loads weights and tokenizer from `config.model_path`. Blocking.
    pub fn load(config: CrossEncoderConfig) -> Result<Self, ModelError> {
        if let Err(msg) = config.validate() {
            return Err(ModelError::InvalidConfig { reason: msg });
        }

        let model_path = &config.model_path;
        if !model_path.is_dir() {
            return Err(ModelError::ModelNotFound {
                path: model_path.clone(),
            });
        }

        for file in REQUIRED_FILES {
            if !model_path.join(file).exists() {
                return Err(ModelError::ModelLoadFailed {
                    reason: format!("Missing {} in {}", file, model_path.display()),
                });
            }
        }

        let SelectedDevice { device, backend } = select_device();
        debug!(backend = backend.label(), "Selected compute device for cross-encoder");

        info!(
            model_id = %config.model_id,
            model_path = %model_path.display(),
            max_seq_len = config.max_seq_len,
            "Loading cross-encoder weights"
        );

        let model =
            BertClassifier::load(model_path, &device).map_err(|e| ModelError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            })?;

        let tokenizer = load_pair_tokenizer(model_path, config.max_seq_len).map_err(|e| {
            ModelError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        Ok(Self {
            device,
            backend,
            config,
            model,
            tokenizer,
        })
    }

    pub fn config(&self) -> &CrossEncoderConfig {
        &self.config
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    fn encode(&self, pairs: &[(&str, &str)]) -> Result<Vec<Encoding>, ModelError> {
        self.tokenizer
            .encode_batch(pairs.to_vec(), true)
            .map_err(|e| ModelError::TokenizationFailed {
                reason: e.to_string(),
            })
    }

    fn stack(
        &self,
        encodings: &[Encoding],
        field: fn(&Encoding) -> &[u32],
        seq_len: usize,
    ) -> Result<Tensor, ModelError> {
        let mut data = Vec::with_capacity(encodings.len() * seq_len);
        for encoding in encodings {
            let row = field(encoding);
            if row.len() != seq_len {
                return Err(ModelError::InferenceFailed {
                    reason: format!(
                        "unpadded batch: row of {} tokens, expected {}",
                        row.len(),
                        seq_len
                    ),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Tensor::from_vec(
            data,
            (encodings.len(), seq_len),
            &self.device,
        )?)
    }
}

impl Scorer for CrossEncoder {
    /// Runs the whole batch through one forward pass and returns raw logits.
    fn score(&self, pairs: &[(&str, &str)]) -> Result<Vec<f32>, ModelError> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        let encodings = self.encode(pairs)?;
        let seq_len = encodings.first().map_or(0, |e| e.get_ids().len());

        debug!(batch = encodings.len(), seq_len, "Scoring pair batch");

        let input_ids = self.stack(&encodings, Encoding::get_ids, seq_len)?;
        let type_ids = self.stack(&encodings, Encoding::get_type_ids, seq_len)?;
        let attention_mask = self.stack(&encodings, Encoding::get_attention_mask, seq_len)?;

        let logits = self
            .model
            .forward(&input_ids, &type_ids, Some(&attention_mask))
            .map_err(|e| ModelError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let scores = logits.flatten_all()?.to_vec1::<f32>()?;

        if scores.len() != pairs.len() {
            return Err(ModelError::InferenceFailed {
                reason: format!(
                    "classifier returned {} logits for {} pairs",
                    scores.len(),
                    pairs.len()
                ),
            });
        }

        Ok(scores)
    }

    fn model_id(&self) -> &str {
        &self.config.model_id
    }

    fn device_name(&self) -> &'static str {
        self.backend.label()
    }
}
