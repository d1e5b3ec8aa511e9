use std::path::PathBuf;

use crate::constants::{DEFAULT_MODELS_DIR, MAX_SEQ_LEN, MODEL_ID};

#[derive(Debug, Clone)]
pub struct CrossEncoderConfig {
    /// Checkpoint identifier reported to clients.
    pub model_id: String,

    /// Directory with `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_path: PathBuf,

    /// Token budget per (query, document) pair.
    pub max_seq_len: usize,
}

impl Default for CrossEncoderConfig {
    fn default() -> Self {
        Self {
            model_id: MODEL_ID.to_string(),
            model_path: PathBuf::from(DEFAULT_MODELS_DIR).join(MODEL_ID),
            max_seq_len: MAX_SEQ_LEN,
        }
    }
}

impl CrossEncoderConfig {
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: model_path.into(),
            ..Default::default()
        }
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.model_path.as_os_str().is_empty() {
            return Err("model_path cannot be empty".to_string());
        }

        if self.max_seq_len == 0 || self.max_seq_len > MAX_SEQ_LEN {
            return Err(format!(
                "max_seq_len must be between 1 and {}, got {}",
                MAX_SEQ_LEN, self.max_seq_len
            ));
        }

        Ok(())
    }
}
