use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_core::IndexOp;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

const ENCODER_PREFIXES: [&str; 2] = ["bert", "roberta"];

struct BertForSequenceClassificationImpl {
    bert: BertModel,
    pooler: Option<Linear>,
    classifier: Linear,
}

impl BertForSequenceClassificationImpl {
    fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        let encoder_vb = ENCODER_PREFIXES
            .into_iter()
            .find(|prefix| vb.contains_tensor(&format!("{prefix}.embeddings.word_embeddings.weight")))
            .map_or_else(|| vb.clone(), |prefix| vb.pp(prefix));

        let bert = BertModel::load(encoder_vb.clone(), config)?;

        let hidden_size = config.hidden_size;

        // HF sequence classifiers feed the pooled [CLS] state to the head.
        let pooler = if encoder_vb.contains_tensor("pooler.dense.weight") {
            Some(candle_nn::linear(
                hidden_size,
                hidden_size,
                encoder_vb.pp("pooler").pp("dense"),
            )?)
        } else {
            None
        };

        let classifier = candle_nn::linear(hidden_size, 1, vb.pp("classifier"))?;

        Ok(Self {
            bert,
            pooler,
            classifier,
        })
    }

    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        let output = self
            .bert
            .forward(input_ids, token_type_ids, attention_mask)?;
        let cls_token = output.i((.., 0, ..))?;
        let pooled = match &self.pooler {
            Some(pooler) => pooler.forward(&cls_token)?.tanh()?,
            None => cls_token,
        };
        self.classifier.forward(&pooled)
    }
}

/// Shared handle to a loaded classifier. Cloning is cheap.
#[derive(Clone)]
pub struct BertClassifier(std::sync::Arc<BertForSequenceClassificationImpl>);

impl BertClassifier {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        // SAFETY: the weights file is opened read-only and must not be modified while mapped.
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let model = BertForSequenceClassificationImpl::load(vb, &config)?;

        Ok(Self(std::sync::Arc::new(model)))
    }

    /// Returns logits of shape `(batch, 1)`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.0.forward(input_ids, token_type_ids, attention_mask)
    }
}
