//! DistilBERT SST-2 adapter on Candle
//!
//! Wraps the pretrained `distilbert-base-uncased-finetuned-sst-2-english`
//! checkpoint (or any DistilBERT sequence-classification checkpoint with the
//! same head layout) as a [`Classifier`]. Weights, tokenizer, and config are
//! fetched from the Hugging Face Hub once and cached; the loaded model is
//! read-only and shared across requests.

use crate::classifier::{ClassificationResult, Classifier};
use candle_core::{DType, Device, IndexOp, Tensor};
use candle_nn::ops::softmax_last_dim;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::distilbert::{Config as DistilBertConfig, DistilBertModel};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokenizers::Tokenizer;
use veriscan_core::Result;

/// Checkpoint the demo loads when no other repo is configured
pub const DEFAULT_MODEL_REPO: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// DistilBERT's position-embedding window
const MAX_SEQ_LEN: usize = 512;

/// Classification-head fields read from the checkpoint's config.json
/// (the architecture fields are parsed separately by candle's own Config).
#[derive(Debug, Deserialize)]
struct HeadConfig {
    dim: usize,

    /// Label names by stringified index, e.g. {"0": "NEGATIVE", "1": "POSITIVE"}
    #[serde(default)]
    id2label: HashMap<String, String>,
}

impl HeadConfig {
    /// Resolve labels in index order, defaulting to the SST-2 convention.
    fn labels(&self) -> Vec<String> {
        let mut labels = vec!["NEGATIVE".to_string(), "POSITIVE".to_string()];
        for (idx, label) in &self.id2label {
            if let Ok(i) = idx.parse::<usize>() {
                if i < labels.len() {
                    labels[i] = label.clone();
                }
            }
        }
        labels
    }
}

/// Downloaded checkpoint files
struct ModelFiles {
    config: PathBuf,
    tokenizer: PathBuf,
    weights: PathBuf,
}

pub struct SstClassifier {
    name: String,
    tokenizer: Tokenizer,
    model: DistilBertModel,
    pre_classifier: Linear,
    classifier: Linear,
    labels: Vec<String>,
    device: Device,
}

impl SstClassifier {
    /// Download a checkpoint from the Hugging Face Hub and load it on CPU.
    pub fn from_hub(repo: &str) -> Result<Self> {
        let files = Self::fetch(repo)?;
        Self::from_files(repo, &files.config, &files.tokenizer, &files.weights)
    }

    fn fetch(repo: &str) -> Result<ModelFiles> {
        tracing::info!("Fetching model from Hugging Face: {repo}");

        let api = hf_hub::api::sync::Api::new().map_err(|e| {
            veriscan_core::Error::classifier(format!("Failed to initialize HuggingFace API: {e}"))
        })?;
        let repo = api.repo(hf_hub::Repo::model(repo.to_string()));

        let get = |filename: &str| {
            repo.get(filename).map_err(|e| {
                veriscan_core::Error::classifier(format!("Failed to download {filename}: {e}"))
            })
        };

        Ok(ModelFiles {
            config: get("config.json")?,
            tokenizer: get("tokenizer.json")?,
            weights: get("model.safetensors")?,
        })
    }

    /// Load a checkpoint from local files.
    pub fn from_files(
        name: &str,
        config_path: &Path,
        tokenizer_path: &Path,
        weights_path: &Path,
    ) -> Result<Self> {
        let config_text = std::fs::read_to_string(config_path)?;
        let config: DistilBertConfig = serde_json::from_str(&config_text).map_err(|e| {
            veriscan_core::Error::classifier(format!("Failed to parse model config: {e}"))
        })?;
        let head: HeadConfig = serde_json::from_str(&config_text).map_err(|e| {
            veriscan_core::Error::classifier(format!("Failed to parse classification head config: {e}"))
        })?;
        let labels = head.labels();

        let tokenizer = Tokenizer::from_file(tokenizer_path).map_err(|e| {
            veriscan_core::Error::classifier(format!("Failed to load tokenizer: {e}"))
        })?;

        let device = Device::Cpu;
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path.to_path_buf()], DType::F32, &device)
                .map_err(|e| {
                    veriscan_core::Error::classifier(format!("Failed to load weights: {e}"))
                })?
        };

        let model = DistilBertModel::load(vb.pp("distilbert"), &config).map_err(|e| {
            veriscan_core::Error::classifier(format!("Failed to load DistilBERT model: {e}"))
        })?;
        let pre_classifier =
            candle_nn::linear(head.dim, head.dim, vb.pp("pre_classifier")).map_err(|e| {
                veriscan_core::Error::classifier(format!("Failed to load pre-classifier head: {e}"))
            })?;
        let classifier =
            candle_nn::linear(head.dim, labels.len(), vb.pp("classifier")).map_err(|e| {
                veriscan_core::Error::classifier(format!("Failed to load classifier head: {e}"))
            })?;

        tracing::info!("Loaded DistilBERT classifier with labels {labels:?}");

        Ok(Self {
            name: name.to_string(),
            tokenizer,
            model,
            pre_classifier,
            classifier,
            labels,
            device,
        })
    }

    fn forward(&self, text: &str) -> Result<Vec<f32>> {
        let encoding = self.tokenizer.encode(text, true).map_err(|e| {
            veriscan_core::Error::classifier(format!("Tokenization failed: {e}"))
        })?;
        let mut ids: Vec<u32> = encoding.get_ids().to_vec();
        ids.truncate(MAX_SEQ_LEN);
        let seq_len = ids.len();

        let input_ids = Tensor::new(ids.as_slice(), &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| {
                veriscan_core::Error::classifier(format!("Failed to create input tensor: {e}"))
            })?;

        // Full bidirectional attention: nothing is masked.
        let attention_mask =
            Tensor::zeros((seq_len, seq_len), DType::U8, &self.device).map_err(|e| {
                veriscan_core::Error::classifier(format!("Failed to create attention mask: {e}"))
            })?;

        let hidden = self
            .model
            .forward(&input_ids, &attention_mask)
            .map_err(|e| {
                veriscan_core::Error::classifier(format!("Model forward pass failed: {e}"))
            })?;

        // Sequence classification pools the [CLS] position.
        let logits = hidden
            .i((.., 0))
            .and_then(|cls| self.pre_classifier.forward(&cls))
            .and_then(|x| x.relu())
            .and_then(|x| self.classifier.forward(&x))
            .map_err(|e| {
                veriscan_core::Error::classifier(format!("Classification head failed: {e}"))
            })?;

        softmax_last_dim(&logits)
            .and_then(|probs| probs.squeeze(0))
            .and_then(|probs| probs.to_vec1::<f32>())
            .map_err(|e| {
                veriscan_core::Error::classifier(format!("Failed to read probabilities: {e}"))
            })
    }
}

#[async_trait::async_trait]
impl Classifier for SstClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let probs = self.forward(text)?;
        let (best, score) = probs
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| veriscan_core::Error::classifier("model produced no scores"))?;
        let label = self
            .labels
            .get(best)
            .cloned()
            .unwrap_or_else(|| format!("LABEL_{best}"));

        Ok(ClassificationResult {
            label,
            score,
            model: Some(self.name.clone()),
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_config_resolves_id2label() {
        let head: HeadConfig = serde_json::from_str(
            r#"{"dim": 768, "id2label": {"0": "NEGATIVE", "1": "POSITIVE"}}"#,
        )
        .unwrap();
        assert_eq!(head.dim, 768);
        assert_eq!(head.labels(), vec!["NEGATIVE", "POSITIVE"]);
    }

    #[test]
    fn head_config_defaults_to_sst2_labels() {
        let head: HeadConfig = serde_json::from_str(r#"{"dim": 768}"#).unwrap();
        assert_eq!(head.labels(), vec!["NEGATIVE", "POSITIVE"]);
    }

    #[test]
    fn head_config_ignores_out_of_range_indices() {
        let head: HeadConfig = serde_json::from_str(
            r#"{"dim": 768, "id2label": {"1": "POSITIVE", "7": "SURPLUS"}}"#,
        )
        .unwrap();
        assert_eq!(head.labels(), vec!["NEGATIVE", "POSITIVE"]);
    }
}
