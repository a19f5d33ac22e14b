//! Classifier trait and common types

use async_trait::async_trait;
use veriscan_core::Result;

/// Trait for two-class text classifiers
///
/// Implementations report a `POSITIVE` or `NEGATIVE` label together with the
/// probability of the chosen label. The trait is object-safe; the server
/// holds one classifier as `Arc<dyn Classifier>` for the process lifetime.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<ClassificationResult>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of classification
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    /// Winning label (`POSITIVE` or `NEGATIVE`)
    pub label: String,

    /// Probability of the winning label (0.0-1.0)
    pub score: f32,

    /// Model name or version, when known
    pub model: Option<String>,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Create a new classification result
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
            model: None,
            latency_us: 0,
        }
    }

    /// True when the winning label is `POSITIVE` (case-insensitive)
    pub fn is_positive(&self) -> bool {
        self.label.eq_ignore_ascii_case("positive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_label_is_case_insensitive() {
        assert!(ClassificationResult::new("POSITIVE", 0.9).is_positive());
        assert!(ClassificationResult::new("positive", 0.9).is_positive());
        assert!(!ClassificationResult::new("NEGATIVE", 0.9).is_positive());
        assert!(!ClassificationResult::new("neutral", 0.9).is_positive());
    }
}
