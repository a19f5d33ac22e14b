//! Lexicon-based fallback classifier
//!
//! Used when no DistilBERT model can be loaded (offline machines, missing
//! weights) or when the lexicon mode is selected explicitly. Emits the same
//! `POSITIVE`/`NEGATIVE` labels as the SST-2 checkpoint so the verdict
//! mapping downstream is identical.

use crate::classifier::{ClassificationResult, Classifier};
use aho_corasick::AhoCorasick;
use std::time::Instant;
use veriscan_core::Result;

pub struct LexiconClassifier {
    name: String,
    benign: AhoCorasick,
    suspicious: AhoCorasick,
}

impl LexiconClassifier {
    pub fn new() -> Result<Self> {
        Self::with_name("lexicon")
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let benign = vec![
            "thank",
            "thanks",
            "regards",
            "sincerely",
            "meeting",
            "invoice attached",
            "newsletter",
            "receipt",
            "appointment",
            "unsubscribe",
        ];
        let suspicious = vec![
            "urgent",
            "winner",
            "lottery",
            "prize",
            "act now",
            "wire transfer",
            "gift card",
            "account suspended",
            "confirm your password",
            "one-time password",
            "limited time offer",
            "claim your",
        ];

        let benign = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(benign)
            .map_err(|e| {
                veriscan_core::Error::classifier(format!(
                    "Failed to build benign lexicon matcher: {e}"
                ))
            })?;

        let suspicious = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(suspicious)
            .map_err(|e| {
                veriscan_core::Error::classifier(format!(
                    "Failed to build suspicious lexicon matcher: {e}"
                ))
            })?;

        Ok(Self {
            name: name.into(),
            benign,
            suspicious,
        })
    }
}

#[async_trait::async_trait]
impl Classifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let benign_hits = self.benign.find_iter(text).count() as f32;
        let suspicious_hits = self.suspicious.find_iter(text).count() as f32;
        let total = benign_hits + suspicious_hits;

        // No signal either way reads as weakly positive, like a sentiment
        // model shown neutral text.
        let positive_share = if total == 0.0 {
            0.5
        } else {
            benign_hits / total
        };
        let (label, score) = if positive_share >= 0.5 {
            ("POSITIVE", positive_share)
        } else {
            ("NEGATIVE", 1.0 - positive_share)
        };

        Ok(ClassificationResult {
            label: label.to_string(),
            score,
            model: Some("scam-lexicon".to_string()),
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

    #[tokio::test]
    async fn neutral_text_is_weakly_positive() {
        let classifier = LexiconClassifier::new().unwrap();
        let result = classifier.classify("hello world").await.unwrap();
        assert_eq!(result.label, "POSITIVE");
        assert_eq!(result.score, 0.5);
    }

    #[tokio::test]
    async fn scammy_text_is_negative() {
        let classifier = LexiconClassifier::new().unwrap();
        let result = classifier
            .classify("URGENT: you are a winner! Claim your prize with a gift card today")
            .await
            .unwrap();
        assert_eq!(result.label, "NEGATIVE");
        assert!(result.score > 0.5);
    }

    #[tokio::test]
    async fn benign_text_is_positive() {
        let classifier = LexiconClassifier::new().unwrap();
        let result = classifier
            .classify("Thanks for the meeting yesterday. Receipt and invoice attached. Regards")
            .await
            .unwrap();
        assert_eq!(result.label, "POSITIVE");
        assert!(result.score > 0.5);
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let classifier = LexiconClassifier::new().unwrap();
        let result = classifier
            .classify("ACT NOW to claim your LOTTERY PRIZE")
            .await
            .unwrap();
        assert_eq!(result.label, "NEGATIVE");
    }

    #[tokio::test]
    async fn score_is_share_of_winning_side() {
        let classifier = LexiconClassifier::new().unwrap();
        // Two suspicious hits, one benign hit.
        let result = classifier
            .classify("urgent lottery, regards")
            .await
            .unwrap();
        assert_eq!(result.label, "NEGATIVE");
        assert!((result.score - 2.0 / 3.0).abs() < 1e-6);
    }
}
