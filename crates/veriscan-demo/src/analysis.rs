//! Analysis layer: classifier/heuristic output to the uniform report shape
//!
//! Every public function here returns an [`AnalysisReport`], never an error;
//! failures are folded into the `Error` verdict with the remediation lesson
//! for that path. The HTTP handlers stay thin wrappers around these calls.

use veriscan_classifiers::{Classifier, UrlHeuristic};
use veriscan_core::{AnalysisReport, Verdict};

/// Inputs longer than this many whitespace-separated tokens are truncated
/// before classification, bounding latency and respecting the model's
/// input-length limits.
const MAX_WORDS: usize = 400;

pub const TEXT_LESSON: &str =
    "Verify information via official sources; avoid sharing OTPs or sensitive info.";
pub const TEXT_ERROR_LESSON: &str = "Try again with shorter or valid input.";
pub const URL_LESSON: &str = "Always check official URLs; avoid clicking suspicious links.";
pub const FILE_ERROR_LESSON: &str = "Upload a valid text, PDF, or image file.";

/// Classify free text: POSITIVE maps to `Safe`, anything else to
/// `Likely Scam / Fake Info`; confidence is the model's probability for the
/// winning label.
pub async fn analyze_text(classifier: &dyn Classifier, text: &str) -> AnalysisReport {
    match classify_text(classifier, text).await {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!("text analysis failed: {e}");
            AnalysisReport::error(format!("Error analyzing text: {e}"), TEXT_ERROR_LESSON)
        }
    }
}

async fn classify_text(
    classifier: &dyn Classifier,
    text: &str,
) -> veriscan_core::Result<AnalysisReport> {
    if text.trim().is_empty() {
        return Err(veriscan_core::Error::classifier("input text is empty"));
    }

    let truncated = truncate_words(text, MAX_WORDS);
    let result = classifier.classify(&truncated).await?;
    tracing::debug!(
        label = %result.label,
        score = result.score,
        latency_us = result.latency_us,
        model = ?result.model,
        "text classified"
    );

    let verdict = if result.is_positive() {
        Verdict::Safe
    } else {
        Verdict::LikelyScamFakeInfo
    };
    Ok(AnalysisReport::new(
        verdict,
        result.score as f64,
        format!("AI analyzed the text with confidence {:.2}.", result.score),
        TEXT_LESSON,
    ))
}

fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_words {
        words[..max_words].join(" ")
    } else {
        text.to_string()
    }
}

/// Assess a URL against the keyword denylist. Never errors; the confidences
/// are fixed at 0.85 (flagged) and 0.95 (clean).
pub fn analyze_url(heuristic: &UrlHeuristic, url: &str) -> AnalysisReport {
    let assessment = heuristic.assess(url);
    if assessment.flagged() {
        tracing::debug!(
            domain = %assessment.domain,
            matched = ?assessment.matched,
            "URL flagged by keyword heuristic"
        );
    }

    let (verdict, confidence) = if assessment.flagged() {
        (Verdict::LikelyScam, 0.85)
    } else {
        (Verdict::Safe, 0.95)
    };
    AnalysisReport::new(
        verdict,
        confidence,
        format!("Domain analyzed: {}", assessment.domain),
        URL_LESSON,
    )
}

/// Extract text from an uploaded file and run the text analysis on it.
/// Extraction failures become `Error` reports with the upload lesson.
pub async fn analyze_file(
    classifier: &dyn Classifier,
    filename: &str,
    bytes: &[u8],
) -> AnalysisReport {
    match veriscan_extract::extract_text(filename, bytes) {
        Ok(content) => analyze_text(classifier, &content).await,
        Err(e) => {
            tracing::debug!("file extraction failed for {filename}: {e}");
            AnalysisReport::error(format!("Error reading file: {e}"), FILE_ERROR_LESSON)
        }
    }
}
