//! Verdict taxonomy and the uniform analysis report shape
//!
//! Every analysis path (text, URL, file) answers with the same four-field
//! report. Failures are folded into it as well: the `Error` verdict with
//! confidence 0 is a normal response body, never a transport error.

use serde::{Deserialize, Serialize};

/// Categorical outcome of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Safe")]
    Safe,

    #[serde(rename = "Likely Scam")]
    LikelyScam,

    #[serde(rename = "Likely Scam / Fake Info")]
    LikelyScamFakeInfo,

    #[serde(rename = "Error")]
    Error,
}

impl Verdict {
    /// Wire-format label for this verdict
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::LikelyScam => "Likely Scam",
            Self::LikelyScamFakeInfo => "Likely Scam / Fake Info",
            Self::Error => "Error",
        }
    }
}

/// Uniform response shape returned by every analysis endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Categorical outcome
    pub verdict: Verdict,

    /// Confidence in the verdict, 0.0-1.0 (0 on error)
    pub confidence: f64,

    /// Human-readable explanation of how the verdict was reached
    pub explanation: String,

    /// Short educational note, fixed per analysis path
    pub lesson: String,
}

impl AnalysisReport {
    /// Create a new report
    pub fn new(
        verdict: Verdict,
        confidence: f64,
        explanation: impl Into<String>,
        lesson: impl Into<String>,
    ) -> Self {
        Self {
            verdict,
            confidence,
            explanation: explanation.into(),
            lesson: lesson.into(),
        }
    }

    /// Create an error report: `Error` verdict, confidence 0
    pub fn error(explanation: impl Into<String>, lesson: impl Into<String>) -> Self {
        Self::new(Verdict::Error, 0.0, explanation, lesson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_wire_labels() {
        assert_eq!(
            serde_json::to_string(&Verdict::LikelyScamFakeInfo).unwrap(),
            "\"Likely Scam / Fake Info\""
        );
        assert_eq!(
            serde_json::to_string(&Verdict::LikelyScam).unwrap(),
            "\"Likely Scam\""
        );
        assert_eq!(serde_json::to_string(&Verdict::Safe).unwrap(), "\"Safe\"");
        assert_eq!(serde_json::to_string(&Verdict::Error).unwrap(), "\"Error\"");
    }

    #[test]
    fn verdict_round_trip() {
        for verdict in [
            Verdict::Safe,
            Verdict::LikelyScam,
            Verdict::LikelyScamFakeInfo,
            Verdict::Error,
        ] {
            let json = serde_json::to_string(&verdict).unwrap();
            let back: Verdict = serde_json::from_str(&json).unwrap();
            assert_eq!(back, verdict);
            assert_eq!(json, format!("\"{}\"", verdict.as_str()));
        }
    }

    #[test]
    fn error_report_has_zero_confidence() {
        let report = AnalysisReport::error("something broke", "try again");
        assert_eq!(report.verdict, Verdict::Error);
        assert_eq!(report.confidence, 0.0);
        assert_eq!(report.explanation, "something broke");
    }

    #[test]
    fn report_serializes_all_four_fields() {
        let report = AnalysisReport::new(Verdict::Safe, 0.95, "Domain analyzed: example.com", "ok");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["verdict"], "Safe");
        assert_eq!(value["confidence"], 0.95);
        assert!(value["explanation"]
            .as_str()
            .unwrap()
            .contains("example.com"));
        assert!(value.get("lesson").is_some());
    }
}
