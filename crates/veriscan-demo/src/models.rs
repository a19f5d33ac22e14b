//! Server configuration types

use std::str::FromStr;

/// Which classifier backend serves `/analyze_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// DistilBERT SST-2 on Candle, with lexicon fallback if loading fails
    Ml,
    /// Lexicon classifier only; no model download
    Lexicon,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ml" => Ok(Self::Ml),
            "lexicon" => Ok(Self::Lexicon),
            other => Err(format!("unknown mode '{other}' (expected 'ml' or 'lexicon')")),
        }
    }
}

/// Demo server configuration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Listen address
    pub address: String,

    /// Listen port
    pub port: u16,

    /// Classifier backend
    pub mode: Mode,

    /// Hugging Face repo of the sentiment checkpoint (ml mode)
    pub model_repo: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8000,
            mode: Mode::Ml,
            model_repo: "distilbert-base-uncased-finetuned-sst-2-english".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("ml".parse::<Mode>().unwrap(), Mode::Ml);
        assert_eq!("Lexicon".parse::<Mode>().unwrap(), Mode::Lexicon);
        assert!("neural".parse::<Mode>().is_err());
    }

    #[test]
    fn defaults_match_the_documented_bind() {
        let config = DemoConfig::default();
        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.port, 8000);
    }
}
