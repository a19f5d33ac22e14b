//! Veriscan Classifiers
//!
//! The text and URL analysis machinery behind the Veriscan demo:
//! - A `Classifier` trait for two-class (POSITIVE/NEGATIVE) text sentiment
//! - A DistilBERT SST-2 adapter running on Candle (feature `ml-models`)
//! - A lexicon-based fallback classifier used when no model is loaded
//! - Registrable-domain extraction and the URL keyword heuristic
//!
//! All classifiers run on CPU and are safe to share across requests once
//! constructed.

pub mod classifier;
pub mod domain;
pub mod lexicon;
#[cfg(feature = "ml-models")]
pub mod sst;
pub mod url_heuristic;

pub use classifier::{ClassificationResult, Classifier};
pub use domain::registrable_domain;
pub use lexicon::LexiconClassifier;
#[cfg(feature = "ml-models")]
pub use sst::SstClassifier;
pub use url_heuristic::{UrlAssessment, UrlHeuristic, SUSPICIOUS_KEYWORDS};
