//! Veriscan Core
//!
//! Shared types used across the Veriscan crates:
//! - Error type and result handling
//! - The verdict taxonomy and the uniform analysis report shape

pub mod error;
pub mod report;

pub use error::{Error, Result};
pub use report::{AnalysisReport, Verdict};
