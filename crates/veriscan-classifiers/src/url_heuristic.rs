//! URL keyword heuristic
//!
//! A fixed denylist matched as substrings of the registrable domain. The
//! list deliberately includes terms that appear on legitimate sites
//! (`hospital`, `payment`); it is preserved as-is rather than tuned, since
//! the demo's point is to show the technique, not ship a production filter.

use crate::domain::registrable_domain;
use aho_corasick::AhoCorasick;
use veriscan_core::Result;

/// Keywords whose presence in a registrable domain flags the URL.
pub const SUSPICIOUS_KEYWORDS: [&str; 8] = [
    "login", "bank", "secure", "verify", "hospital", "upi", "payment", "crypto",
];

/// Outcome of assessing one URL
#[derive(Debug, Clone)]
pub struct UrlAssessment {
    /// The registrable domain the keywords were tested against
    pub domain: String,

    /// Keywords found in the domain, in match order
    pub matched: Vec<&'static str>,
}

impl UrlAssessment {
    /// True when at least one denylist keyword matched
    pub fn flagged(&self) -> bool {
        !self.matched.is_empty()
    }
}

pub struct UrlHeuristic {
    matcher: AhoCorasick,
}

impl UrlHeuristic {
    pub fn new() -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(SUSPICIOUS_KEYWORDS)
            .map_err(|e| {
                veriscan_core::Error::classifier(format!(
                    "Failed to build URL keyword matcher: {e}"
                ))
            })?;
        Ok(Self { matcher })
    }

    /// Extract the registrable domain and test it against the denylist.
    ///
    /// Never fails: unparseable input degrades to an empty domain, which
    /// matches nothing.
    pub fn assess(&self, url: &str) -> UrlAssessment {
        let domain = registrable_domain(url);
        let matched = self
            .matcher
            .find_iter(&domain)
            .map(|m| SUSPICIOUS_KEYWORDS[m.pattern().as_usize()])
            .collect();
        UrlAssessment { domain, matched }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_denylisted_domains() {
        let heuristic = UrlHeuristic::new().unwrap();
        let assessment = heuristic.assess("https://secure-mybank.com/login");
        assert_eq!(assessment.domain, "secure-mybank.com");
        assert!(assessment.flagged());
        assert!(assessment.matched.contains(&"secure"));
        assert!(assessment.matched.contains(&"bank"));
    }

    #[test]
    fn passes_clean_domains() {
        let heuristic = UrlHeuristic::new().unwrap();
        let assessment = heuristic.assess("https://example.com");
        assert_eq!(assessment.domain, "example.com");
        assert!(!assessment.flagged());
    }

    #[test]
    fn keywords_match_anywhere_in_the_domain() {
        let heuristic = UrlHeuristic::new().unwrap();
        for url in [
            "https://mylogin-portal.com",
            "https://cityhospital.org",
            "https://fastupi.in",
            "https://cryptoexchange.net",
            "https://payment-gateway.io",
            "https://verify-account.net",
        ] {
            assert!(heuristic.assess(url).flagged(), "expected {url} to be flagged");
        }
    }

    #[test]
    fn path_keywords_do_not_count() {
        // Only the domain is inspected; a /login path on a clean domain
        // stays clean.
        let heuristic = UrlHeuristic::new().unwrap();
        assert!(!heuristic.assess("https://example.com/login").flagged());
    }

    #[test]
    fn hostless_input_is_clean() {
        let heuristic = UrlHeuristic::new().unwrap();
        let assessment = heuristic.assess("");
        assert_eq!(assessment.domain, "");
        assert!(!assessment.flagged());
    }
}
