//! Registrable-domain extraction
//!
//! Reduces a URL to its registrable domain (second-level label plus public
//! suffix, e.g. `example.co.uk`), which is what the URL heuristic inspects.
//! Input is tolerated loosely: scheme-less strings are retried with an
//! `http://` prefix, and hosts with no public suffix (IP literals,
//! `localhost`) fall back to the raw host.

use url::Url;

/// Extract the registrable domain from a URL string.
///
/// Returns an empty string when no host can be found at all; callers treat
/// that as "nothing to flag".
pub fn registrable_domain(input: &str) -> String {
    match host_of(input) {
        Some(host) => match psl::domain_str(&host) {
            Some(domain) => domain.to_string(),
            None => host,
        },
        None => String::new(),
    }
}

fn host_of(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(trimmed) {
        if let Some(host) = url.host_str() {
            return Some(host.to_ascii_lowercase());
        }
    }

    // Bare hosts like "example.com/login" parse as relative URLs; retry with
    // a scheme so they still resolve to a host.
    Url::parse(&format!("http://{trimmed}"))
        .ok()?
        .host_str()
        .map(|h| h.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_subdomains() {
        assert_eq!(registrable_domain("https://www.example.com/path"), "example.com");
        assert_eq!(registrable_domain("https://a.b.example.com"), "example.com");
    }

    #[test]
    fn keeps_multi_label_public_suffixes() {
        assert_eq!(registrable_domain("https://shop.example.co.uk"), "example.co.uk");
    }

    #[test]
    fn tolerates_missing_scheme() {
        assert_eq!(registrable_domain("example.com"), "example.com");
        assert_eq!(registrable_domain("secure-mybank.com/login"), "secure-mybank.com");
    }

    #[test]
    fn lowercases_the_host() {
        assert_eq!(registrable_domain("https://Secure-MyBank.COM/Login"), "secure-mybank.com");
    }

    #[test]
    fn falls_back_to_raw_host_without_public_suffix() {
        assert_eq!(registrable_domain("http://localhost:8000"), "localhost");
    }

    #[test]
    fn hostless_input_yields_empty() {
        assert_eq!(registrable_domain(""), "");
        assert_eq!(registrable_domain("   "), "");
    }
}
