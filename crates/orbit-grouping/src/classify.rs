//! Content-intent classification
//!
//! Keyword heuristics over title and URL - no model, fast and deterministic.
//! Exploration wins over Reference when both match.

use serde::{Deserialize, Serialize};

/// Broad intent behind an open tab, derived from its title and URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Searching, browsing forums, comparing options
    Exploration,
    /// Documentation and reference material
    Reference,
    /// Everything else
    General,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Exploration => "exploration",
            ContentType::Reference => "reference",
            ContentType::General => "general",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exploratory markers, matched against title or URL.
const EXPLORATION_TERMS: &[&str] = &["search", "reddit", "stackoverflow"];
/// Exploratory markers matched against the URL only.
const EXPLORATION_URLS: &[&str] = &["google.com/search", "reddit.com"];

/// Reference markers, matched against title or URL.
const REFERENCE_TERMS: &[&str] = &["documentation", "docs", "api reference", "guide", "mdn"];
/// Reference markers matched against the URL only.
const REFERENCE_URLS: &[&str] = &["developer.mozilla.org", "react.dev", "docs."];

/// Classify a tab from its title and URL. Case-insensitive, never fails.
pub fn classify(title: &str, url: &str) -> ContentType {
    let title = title.to_lowercase();
    let url = url.to_lowercase();

    if contains_any(&title, EXPLORATION_TERMS)
        || contains_any(&url, EXPLORATION_TERMS)
        || contains_any(&url, EXPLORATION_URLS)
    {
        return ContentType::Exploration;
    }

    if contains_any(&title, REFERENCE_TERMS)
        || contains_any(&url, REFERENCE_TERMS)
        || contains_any(&url, REFERENCE_URLS)
    {
        return ContentType::Reference;
    }

    ContentType::General
}

fn contains_any(s: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| s.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exploration_by_title() {
        assert_eq!(
            classify("Search results for rust", "https://example.com"),
            ContentType::Exploration
        );
        assert_eq!(
            classify("borrow checker - Stackoverflow", "https://example.com/q"),
            ContentType::Exploration
        );
    }

    #[test]
    fn test_exploration_by_url() {
        assert_eq!(
            classify("rust lifetimes", "https://www.google.com/search?q=rust"),
            ContentType::Exploration
        );
        assert_eq!(
            classify("r/rust", "https://old.reddit.com/r/rust"),
            ContentType::Exploration
        );
    }

    #[test]
    fn test_reference() {
        assert_eq!(
            classify("The Rust Book - Documentation", "https://example.com"),
            ContentType::Reference
        );
        assert_eq!(
            classify("Array", "https://developer.mozilla.org/en-US/docs/Web/JavaScript"),
            ContentType::Reference
        );
        assert_eq!(
            classify("serde", "https://docs.rs/serde"),
            ContentType::Reference
        );
    }

    #[test]
    fn test_exploration_wins_over_reference() {
        // matches both rule sets; exploration is checked first
        assert_eq!(
            classify("Search the docs", "https://example.com"),
            ContentType::Exploration
        );
    }

    #[test]
    fn test_general() {
        assert_eq!(
            classify("My Shopping Cart", "https://shop.example.com/cart"),
            ContentType::General
        );
        assert_eq!(classify("", ""), ContentType::General);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify("REDDIT front page", "https://example.com"),
            ContentType::Exploration
        );
        assert_eq!(
            classify("API Reference", "https://example.com"),
            ContentType::Reference
        );
    }
}
