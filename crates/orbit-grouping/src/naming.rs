//! Group naming
//!
//! Derives a short display name from member titles: dominant bigram first,
//! then the most frequent word, then the first member's hostname label.
//! A per-invocation allocator keeps names unique.

use std::collections::{HashMap, HashSet};

use orbit_core::TabDescriptor;
use url::Url;

/// Tokens never used in a group name: articles/prepositions and filler,
/// generic web terms, major brands.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "into", "your", "you", "are", "was", "were", "has",
    "have", "had", "this", "that", "these", "those", "how", "what", "when", "where", "why", "who",
    "not", "but", "all", "any", "can", "will", "about", "over", "under", "after", "before",
    "home", "page", "site", "web", "www", "com", "org", "net", "html", "http", "https", "online",
    "free", "new", "tab", "untitled", "login", "official", "website",
    "google", "youtube", "facebook", "twitter", "reddit", "amazon", "wikipedia", "github",
    "stackoverflow", "mozilla",
];

/// Normalized, filtered tokens of one title.
fn tokenize(title: &str) -> Vec<String> {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.len() > 2 && !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn title_case(phrase: &str) -> String {
    phrase.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Display label for a URL's hostname: strip a leading "www.", then take
/// the registrable label ("en.wikipedia.org" -> "Wikipedia", "github.com"
/// -> "Github"). `None` when the URL has no usable host.
pub fn host_label(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    let label = match labels.len() {
        0 => return None,
        1 => labels[0],
        n => labels[n - 2],
    };
    Some(capitalize(label))
}

/// Highest-count entry; equal counts resolve to the first-seen one.
fn top_entry(counts: &HashMap<String, (usize, usize)>) -> Option<String> {
    counts
        .iter()
        .max_by(|a, b| (a.1 .0).cmp(&b.1 .0).then((b.1 .1).cmp(&a.1 .1)))
        .map(|(key, _)| key.clone())
}

/// Derive a display name for a set of member tabs.
pub fn derive_name(members: &[&TabDescriptor]) -> String {
    let tokenized: Vec<Vec<String>> = members.iter().map(|t| tokenize(&t.title)).collect();

    // (count, first-seen order) per word/bigram, plus per-member bigram coverage
    let mut word_counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut bigram_counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut bigram_members: HashMap<String, HashSet<usize>> = HashMap::new();
    let mut order = 0usize;

    for (member, tokens) in tokenized.iter().enumerate() {
        for word in tokens {
            let entry = word_counts.entry(word.clone()).or_insert((0, order));
            entry.0 += 1;
            order += 1;
        }
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            let entry = bigram_counts.entry(bigram.clone()).or_insert((0, order));
            entry.0 += 1;
            bigram_members.entry(bigram).or_default().insert(member);
            order += 1;
        }
    }

    // a bigram must cover at least half the member titles
    let needed = members.len().div_ceil(2);
    if let Some(bigram) = top_entry(&bigram_counts) {
        let coverage = bigram_members.get(&bigram).map_or(0, HashSet::len);
        if coverage >= needed {
            return title_case(&bigram);
        }
    }

    if let Some(word) = top_entry(&word_counts) {
        return title_case(&word);
    }

    members
        .first()
        .and_then(|t| host_label(&t.url))
        .unwrap_or_else(|| "Group".to_string())
}

/// Hands out unique display names within one invocation.
///
/// On collision the strategy suffix is tried first, then a numeric marker.
#[derive(Default)]
pub struct NameAllocator {
    used: HashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, base: String, suffix: Option<&str>) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }

        if let Some(suffix) = suffix {
            let candidate = format!("{base}{suffix}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }

        let mut n = 2;
        loop {
            let candidate = format!("{base} ({n})");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
