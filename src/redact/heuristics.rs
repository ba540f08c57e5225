//! Heuristics for spotting secrets that never went through the vault.
//!
//! A candidate value is secret-like when its character distribution is
//! random enough (Shannon entropy) and it does not look like ordinary
//! structured content: array/object literals, URLs, paths, or text made
//! of short, numeric, acronym, or English-looking pieces.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::grammar::is_common_bigram;

/// Entropy (bits per character) at or above which a value is random-looking.
pub const ENTROPY_THRESHOLD: f64 = 3.0;

/// Minimum fraction of common bigrams for a segment to count as a word.
pub const WORD_LIKE_RATIO: f64 = 0.30;

/// Segments up to this many characters are too short to judge.
pub const SHORT_SEGMENT_MAX: usize = 3;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://\S*$").expect("static regex"));

static WINDOWS_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]:[\\/]").expect("static regex"));

/// Shannon entropy of the character distribution, in bits per character.
pub fn shannon_entropy(s: &str) -> f64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for c in s.chars() {
        *counts.entry(c).or_default() += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .values()
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Whether at least 30% of adjacent character pairs are common English
/// bigrams.
pub fn is_word_like(segment: &str) -> bool {
    let chars: Vec<char> = segment.to_lowercase().chars().collect();
    if chars.len() < 2 {
        return false;
    }

    let pairs = chars.len() - 1;
    let hits = chars
        .windows(2)
        .filter(|w| {
            let pair: String = w.iter().collect();
            is_common_bigram(&pair)
        })
        .count();

    hits as f64 / pairs as f64 >= WORD_LIKE_RATIO
}

/// Whether `candidate` looks like ordinary structured content.
pub fn looks_structured(candidate: &str) -> bool {
    is_collection_literal(candidate)
        || URL.is_match(candidate)
        || is_path(candidate)
        || is_made_of_plain_segments(candidate)
}

/// High entropy and not structured.
pub fn looks_like_secret(candidate: &str) -> bool {
    shannon_entropy(candidate) >= ENTROPY_THRESHOLD && !looks_structured(candidate)
}

fn is_collection_literal(s: &str) -> bool {
    (s.starts_with('[') && s.ends_with(']')) || (s.starts_with('{') && s.ends_with('}'))
}

fn is_path(s: &str) -> bool {
    s.starts_with('/')
        || s.starts_with("./")
        || s.starts_with("../")
        || s.starts_with("~/")
        || WINDOWS_PATH.is_match(s)
}

/// Split on anything non-alphanumeric; every piece must be short,
/// numeric, an acronym, or word-like.
fn is_made_of_plain_segments(s: &str) -> bool {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|seg| !seg.is_empty())
        .all(is_plain_segment)
}

fn is_plain_segment(seg: &str) -> bool {
    seg.chars().count() <= SHORT_SEGMENT_MAX
        || seg.chars().all(|c| c.is_ascii_digit())
        || seg.chars().all(|c| c.is_ascii_uppercase())
        || is_word_like(seg)
}
